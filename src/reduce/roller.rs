use crate::common::{NonZeroUInt, UInt};
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// Source of die faces. Every draw is uniform on `1..=sides`.
pub trait Roller {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;

    /// Sum of `num` independent draws, or `None` if it overflows.
    fn roll_sum(&mut self, num: usize, sides: NonZeroUInt) -> Option<UInt> {
        (0..num).try_fold(0, |sum: UInt, _| sum.checked_add(self.roll(sides)))
    }
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }

    fn roll_sum(&mut self, num: usize, sides: NonZeroUInt) -> Option<UInt> {
        Uniform::new_inclusive(1, sides.get())
            .sample_iter(self)
            .take(num)
            .try_fold(0, |sum: UInt, x| sum.checked_add(x))
    }
}

/// Replays a fixed list of faces in a loop. A face larger than the die
/// wraps around into `1..=sides`.
#[cfg(test)]
pub(crate) struct CycleRoller {
    faces: Vec<UInt>,
    next: usize,
}

#[cfg(test)]
impl CycleRoller {
    pub fn new(faces: &[UInt]) -> Self {
        assert!(faces.iter().all(|&x| x > 0), "faces start at 1");
        Self {
            faces: faces.to_vec(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl Roller for CycleRoller {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        (face - 1) % sides.get() + 1
    }
}
