use super::{engine, roller::Roller, RResult};
use crate::common::{Dice, UInt};
use crate::error::RollError;

pub type DefaultRoller = rand::prelude::ThreadRng;

pub struct RollContext<R = DefaultRoller> {
    max_rolls: Option<UInt>,
    rolls: UInt,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(max_rolls: Option<UInt>, roller: R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
        }
    }

    pub fn new_bounded(max_rolls: UInt, roller: R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    /// Dice drawn since the last evaluation started.
    pub fn rolls(&self) -> UInt {
        self.rolls
    }

    pub fn reset(&mut self) {
        self.rolls = 0;
    }

    fn count_rolls(&mut self, n: UInt) -> RResult<()> {
        let rolls = self.rolls.checked_add(n).ok_or(RollError::TooManyRolls)?;
        if self.max_rolls.map_or(false, |max| rolls > max) {
            Err(RollError::TooManyRolls)
        } else {
            self.rolls = rolls;
            Ok(())
        }
    }

    /// Sums `dice.num` draws of a `dice.sides`-sided die.
    pub fn roll_dice(&mut self, dice: Dice) -> RResult<UInt> {
        let num = usize::try_from(dice.num).map_err(|_| RollError::TooManyRolls)?;
        self.count_rolls(dice.num)?;
        let total = match num {
            1 => Some(self.roller.roll(dice.sides)),
            _ => self.roller.roll_sum(num, dice.sides),
        };
        total.ok_or(RollError::Overflow)
    }

    /// Reduces `instruction` to a single integer, rolling dice as they are
    /// reached.
    pub fn evaluate(&mut self, instruction: &str) -> RResult<UInt> {
        self.reset();
        engine::evaluate(instruction, self)
    }
}

/// Draws from `thread_rng` with no roll budget.
impl Default for RollContext {
    fn default() -> Self {
        Self::new_unbounded(rand::thread_rng())
    }
}
