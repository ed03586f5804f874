//! Evaluates dice notation such as `(5d5-4)d(16/d4)+3` to a single integer.
//!
//! An expression is reduced as text. Parenthesized groups are replaced by
//! their values innermost first, then one substitution is applied per pass
//! until only an integer is left. Each pass takes the first rule in the order
//! dice roll, `*`, `/`, `+`, `-` that matches anywhere, so
//! `1000-7+252/9*14` computes `9*14` before `252/9`.
//!
//! ```rust
//! # use dice_roll::{evaluate, evaluate_with, RollContext};
//! # use rand::{rngs::StdRng, SeedableRng};
//! #
//! # fn main() -> Result<(), dice_roll::RollError> {
//! assert_eq!(evaluate("1000-7+252/9*14")?, 991);
//!
//! let total = evaluate("(5d5-4)*4")?;
//! assert!((4..=84).contains(&total));
//!
//! // Use a custom Rng that implements the rand::Rng trait
//! let mut ctx = RollContext::new_bounded(100, StdRng::seed_from_u64(1));
//! let total = evaluate_with("3d6+2", &mut ctx)?;
//! assert!((5..=20).contains(&total));
//! # Ok(())
//! # }
//! ```

mod common;
mod error;
mod reduce;
pub mod scan;

pub use common::{BinaryOperator, Dice, NonZeroUInt, ParseDiceError, UInt};
pub use error::RollError;
pub use reduce::*;

/// Evaluates `instruction` with a thread-local rng and no limit on the
/// number of dice rolled. Double quotes are ignored.
pub fn evaluate(instruction: &str) -> Result<UInt, RollError> {
    RollContext::new_unbounded(rand::thread_rng()).evaluate(instruction)
}

/// Evaluates `instruction` with the roller and roll budget of `ctx`.
pub fn evaluate_with<R: Roller>(
    instruction: &str,
    ctx: &mut RollContext<R>,
) -> Result<UInt, RollError> {
    ctx.evaluate(instruction)
}

/// Sums `count` rolls of a `sides`-sided die.
pub fn roll(sides: UInt, count: UInt) -> Result<UInt, RollError> {
    let sides = NonZeroUInt::new(sides).ok_or(RollError::ZeroSides)?;
    RollContext::new_unbounded(rand::thread_rng()).roll_dice(Dice::new(count, sides))
}
