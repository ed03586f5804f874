mod ctx;
mod engine;
mod roller;
mod rule;

use crate::error::RollError;

type RResult<T> = Result<T, RollError>;

pub use ctx::{DefaultRoller, RollContext};
pub use engine::{reduce_once, reduce_to_integer, resolve_parentheses, Pass};
pub use roller::Roller;
pub use rule::{
    Addition, DiceRoll, Division, Match, Multiplication, Pattern, Rule, Subtraction,
};
