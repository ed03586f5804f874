use crate::common::{is_overflow, ParseDiceError};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RollError {
    #[error("invalid syntax: cannot reduce {buffer:?} to an integer")]
    Syntax { buffer: String },
    #[error("cannot divide by zero")]
    ZeroDivision,
    #[error("dice must have at least one side")]
    ZeroSides,
    #[error("integer overflow")]
    Overflow,
    #[error("too many dice rolled")]
    TooManyRolls,
}

impl RollError {
    pub fn syntax(buffer: impl Into<String>) -> Self {
        Self::Syntax {
            buffer: buffer.into(),
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    /// Maps a failure to read the dice token `text` found in the buffer.
    /// A zero-sided die in the buffer cannot be reduced, so it is a syntax
    /// error; [`RollError::ZeroSides`] is left to direct rolls.
    pub(crate) fn from_dice(err: ParseDiceError, text: &str) -> Self {
        match err {
            ParseDiceError::InvalidNum(e) | ParseDiceError::InvalidSides(e) if is_overflow(&e) => {
                Self::Overflow
            }
            _ => Self::syntax(text),
        }
    }
}
