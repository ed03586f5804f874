use std::fmt;
use std::num::{IntErrorKind, NonZeroU64, ParseIntError};
use std::str::FromStr;

pub type UInt = u64;
pub type NonZeroUInt = NonZeroU64;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    pub const fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

/// A dice token `NdS`: roll an `S`-sided die `N` times and sum.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dice {
    pub num: UInt,
    pub sides: NonZeroUInt,
}

impl Dice {
    pub const fn new(num: UInt, sides: NonZeroUInt) -> Self {
        Self { num, sides }
    }

}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.num, self.sides)
    }
}

impl FromStr for Dice {
    type Err = ParseDiceError;

    /// An empty or zero count means a single die.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num, sides) = s.split_once('d').ok_or(ParseDiceError::NoDelimiter)?;
        let num = if num.is_empty() {
            1
        } else {
            match num.parse::<UInt>().map_err(ParseDiceError::InvalidNum)? {
                0 => 1,
                n => n,
            }
        };
        let sides: UInt = sides.parse().map_err(ParseDiceError::InvalidSides)?;
        let sides = NonZeroUInt::new(sides).ok_or(ParseDiceError::ZeroSides)?;
        Ok(Self::new(num, sides))
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseDiceError {
    #[error("cannot parse string as dice without 'd' delimiter")]
    NoDelimiter,
    #[error("invalid dice count: {0}")]
    InvalidNum(ParseIntError),
    #[error("invalid number of sides: {0}")]
    InvalidSides(ParseIntError),
    #[error("dice must have at least one side")]
    ZeroSides,
}

pub(crate) fn is_overflow(err: &ParseIntError) -> bool {
    matches!(err.kind(), IntErrorKind::PosOverflow)
}

/// Parses a run of ASCII digits, as found by the scanner.
pub(crate) fn parse_uint(s: &str) -> Result<UInt, ParseIntError> {
    s.parse()
}
