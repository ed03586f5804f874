use super::{roller::Roller, RResult, RollContext};
use crate::common::{parse_uint, BinaryOperator, Dice, UInt};
use crate::error::RollError;
use crate::scan::{Token, TokenKind};
use std::fmt;
use std::ops::Range;
use tracing::trace;

/// An occurrence of a rule's pattern in the buffer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Match<'a> {
    pub span: Range<usize>,
    pub text: &'a str,
}

#[enum_dispatch::enum_dispatch]
pub trait Rule {
    fn name(&self) -> &'static str;

    /// Byte span of the leftmost occurrence of this rule's pattern.
    fn find(&self, tokens: &[Token]) -> Option<Range<usize>>;

    /// Computes the text that replaces `text`, a span returned by `find`.
    fn substitute<R: Roller>(&self, text: &str, ctx: &mut RollContext<R>) -> RResult<String>;
}

/// One substitution rule. Rules are tried in [`Pattern::PRIORITY`] order and
/// the first with any match anywhere in the buffer wins, regardless of where
/// other rules would match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[enum_dispatch::enum_dispatch(Rule)]
pub enum Pattern {
    DiceRoll(DiceRoll),
    Multiplication(Multiplication),
    Division(Division),
    Addition(Addition),
    Subtraction(Subtraction),
}

impl Pattern {
    pub const PRIORITY: [Pattern; 5] = [
        Pattern::DiceRoll(DiceRoll),
        Pattern::Multiplication(Multiplication),
        Pattern::Division(Division),
        Pattern::Addition(Addition),
        Pattern::Subtraction(Subtraction),
    ];

    pub fn locate<'a>(&self, buffer: &'a str, tokens: &[Token]) -> Option<Match<'a>> {
        self.find(tokens).map(|span| Match {
            text: &buffer[span.clone()],
            span,
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `[digits] 'd' digits`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DiceRoll;

impl Rule for DiceRoll {
    fn name(&self) -> &'static str {
        "dice roll"
    }

    fn find(&self, tokens: &[Token]) -> Option<Range<usize>> {
        let i = tokens.windows(2).position(|w| {
            w[0].kind == TokenKind::Die && w[1].kind == TokenKind::Integer
        })?;
        let start = match i.checked_sub(1).map(|j| &tokens[j]) {
            Some(num) if num.kind == TokenKind::Integer => num.span.start,
            _ => tokens[i].span.start,
        };
        Some(start..tokens[i + 1].span.end)
    }

    fn substitute<R: Roller>(&self, text: &str, ctx: &mut RollContext<R>) -> RResult<String> {
        let dice: Dice = text.parse().map_err(|e| RollError::from_dice(e, text))?;
        let total = ctx.roll_dice(dice)?;
        trace!(%dice, total, "rolled");
        Ok(total.to_string())
    }
}

fn find_binary(tokens: &[Token], op: TokenKind) -> Option<Range<usize>> {
    tokens.windows(3).find_map(|w| match w {
        [l, o, r] if l.kind == TokenKind::Integer && o.kind == op && r.kind == TokenKind::Integer => {
            Some(l.span.start..r.span.end)
        }
        _ => None,
    })
}

fn operands(text: &str, op: BinaryOperator) -> RResult<(UInt, UInt)> {
    let (l, r) = text
        .split_once(op.as_char())
        .ok_or_else(|| RollError::syntax(text))?;
    let parse = |s: &str| parse_uint(s).map_err(|_| RollError::Overflow);
    Ok((parse(l)?, parse(r)?))
}

macro_rules! binary_rule {
    ($($name:ident($op:ident, $token:ident, $disp:literal) => $apply:ident),+ $(,)?) => {$(
        #[doc = concat!("`digits '", $disp, "' digits`")]
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        pub struct $name;

        impl Rule for $name {
            fn name(&self) -> &'static str {
                stringify!($apply)
            }

            fn find(&self, tokens: &[Token]) -> Option<Range<usize>> {
                find_binary(tokens, TokenKind::$token)
            }

            fn substitute<R: Roller>(&self, text: &str, _: &mut RollContext<R>) -> RResult<String> {
                let (l, r) = operands(text, BinaryOperator::$op)?;
                $apply(l, r)
            }
        }
    )+};
}

binary_rule!(
    Multiplication(Mul, Star, "*") => multiply,
    Division(Div, Slash, "/") => divide,
    Addition(Add, Plus, "+") => add,
    Subtraction(Sub, Minus, "-") => subtract,
);

fn multiply(l: UInt, r: UInt) -> RResult<String> {
    l.checked_mul(r)
        .map(|x| x.to_string())
        .ok_or(RollError::Overflow)
}

/// Truncating division.
fn divide(l: UInt, r: UInt) -> RResult<String> {
    l.checked_div(r)
        .map(|x| x.to_string())
        .ok_or(RollError::ZeroDivision)
}

fn add(l: UInt, r: UInt) -> RResult<String> {
    l.checked_add(r)
        .map(|x| x.to_string())
        .ok_or(RollError::Overflow)
}

/// A negative difference is written with its sign. No rule consumes a `-`
/// without a number before it, so such a buffer never reduces further.
fn subtract(l: UInt, r: UInt) -> RResult<String> {
    Ok(if l >= r {
        (l - r).to_string()
    } else {
        format!("-{}", r - l)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::roller::CycleRoller;
    use crate::scan::scan;

    fn ctx() -> RollContext<CycleRoller> {
        RollContext::new_bounded(1000, CycleRoller::new(&[4, 2, 6, 1, 5, 3]))
    }

    fn located(pattern: Pattern, s: &str) -> Option<&str> {
        pattern.locate(s, &scan(s)).map(|m| m.text)
    }

    fn apply(pattern: Pattern, text: &str) -> RResult<String> {
        pattern.substitute(text, &mut ctx())
    }

    const DICE: Pattern = Pattern::DiceRoll(DiceRoll);
    const MUL: Pattern = Pattern::Multiplication(Multiplication);
    const DIV: Pattern = Pattern::Division(Division);
    const ADD: Pattern = Pattern::Addition(Addition);
    const SUB: Pattern = Pattern::Subtraction(Subtraction);

    #[test]
    fn test_find_dice() {
        assert_eq!(located(DICE, "d6"), Some("d6"));
        assert_eq!(located(DICE, "8d6"), Some("8d6"));
        assert_eq!(located(DICE, "8d6/d7"), Some("8d6"));
        assert_eq!(located(DICE, "2*d7"), Some("d7"));
        assert_eq!(located(DICE, "3dd6"), Some("d6"));
        assert_eq!(located(DICE, "4d"), None);
        assert_eq!(located(DICE, "4D6"), None);
    }

    #[test]
    fn test_find_binary() {
        assert_eq!(located(MUL, "1000-7+252/9*14"), Some("9*14"));
        assert_eq!(located(DIV, "1000-7+252/9*14"), Some("252/9"));
        assert_eq!(located(ADD, "1000-7+252/9*14"), Some("7+252"));
        assert_eq!(located(SUB, "1000-7+252/9*14"), Some("1000-7"));
        assert_eq!(located(MUL, "2*3*4"), Some("2*3"));
        assert_eq!(located(ADD, "1 + 2"), None);
        assert_eq!(located(SUB, "-2"), None);
        assert_eq!(located(SUB, "5--4"), None);
    }

    #[test]
    fn test_match_span() {
        let s = "d4*(5d5-4)+10";
        let m = SUB.locate(s, &scan(s)).unwrap();
        assert_eq!(m, Match { span: 6..9, text: "5-4" });
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(apply(MUL, "7*11"), Ok("77".to_owned()));
        assert_eq!(apply(DIV, "10/2"), Ok("5".to_owned()));
        assert_eq!(apply(DIV, "7/2"), Ok("3".to_owned()));
        assert_eq!(apply(ADD, "7+5"), Ok("12".to_owned()));
        assert_eq!(apply(SUB, "7-5"), Ok("2".to_owned()));
        assert_eq!(apply(SUB, "3-5"), Ok("-2".to_owned()));
    }

    #[test]
    fn test_arithmetic_errors() {
        assert_eq!(apply(DIV, "7/0"), Err(RollError::ZeroDivision));
        assert_eq!(apply(MUL, "18446744073709551615*2"), Err(RollError::Overflow));
        assert_eq!(apply(ADD, "18446744073709551615+1"), Err(RollError::Overflow));
        assert_eq!(apply(ADD, "99999999999999999999999+1"), Err(RollError::Overflow));
    }

    #[test]
    fn test_dice_roll() {
        assert_eq!(apply(DICE, "d6"), Ok("4".to_owned()));
        assert_eq!(apply(DICE, "0d6"), Ok("4".to_owned()));
        assert_eq!(apply(DICE, "3d6"), Ok((4 + 2 + 6).to_string()));
        assert_eq!(apply(DICE, "2d0"), Err(RollError::syntax("2d0")));
    }

    #[test]
    fn test_priority_order() {
        let names: Vec<_> = Pattern::PRIORITY.iter().map(|p| p.to_string()).collect();
        assert_eq!(names, ["dice roll", "multiply", "divide", "add", "subtract"]);
    }
}
