//! Tokenizes an expression buffer so rules can locate their matches by span.
//!
//! Nothing is skipped: whitespace and any other unrecognized character come
//! out as [`TokenKind::Error`], which no rule ever matches.

use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    #[regex(r"[0-9]+")]
    Integer,
    #[token("d")]
    Die,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[error]
    Error,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

pub fn scan(s: &str) -> Vec<Token> {
    TokenKind::lexer(s)
        .spanned()
        .map(|(kind, span)| Token { kind, span })
        .collect()
}

/// Byte span of the first `(...)` group with no parenthesis inside it,
/// delimiters included.
pub fn find_group(tokens: &[Token]) -> Option<Range<usize>> {
    let mut open = None;
    for token in tokens {
        match token.kind {
            TokenKind::LeftParen => open = Some(token.span.start),
            TokenKind::RightParen => {
                if let Some(start) = open {
                    return Some(start..token.span.end);
                }
            }
            _ => {}
        }
    }
    None
}

pub fn is_integer(tokens: &[Token]) -> bool {
    matches!(tokens, [Token { kind: TokenKind::Integer, .. }])
}
