use super::{
    roller::Roller,
    rule::{Pattern, Rule},
    RResult, RollContext,
};
use crate::common::{parse_uint, UInt};
use crate::error::RollError;
use crate::scan::{find_group, is_integer, scan};
use tracing::{debug, trace};

/// Outcome of a single reduction pass.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Pass {
    /// `Pattern` matched and its leftmost match was substituted.
    Reduced(Pattern),
    /// The buffer is a single integer; nothing was changed.
    Done,
    /// No pattern matches and the buffer is not an integer.
    Stuck,
}

/// Applies the first rule in priority order that matches anywhere in
/// `buffer`, replacing only its leftmost match.
pub fn reduce_once<R: Roller>(buffer: &mut String, ctx: &mut RollContext<R>) -> RResult<Pass> {
    let tokens = scan(buffer);
    if is_integer(&tokens) {
        return Ok(Pass::Done);
    }

    for pattern in Pattern::PRIORITY {
        if let Some(m) = pattern.locate(buffer, &tokens) {
            let value = pattern.substitute(m.text, ctx)?;
            trace!(rule = %pattern, matched = m.text, %value, "substituting");
            let span = m.span;
            buffer.replace_range(span, &value);
            trace!(%buffer, "reduced");
            return Ok(Pass::Reduced(pattern));
        }
    }
    Ok(Pass::Stuck)
}

/// Reduces a parenthesis-free buffer until it is a single integer.
pub fn reduce_to_integer<R: Roller>(buffer: &str, ctx: &mut RollContext<R>) -> RResult<UInt> {
    let mut buffer = buffer.to_owned();
    loop {
        match reduce_once(&mut buffer, ctx)? {
            Pass::Reduced(_) => {}
            Pass::Done => return parse_uint(&buffer).map_err(|_| RollError::Overflow),
            Pass::Stuck => return Err(RollError::syntax(buffer)),
        }
    }
}

/// Replaces every innermost parenthesized group, leftmost first, with the
/// integer its contents reduce to. Unmatched parentheses are left in place.
pub fn resolve_parentheses<R: Roller>(
    buffer: &mut String,
    ctx: &mut RollContext<R>,
) -> RResult<()> {
    while let Some(span) = find_group(&scan(buffer)) {
        let inner = &buffer[span.start + 1..span.end - 1];
        let value = reduce_to_integer(inner, ctx)?;
        debug!(group = &buffer[span.clone()], value, "resolved group");
        buffer.replace_range(span, &value.to_string());
    }
    Ok(())
}

pub(crate) fn evaluate<R: Roller>(instruction: &str, ctx: &mut RollContext<R>) -> RResult<UInt> {
    let mut buffer = instruction.replace('"', "");
    resolve_parentheses(&mut buffer, ctx)?;
    let total = reduce_to_integer(&buffer, ctx)?;
    debug!(instruction, total, rolls = ctx.rolls(), "evaluated");
    Ok(total)
}
