//! Display and Debug formatting for operands

use super::{Operand, OperandKind};
use std::fmt;

/// Where an operand is being written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    None,     // Top level or directly inside an invert
    Compound, // Inside a product or sum
}

impl Operand {
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, ctx: OpContext) -> fmt::Result {
        match self.kind() {
            OperandKind::Unresolved(identifier) => write!(f, "{}", identifier),
            OperandKind::Resolved(value) => write!(f, "{}", if *value { "1" } else { "0" }),
            OperandKind::Invert(child) => {
                write!(f, "!(")?;
                child.fmt_with_context(f, OpContext::None)?;
                write!(f, ")")
            }
            OperandKind::Product(children) => fmt_joined(f, children, " && ", ctx),
            OperandKind::Sum(children) => fmt_joined(f, children, " || ", ctx),
        }
    }
}

fn fmt_joined<'a, I>(
    f: &mut fmt::Formatter<'_>,
    children: I,
    separator: &str,
    ctx: OpContext,
) -> fmt::Result
where
    I: IntoIterator<Item = &'a Operand>,
{
    let needs_parens = ctx == OpContext::Compound;
    if needs_parens {
        write!(f, "(")?;
    }
    for (i, child) in children.into_iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        child.fmt_with_context(f, OpContext::Compound)?;
    }
    if needs_parens {
        write!(f, ")")?;
    }
    Ok(())
}

/// Canonical textual form
///
/// - identifiers print verbatim, constants as `0` and `1`
/// - an invert always prints as `!(child)`
/// - product children are joined by ` && `, sum children by ` || `
/// - a product or sum nested in another product or sum is parenthesized
///
/// Children appear in canonical order, so equal operands print identically.
///
/// # Examples
///
/// ```
/// use sop_logic::Operand;
///
/// let a = Operand::unresolved("a");
/// let b = Operand::unresolved("b");
/// let c = Operand::unresolved("c");
///
/// let expr = Operand::sum([Operand::product([b, c]), a.clone()]);
/// assert_eq!(expr.to_string(), "a || (b && c)");
/// assert_eq!(Operand::invert(expr).to_string(), "!(a || (b && c))");
/// ```
impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, OpContext::None)
    }
}

/// Debug formatting
///
/// Prints the same canonical text as `Display`, so assertion failures read as
/// formulas rather than nested node dumps.
impl fmt::Debug for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, OpContext::None)
    }
}
