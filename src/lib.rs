//! # Sum-of-Products Logic
//!
//! This crate represents propositional formulas as immutable operand trees and
//! reduces them to a minimised sum-of-products (disjunctive normal) form.
//!
//! ## Overview
//!
//! An [`Operand`] is one of five variants: a free variable, a constant, an
//! inversion, a product (AND) or a sum (OR). Operands are totally ordered, so
//! formulas built from the same parts in any order compare equal and the
//! children of a product or sum are kept in one canonical order.
//!
//! The reduction pipeline has three stages:
//!
//! - [`substitute`](Operand::substitute) replaces a variable with another operand
//! - [`simplify`](Operand::simplify) folds constants, removes double negations
//!   and flattens nested products and sums
//! - [`reduce`](Operand::reduce) simplifies bottom-up, pushes inversions inward,
//!   distributes products over sums and removes redundant products
//!
//! ## Building Operands
//!
//! Use the constructors directly, the operator overloads, or the [`operand!`]
//! macro:
//!
//! ```
//! use sop_logic::{operand, Operand};
//!
//! let a = Operand::unresolved("a");
//! let b = Operand::unresolved("b");
//! let c = Operand::unresolved("c");
//!
//! let explicit = Operand::sum([
//!     Operand::product([a.clone(), b.clone()]),
//!     Operand::invert(c.clone()),
//! ]);
//! let operators = &(&a * &b) + &!&c;
//! let from_macro = operand!(a * b + !c);
//!
//! assert_eq!(explicit, operators);
//! assert_eq!(explicit, from_macro);
//! assert_eq!(explicit.to_string(), "!(c) || (a && b)");
//! ```
//!
//! ## Reducing
//!
//! ```
//! use sop_logic::operand;
//!
//! # fn main() -> Result<(), sop_logic::ReduceError> {
//! // (a + b) * (a + c) == a + b * c
//! let expr = operand!(("a" + "b") * ("a" + "c"));
//! let reduced = expr.reduce()?;
//!
//! assert_eq!(reduced.to_string(), "(a) || (b && c)");
//! assert!(reduced.equivalent_to(&expr));
//!
//! // Reduction is idempotent
//! assert_eq!(reduced.reduce()?, reduced);
//! # Ok(())
//! # }
//! ```
//!
//! ## Substitution
//!
//! ```
//! use sop_logic::Operand;
//!
//! # fn main() -> Result<(), sop_logic::ReduceError> {
//! let test = Operand::invert(Operand::unresolved("test"));
//! let assigned = test.substitute("test", &Operand::resolved(false));
//!
//! assert_eq!(assigned.to_string(), "!(0)");
//! assert_eq!(assigned.simplify(), Operand::resolved(true));
//! # Ok(())
//! # }
//! ```
//!
//! ## Memoisation and Thread Safety
//!
//! Operands are `Send + Sync` and can be shared freely between threads.
//! [`Operand::reduce`] memoises results in a process-wide table that lives
//! while some [`Reducer`] handle holds it. Use [`Reducer::with_config`] for a
//! private table or to switch individual rules off with a [`ReduceConfig`].
//!
//! ```
//! use sop_logic::{operand, ReduceConfig, Reducer};
//! use std::thread;
//!
//! # fn main() -> Result<(), sop_logic::ReduceError> {
//! let reducer = Reducer::with_config(ReduceConfig::new());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let reducer = reducer.clone();
//!         thread::spawn(move || reducer.reduce(&operand!(!("x" * "y"))))
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     let reduced = handle.join().unwrap()?;
//!     assert_eq!(reduced.to_string(), "(!(x)) || (!(y))");
//! }
//! # Ok(())
//! # }
//! ```

pub mod dnf;
pub mod error;
pub mod minimize;
mod operand;
mod reduce;

pub use dnf::Dnf;
pub use error::{ReduceError, Stage};
pub use operand::{Operand, OperandKind, OperandNode, OperandSet, OperandType};
pub use reduce::Reducer;

/// Build an [`Operand`] from a boolean expression
///
/// | Syntax | Meaning |
/// |---|---|
/// | `!x`, `~x` | [`Operand::invert`] |
/// | `x * y`, `x & y` | [`Operand::product`] |
/// | `x + y`, `x \| y` | [`Operand::sum`] |
/// | `0`, `1`, `true`, `false` | [`Operand::resolved`] |
/// | `"name"` | [`Operand::unresolved`] |
/// | `name` | a clone of the `Operand` bound to `name` |
///
/// NOT binds tighter than AND, which binds tighter than OR. A chain of one
/// operator builds a single product or sum with all operands as children.
///
/// ```
/// use sop_logic::{operand, Operand};
///
/// let a = Operand::unresolved("a");
/// let expr = operand!(a * "b" * "c");
/// assert_eq!(expr.children().map(|children| children.len()), Some(3));
/// ```
pub use sop_logic_macros::operand;

/// Configuration for reduction
///
/// # Examples
///
/// ```
/// use sop_logic::{operand, ReduceConfig};
///
/// # fn main() -> Result<(), sop_logic::ReduceError> {
/// let expr = operand!("a" + !"a");
///
/// let config = ReduceConfig {
///     detect_complements: false,
///     ..ReduceConfig::default()
/// };
/// assert_eq!(expr.reduce_with_config(&config)?.to_string(), "(a) || (!(a))");
/// assert_eq!(expr.reduce()?.to_string(), "1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceConfig {
    /// Record reduction results in the reducer's memo table
    pub memoize: bool,
    /// Merge opposite products and drop contradictory ones during
    /// minimisation; when off, only absorption is applied
    pub detect_complements: bool,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        ReduceConfig {
            memoize: true,
            detect_complements: true,
        }
    }
}

impl ReduceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ReduceConfig::new();
        assert!(config.memoize);
        assert!(config.detect_complements);
        assert_eq!(config, ReduceConfig::default());
    }

    #[test]
    fn test_operand_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Operand>();
        assert_send_sync::<Reducer>();
        assert_send_sync::<Dnf>();
    }
}
