//! Error types for operand reduction
//!
//! Every transformation in this crate is total over well-formed operand trees.
//! The only failures are internal-consistency faults: a pass meets a shape that
//! an earlier pass should have made impossible. These are surfaced as
//! [`ReduceError`].

use std::fmt;
use std::io;
use std::sync::Arc;

/// The pipeline stage in which a malformed term was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Expansion of a single operand to sum-of-products form
    Expansion,
    /// Distribution of a product over pending sums
    Distribution,
    /// Gathering and minimising the product terms of a sum
    Minimization,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Expansion => write!(f, "expansion"),
            Stage::Distribution => write!(f, "distribution"),
            Stage::Minimization => write!(f, "minimization"),
        }
    }
}

/// Internal-consistency faults raised by [`Operand::expand`] and [`Operand::reduce`]
///
/// Each variant names the invariant that was violated and carries the rendered
/// operand that violated it.
///
/// [`Operand::expand`]: crate::Operand::expand
/// [`Operand::reduce`]: crate::Operand::reduce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    /// An inversion of a constant reached expansion
    ///
    /// Simplification folds `!(0)` and `!(1)`; expanding one means `expand` was
    /// called on an operand that was never simplified.
    InvertedConstant {
        /// The offending invert operand
        operand: Arc<str>,
    },

    /// A double negation reached expansion
    ///
    /// Simplification removes `!(!(x))`; expanding one means `expand` was called
    /// on an operand that was never simplified.
    DoubleNegation {
        /// The offending invert operand
        operand: Arc<str>,
    },

    /// A term that is not a product of literals was found where one is required
    MalformedTerm {
        /// Where the term was found
        stage: Stage,
        /// The offending term
        operand: Arc<str>,
    },
}

impl ReduceError {
    pub(crate) fn malformed(stage: Stage, operand: &crate::Operand) -> Self {
        ReduceError::MalformedTerm {
            stage,
            operand: Arc::from(operand.to_string()),
        }
    }
}

impl fmt::Display for ReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceError::InvertedConstant { operand } => write!(
                f,
                "Inverted constant {} reached expansion; operand was not simplified first",
                operand
            ),
            ReduceError::DoubleNegation { operand } => write!(
                f,
                "Double negation {} reached expansion; operand was not simplified first",
                operand
            ),
            ReduceError::MalformedTerm { stage, operand } => write!(
                f,
                "Expected a product of literals during {}, found {}",
                stage, operand
            ),
        }
    }
}

impl std::error::Error for ReduceError {}

impl From<ReduceError> for io::Error {
    fn from(err: ReduceError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Operand;

    #[test]
    fn test_inverted_constant_message() {
        let err = ReduceError::InvertedConstant {
            operand: Arc::from("!(0)"),
        };
        let msg = err.to_string();
        assert!(msg.contains("!(0)"));
        assert!(msg.contains("not simplified"));
    }

    #[test]
    fn test_malformed_term_names_stage() {
        let a = Operand::unresolved("a");
        let err = ReduceError::malformed(Stage::Distribution, &a);
        assert_eq!(
            err,
            ReduceError::MalformedTerm {
                stage: Stage::Distribution,
                operand: Arc::from("a"),
            }
        );
        assert!(err.to_string().contains("during distribution"));
    }

    #[test]
    fn test_reduce_error_to_io_error() {
        let err = ReduceError::DoubleNegation {
            operand: Arc::from("!(!(a))"),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
