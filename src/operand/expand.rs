//! Expansion to sum-of-products form

use super::{Operand, OperandKind, OperandSet};
use crate::error::{ReduceError, Stage};
use crate::minimize::{minimize_terms, Minimized};
use crate::ReduceConfig;
use log::trace;

impl Operand {
    /// Expand a simplified operand to minimised sum-of-products form
    ///
    /// Uses the default [`ReduceConfig`]. See [`expand_with_config`] for the
    /// rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use sop_logic::Operand;
    ///
    /// # fn main() -> Result<(), sop_logic::ReduceError> {
    /// let a = Operand::unresolved("a");
    /// let b = Operand::unresolved("b");
    ///
    /// // !(a && b) -> !(a) || !(b)
    /// let expr = Operand::invert(Operand::product([a, b]));
    /// assert_eq!(expr.expand()?.to_string(), "(!(a)) || (!(b))");
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// [`expand_with_config`]: Operand::expand_with_config
    pub fn expand(&self) -> Result<Operand, ReduceError> {
        self.expand_with_config(&ReduceConfig::default())
    }

    /// Expand a simplified operand to minimised sum-of-products form
    ///
    /// The result is a constant, a literal, or a sum whose children are all
    /// products of literals:
    ///
    /// - an inverted product or sum is pushed inward with De Morgan's laws
    /// - a product distributes over the sums among its children; the literal
    ///   children form one leading product, and each distribution step is
    ///   minimised before the next one
    /// - a sum lifts the products of its expanded children to its own level and
    ///   minimises them (see [`crate::minimize`])
    ///
    /// Products always expand to a sum or a constant, never to a bare product.
    ///
    /// # Errors
    ///
    /// The operand must have been simplified first. Expanding `!(0)`, `!(1)` or
    /// `!(!(x))` returns [`ReduceError::InvertedConstant`] or
    /// [`ReduceError::DoubleNegation`]; [`Operand::reduce`] never does this.
    pub fn expand_with_config(&self, config: &ReduceConfig) -> Result<Operand, ReduceError> {
        match self.kind() {
            OperandKind::Unresolved(_) | OperandKind::Resolved(_) => Ok(self.clone()),
            OperandKind::Invert(child) => expand_invert(self, child, config),
            OperandKind::Product(children) => expand_product(children, config),
            OperandKind::Sum(children) => expand_sum(children, config),
        }
    }
}

fn expand_invert(
    node: &Operand,
    child: &Operand,
    config: &ReduceConfig,
) -> Result<Operand, ReduceError> {
    match child.kind() {
        OperandKind::Unresolved(_) => Ok(node.clone()),
        OperandKind::Resolved(_) => Err(ReduceError::InvertedConstant {
            operand: node.to_string().into(),
        }),
        OperandKind::Invert(_) => Err(ReduceError::DoubleNegation {
            operand: node.to_string().into(),
        }),
        // !(a && b) == !(a) || !(b)
        OperandKind::Product(children) => {
            Operand::sum(children.iter().cloned().map(Operand::invert))
                .simplify()
                .expand_with_config(config)
        }
        // !(a || b) == !(a) && !(b)
        OperandKind::Sum(children) => {
            Operand::product(children.iter().cloned().map(Operand::invert))
                .simplify()
                .expand_with_config(config)
        }
    }
}

fn expand_product(children: &OperandSet, config: &ReduceConfig) -> Result<Operand, ReduceError> {
    let mut foremost = OperandSet::new();
    let mut pending: Vec<Vec<OperandSet>> = Vec::new();

    for child in children {
        let expanded = child.expand_with_config(config)?;
        match expanded.kind() {
            OperandKind::Resolved(false) => return Ok(Operand::resolved(false)),
            OperandKind::Resolved(true) => {}
            OperandKind::Sum(products) => pending.push(product_terms(products, Stage::Distribution)?),
            _ if expanded.is_literal() => {
                foremost.insert(expanded.clone());
            }
            _ => return Err(ReduceError::malformed(Stage::Expansion, &expanded)),
        }
    }

    let mut current = minimize_terms([foremost], config);
    for sum_terms in pending {
        if current == Minimized::Zero {
            break;
        }
        let terms = current.terms();
        trace!("distribute: {} x {} terms", terms.len(), sum_terms.len());
        current = minimize_terms(distribute(&terms, &sum_terms), config);
    }

    Ok(current.into_operand())
}

fn expand_sum(children: &OperandSet, config: &ReduceConfig) -> Result<Operand, ReduceError> {
    let mut terms: Vec<OperandSet> = Vec::new();

    for child in children {
        let expanded = child.expand_with_config(config)?;
        match expanded.kind() {
            OperandKind::Resolved(true) => return Ok(Operand::resolved(true)),
            OperandKind::Resolved(false) => {}
            OperandKind::Sum(products) => terms.extend(product_terms(products, Stage::Minimization)?),
            _ if expanded.is_literal() => terms.push(OperandSet::from([expanded.clone()])),
            _ => return Err(ReduceError::malformed(Stage::Expansion, &expanded)),
        }
    }

    Ok(minimize_terms(terms, config).into_operand())
}

/// The literal sets of the products of an expanded sum
fn product_terms(products: &OperandSet, stage: Stage) -> Result<Vec<OperandSet>, ReduceError> {
    products
        .iter()
        .map(|product| match product.kind() {
            OperandKind::Product(literals) if literals.iter().all(Operand::is_literal) => {
                Ok(literals.clone())
            }
            _ if product.is_literal() => Ok(OperandSet::from([product.clone()])),
            _ => Err(ReduceError::malformed(stage, product)),
        })
        .collect()
}

/// Every pairwise union of a term from `lhs` with a term from `rhs`
fn distribute(lhs: &[OperandSet], rhs: &[OperandSet]) -> Vec<OperandSet> {
    let mut result = Vec::with_capacity(lhs.len() * rhs.len());
    for p0 in lhs {
        for p1 in rhs {
            result.push(p0.union(p1).cloned().collect());
        }
    }
    result
}
