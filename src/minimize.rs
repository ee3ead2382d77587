//! Minimisation of sums of products
//!
//! Expansion gathers the product terms of a sum into one flat set. This module
//! removes the redundant ones:
//!
//! - **Absorption**: if every literal of `p0` also appears in `p1`, then
//!   `p0 || (p0 && extra) == p0` and `p1` is dropped. See [`covers`].
//! - **Opposites**: two products that agree everywhere except one literal,
//!   which appears as `x` in one and `!(x)` in the other, merge into their
//!   common part. When the common part is empty the pair is `x || !(x)` and the
//!   whole sum is `1`. See [`are_opposites`].
//! - **Contradictions**: a product containing both `x` and `!(x)` is constantly
//!   `0` and is dropped. See [`is_contradiction`].
//!
//! The last two rules are governed by [`ReduceConfig::detect_complements`].
//! Every pass runs over a sorted snapshot, and the loop stops only when no rule
//! applies, so minimising an already minimised sum changes nothing.

use crate::error::{ReduceError, Stage};
use crate::operand::{Operand, OperandKind, OperandSet};
use crate::ReduceConfig;
use log::trace;
use std::borrow::Cow;

/// The literals of a product term
///
/// Anything that is not a product counts as a one-literal term.
fn literal_set(term: &Operand) -> Cow<'_, OperandSet> {
    match term.kind() {
        OperandKind::Product(children) => Cow::Borrowed(children),
        _ => Cow::Owned(OperandSet::from([term.clone()])),
    }
}

/// True if `p0` covers `p1`: every literal of `p0` is also a literal of `p1`
///
/// Children are kept sorted, so this is a sorted-containment test. A product
/// covers itself; absorption only ever applies it to distinct products.
///
/// # Examples
///
/// ```
/// use sop_logic::{minimize::covers, Operand};
///
/// let a = Operand::unresolved("a");
/// let b = Operand::unresolved("b");
///
/// let pa = Operand::product([a.clone()]);
/// let pab = Operand::product([a, b]);
/// assert!(covers(&pa, &pab));
/// assert!(!covers(&pab, &pa));
/// ```
pub fn covers(p0: &Operand, p1: &Operand) -> bool {
    literal_set(p0).is_subset(&literal_set(p1))
}

/// True if `x` and `y` are complementary literals
fn is_complement(x: &Operand, y: &Operand) -> bool {
    x.inverted().is_some_and(|inner| inner == y) || y.inverted().is_some_and(|inner| inner == x)
}

/// True if two products differ only in the polarity of one literal
///
/// The products must have the same number of literals, share all but one of
/// them, and the remaining pair must be `x` and `!(x)`. Products of different
/// sizes are never opposites, even when one complements part of the other;
/// those overlaps are left to absorption.
///
/// # Examples
///
/// ```
/// use sop_logic::{minimize::are_opposites, Operand};
///
/// let a = Operand::unresolved("a");
/// let b = Operand::unresolved("b");
///
/// // a && b  vs  a && !(b)
/// let p0 = Operand::product([a.clone(), b.clone()]);
/// let p1 = Operand::product([a.clone(), Operand::invert(b.clone())]);
/// assert!(are_opposites(&p0, &p1));
///
/// // a && b  vs  !(a) && !(b): two literals differ
/// let p2 = Operand::product([Operand::invert(a), Operand::invert(b)]);
/// assert!(!are_opposites(&p0, &p2));
/// ```
pub fn are_opposites(p0: &Operand, p1: &Operand) -> bool {
    let lhs = literal_set(p0);
    let rhs = literal_set(p1);
    if lhs.len() != rhs.len() {
        return false;
    }

    let mut only_lhs = lhs.difference(&rhs);
    let mut only_rhs = rhs.difference(&lhs);
    match (
        only_lhs.next(),
        only_lhs.next(),
        only_rhs.next(),
        only_rhs.next(),
    ) {
        (Some(x), None, Some(y), None) => is_complement(x, y),
        _ => false,
    }
}

/// True if the product contains some literal together with its inversion
pub fn is_contradiction(product: &Operand) -> bool {
    let literals = literal_set(product);
    literals
        .iter()
        .filter_map(Operand::inverted)
        .any(|inner| literals.contains(inner))
}

/// Minimise a set of products into a sum
///
/// Each member must be a product of literals or a single literal; a literal is
/// treated as a one-literal product. The result is `0` for an empty set, `1`
/// when complementary products cancel out, and otherwise a sum of products.
///
/// # Errors
///
/// Returns [`ReduceError::MalformedTerm`] if a member is not a product of
/// literals.
///
/// # Examples
///
/// ```
/// use sop_logic::{minimize::minimize_products, Operand, OperandSet, ReduceConfig};
///
/// # fn main() -> Result<(), sop_logic::ReduceError> {
/// let a = Operand::unresolved("a");
/// let b = Operand::unresolved("b");
///
/// let products: OperandSet = [
///     Operand::product([a.clone()]),
///     Operand::product([a.clone(), b]),
/// ]
/// .into_iter()
/// .collect();
///
/// let minimised = minimize_products(products, &ReduceConfig::default())?;
/// assert_eq!(minimised, Operand::sum([Operand::product([a])]));
/// # Ok(())
/// # }
/// ```
pub fn minimize_products(
    products: OperandSet,
    config: &ReduceConfig,
) -> Result<Operand, ReduceError> {
    let mut terms = Vec::with_capacity(products.len());
    for product in &products {
        let literals = literal_set(product);
        if !literals.iter().all(Operand::is_literal) {
            return Err(ReduceError::malformed(Stage::Minimization, product));
        }
        terms.push(literals.into_owned());
    }
    Ok(minimize_terms(terms, config).into_operand())
}

/// Outcome of minimising a collection of product terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Minimized {
    /// No term survived
    Zero,
    /// A term, or a merged pair of opposites, was empty
    One,
    /// The surviving products, each non-empty and canonically ordered
    Products(OperandSet),
}

impl Minimized {
    pub(crate) fn into_operand(self) -> Operand {
        match self {
            Minimized::Zero => Operand::resolved(false),
            Minimized::One => Operand::resolved(true),
            Minimized::Products(products) => Operand::sum(products),
        }
    }

    /// The literal sets of the surviving products; `One` is the single empty term
    pub(crate) fn terms(&self) -> Vec<OperandSet> {
        match self {
            Minimized::Zero => Vec::new(),
            Minimized::One => vec![OperandSet::new()],
            Minimized::Products(products) => products
                .iter()
                .map(|product| literal_set(product).into_owned())
                .collect(),
        }
    }
}

/// Minimise literal sets; an empty set is the always-true product
pub(crate) fn minimize_terms<I>(terms: I, config: &ReduceConfig) -> Minimized
where
    I: IntoIterator<Item = OperandSet>,
{
    let mut products = OperandSet::new();
    for term in terms {
        if term.is_empty() {
            return Minimized::One;
        }
        let product = Operand::from_kind(OperandKind::Product(term));
        if config.detect_complements && is_contradiction(&product) {
            continue;
        }
        products.insert(product);
    }

    let gathered = products.len();
    products = absorb(products);

    if config.detect_complements {
        while let Some((p0, p1)) = find_opposites(&products) {
            trace!("merge opposites {} and {}", p0, p1);
            let common: OperandSet = literal_set(&p0)
                .intersection(&literal_set(&p1))
                .cloned()
                .collect();
            products.remove(&p0);
            products.remove(&p1);
            if common.is_empty() {
                return Minimized::One;
            }
            products.insert(Operand::from_kind(OperandKind::Product(common)));
            products = absorb(products);
        }
    }

    trace!("minimize: {} -> {} products", gathered, products.len());

    if products.is_empty() {
        Minimized::Zero
    } else {
        Minimized::Products(products)
    }
}

/// Drop every product covered by a distinct, smaller one
///
/// Products iterate size-first, so any product that covers another has already
/// been visited when the covered one is reached.
fn absorb(products: OperandSet) -> OperandSet {
    let mut kept: Vec<Operand> = Vec::with_capacity(products.len());
    for product in products {
        if !kept.iter().any(|smaller| covers(smaller, &product)) {
            kept.push(product);
        }
    }
    kept.into_iter().collect()
}

/// The first pair of opposite products in canonical order
fn find_opposites(products: &OperandSet) -> Option<(Operand, Operand)> {
    let snapshot: Vec<&Operand> = products.iter().collect();
    for (i, p0) in snapshot.iter().enumerate() {
        let size = literal_set(p0).len();
        for p1 in &snapshot[i + 1..] {
            // Equal sizes are contiguous in canonical order
            if literal_set(p1).len() != size {
                break;
            }
            if are_opposites(p0, p1) {
                return Some(((*p0).clone(), (*p1).clone()));
            }
        }
    }
    None
}
