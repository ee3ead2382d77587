//! Boolean operand trees
//!
//! This module provides [`Operand`], an immutable propositional formula built
//! from five variants:
//!
//! | Variant | Meaning |
//! |---|---|
//! | [`Unresolved`](OperandKind::Unresolved) | a free boolean variable |
//! | [`Resolved`](OperandKind::Resolved) | the constant `0` or `1` |
//! | [`Invert`](OperandKind::Invert) | logical NOT of one child |
//! | [`Product`](OperandKind::Product) | logical AND over a set of children |
//! | [`Sum`](OperandKind::Sum) | logical OR over a set of children |
//!
//! Operands are reference-counted and never mutated. Every transformation
//! ([`substitute`], [`simplify`], [`expand`], [`reduce`]) returns a new tree
//! that shares the unchanged subtrees of its input.
//!
//! Product and Sum children live in an [`OperandSet`], a `BTreeSet` ordered by
//! the total order on operands. Two products built from the same children in a
//! different order are therefore equal, and duplicate children collapse.
//!
//! # Examples
//!
//! ```
//! use sop_logic::Operand;
//!
//! let a = Operand::unresolved("a");
//! let b = Operand::unresolved("b");
//!
//! let ab = Operand::product([a.clone(), b.clone()]);
//! let ba = Operand::product([b, a]);
//! assert_eq!(ab, ba);
//! assert_eq!(ab.to_string(), "a && b");
//! ```
//!
//! [`substitute`]: Operand::substitute
//! [`simplify`]: Operand::simplify
//! [`expand`]: Operand::expand
//! [`reduce`]: Operand::reduce

mod display;
mod eval;
mod expand;
mod fold;
mod operators;
mod ordering;
mod simplify;
mod substitute;

pub use fold::OperandNode;

use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Canonically ordered, deduplicated children of a Product or Sum
pub type OperandSet = BTreeSet<Operand>;

/// Variant discriminant, used as the primary sort key
///
/// The declaration order is the sort order:
/// `Unresolved < Resolved < Invert < Product < Sum`.
/// This is a fixed precedence for canonical ordering, not logical precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperandType {
    Unresolved,
    Resolved,
    Invert,
    Product,
    Sum,
}

/// The structure of a single operand node
#[derive(Debug, Clone)]
pub enum OperandKind {
    /// A free boolean variable
    Unresolved(Arc<str>),
    /// A boolean constant
    Resolved(bool),
    /// Logical NOT of the child
    Invert(Operand),
    /// Logical AND over a non-empty set of children
    Product(OperandSet),
    /// Logical OR over a non-empty set of children
    Sum(OperandSet),
}

impl OperandKind {
    /// The discriminant of this variant
    pub fn operand_type(&self) -> OperandType {
        match self {
            OperandKind::Unresolved(_) => OperandType::Unresolved,
            OperandKind::Resolved(_) => OperandType::Resolved,
            OperandKind::Invert(_) => OperandType::Invert,
            OperandKind::Product(_) => OperandType::Product,
            OperandKind::Sum(_) => OperandType::Sum,
        }
    }
}

struct OperandInner {
    kind: OperandKind,
    /// Structural hash, fixed at construction
    hash: u64,
}

/// An immutable boolean formula
///
/// `Operand` is a cheap handle (an `Arc`) around a node. Cloning shares the
/// node; a subtree may have any number of parents. Equality and ordering are
/// structural, see [`Ord`](#impl-Ord-for-Operand).
///
/// # Examples
///
/// ```
/// use sop_logic::Operand;
///
/// let test = Operand::invert(Operand::unresolved("test"));
/// assert_eq!(test.to_string(), "!(test)");
///
/// let substituted = test.substitute("test", &Operand::resolved(false));
/// assert_eq!(substituted.to_string(), "!(0)");
/// assert_eq!(substituted.simplify().to_string(), "1");
/// ```
#[derive(Clone)]
pub struct Operand {
    inner: Arc<OperandInner>,
}

impl Operand {
    /// Create a free variable with the given identifier
    pub fn unresolved(identifier: &str) -> Self {
        Self::from_kind(OperandKind::Unresolved(Arc::from(identifier)))
    }

    /// Create a boolean constant
    pub fn resolved(value: bool) -> Self {
        Self::from_kind(OperandKind::Resolved(value))
    }

    /// Create the logical NOT of `operand`
    ///
    /// No folding is performed; `Operand::invert(Operand::resolved(true))` is an
    /// invert node until it is simplified.
    pub fn invert(operand: Operand) -> Self {
        Self::from_kind(OperandKind::Invert(operand))
    }

    /// Create the logical AND of `operands`
    ///
    /// Duplicate children collapse. An empty product is the multiplicative
    /// identity and is returned as `Resolved(true)`.
    ///
    /// ```
    /// use sop_logic::Operand;
    ///
    /// assert_eq!(Operand::product([]), Operand::resolved(true));
    /// ```
    pub fn product<I>(operands: I) -> Self
    where
        I: IntoIterator<Item = Operand>,
    {
        let children: OperandSet = operands.into_iter().collect();
        if children.is_empty() {
            return Self::resolved(true);
        }
        Self::from_kind(OperandKind::Product(children))
    }

    /// Create the logical OR of `operands`
    ///
    /// Duplicate children collapse. An empty sum is the additive identity and is
    /// returned as `Resolved(false)`.
    ///
    /// ```
    /// use sop_logic::Operand;
    ///
    /// assert_eq!(Operand::sum([]), Operand::resolved(false));
    /// ```
    pub fn sum<I>(operands: I) -> Self
    where
        I: IntoIterator<Item = Operand>,
    {
        let children: OperandSet = operands.into_iter().collect();
        if children.is_empty() {
            return Self::resolved(false);
        }
        Self::from_kind(OperandKind::Sum(children))
    }

    /// Wrap a node, computing its structural hash
    ///
    /// Callers must not pass an empty Product or Sum.
    pub(crate) fn from_kind(kind: OperandKind) -> Self {
        debug_assert!(
            !matches!(&kind, OperandKind::Product(c) | OperandKind::Sum(c) if c.is_empty()),
            "empty product/sum must be built through Operand::product/Operand::sum"
        );
        let hash = structural_hash(&kind);
        Operand {
            inner: Arc::new(OperandInner { kind, hash }),
        }
    }

    /// The structure of this node
    pub fn kind(&self) -> &OperandKind {
        &self.inner.kind
    }

    /// The discriminant of this node
    pub fn operand_type(&self) -> OperandType {
        self.inner.kind.operand_type()
    }

    /// The identifier, if this is an Unresolved operand
    pub fn identifier(&self) -> Option<&str> {
        match self.kind() {
            OperandKind::Unresolved(identifier) => Some(identifier),
            _ => None,
        }
    }

    /// The value, if this is a Resolved operand
    pub fn value(&self) -> Option<bool> {
        match self.kind() {
            OperandKind::Resolved(value) => Some(*value),
            _ => None,
        }
    }

    /// The inverted child, if this is an Invert operand
    pub fn inverted(&self) -> Option<&Operand> {
        match self.kind() {
            OperandKind::Invert(child) => Some(child),
            _ => None,
        }
    }

    /// The children, if this is a Product or Sum
    pub fn children(&self) -> Option<&OperandSet> {
        match self.kind() {
            OperandKind::Product(children) | OperandKind::Sum(children) => Some(children),
            _ => None,
        }
    }

    /// True for a variable or the inversion of a variable
    pub fn is_literal(&self) -> bool {
        match self.kind() {
            OperandKind::Unresolved(_) => true,
            OperandKind::Invert(child) => matches!(child.kind(), OperandKind::Unresolved(_)),
            _ => false,
        }
    }

    /// True if both handles point at the same node
    ///
    /// This is identity, not equality; see [`PartialEq`](#impl-PartialEq-for-Operand).
    pub fn ptr_eq(&self, other: &Operand) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn cached_hash(&self) -> u64 {
        self.inner.hash
    }
}

fn structural_hash(kind: &OperandKind) -> u64 {
    let mut hasher = DefaultHasher::new();
    kind.operand_type().hash(&mut hasher);
    match kind {
        OperandKind::Unresolved(identifier) => identifier.hash(&mut hasher),
        OperandKind::Resolved(value) => value.hash(&mut hasher),
        OperandKind::Invert(child) => child.cached_hash().hash(&mut hasher),
        OperandKind::Product(children) | OperandKind::Sum(children) => {
            children.len().hash(&mut hasher);
            for child in children {
                child.cached_hash().hash(&mut hasher);
            }
        }
    }
    hasher.finish()
}

#[cfg(test)]
mod tests;
