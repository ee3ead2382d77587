//! Total order, equality and hashing for operands
//!
//! Equality is derived from the order: `a == b` exactly when neither sorts
//! before the other. This is what lets operands key the `BTreeSet`s that hold
//! Product and Sum children.

use super::{Operand, OperandKind};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Canonical total order over operands
///
/// 1. Different variants order by [`OperandType`](super::OperandType).
/// 2. Unresolved operands order by identifier, Resolved ones `false < true`,
///    Invert operands by their child.
/// 3. Products and Sums order by child count first, fewer children first.
///    This is a canonicalization choice with no logical meaning. Equal counts
///    compare children pairwise in canonical order; the first difference
///    decides.
impl Ord for Operand {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ptr_eq(other) {
            return Ordering::Equal;
        }

        match (self.kind(), other.kind()) {
            (OperandKind::Unresolved(lhs), OperandKind::Unresolved(rhs)) => lhs.cmp(rhs),
            (OperandKind::Resolved(lhs), OperandKind::Resolved(rhs)) => lhs.cmp(rhs),
            (OperandKind::Invert(lhs), OperandKind::Invert(rhs)) => lhs.cmp(rhs),
            (OperandKind::Product(lhs), OperandKind::Product(rhs))
            | (OperandKind::Sum(lhs), OperandKind::Sum(rhs)) => lhs
                .len()
                .cmp(&rhs.len())
                .then_with(|| lhs.iter().cmp(rhs.iter())),
            (lhs, rhs) => lhs.operand_type().cmp(&rhs.operand_type()),
        }
    }
}

impl PartialOrd for Operand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Operand {
    fn eq(&self, other: &Self) -> bool {
        // Unequal hashes rule out equality without walking the trees
        self.cached_hash() == other.cached_hash() && self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Operand {}

impl Hash for Operand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.cached_hash());
    }
}
