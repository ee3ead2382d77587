//! Bottom-up traversal of operand trees

use super::{Operand, OperandKind};

/// Node type for operand folding
///
/// Carries the shape of one node with the already-folded results of its
/// children, so callers can analyse trees without matching on
/// [`OperandKind`] themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperandNode<'a, T> {
    /// A variable with the given identifier
    Unresolved(&'a str),
    /// A constant
    Resolved(bool),
    /// Logical NOT with the result of the child
    Invert(T),
    /// Logical AND with the results of the children, in canonical order
    Product(Vec<T>),
    /// Logical OR with the results of the children, in canonical order
    Sum(Vec<T>),
}

impl Operand {
    /// Fold the tree depth-first from leaves to root
    ///
    /// Shared subtrees are visited once per parent; folding does not
    /// deduplicate the DAG.
    ///
    /// # Examples
    ///
    /// Count the connectives in a formula:
    ///
    /// ```
    /// use sop_logic::{Operand, OperandNode};
    ///
    /// let a = Operand::unresolved("a");
    /// let b = Operand::unresolved("b");
    /// let expr = Operand::invert(Operand::product([a, b]));
    ///
    /// let connectives = expr.fold(|node| match node {
    ///     OperandNode::Unresolved(_) | OperandNode::Resolved(_) => 0,
    ///     OperandNode::Invert(inner) => inner + 1,
    ///     OperandNode::Product(children) | OperandNode::Sum(children) => {
    ///         children.iter().sum::<usize>() + 1
    ///     }
    /// });
    ///
    /// assert_eq!(connectives, 2);
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(OperandNode<T>) -> T + Copy,
    {
        self.fold_impl(&f)
    }

    fn fold_impl<T, F>(&self, f: &F) -> T
    where
        F: Fn(OperandNode<T>) -> T,
    {
        match self.kind() {
            OperandKind::Unresolved(identifier) => f(OperandNode::Unresolved(identifier)),
            OperandKind::Resolved(value) => f(OperandNode::Resolved(*value)),
            OperandKind::Invert(child) => {
                let inner = child.fold_impl(f);
                f(OperandNode::Invert(inner))
            }
            OperandKind::Product(children) => {
                let results = children.iter().map(|child| child.fold_impl(f)).collect();
                f(OperandNode::Product(results))
            }
            OperandKind::Sum(children) => {
                let results = children.iter().map(|child| child.fold_impl(f)).collect();
                f(OperandNode::Sum(results))
            }
        }
    }

    /// Depth of the tree; leaves have depth 1
    pub fn depth(&self) -> usize {
        self.fold(|node| match node {
            OperandNode::Unresolved(_) | OperandNode::Resolved(_) => 1,
            OperandNode::Invert(inner) => inner + 1,
            OperandNode::Product(children) | OperandNode::Sum(children) => {
                children.into_iter().max().unwrap_or(0) + 1
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Operand, OperandNode};

    #[test]
    fn test_fold_visits_children_in_canonical_order() {
        let expr = Operand::sum([
            Operand::unresolved("c"),
            Operand::unresolved("a"),
            Operand::unresolved("b"),
        ]);
        let names = expr.fold(|node| match node {
            OperandNode::Unresolved(name) => name.to_string(),
            OperandNode::Resolved(value) => u8::from(value).to_string(),
            OperandNode::Invert(inner) => format!("~{}", inner),
            OperandNode::Product(children) => children.join("*"),
            OperandNode::Sum(children) => children.join("+"),
        });
        assert_eq!(names, "a+b+c");
    }

    #[test]
    fn test_depth() {
        let a = Operand::unresolved("a");
        assert_eq!(a.depth(), 1);
        let expr = Operand::sum([Operand::product([Operand::invert(a.clone())]), a]);
        assert_eq!(expr.depth(), 4);
    }
}
