//! Identifier substitution

use super::{Operand, OperandKind, OperandSet};
use std::collections::BTreeMap;
use std::sync::Arc;

impl Operand {
    /// Replace every occurrence of the variable `identifier` with `replacement`
    ///
    /// The rewrite is purely structural. Nothing is simplified, so the result
    /// may contain foldable structure such as `!(0)`. Product and Sum children
    /// are rebuilt as canonical sets and may collapse if the substitution makes
    /// two of them equal. Subtrees that do not mention `identifier` are shared
    /// with the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use sop_logic::Operand;
    ///
    /// let a = Operand::unresolved("a");
    /// let b = Operand::unresolved("b");
    /// let expr = Operand::product([a, b.clone()]);
    ///
    /// // a && b with a := b collapses to the single child b
    /// let replaced = expr.substitute("a", &b);
    /// assert_eq!(replaced.to_string(), "b");
    /// ```
    pub fn substitute(&self, identifier: &str, replacement: &Operand) -> Operand {
        self.substitute_with(&|name| (name == identifier).then(|| replacement.clone()))
    }

    /// Replace several variables at once
    ///
    /// All replacements happen in a single simultaneous pass; a replacement is
    /// never substituted into again, so `{a := b, b := a}` swaps the variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use sop_logic::Operand;
    /// use std::collections::BTreeMap;
    /// use std::sync::Arc;
    ///
    /// let a = Operand::unresolved("a");
    /// let b = Operand::unresolved("b");
    /// let expr = Operand::invert(a.clone()) * b.clone();
    ///
    /// let mut swap = BTreeMap::new();
    /// swap.insert(Arc::from("a"), b);
    /// swap.insert(Arc::from("b"), a);
    /// assert_eq!(expr.substitute_all(&swap).to_string(), "a && !(b)");
    /// ```
    pub fn substitute_all(&self, replacements: &BTreeMap<Arc<str>, Operand>) -> Operand {
        if replacements.is_empty() {
            return self.clone();
        }
        self.substitute_with(&|name| replacements.get(name).cloned())
    }

    fn substitute_with<F>(&self, lookup: &F) -> Operand
    where
        F: Fn(&str) -> Option<Operand>,
    {
        match self.kind() {
            OperandKind::Unresolved(name) => lookup(name).unwrap_or_else(|| self.clone()),
            OperandKind::Resolved(_) => self.clone(),
            OperandKind::Invert(child) => {
                let replaced = child.substitute_with(lookup);
                if replaced.ptr_eq(child) {
                    self.clone()
                } else {
                    Operand::invert(replaced)
                }
            }
            OperandKind::Product(children) => match substitute_children(children, lookup) {
                Some(replaced) => Operand::from_kind(OperandKind::Product(replaced)),
                None => self.clone(),
            },
            OperandKind::Sum(children) => match substitute_children(children, lookup) {
                Some(replaced) => Operand::from_kind(OperandKind::Sum(replaced)),
                None => self.clone(),
            },
        }
    }
}

/// Substitute into each child; `None` when no child changed
fn substitute_children<F>(children: &OperandSet, lookup: &F) -> Option<OperandSet>
where
    F: Fn(&str) -> Option<Operand>,
{
    let replaced: Vec<Operand> = children
        .iter()
        .map(|child| child.substitute_with(lookup))
        .collect();

    let unchanged = replaced
        .iter()
        .zip(children.iter())
        .all(|(new, old)| new.ptr_eq(old));

    if unchanged {
        None
    } else {
        Some(replaced.into_iter().collect())
    }
}
