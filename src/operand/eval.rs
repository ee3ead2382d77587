//! Evaluation and equivalence checking for operands

use super::{Operand, OperandKind, OperandNode};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

impl Operand {
    /// All variable identifiers in the tree, sorted alphabetically
    pub fn collect_variables(&self) -> BTreeSet<Arc<str>> {
        let mut variables = BTreeSet::new();
        self.collect_variables_into(&mut variables);
        variables
    }

    fn collect_variables_into(&self, variables: &mut BTreeSet<Arc<str>>) {
        match self.kind() {
            OperandKind::Unresolved(identifier) => {
                variables.insert(Arc::clone(identifier));
            }
            OperandKind::Resolved(_) => {}
            OperandKind::Invert(child) => child.collect_variables_into(variables),
            OperandKind::Product(children) | OperandKind::Sum(children) => {
                for child in children {
                    child.collect_variables_into(variables);
                }
            }
        }
    }

    /// Evaluate the operand under a variable assignment
    ///
    /// Variables missing from `assignment` evaluate to `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sop_logic::Operand;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let a = Operand::unresolved("a");
    /// let b = Operand::unresolved("b");
    /// let expr = Operand::product([a, Operand::invert(b)]);
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("a"), true);
    /// assert!(expr.evaluate(&assignment));
    ///
    /// assignment.insert(Arc::from("b"), true);
    /// assert!(!expr.evaluate(&assignment));
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> bool {
        self.fold(|node: OperandNode<'_, bool>| match node {
            OperandNode::Unresolved(name) => assignment.get(name).copied().unwrap_or(false),
            OperandNode::Resolved(value) => value,
            OperandNode::Invert(inner) => !inner,
            OperandNode::Product(children) => children.into_iter().all(|value| value),
            OperandNode::Sum(children) => children.into_iter().any(|value| value),
        })
    }

    /// Check if two operands are logically equivalent
    ///
    /// Compares the truth tables over the union of both variable sets, so the
    /// cost is exponential in the number of distinct variables. Structural
    /// equality (`==`) is much cheaper and implies equivalence, but not the
    /// other way round.
    ///
    /// # Examples
    ///
    /// ```
    /// use sop_logic::Operand;
    ///
    /// let a = Operand::unresolved("a");
    /// let b = Operand::unresolved("b");
    ///
    /// // De Morgan: !(a && b) == !(a) || !(b)
    /// let lhs = Operand::invert(Operand::product([a.clone(), b.clone()]));
    /// let rhs = Operand::sum([Operand::invert(a), Operand::invert(b)]);
    ///
    /// assert_ne!(lhs, rhs);
    /// assert!(lhs.equivalent_to(&rhs));
    /// ```
    pub fn equivalent_to(&self, other: &Operand) -> bool {
        if self == other {
            return true;
        }

        let mut variables = self.collect_variables();
        variables.extend(other.collect_variables());
        let variables: Vec<Arc<str>> = variables.into_iter().collect();

        // Count through every row as a little-endian binary number
        let mut row = vec![false; variables.len()];
        let mut assignment: HashMap<Arc<str>, bool> = HashMap::with_capacity(variables.len());
        loop {
            for (variable, &value) in variables.iter().zip(&row) {
                assignment.insert(Arc::clone(variable), value);
            }
            if self.evaluate(&assignment) != other.evaluate(&assignment) {
                return false;
            }
            match row.iter().position(|value| !value) {
                Some(bit) => {
                    row[..bit].fill(false);
                    row[bit] = true;
                }
                None => return true,
            }
        }
    }
}
