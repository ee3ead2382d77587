//! Local simplification: constant folding, double negation and flattening

use super::{Operand, OperandKind, OperandSet};

impl Operand {
    /// Apply identities that need no distribution, bottom-up
    ///
    /// - `!(0)` and `!(1)` fold to constants, `!(!(x))` becomes `x`
    /// - nested products (sums) are flattened into their parent
    /// - a `0` in a product or a `1` in a sum short-circuits the whole node
    /// - `1` in a product and `0` in a sum are dropped; a node left with no
    ///   children becomes its identity constant
    ///
    /// Single-child products and sums are kept as they are. The result is a
    /// fixed point: simplifying it again returns an equal operand.
    ///
    /// # Examples
    ///
    /// ```
    /// use sop_logic::Operand;
    ///
    /// let a = Operand::unresolved("a");
    /// let expr = Operand::product([a.clone(), Operand::resolved(false)]);
    /// assert_eq!(expr.simplify(), Operand::resolved(false));
    ///
    /// let expr = Operand::invert(Operand::invert(a.clone()));
    /// assert_eq!(expr.simplify(), a);
    /// ```
    pub fn simplify(&self) -> Operand {
        match self.kind() {
            OperandKind::Unresolved(_) | OperandKind::Resolved(_) => self.clone(),
            OperandKind::Invert(child) => simplify_invert(self, child),
            OperandKind::Product(children) => simplify_product(children),
            OperandKind::Sum(children) => simplify_sum(children),
        }
    }
}

fn simplify_invert(node: &Operand, child: &Operand) -> Operand {
    let simplified = child.simplify();
    match simplified.kind() {
        OperandKind::Resolved(value) => Operand::resolved(!value),
        // Double negation
        OperandKind::Invert(grandchild) => grandchild.clone(),
        _ if simplified.ptr_eq(child) => node.clone(),
        _ => Operand::invert(simplified),
    }
}

fn simplify_product(children: &OperandSet) -> Operand {
    let mut kept = OperandSet::new();

    for child in children {
        let simplified = child.simplify();
        match simplified.kind() {
            OperandKind::Resolved(false) => return Operand::resolved(false),
            OperandKind::Resolved(true) => {}
            OperandKind::Product(grandchildren) => kept.extend(grandchildren.iter().cloned()),
            _ => {
                kept.insert(simplified);
            }
        }
    }

    Operand::product(kept)
}

fn simplify_sum(children: &OperandSet) -> Operand {
    let mut kept = OperandSet::new();

    for child in children {
        let simplified = child.simplify();
        match simplified.kind() {
            OperandKind::Resolved(true) => return Operand::resolved(true),
            OperandKind::Resolved(false) => {}
            OperandKind::Sum(grandchildren) => kept.extend(grandchildren.iter().cloned()),
            _ => {
                kept.insert(simplified);
            }
        }
    }

    Operand::sum(kept)
}
