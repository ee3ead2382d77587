//! Operator overloading for operand construction
//!
//! The operators only build trees; `&a * &b * &c` nests as
//! `Product{Product{a, b}, c}` until [`Operand::simplify`] flattens it. The
//! [`operand!`](crate::operand) macro builds flat n-ary nodes directly.

use super::Operand;
use std::ops::{Add, Mul, Not};

/// Logical AND for references: `&a * &b`
///
/// # Examples
///
/// ```
/// use sop_logic::Operand;
///
/// let a = Operand::unresolved("a");
/// let b = Operand::unresolved("b");
/// assert_eq!(&a * &b, Operand::product([a, b]));
/// ```
impl Mul for &Operand {
    type Output = Operand;

    fn mul(self, rhs: &Operand) -> Operand {
        Operand::product([self.clone(), rhs.clone()])
    }
}

/// Logical AND: `a * b`
impl Mul for Operand {
    type Output = Operand;

    fn mul(self, rhs: Operand) -> Operand {
        Operand::product([self, rhs])
    }
}

/// Logical OR for references: `&a + &b`
///
/// # Examples
///
/// ```
/// use sop_logic::Operand;
///
/// let a = Operand::unresolved("a");
/// let b = Operand::unresolved("b");
/// assert_eq!(&a + &b, Operand::sum([a, b]));
/// ```
impl Add for &Operand {
    type Output = Operand;

    fn add(self, rhs: &Operand) -> Operand {
        Operand::sum([self.clone(), rhs.clone()])
    }
}

/// Logical OR: `a + b`
impl Add for Operand {
    type Output = Operand;

    fn add(self, rhs: Operand) -> Operand {
        Operand::sum([self, rhs])
    }
}

/// Logical NOT for references: `!&a`
///
/// # Examples
///
/// ```
/// use sop_logic::Operand;
///
/// let a = Operand::unresolved("a");
/// assert_eq!((!&a).to_string(), "!(a)");
/// ```
impl Not for &Operand {
    type Output = Operand;

    fn not(self) -> Operand {
        Operand::invert(self.clone())
    }
}

/// Logical NOT: `!a`
impl Not for Operand {
    type Output = Operand;

    fn not(self) -> Operand {
        Operand::invert(self)
    }
}
