//! Cube view of reduced operands
//!
//! A [`Dnf`] lists the products of a reduced operand as cubes: maps from
//! variable name to polarity. It is built through [`Operand::reduce`], so the
//! cubes are already minimised, and converts back into an equivalent sum of
//! products.

use crate::error::{ReduceError, Stage};
use crate::operand::{Operand, OperandKind};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// A product term: each variable mapped to its polarity
///
/// `true` means the variable appears positively (`a`), `false` means it
/// appears inverted (`!(a)`). An empty cube is the constant `1`.
pub type Cube = BTreeMap<Arc<str>, bool>;

/// Disjunctive normal form of a boolean function
///
/// # Examples
///
/// ```
/// use sop_logic::{operand, Dnf, Operand};
///
/// # fn main() -> Result<(), sop_logic::ReduceError> {
/// let expr = operand!(("a" + "b") * ("a" + "c"));
/// let dnf = Dnf::try_from(&expr)?;
///
/// // a || (b && c)
/// assert_eq!(dnf.len(), 2);
/// assert_eq!(dnf.variables().len(), 3);
///
/// let back = Operand::from(&dnf);
/// assert!(back.equivalent_to(&expr));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dnf {
    /// Product terms, in the canonical order of the reduced operand
    cubes: Vec<Cube>,
    /// Every variable that appears in some cube, sorted alphabetically
    variables: Vec<Arc<str>>,
}

impl Dnf {
    /// Create an empty DNF, which represents `0`
    pub fn new() -> Self {
        Dnf {
            cubes: Vec::new(),
            variables: Vec::new(),
        }
    }

    /// Create a DNF from cubes as given, without minimising them
    pub fn from_cubes(cubes: Vec<Cube>) -> Self {
        let variables: BTreeSet<Arc<str>> = cubes
            .iter()
            .flat_map(|cube| cube.keys().cloned())
            .collect();
        Dnf {
            cubes,
            variables: variables.into_iter().collect(),
        }
    }

    /// Read the cubes of an operand that is already in reduced form
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::MalformedTerm`] if `operand` is not a constant, a
    /// literal, or a sum of products of literals.
    pub fn from_reduced(operand: &Operand) -> Result<Self, ReduceError> {
        let cubes = match operand.kind() {
            OperandKind::Resolved(false) => Vec::new(),
            OperandKind::Resolved(true) => vec![Cube::new()],
            OperandKind::Sum(products) => {
                let mut cubes = Vec::with_capacity(products.len());
                for product in products {
                    let literals = match product.kind() {
                        OperandKind::Product(literals) => literals.iter().collect(),
                        _ => vec![product],
                    };
                    if let Some(cube) = cube_of(&literals, product)? {
                        cubes.push(cube);
                    }
                }
                cubes
            }
            _ => cube_of(&[operand], operand)?.into_iter().collect(),
        };
        Ok(Dnf::from_cubes(cubes))
    }

    /// True if the DNF has no cubes and so represents `0`
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// True if some cube is empty, so the function is constantly `1`
    pub fn is_tautology(&self) -> bool {
        self.cubes.iter().any(BTreeMap::is_empty)
    }

    /// The number of cubes
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    /// Iterate over the cubes
    pub fn iter(&self) -> impl Iterator<Item = &Cube> {
        self.cubes.iter()
    }

    /// The cubes, in the canonical order of the reduced operand
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// Every variable appearing in some cube, sorted alphabetically
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }
}

impl Default for Dnf {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a cube from literals; `None` if the literals contradict each other
fn cube_of(literals: &[&Operand], term: &Operand) -> Result<Option<Cube>, ReduceError> {
    let mut cube = Cube::new();
    for literal in literals {
        let (identifier, polarity) = match literal.kind() {
            OperandKind::Unresolved(identifier) => (identifier, true),
            OperandKind::Invert(child) => match child.kind() {
                OperandKind::Unresolved(identifier) => (identifier, false),
                _ => return Err(ReduceError::malformed(Stage::Minimization, term)),
            },
            _ => return Err(ReduceError::malformed(Stage::Minimization, term)),
        };
        if cube.insert(Arc::clone(identifier), polarity) == Some(!polarity) {
            return Ok(None);
        }
    }
    Ok(Some(cube))
}

/// Reduce the operand and read its cubes
impl TryFrom<&Operand> for Dnf {
    type Error = ReduceError;

    fn try_from(operand: &Operand) -> Result<Self, Self::Error> {
        Dnf::from_reduced(&operand.reduce()?)
    }
}

impl TryFrom<Operand> for Dnf {
    type Error = ReduceError;

    fn try_from(operand: Operand) -> Result<Self, Self::Error> {
        Dnf::try_from(&operand)
    }
}

/// Rebuild a sum of products from the cubes
///
/// An empty DNF becomes `0` and a DNF with an empty cube becomes `1`.
impl From<&Dnf> for Operand {
    fn from(dnf: &Dnf) -> Self {
        if dnf.is_tautology() {
            return Operand::resolved(true);
        }
        Operand::sum(dnf.cubes.iter().map(|cube| {
            Operand::product(cube.iter().map(|(variable, &polarity)| {
                let literal = Operand::unresolved(variable);
                if polarity {
                    literal
                } else {
                    Operand::invert(literal)
                }
            }))
        }))
    }
}

impl From<Dnf> for Operand {
    fn from(dnf: Dnf) -> Self {
        Operand::from(&dnf)
    }
}
