//! Reduction orchestrator and memo table
//!
//! [`Reducer::reduce`] runs the full pipeline on an operand:
//!
//! 1. reduce every child recursively and rebuild the node
//! 2. [`simplify`](Operand::simplify) the rebuilt node
//! 3. [`expand`](Operand::expand_with_config) it to minimised sum-of-products
//!
//! Results are memoised out of band, in a table keyed by structural identity.
//! Every output is also recorded as mapping to itself, which is the "already
//! reduced" marker: reducing a reduced operand again is a single lookup. The
//! table is only a cache; results are the same with it disabled.

use crate::error::ReduceError;
use crate::operand::{Operand, OperandKind};
use crate::ReduceConfig;
use log::{debug, trace};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

type MemoTable = HashMap<Operand, Operand>;

/// The process-wide memo table behind [`Reducer::shared`]
///
/// Created on first use and kept for the life of the process, so results
/// reduced through [`Operand::reduce`] stay marked between calls.
static GLOBAL_MEMO: OnceLock<Arc<RwLock<MemoTable>>> = OnceLock::new();

/// Runs reductions and remembers their results
///
/// Cloning a `Reducer` shares its memo table. The table sits behind an
/// `RwLock`, so one reducer can serve several threads. Two threads reducing
/// the same operand at once may both compute it; they insert equal results.
///
/// # Examples
///
/// ```
/// use sop_logic::{Operand, Reducer};
///
/// # fn main() -> Result<(), sop_logic::ReduceError> {
/// let a = Operand::unresolved("a");
/// let b = Operand::unresolved("b");
/// let c = Operand::unresolved("c");
///
/// let reducer = Reducer::new();
/// let expr = Operand::product([
///     Operand::sum([a.clone(), b.clone()]),
///     Operand::sum([a.clone(), c.clone()]),
/// ]);
///
/// let reduced = reducer.reduce(&expr)?;
/// assert_eq!(reduced.to_string(), "(a) || (b && c)");
/// assert!(reducer.is_reduced(&reduced));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Reducer {
    config: ReduceConfig,
    memo: Arc<RwLock<MemoTable>>,
}

impl Reducer {
    /// Create a reducer with its own memo table and the default configuration
    pub fn new() -> Self {
        Self::with_config(ReduceConfig::default())
    }

    /// Create a reducer with its own memo table
    pub fn with_config(config: ReduceConfig) -> Self {
        Reducer {
            config,
            memo: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get a handle on the process-wide memo table
    ///
    /// All handles share one table and the default configuration. The table
    /// is never freed; [`Reducer::clear`] empties it. [`Operand::reduce`]
    /// uses this.
    pub fn shared() -> Self {
        let memo = GLOBAL_MEMO.get_or_init(|| Arc::new(RwLock::new(HashMap::new())));
        Reducer {
            config: ReduceConfig::default(),
            memo: Arc::clone(memo),
        }
    }

    /// The configuration used by this reducer
    pub fn config(&self) -> &ReduceConfig {
        &self.config
    }

    /// Reduce an operand to minimised sum-of-products form
    ///
    /// The result is a constant, a literal, or a sum of products of literals.
    /// Reducing the result again returns an equal operand.
    ///
    /// # Errors
    ///
    /// Returns a [`ReduceError`] only if an internal invariant is broken; a
    /// well-formed operand tree always reduces.
    pub fn reduce(&self, operand: &Operand) -> Result<Operand, ReduceError> {
        if let Some(reduced) = self.lookup(operand) {
            trace!("reduce: memo hit for {}", operand);
            return Ok(reduced);
        }

        debug!("reduce({})", operand);
        let rebuilt = self.reduce_operands(operand)?;
        let reduced = rebuilt.simplify().expand_with_config(&self.config)?;
        debug!("reduce({}) -> {}", operand, reduced);

        self.record(operand, &reduced);
        Ok(reduced)
    }

    /// True if `operand` has been produced by this reducer's memo table
    pub fn is_reduced(&self, operand: &Operand) -> bool {
        self.read_memo()
            .get(operand)
            .is_some_and(|reduced| reduced == operand)
    }

    /// Number of entries in the memo table
    pub fn memo_len(&self) -> usize {
        self.read_memo().len()
    }

    /// Forget every memoised result
    pub fn clear(&self) {
        self.memo
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Reduce the children of `operand` and rebuild the same variant
    fn reduce_operands(&self, operand: &Operand) -> Result<Operand, ReduceError> {
        match operand.kind() {
            OperandKind::Unresolved(_) | OperandKind::Resolved(_) => Ok(operand.clone()),
            OperandKind::Invert(child) => Ok(Operand::invert(self.reduce(child)?)),
            OperandKind::Product(children) => {
                let reduced = children
                    .iter()
                    .map(|child| self.reduce(child))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Operand::product(reduced))
            }
            OperandKind::Sum(children) => {
                let reduced = children
                    .iter()
                    .map(|child| self.reduce(child))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Operand::sum(reduced))
            }
        }
    }

    fn lookup(&self, operand: &Operand) -> Option<Operand> {
        if !self.config.memoize {
            return None;
        }
        self.read_memo().get(operand).cloned()
    }

    fn record(&self, operand: &Operand, reduced: &Operand) {
        if !self.config.memoize {
            return;
        }
        let mut memo = self.memo.write().unwrap_or_else(PoisonError::into_inner);
        memo.insert(operand.clone(), reduced.clone());
        memo.insert(reduced.clone(), reduced.clone());
    }

    fn read_memo(&self) -> std::sync::RwLockReadGuard<'_, MemoTable> {
        self.memo.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Reducer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reducer")
            .field("config", &self.config)
            .field("memo_len", &self.memo_len())
            .finish()
    }
}

impl Operand {
    /// Reduce to minimised sum-of-products form
    ///
    /// Runs child reduction, [`simplify`](Operand::simplify) and
    /// [`expand`](Operand::expand) through the shared [`Reducer`].
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
    /// // a || (a && b) -> a
    /// let expr = Operand::sum([a.clone(), Operand::product([a.clone(), b])]);
    /// let reduced = expr.reduce()?;
    /// assert_eq!(reduced.to_string(), "(a)");
    /// assert_eq!(reduced.reduce()?, reduced);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// See [`Reducer::reduce`].
    pub fn reduce(&self) -> Result<Operand, ReduceError> {
        Reducer::shared().reduce(self)
    }

    /// Reduce with a specific configuration, using a private memo table
    pub fn reduce_with_config(&self, config: &ReduceConfig) -> Result<Operand, ReduceError> {
        Reducer::with_config(config.clone()).reduce(self)
    }
}
