//! The critical pair scheduler.
//!
//! A [`PairList`] owns the append-only basis of one completion run and
//! the queue of critical pairs between its elements. Every unordered
//! pair of basis indices is recorded at most once; its status moves from
//! `Pending` to `Consumed` when it is taken from the queue, and on to
//! `Zero` when its S-polynomial is found to vanish or a criterion
//! eliminates it.
//!
//! Pairs are ordered by the priority assigned by the configured
//! [`PairSelection`], ties broken by formation order, so the processing
//! order is a function of the inputs alone.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use solvgb_poly::{ExpVector, GenPolynomial, PolynomialAlgebra};
use solvgb_rings::Coefficient;

use crate::config::GbConfig;
use crate::criteria::{chain_criterion, product_criterion};
use crate::error::{GbError, Result};
use crate::selection::{PairCandidate, PairSelection};

/// Identifier of a critical pair: its formation rank.
pub type PairId = usize;

/// Lifecycle state of a critical pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PairStatus {
    /// Waiting in the queue.
    Pending,
    /// Taken from the queue for reduction.
    Consumed,
    /// Known to reduce to zero, or eliminated by a criterion.
    Zero,
}

/// A critical pair handed out by [`PairList::remove_next`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CriticalPair {
    /// Formation rank of the pair.
    pub id: PairId,
    /// Older basis index.
    pub i: usize,
    /// Newer basis index.
    pub j: usize,
    /// The lcm of both leading exponents.
    pub lcm: ExpVector,
    /// Priority assigned at formation.
    pub priority: u64,
}

#[derive(Clone, Debug)]
struct PairRecord {
    i: usize,
    j: usize,
    lcm: ExpVector,
    priority: u64,
    status: PairStatus,
}

/// Counters describing one completion run.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct PairListStats {
    /// Polynomials registered with `put`.
    pub put: usize,
    /// Critical pairs formed.
    pub pairs: usize,
    /// Pairs taken from the queue.
    pub removed: usize,
    /// Pairs whose S-polynomial reduced to zero.
    pub zero: usize,
    /// Pairs skipped by a criterion.
    pub eliminated: usize,
    /// Pairs still waiting.
    pub pending: usize,
}

impl fmt::Display for PairListStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "put={} pairs={} removed={} zero={} eliminated={} pending={}",
            self.put, self.pairs, self.removed, self.zero, self.eliminated, self.pending
        )
    }
}

/// The basis seen so far together with its pending critical pairs.
#[derive(Debug)]
pub struct PairList<C: Coefficient> {
    modv: usize,
    num_vars: usize,
    commutative: bool,
    selection: Arc<dyn PairSelection>,
    use_chain: bool,
    use_product: bool,
    basis: Vec<GenPolynomial<C>>,
    leads: Vec<ExpVector>,
    sugar: Vec<u64>,
    pairs: Vec<PairRecord>,
    index: FxHashMap<(usize, usize), PairId>,
    queue: BTreeSet<(u64, PairId)>,
    last_sugar: u64,
    stats: PairListStats,
}

impl<C: Coefficient> PairList<C> {
    /// Creates an empty pair list with the default configuration.
    ///
    /// # Errors
    ///
    /// Fails if `modv` exceeds the number of ring variables.
    pub fn create<A: PolynomialAlgebra<C> + ?Sized>(modv: usize, ring: &A) -> Result<Self> {
        Self::with_config(modv, ring, &GbConfig::default())
    }

    /// Creates an empty pair list.
    ///
    /// # Errors
    ///
    /// Fails if `modv` exceeds the number of ring variables.
    pub fn with_config<A: PolynomialAlgebra<C> + ?Sized>(
        modv: usize,
        ring: &A,
        config: &GbConfig,
    ) -> Result<Self> {
        let num_vars = ring.num_vars();
        if modv > num_vars {
            return Err(GbError::InvalidModuleCount { modv, num_vars });
        }

        Ok(Self {
            modv,
            num_vars,
            commutative: ring.is_commutative(),
            selection: Arc::clone(&config.selection),
            use_chain: config.chain_criterion,
            use_product: config.product_criterion,
            basis: Vec::new(),
            leads: Vec::new(),
            sugar: Vec::new(),
            pairs: Vec::new(),
            index: FxHashMap::default(),
            queue: BTreeSet::new(),
            last_sugar: 0,
            stats: PairListStats::default(),
        })
    }

    /// Registers a new basis polynomial and forms its critical pairs.
    ///
    /// Pairs are formed with every earlier polynomial whose leading term
    /// lies in the same module component. Returns the basis index.
    ///
    /// # Errors
    ///
    /// Fails for the zero polynomial and for polynomials of another ring.
    pub fn put(&mut self, p: GenPolynomial<C>) -> Result<usize> {
        if p.num_vars() != self.num_vars {
            return Err(GbError::VariableCountMismatch {
                expected: self.num_vars,
                found: p.num_vars(),
            });
        }
        let Some(lead) = p.leading_exp().cloned() else {
            return Err(GbError::ZeroPolynomial);
        };

        let j = self.basis.len();
        let sugar_j = p.degree().max(self.last_sugar);

        for i in 0..j {
            if self.leads[i].prefix(self.modv) != lead.prefix(self.modv) {
                continue;
            }
            let lcm = self.leads[i].lcm(&lead);
            let priority = self.selection.priority(&PairCandidate {
                lead_i: &self.leads[i],
                lead_j: &lead,
                lcm: &lcm,
                sugar_i: self.sugar[i],
                sugar_j,
            });

            let id = self.pairs.len();
            self.pairs.push(PairRecord {
                i,
                j,
                lcm,
                priority,
                status: PairStatus::Pending,
            });
            self.index.insert((i, j), id);
            self.queue.insert((priority, id));
            self.stats.pairs += 1;
        }

        self.basis.push(p);
        self.leads.push(lead);
        self.sugar.push(sugar_j);
        self.stats.put += 1;
        Ok(j)
    }

    /// Returns true while pairs are pending.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Takes the highest priority pending pair from the queue.
    ///
    /// Returns `None` if the pair is eliminated by the product or chain
    /// criterion; the pair is then recorded as `Zero` and the caller
    /// simply asks again.
    pub fn remove_next(&mut self) -> Option<CriticalPair> {
        let (_, id) = self.queue.pop_first()?;
        self.stats.removed += 1;
        self.pairs[id].status = PairStatus::Consumed;

        let PairRecord {
            i,
            j,
            ref lcm,
            priority,
            ..
        } = self.pairs[id];
        self.last_sugar = self.last_sugar.max(self.sugar[i].max(self.sugar[j]));

        let eliminated = (self.use_product
            && self.commutative
            && product_criterion(&self.leads[i], &self.leads[j]))
            || (self.use_chain
                && chain_criterion(i, j, lcm, self.modv, &self.leads, |a, b| {
                    self.status(a, b) == Some(PairStatus::Pending)
                }));

        if eliminated {
            self.pairs[id].status = PairStatus::Zero;
            self.stats.eliminated += 1;
            return None;
        }

        Some(CriticalPair {
            id,
            i,
            j,
            lcm: lcm.clone(),
            priority,
        })
    }

    /// Marks a pair whose S-polynomial reduced to zero.
    pub fn set_zero(&mut self, pair: &CriticalPair) {
        if let Some(record) = self.pairs.get_mut(pair.id) {
            if record.status != PairStatus::Zero {
                record.status = PairStatus::Zero;
                self.stats.zero += 1;
            }
        }
    }

    /// Status of the pair {a, b}, if it was ever formed.
    #[must_use]
    pub fn status(&self, a: usize, b: usize) -> Option<PairStatus> {
        let key = (a.min(b), a.max(b));
        self.index.get(&key).map(|&id| self.pairs[id].status)
    }

    /// The basis registered so far, in registration order.
    #[must_use]
    pub fn basis(&self) -> &[GenPolynomial<C>] {
        &self.basis
    }

    /// Consumes the pair list, returning the basis.
    #[must_use]
    pub fn into_basis(self) -> Vec<GenPolynomial<C>> {
        self.basis
    }

    /// Number of basis polynomials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.basis.len()
    }

    /// Returns true if no polynomial was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.basis.is_empty()
    }

    /// Number of module coordinates.
    #[must_use]
    pub fn modv(&self) -> usize {
        self.modv
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> PairListStats {
        PairListStats {
            pending: self.queue.len(),
            ..self.stats
        }
    }
}

impl<C: Coefficient> fmt::Display for PairList<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PairList(modv={}, selection={}, basis={}, {})",
            self.modv,
            self.selection.name(),
            self.basis.len(),
            self.stats()
        )
    }
}
