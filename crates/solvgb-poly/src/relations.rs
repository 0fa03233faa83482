//! Commutation relations of solvable polynomial rings.
//!
//! A relation for the variables x_j and x_i with j > i reads
//!
//! ```text
//! x_j * x_i = c * x_i x_j + p
//! ```
//!
//! where `c` is a nonzero coefficient and every term of `p` is smaller
//! than the commutative monomial x_i x_j. Pairs of variables without a
//! relation commute.

use rustc_hash::FxHashMap;
use solvgb_rings::Coefficient;

use crate::error::PolyError;
use crate::exponent::ExpVector;
use crate::ordering::TermOrder;
use crate::polynomial::GenPolynomial;

/// The right-hand side of one commutation relation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relation<C: Coefficient> {
    /// The coefficient `c` of x_i x_j.
    pub coeff: C,
    /// The lower-order correction `p`.
    pub poly: GenPolynomial<C>,
}

/// All commutation relations of a ring, keyed by `(j, i)` with j > i.
#[derive(Clone, Debug)]
pub struct RelationTable<C: Coefficient> {
    num_vars: usize,
    order: TermOrder,
    relations: FxHashMap<(usize, usize), Relation<C>>,
}

impl<C: Coefficient> RelationTable<C> {
    /// Creates an empty table: all variables commute.
    #[must_use]
    pub fn new(num_vars: usize, order: TermOrder) -> Self {
        Self {
            num_vars,
            order,
            relations: FxHashMap::default(),
        }
    }

    /// Adds the relation `x_j * x_i = coeff * x_i x_j + poly`.
    ///
    /// # Errors
    ///
    /// Fails if `j <= i`, an index is out of range, the coefficient is
    /// zero, `poly` lives in a different ring, or `poly` has a term not
    /// below x_i x_j.
    pub fn add(&mut self, j: usize, i: usize, coeff: C, poly: GenPolynomial<C>) -> Result<(), PolyError> {
        if j >= self.num_vars {
            return Err(PolyError::VariableOutOfRange {
                index: j,
                num_vars: self.num_vars,
            });
        }
        if j <= i {
            return Err(PolyError::InvalidRelation {
                j,
                i,
                reason: "the first variable must have the larger index",
            });
        }
        if coeff.is_zero() {
            return Err(PolyError::InvalidRelation {
                j,
                i,
                reason: "the commutator coefficient is zero",
            });
        }
        if poly.num_vars() != self.num_vars {
            return Err(PolyError::VariableCountMismatch {
                expected: self.num_vars,
                found: poly.num_vars(),
            });
        }

        let xij = ExpVector::unit(i, self.num_vars).sum(&ExpVector::unit(j, self.num_vars));
        if let Some(lead) = poly.leading_exp() {
            if self.order.compare(lead, &xij) != std::cmp::Ordering::Less {
                return Err(PolyError::InvalidRelation {
                    j,
                    i,
                    reason: "the correction term is not below the commuted monomial",
                });
            }
        }

        self.relations.insert((j, i), Relation { coeff, poly });
        Ok(())
    }

    /// Looks up the relation for x_j * x_i, j > i.
    #[must_use]
    pub fn get(&self, j: usize, i: usize) -> Option<&Relation<C>> {
        self.relations.get(&(j, i))
    }

    /// Number of variables of the ring.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Term order of the ring.
    #[must_use]
    pub fn order(&self) -> TermOrder {
        self.order
    }

    /// Number of relations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Returns true if no relations are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Returns true if every relation is the trivial `x_j x_i = x_i x_j`.
    #[must_use]
    pub fn is_commutative(&self) -> bool {
        self.relations
            .values()
            .all(|r| r.coeff.is_one() && r.poly.is_zero())
    }
}
