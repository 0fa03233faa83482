//! Solvable polynomial rings (G-algebras).
//!
//! Multiplication of standard monomials is computed recursively from
//! the commutation relations. For monomials `a` and `b` with
//! `last_var(a) <= first_var(b)` the product is just `x^(a+b)`;
//! otherwise the innermost pair of variable powers is commuted with the
//! help of [`SolvableRing::var_power_product`] and the outer factors are
//! multiplied back on.
//!
//! Products of variable powers are memoised. The cache lock is never held
//! across a recursive call, so the ring can be shared between threads.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use solvgb_rings::Coefficient;

use crate::error::PolyError;
use crate::exponent::ExpVector;
use crate::ordering::TermOrder;
use crate::polynomial::GenPolynomial;
use crate::relations::RelationTable;
use crate::ring::{default_names, PolynomialAlgebra};

/// Key of a memoised product x_i^p * x_j^q with i > j.
type PowerKey = (usize, u32, usize, u32);

/// A polynomial ring with commutation relations.
#[derive(Debug)]
pub struct SolvableRing<C: Coefficient> {
    names: Vec<String>,
    order: TermOrder,
    table: RelationTable<C>,
    cache: RwLock<FxHashMap<PowerKey, GenPolynomial<C>>>,
}

impl<C: Coefficient> SolvableRing<C> {
    /// Creates a solvable ring from a relation table.
    ///
    /// # Errors
    ///
    /// Fails if the number of names or the term order disagree with the
    /// table.
    pub fn new(names: &[&str], table: RelationTable<C>) -> Result<Self, PolyError> {
        if names.len() != table.num_vars() {
            return Err(PolyError::VariableCountMismatch {
                expected: table.num_vars(),
                found: names.len(),
            });
        }
        Ok(Self {
            names: names.iter().map(|s| (*s).to_string()).collect(),
            order: table.order(),
            table,
            cache: RwLock::new(FxHashMap::default()),
        })
    }

    /// Creates a solvable ring with default variable names.
    #[must_use]
    pub fn with_table(table: RelationTable<C>) -> Self {
        Self {
            names: default_names(table.num_vars()),
            order: table.order(),
            table,
            cache: RwLock::new(FxHashMap::default()),
        }
    }

    /// The Weyl algebra in `n` pairs of variables `x_k, d_k`, with
    /// `d_k * x_k = x_k * d_k + 1`.
    ///
    /// Variables are ordered `x_1, ..., x_n, d_1, ..., d_n`.
    ///
    /// # Errors
    ///
    /// Propagates relation validation failures, which only occur under
    /// a term order where 1 is not below `x_k d_k`.
    pub fn weyl(n: usize, order: TermOrder) -> Result<Self, PolyError> {
        let num_vars = 2 * n;
        let mut table = RelationTable::new(num_vars, order);
        for k in 0..n {
            let one = GenPolynomial::constant(C::one(), num_vars, order);
            table.add(n + k, k, C::one(), one)?;
        }

        let names: Vec<String> = if n == 1 {
            vec!["x".to_string(), "d".to_string()]
        } else {
            (1..=n)
                .map(|k| format!("x{k}"))
                .chain((1..=n).map(|k| format!("d{k}")))
                .collect()
        };

        Ok(Self {
            names,
            order,
            table,
            cache: RwLock::new(FxHashMap::default()),
        })
    }

    /// The quantum plane in `x, y` with `y * x = q * x * y`.
    ///
    /// # Errors
    ///
    /// Fails if `q` is zero.
    pub fn quantum_plane(q: C, order: TermOrder) -> Result<Self, PolyError> {
        let mut table = RelationTable::new(2, order);
        table.add(1, 0, q, GenPolynomial::zero(2, order))?;
        Self::new(&["x", "y"], table)
    }

    /// The relation table.
    #[must_use]
    pub fn table(&self) -> &RelationTable<C> {
        &self.table
    }

    /// Number of memoised variable-power products.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }

    fn term(&self, e: ExpVector) -> GenPolynomial<C> {
        GenPolynomial::monomial(e, C::one(), self.order)
    }

    /// Computes x_i^p * x_j^q for i > j.
    fn var_power_product(&self, i: usize, p: u32, j: usize, q: u32) -> GenPolynomial<C> {
        debug_assert!(i > j && p > 0 && q > 0);
        let key = (i, p, j, q);
        if let Some(hit) = self.cache.read().get(&key) {
            return hit.clone();
        }

        let n = self.names.len();
        let result = if p == 1 && q == 1 {
            let commuted = ExpVector::unit(i, n).sum(&ExpVector::unit(j, n));
            match self.table.get(i, j) {
                Some(rel) => GenPolynomial::monomial(commuted, rel.coeff.clone(), self.order)
                    .add(&rel.poly),
                None => self.term(commuted),
            }
        } else if p > 1 {
            // x_i * (x_i^(p-1) * x_j^q)
            let inner = self.var_power_product(i, p - 1, j, q);
            self.multiply_left(&ExpVector::unit(i, n), &inner)
        } else {
            // (x_i * x_j^(q-1)) * x_j
            let inner = self.var_power_product(i, 1, j, q - 1);
            self.multiply_right(&inner, &ExpVector::unit(j, n))
        };

        self.cache.write().insert(key, result.clone());
        result
    }
}

impl<C: Coefficient> PolynomialAlgebra<C> for SolvableRing<C> {
    fn num_vars(&self) -> usize {
        self.names.len()
    }

    fn order(&self) -> TermOrder {
        self.order
    }

    fn var_names(&self) -> &[String] {
        &self.names
    }

    fn is_commutative(&self) -> bool {
        self.table.is_commutative()
    }

    fn multiply_monomials(&self, a: &ExpVector, b: &ExpVector) -> GenPolynomial<C> {
        let (Some(la), Some(fb)) = (a.last_var(), b.first_var()) else {
            return self.term(a.sum(b));
        };
        if la <= fb {
            return self.term(a.sum(b));
        }

        // a = a' * x_la^p, b = x_fb^q * b'
        let p = a.get(la);
        let q = b.get(fb);
        let a_rest = a.with(la, 0);
        let b_rest = b.with(fb, 0);

        let mid = self.var_power_product(la, p, fb, q);
        let left = if a_rest.is_zero() {
            mid
        } else {
            self.multiply_left(&a_rest, &mid)
        };
        if b_rest.is_zero() {
            left
        } else {
            self.multiply_right(&left, &b_rest)
        }
    }
}

impl<C: Coefficient> std::fmt::Display for SolvableRing<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} with {} relations",
            self.names.join(", "),
            self.order,
            self.table.len()
        )
    }
}
