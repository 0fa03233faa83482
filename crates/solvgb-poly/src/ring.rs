//! The polynomial ring seam consumed by the Gröbner engine.
//!
//! [`PolynomialAlgebra`] abstracts over commutative and solvable
//! multiplication. Implementors provide the product of two monomials;
//! left, right and full products are derived from it.

use std::marker::PhantomData;

use solvgb_rings::Coefficient;

use crate::error::PolyError;
use crate::exponent::ExpVector;
use crate::ordering::TermOrder;
use crate::polynomial::GenPolynomial;

/// A polynomial ring over the coefficients `C`.
pub trait PolynomialAlgebra<C: Coefficient>: Send + Sync {
    /// Number of indeterminates.
    fn num_vars(&self) -> usize;

    /// The term order.
    fn order(&self) -> TermOrder;

    /// Variable names used for printing.
    fn var_names(&self) -> &[String];

    /// Returns true if the indeterminates commute.
    fn is_commutative(&self) -> bool;

    /// The product x^a * x^b.
    fn multiply_monomials(&self, a: &ExpVector, b: &ExpVector) -> GenPolynomial<C>;

    /// The zero polynomial.
    fn zero(&self) -> GenPolynomial<C> {
        GenPolynomial::zero(self.num_vars(), self.order())
    }

    /// The constant 1.
    fn one(&self) -> GenPolynomial<C> {
        GenPolynomial::constant(C::one(), self.num_vars(), self.order())
    }

    /// A constant polynomial.
    fn constant(&self, c: C) -> GenPolynomial<C> {
        GenPolynomial::constant(c, self.num_vars(), self.order())
    }

    /// The indeterminate x_i.
    ///
    /// # Errors
    ///
    /// Fails if `i` is not a variable of the ring.
    fn variable(&self, i: usize) -> Result<GenPolynomial<C>, PolyError> {
        if i >= self.num_vars() {
            return Err(PolyError::VariableOutOfRange {
                index: i,
                num_vars: self.num_vars(),
            });
        }
        Ok(GenPolynomial::monomial(
            ExpVector::unit(i, self.num_vars()),
            C::one(),
            self.order(),
        ))
    }

    /// All indeterminates outside the first `modv` module coordinates.
    fn univariate_list(&self, modv: usize) -> Vec<GenPolynomial<C>> {
        (modv..self.num_vars())
            .map(|i| GenPolynomial::monomial(ExpVector::unit(i, self.num_vars()), C::one(), self.order()))
            .collect()
    }

    /// Builds a polynomial from `(coefficient, exponents)` pairs.
    ///
    /// # Errors
    ///
    /// Fails if an exponent list does not have one entry per variable.
    fn polynomial(&self, terms: &[(i64, &[u32])]) -> Result<GenPolynomial<C>, PolyError> {
        let n = self.num_vars();
        let terms = terms
            .iter()
            .map(|(c, e)| {
                if e.len() == n {
                    Ok((ExpVector::new(e), C::from_i64(*c)))
                } else {
                    Err(PolyError::VariableCountMismatch {
                        expected: n,
                        found: e.len(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GenPolynomial::new(terms, n, self.order()))
    }

    /// Checks that a polynomial belongs to this ring.
    ///
    /// # Errors
    ///
    /// Fails if the variable count differs.
    fn check(&self, p: &GenPolynomial<C>) -> Result<(), PolyError> {
        if p.num_vars() == self.num_vars() {
            Ok(())
        } else {
            Err(PolyError::VariableCountMismatch {
                expected: self.num_vars(),
                found: p.num_vars(),
            })
        }
    }

    /// The product x^e * p.
    fn multiply_left(&self, e: &ExpVector, p: &GenPolynomial<C>) -> GenPolynomial<C> {
        let mut acc = self.zero();
        for (t, c) in p.terms() {
            let prod = self.multiply_monomials(e, t);
            acc = acc.scale_subtract(&C::one(), &-c.clone(), &prod);
        }
        acc
    }

    /// The product p * x^e.
    fn multiply_right(&self, p: &GenPolynomial<C>, e: &ExpVector) -> GenPolynomial<C> {
        let mut acc = self.zero();
        for (t, c) in p.terms() {
            let prod = self.multiply_monomials(t, e);
            acc = acc.scale_subtract(&C::one(), &-c.clone(), &prod);
        }
        acc
    }

    /// The product p * q.
    fn multiply(&self, p: &GenPolynomial<C>, q: &GenPolynomial<C>) -> GenPolynomial<C> {
        let mut acc = self.zero();
        for (e, c) in q.terms() {
            let prod = self.multiply_right(p, e);
            acc = acc.scale_subtract(&C::one(), &-c.clone(), &prod);
        }
        acc
    }

    /// Formats a polynomial with the ring's variable names.
    fn format(&self, p: &GenPolynomial<C>) -> String {
        p.to_string_with(self.var_names())
    }
}

/// Default variable names: x, y, z, w, u, v, then x6, x7, ...
pub(crate) fn default_names(num_vars: usize) -> Vec<String> {
    let vars = ['x', 'y', 'z', 'w', 'u', 'v'];
    (0..num_vars)
        .map(|i| vars.get(i).map_or_else(|| format!("x{i}"), char::to_string))
        .collect()
}

/// A commutative polynomial ring C[x_0, ..., x_{n-1}].
#[derive(Clone, Debug)]
pub struct PolyRing<C: Coefficient> {
    names: Vec<String>,
    order: TermOrder,
    _coeffs: PhantomData<C>,
}

impl<C: Coefficient> PolyRing<C> {
    /// Creates a ring with default variable names.
    #[must_use]
    pub fn new(num_vars: usize, order: TermOrder) -> Self {
        Self {
            names: default_names(num_vars),
            order,
            _coeffs: PhantomData,
        }
    }

    /// Creates a ring with the given variable names.
    #[must_use]
    pub fn with_names(names: &[&str], order: TermOrder) -> Self {
        Self {
            names: names.iter().map(|s| (*s).to_string()).collect(),
            order,
            _coeffs: PhantomData,
        }
    }
}

impl<C: Coefficient> PolynomialAlgebra<C> for PolyRing<C> {
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
        true
    }

    fn multiply_monomials(&self, a: &ExpVector, b: &ExpVector) -> GenPolynomial<C> {
        GenPolynomial::monomial(a.sum(b), C::one(), self.order)
    }

    fn multiply_left(&self, e: &ExpVector, p: &GenPolynomial<C>) -> GenPolynomial<C> {
        p.shift(e)
    }

    fn multiply_right(&self, p: &GenPolynomial<C>, e: &ExpVector) -> GenPolynomial<C> {
        p.shift(e)
    }
}

impl<C: Coefficient> std::fmt::Display for PolyRing<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.names.join(", "), self.order)
    }
}
