//! Sparse distributed polynomials.
//!
//! A [`GenPolynomial`] is a list of `(exponent, coefficient)` terms
//! sorted in descending term order, so the leading term is always the
//! first entry. Zero coefficients are never stored. Multiplication is not
//! defined here: it belongs to the ring, which may be non-commutative.

use std::cmp::Ordering;

use solvgb_rings::Coefficient;

use crate::exponent::ExpVector;
use crate::ordering::TermOrder;

/// A multivariate polynomial with coefficients in `C`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GenPolynomial<C: Coefficient> {
    /// Terms in descending term order.
    terms: Vec<(ExpVector, C)>,
    /// Number of variables.
    num_vars: usize,
    /// Term order used for sorting.
    order: TermOrder,
}

impl<C: Coefficient> GenPolynomial<C> {
    /// Creates a new polynomial from terms.
    ///
    /// Terms are sorted and like terms combined.
    #[must_use]
    pub fn new(terms: Vec<(ExpVector, C)>, num_vars: usize, order: TermOrder) -> Self {
        let mut poly = Self {
            terms,
            num_vars,
            order,
        };
        poly.normalize();
        poly
    }

    /// Creates a polynomial from terms already sorted descending with
    /// distinct exponents and nonzero coefficients.
    pub(crate) fn from_sorted(terms: Vec<(ExpVector, C)>, num_vars: usize, order: TermOrder) -> Self {
        debug_assert!(terms
            .windows(2)
            .all(|w| order.compare(&w[0].0, &w[1].0) == Ordering::Greater));
        debug_assert!(terms.iter().all(|(_, c)| !c.is_zero()));
        Self {
            terms,
            num_vars,
            order,
        }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(num_vars: usize, order: TermOrder) -> Self {
        Self {
            terms: Vec::new(),
            num_vars,
            order,
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: C, num_vars: usize, order: TermOrder) -> Self {
        Self::monomial(ExpVector::zero(num_vars), c, order)
    }

    /// Creates the term c * x^e.
    #[must_use]
    pub fn monomial(e: ExpVector, c: C, order: TermOrder) -> Self {
        let num_vars = e.len();
        if c.is_zero() {
            Self::zero(num_vars, order)
        } else {
            Self {
                terms: vec![(e, c)],
                num_vars,
                order,
            }
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the constant 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.is_constant() && self.terms[0].1.is_one()
    }

    /// Returns true if this is a nonzero constant.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].0.is_zero()
    }

    /// Returns true if this is a constant whose coefficient is invertible.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.is_constant() && self.terms[0].1.is_unit()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the term order.
    #[must_use]
    pub fn order(&self) -> TermOrder {
        self.order
    }

    /// Returns the terms in descending order.
    #[must_use]
    pub fn terms(&self) -> &[(ExpVector, C)] {
        &self.terms
    }

    /// Consumes the polynomial, returning its terms.
    #[must_use]
    pub fn into_terms(self) -> Vec<(ExpVector, C)> {
        self.terms
    }

    /// Returns the leading exponent vector.
    #[must_use]
    pub fn leading_exp(&self) -> Option<&ExpVector> {
        self.terms.first().map(|(e, _)| e)
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&C> {
        self.terms.first().map(|(_, c)| c)
    }

    /// Returns the leading term (exponent, coefficient).
    #[must_use]
    pub fn leading_term(&self) -> Option<&(ExpVector, C)> {
        self.terms.first()
    }

    /// Returns the polynomial without its leading term.
    #[must_use]
    pub fn reductum(&self) -> Self {
        Self {
            terms: self.terms.iter().skip(1).cloned().collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Returns the maximal total degree of a term (0 for zero).
    #[must_use]
    pub fn degree(&self) -> u64 {
        self.terms
            .iter()
            .map(|(e, _)| e.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Returns the coefficient of x^e.
    #[must_use]
    pub fn coefficient(&self, e: &ExpVector) -> C {
        self.terms
            .binary_search_by(|(t, _)| self.order.compare(e, t))
            .map_or_else(|_| C::zero(), |i| self.terms[i].1.clone())
    }

    /// Sorts terms and combines like terms.
    fn normalize(&mut self) {
        let order = self.order;
        // Descending, leading term first
        self.terms.sort_by(|a, b| order.compare(&b.0, &a.0));

        let mut combined: Vec<(ExpVector, C)> = Vec::with_capacity(self.terms.len());
        for (e, c) in self.terms.drain(..) {
            match combined.last_mut() {
                Some((last, acc)) if *last == e => *acc = acc.clone() + c,
                _ => combined.push((e, c)),
            }
        }
        combined.retain(|(_, c)| !c.is_zero());
        self.terms = combined;
    }

    /// Computes `a * self - b * other` in one merge pass.
    ///
    /// This is the workhorse of every reduction step.
    #[must_use]
    pub fn scale_subtract(&self, a: &C, b: &C, other: &Self) -> Self {
        debug_assert_eq!(self.num_vars, other.num_vars);

        let mut terms = Vec::with_capacity(self.len() + other.len());
        let mut lhs = self.terms.iter().peekable();
        let mut rhs = other.terms.iter().peekable();

        loop {
            let ord = match (lhs.peek(), rhs.peek()) {
                (Some((e1, _)), Some((e2, _))) => self.order.compare(e1, e2),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => break,
            };

            let (e, c) = match ord {
                Ordering::Greater => {
                    let Some((e, c)) = lhs.next() else { break };
                    (e.clone(), a.clone() * c.clone())
                }
                Ordering::Less => {
                    let Some((e, c)) = rhs.next() else { break };
                    (e.clone(), -(b.clone() * c.clone()))
                }
                Ordering::Equal => {
                    let (Some((e, c1)), Some((_, c2))) = (lhs.next(), rhs.next()) else {
                        break;
                    };
                    (e.clone(), a.clone() * c1.clone() - b.clone() * c2.clone())
                }
            };

            if !c.is_zero() {
                terms.push((e, c));
            }
        }

        Self::from_sorted(terms, self.num_vars, self.order)
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.scale_subtract(&C::one(), &-C::one(), other)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.scale_subtract(&C::one(), &C::one(), other)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(e, c)| (e.clone(), -c.clone())).collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, c: &C) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }
        if c.is_one() {
            return self.clone();
        }
        // Coefficient rings are integral domains, no term vanishes
        Self {
            terms: self
                .terms
                .iter()
                .map(|(e, a)| (e.clone(), a.clone() * c.clone()))
                .collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Divides every coefficient exactly by `c`.
    ///
    /// Returns `None` if some coefficient is not divisible.
    #[must_use]
    pub fn exact_div_scalar(&self, c: &C) -> Option<Self> {
        let terms = self
            .terms
            .iter()
            .map(|(e, a)| a.exact_div(c).map(|q| (e.clone(), q)))
            .collect::<Option<Vec<_>>>()?;
        Some(Self {
            terms,
            num_vars: self.num_vars,
            order: self.order,
        })
    }

    /// Multiplies by the monomial x^e assuming commuting variables.
    ///
    /// Term orders are multiplicative, so no re-sort is needed.
    #[must_use]
    pub fn shift(&self, e: &ExpVector) -> Self {
        Self {
            terms: self.terms.iter().map(|(t, c)| (t.sum(e), c.clone())).collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// The gcd of all coefficients, or zero for the zero polynomial.
    #[must_use]
    pub fn content(&self) -> C {
        let mut g = C::zero();
        for (_, c) in &self.terms {
            g = g.gcd(c);
            if g.is_unit() {
                break;
            }
        }
        g
    }

    /// Applies `f` to every coefficient, dropping terms that become zero.
    #[must_use]
    pub fn map_coefficients<D, F>(&self, f: F) -> GenPolynomial<D>
    where
        D: Coefficient,
        F: Fn(&C) -> D,
    {
        GenPolynomial {
            terms: self
                .terms
                .iter()
                .map(|(e, c)| (e.clone(), f(c)))
                .filter(|(_, c)| !c.is_zero())
                .collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Appends a term smaller than every present term.
    pub(crate) fn push_trailing(&mut self, e: ExpVector, c: C) {
        debug_assert!(self
            .terms
            .last()
            .map_or(true, |(t, _)| self.order.compare(t, &e) == Ordering::Greater));
        if !c.is_zero() {
            self.terms.push((e, c));
        }
    }

    /// Removes and returns the leading term.
    pub(crate) fn pop_leading(&mut self) -> Option<(ExpVector, C)> {
        if self.terms.is_empty() {
            None
        } else {
            Some(self.terms.remove(0))
        }
    }

    /// Splits off the leading term, returning it and the reductum.
    #[must_use]
    pub fn split_leading(mut self) -> Option<((ExpVector, C), Self)> {
        let lead = self.pop_leading()?;
        Some((lead, self))
    }

    /// Formats the polynomial with the given variable names.
    #[must_use]
    pub fn to_string_with(&self, names: &[String]) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let mut out = String::new();
        for (k, (e, c)) in self.terms.iter().enumerate() {
            let coeff = c.to_string();
            let (negative, magnitude) = match coeff.strip_prefix('-') {
                Some(rest) => (true, rest.to_string()),
                None => (false, coeff),
            };

            if k == 0 {
                if negative {
                    out.push('-');
                }
            } else {
                out.push_str(if negative { " - " } else { " + " });
            }

            if e.is_zero() {
                out.push_str(&magnitude);
            } else if magnitude == "1" {
                out.push_str(&e.to_string_with(names));
            } else {
                out.push_str(&magnitude);
                out.push('*');
                out.push_str(&e.to_string_with(names));
            }
        }
        out
    }
}

impl<C: Coefficient> std::fmt::Display for GenPolynomial<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_with(&[]))
    }
}

/// Accumulator that collects terms removed from the head of a
/// polynomial under reduction.
///
/// Terms arrive in strictly descending order, so they are appended.
#[derive(Clone, Debug)]
pub struct Remainder<C: Coefficient> {
    poly: GenPolynomial<C>,
}

impl<C: Coefficient> Remainder<C> {
    /// Creates an empty remainder.
    #[must_use]
    pub fn new(num_vars: usize, order: TermOrder) -> Self {
        Self {
            poly: GenPolynomial::zero(num_vars, order),
        }
    }

    /// Appends a term below all collected terms.
    pub fn push(&mut self, e: ExpVector, c: C) {
        self.poly.push_trailing(e, c);
    }

    /// Multiplies every collected coefficient by `c`.
    pub fn scale(&mut self, c: &C) {
        if !c.is_one() {
            self.poly = self.poly.scale(c);
        }
    }

    /// Returns true if nothing was collected.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.poly.is_zero()
    }

    /// Appends the remaining polynomial, whose terms are all smaller.
    #[must_use]
    pub fn finish(mut self, rest: GenPolynomial<C>) -> GenPolynomial<C> {
        for (e, c) in rest.terms {
            self.poly.push_trailing(e, c);
        }
        self.poly
    }
}
