//! Univariate polynomial rings F[t] over a field.
//!
//! F[t] is a Euclidean domain but not a field, so multivariate
//! polynomials with coefficients in F[t] are completed with the
//! pseudo-division variant of the engine.

use crate::traits::{
    Capability, Coefficient, CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring,
};

/// A polynomial in one variable `t` over a field F.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnivariatePoly<F: Field> {
    /// Coefficients in ascending degree order: [a_0, a_1, a_2, ...]
    /// Invariant: trailing zeros are removed (except for the zero polynomial).
    coeffs: Vec<F>,
}

impl<F: Field> UnivariatePoly<F> {
    /// Creates a new polynomial from coefficients.
    ///
    /// Coefficients are given in ascending degree order.
    #[must_use]
    pub fn new(mut coeffs: Vec<F>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(Ring::is_zero) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(F::zero());
        }

        Self { coeffs }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: F) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial t.
    #[must_use]
    pub fn t() -> Self {
        Self::new(vec![F::zero(), F::one()])
    }

    /// Creates the monomial c * t^n.
    #[must_use]
    pub fn monomial(c: F, n: usize) -> Self {
        let mut coeffs = vec![F::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Returns the degree of the polynomial.
    ///
    /// The zero polynomial has degree 0 by convention.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is a constant (including zero).
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() == 1
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &F {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of t^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> F {
        self.coeffs.get(i).cloned().unwrap_or_else(F::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point.
    #[must_use]
    pub fn eval(&self, t: &F) -> F {
        // Horner's method
        let mut result = F::zero();
        for c in self.coeffs.iter().rev() {
            result = result * t.clone() + c.clone();
        }
        result
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &F) -> Self {
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Returns the monic associate, or zero.
    #[must_use]
    pub fn monic(&self) -> Self {
        match self.leading_coeff().inv() {
            Some(inv) => self.scale(&inv),
            None => self.clone(),
        }
    }

    fn add_ref(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let result = (0..len).map(|i| self.coeff(i) + other.coeff(i)).collect();
        Self::new(result)
    }

    fn mul_ref(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return <Self as Ring>::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![F::zero(); n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self::new(result)
    }

    /// Long division: returns (q, r) with self = q * divisor + r and
    /// deg r < deg divisor.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn long_div(&self, divisor: &Self) -> (Self, Self) {
        let lc_inv = divisor
            .leading_coeff()
            .inv()
            .expect("division by the zero polynomial");
        let d = divisor.degree();

        if self.is_zero() || self.degree() < d {
            return (<Self as Ring>::zero(), self.clone());
        }

        let mut rem = self.coeffs.clone();
        let mut quot = vec![F::zero(); self.degree() - d + 1];

        for k in (0..quot.len()).rev() {
            let c = rem[k + d].clone() * lc_inv.clone();
            if c.is_zero() {
                continue;
            }
            for (j, b) in divisor.coeffs.iter().enumerate() {
                rem[k + j] = rem[k + j].clone() - c.clone() * b.clone();
            }
            quot[k] = c;
        }

        rem.truncate(d.max(1));
        (Self::new(quot), Self::new(rem))
    }
}

impl<F: Field + std::fmt::Display> std::fmt::Display for UnivariatePoly<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            let term = match (i, c.is_one()) {
                (0, _) => format!("{c}"),
                (1, true) => "t".to_string(),
                (1, false) => format!("{c}*t"),
                (_, true) => format!("t^{i}"),
                (_, false) => format!("{c}*t^{i}"),
            };
            terms.push(term);
        }

        write!(f, "({})", terms.join(" + "))
    }
}

impl<F: Field> Ring for UnivariatePoly<F> {
    fn zero() -> Self {
        Self {
            coeffs: vec![F::zero()],
        }
    }

    fn one() -> Self {
        Self {
            coeffs: vec![F::one()],
        }
    }

    fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }
}

impl<F: Field> std::ops::Add for UnivariatePoly<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_ref(&rhs)
    }
}

impl<F: Field> std::ops::Sub for UnivariatePoly<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.add_ref(&-rhs)
    }
}

impl<F: Field> std::ops::Mul for UnivariatePoly<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_ref(&rhs)
    }
}

impl<F: Field> std::ops::Neg for UnivariatePoly<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(self.coeffs.into_iter().map(|c| -c).collect())
    }
}

impl<F: Field> CommutativeRing for UnivariatePoly<F> {}
impl<F: Field> IntegralDomain for UnivariatePoly<F> {}

impl<F: Field> EuclideanDomain for UnivariatePoly<F> {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        self.long_div(other)
    }

    /// The monic gcd, or zero when both inputs are zero.
    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();

        while !b.is_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }

        a.monic()
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let mut old_r = self.clone();
        let mut r = other.clone();
        let mut old_s = Self::one();
        let mut s = Self::zero();
        let mut old_t = Self::zero();
        let mut t = Self::one();

        while !r.is_zero() {
            let (q, rem) = old_r.div_rem(&r);
            old_r = r;
            r = rem;

            let new_s = old_s.clone() - q.clone() * s.clone();
            old_s = s;
            s = new_s;

            let new_t = old_t.clone() - q * t.clone();
            old_t = t;
            t = new_t;
        }

        // Normalize so that the gcd is monic
        match old_r.leading_coeff().inv() {
            Some(inv) => (old_r.scale(&inv), old_s.scale(&inv), old_t.scale(&inv)),
            None => (old_r, old_s, old_t),
        }
    }
}

impl<F: Coefficient + Field> Coefficient for UnivariatePoly<F> {
    const CAPABILITY: Capability = Capability::PseudoDivisible;

    fn from_i64(n: i64) -> Self {
        Self::constant(F::from_i64(n))
    }

    fn is_unit(&self) -> bool {
        self.is_constant() && !self.is_zero()
    }

    fn inverse(&self) -> Option<Self> {
        if self.is_constant() {
            self.coeffs[0].inv().map(Self::constant)
        } else {
            None
        }
    }

    fn unit_part(&self) -> Self {
        if self.is_zero() {
            Self::one()
        } else {
            Self::constant(self.leading_coeff().clone())
        }
    }
}
