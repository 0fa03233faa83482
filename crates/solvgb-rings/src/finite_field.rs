//! Prime fields Z_p.

use crate::traits::{Capability, Coefficient, CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};
use std::fmt;

/// A finite field Z_p for prime p.
///
/// Elements are stored as reduced residues in `0..P`. `P` must be prime;
/// the field laws are not checked.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FiniteField<const P: u64>(u64);

impl<const P: u64> FiniteField<P> {
    /// Creates a new field element.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates a field element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        let r = value.unsigned_abs() % P;
        if value >= 0 || r == 0 {
            Self(r)
        } else {
            Self(P - r)
        }
    }

    /// Returns the value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the characteristic (the prime p).
    #[must_use]
    pub const fn characteristic() -> u64 {
        P
    }

    /// Computes the inverse using the extended Euclidean algorithm.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn inverse_residue(self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }

        let mut t = 0i128;
        let mut new_t = 1i128;
        let mut r = i128::from(P);
        let mut new_r = i128::from(self.0);

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        if r > 1 {
            return None;
        }

        let p = i128::from(P);
        Some(Self((((t % p) + p) % p) as u64))
    }
}

impl<const P: u64> Ring for FiniteField<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self(1 % P)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl<const P: u64> CommutativeRing for FiniteField<P> {}
impl<const P: u64> IntegralDomain for FiniteField<P> {}

impl<const P: u64> EuclideanDomain for FiniteField<P> {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        // In a field, division is exact
        (self.field_div(other), Self::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        match (self.inverse_residue(), other.inverse_residue()) {
            (Some(inv), _) => (Self::one(), inv, Self::zero()),
            (None, Some(inv)) => (Self::one(), Self::zero(), inv),
            (None, None) => (Self::zero(), Self::zero(), Self::zero()),
        }
    }
}

impl<const P: u64> Field for FiniteField<P> {
    fn inv(&self) -> Option<Self> {
        self.inverse_residue()
    }
}

impl<const P: u64> Coefficient for FiniteField<P> {
    const CAPABILITY: Capability = Capability::Field;

    fn from_i64(n: i64) -> Self {
        Self::from_signed(n)
    }

    fn is_unit(&self) -> bool {
        !self.is_zero()
    }

    fn inverse(&self) -> Option<Self> {
        self.inverse_residue()
    }

    fn unit_part(&self) -> Self {
        if self.is_zero() {
            Self::one()
        } else {
            *self
        }
    }

    fn exact_div(&self, divisor: &Self) -> Option<Self> {
        divisor.inverse_residue().map(|d| *self * d)
    }
}

impl<const P: u64> num_traits::Zero for FiniteField<P> {
    fn zero() -> Self {
        <Self as Ring>::zero()
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const P: u64> num_traits::One for FiniteField<P> {
    fn one() -> Self {
        <Self as Ring>::one()
    }
}

impl<const P: u64> std::ops::Add for FiniteField<P> {
    type Output = Self;

    #[allow(clippy::cast_possible_truncation)]
    fn add(self, rhs: Self) -> Self::Output {
        Self(((u128::from(self.0) + u128::from(rhs.0)) % u128::from(P)) as u64)
    }
}

impl<const P: u64> std::ops::Sub for FiniteField<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<const P: u64> std::ops::Mul for FiniteField<P> {
    type Output = Self;

    #[allow(clippy::cast_possible_truncation)]
    fn mul(self, rhs: Self) -> Self::Output {
        // Use u128 to avoid overflow
        Self(((u128::from(self.0) * u128::from(rhs.0)) % u128::from(P)) as u64)
    }
}

impl<const P: u64> std::ops::Neg for FiniteField<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            Self(0)
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> From<u64> for FiniteField<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for FiniteField<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

impl<const P: u64> fmt::Debug for FiniteField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, P)
    }
}

impl<const P: u64> fmt::Display for FiniteField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type alias for GF(2), the field with two elements.
pub type GF2 = FiniteField<2>;

/// Type alias for the prime field used by the benchmarks.
pub type GF32003 = FiniteField<32_003>;

#[cfg(test)]
mod tests {
    use super::*;

    type F7 = FiniteField<7>;

    #[test]
    fn test_arithmetic() {
        let a = F7::new(5);
        let b = F7::new(4);
        assert_eq!((a + b).value(), 2);
        assert_eq!((a - b).value(), 1);
        assert_eq!((b - a).value(), 6);
        assert_eq!((a * b).value(), 6);
    }

    #[test]
    fn test_from_signed() {
        assert_eq!(F7::from_signed(-1).value(), 6);
        assert_eq!(F7::from_signed(-7).value(), 0);
        assert_eq!(F7::from_signed(-15).value(), 6);
    }

    #[test]
    fn test_inverse() {
        for v in 1..7 {
            let a = F7::new(v);
            let inv = a.inv().unwrap();
            assert!((a * inv).is_one(), "{v} has no inverse");
        }
        assert!(F7::zero().inv().is_none());
    }

    #[test]
    fn test_large_prime_multiplication() {
        type Big = FiniteField<{ (1 << 61) - 1 }>;
        let a = Big::new((1 << 60) + 3);
        let inv = a.inv().unwrap();
        assert!((a * inv).is_one());
    }

    #[test]
    fn test_gf2() {
        let one = GF2::one();
        assert!((one + one).is_zero());
    }
}
