//! Algebraic structure traits.
//!
//! These traits describe what the Gröbner engine may do with a
//! coefficient. Arithmetic is by value, the way polynomial code consumes
//! it; cloning is expected to be cheap relative to a multiplication.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A commutative ring where multiplication is commutative.
///
/// Coefficients of (solvable) polynomial rings are always commutative;
/// non-commutativity lives in the indeterminates only.
pub trait CommutativeRing: Ring {}

/// An integral domain is a commutative ring with no zero divisors.
pub trait IntegralDomain: CommutativeRing {}

/// A Euclidean domain supports division with remainder.
///
/// For any a, b with b ≠ 0, there exist q, r such that:
/// - a = b*q + r
/// - Either r = 0 or φ(r) < φ(b) for some Euclidean function φ
pub trait EuclideanDomain: IntegralDomain {
    /// Computes the quotient and remainder of division.
    ///
    /// # Panics
    ///
    /// May panic if `other` is zero.
    fn div_rem(&self, other: &Self) -> (Self, Self);

    /// Computes the quotient of division.
    fn div(&self, other: &Self) -> Self {
        self.div_rem(other).0
    }

    /// Computes the remainder of division.
    fn rem(&self, other: &Self) -> Self {
        self.div_rem(other).1
    }

    /// Computes a greatest common divisor.
    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();

        while !b.is_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }

        a
    }

    /// Computes a least common multiple.
    fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        self.div(&g) * other.clone()
    }

    /// Extended Euclidean algorithm.
    ///
    /// Returns (gcd, x, y) such that gcd = self*x + other*y.
    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self);
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: EuclideanDomain {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}

/// Marker trait for ordered rings.
pub trait OrderedRing: Ring + Ord {
    /// Returns the absolute value.
    fn abs(&self) -> Self;

    /// Returns the sign: -1, 0, or 1.
    fn signum(&self) -> i8;
}

/// Which completion algorithm a coefficient type admits.
///
/// Exactly one capability is declared per coefficient type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Capability {
    /// Every non-zero element is invertible; leading coefficients are
    /// divided out.
    Field,
    /// Only exact division and gcds are available; reductions multiply
    /// through by leading coefficients and strip content afterwards.
    PseudoDivisible,
}

impl Capability {
    /// Returns a short name for the capability.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Capability::Field => "field",
            Capability::PseudoDivisible => "pseudo-divisible",
        }
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A coefficient of a polynomial ring handled by the Gröbner engine.
///
/// # Laws
///
/// - `a == a.unit_part() * canonical` where `canonical` is the chosen
///   associate of `a` (non-negative integer, monic polynomial, one for
///   non-zero field elements)
/// - `a.exact_div(b) == Some(q)` iff `a == q * b`
/// - `a.is_unit()` iff `a.inverse().is_some()`
pub trait Coefficient: EuclideanDomain + Display + Send + Sync + 'static {
    /// The algorithm variant this coefficient type admits.
    const CAPABILITY: Capability;

    /// Embeds a machine integer.
    fn from_i64(n: i64) -> Self;

    /// Returns true if this element is invertible.
    fn is_unit(&self) -> bool;

    /// Returns the multiplicative inverse of a unit.
    fn inverse(&self) -> Option<Self>;

    /// Returns the unit `u` such that `self / u` is the canonical associate.
    ///
    /// The unit part of zero is one.
    fn unit_part(&self) -> Self;

    /// Divides exactly, returning `None` if `divisor` does not divide `self`.
    fn exact_div(&self, divisor: &Self) -> Option<Self> {
        if divisor.is_zero() {
            return None;
        }
        let (q, r) = self.div_rem(divisor);
        if r.is_zero() {
            Some(q)
        } else {
            None
        }
    }

    /// Returns true if the coefficient type is declared a field.
    #[must_use]
    fn is_field() -> bool {
        Self::CAPABILITY == Capability::Field
    }
}
