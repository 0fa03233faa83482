//! Exponent vectors.
//!
//! An exponent vector records the power of every indeterminate in a
//! monomial. Variable 0 comes first; with module computations the first
//! `modv` coordinates encode the free-module component and are carried
//! along like ordinary exponents.

use smallvec::SmallVec;
use std::fmt;

/// Inline capacity; rings with more variables spill to the heap.
const INLINE_VARS: usize = 8;

/// The exponents of one monomial.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct ExpVector {
    exps: SmallVec<[u32; INLINE_VARS]>,
}

impl ExpVector {
    /// Creates an exponent vector from a slice.
    #[must_use]
    pub fn new(exps: &[u32]) -> Self {
        Self {
            exps: SmallVec::from_slice(exps),
        }
    }

    /// The exponent vector of the monomial 1.
    #[must_use]
    pub fn zero(num_vars: usize) -> Self {
        Self {
            exps: SmallVec::from_elem(0, num_vars),
        }
    }

    /// The exponent vector of the single variable x_i.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_vars`.
    #[must_use]
    pub fn unit(i: usize, num_vars: usize) -> Self {
        let mut e = Self::zero(num_vars);
        e.exps[i] = 1;
        e
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exps.len()
    }

    /// Returns true for the empty vector of a ring without variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exps.is_empty()
    }

    /// Returns the exponent of variable i (zero when out of range).
    #[must_use]
    pub fn get(&self, i: usize) -> u32 {
        self.exps.get(i).copied().unwrap_or(0)
    }

    /// Returns a copy with the exponent of variable i replaced.
    #[must_use]
    pub fn with(&self, i: usize, value: u32) -> Self {
        let mut e = self.clone();
        e.exps[i] = value;
        e
    }

    /// Returns the exponents as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.exps
    }

    /// Returns true if every exponent is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.exps.iter().all(|&e| e == 0)
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u64 {
        self.exps.iter().map(|&e| u64::from(e)).sum()
    }

    /// Multiplies the monomials (adds exponents).
    #[must_use]
    pub fn sum(&self, other: &Self) -> Self {
        debug_assert_eq!(self.len(), other.len());
        Self {
            exps: self
                .exps
                .iter()
                .zip(&other.exps)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }

    /// Divides the monomials, returning `None` unless `other` divides `self`.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        debug_assert_eq!(self.len(), other.len());
        let exps = self
            .exps
            .iter()
            .zip(&other.exps)
            .map(|(a, b)| a.checked_sub(*b))
            .collect::<Option<SmallVec<_>>>()?;
        Some(Self { exps })
    }

    /// Least common multiple.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        Self {
            exps: self
                .exps
                .iter()
                .zip(&other.exps)
                .map(|(a, b)| *a.max(b))
                .collect(),
        }
    }

    /// Greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self {
            exps: self
                .exps
                .iter()
                .zip(&other.exps)
                .map(|(a, b)| *a.min(b))
                .collect(),
        }
    }

    /// Returns true if `self` is a multiple of `other`.
    #[must_use]
    pub fn multiple_of(&self, other: &Self) -> bool {
        self.exps.iter().zip(&other.exps).all(|(a, b)| a >= b)
    }

    /// Returns true if `self` divides `other`.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        other.multiple_of(self)
    }

    /// Returns true if no variable occurs in both monomials.
    #[must_use]
    pub fn is_coprime(&self, other: &Self) -> bool {
        self.exps
            .iter()
            .zip(&other.exps)
            .all(|(a, b)| *a == 0 || *b == 0)
    }

    /// The smallest variable index with a positive exponent.
    #[must_use]
    pub fn first_var(&self) -> Option<usize> {
        self.exps.iter().position(|&e| e > 0)
    }

    /// The largest variable index with a positive exponent.
    #[must_use]
    pub fn last_var(&self) -> Option<usize> {
        self.exps.iter().rposition(|&e| e > 0)
    }

    /// The module component: the first `modv` coordinates.
    #[must_use]
    pub fn prefix(&self, modv: usize) -> &[u32] {
        &self.exps[..modv.min(self.exps.len())]
    }

    /// Formats the monomial with the given variable names.
    #[must_use]
    pub fn to_string_with(&self, names: &[String]) -> String {
        let parts: Vec<String> = self
            .exps
            .iter()
            .enumerate()
            .filter(|(_, &e)| e > 0)
            .map(|(i, &e)| {
                let name = names.get(i).cloned().unwrap_or_else(|| format!("x{i}"));
                if e == 1 {
                    name
                } else {
                    format!("{name}^{e}")
                }
            })
            .collect();

        if parts.is_empty() {
            "1".to_string()
        } else {
            parts.join("*")
        }
    }
}

impl fmt::Display for ExpVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with(&[]))
    }
}

impl From<Vec<u32>> for ExpVector {
    fn from(exps: Vec<u32>) -> Self {
        Self {
            exps: SmallVec::from_vec(exps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = ExpVector::new(&[2, 1, 0]);
        let b = ExpVector::new(&[1, 1, 3]);

        assert_eq!(a.sum(&b), ExpVector::new(&[3, 2, 3]));
        assert_eq!(a.lcm(&b), ExpVector::new(&[2, 1, 3]));
        assert_eq!(a.gcd(&b), ExpVector::new(&[1, 1, 0]));
        assert_eq!(a.total_degree(), 3);
    }

    #[test]
    fn test_division() {
        let x2y = ExpVector::new(&[2, 1]);
        let xy = ExpVector::new(&[1, 1]);

        assert_eq!(x2y.checked_sub(&xy), Some(ExpVector::unit(0, 2)));
        assert_eq!(xy.checked_sub(&x2y), None);
        assert!(x2y.multiple_of(&xy));
        assert!(xy.divides(&x2y));
        assert!(!x2y.divides(&xy));
    }

    #[test]
    fn test_variable_dependency() {
        let e = ExpVector::new(&[0, 3, 0, 1, 0]);
        assert_eq!(e.first_var(), Some(1));
        assert_eq!(e.last_var(), Some(3));
        assert_eq!(ExpVector::zero(4).first_var(), None);
    }

    #[test]
    fn test_coprime_and_prefix() {
        let a = ExpVector::new(&[1, 0, 2]);
        let b = ExpVector::new(&[0, 4, 0]);
        assert!(a.is_coprime(&b));
        assert!(!a.is_coprime(&a));
        assert_eq!(a.prefix(1), &[1]);
        assert_eq!(a.prefix(0), &[] as &[u32]);
    }

    #[test]
    fn test_display() {
        let names = vec!["x".to_string(), "y".to_string()];
        assert_eq!(ExpVector::new(&[2, 1]).to_string_with(&names), "x^2*y");
        assert_eq!(ExpVector::zero(2).to_string_with(&names), "1");
        assert_eq!(ExpVector::new(&[0, 1]).to_string(), "x1");
    }
}
