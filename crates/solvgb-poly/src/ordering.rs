//! Term orders.
//!
//! The choice of term order determines leading terms, and with them the
//! shape of every Gröbner basis computed in a ring.

use std::cmp::Ordering;

use crate::exponent::ExpVector;

/// An admissible term order. Variable 0 is the most significant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum TermOrder {
    /// Lexicographic order.
    ///
    /// x > y > z means x^a y^b z^c > x^d y^e z^f iff
    /// the first nonzero difference (a-d, b-e, c-f) is positive.
    Lex,

    /// Graded lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    Grlex,

    /// Graded reverse lexicographic order.
    ///
    /// First compares total degree, then the last variable with a
    /// different exponent decides, the smaller exponent being larger.
    #[default]
    Grevlex,
}

impl TermOrder {
    /// Compares two exponent vectors according to this order.
    #[must_use]
    pub fn compare(&self, a: &ExpVector, b: &ExpVector) -> Ordering {
        match self {
            TermOrder::Lex => cmp_lex(a, b),
            TermOrder::Grlex => a
                .total_degree()
                .cmp(&b.total_degree())
                .then_with(|| cmp_lex(a, b)),
            TermOrder::Grevlex => a
                .total_degree()
                .cmp(&b.total_degree())
                .then_with(|| cmp_revlex(a, b)),
        }
    }

    /// Returns true if the order refines total degree.
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        !matches!(self, TermOrder::Lex)
    }

    /// Returns a short name for the order.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            TermOrder::Lex => "lex",
            TermOrder::Grlex => "grlex",
            TermOrder::Grevlex => "grevlex",
        }
    }
}

impl std::fmt::Display for TermOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn cmp_lex(a: &ExpVector, b: &ExpVector) -> Ordering {
    a.as_slice().cmp(b.as_slice())
}

fn cmp_revlex(a: &ExpVector, b: &ExpVector) -> Ordering {
    for (x, y) in a.as_slice().iter().zip(b.as_slice()).rev() {
        match y.cmp(x) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}
