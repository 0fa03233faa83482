//! Pair selection strategies.
//!
//! A strategy assigns each critical pair an integer priority when the
//! pair is formed; smaller priorities are processed first and equal
//! priorities in formation order.

use std::fmt::Debug;

use solvgb_poly::ExpVector;

/// What a strategy sees of a new critical pair.
#[derive(Clone, Copy, Debug)]
pub struct PairCandidate<'a> {
    /// Leading exponent of the older polynomial.
    pub lead_i: &'a ExpVector,
    /// Leading exponent of the newer polynomial.
    pub lead_j: &'a ExpVector,
    /// The lcm of both leading exponents.
    pub lcm: &'a ExpVector,
    /// Sugar of the older polynomial.
    pub sugar_i: u64,
    /// Sugar of the newer polynomial.
    pub sugar_j: u64,
}

/// A pluggable priority function for critical pairs.
pub trait PairSelection: Debug + Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Priority of a pair; smaller is selected first.
    fn priority(&self, pair: &PairCandidate<'_>) -> u64;
}

/// Selects by total degree of the lcm of the leading terms (the default).
#[derive(Clone, Copy, Debug, Default)]
pub struct DegreeSelection;

impl PairSelection for DegreeSelection {
    fn name(&self) -> &'static str {
        "degree"
    }

    fn priority(&self, pair: &PairCandidate<'_>) -> u64 {
        pair.lcm.total_degree()
    }
}

/// Selects by sugar degree.
///
/// The sugar of S(f, g) is max(sugar(f) + deg(m_f), sugar(g) + deg(m_g))
/// where m_f, m_g are the cofactors bringing both leading terms to the lcm.
#[derive(Clone, Copy, Debug, Default)]
pub struct SugarSelection;

impl PairSelection for SugarSelection {
    fn name(&self) -> &'static str {
        "sugar"
    }

    fn priority(&self, pair: &PairCandidate<'_>) -> u64 {
        let lcm_deg = pair.lcm.total_degree();
        let via_i = pair.sugar_i + (lcm_deg - pair.lead_i.total_degree());
        let via_j = pair.sugar_j + (lcm_deg - pair.lead_j.total_degree());
        via_i.max(via_j)
    }
}
