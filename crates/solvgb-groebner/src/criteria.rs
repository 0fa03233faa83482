//! Buchberger's criteria for skipping critical pairs.
//!
//! These criteria detect pairs whose S-polynomial is known to reduce to
//! zero, so the reduction can be skipped.

use solvgb_poly::ExpVector;

/// Checks Buchberger's first criterion (product criterion).
///
/// If lcm(lm(f), lm(g)) = lm(f) * lm(g) (i.e., leading monomials are coprime),
/// then S(f, g) reduces to zero. Only valid when the variables commute.
#[must_use]
pub fn product_criterion(lm_f: &ExpVector, lm_g: &ExpVector) -> bool {
    lm_f.is_coprime(lm_g)
}

/// Checks the chain criterion (Buchberger's second criterion).
///
/// The pair (i, j) is redundant if there is a k in the same module
/// component such that:
/// - lm(k) divides lcm(lm(i), lm(j))
/// - the pairs (i, k) and (j, k) are no longer pending
///
/// `still_pending(a, b)` must report whether the pair {a, b} waits in the
/// queue.
pub fn chain_criterion(
    i: usize,
    j: usize,
    lcm: &ExpVector,
    modv: usize,
    leads: &[ExpVector],
    still_pending: impl Fn(usize, usize) -> bool,
) -> bool {
    let component = lcm.prefix(modv);
    for (k, lm_k) in leads.iter().enumerate() {
        if k == i || k == j || lm_k.prefix(modv) != component {
            continue;
        }

        if lm_k.divides(lcm) && !still_pending(i, k) && !still_pending(j, k) {
            return true;
        }
    }
    false
}
