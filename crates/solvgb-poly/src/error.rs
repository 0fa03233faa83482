//! Errors raised while building polynomial rings and polynomials.

use thiserror::Error;

/// Errors from ring construction and polynomial input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// An exponent vector or polynomial has the wrong number of variables.
    #[error("expected {expected} variables, found {found}")]
    VariableCountMismatch {
        /// Number of variables of the ring.
        expected: usize,
        /// Number of variables supplied.
        found: usize,
    },

    /// A variable index is outside the ring.
    #[error("variable index {index} out of range for a ring in {num_vars} variables")]
    VariableOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of variables of the ring.
        num_vars: usize,
    },

    /// A commutation relation violates the solvable-ring axioms.
    #[error("invalid relation x{j} * x{i}: {reason}")]
    InvalidRelation {
        /// The larger variable index.
        j: usize,
        /// The smaller variable index.
        i: usize,
        /// What is wrong with it.
        reason: &'static str,
    },
}
