//! Errors raised by the completion engine.
//!
//! Every error is a precondition violation or an unsupported request.
//! None of them is retried internally.

use solvgb_poly::PolyError;
use solvgb_rings::Capability;
use thiserror::Error;

/// Errors from Gröbner basis computations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GbError {
    /// The pseudo-division engine was requested over a field.
    #[error("pseudo-division completion requires non-field coefficients; use the field variant")]
    FieldCoefficients,

    /// The field engine was requested over a non-field coefficient ring.
    #[error("field completion requires field coefficients, found {found}")]
    NonFieldCoefficients {
        /// Capability of the coefficient type.
        found: Capability,
    },

    /// Two polynomials from different module components were combined.
    #[error("module components differ: {left:?} vs {right:?}")]
    ModuleMismatch {
        /// Component prefix of the first polynomial.
        left: Vec<u32>,
        /// Component prefix of the second polynomial.
        right: Vec<u32>,
    },

    /// More module coordinates than ring variables.
    #[error("module count {modv} exceeds the {num_vars} ring variables")]
    InvalidModuleCount {
        /// Requested module coordinates.
        modv: usize,
        /// Number of ring variables.
        num_vars: usize,
    },

    /// A polynomial does not belong to the engine's ring.
    #[error("polynomial has {found} variables, ring has {expected}")]
    VariableCountMismatch {
        /// Number of variables of the ring.
        expected: usize,
        /// Number of variables of the polynomial.
        found: usize,
    },

    /// A zero polynomial was registered with the pair list.
    #[error("zero polynomial cannot enter the basis")]
    ZeroPolynomial,

    /// The operation is not implemented for this ring.
    #[error("{operation} is not supported")]
    Unsupported {
        /// Name of the operation.
        operation: &'static str,
    },

    /// Error from the polynomial layer.
    #[error(transparent)]
    Poly(#[from] PolyError),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, GbError>;
