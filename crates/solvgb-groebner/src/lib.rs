//! Buchberger completion for commutative and solvable polynomial rings.
//!
//! This crate provides:
//! - A critical pair scheduler with pluggable selection and the chain
//!   and product criteria ([`PairList`])
//! - S-polynomials and normal forms for field and pseudo-divisible
//!   coefficients ([`Reduction`])
//! - Left and two-sided Gröbner bases, minimalization and basis checks
//!   ([`GroebnerBase`])
//! - A factory that picks the variant from the coefficients
//!   ([`GroebnerEngine`])
//!
//! # Example
//!
//! ```
//! use solvgb_groebner::GroebnerEngine;
//! use solvgb_poly::{PolyRing, PolynomialAlgebra, TermOrder};
//! use solvgb_rings::Q;
//!
//! let ring = PolyRing::<Q>::with_names(&["x", "y"], TermOrder::Lex);
//! let gens = vec![
//!     ring.polynomial(&[(1, &[2, 0]), (-1, &[0, 2])]).unwrap(),
//!     ring.polynomial(&[(1, &[1, 0]), (-1, &[0, 1])]).unwrap(),
//! ];
//!
//! let engine = GroebnerEngine::new(ring);
//! let basis = engine.left_gb(0, &gens).unwrap();
//! assert_eq!(engine.ring().format(&basis[0]), "x - y");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod criteria;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod groebner_base;
pub mod normalizer;
pub mod pairlist;
pub mod reduction;
pub mod selection;

#[cfg(test)]
mod proptests;

pub use config::GbConfig;
pub use diagnostics::{DiagnosticsSink, EventLog, GbEvent, NullSink, TracingSink};
pub use engine::GroebnerEngine;
pub use error::{GbError, Result};
pub use groebner_base::{ExtendedBasis, GroebnerBase};
pub use normalizer::{monic, primitive_part};
pub use pairlist::{CriticalPair, PairId, PairList, PairListStats, PairStatus};
pub use reduction::{FieldReduction, PseudoReduction, Reduction};
pub use selection::{DegreeSelection, PairCandidate, PairSelection, SugarSelection};
