//! # solvgb-rings
//!
//! Coefficient rings for the solvgb Gröbner basis engine.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `EuclideanDomain`, `Field`, `Coefficient`
//! - Concrete coefficients: Z, Q, Z_p
//! - Univariate polynomial rings F[t] used as coefficients
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── IntegralDomain
//!            └── EuclideanDomain
//!                 ├── Field
//!                 └── Coefficient (capability: Field | PseudoDivisible)
//! ```
//!
//! The engine never asks a coefficient whether it "happens" to be
//! invertible in order to pick an algorithm; it reads
//! [`Coefficient::CAPABILITY`] once when an engine is constructed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod integers;
pub mod poly_ring;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use finite_field::FiniteField;
pub use integers::Z;
pub use poly_ring::UnivariatePoly;
pub use rationals::Q;
pub use traits::{Capability, Coefficient, EuclideanDomain, Field, OrderedRing, Ring};
