//! # solvgb-poly
//!
//! Polynomial rings for the solvgb Gröbner basis engine.
//!
//! This crate provides:
//! - Exponent vectors stored inline for small variable counts
//! - Term orders: lex, grlex, grevlex
//! - Sparse distributed polynomials with coefficients in any
//!   [`solvgb_rings::Coefficient`]
//! - Commutative rings and solvable rings (Weyl algebras, quantum planes,
//!   user-defined commutation relations) behind one trait,
//!   [`PolynomialAlgebra`]
//!
//! ## Multiplication
//!
//! Polynomials do not know how to multiply themselves. The ring does:
//! `ring.multiply(&p, &q)`, `ring.multiply_left(&e, &p)` (x^e * p) and
//! `ring.multiply_right(&p, &e)` (p * x^e). In a commutative ring left
//! and right products coincide.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod exponent;
pub mod ordering;
pub mod polynomial;
pub mod relations;
pub mod ring;
pub mod solvable;

#[cfg(test)]
mod proptests;

pub use error::PolyError;
pub use exponent::ExpVector;
pub use ordering::TermOrder;
pub use polynomial::{GenPolynomial, Remainder};
pub use relations::{Relation, RelationTable};
pub use ring::{PolyRing, PolynomialAlgebra};
pub use solvable::SolvableRing;
