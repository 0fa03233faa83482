//! # solvgb
//!
//! Gröbner bases for ideals in commutative and solvable polynomial rings.
//!
//! The engine computes reduced left and two-sided Gröbner bases over
//! field coefficients (Q, GF(p)) and over coefficients that only admit
//! exact division and gcds (Z, F[t]). The algorithm variant is chosen
//! from the coefficient type when the engine is built.
//!
//! ## Quick Start
//!
//! ```
//! use solvgb::prelude::*;
//!
//! let ring = PolyRing::<Z>::with_names(&["x", "y"], TermOrder::Grlex);
//! let gens = vec![ring.constant(Z::new(6)), ring.constant(Z::new(10))];
//!
//! let engine = GroebnerEngine::new(ring);
//! let basis = engine.left_gb(0, &gens).unwrap();
//! assert_eq!(engine.ring().format(&basis[0]), "2");
//! ```
//!
//! Non-commutative rings work the same way:
//!
//! ```
//! use solvgb::prelude::*;
//!
//! let weyl = SolvableRing::<Q>::weyl(1, TermOrder::Grlex).unwrap();
//! let x = weyl.variable(0).unwrap();
//! let engine = GroebnerEngine::new(weyl);
//!
//! // the left ideal of x is proper, the two-sided one is not
//! assert_eq!(engine.left_gb(0, &[x.clone()]).unwrap(), vec![x.clone()]);
//! assert!(engine.twosided_gb(0, &[x]).unwrap()[0].is_one());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use solvgb_groebner as groebner;
pub use solvgb_poly as poly;
pub use solvgb_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use solvgb_groebner::{
        DiagnosticsSink, EventLog, GbConfig, GbError, GbEvent, GroebnerBase, GroebnerEngine,
        SugarSelection,
    };
    pub use solvgb_poly::{
        ExpVector, GenPolynomial, PolyRing, PolynomialAlgebra, RelationTable, SolvableRing,
        TermOrder,
    };
    pub use solvgb_rings::{Coefficient, FiniteField, Ring, UnivariatePoly, Q, Z};
}
