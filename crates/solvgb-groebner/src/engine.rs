//! Variant selection.
//!
//! [`GroebnerEngine`] looks at the coefficient capability once, when it
//! is built, and wraps the matching [`GroebnerBase`].

use solvgb_poly::{GenPolynomial, PolynomialAlgebra};
use solvgb_rings::{Capability, Coefficient};

use crate::config::GbConfig;
use crate::diagnostics::DiagnosticsSink;
use crate::error::Result;
use crate::groebner_base::{ExtendedBasis, GroebnerBase};
use crate::reduction::{FieldReduction, PseudoReduction};

/// A completion engine for whatever coefficients the ring has.
#[derive(Debug)]
pub enum GroebnerEngine<C: Coefficient, A: PolynomialAlgebra<C>> {
    /// Field coefficients.
    Field(GroebnerBase<C, A, FieldReduction>),
    /// Pseudo-divisible coefficients.
    Pseudo(GroebnerBase<C, A, PseudoReduction>),
}

macro_rules! dispatch {
    ($self:expr, $gb:ident => $call:expr) => {
        match $self {
            GroebnerEngine::Field($gb) => $call,
            GroebnerEngine::Pseudo($gb) => $call,
        }
    };
}

impl<C: Coefficient, A: PolynomialAlgebra<C>> GroebnerEngine<C, A> {
    /// Builds the engine matching `C`.
    #[must_use]
    pub fn new(ring: A) -> Self {
        Self::with_config(ring, GbConfig::default())
    }

    /// Builds the engine matching `C` with a configuration.
    #[must_use]
    pub fn with_config(ring: A, config: GbConfig) -> Self {
        match C::CAPABILITY {
            Capability::Field => Self::Field(GroebnerBase::unchecked(ring, config)),
            Capability::PseudoDivisible => Self::Pseudo(GroebnerBase::unchecked(ring, config)),
        }
    }

    /// The capability the engine was selected for.
    #[must_use]
    pub fn capability(&self) -> Capability {
        match self {
            Self::Field(_) => Capability::Field,
            Self::Pseudo(_) => Capability::PseudoDivisible,
        }
    }

    /// The ring.
    #[must_use]
    pub fn ring(&self) -> &A {
        dispatch!(self, gb => gb.ring())
    }

    /// See [`GroebnerBase::left_gb`].
    ///
    /// # Errors
    ///
    /// Fails on invalid input.
    pub fn left_gb(&self, modv: usize, gens: &[GenPolynomial<C>]) -> Result<Vec<GenPolynomial<C>>> {
        dispatch!(self, gb => gb.left_gb(modv, gens))
    }

    /// See [`GroebnerBase::left_gb_with`].
    ///
    /// # Errors
    ///
    /// Fails on invalid input.
    pub fn left_gb_with(
        &self,
        modv: usize,
        gens: &[GenPolynomial<C>],
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<Vec<GenPolynomial<C>>> {
        dispatch!(self, gb => gb.left_gb_with(modv, gens, sink))
    }

    /// See [`GroebnerBase::twosided_gb`].
    ///
    /// # Errors
    ///
    /// Fails on invalid input.
    pub fn twosided_gb(&self, modv: usize, gens: &[GenPolynomial<C>]) -> Result<Vec<GenPolynomial<C>>> {
        dispatch!(self, gb => gb.twosided_gb(modv, gens))
    }

    /// See [`GroebnerBase::twosided_gb_with`].
    ///
    /// # Errors
    ///
    /// Fails on invalid input.
    pub fn twosided_gb_with(
        &self,
        modv: usize,
        gens: &[GenPolynomial<C>],
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<Vec<GenPolynomial<C>>> {
        dispatch!(self, gb => gb.twosided_gb_with(modv, gens, sink))
    }

    /// See [`GroebnerBase::extended_gb`].
    ///
    /// # Errors
    ///
    /// Always fails.
    pub fn extended_gb(&self, modv: usize, gens: &[GenPolynomial<C>]) -> Result<ExtendedBasis<C>> {
        dispatch!(self, gb => gb.extended_gb(modv, gens))
    }

    /// See [`GroebnerBase::left_minimal_gb`].
    #[must_use]
    pub fn left_minimal_gb(&self, basis: &[GenPolynomial<C>]) -> Vec<GenPolynomial<C>> {
        dispatch!(self, gb => gb.left_minimal_gb(basis))
    }

    /// See [`GroebnerBase::normal_form`].
    #[must_use]
    pub fn normal_form(&self, basis: &[GenPolynomial<C>], p: &GenPolynomial<C>) -> GenPolynomial<C> {
        dispatch!(self, gb => gb.normal_form(basis, p))
    }

    /// See [`GroebnerBase::is_left_gb`].
    ///
    /// # Errors
    ///
    /// Fails on invalid input.
    pub fn is_left_gb(&self, modv: usize, basis: &[GenPolynomial<C>]) -> Result<bool> {
        dispatch!(self, gb => gb.is_left_gb(modv, basis))
    }

    /// See [`GroebnerBase::is_twosided_gb`].
    ///
    /// # Errors
    ///
    /// Fails on invalid input.
    pub fn is_twosided_gb(&self, modv: usize, basis: &[GenPolynomial<C>]) -> Result<bool> {
        dispatch!(self, gb => gb.is_twosided_gb(modv, basis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GbError;
    use solvgb_poly::{PolyRing, SolvableRing, TermOrder};
    use solvgb_rings::{FiniteField, Q, Z};

    #[test]
    fn test_selects_variant_from_coefficients() {
        let over_q = GroebnerEngine::new(PolyRing::<Q>::new(2, TermOrder::Lex));
        assert_eq!(over_q.capability(), Capability::Field);
        let over_z = GroebnerEngine::new(PolyRing::<Z>::new(2, TermOrder::Lex));
        assert_eq!(over_z.capability(), Capability::PseudoDivisible);
        let weyl = GroebnerEngine::new(SolvableRing::<FiniteField<101>>::weyl(1, TermOrder::Grlex).unwrap());
        assert!(matches!(weyl, GroebnerEngine::Field(_)));
    }

    #[test]
    fn test_dispatch() {
        let engine = GroebnerEngine::new(PolyRing::<Z>::new(2, TermOrder::Grlex));
        let r = engine.ring();
        let gens = vec![r.constant(Z::new(6)), r.constant(Z::new(10))];
        assert_eq!(engine.left_gb(0, &gens).unwrap(), vec![r.constant(Z::new(2))]);
        assert_eq!(
            engine.extended_gb(0, &gens),
            Err(GbError::Unsupported {
                operation: "extended_gb"
            })
        );

        let x = r.variable(0).unwrap();
        let basis = engine.twosided_gb(0, &[x.clone()]).unwrap();
        assert!(engine.is_twosided_gb(0, &basis).unwrap());
        assert!(engine.normal_form(&basis, &x).is_zero());
    }
}
