//! S-polynomials and normal forms.
//!
//! The [`Reduction`] trait carries the part of the reduction that depends
//! on the coefficients: how two leading coefficients are made to cancel
//! and how a result is brought to its canonical associate. S-polynomials,
//! normal forms and top-reducibility are provided on top of it, so both
//! variants share one reduction loop.
//!
//! Multipliers are always applied from the left: in a solvable ring the
//! leading exponent of `x^f * g` is `f + lm(g)` but its coefficient may
//! differ from `lc(g)`, so cancellation uses the coefficients of the
//! actual products.

use std::fmt::Debug;

use solvgb_poly::{GenPolynomial, PolynomialAlgebra, Remainder};
use solvgb_rings::{Capability, Coefficient, Ring};

use crate::error::{GbError, Result};
use crate::normalizer::{monic, primitive_part};

/// Coefficient-dependent half of the reduction engine.
pub trait Reduction<C: Coefficient>: Debug + Default + Send + Sync {
    /// The coefficient capability this variant requires.
    const CAPABILITY: Capability;

    /// Returns `(s, q)` with `s * a == q * b`, `s` as small as possible.
    ///
    /// `b` must be nonzero.
    fn cancel_factors(&self, a: &C, b: &C) -> (C, C);

    /// Brings a nonzero polynomial to its canonical associate.
    fn normalize(&self, p: &GenPolynomial<C>) -> GenPolynomial<C>;

    /// The common content of a list of polynomials, one if there is none.
    fn list_content(&self, polys: &[GenPolynomial<C>]) -> C;

    /// Computes the S-polynomial of `pi` and `pj`.
    ///
    /// Both are multiplied from the left by the cofactors that bring
    /// their leading exponents to the lcm, then combined so the leading
    /// terms cancel. Zero operands give zero.
    ///
    /// # Errors
    ///
    /// Fails if the leading terms lie in different module components.
    fn s_polynomial<A: PolynomialAlgebra<C> + ?Sized>(
        &self,
        ring: &A,
        modv: usize,
        pi: &GenPolynomial<C>,
        pj: &GenPolynomial<C>,
    ) -> Result<GenPolynomial<C>> {
        let (Some(ei), Some(ej)) = (pi.leading_exp(), pj.leading_exp()) else {
            return Ok(ring.zero());
        };
        if ei.prefix(modv) != ej.prefix(modv) {
            return Err(GbError::ModuleMismatch {
                left: ei.prefix(modv).to_vec(),
                right: ej.prefix(modv).to_vec(),
            });
        }

        let lcm = ei.lcm(ej);
        let app = cofactor_product(ring, &lcm, pi);
        let bpp = cofactor_product(ring, &lcm, pj);
        let (Some(a), Some(b)) = (app.leading_coeff(), bpp.leading_coeff()) else {
            return Ok(ring.zero());
        };

        let (s, q) = self.cancel_factors(a, b);
        Ok(app.scale_subtract(&s, &q, &bpp))
    }

    /// Reduces `p` completely against `basis`.
    ///
    /// At each step the first basis element, in list order, whose leading
    /// exponent divides the current leading exponent is used. Irreducible
    /// leading terms move to the remainder. Over non-fields the remainder
    /// collected so far is scaled along with the polynomial, so the result
    /// is a nonzero multiple of a true normal form.
    fn normal_form<A: PolynomialAlgebra<C> + ?Sized>(
        &self,
        ring: &A,
        basis: &[GenPolynomial<C>],
        p: &GenPolynomial<C>,
    ) -> GenPolynomial<C> {
        if p.is_zero() || basis.iter().all(GenPolynomial::is_zero) {
            return p.clone();
        }

        let mut rem = Remainder::new(p.num_vars(), p.order());
        let mut p = p.clone();

        while let Some((e, a)) = p.leading_term() {
            let divisor = basis.iter().find_map(|g| {
                let f = e.checked_sub(g.leading_exp()?)?;
                Some((f, g))
            });

            let Some((f, g)) = divisor else {
                rem.push(e.clone(), a.clone());
                p = p.reductum();
                continue;
            };

            let h = ring.multiply_left(&f, g);
            let Some(b) = h.leading_coeff() else {
                break;
            };
            let (s, q) = self.cancel_factors(a, b);
            if !s.is_one() {
                rem.scale(&s);
            }
            p = p.scale_subtract(&s, &q, &h);
        }

        rem.finish(p)
    }

    /// Returns true if the leading term of `p` is divisible by the leading
    /// term of some element of `basis`.
    fn is_top_reducible(&self, basis: &[GenPolynomial<C>], p: &GenPolynomial<C>) -> bool {
        let Some(e) = p.leading_exp() else {
            return false;
        };
        basis
            .iter()
            .filter_map(GenPolynomial::leading_exp)
            .any(|g| e.multiple_of(g))
    }
}

/// The product x^(lcm - lm(p)) * p.
fn cofactor_product<C, A>(ring: &A, lcm: &solvgb_poly::ExpVector, p: &GenPolynomial<C>) -> GenPolynomial<C>
where
    C: Coefficient,
    A: PolynomialAlgebra<C> + ?Sized,
{
    match p.leading_exp().and_then(|e| lcm.checked_sub(e)) {
        Some(f) if f.is_zero() => p.clone(),
        Some(f) => ring.multiply_left(&f, p),
        None => ring.zero(),
    }
}

/// Reduction over a field: divide by leading coefficients, normalize to
/// monic.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldReduction;

impl<C: Coefficient> Reduction<C> for FieldReduction {
    const CAPABILITY: Capability = Capability::Field;

    fn cancel_factors(&self, a: &C, b: &C) -> (C, C) {
        match b.inverse() {
            Some(inv) => (C::one(), a.clone() * inv),
            None => (b.clone(), a.clone()),
        }
    }

    fn normalize(&self, p: &GenPolynomial<C>) -> GenPolynomial<C> {
        monic(p)
    }

    fn list_content(&self, _polys: &[GenPolynomial<C>]) -> C {
        C::one()
    }
}

/// Reduction over a ring with gcds: cross multiply by the cofactors of
/// the gcd of the leading coefficients, normalize to the primitive part.
#[derive(Clone, Copy, Debug, Default)]
pub struct PseudoReduction;

impl<C: Coefficient> Reduction<C> for PseudoReduction {
    const CAPABILITY: Capability = Capability::PseudoDivisible;

    fn cancel_factors(&self, a: &C, b: &C) -> (C, C) {
        let g = a.gcd(b);
        match (b.exact_div(&g), a.exact_div(&g)) {
            (Some(s), Some(q)) => (s, q),
            _ => (b.clone(), a.clone()),
        }
    }

    fn normalize(&self, p: &GenPolynomial<C>) -> GenPolynomial<C> {
        primitive_part(p)
    }

    fn list_content(&self, polys: &[GenPolynomial<C>]) -> C {
        let mut g = C::zero();
        for p in polys {
            g = g.gcd(&p.content());
            if g.is_unit() {
                return C::one();
            }
        }
        if g.is_zero() {
            return C::one();
        }
        g.exact_div(&g.unit_part()).unwrap_or(g)
    }
}
