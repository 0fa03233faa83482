//! Content normalization.
//!
//! After every nonzero reduction the engine brings the result to a
//! canonical associate, so proportional polynomials compare equal and
//! coefficients do not grow from one reduction to the next.

use solvgb_poly::GenPolynomial;
use solvgb_rings::{Coefficient, Ring};

/// Divides by the leading coefficient.
///
/// Over a field the result has leading coefficient one. Zero and
/// polynomials whose leading coefficient is not invertible are returned
/// unchanged.
#[must_use]
pub fn monic<C: Coefficient>(p: &GenPolynomial<C>) -> GenPolynomial<C> {
    match p.leading_coeff() {
        Some(lc) if lc.is_one() => p.clone(),
        Some(lc) => match lc.inverse() {
            Some(inv) => p.scale(&inv),
            None => p.clone(),
        },
        None => p.clone(),
    }
}

/// Divides out the content and fixes the canonical associate.
///
/// The result has coefficients with gcd one and a leading coefficient
/// whose unit part is one (positive over Z, monic over F[t]).
#[must_use]
pub fn primitive_part<C: Coefficient>(p: &GenPolynomial<C>) -> GenPolynomial<C> {
    let Some(lc) = p.leading_coeff() else {
        return p.clone();
    };

    let content = p.content();
    let divisor = content.clone() * lc.exact_div(&content).map_or_else(C::one, |q| q.unit_part());
    if divisor.is_one() {
        return p.clone();
    }
    p.exact_div_scalar(&divisor).unwrap_or_else(|| p.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use solvgb_poly::{PolyRing, PolynomialAlgebra, TermOrder};
    use solvgb_rings::{FiniteField, UnivariatePoly, Q, Z};

    #[test]
    fn test_monic() {
        let ring = PolyRing::<Q>::new(2, TermOrder::Lex);
        let p = ring.polynomial(&[(4, &[1, 0]), (2, &[0, 1])]).unwrap();
        let expected = p.scale(&Q::new(1, 4));
        assert_eq!(monic(&p), expected);
        assert!(monic(&p).leading_coeff().unwrap().is_one());
        assert!(monic(&ring.zero()).is_zero());

        let gf = PolyRing::<FiniteField<7>>::new(1, TermOrder::Lex);
        let q = gf.polynomial(&[(3, &[2]), (1, &[0])]).unwrap();
        // 3^-1 = 5 mod 7
        assert_eq!(gf.format(&monic(&q)), "x^2 + 5");
    }

    #[test]
    fn test_primitive_part_over_integers() {
        let ring = PolyRing::<Z>::new(2, TermOrder::Lex);
        let p = ring.polynomial(&[(-6, &[1, 0]), (4, &[0, 1]), (10, &[0, 0])]).unwrap();
        assert_eq!(ring.format(&primitive_part(&p)), "3*x - 2*y - 5");

        let c = ring.constant(Z::new(-12));
        assert!(primitive_part(&c).is_one());
    }

    #[test]
    fn test_primitive_part_is_idempotent_and_associate_invariant() {
        let ring = PolyRing::<Z>::new(2, TermOrder::Grlex);
        let p = ring.polynomial(&[(2, &[1, 1]), (-4, &[0, 0])]).unwrap();
        let pp = primitive_part(&p);
        assert_eq!(primitive_part(&pp), pp);
        assert_eq!(primitive_part(&p.neg()), pp);
        assert_eq!(primitive_part(&p.scale(&Z::new(7))), pp);
    }

    #[test]
    fn test_primitive_part_over_polynomial_coefficients() {
        type F = UnivariatePoly<Q>;
        let ring = PolyRing::<F>::new(1, TermOrder::Lex);
        let t = F::t();
        // (2t + 2) x + (t^2 - 1)  ->  x + (t - 1)/2
        let two = F::constant(Q::from_integer(2));
        let lead = two.clone() * (t.clone() + F::one());
        let tail = t.clone() * t.clone() - F::one();
        let p = GenPolynomial::new(
            vec![
                (solvgb_poly::ExpVector::new(&[1]), lead),
                (solvgb_poly::ExpVector::new(&[0]), tail),
            ],
            1,
            TermOrder::Lex,
        );
        let pp = primitive_part(&p);
        assert!(pp.leading_coeff().unwrap().is_one());
        assert_eq!(pp.len(), 2);
        assert!(ring.check(&pp).is_ok());
    }
}
