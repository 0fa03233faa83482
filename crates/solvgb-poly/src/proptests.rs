//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use solvgb_rings::Q;

    use crate::{ExpVector, GenPolynomial, PolyRing, PolynomialAlgebra, SolvableRing, TermOrder};

    fn small_exp(n: usize) -> impl Strategy<Value = ExpVector> {
        proptest::collection::vec(0u32..3, n).prop_map(ExpVector::from)
    }

    // Strategy for generating small polynomials in `n` variables
    fn small_poly(n: usize, order: TermOrder) -> impl Strategy<Value = GenPolynomial<Q>> {
        proptest::collection::vec((small_exp(n), -5i64..5), 0..4).prop_map(move |terms| {
            GenPolynomial::new(
                terms.into_iter().map(|(e, c)| (e, Q::from_integer(c))).collect(),
                n,
                order,
            )
        })
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(3, TermOrder::Grevlex), b in small_poly(3, TermOrder::Grevlex)) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_sub_inverse(a in small_poly(3, TermOrder::Lex), b in small_poly(3, TermOrder::Lex)) {
            prop_assert_eq!(a.add(&b).sub(&b), a);
        }

        #[test]
        fn poly_terms_strictly_descending(a in small_poly(3, TermOrder::Grlex)) {
            for w in a.terms().windows(2) {
                prop_assert_eq!(TermOrder::Grlex.compare(&w[0].0, &w[1].0), std::cmp::Ordering::Greater);
            }
        }

        #[test]
        fn commutative_mul_distributive(
            a in small_poly(2, TermOrder::Grlex),
            b in small_poly(2, TermOrder::Grlex),
            c in small_poly(2, TermOrder::Grlex),
        ) {
            let ring = PolyRing::<Q>::new(2, TermOrder::Grlex);
            let left = ring.multiply(&a, &b.add(&c));
            let right = ring.multiply(&a, &b).add(&ring.multiply(&a, &c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn weyl_mul_associative(
            a in small_poly(2, TermOrder::Grlex),
            b in small_poly(2, TermOrder::Grlex),
            c in small_poly(2, TermOrder::Grlex),
        ) {
            let ring = SolvableRing::<Q>::weyl(1, TermOrder::Grlex).unwrap();
            let left = ring.multiply(&ring.multiply(&a, &b), &c);
            let right = ring.multiply(&a, &ring.multiply(&b, &c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn solvable_leading_exponent_is_sum(a in small_exp(2), b in small_exp(2)) {
            // In a G-algebra lt(x^a * x^b) = x^(a+b) up to a coefficient
            let ring = SolvableRing::<Q>::weyl(1, TermOrder::Grlex).unwrap();
            let prod = ring.multiply_monomials(&a, &b);
            prop_assert_eq!(prod.leading_exp(), Some(&a.sum(&b)));
        }
    }
}
