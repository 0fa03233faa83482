//! Property-based tests for coefficient rings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Coefficient, EuclideanDomain, Field, FiniteField, Ring, UnivariatePoly, Q, Z};

    type F101 = FiniteField<101>;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn small_poly() -> impl Strategy<Value = UnivariatePoly<Q>> {
        prop::collection::vec(-20i64..20i64, 1..5)
            .prop_map(|cs| UnivariatePoly::new(cs.into_iter().map(Q::from_integer).collect()))
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Z::new(a), Z::new(b), Z::new(c));
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_div_rem_identity(a in small_int(), b in non_zero_int()) {
            let (a, b) = (Z::new(a), Z::new(b));
            let (q, r) = a.div_rem(&b);
            prop_assert_eq!(q * b + r, a);
        }

        #[test]
        fn integer_gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let (a, b) = (Z::new(a), Z::new(b));
            let g = a.gcd(&b);
            prop_assert!(a.exact_div(&g).is_some());
            prop_assert!(b.exact_div(&g).is_some());
        }

        #[test]
        fn integer_unit_part_gives_non_negative_associate(a in non_zero_int()) {
            let a = Z::new(a);
            let canonical = a.exact_div(&a.unit_part()).unwrap();
            prop_assert!(!canonical.is_negative());
        }

        #[test]
        fn rational_inverse(a in non_zero_int(), b in non_zero_int()) {
            let q = Q::new(a, b);
            prop_assert!((q.clone() * q.inv().unwrap()).is_one());
        }

        #[test]
        fn finite_field_inverse(a in 1u64..101) {
            let a = F101::new(a);
            prop_assert!((a * a.inverse().unwrap()).is_one());
        }

        #[test]
        fn finite_field_signed_embedding(a in small_int(), b in small_int()) {
            prop_assert_eq!(
                F101::from_i64(a) + F101::from_i64(b),
                F101::from_i64(a + b)
            );
        }

        #[test]
        fn poly_div_rem_identity(a in small_poly(), b in small_poly()) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b);
            prop_assert!(r.is_zero() || r.degree() < b.degree());
            prop_assert_eq!(q * b + r, a);
        }

        #[test]
        fn poly_gcd_divides_both(a in small_poly(), b in small_poly()) {
            prop_assume!(!a.is_zero() && !b.is_zero());
            let g = a.gcd(&b);
            prop_assert!(a.exact_div(&g).is_some());
            prop_assert!(b.exact_div(&g).is_some());
        }
    }
}
