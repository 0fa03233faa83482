//! Property-based tests for completion.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use solvgb_poly::{ExpVector, GenPolynomial, PolyRing, PolynomialAlgebra, SolvableRing, TermOrder};
    use solvgb_rings::{FiniteField, Z};

    use crate::{GroebnerBase, GroebnerEngine};

    type F = FiniteField<101>;

    fn small_exp(n: usize) -> impl Strategy<Value = ExpVector> {
        proptest::collection::vec(0u32..3, n).prop_map(ExpVector::from)
    }

    fn gf_poly(n: usize, order: TermOrder) -> impl Strategy<Value = GenPolynomial<F>> {
        proptest::collection::vec((small_exp(n), 1u64..101), 1..4).prop_map(move |terms| {
            GenPolynomial::new(
                terms.into_iter().map(|(e, c)| (e, F::new(c))).collect(),
                n,
                order,
            )
        })
    }

    fn int_poly(n: usize, order: TermOrder) -> impl Strategy<Value = GenPolynomial<Z>> {
        proptest::collection::vec((small_exp(n), -6i64..6), 1..4).prop_map(move |terms| {
            GenPolynomial::new(
                terms.into_iter().map(|(e, c)| (e, Z::new(c))).collect(),
                n,
                order,
            )
        })
    }

    /// Module elements in e1, e2, x, y: every term carries exactly one
    /// module coordinate.
    fn module_poly() -> impl Strategy<Value = GenPolynomial<Z>> {
        proptest::collection::vec((0usize..2, 0u32..3, 0u32..3, -6i64..6), 1..4).prop_map(|terms| {
            GenPolynomial::new(
                terms
                    .into_iter()
                    .map(|(k, a, b, c)| {
                        let mut e = vec![0, 0, a, b];
                        e[k] = 1;
                        (ExpVector::from(e), Z::new(c))
                    })
                    .collect(),
                4,
                TermOrder::Lex,
            )
        })
    }

    fn sorted<C: solvgb_rings::Coefficient>(basis: Vec<GenPolynomial<C>>) -> Vec<String> {
        let mut out: Vec<String> = basis.iter().map(ToString::to_string).collect();
        out.sort();
        out
    }

    fn leads_are_independent<C: solvgb_rings::Coefficient>(basis: &[GenPolynomial<C>]) -> bool {
        basis.iter().enumerate().all(|(i, p)| {
            basis.iter().enumerate().all(|(j, q)| {
                i == j
                    || match (p.leading_exp(), q.leading_exp()) {
                        (Some(ep), Some(eq)) => !ep.multiple_of(eq),
                        _ => false,
                    }
            })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn generators_reduce_to_zero(gens in proptest::collection::vec(gf_poly(3, TermOrder::Grevlex), 1..4)) {
            let gb = GroebnerBase::field(PolyRing::<F>::new(3, TermOrder::Grevlex)).unwrap();
            let basis = gb.left_gb(0, &gens).unwrap();
            for g in &gens {
                prop_assert!(gb.normal_form(&basis, g).is_zero());
            }
        }

        #[test]
        fn basis_is_confluent_and_minimal(gens in proptest::collection::vec(gf_poly(3, TermOrder::Grlex), 1..4)) {
            let gb = GroebnerBase::field(PolyRing::<F>::new(3, TermOrder::Grlex)).unwrap();
            let basis = gb.left_gb(0, &gens).unwrap();
            prop_assert!(gb.is_left_gb(0, &basis).unwrap());
            prop_assert!(leads_are_independent(&basis));
            for p in &basis {
                prop_assert!(p.leading_coeff().is_some_and(|c| *c == F::new(1)));
            }
        }

        #[test]
        fn minimalization_is_idempotent(gens in proptest::collection::vec(gf_poly(2, TermOrder::Lex), 1..4)) {
            let gb = GroebnerBase::field(PolyRing::<F>::new(2, TermOrder::Lex)).unwrap();
            let basis = gb.left_gb(0, &gens).unwrap();
            let again = gb.left_minimal_gb(&basis);
            prop_assert_eq!(sorted(again), sorted(basis));
        }

        #[test]
        fn selection_does_not_change_the_basis(gens in proptest::collection::vec(gf_poly(3, TermOrder::Grevlex), 1..4)) {
            let ring = PolyRing::<F>::new(3, TermOrder::Grevlex);
            let degree = GroebnerEngine::new(ring.clone());
            let sugar = GroebnerEngine::with_config(
                ring,
                crate::GbConfig::default().with_selection(crate::SugarSelection),
            );
            prop_assert_eq!(
                sorted(degree.left_gb(0, &gens).unwrap()),
                sorted(sugar.left_gb(0, &gens).unwrap())
            );
        }

        #[test]
        fn integer_basis_is_confluent(gens in proptest::collection::vec(int_poly(2, TermOrder::Grlex), 1..3)) {
            let gb = GroebnerBase::pseudo(PolyRing::<Z>::new(2, TermOrder::Grlex)).unwrap();
            let basis = gb.left_gb(0, &gens).unwrap();
            prop_assert!(gb.is_left_gb(0, &basis).unwrap());
            for g in &gens {
                prop_assert!(gb.normal_form(&basis, g).is_zero());
            }
        }

        #[test]
        fn weyl_left_basis(gens in proptest::collection::vec(gf_poly(2, TermOrder::Grlex), 1..3)) {
            let ring = SolvableRing::<F>::weyl(1, TermOrder::Grlex).unwrap();
            let gb = GroebnerBase::field(ring).unwrap();
            let basis = gb.left_gb(0, &gens).unwrap();
            prop_assert!(gb.is_left_gb(0, &basis).unwrap());
            for g in &gens {
                prop_assert!(gb.normal_form(&basis, g).is_zero());
            }
        }

        #[test]
        fn weyl_basis_over_integers(gens in proptest::collection::vec(int_poly(2, TermOrder::Grlex), 1..3)) {
            let ring = SolvableRing::<Z>::weyl(1, TermOrder::Grlex).unwrap();
            let gb = GroebnerBase::pseudo(ring).unwrap();
            let basis = gb.left_gb(0, &gens).unwrap();
            prop_assert!(gb.is_left_gb(0, &basis).unwrap());
            for g in &gens {
                prop_assert!(gb.normal_form(&basis, g).is_zero());
            }
            let minimal = gb.left_minimal_gb(&basis);
            prop_assert_eq!(sorted(gb.left_minimal_gb(&minimal)), sorted(minimal));
        }

        #[test]
        fn quantum_twosided_basis_over_integers(gens in proptest::collection::vec(int_poly(2, TermOrder::Grlex), 1..3)) {
            let ring = SolvableRing::quantum_plane(Z::new(3), TermOrder::Grlex).unwrap();
            let engine = GroebnerEngine::new(ring);
            prop_assert!(matches!(engine, GroebnerEngine::Pseudo(_)));
            let basis = engine.twosided_gb(0, &gens).unwrap();
            prop_assert!(engine.is_twosided_gb(0, &basis).unwrap());
            for g in &gens {
                prop_assert!(engine.normal_form(&basis, g).is_zero());
            }
        }

        #[test]
        fn module_basis_over_integers(gens in proptest::collection::vec(module_poly(), 1..4)) {
            let gb = GroebnerBase::pseudo(PolyRing::<Z>::new(4, TermOrder::Lex)).unwrap();
            let basis = gb.left_gb(2, &gens).unwrap();
            prop_assert!(gb.is_left_gb(2, &basis).unwrap());
            for g in &gens {
                prop_assert!(gb.normal_form(&basis, g).is_zero());
            }
        }

        #[test]
        fn quantum_twosided_closure(gens in proptest::collection::vec(gf_poly(2, TermOrder::Grlex), 1..3)) {
            let ring = SolvableRing::quantum_plane(F::new(3), TermOrder::Grlex).unwrap();
            let gb = GroebnerBase::field(ring).unwrap();
            let basis = gb.twosided_gb(0, &gens).unwrap();
            prop_assert!(gb.is_twosided_gb(0, &basis).unwrap());
            for p in &basis {
                for x in gb.ring().univariate_list(0) {
                    let product = gb.ring().multiply(p, &x);
                    prop_assert!(gb.normal_form(&basis, &product).is_zero());
                }
            }
        }
    }
}
