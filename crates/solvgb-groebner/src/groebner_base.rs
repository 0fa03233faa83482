//! The completion driver.
//!
//! [`GroebnerBase`] runs Buchberger's algorithm for left and two-sided
//! ideals of a [`PolynomialAlgebra`]. The coefficient-dependent steps
//! come from its [`Reduction`] variant, which is fixed when the driver is
//! built; nothing in the loop asks the coefficients what they can do.
//!
//! A run goes through three phases:
//!
//! 1. Initialize: drop zero generators, collapse on a unit, strip the
//!    common content, normalize and deduplicate, seed a fresh
//!    [`PairList`].
//! 2. Process: take pairs until none are left, reduce their
//!    S-polynomials and admit the nonzero normal forms.
//! 3. Minimalize: drop top-reducible elements and interreduce the rest.
//!
//! A constant normal form ends the run at once: the ideal is the whole
//! ring.

use std::collections::VecDeque;
use std::marker::PhantomData;

use rayon::prelude::*;
use solvgb_poly::{GenPolynomial, PolynomialAlgebra};
use solvgb_rings::{Capability, Coefficient, Ring};
use tracing::debug_span;

use crate::config::GbConfig;
use crate::diagnostics::{DiagnosticsSink, GbEvent, NullSink, TracingSink};
use crate::error::{GbError, Result};
use crate::pairlist::{PairList, PairListStats};
use crate::reduction::{FieldReduction, PseudoReduction, Reduction};

/// Result shape of an extended completion.
///
/// No ring currently supports extended completion; see
/// [`GroebnerBase::extended_gb`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedBasis<C: Coefficient> {
    /// The Gröbner basis.
    pub basis: Vec<GenPolynomial<C>>,
    /// Row k expresses `basis[k]` in the generators.
    pub from_generators: Vec<Vec<GenPolynomial<C>>>,
    /// Row k expresses generator k in the basis.
    pub to_generators: Vec<Vec<GenPolynomial<C>>>,
}

/// Buchberger completion over a fixed ring and reduction variant.
#[derive(Debug)]
pub struct GroebnerBase<C: Coefficient, A: PolynomialAlgebra<C>, R: Reduction<C>> {
    ring: A,
    reduction: R,
    config: GbConfig,
    _coeffs: PhantomData<C>,
}

/// What Initialize hands to the processing loop.
enum Start<C: Coefficient> {
    /// The result is already known.
    Done(Vec<GenPolynomial<C>>),
    /// Normalized distinct generators and their common content.
    Run {
        content: C,
        polys: Vec<GenPolynomial<C>>,
    },
}

impl<C: Coefficient, A: PolynomialAlgebra<C>> GroebnerBase<C, A, PseudoReduction> {
    /// Creates the pseudo-division driver.
    ///
    /// # Errors
    ///
    /// Fails with [`GbError::FieldCoefficients`] if `C` is a field.
    pub fn pseudo(ring: A) -> Result<Self> {
        Self::new(ring)
    }
}

impl<C: Coefficient, A: PolynomialAlgebra<C>> GroebnerBase<C, A, FieldReduction> {
    /// Creates the field driver.
    ///
    /// # Errors
    ///
    /// Fails with [`GbError::NonFieldCoefficients`] if `C` is not a field.
    pub fn field(ring: A) -> Result<Self> {
        Self::new(ring)
    }
}

impl<C: Coefficient, A: PolynomialAlgebra<C>, R: Reduction<C>> GroebnerBase<C, A, R> {
    /// Creates a driver, checking that `R` matches the coefficients.
    ///
    /// # Errors
    ///
    /// Fails if the coefficient capability differs from the variant's.
    pub fn new(ring: A) -> Result<Self> {
        match (R::CAPABILITY, C::CAPABILITY) {
            (required, found) if required == found => Ok(Self::unchecked(ring, GbConfig::default())),
            (Capability::PseudoDivisible, _) => Err(GbError::FieldCoefficients),
            (Capability::Field, found) => Err(GbError::NonFieldCoefficients { found }),
        }
    }

    pub(crate) fn unchecked(ring: A, config: GbConfig) -> Self {
        Self {
            ring,
            reduction: R::default(),
            config,
            _coeffs: PhantomData,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: GbConfig) -> Self {
        self.config = config;
        self
    }

    /// The ring.
    #[must_use]
    pub fn ring(&self) -> &A {
        &self.ring
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &GbConfig {
        &self.config
    }

    /// Computes a reduced left Gröbner basis, logging through `tracing`.
    ///
    /// Over pseudo-divisible coefficients every element carries the
    /// common content of the generators: `[2x, 4y]` over Z gives
    /// `[2x, 2y]`. Pass the result to [`GroebnerBase::left_minimal_gb`]
    /// for the primitive basis.
    ///
    /// # Errors
    ///
    /// Fails if `modv` exceeds the number of variables or a generator
    /// belongs to another ring.
    pub fn left_gb(&self, modv: usize, gens: &[GenPolynomial<C>]) -> Result<Vec<GenPolynomial<C>>> {
        self.left_gb_with(modv, gens, &mut TracingSink)
    }

    /// Computes a reduced left Gröbner basis, reporting to `sink`.
    ///
    /// # Errors
    ///
    /// See [`GroebnerBase::left_gb`].
    pub fn left_gb_with(
        &self,
        modv: usize,
        gens: &[GenPolynomial<C>],
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<Vec<GenPolynomial<C>>> {
        let _span = debug_span!("left_gb", modv, generators = gens.len()).entered();
        self.complete(modv, gens, false, sink)
    }

    /// Computes a reduced two-sided Gröbner basis, logging through
    /// `tracing`.
    ///
    /// Every basis element is closed under right multiplication by the
    /// indeterminates outside the module coordinates. In a commutative
    /// ring this is the left Gröbner basis.
    /// The content factor is kept as in [`GroebnerBase::left_gb`].
    ///
    /// # Errors
    ///
    /// See [`GroebnerBase::left_gb`].
    pub fn twosided_gb(&self, modv: usize, gens: &[GenPolynomial<C>]) -> Result<Vec<GenPolynomial<C>>> {
        self.twosided_gb_with(modv, gens, &mut TracingSink)
    }

    /// Computes a reduced two-sided Gröbner basis, reporting to `sink`.
    ///
    /// # Errors
    ///
    /// See [`GroebnerBase::left_gb`].
    pub fn twosided_gb_with(
        &self,
        modv: usize,
        gens: &[GenPolynomial<C>],
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<Vec<GenPolynomial<C>>> {
        let _span = debug_span!("twosided_gb", modv, generators = gens.len()).entered();
        self.complete(modv, gens, true, sink)
    }

    /// Extended completion with transformation matrices.
    ///
    /// # Errors
    ///
    /// Always fails with [`GbError::Unsupported`].
    pub fn extended_gb(&self, _modv: usize, _gens: &[GenPolynomial<C>]) -> Result<ExtendedBasis<C>> {
        Err(GbError::Unsupported {
            operation: "extended_gb",
        })
    }

    /// Reduces a Gröbner basis to the reduced minimal one.
    ///
    /// Zero elements are dropped. If some element is a unit the result is
    /// `[1]`.
    #[must_use]
    pub fn left_minimal_gb(&self, basis: &[GenPolynomial<C>]) -> Vec<GenPolynomial<C>> {
        self.minimalize(basis.to_vec(), &mut NullSink)
    }

    /// The normal form of `p` with respect to `basis`.
    #[must_use]
    pub fn normal_form(&self, basis: &[GenPolynomial<C>], p: &GenPolynomial<C>) -> GenPolynomial<C> {
        self.reduction.normal_form(&self.ring, basis, p)
    }

    /// Checks that every same-component S-polynomial of `basis` reduces
    /// to zero.
    ///
    /// Pairs are checked in parallel.
    ///
    /// # Errors
    ///
    /// Fails if `modv` exceeds the number of variables or an element
    /// belongs to another ring.
    pub fn is_left_gb(&self, modv: usize, basis: &[GenPolynomial<C>]) -> Result<bool> {
        self.check_input(modv, basis)?;
        let basis: Vec<GenPolynomial<C>> = basis.iter().filter(|p| !p.is_zero()).cloned().collect();

        let pairs: Vec<(usize, usize)> = (0..basis.len())
            .flat_map(|j| (0..j).map(move |i| (i, j)))
            .filter(|&(i, j)| {
                let (Some(ei), Some(ej)) = (basis[i].leading_exp(), basis[j].leading_exp()) else {
                    return false;
                };
                ei.prefix(modv) == ej.prefix(modv)
            })
            .collect();

        pairs
            .par_iter()
            .map(|&(i, j)| {
                let s = self
                    .reduction
                    .s_polynomial(&self.ring, modv, &basis[i], &basis[j])?;
                Ok(self.normal_form(&basis, &s).is_zero())
            })
            .try_reduce(|| true, |a, b| Ok(a && b))
    }

    /// Checks that `basis` is a left Gröbner basis closed under right
    /// multiplication by every indeterminate.
    ///
    /// # Errors
    ///
    /// See [`GroebnerBase::is_left_gb`].
    pub fn is_twosided_gb(&self, modv: usize, basis: &[GenPolynomial<C>]) -> Result<bool> {
        if !self.is_left_gb(modv, basis)? {
            return Ok(false);
        }
        let vars = self.ring.univariate_list(modv);
        Ok(basis.par_iter().filter(|p| !p.is_zero()).all(|p| {
            vars.iter()
                .all(|x| self.normal_form(basis, &self.ring.multiply(p, x)).is_zero())
        }))
    }

    fn check_input(&self, modv: usize, gens: &[GenPolynomial<C>]) -> Result<()> {
        let num_vars = self.ring.num_vars();
        if modv > num_vars {
            return Err(GbError::InvalidModuleCount { modv, num_vars });
        }
        for p in gens {
            self.ring.check(p)?;
        }
        Ok(())
    }

    fn complete(
        &self,
        modv: usize,
        gens: &[GenPolynomial<C>],
        twosided: bool,
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<Vec<GenPolynomial<C>>> {
        self.check_input(modv, gens)?;
        let mut pairlist = PairList::with_config(modv, &self.ring, &self.config)?;

        let (content, polys) = match self.initialize(gens, sink) {
            Start::Done(basis) => {
                sink.record(GbEvent::Finished {
                    stats: pairlist.stats(),
                });
                return Ok(basis);
            }
            Start::Run { content, polys } => (content, polys),
        };

        let mut closure = VecDeque::new();
        for p in polys {
            let index = pairlist.put(p)?;
            if twosided {
                closure.push_back(index);
            }
        }
        if self.close(modv, &mut pairlist, &mut closure, sink)? {
            return Ok(self.collapse(&content, pairlist.stats(), sink));
        }

        while pairlist.has_next() {
            let Some(pair) = pairlist.remove_next() else {
                continue;
            };
            sink.record(GbEvent::PairSelected {
                i: pair.i,
                j: pair.j,
                priority: pair.priority,
            });

            let basis = pairlist.basis();
            let s = self
                .reduction
                .s_polynomial(&self.ring, modv, &basis[pair.i], &basis[pair.j])?;
            let h = if s.is_zero() {
                s
            } else {
                self.normal_form(basis, &s)
            };
            if h.is_zero() {
                pairlist.set_zero(&pair);
                sink.record(GbEvent::ReducedToZero { i: pair.i, j: pair.j });
                continue;
            }

            let h = self.reduction.normalize(&h);
            if h.is_constant() {
                return Ok(self.collapse(&content, pairlist.stats(), sink));
            }

            let degree = h.degree();
            let index = pairlist.put(h)?;
            sink.record(GbEvent::Admitted { index, degree });

            if twosided {
                closure.push_back(index);
                if self.close(modv, &mut pairlist, &mut closure, sink)? {
                    return Ok(self.collapse(&content, pairlist.stats(), sink));
                }
            }
        }

        let stats = pairlist.stats();
        let basis = self.minimalize(pairlist.into_basis(), sink);
        let basis = if content.is_one() {
            basis
        } else {
            basis.iter().map(|p| p.scale(&content)).collect()
        };
        sink.record(GbEvent::Finished { stats });
        Ok(basis)
    }

    fn initialize(&self, gens: &[GenPolynomial<C>], sink: &mut dyn DiagnosticsSink) -> Start<C> {
        let polys: Vec<GenPolynomial<C>> = gens.iter().filter(|p| !p.is_zero()).cloned().collect();
        if polys.is_empty() {
            return Start::Done(Vec::new());
        }
        if polys.iter().any(GenPolynomial::is_unit) {
            sink.record(GbEvent::Collapsed);
            return Start::Done(vec![self.ring.one()]);
        }

        let content = self.reduction.list_content(&polys);
        let mut retained: Vec<GenPolynomial<C>> = Vec::with_capacity(polys.len());
        for p in &polys {
            let q = self.reduction.normalize(p);
            if !retained.contains(&q) {
                retained.push(q);
            }
        }
        sink.record(GbEvent::Initialized {
            generators: gens.len(),
            retained: retained.len(),
        });

        if retained.iter().any(GenPolynomial::is_constant) {
            sink.record(GbEvent::Collapsed);
            return Start::Done(vec![self.ring.constant(content)]);
        }
        Start::Run {
            content,
            polys: retained,
        }
    }

    /// Right-multiplies every queued basis element by each indeterminate
    /// and admits the nonzero normal forms, queueing them in turn.
    ///
    /// Returns true if a constant was found.
    fn close(
        &self,
        modv: usize,
        pairlist: &mut PairList<C>,
        queue: &mut VecDeque<usize>,
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<bool> {
        if queue.is_empty() {
            return Ok(false);
        }
        let vars = self.ring.univariate_list(modv);

        while let Some(source) = queue.pop_front() {
            for (offset, x) in vars.iter().enumerate() {
                let product = self.ring.multiply(&pairlist.basis()[source], x);
                let h = self.normal_form(pairlist.basis(), &product);
                if h.is_zero() {
                    continue;
                }

                let h = self.reduction.normalize(&h);
                if h.is_constant() {
                    return Ok(true);
                }
                let index = pairlist.put(h)?;
                queue.push_back(index);
                sink.record(GbEvent::ClosureAdded {
                    index,
                    source,
                    var: modv + offset,
                });
            }
        }
        Ok(false)
    }

    fn collapse(
        &self,
        content: &C,
        stats: PairListStats,
        sink: &mut dyn DiagnosticsSink,
    ) -> Vec<GenPolynomial<C>> {
        sink.record(GbEvent::Collapsed);
        sink.record(GbEvent::Finished { stats });
        vec![self.ring.constant(content.clone())]
    }

    fn minimalize(
        &self,
        basis: Vec<GenPolynomial<C>>,
        sink: &mut dyn DiagnosticsSink,
    ) -> Vec<GenPolynomial<C>> {
        let before = basis.len();
        let mut pending: VecDeque<GenPolynomial<C>> = basis.into_iter().filter(|p| !p.is_zero()).collect();
        if pending.iter().any(GenPolynomial::is_unit) {
            return vec![self.ring.one()];
        }

        // drop elements whose leading term is a multiple of another one
        let mut kept: Vec<GenPolynomial<C>> = Vec::with_capacity(pending.len());
        while let Some(p) = pending.pop_front() {
            if !self.reduction.is_top_reducible(pending.make_contiguous(), &p)
                && !self.reduction.is_top_reducible(&kept, &p)
            {
                kept.push(p);
            }
        }

        // interreduce, each element against all others
        kept.reverse();
        let mut reduced: VecDeque<GenPolynomial<C>> = kept.into();
        for _ in 0..reduced.len() {
            let Some(p) = reduced.pop_front() else {
                break;
            };
            let h = self.normal_form(reduced.make_contiguous(), &p);
            reduced.push_back(self.reduction.normalize(&h));
        }

        let reduced: Vec<GenPolynomial<C>> = reduced.into();
        sink.record(GbEvent::Minimalized {
            before,
            after: reduced.len(),
        });
        reduced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::EventLog;
    use crate::selection::SugarSelection;
    use solvgb_poly::{PolyRing, SolvableRing, TermOrder};
    use solvgb_rings::{FiniteField, UnivariatePoly, Q, Z};

    fn formatted<C: Coefficient, A: PolynomialAlgebra<C>>(ring: &A, basis: &[GenPolynomial<C>]) -> Vec<String> {
        let mut out: Vec<String> = basis.iter().map(|p| ring.format(p)).collect();
        out.sort();
        out
    }

    #[test]
    fn test_redundant_generator_is_dropped() {
        let ring = PolyRing::<Q>::with_names(&["x", "y"], TermOrder::Lex);
        let gens = vec![
            ring.polynomial(&[(1, &[2, 0]), (-1, &[0, 2])]).unwrap(),
            ring.polynomial(&[(1, &[1, 0]), (-1, &[0, 1])]).unwrap(),
        ];
        let gb = GroebnerBase::field(ring).unwrap();
        let mut log = EventLog::new();
        let basis = gb.left_gb_with(0, &gens, &mut log).unwrap();

        assert_eq!(formatted(gb.ring(), &basis), vec!["x - y"]);
        assert!(log.events().contains(&GbEvent::Minimalized { before: 2, after: 1 }));
        assert_eq!(log.count(|e| matches!(e, GbEvent::ReducedToZero { .. })), 1);
        assert!(!log.collapsed());
    }

    #[test]
    fn test_integer_content_is_kept() {
        let ring = PolyRing::<Z>::with_names(&["x", "y"], TermOrder::Lex);
        let gens = vec![ring.constant(Z::new(6)), ring.constant(Z::new(10))];
        let gb = GroebnerBase::pseudo(ring).unwrap();
        let mut log = EventLog::new();
        let basis = gb.left_gb_with(0, &gens, &mut log).unwrap();

        assert_eq!(formatted(gb.ring(), &basis), vec!["2"]);
        assert!(log.collapsed());
    }

    #[test]
    fn test_content_factor_is_not_minimal() {
        let ring = PolyRing::<Z>::with_names(&["x", "y"], TermOrder::Lex);
        let gens = vec![
            ring.polynomial(&[(2, &[1, 0])]).unwrap(),
            ring.polynomial(&[(4, &[0, 1])]).unwrap(),
        ];
        let gb = GroebnerBase::pseudo(ring).unwrap();
        let basis = gb.left_gb(0, &gens).unwrap();
        assert_eq!(formatted(gb.ring(), &basis), vec!["2*x", "2*y"]);

        let minimal = gb.left_minimal_gb(&basis);
        assert_eq!(formatted(gb.ring(), &minimal), vec!["x", "y"]);
        assert_eq!(formatted(gb.ring(), &gb.left_minimal_gb(&minimal)), vec!["x", "y"]);
    }

    #[test]
    fn test_unit_generator_collapses_immediately() {
        let ring = PolyRing::<Q>::new(2, TermOrder::Grevlex);
        let gens = vec![ring.polynomial(&[(1, &[1, 1])]).unwrap(), ring.one()];
        let gb = GroebnerBase::field(ring).unwrap();
        let mut log = EventLog::new();
        let basis = gb.left_gb_with(0, &gens, &mut log).unwrap();

        assert_eq!(basis, vec![gb.ring().one()]);
        assert!(log.collapsed());
        assert_eq!(log.count(|e| matches!(e, GbEvent::PairSelected { .. })), 0);
        assert_eq!(log.stats(), Some(&PairListStats::default()));
    }

    #[test]
    fn test_zero_and_empty_input() {
        let ring = PolyRing::<Q>::new(2, TermOrder::Grevlex);
        let gb = GroebnerBase::field(ring).unwrap();
        assert!(gb.left_gb(0, &[]).unwrap().is_empty());
        assert!(gb.left_gb(0, &[gb.ring().zero()]).unwrap().is_empty());
    }

    #[test]
    fn test_integer_basis() {
        let ring = PolyRing::<Z>::new(1, TermOrder::Lex);
        let gens = vec![
            ring.polynomial(&[(1, &[2]), (-1, &[0])]).unwrap(),
            ring.polynomial(&[(2, &[1]), (-2, &[0])]).unwrap(),
        ];
        let gb = GroebnerBase::pseudo(ring).unwrap();
        let basis = gb.left_gb(0, &gens).unwrap();
        assert_eq!(formatted(gb.ring(), &basis), vec!["x - 1"]);

        // 2x + 1 and 3x generate the unit ideal over Q
        let gens = vec![
            gb.ring().polynomial(&[(2, &[1]), (1, &[0])]).unwrap(),
            gb.ring().polynomial(&[(3, &[1])]).unwrap(),
        ];
        assert_eq!(gb.left_gb(0, &gens).unwrap(), vec![gb.ring().one()]);
    }

    #[test]
    fn test_polynomial_coefficients() {
        type F = UnivariatePoly<Q>;
        let ring = PolyRing::<F>::new(2, TermOrder::Grlex);
        let t = F::t();
        let one = F::one();
        let x = ring.variable(0).unwrap();
        let y = ring.variable(1).unwrap();

        // (t + 1)*x normalizes to x, then t*x + y leaves y
        let f = x.scale(&t).add(&y);
        let g = x.scale(&(t.clone() + one));
        let gb = GroebnerBase::pseudo(ring).unwrap();
        let basis = gb.left_gb(0, &[f, g]).unwrap();
        assert_eq!(basis.len(), 2);
        assert!(basis.iter().all(|p| p.len() == 1 && p.leading_coeff().is_some_and(|c| c.is_one())));
        assert!(gb.is_left_gb(0, &basis).unwrap());
    }

    #[test]
    fn test_capability_checks() {
        assert_eq!(
            GroebnerBase::pseudo(PolyRing::<Q>::new(2, TermOrder::Lex)).err(),
            Some(GbError::FieldCoefficients)
        );
        assert_eq!(
            GroebnerBase::field(PolyRing::<Z>::new(2, TermOrder::Lex)).err(),
            Some(GbError::NonFieldCoefficients {
                found: Capability::PseudoDivisible
            })
        );
    }

    #[test]
    fn test_extended_gb_is_unsupported() {
        let gb = GroebnerBase::field(PolyRing::<Q>::new(1, TermOrder::Lex)).unwrap();
        let x = gb.ring().variable(0).unwrap();
        assert_eq!(
            gb.extended_gb(0, &[x]),
            Err(GbError::Unsupported {
                operation: "extended_gb"
            })
        );
    }

    #[test]
    fn test_input_validation() {
        let gb = GroebnerBase::field(PolyRing::<Q>::new(2, TermOrder::Lex)).unwrap();
        assert_eq!(
            gb.left_gb(3, &[]),
            Err(GbError::InvalidModuleCount { modv: 3, num_vars: 2 })
        );
        let foreign = PolyRing::<Q>::new(3, TermOrder::Lex).one();
        assert!(matches!(gb.twosided_gb(0, &[foreign]), Err(GbError::Poly(_))));
    }

    #[test]
    fn test_weyl_left_ideal() {
        let ring = SolvableRing::<Q>::weyl(1, TermOrder::Grlex).unwrap();
        let x = ring.variable(0).unwrap();
        let d = ring.variable(1).unwrap();
        let gb = GroebnerBase::field(ring).unwrap();

        // d*x - x*d = 1 lies in the left ideal of x and d
        assert_eq!(gb.left_gb(0, &[x.clone(), d]).unwrap(), vec![gb.ring().one()]);
        // x alone generates a proper left ideal
        assert_eq!(gb.left_gb(0, &[x.clone()]).unwrap(), vec![x.clone()]);
        // but the Weyl algebra is simple
        let mut log = EventLog::new();
        assert_eq!(gb.twosided_gb_with(0, &[x], &mut log).unwrap(), vec![gb.ring().one()]);
        assert!(log.collapsed());
    }

    #[test]
    fn test_quantum_plane_ideals() {
        type F = FiniteField<7>;
        let ring = SolvableRing::quantum_plane(F::new(3), TermOrder::Grlex).unwrap();
        let x = ring.variable(0).unwrap();
        let y = ring.variable(1).unwrap();
        let gb = GroebnerBase::field(ring).unwrap();

        let basis = gb.left_gb(0, &[x.clone(), y]).unwrap();
        assert_eq!(formatted(gb.ring(), &basis), vec!["x", "y"]);

        let basis = gb.twosided_gb(0, &[x.clone()]).unwrap();
        assert_eq!(basis, vec![x]);
        assert!(gb.is_twosided_gb(0, &basis).unwrap());
    }

    #[test]
    fn test_twosided_closure_adds_right_multiples() {
        // y*x = x*y + x: the two-sided ideal of y contains x
        let mut table = solvgb_poly::RelationTable::<Q>::new(2, TermOrder::Grlex);
        let xpoly = GenPolynomial::monomial(solvgb_poly::ExpVector::new(&[1, 0]), Q::from_integer(1), TermOrder::Grlex);
        table.add(1, 0, Q::from_integer(1), xpoly).unwrap();
        let ring = SolvableRing::new(&["x", "y"], table).unwrap();
        let y = ring.variable(1).unwrap();
        let gb = GroebnerBase::field(ring).unwrap();

        assert_eq!(gb.left_gb(0, &[y.clone()]).unwrap(), vec![y.clone()]);

        let mut log = EventLog::new();
        let basis = gb.twosided_gb_with(0, &[y], &mut log).unwrap();
        assert_eq!(formatted(gb.ring(), &basis), vec!["x", "y"]);
        assert_eq!(log.count(|e| matches!(e, GbEvent::ClosureAdded { source: 0, var: 0, .. })), 1);
        assert!(gb.is_twosided_gb(0, &basis).unwrap());
        assert!(!gb.is_twosided_gb(0, &[gb.ring().variable(1).unwrap()]).unwrap());
    }

    #[test]
    fn test_module_components() {
        // e1, e2 are module coordinates
        let ring = PolyRing::<Q>::with_names(&["e1", "e2", "x", "y"], TermOrder::Lex);
        let gens = vec![
            ring.polynomial(&[(1, &[1, 0, 1, 0]), (1, &[0, 1, 0, 0])]).unwrap(),
            ring.polynomial(&[(1, &[1, 0, 0, 1])]).unwrap(),
        ];
        let gb = GroebnerBase::field(ring).unwrap();
        let basis = gb.left_gb(2, &gens).unwrap();
        assert_eq!(formatted(gb.ring(), &basis), vec!["e1*x + e2", "e1*y", "e2*y"]);
        assert!(gb.is_left_gb(2, &basis).unwrap());
    }

    #[test]
    fn test_is_left_gb() {
        let ring = PolyRing::<Q>::with_names(&["x", "y"], TermOrder::Lex);
        let f = ring.polynomial(&[(1, &[1, 0]), (-1, &[0, 1])]).unwrap();
        let g = ring.polynomial(&[(1, &[1, 0]), (-1, &[0, 0])]).unwrap();
        let gb = GroebnerBase::field(ring).unwrap();
        assert!(!gb.is_left_gb(0, &[f.clone(), g.clone()]).unwrap());

        let basis = gb.left_gb(0, &[f, g]).unwrap();
        assert_eq!(formatted(gb.ring(), &basis), vec!["x - 1", "y - 1"]);
        assert!(gb.is_left_gb(0, &basis).unwrap());
    }

    #[test]
    fn test_criteria_do_not_change_the_result() {
        let ring = PolyRing::<Q>::with_names(&["x", "y", "z"], TermOrder::Grevlex);
        let gens = vec![
            ring.polynomial(&[(1, &[2, 0, 0]), (-1, &[0, 1, 0])]).unwrap(),
            ring.polynomial(&[(1, &[0, 2, 0]), (-1, &[0, 0, 1])]).unwrap(),
            ring.polynomial(&[(1, &[1, 1, 1]), (-1, &[0, 0, 0])]).unwrap(),
        ];
        let gb = GroebnerBase::field(ring).unwrap();

        let mut with = EventLog::new();
        let expected = gb.left_gb_with(0, &gens, &mut with).unwrap();

        let plain = GroebnerBase::field(gb.ring().clone())
            .unwrap()
            .with_config(GbConfig::default().without_criteria());
        let mut without = EventLog::new();
        let basis = plain.left_gb_with(0, &gens, &mut without).unwrap();
        assert_eq!(formatted(gb.ring(), &basis), formatted(gb.ring(), &expected));
        assert_eq!(without.stats().map(|s| s.eliminated), Some(0));

        let sugar = GroebnerBase::field(gb.ring().clone())
            .unwrap()
            .with_config(GbConfig::default().with_selection(SugarSelection));
        let basis = sugar.left_gb(0, &gens).unwrap();
        assert_eq!(formatted(gb.ring(), &basis), formatted(gb.ring(), &expected));
        assert!(gb.is_left_gb(0, &expected).unwrap());
    }

    #[test]
    fn test_product_criterion_is_counted() {
        let ring = PolyRing::<Q>::new(2, TermOrder::Grlex);
        let gens = vec![
            ring.polynomial(&[(1, &[2, 0]), (1, &[0, 0])]).unwrap(),
            ring.polynomial(&[(1, &[0, 2]), (-1, &[0, 0])]).unwrap(),
        ];
        let gb = GroebnerBase::field(ring).unwrap();
        let mut log = EventLog::new();
        let basis = gb.left_gb_with(0, &gens, &mut log).unwrap();
        assert_eq!(basis.len(), 2);

        let stats = log.stats().copied().unwrap();
        assert_eq!((stats.pairs, stats.eliminated, stats.pending), (1, 1, 0));
    }

    #[test]
    fn test_minimal_gb() {
        let ring = PolyRing::<Q>::with_names(&["x", "y"], TermOrder::Grlex);
        let gb = GroebnerBase::field(ring).unwrap();
        let r = gb.ring();
        let basis = vec![
            r.polynomial(&[(2, &[1, 0]), (2, &[0, 1])]).unwrap(),
            r.polynomial(&[(1, &[2, 0]), (1, &[0, 0])]).unwrap(),
            r.zero(),
            r.polynomial(&[(1, &[0, 1]), (1, &[0, 0])]).unwrap(),
        ];
        let minimal = gb.left_minimal_gb(&basis);
        // x + y reduces to x - 1 modulo y + 1, x^2 + 1 is dropped
        assert_eq!(formatted(r, &minimal), vec!["x - 1", "y + 1"]);

        let again = gb.left_minimal_gb(&minimal);
        assert_eq!(formatted(r, &again), formatted(r, &minimal));
        assert_eq!(gb.left_minimal_gb(&[r.one(), r.variable(0).unwrap()]), vec![r.one()]);
    }
}
