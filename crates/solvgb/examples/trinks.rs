//! Trinks' system over GF(32003) and over the integers.
//!
//! Run with `cargo run --example trinks`.

use solvgb::prelude::*;
use solvgb::rings::finite_field::GF32003;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const NAMES: [&str; 6] = ["w", "p", "z", "t", "s", "b"];

fn trinks<C: Coefficient>(ring: &PolyRing<C>) -> Result<Vec<GenPolynomial<C>>, GbError> {
    let e = |w, p, z, t, s, b| [w, p, z, t, s, b];
    let system: [&[(i64, [u32; 6])]; 6] = [
        &[(45, e(0, 1, 0, 0, 0, 0)), (35, e(0, 0, 0, 0, 1, 0)), (-165, e(0, 0, 0, 0, 0, 1)), (-36, e(0, 0, 0, 0, 0, 0))],
        &[(35, e(0, 1, 0, 0, 0, 0)), (40, e(0, 0, 1, 0, 0, 0)), (25, e(0, 0, 0, 1, 0, 0)), (-27, e(0, 0, 0, 0, 1, 0))],
        &[(15, e(1, 0, 0, 0, 0, 0)), (25, e(0, 1, 0, 0, 1, 0)), (30, e(0, 0, 1, 0, 0, 0)), (-18, e(0, 0, 0, 1, 0, 0)), (-165, e(0, 0, 0, 0, 0, 2))],
        &[(-9, e(1, 0, 0, 0, 0, 0)), (15, e(0, 1, 0, 1, 0, 0)), (20, e(0, 0, 1, 0, 1, 0))],
        &[(1, e(1, 1, 0, 0, 0, 0)), (2, e(0, 0, 1, 1, 0, 0)), (-11, e(0, 0, 0, 0, 0, 3))],
        &[(99, e(1, 0, 0, 0, 0, 0)), (-11, e(0, 0, 0, 0, 1, 1)), (3, e(0, 0, 0, 0, 0, 2))],
    ];

    system
        .iter()
        .map(|terms| {
            let terms: Vec<(i64, &[u32])> = terms.iter().map(|(c, e)| (*c, e.as_slice())).collect();
            ring.polynomial(&terms).map_err(GbError::from)
        })
        .collect()
}

fn run<C: Coefficient>(label: &str) -> Result<(), GbError> {
    let ring = PolyRing::<C>::with_names(&NAMES, TermOrder::Grevlex);
    let gens = trinks(&ring)?;
    let engine = GroebnerEngine::new(ring);

    let mut log = EventLog::new();
    let basis = engine.left_gb_with(0, &gens, &mut log)?;

    info!(coefficients = label, capability = %engine.capability(), size = basis.len(), "trinks basis");
    if let Some(stats) = log.stats() {
        info!(%stats, "pair list");
    }
    for p in &basis {
        println!("  {}", engine.ring().format(p));
    }
    Ok(())
}

fn main() -> Result<(), GbError> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to set tracing subscriber: {e}");
    }

    run::<GF32003>("GF(32003)")?;
    run::<Z>("Z")?;
    Ok(())
}
