//! Left and two-sided ideals in the Weyl algebra and the quantum plane.
//!
//! Run with `cargo run --example weyl`.

use solvgb::prelude::*;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn weyl() -> Result<(), GbError> {
    let ring = SolvableRing::<Q>::weyl(2, TermOrder::Grevlex)?;
    info!(%ring, "weyl algebra");

    // x1*d1 + x2*d2 - 3 (Euler operator) and d1^2 - d2^2
    let gens = vec![
        ring.polynomial(&[(1, &[1, 0, 1, 0]), (1, &[0, 1, 0, 1]), (-3, &[0, 0, 0, 0])])?,
        ring.polynomial(&[(1, &[0, 0, 2, 0]), (-1, &[0, 0, 0, 2])])?,
    ];
    let engine = GroebnerEngine::new(ring);

    let left = engine.left_gb(0, &gens)?;
    println!("left Gröbner basis:");
    for p in &left {
        println!("  {}", engine.ring().format(p));
    }

    let mut log = EventLog::new();
    let twosided = engine.twosided_gb_with(0, &gens, &mut log)?;
    info!(collapsed = log.collapsed(), size = twosided.len(), "two-sided basis");
    Ok(())
}

fn quantum_plane() -> Result<(), GbError> {
    type F = FiniteField<101>;
    let ring = SolvableRing::quantum_plane(F::new(7), TermOrder::Grlex)?;
    info!(%ring, "quantum plane");

    // x^2 + y, x*y - 1
    let gens = vec![
        ring.polynomial(&[(1, &[2, 0]), (1, &[0, 1])])?,
        ring.polynomial(&[(1, &[1, 1]), (-1, &[0, 0])])?,
    ];
    let engine = GroebnerEngine::new(ring);

    for (label, basis) in [("left", engine.left_gb(0, &gens)?), ("two-sided", engine.twosided_gb(0, &gens)?)] {
        println!("{label} Gröbner basis:");
        for p in &basis {
            println!("  {}", engine.ring().format(p));
        }
    }
    Ok(())
}

fn main() -> Result<(), GbError> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to set tracing subscriber: {e}");
    }

    weyl()?;
    quantum_plane()
}
