//! Structured diagnostics for completion runs.
//!
//! The driver reports what it does to a [`DiagnosticsSink`] passed in by
//! the caller. [`TracingSink`] forwards events to `tracing`, [`EventLog`]
//! keeps them for inspection and [`NullSink`] drops them.

use tracing::{debug, info, trace};

use crate::pairlist::PairListStats;

/// One step of a completion run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GbEvent {
    /// Generators were filtered and the pair list seeded.
    Initialized {
        /// Generators passed in.
        generators: usize,
        /// Distinct nonzero generators after normalization.
        retained: usize,
    },
    /// A critical pair was taken from the queue.
    PairSelected {
        /// Older basis index.
        i: usize,
        /// Newer basis index.
        j: usize,
        /// Its priority.
        priority: u64,
    },
    /// The S-polynomial or its normal form vanished.
    ReducedToZero {
        /// Older basis index.
        i: usize,
        /// Newer basis index.
        j: usize,
    },
    /// A new polynomial entered the basis.
    Admitted {
        /// Its basis index.
        index: usize,
        /// Its total degree.
        degree: u64,
    },
    /// A right multiple x_k * g entered the basis (two-sided closure).
    ClosureAdded {
        /// Its basis index.
        index: usize,
        /// The basis element that was multiplied.
        source: usize,
        /// The variable it was multiplied with.
        var: usize,
    },
    /// A unit was found; the ideal is the whole ring.
    Collapsed,
    /// Minimalization finished.
    Minimalized {
        /// Basis size before.
        before: usize,
        /// Basis size after.
        after: usize,
    },
    /// The run finished.
    Finished {
        /// Pair list counters.
        stats: PairListStats,
    },
}

/// Receives events from the driver.
pub trait DiagnosticsSink {
    /// Records one event.
    fn record(&mut self, event: GbEvent);
}

/// Forwards events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn record(&mut self, event: GbEvent) {
        match event {
            GbEvent::Initialized {
                generators,
                retained,
            } => debug!(generators, retained, "initialized"),
            GbEvent::PairSelected { i, j, priority } => trace!(i, j, priority, "pair selected"),
            GbEvent::ReducedToZero { i, j } => trace!(i, j, "reduced to zero"),
            GbEvent::Admitted { index, degree } => debug!(index, degree, "admitted"),
            GbEvent::ClosureAdded { index, source, var } => {
                debug!(index, source, var, "closure element admitted");
            }
            GbEvent::Collapsed => debug!("unit found, ideal is the whole ring"),
            GbEvent::Minimalized { before, after } => debug!(before, after, "minimalized"),
            GbEvent::Finished { stats } => info!(%stats, "completion finished"),
        }
    }
}

/// Collects events in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GbEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded events.
    #[must_use]
    pub fn events(&self) -> &[GbEvent] {
        &self.events
    }

    /// Returns true if a collapse was recorded.
    #[must_use]
    pub fn collapsed(&self) -> bool {
        self.events.contains(&GbEvent::Collapsed)
    }

    /// Number of recorded events matching `pred`.
    pub fn count(&self, pred: impl Fn(&GbEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    /// The final pair list counters, if the run finished normally.
    #[must_use]
    pub fn stats(&self) -> Option<&PairListStats> {
        self.events.iter().rev().find_map(|e| match e {
            GbEvent::Finished { stats } => Some(stats),
            _ => None,
        })
    }
}

impl DiagnosticsSink for EventLog {
    fn record(&mut self, event: GbEvent) {
        self.events.push(event);
    }
}

/// Drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn record(&mut self, _event: GbEvent) {}
}
