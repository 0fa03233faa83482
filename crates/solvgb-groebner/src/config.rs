//! Engine configuration.

use std::sync::Arc;

use crate::selection::{DegreeSelection, PairSelection};

/// Configuration for the completion engine.
#[derive(Clone, Debug)]
pub struct GbConfig {
    /// Pair selection strategy.
    pub selection: Arc<dyn PairSelection>,
    /// Whether to apply Buchberger's chain criterion.
    pub chain_criterion: bool,
    /// Whether to apply the product criterion (commutative rings only).
    pub product_criterion: bool,
}

impl Default for GbConfig {
    fn default() -> Self {
        Self {
            selection: Arc::new(DegreeSelection),
            chain_criterion: true,
            product_criterion: true,
        }
    }
}

impl GbConfig {
    /// Replaces the selection strategy.
    #[must_use]
    pub fn with_selection(mut self, selection: impl PairSelection + 'static) -> Self {
        self.selection = Arc::new(selection);
        self
    }

    /// Enables or disables the chain criterion.
    #[must_use]
    pub fn with_chain_criterion(mut self, enabled: bool) -> Self {
        self.chain_criterion = enabled;
        self
    }

    /// Enables or disables the product criterion.
    #[must_use]
    pub fn with_product_criterion(mut self, enabled: bool) -> Self {
        self.product_criterion = enabled;
        self
    }

    /// Disables every elimination criterion: each pair is reduced.
    #[must_use]
    pub fn without_criteria(self) -> Self {
        self.with_chain_criterion(false).with_product_criterion(false)
    }
}
