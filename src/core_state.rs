//! Process-wide read-only state.
//!
//! The drug table and entity provider are constructed once in `main`
//! and shared behind `Arc`. Nothing here mutates after construction,
//! so requests need no locking.

use std::sync::Arc;

use crate::knowledge::DrugTable;
use crate::pipeline::{EntityProvider, PrescriptionAnalyzer};

/// Shared handles for the analysis core.
pub struct CoreState {
    table: Arc<DrugTable>,
    provider: Arc<dyn EntityProvider>,
}

impl CoreState {
    pub fn new(table: DrugTable, provider: Arc<dyn EntityProvider>) -> Self {
        Self {
            table: Arc::new(table),
            provider,
        }
    }

    pub fn table(&self) -> &DrugTable {
        &self.table
    }

    pub fn provider(&self) -> Arc<dyn EntityProvider> {
        Arc::clone(&self.provider)
    }

    /// Build an analyzer over the shared table and provider.
    pub fn analyzer(&self) -> PrescriptionAnalyzer {
        PrescriptionAnalyzer::new(Arc::clone(&self.table), Arc::clone(&self.provider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::NullProvider;

    #[test]
    fn analyzer_shares_the_table() {
        let state = CoreState::new(DrugTable::builtin(), Arc::new(NullProvider));
        let analyzer = state.analyzer();
        assert_eq!(analyzer.table().len(), state.table().len());
    }
}
