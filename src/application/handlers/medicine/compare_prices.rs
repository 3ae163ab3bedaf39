//! ComparePricesHandler - Query handler aggregating retail price sources.
//!
//! Sources are queried concurrently. Each one is isolated: a failure is
//! logged at debug level and contributes nothing, and a source returning
//! more than the cap is truncated. The merged comparison is never empty.

use futures::future::join_all;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::medicine::{PriceComparison, PriceQuote};
use crate::ports::PriceSource;

#[derive(Debug, Clone)]
pub struct ComparePricesQuery {
    pub medicine: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceQueryError {
    #[error("Medicine name required")]
    MissingMedicine,
}

pub struct ComparePricesHandler {
    sources: Vec<Arc<dyn PriceSource>>,
    per_source_cap: usize,
}

impl ComparePricesHandler {
    pub fn new(sources: Vec<Arc<dyn PriceSource>>, per_source_cap: usize) -> Self {
        Self {
            sources,
            per_source_cap,
        }
    }

    pub async fn handle(&self, query: ComparePricesQuery) -> Result<PriceComparison, PriceQueryError> {
        let medicine = query.medicine.trim();
        if medicine.is_empty() {
            return Err(PriceQueryError::MissingMedicine);
        }

        tracing::info!(medicine, "Fetching prices");
        Ok(self.compare(medicine).await)
    }

    /// Queries every source for an already validated name.
    pub async fn compare(&self, medicine: &str) -> PriceComparison {
        let searches = self.sources.iter().map(|source| self.search_one(source.as_ref(), medicine));
        let quotes: Vec<PriceQuote> = join_all(searches).await.into_iter().flatten().collect();

        let comparison = PriceComparison::assemble(medicine, quotes);
        if comparison.placeholder {
            tracing::info!(medicine, "No source returned prices, using placeholder quotes");
        }
        comparison
    }

    async fn search_one(&self, source: &dyn PriceSource, medicine: &str) -> Vec<PriceQuote> {
        match source.search(medicine).await {
            Ok(mut quotes) => {
                quotes.truncate(self.per_source_cap);
                tracing::debug!(source = source.label(), count = quotes.len(), "Price source answered");
                quotes
            }
            Err(e) => {
                tracing::debug!(source = source.label(), error = %e, "Price source failed");
                Vec::new()
            }
        }
    }
}
