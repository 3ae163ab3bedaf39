//! Price Source Port - one retail listing source.
//!
//! The aggregator is source-agnostic: it fans a medicine name out to every
//! configured source and merges whatever comes back.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::medicine::PriceQuote;

#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Short label used in logs and as the quote's pharmacy name.
    fn label(&self) -> &str;

    /// Searches the source for a product name.
    async fn search(&self, medicine: &str) -> Result<Vec<PriceQuote>, PriceSourceError>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceSourceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("source returned status {status}")]
    Status { status: u16 },

    #[error("failed to read listing page: {0}")]
    Extraction(String),
}
