//! Static Price Source - fixed quotes for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::medicine::PriceQuote;
use crate::ports::{PriceSource, PriceSourceError};

#[derive(Debug, Clone)]
pub struct StaticPriceSource {
    label: String,
    outcome: Result<Vec<PriceQuote>, PriceSourceError>,
    searches: Arc<Mutex<Vec<String>>>,
}

impl StaticPriceSource {
    pub fn new(label: impl Into<String>, quotes: Vec<PriceQuote>) -> Self {
        Self {
            label: label.into(),
            outcome: Ok(quotes),
            searches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn empty(label: impl Into<String>) -> Self {
        Self::new(label, Vec::new())
    }

    pub fn failing(label: impl Into<String>, error: PriceSourceError) -> Self {
        Self {
            label: label.into(),
            outcome: Err(error),
            searches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn searches(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }
}

#[async_trait]
impl PriceSource for StaticPriceSource {
    fn label(&self) -> &str {
        &self.label
    }

    async fn search(&self, medicine: &str) -> Result<Vec<PriceQuote>, PriceSourceError> {
        self.searches.lock().unwrap().push(medicine.to_string());
        self.outcome.clone()
    }
}
