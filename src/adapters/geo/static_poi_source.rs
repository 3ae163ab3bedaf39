//! Static POI Source - canned elements for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ports::{AmenityQuery, PoiElement, PoiError, PoiSource};

#[derive(Debug, Clone)]
pub struct StaticPoiSource {
    outcome: Result<Vec<PoiElement>, PoiError>,
    queries: Arc<Mutex<Vec<AmenityQuery>>>,
}

impl StaticPoiSource {
    pub fn new(elements: Vec<PoiElement>) -> Self {
        Self {
            outcome: Ok(elements),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn failing(error: PoiError) -> Self {
        Self {
            outcome: Err(error),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn queries(&self) -> Vec<AmenityQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl PoiSource for StaticPoiSource {
    async fn find_amenities(&self, query: &AmenityQuery) -> Result<Vec<PoiElement>, PoiError> {
        self.queries.lock().unwrap().push(query.clone());
        self.outcome.clone()
    }
}
