//! Medicine - name extraction from chat text and price comparison.

mod extractor;
mod quote;

pub use extractor::MedicineExtractor;
pub use quote::{placeholder_quotes, PriceComparison, PriceQuote, PriceSummary};
