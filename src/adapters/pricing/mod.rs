//! Price Source Adapters.
//!
//! - `MarkupPriceSource` - Heuristic extraction from a retail search page
//! - `StaticPriceSource` - Fixed quotes for testing

mod markup_price_source;
mod static_price_source;

pub use markup_price_source::{extract_quotes, MarkupPriceSource, MarkupSourceConfig};
pub use static_price_source::StaticPriceSource;
