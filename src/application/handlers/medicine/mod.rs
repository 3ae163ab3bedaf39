//! Medicine handlers - price comparison across retail sources.

mod compare_prices;

pub use compare_prices::{ComparePricesHandler, ComparePricesQuery, PriceQueryError};
