//! Price quotes and the comparison assembled from them.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single priced product listing from one retail source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub name: String,
    /// Currency units (₹). Absent when the listing had no usable price.
    pub price: Option<f64>,
    pub url: String,
    pub pharmacy: String,
    pub rating: Option<f64>,
    pub reviews: Option<u32>,
    pub in_stock: bool,
}

impl PriceQuote {
    pub fn new(
        name: impl Into<String>,
        price: Option<f64>,
        url: impl Into<String>,
        pharmacy: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            url: url.into(),
            pharmacy: pharmacy.into(),
            rating: None,
            reviews: None,
            in_stock: true,
        }
    }

    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = Some(rating);
        self.reviews = Some(reviews);
        self
    }

    /// Price only when present and a real number.
    pub fn usable_price(&self) -> Option<f64> {
        self.price.filter(|p| p.is_finite() && *p >= 0.0)
    }
}

/// Statistics over the priced quotes of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSummary {
    pub min_price: f64,
    pub max_price: f64,
    pub avg_price: f64,
    pub best_deal: PriceQuote,
    pub total_options: usize,
}

impl PriceSummary {
    /// Returns `None` when no quote carries a usable price.
    pub fn from_quotes(quotes: &[PriceQuote]) -> Option<Self> {
        let best_deal = quotes
            .iter()
            .filter_map(|q| q.usable_price().map(|p| (p, q)))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, q)| q.clone())?;

        let prices: Vec<f64> = quotes.iter().filter_map(PriceQuote::usable_price).collect();
        let min_price = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max_price = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = prices.iter().sum::<f64>() / prices.len() as f64;

        Some(Self {
            min_price,
            max_price,
            avg_price: (mean * 100.0).round() / 100.0,
            best_deal,
            total_options: quotes.len(),
        })
    }
}

/// All quotes for one medicine, cheapest first, with their summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceComparison {
    pub medicine: String,
    pub results: Vec<PriceQuote>,
    pub summary: Option<PriceSummary>,
    /// True when every source came back empty and placeholders were used.
    pub placeholder: bool,
}

impl PriceComparison {
    /// Merges quotes from all sources into a ranked, deduplicated comparison.
    ///
    /// An empty input is replaced by [`placeholder_quotes`], so `results` is
    /// never empty.
    pub fn assemble(medicine: impl Into<String>, quotes: Vec<PriceQuote>) -> Self {
        let medicine = medicine.into();
        let mut results = dedupe(quotes);
        let placeholder = results.is_empty();
        if placeholder {
            results = placeholder_quotes(&medicine);
        }

        let summary = PriceSummary::from_quotes(&results);
        results.sort_by(compare_by_price);

        Self {
            medicine,
            results,
            summary,
            placeholder,
        }
    }
}

/// Ascending by price; quotes without a usable price sort last.
fn compare_by_price(a: &PriceQuote, b: &PriceQuote) -> Ordering {
    match (a.usable_price(), b.usable_price()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Drops repeated listings (same source, name and price), keeping the first.
fn dedupe(quotes: Vec<PriceQuote>) -> Vec<PriceQuote> {
    let mut kept: Vec<PriceQuote> = Vec::with_capacity(quotes.len());
    for quote in quotes {
        let seen = kept.iter().any(|k| {
            k.pharmacy == quote.pharmacy && k.name == quote.name && k.price == quote.price
        });
        if !seen {
            kept.push(quote);
        }
    }
    kept
}

/// Fixed stand-in listings used when no source returns anything.
pub fn placeholder_quotes(medicine: &str) -> Vec<PriceQuote> {
    let title = title_case(medicine);
    let slug = medicine.to_lowercase().replace(' ', "-");
    vec![
        PriceQuote::new(
            format!("{title} 500mg Strip of 10 Tablets"),
            Some(45.50),
            format!("https://www.1mg.com/drugs/{slug}"),
            "1mg",
        )
        .with_rating(4.3, 234),
        PriceQuote::new(
            format!("{title} 500mg Bottle of 15 Tablets"),
            Some(52.00),
            format!("https://pharmeasy.in/search/all?name={slug}"),
            "PharmEasy",
        )
        .with_rating(4.1, 156),
        PriceQuote::new(
            format!("{title} 650mg Strip of 15 Tablets"),
            Some(38.75),
            format!("https://www.netmeds.com/catalogsearch/result/{slug}"),
            "Netmeds",
        )
        .with_rating(4.5, 412),
    ]
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
