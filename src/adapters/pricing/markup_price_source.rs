//! Markup Price Source - best-effort price extraction from a retail search page.
//!
//! Listing pages carry no schema, so extraction is a heuristic: every
//! anchor with visible text is a candidate product, and the first `₹` price
//! token inside the anchor or shortly after it is taken as its price.
//! Anchors without a nearby price are skipped.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use std::time::Duration;

use crate::domain::medicine::PriceQuote;
use crate::ports::{PriceSource, PriceSourceError};

static ANCHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<a\b[^>]*?\bhref\s*=\s*["']([^"']+)["'][^>]*>(.*?)</a>"#)
        .expect("anchor pattern is valid")
});

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern is valid"));

static PRICE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"₹\s*([\d,]+(?:\.\d+)?)").expect("price pattern is valid"));

/// How far past an anchor to look for its price, in bytes of markup.
const PRICE_WINDOW: usize = 600;

const MAX_NAME_CHARS: usize = 120;

/// One retail site's search endpoint.
#[derive(Debug, Clone)]
pub struct MarkupSourceConfig {
    pub label: String,
    pub search_url: String,
    pub query_param: String,
    /// Prefix for site-relative product links.
    pub link_base: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub cap: usize,
}

pub struct MarkupPriceSource {
    config: MarkupSourceConfig,
    client: Client,
}

impl MarkupPriceSource {
    pub fn new(config: MarkupSourceConfig) -> Result<Self, PriceSourceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                PriceSourceError::Network(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl PriceSource for MarkupPriceSource {
    fn label(&self) -> &str {
        &self.config.label
    }

    async fn search(&self, medicine: &str) -> Result<Vec<PriceQuote>, PriceSourceError> {
        let response = self
            .client
            .get(&self.config.search_url)
            .query(&[(self.config.query_param.as_str(), medicine)])
            .send()
            .await
            .map_err(|e| PriceSourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PriceSourceError::Status {
                status: status.as_u16(),
            });
        }

        let page_url = response.url().to_string();
        let markup = response
            .text()
            .await
            .map_err(|e| PriceSourceError::Extraction(e.to_string()))?;

        Ok(extract_quotes(&markup, &self.config, &page_url))
    }
}

/// Extracts up to `config.cap` quotes from a listing page.
pub fn extract_quotes(markup: &str, config: &MarkupSourceConfig, page_url: &str) -> Vec<PriceQuote> {
    let mut quotes = Vec::new();

    for anchor in ANCHOR.captures_iter(markup) {
        if quotes.len() >= config.cap {
            break;
        }
        let (Some(whole), Some(href), Some(inner)) = (anchor.get(0), anchor.get(1), anchor.get(2))
        else {
            continue;
        };

        let text = visible_text(inner.as_str());
        if text.is_empty() {
            continue;
        }

        // Price inside the link text wins over one in the trailing markup.
        let (name, price) = match parse_price(&text) {
            Some(price) => (text.split('₹').next().unwrap_or("").trim().to_string(), price),
            None => {
                let trailing = visible_text(window_after(markup, whole.end()));
                match parse_price(&trailing) {
                    Some(price) => (text, price),
                    None => continue,
                }
            }
        };
        if name.is_empty() {
            continue;
        }

        quotes.push(PriceQuote::new(
            truncate_chars(&name, MAX_NAME_CHARS),
            Some(price),
            resolve_link(href.as_str(), &config.link_base, page_url),
            config.label.clone(),
        ));
    }

    quotes
}

fn parse_price(text: &str) -> Option<f64> {
    let digits = PRICE.captures(text)?.get(1)?.as_str().replace(',', "");
    digits.parse().ok()
}

fn visible_text(markup: &str) -> String {
    let stripped = TAG.replace_all(markup, " ");
    let decoded = stripped.replace("&nbsp;", " ").replace("&amp;", "&").replace("&#8377;", "₹");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn window_after(markup: &str, start: usize) -> &str {
    let mut end = (start + PRICE_WINDOW).min(markup.len());
    while !markup.is_char_boundary(end) {
        end -= 1;
    }
    // Stop at the next anchor so a neighbour's price is not borrowed.
    let window = &markup[start..end];
    match window.find("<a ") {
        Some(next) => &window[..next],
        None => window,
    }
}

fn resolve_link(href: &str, link_base: &str, page_url: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", link_base.trim_end_matches('/'), href)
    } else if href.starts_with("http") {
        href.to_string()
    } else {
        page_url.to_string()
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
