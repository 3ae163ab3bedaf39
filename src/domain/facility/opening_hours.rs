//! Best-effort evaluation of `opening_hours` tag text.
//!
//! Only two shapes are understood: a round-the-clock marker and a segment
//! naming today's two-letter weekday followed by one `HH:MM-HH:MM` range.
//! Multi-day ranges, holidays and overnight spans fall through to `Unknown`.

use chrono::{DateTime, Datelike, NaiveTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningStatus {
    Open,
    Closed,
    Unknown,
}

/// Raw tag text plus the status derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpeningHours {
    pub raw: Option<String>,
    pub status: OpeningStatus,
    pub note: Option<String>,
}

const ROUND_THE_CLOCK_MARKERS: &[&str] = &["24/7", "24h", "24 hr"];
const UNKNOWN_NOTE: &str = "Check opening hours";

static SEGMENT_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[;/]").expect("valid regex"));

static TIME_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2}:\d{2})\s*-\s*(\d{1,2}:\d{2})").expect("valid regex"));

/// One matcher per weekday, Monday first.
static DAY_MATCHERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["mo", "tu", "we", "th", "fr", "sa", "su"]
        .iter()
        .map(|day| Regex::new(&format!(r"\b{day}[\w-]*\b")).expect("valid regex"))
        .collect()
});

impl OpeningHours {
    /// Evaluates the tag text against the given instant (UTC).
    pub fn evaluate(raw: Option<&str>, now: DateTime<Utc>) -> Self {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return Self {
                raw: None,
                status: OpeningStatus::Unknown,
                note: None,
            };
        };

        let text = raw.trim().to_lowercase();
        if ROUND_THE_CLOCK_MARKERS.iter().any(|m| text.contains(m)) {
            return Self::with(raw, OpeningStatus::Open, "24/7".to_string());
        }

        let today = &DAY_MATCHERS[now.weekday().num_days_from_monday() as usize];
        let time_of_day = now.time();

        for segment in SEGMENT_SPLIT.split(&text).map(str::trim).filter(|s| !s.is_empty()) {
            if !today.is_match(segment) {
                continue;
            }
            let Some((start_text, end_text, start, end)) = parse_range(segment) else {
                continue;
            };
            return if start <= time_of_day && time_of_day <= end {
                Self::with(raw, OpeningStatus::Open, format!("Open today {start_text}-{end_text}"))
            } else {
                Self::with(raw, OpeningStatus::Closed, format!("Opens at {start_text}"))
            };
        }

        Self::with(raw, OpeningStatus::Unknown, UNKNOWN_NOTE.to_string())
    }

    fn with(raw: &str, status: OpeningStatus, note: String) -> Self {
        Self {
            raw: Some(raw.to_string()),
            status,
            note: Some(note),
        }
    }
}

/// Extracts a same-day range; overnight spans are rejected.
fn parse_range(segment: &str) -> Option<(&str, &str, NaiveTime, NaiveTime)> {
    let caps = TIME_RANGE.captures(segment)?;
    let start_text = caps.get(1)?.as_str();
    let end_text = caps.get(2)?.as_str();
    let start = NaiveTime::parse_from_str(start_text, "%H:%M").ok()?;
    let end = NaiveTime::parse_from_str(end_text, "%H:%M").ok()?;
    (start <= end).then_some((start_text, end_text, start, end))
}
