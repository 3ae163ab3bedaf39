//! Medicine Identity Extractor - pulls a medicine name out of free text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Cheap gate: drug-form nouns, transaction verbs, common generic/brand names.
static MEDICINE_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:medicine|tablet|capsule|syrup|injection|drug|medication|price|cost|buy|paracetamol|dolo|crocin|aspirin|ibuprofen|amoxicillin|azithromycin|metformin|vitamin|supplement|ointment|cream)\b",
    )
    .expect("valid regex")
});

/// Name templates, tried in order.
static NAME_TEMPLATES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(?:price|cost|buy|find|get|need|looking for)\s+(?:of\s+)?([a-zA-Z0-9\s-]+?)(?:\s+(?:tablet|medicine|capsule|syrup|mg|near me)|\?|$)",
        r"(?i)(?:medicine|tablet|drug)\s+(?:called\s+|named\s+)?([a-zA-Z0-9\s-]+?)(?:\s|$|\?)",
        r"(?i)\b([a-zA-Z]{3,}(?:\s+\d+)?)\s+(?:price|cost|tablet|medicine)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

const STOPWORDS: &[&str] = &["the", "for", "and", "this", "that"];

const KNOWN_MEDICINES: &[&str] = &[
    "paracetamol",
    "dolo",
    "crocin",
    "azithromycin",
    "ibuprofen",
    "aspirin",
    "amoxicillin",
];

static KNOWN_MEDICINE_MATCHERS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    KNOWN_MEDICINES
        .iter()
        .map(|name| {
            let re = Regex::new(&format!(r"(?i)\b{name}\b")).expect("valid regex");
            (*name, re)
        })
        .collect()
});

pub struct MedicineExtractor;

impl MedicineExtractor {
    /// True when the text looks like a medicine or price question.
    pub fn is_medicine_query(text: &str) -> bool {
        MEDICINE_KEYWORDS.is_match(text)
    }

    /// Returns the first acceptable candidate name, if any.
    pub fn extract(text: &str) -> Option<String> {
        NAME_TEMPLATES
            .iter()
            .filter_map(|template| template.captures(text))
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
            .find(|name| is_acceptable(name))
            .or_else(|| {
                KNOWN_MEDICINE_MATCHERS
                    .iter()
                    .find(|(_, re)| re.is_match(text))
                    .map(|(name, _)| name.to_string())
            })
    }
}

fn is_acceptable(name: &str) -> bool {
    name.chars().count() > 2 && !STOPWORDS.contains(&name.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_of_template() {
        assert_eq!(
            MedicineExtractor::extract("price of paracetamol").as_deref(),
            Some("paracetamol")
        );
    }

    #[test]
    fn buy_template_stops_at_form_word() {
        assert_eq!(
            MedicineExtractor::extract("I want to buy dolo 650 tablet").as_deref(),
            Some("dolo 650")
        );
    }

    #[test]
    fn question_mark_terminates_name() {
        assert_eq!(
            MedicineExtractor::extract("what is the cost of crocin advance?").as_deref(),
            Some("crocin advance")
        );
    }

    #[test]
    fn near_me_terminates_name() {
        assert_eq!(
            MedicineExtractor::extract("where can I get pantoprazole near me").as_deref(),
            Some("pantoprazole")
        );
    }

    #[test]
    fn looking_for_template() {
        assert_eq!(
            MedicineExtractor::extract("I am looking for cetirizine").as_deref(),
            Some("cetirizine")
        );
    }

    #[test]
    fn called_template() {
        assert_eq!(
            MedicineExtractor::extract("is there a medicine called zincovit for kids").as_deref(),
            Some("zincovit")
        );
    }

    #[test]
    fn name_before_price_template() {
        assert_eq!(
            MedicineExtractor::extract("azee 500 price").as_deref(),
            Some("azee 500")
        );
    }

    #[test]
    fn stopword_candidates_fall_through() {
        // "the" from the third template is rejected; the known-name scan wins
        assert_eq!(
            MedicineExtractor::extract("paracetamol or the tablet").as_deref(),
            Some("paracetamol")
        );
        assert_eq!(MedicineExtractor::extract("what about the price?"), None);
    }

    #[test]
    fn short_candidates_are_rejected() {
        assert_eq!(MedicineExtractor::extract("get it?"), None);
    }

    #[test]
    fn unrelated_text_yields_nothing() {
        assert_eq!(MedicineExtractor::extract("I feel lonely tonight"), None);
    }

    #[test]
    fn gate_matches_keywords_only() {
        assert!(MedicineExtractor::is_medicine_query("How much does Aspirin cost"));
        assert!(MedicineExtractor::is_medicine_query("vitamin d"));
        assert!(!MedicineExtractor::is_medicine_query("I want to kill myself"));
        assert!(!MedicineExtractor::is_medicine_query("I have a mild headache"));
    }
}
