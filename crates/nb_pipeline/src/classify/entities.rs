use lazy_static::lazy_static;
use regex::Regex;

use nb_core::PeopleExtractor;

/// Gazetteer checked by case-insensitive containment against the full text,
/// in declaration order.
const STATES: [&str; 5] = ["delhi", "mumbai", "kerala", "gujarat", "punjab"];

lazy_static! {
    static ref NAME_PATTERN: Regex = Regex::new(r"^[A-Z][a-z]+$").unwrap();
}

pub fn find_states(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    STATES
        .iter()
        .filter(|state| lowered.contains(**state))
        .map(|state| state.to_string())
        .collect()
}

/// Capitalization heuristic for person names: a single leading uppercase
/// letter followed by lowercase letters, longer than two characters.
/// Sentence-initial words are false positives; multi-word names come out as
/// separate tokens.
pub struct CapitalizedNameExtractor;

impl PeopleExtractor for CapitalizedNameExtractor {
    fn extract_people(&self, text: &str) -> Vec<String> {
        let mut people: Vec<String> = Vec::new();

        for token in text.split(|c: char| !c.is_alphanumeric()) {
            if token.len() > 2
                && NAME_PATTERN.is_match(token)
                && !people.iter().any(|seen| seen == token)
            {
                people.push(token.to_string());
            }
        }

        people
    }
}
