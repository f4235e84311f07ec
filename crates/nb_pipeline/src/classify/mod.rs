use std::sync::Arc;

use nb_core::{Entities, PeopleExtractor, SentimentScorer, Topic};

pub mod entities;
pub mod sentiment;
pub mod topic;

pub use entities::CapitalizedNameExtractor;
pub use sentiment::LexiconScorer;

/// Output of one classification pass over an article's chosen text.
#[derive(Debug, Clone)]
pub struct Classification {
    pub topic: Topic,
    pub sentiment: f64,
    pub entities: Entities,
}

/// Derives topic, entities and sentiment from extracted text. The person
/// recognizer and the sentiment scorer are pluggable collaborators.
pub struct Classifier {
    scorer: Arc<dyn SentimentScorer>,
    people: Arc<dyn PeopleExtractor>,
}

impl Classifier {
    pub fn new(scorer: Arc<dyn SentimentScorer>, people: Arc<dyn PeopleExtractor>) -> Self {
        Self { scorer, people }
    }

    /// Classifies the chosen text (content when non-empty, else title).
    /// Sentiment is stored at two-decimal precision.
    pub fn classify(&self, text: &str) -> Classification {
        let tokens: Vec<&str> = text.split_whitespace().collect();

        Classification {
            topic: topic::categorize(text),
            sentiment: round2(self.scorer.score(&tokens)),
            entities: Entities {
                states: entities::find_states(text),
                people: self.people.extract_people(text),
            },
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Arc::new(LexiconScorer), Arc::new(CapitalizedNameExtractor))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScorer(f64);

    impl SentimentScorer for FixedScorer {
        fn score(&self, _tokens: &[&str]) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_sentiment_rounded_to_two_decimals() {
        let classifier = Classifier::new(
            Arc::new(FixedScorer(0.12345)),
            Arc::new(CapitalizedNameExtractor),
        );
        let result = classifier.classify("some text");
        assert_eq!(result.sentiment, 0.12);

        let classifier = Classifier::new(
            Arc::new(FixedScorer(-0.666)),
            Arc::new(CapitalizedNameExtractor),
        );
        assert_eq!(classifier.classify("some text").sentiment, -0.67);
    }

    #[test]
    fn test_classify_combines_all_signals() {
        let classifier = Classifier::default();
        let result = classifier
            .classify("Rahul said the election campaign will reach Delhi before the vote");

        assert_eq!(result.topic, Topic::Politics);
        assert!(result.entities.states.contains(&"delhi".to_string()));
        assert!(result.entities.people.contains(&"Rahul".to_string()));
    }
}
