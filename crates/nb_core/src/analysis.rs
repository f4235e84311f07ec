/// Lexicon-based sentiment scorer. Takes the article's token list and
/// returns a signed score, positive meaning positive sentiment.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, tokens: &[&str]) -> f64;
}

/// Person-name recognition over free text.
///
/// The default implementation is a capitalization heuristic with known
/// false positives (sentence-initial words, capitalized common nouns) and
/// false negatives (multi-word names split into separate entries). Swap in
/// a real recognizer here without touching the pipeline.
pub trait PeopleExtractor: Send + Sync {
    fn extract_people(&self, text: &str) -> Vec<String>;
}
