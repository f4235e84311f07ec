use std::collections::HashMap;

use lazy_static::lazy_static;

use nb_core::SentimentScorer;

lazy_static! {
    /// AFINN-style valence lexicon, integer scores from -5 (most negative)
    /// to +5 (most positive), trimmed to vocabulary that shows up in news
    /// copy.
    static ref LEXICON: HashMap<&'static str, i32> = {
        let entries: &[(&str, i32)] = &[
            ("abandon", -2),
            ("accident", -2),
            ("achieve", 3),
            ("agreement", 1),
            ("alarm", -2),
            ("alert", -1),
            ("approval", 2),
            ("approves", 2),
            ("arrest", -2),
            ("arrested", -3),
            ("attack", -1),
            ("attacked", -1),
            ("awful", -3),
            ("bad", -3),
            ("ban", -2),
            ("banned", -2),
            ("benefit", 2),
            ("best", 3),
            ("better", 2),
            ("blame", -2),
            ("blocked", -1),
            ("boost", 2),
            ("calm", 2),
            ("celebrate", 3),
            ("celebrated", 3),
            ("celebration", 3),
            ("cheer", 2),
            ("cheered", 2),
            ("clash", -2),
            ("collapse", -2),
            ("committed", 1),
            ("concern", -2),
            ("concerned", -2),
            ("conflict", -2),
            ("corruption", -3),
            ("crash", -2),
            ("crisis", -3),
            ("cut", -1),
            ("damage", -3),
            ("danger", -2),
            ("dangerous", -2),
            ("dead", -3),
            ("death", -2),
            ("debt", -2),
            ("defeat", -2),
            ("delay", -1),
            ("denied", -2),
            ("deny", -2),
            ("dies", -3),
            ("disaster", -2),
            ("dispute", -2),
            ("doubt", -1),
            ("drought", -2),
            ("emergency", -2),
            ("excellent", 3),
            ("fail", -2),
            ("failed", -2),
            ("failure", -2),
            ("fear", -2),
            ("fraud", -4),
            ("gain", 2),
            ("gains", 2),
            ("good", 3),
            ("great", 3),
            ("growth", 2),
            ("happy", 3),
            ("help", 2),
            ("hope", 2),
            ("hopeful", 2),
            ("improve", 2),
            ("improved", 2),
            ("improvement", 2),
            ("injured", -2),
            ("injury", -2),
            ("killed", -3),
            ("loss", -3),
            ("lost", -3),
            ("peace", 2),
            ("poverty", -1),
            ("progress", 2),
            ("protest", -2),
            ("rallied", 2),
            ("recover", 2),
            ("recovery", 2),
            ("relief", 1),
            ("rescue", 2),
            ("riot", -2),
            ("risk", -2),
            ("scandal", -3),
            ("scam", -2),
            ("strong", 2),
            ("success", 2),
            ("successful", 3),
            ("support", 2),
            ("threat", -2),
            ("tragedy", -2),
            ("violence", -3),
            ("violent", -3),
            ("warning", -3),
            ("welcome", 2),
            ("win", 4),
            ("winner", 4),
            ("winning", 4),
            ("won", 3),
            ("worried", -3),
            ("worry", -3),
            ("worse", -3),
            ("worst", -3),
        ];
        entries.iter().copied().collect()
    };
}

/// Averages word valences over the whole token list; tokens outside the
/// lexicon contribute zero. No stemming is applied, so inflected forms only
/// match where listed.
pub struct LexiconScorer;

impl SentimentScorer for LexiconScorer {
    fn score(&self, tokens: &[&str]) -> f64 {
        if tokens.is_empty() {
            return 0.0;
        }

        let total: i32 = tokens
            .iter()
            .filter_map(|token| LEXICON.get(token.to_lowercase().as_str()).copied())
            .sum();

        f64::from(total) / tokens.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    #[test]
    fn test_positive_text() {
        let scorer = LexiconScorer;
        assert!(scorer.score(&tokens("great win for the recovery")) > 0.0);
    }

    #[test]
    fn test_negative_text() {
        let scorer = LexiconScorer;
        assert!(scorer.score(&tokens("crisis deepens after violent protest")) < 0.0);
    }

    #[test]
    fn test_neutral_text_scores_zero() {
        let scorer = LexiconScorer;
        assert_eq!(scorer.score(&tokens("the committee met on Tuesday")), 0.0);
        assert_eq!(scorer.score(&[]), 0.0);
    }

    #[test]
    fn test_normalizes_by_total_token_count() {
        let scorer = LexiconScorer;
        // "win" scores 4 over 4 tokens
        assert_eq!(scorer.score(&tokens("a big win today")), 1.0);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let scorer = LexiconScorer;
        assert_eq!(scorer.score(&tokens("WIN")), 4.0);
    }
}
