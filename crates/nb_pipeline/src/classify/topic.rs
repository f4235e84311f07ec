use nb_core::Topic;

/// Keyword lists per topic. A token scores for a topic when it contains
/// any of the topic's keywords as a substring.
fn keywords(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Politics => &[
            "government",
            "minister",
            "election",
            "party",
            "parliament",
            "policy",
            "congress",
            "bjp",
            "political",
            "leader",
            "democracy",
            "vote",
            "campaign",
        ],
        Topic::Health => &[
            "hospital",
            "medical",
            "health",
            "disease",
            "covid",
            "doctor",
            "vaccine",
            "treatment",
            "patient",
            "medicine",
            "healthcare",
            "wellness",
            "clinic",
        ],
        Topic::World => &[
            "international",
            "global",
            "foreign",
            "world",
            "diplomatic",
            "embassy",
            "overseas",
            "bilateral",
            "multinational",
            "united nations",
            "summit",
            "treaty",
        ],
    }
}

/// Picks the topic whose keyword list matches the most tokens. Only a
/// strictly greater score displaces the running best, so ties (including
/// the all-zero case) keep the earliest declared topic.
pub fn categorize(text: &str) -> Topic {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let mut best = Topic::ALL[0];
    let mut best_score = score(&tokens, best);

    for &topic in &Topic::ALL[1..] {
        let candidate = score(&tokens, topic);
        if candidate > best_score {
            best = topic;
            best_score = candidate;
        }
    }

    best
}

fn score(tokens: &[&str], topic: Topic) -> usize {
    tokens
        .iter()
        .filter(|token| keywords(topic).iter().any(|kw| token.contains(kw)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_politics_keywords() {
        assert_eq!(
            categorize("The minister faces an election over the new policy"),
            Topic::Politics
        );
    }

    #[test]
    fn test_health_keywords() {
        assert_eq!(
            categorize("Hospital doctors began a new vaccine treatment drive"),
            Topic::Health
        );
    }

    #[test]
    fn test_world_keywords() {
        assert_eq!(
            categorize("Diplomatic summit draws global and foreign attention"),
            Topic::World
        );
    }

    #[test]
    fn test_substring_matching() {
        // "governments" and "votes" both contain keywords
        assert_eq!(categorize("governments count votes"), Topic::Politics);
    }

    #[test]
    fn test_no_keywords_defaults_to_first_topic() {
        assert_eq!(categorize("rain expected over the weekend"), Topic::Politics);
        assert_eq!(categorize(""), Topic::Politics);
    }

    #[test]
    fn test_tie_keeps_earlier_topic() {
        // one health token vs one world token, health declared earlier
        assert_eq!(categorize("hospital summit"), Topic::Health);
    }
}
