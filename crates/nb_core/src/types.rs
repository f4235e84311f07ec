use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed topic taxonomy. Declaration order is also the classifier's
/// tie-break order: on equal scores the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Politics,
    Health,
    World,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Politics, Topic::Health, Topic::World];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Politics => "politics",
            Topic::Health => "health",
            Topic::World => "world",
        }
    }
}

/// Named entities pulled out of an article's text. Best-effort heuristics;
/// `people` is deduplicated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entities {
    pub states: Vec<String>,
    pub people: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub source: String,
    pub title: String,
    pub summary: String,
    pub topic: Topic,
    pub sentiment: f64,
    pub entities: Entities,
    pub fetched_at: DateTime<Utc>,
    pub url: String,
}

/// One complete refresh cycle's output, in source-iteration order.
/// Immutable once published; consumers hold it behind an `Arc`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleBatch {
    pub cycle: u64,
    pub refreshed_at: DateTime<Utc>,
    pub articles: Vec<Article>,
}

impl ArticleBatch {
    /// The pre-first-cycle batch: cycle 0, no articles.
    pub fn empty() -> Self {
        Self {
            cycle: 0,
            refreshed_at: Utc::now(),
            articles: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }
}

/// Per-source outcome of the most recent refresh cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceHealth {
    pub source: String,
    pub last_attempt: Option<DateTime<Utc>>,
    pub last_success: Option<DateTime<Utc>>,
    pub consecutive_failures: u32,
    pub articles_last_cycle: usize,
    pub last_error: Option<String>,
}

impl SourceHealth {
    pub fn new(source: String) -> Self {
        Self {
            source,
            last_attempt: None,
            last_success: None,
            consecutive_failures: 0,
            articles_last_cycle: 0,
            last_error: None,
        }
    }
}
