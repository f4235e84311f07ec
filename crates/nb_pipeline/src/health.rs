use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;

use nb_core::SourceHealth;

/// Per-source outcome record, updated once per source per cycle. Read-only
/// to consumers; snapshots come back in registry order.
pub struct HealthBoard {
    order: Vec<String>,
    entries: RwLock<HashMap<String, SourceHealth>>,
}

impl HealthBoard {
    pub fn new(sources: Vec<String>) -> Self {
        let entries = sources
            .iter()
            .map(|name| (name.clone(), SourceHealth::new(name.clone())))
            .collect();
        Self {
            order: sources,
            entries: RwLock::new(entries),
        }
    }

    pub async fn record_success(&self, source: &str, articles: usize) {
        let now = Utc::now();
        let mut entries = self.entries.write().await;
        let entry = entries
            .entry(source.to_string())
            .or_insert_with(|| SourceHealth::new(source.to_string()));
        entry.last_attempt = Some(now);
        entry.last_success = Some(now);
        entry.consecutive_failures = 0;
        entry.articles_last_cycle = articles;
        entry.last_error = None;
    }

    pub async fn record_failure(&self, source: &str, cause: &str) {
        let now = Utc::now();
        let mut entries = self.entries.write().await;
        let entry = entries
            .entry(source.to_string())
            .or_insert_with(|| SourceHealth::new(source.to_string()));
        entry.last_attempt = Some(now);
        entry.consecutive_failures += 1;
        entry.articles_last_cycle = 0;
        entry.last_error = Some(cause.to_string());
    }

    pub async fn snapshot(&self) -> Vec<SourceHealth> {
        let entries = self.entries.read().await;
        self.order
            .iter()
            .filter_map(|name| entries.get(name).cloned())
            .collect()
    }
}
