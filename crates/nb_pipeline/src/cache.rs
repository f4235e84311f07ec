use std::sync::Arc;

use tokio::sync::RwLock;

use nb_core::ArticleBatch;

/// Process-wide holder of the latest completed batch.
///
/// `publish` is the only mutator and swaps the whole batch at once; readers
/// clone the `Arc` and can never observe a mix of two cycles. Versioning by
/// cycle id keeps a late-finishing stale cycle from clobbering a fresher
/// result.
pub struct ArticleCache {
    current: RwLock<Arc<ArticleBatch>>,
}

impl ArticleCache {
    /// Starts empty; readers before the first publish get cycle 0 with no
    /// articles.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(ArticleBatch::empty())),
        }
    }

    /// Swaps in a completed batch. Returns false, leaving the cache
    /// untouched, when the batch's cycle id is not newer than the published
    /// one.
    pub async fn publish(&self, batch: ArticleBatch) -> bool {
        let mut current = self.current.write().await;
        if batch.cycle <= current.cycle {
            return false;
        }
        *current = Arc::new(batch);
        true
    }

    /// Always succeeds; never blocks on a refresh in progress beyond the
    /// swap itself.
    pub async fn current(&self) -> Arc<ArticleBatch> {
        self.current.read().await.clone()
    }
}

impl Default for ArticleCache {
    fn default() -> Self {
        Self::new()
    }
}
