use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::future::join_all;
use tokio::sync::Semaphore;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use nb_core::{Article, ArticleBatch, Result, SourceHealth, Transport};

use crate::cache::ArticleCache;
use crate::classify::Classifier;
use crate::extract;
use crate::fetch::Fetcher;
use crate::health::HealthBoard;
use crate::sources::Source;

/// Tunables for the refresh loop.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Wall-clock period between refresh cycles.
    pub interval: Duration,
    /// Maximum sources fetched concurrently within one cycle.
    pub concurrency: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30 * 60),
            concurrency: 4,
        }
    }
}

/// Owns one ingestion pipeline: registry, fetcher, classifier, cache and
/// health board. Cycles run one at a time and publish a complete batch or
/// nothing; per-source failures never escape the cycle.
pub struct PipelineManager {
    sources: Vec<Source>,
    fetcher: Fetcher,
    classifier: Classifier,
    cache: ArticleCache,
    health: HealthBoard,
    semaphore: Arc<Semaphore>,
    cycle_counter: AtomicU64,
    config: PipelineConfig,
}

impl PipelineManager {
    pub fn new(
        sources: Vec<Source>,
        transport: Arc<dyn Transport>,
        classifier: Classifier,
        config: PipelineConfig,
    ) -> Self {
        let names = sources.iter().map(|s| s.name.clone()).collect();
        Self {
            fetcher: Fetcher::new(transport),
            classifier,
            cache: ArticleCache::new(),
            health: HealthBoard::new(names),
            semaphore: Arc::new(Semaphore::new(config.concurrency.max(1))),
            cycle_counter: AtomicU64::new(0),
            sources,
            config,
        }
    }

    /// Begins the immediate refresh and the periodic cycles. Fire and
    /// forget; progress is observable through the cache and health board.
    pub fn start(self: Arc<Self>) {
        tokio::spawn(async move {
            let period = self.config.interval.max(Duration::from_secs(1));
            let mut ticker = interval(period);
            // a cycle slower than the period must not queue a burst behind it
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                self.run_cycle().await;
            }
        });
    }

    /// One full pass over the registry. Sources are fetched through a
    /// bounded worker pool and the batch is assembled in registry order.
    pub async fn run_cycle(&self) {
        let cycle = self.cycle_counter.fetch_add(1, Ordering::SeqCst) + 1;
        info!("starting refresh cycle {}", cycle);

        let tasks: Vec<_> = self
            .sources
            .iter()
            .map(|source| {
                let semaphore = Arc::clone(&self.semaphore);
                async move {
                    match semaphore.acquire().await {
                        Ok(_permit) => self.process_source(source).await,
                        // the semaphore is never closed
                        Err(_) => Vec::new(),
                    }
                }
            })
            .collect();

        // join_all keeps task order, so the batch stays in registry order
        let articles: Vec<Article> = join_all(tasks).await.into_iter().flatten().collect();

        let total = articles.len();
        let batch = ArticleBatch {
            cycle,
            refreshed_at: Utc::now(),
            articles,
        };

        if self.cache.publish(batch).await {
            info!("refresh cycle {} complete: {} articles", cycle, total);
        } else {
            warn!("refresh cycle {} outpaced by a newer cycle, batch dropped", cycle);
        }
    }

    /// Fetch, extract and classify one source. Never propagates: a failure
    /// is recorded on the health board and contributes zero articles.
    async fn process_source(&self, source: &Source) -> Vec<Article> {
        match self.try_process_source(source).await {
            Ok(articles) => {
                info!("{}: {} articles", source.name, articles.len());
                self.health
                    .record_success(&source.name, articles.len())
                    .await;
                articles
            }
            Err(e) => {
                warn!("{}: {}", source.name, e);
                self.health.record_failure(&source.name, &e.to_string()).await;
                Vec::new()
            }
        }
    }

    async fn try_process_source(&self, source: &Source) -> Result<Vec<Article>> {
        let markup = self.fetcher.fetch(source).await?;
        let candidates = extract::extract(source, &markup)?;
        let fetched_at = Utc::now();

        Ok(candidates
            .into_iter()
            .map(|candidate| {
                let chosen = if candidate.content.is_empty() {
                    &candidate.title
                } else {
                    &candidate.content
                };
                let classification = self.classifier.classify(chosen);

                Article {
                    source: source.name.clone(),
                    title: candidate.title,
                    summary: candidate.summary,
                    topic: classification.topic,
                    sentiment: classification.sentiment,
                    entities: classification.entities,
                    fetched_at,
                    url: candidate.url,
                }
            })
            .collect())
    }

    /// Latest published batch; empty before the first cycle completes.
    pub async fn current_articles(&self) -> Arc<ArticleBatch> {
        self.cache.current().await
    }

    pub async fn source_health(&self) -> Vec<SourceHealth> {
        self.health.snapshot().await
    }
}
