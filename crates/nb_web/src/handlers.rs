use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use nb_core::{Article, ArticleBatch, Topic};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ArticleFilter {
    pub topic: Option<Topic>,
}

/// Current batch, optionally narrowed to one topic. Always 200; empty
/// before the first cycle completes.
pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ArticleFilter>,
) -> impl IntoResponse {
    let batch = state.pipeline.current_articles().await;

    let articles: Vec<Article> = match filter.topic {
        Some(topic) => batch
            .articles
            .iter()
            .filter(|article| article.topic == topic)
            .cloned()
            .collect(),
        None => batch.articles.clone(),
    };

    Json(ArticleBatch {
        cycle: batch.cycle,
        refreshed_at: batch.refreshed_at,
        articles,
    })
}

pub async fn list_sources(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.pipeline.source_health().await)
}
