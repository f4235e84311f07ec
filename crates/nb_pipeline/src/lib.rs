pub mod cache;
pub mod classify;
pub mod extract;
pub mod fetch;
pub mod health;
pub mod manager;
pub mod sources;

pub use classify::Classifier;
pub use fetch::{Fetcher, HttpTransport};
pub use manager::{PipelineConfig, PipelineManager};
pub use sources::{default_sources, load_sources, SelectorSet, Source};

pub mod prelude {
    pub use crate::manager::{PipelineConfig, PipelineManager};
    pub use nb_core::{Article, ArticleBatch, Error, Result};
}
