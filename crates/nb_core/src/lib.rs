pub mod analysis;
pub mod error;
pub mod transport;
pub mod types;

pub use analysis::{PeopleExtractor, SentimentScorer};
pub use error::Error;
pub use transport::Transport;
pub use types::{Article, ArticleBatch, Entities, SourceHealth, Topic};

pub type Result<T> = std::result::Result<T, Error>;
