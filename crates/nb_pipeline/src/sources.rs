use std::path::Path;

use nb_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Selector set applied within one source's markup. `articles` picks the
/// per-article containers; the remaining selectors are queried inside each
/// container's scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorSet {
    pub articles: String,
    pub title: String,
    pub content: String,
    pub link: String,
}

/// One news site configuration. Immutable after load.
///
/// `base_url` overrides the origin used to absolutize relative links, for
/// sites whose article paths are inconsistent with their listing URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub base_url: Option<String>,
    pub selectors: SelectorSet,
}

impl Source {
    pub fn new(name: &str, url: &str, selectors: SelectorSet) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            base_url: None,
            selectors,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }
}

impl SelectorSet {
    pub fn new(articles: &str, title: &str, content: &str, link: &str) -> Self {
        Self {
            articles: articles.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            link: link.to_string(),
        }
    }
}

/// Built-in registry. Adding a source is a data change here or an entry in
/// the JSON file passed to [`load_sources`]; no other component changes.
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new(
            "Times of India",
            "https://timesofindia.indiatimes.com/briefs/india",
            SelectorSet::new(".brief_box", "h2", "p", "a"),
        ),
        Source::new(
            "NDTV",
            "https://www.ndtv.com/latest",
            SelectorSet::new(
                ".news_Itm-cont",
                ".newsHdng",
                ".newsCont, .post_content",
                ".newsHdng a",
            ),
        ),
        Source::new(
            "Hindustan Times",
            "https://www.hindustantimes.com/india-news",
            SelectorSet::new(
                ".storyCard, .hdg3",
                "h3 a, .hdg3 a",
                ".detail, .storyDetail, .sortDec, .storyParagraph",
                "h3 a, .hdg3 a",
            ),
        ),
        Source::new(
            "India Today",
            "https://www.indiatoday.in/india",
            SelectorSet::new(
                "div.story__grid article",
                "h2.story__title a",
                "p.story__description",
                "h2.story__title a",
            ),
        )
        .with_base_url("https://www.indiatoday.in"),
        Source::new(
            "The Hindu",
            "https://www.thehindu.com/latest-news/",
            SelectorSet::new(
                ".timeline-container .timeline-item",
                ".title a, h3 a",
                ".intro, .story-card-text",
                ".title a, h3 a",
            ),
        ),
    ]
}

/// Loads a registry from a JSON array of sources.
pub fn load_sources(path: &Path) -> Result<Vec<Source>> {
    let raw = std::fs::read_to_string(path)?;
    parse_sources(&raw)
}

fn parse_sources(raw: &str) -> Result<Vec<Source>> {
    let sources: Vec<Source> = serde_json::from_str(raw)?;
    if sources.is_empty() {
        return Err(Error::Config("source registry is empty".to_string()));
    }
    Ok(sources)
}
