use nb_core::{Error, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::sources::Source;

/// Hard cap on articles extracted per source per cycle.
pub const MAX_ARTICLES_PER_SOURCE: usize = 5;

/// Derived titles longer than this are cut and ellipsized.
const TITLE_MAX_CHARS: usize = 60;

/// Summaries keep this many leading whitespace tokens of the content.
const SUMMARY_TOKENS: usize = 30;

const ELLIPSIS: &str = "...";

/// Last-resort title when content begins with a sentence terminator and the
/// derived title comes out empty.
const UNTITLED: &str = "Untitled Article";

/// Field set pulled out of one article container, before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub url: String,
}

/// Applies a source's selector set to fetched markup.
///
/// Elements with no usable title or content are dropped silently; an
/// invalid selector string is a source-level error. Identical markup and
/// selectors always yield identical output.
pub fn extract(source: &Source, html: &str) -> Result<Vec<Candidate>> {
    let container_sel = parse_selector(&source.selectors.articles)?;
    let title_sel = parse_selector(&source.selectors.title)?;
    let content_sel = parse_selector(&source.selectors.content)?;
    let link_sel = parse_selector(&source.selectors.link)?;

    let document = Html::parse_document(html);
    let mut candidates = Vec::new();

    for container in document
        .select(&container_sel)
        .take(MAX_ARTICLES_PER_SOURCE)
    {
        match extract_one(source, container, &title_sel, &content_sel, &link_sel) {
            Some(candidate) => candidates.push(candidate),
            None => debug!("{}: skipping element without title or content", source.name),
        }
    }

    Ok(candidates)
}

fn extract_one(
    source: &Source,
    container: ElementRef,
    title_sel: &Selector,
    content_sel: &Selector,
    link_sel: &Selector,
) -> Option<Candidate> {
    let mut title = collect_text(container, title_sel);
    let mut content = collect_text(container, content_sel);
    let href = container
        .select(link_sel)
        .next()
        .and_then(|el| el.value().attr("href"))
        .unwrap_or_default();
    let url = resolve_link(source, href);

    if content.is_empty() {
        content = normalize_whitespace(&container.text().collect::<String>());
    }

    if title.is_empty() && !content.is_empty() {
        let (derived, rest) = split_leading_sentence(&content);
        title = derived;
        content = rest;
    }

    if title.is_empty() && content.is_empty() {
        return None;
    }
    if title.is_empty() {
        title = UNTITLED.to_string();
    }

    let summary = summarize(&content, &title);

    Some(Candidate {
        title,
        content,
        summary,
        url,
    })
}

fn parse_selector(raw: &str) -> Result<Selector> {
    Selector::parse(raw).map_err(|e| Error::Selector(format!("{}: {}", raw, e)))
}

/// Text of every match for `selector` under `scope`, whitespace-normalized.
fn collect_text(scope: ElementRef, selector: &Selector) -> String {
    let parts: Vec<String> = scope
        .select(selector)
        .map(|el| el.text().collect::<String>())
        .collect();
    normalize_whitespace(&parts.join(" "))
}

fn normalize_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Absolutizes a relative href against the source's `base_url` override, or
/// against the origin of the source URL. An unresolvable link becomes empty
/// rather than relative.
fn resolve_link(source: &Source, href: &str) -> String {
    if href.is_empty() || href.starts_with("http") {
        return href.to_string();
    }

    let base = match &source.base_url {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => match Url::parse(&source.url) {
            Ok(url) => url.origin().ascii_serialization(),
            Err(_) => return String::new(),
        },
    };
    if base == "null" {
        return String::new();
    }

    if href.starts_with('/') {
        format!("{}{}", base, href)
    } else {
        format!("{}/{}", base, href)
    }
}

/// Splits content at the first sentence terminator. The sentence text,
/// truncated to [`TITLE_MAX_CHARS`], becomes the title; the terminator and
/// the consumed prefix are dropped from the remainder.
fn split_leading_sentence(content: &str) -> (String, String) {
    let terminator = |c: char| c == '.' || c == '!' || c == '?';

    let end = content.find(terminator).unwrap_or(content.len());
    let title = truncate_title(content[..end].trim());
    let rest = content[end..]
        .trim_start_matches(terminator)
        .trim_start()
        .to_string();

    (title, rest)
}

fn truncate_title(sentence: &str) -> String {
    if sentence.chars().count() > TITLE_MAX_CHARS {
        let cut: String = sentence.chars().take(TITLE_MAX_CHARS).collect();
        format!("{}{}", cut, ELLIPSIS)
    } else {
        sentence.to_string()
    }
}

/// First [`SUMMARY_TOKENS`] whitespace tokens of content plus an ellipsis,
/// regardless of sentence boundaries. Empty content falls back to the title.
fn summarize(content: &str, title: &str) -> String {
    if content.is_empty() {
        return title.to_string();
    }
    let lead: Vec<&str> = content.split_whitespace().take(SUMMARY_TOKENS).collect();
    format!("{}{}", lead.join(" "), ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SelectorSet;

    fn test_source() -> Source {
        Source::new(
            "Example",
            "https://example.com/latest/news",
            SelectorSet::new(".item", "h2", "p", "a"),
        )
    }

    fn item(title: &str, content: &str, href: &str) -> String {
        format!(
            "<div class=\"item\"><h2>{}</h2><p>{}</p><a href=\"{}\">more</a></div>",
            title, content, href
        )
    }

    fn page(items: &[String]) -> String {
        format!("<html><body>{}</body></html>", items.join("\n"))
    }

    #[test]
    fn test_extract_fields() {
        let html = page(&[item(
            "Cabinet approves new policy",
            "The cabinet cleared the measure on Tuesday.",
            "https://example.com/story/1",
        )]);
        let candidates = extract(&test_source(), &html).unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "Cabinet approves new policy");
        assert_eq!(
            candidates[0].content,
            "The cabinet cleared the measure on Tuesday."
        );
        assert_eq!(candidates[0].url, "https://example.com/story/1");
    }

    #[test]
    fn test_cap_at_five() {
        let items: Vec<String> = (0..8)
            .map(|i| item(&format!("Story {}", i), "Some text here.", "/s"))
            .collect();
        let candidates = extract(&test_source(), &page(&items)).unwrap();

        assert_eq!(candidates.len(), MAX_ARTICLES_PER_SOURCE);
        assert_eq!(candidates[0].title, "Story 0");
        assert_eq!(candidates[4].title, "Story 4");
    }

    #[test]
    fn test_relative_link_resolves_against_origin() {
        let html = page(&[item("Title", "Text.", "/story/42")]);
        let candidates = extract(&test_source(), &html).unwrap();
        assert_eq!(candidates[0].url, "https://example.com/story/42");
    }

    #[test]
    fn test_relative_link_uses_base_url_override() {
        let source = test_source().with_base_url("https://m.example.com/");
        let html = page(&[item("Title", "Text.", "story/42")]);
        let candidates = extract(&source, &html).unwrap();
        assert_eq!(candidates[0].url, "https://m.example.com/story/42");
    }

    #[test]
    fn test_missing_link_stays_empty() {
        let html = page(&["<div class=\"item\"><h2>Title</h2><p>Text.</p></div>".to_string()]);
        let candidates = extract(&test_source(), &html).unwrap();
        assert_eq!(candidates[0].url, "");
    }

    #[test]
    fn test_content_falls_back_to_container_text() {
        let html = page(&[
            "<div class=\"item\"><h2>Flood warning issued</h2> <span>Rivers are rising across the district.</span></div>"
                .to_string(),
        ]);
        let candidates = extract(&test_source(), &html).unwrap();

        // container text includes the heading
        assert_eq!(
            candidates[0].content,
            "Flood warning issued Rivers are rising across the district."
        );
    }

    #[test]
    fn test_title_derived_from_first_sentence() {
        let html = page(&[item(
            "",
            "Markets rallied today. Investors cheered.",
            "/s",
        )]);
        let candidates = extract(&test_source(), &html).unwrap();

        assert_eq!(candidates[0].title, "Markets rallied today");
        assert_eq!(candidates[0].content, "Investors cheered.");
    }

    #[test]
    fn test_derived_title_truncated_at_60_chars() {
        let long = "a".repeat(80);
        let (title, _) = split_leading_sentence(&format!("{}. More text.", long));

        assert_eq!(title.chars().count(), TITLE_MAX_CHARS + ELLIPSIS.len());
        assert!(title.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_summary_truncates_at_30_tokens() {
        let words: Vec<String> = (0..50).map(|i| format!("w{}", i)).collect();
        let content = words.join(" ");
        let summary = summarize(&content, "title");

        let expected = format!("{}{}", words[..30].join(" "), ELLIPSIS);
        assert_eq!(summary, expected);
    }

    #[test]
    fn test_summary_falls_back_to_title() {
        assert_eq!(summarize("", "Flood warning"), "Flood warning");
    }

    #[test]
    fn test_empty_element_skipped() {
        // no text anywhere in the container, so both fallbacks come up empty
        let html = page(&[
            "<div class=\"item\"><a href=\"/s\"><img src=\"/t.jpg\"></a></div>".to_string(),
            item("Kept", "Content here.", "/s"),
        ]);
        let candidates = extract(&test_source(), &html).unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "Kept");
    }

    #[test]
    fn test_titles_never_empty() {
        // content opening with a terminator derives an empty title
        let html = page(&[item("", ". trailing fragment", "/s")]);
        let candidates = extract(&test_source(), &html).unwrap();

        assert_eq!(candidates[0].title, UNTITLED);
        assert_eq!(candidates[0].content, "trailing fragment");
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        let mut source = test_source();
        source.selectors.articles = ":::".to_string();
        assert!(extract(&source, "<html></html>").is_err());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let html = page(&[item("Title", "Body text here.", "/s")]);
        let first = extract(&test_source(), &html).unwrap();
        let second = extract(&test_source(), &html).unwrap();
        assert_eq!(first, second);
    }
}
