use crate::filter::LinkResolver;
use crate::results::{NO_DESCRIPTION, NO_TITLE};
use scraper::{Html, Selector};

/// Fields extracted from one HTML document
pub struct ParseResult {
    /// Trimmed title text or the title sentinel
    pub title: String,
    /// Trimmed meta description or the description sentinel
    pub description: String,
    /// Absolute links, already truncated
    pub links: Vec<String>,
}

/// Parses an HTML document fetched from `url`
///
/// html5ever recovers from any malformed markup, so this never fails.
pub fn parse(html: &str, url: &str, max_links: usize) -> ParseResult {
    let doc = Html::parse_document(html);

    let title = extract_title(&doc).unwrap_or_else(|| NO_TITLE.to_string());
    let description = extract_description(&doc).unwrap_or_else(|| NO_DESCRIPTION.to_string());
    let links = extract_links(&doc, &LinkResolver::for_page(url), max_links);

    ::log::debug!("HTML parser kept {} links from {}", links.len(), url);

    ParseResult {
        title,
        description,
        links,
    }
}

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            ::log::error!("Invalid selector {}: {}", css, e);
            None
        }
    }
}

/// Text of the first `<title>` element
pub fn extract_title(doc: &Html) -> Option<String> {
    let title_selector = selector("title")?;
    doc.select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

/// `content` of the first `<meta name="description">`, empty if the attribute is missing
pub fn extract_description(doc: &Html) -> Option<String> {
    let meta_selector = selector(r#"meta[name="description"]"#)?;
    doc.select(&meta_selector)
        .next()
        .map(|el| el.value().attr("content").unwrap_or("").trim().to_string())
}

/// The first `max_links` resolvable anchors in document order
pub fn extract_links(doc: &Html, resolver: &LinkResolver, max_links: usize) -> Vec<String> {
    let Some(link_selector) = selector("a[href]") else {
        return Vec::new();
    };

    doc.select(&link_selector)
        .filter_map(|el| el.value().attr("href"))
        .filter_map(|href| resolver.resolve(href))
        .take(max_links)
        .collect()
}
