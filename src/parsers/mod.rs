pub mod html;

#[cfg(test)]
mod tests;

use crate::results::PageResult;

/// Build the result record for `url` from its body, if the fetch produced one
///
/// An empty body counts as a failed fetch.
pub fn extract(url: &str, body: Option<&str>, max_links: usize) -> PageResult {
    match body {
        Some(html) if !html.is_empty() => {
            let parsed = html::parse(html, url, max_links);
            PageResult::new(
                url.to_string(),
                parsed.title,
                parsed.description,
                parsed.links,
            )
        }
        _ => PageResult::failed(url),
    }
}
