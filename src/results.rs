use serde::{Deserialize, Serialize};

/// Title used when a fetched page has no `<title>` element
pub const NO_TITLE: &str = "No title";

/// Description used when a fetched page has no `<meta name="description">`
pub const NO_DESCRIPTION: &str = "No description";

/// Harvested metadata for one requested URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// URL as it was requested
    pub url: String,

    /// Page title, `None` if the fetch failed
    pub title: Option<String>,

    /// Meta description, `None` if the fetch failed
    pub description: Option<String>,

    /// Absolute outbound links in document order
    pub links: Vec<String>,
}

impl PageResult {
    /// Create a new page result
    pub fn new(url: String, title: String, description: String, links: Vec<String>) -> Self {
        Self {
            url,
            title: Some(title),
            description: Some(description),
            links,
        }
    }

    /// Result for a URL whose fetch did not produce a body
    pub fn failed(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            description: None,
            links: Vec::new(),
        }
    }

    /// Whether the page body was retrieved
    pub fn is_fetched(&self) -> bool {
        self.title.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_shape() {
        let result = PageResult::failed("https://example.com");
        assert_eq!(result.url, "https://example.com");
        assert_eq!(result.title, None);
        assert_eq!(result.description, None);
        assert!(result.links.is_empty());
        assert!(!result.is_fetched());
    }

    #[test]
    fn test_serializes_missing_fields_as_null() {
        let json = serde_json::to_value(PageResult::failed("https://example.com")).unwrap();
        assert_eq!(json["title"], serde_json::Value::Null);
        assert_eq!(json["links"], serde_json::json!([]));
    }
}
