use url::Url;

/// Turns raw `href` values found on a page into absolute http(s) links
#[derive(Debug, Clone)]
pub struct LinkResolver {
    /// `scheme://host[:port]` of the page, if it has one
    base: Option<String>,
}

impl LinkResolver {
    /// Create a resolver for links found on `page_url`
    pub fn for_page(page_url: &str) -> Self {
        let base = Url::parse(page_url)
            .ok()
            .filter(|u| is_web_scheme(u.scheme()))
            .map(|u| u.origin().ascii_serialization());

        if base.is_none() {
            ::log::debug!("No base for root-relative links on {}", page_url);
        }

        Self { base }
    }

    /// Resolve an `href`, returning `None` for anything that is not an http(s) link
    ///
    /// Only root-relative hrefs (`/path`) are resolved. Fragments, `mailto:`
    /// and path-relative hrefs such as `about.html` are dropped.
    pub fn resolve(&self, href: &str) -> Option<String> {
        let candidate = if href.starts_with('/') {
            format!("{}{}", self.base.as_deref()?, href)
        } else {
            href.to_string()
        };

        if candidate.starts_with("http://") || candidate.starts_with("https://") {
            Some(candidate)
        } else {
            ::log::trace!("Dropping link: {}", href);
            None
        }
    }
}

fn is_web_scheme(scheme: &str) -> bool {
    scheme == "http" || scheme == "https"
}
