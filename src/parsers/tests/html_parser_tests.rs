use crate::filter::LinkResolver;
use crate::parsers::html;
use crate::results::{NO_DESCRIPTION, NO_TITLE};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scraper::Html;

    #[test]
    fn test_link_filtering() {
        let page = r##"<html><body>
            <a href="/about">About</a>
            <a href="https://x.com/page">X</a>
            <a href="mailto:a@b.com">Mail</a>
            <a href="#frag">Jump</a>
        </body></html>"##;

        let result = html::parse(page, "https://site.com", 5);
        assert_eq!(
            result.links,
            vec!["https://site.com/about", "https://x.com/page"]
        );
    }

    #[test]
    fn test_link_truncation_keeps_first_five() {
        let anchors: String = (1..=8)
            .map(|i| {
                if i % 2 == 0 {
                    format!(r#"<a href="/p{}">{}</a>"#, i, i)
                } else {
                    format!(r#"<a href="https://other.org/p{}">{}</a>"#, i, i)
                }
            })
            .collect();
        let page = format!("<html><body>{}</body></html>", anchors);

        let result = html::parse(&page, "https://site.com/index", 5);
        assert_eq!(
            result.links,
            vec![
                "https://other.org/p1",
                "https://site.com/p2",
                "https://other.org/p3",
                "https://site.com/p4",
                "https://other.org/p5",
            ]
        );
    }

    #[test]
    fn test_dropped_links_do_not_count_toward_limit() {
        let page = r#"<body>
            <a href="mailto:x@y.z">m</a>
            <a href="relative.html">r</a>
            <a href="/one">1</a>
            <a href="/two">2</a>
        </body>"#;

        let result = html::parse(page, "https://site.com", 2);
        assert_eq!(
            result.links,
            vec!["https://site.com/one", "https://site.com/two"]
        );
    }

    #[test]
    fn test_sentinels_when_tags_missing() {
        let result = html::parse("<html><body><p>nothing</p></body></html>", "https://a.b", 5);
        assert_eq!(result.title, NO_TITLE);
        assert_eq!(result.description, NO_DESCRIPTION);
        assert!(result.links.is_empty());
    }

    #[test]
    fn test_title_and_description_are_trimmed() {
        let page = r#"<html><head>
            <title>
                Hello World
            </title>
            <meta name="description" content="   A page about things.  ">
        </head></html>"#;

        let result = html::parse(page, "https://a.b", 5);
        assert_eq!(result.title, "Hello World");
        assert_eq!(result.description, "A page about things.");
    }

    #[test]
    fn test_first_title_wins() {
        let doc = Html::parse_document(
            "<head><title>First</title></head><body><title>Second</title></body>",
        );
        assert_eq!(html::extract_title(&doc), Some("First".to_string()));
    }

    #[test]
    fn test_description_without_content_is_empty() {
        let doc = Html::parse_document(r#"<head><meta name="description"></head>"#);
        assert_eq!(html::extract_description(&doc), Some(String::new()));
    }

    #[test]
    fn test_other_meta_tags_are_ignored() {
        let doc = Html::parse_document(
            r#"<head>
                <meta name="keywords" content="a, b">
                <meta property="og:description" content="og">
            </head>"#,
        );
        assert_eq!(html::extract_description(&doc), None);
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let page = r#"<title>Broken</title><div><p><a href="/x">one<a href="https://y.com/">two</div></span></table>"#;

        let result = html::parse(page, "https://site.com", 5);
        assert_eq!(result.title, "Broken");
        assert_eq!(result.description, NO_DESCRIPTION);
        assert_eq!(result.links, vec!["https://site.com/x", "https://y.com/"]);
    }

    #[test]
    fn test_anchors_without_href_are_skipped() {
        let doc = Html::parse_document(r#"<a name="top">top</a><a href="https://z.io">z</a>"#);
        let resolver = LinkResolver::for_page("https://site.com");
        assert_eq!(html::extract_links(&doc, &resolver, 5), vec!["https://z.io"]);
    }

    #[test]
    fn test_non_html_body_degrades_to_sentinels() {
        let result = html::parse("{\"not\": \"html\"}", "https://api.site.com", 5);
        assert_eq!(result.title, NO_TITLE);
        assert_eq!(result.description, NO_DESCRIPTION);
        assert!(result.links.is_empty());
    }
}
