//! Inline Markdown links.
//!
//! Resume text may contain `[label](url)`. Everything else is escaped, so
//! data can never inject markup.

use crate::utils::html::{escape, escape_attr};
use regex::Regex;
use std::sync::LazyLock;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));

/// Escape `text` as HTML, turning `[label](url)` into anchors.
///
/// # Example
/// ```ignore
/// assert_eq!(inline("see [site](https://x.dev)"), r#"see <a href="https://x.dev">site</a>"#);
/// ```
pub fn inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in LINK.captures_iter(text) {
        let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        out.push_str(&escape(&text[last..whole.start()]));
        out.push_str("<a href=\"");
        out.push_str(&escape_attr(url.as_str().trim()));
        out.push_str("\">");
        out.push_str(&escape(label.as_str()));
        out.push_str("</a>");
        last = whole.end();
    }

    out.push_str(&escape(&text[last..]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_escaped() {
        assert_eq!(inline("R&D <lead>"), "R&amp;D &lt;lead&gt;");
    }

    #[test]
    fn test_single_link() {
        assert_eq!(
            inline("[jane.dev](https://jane.dev)"),
            r#"<a href="https://jane.dev">jane.dev</a>"#
        );
    }

    #[test]
    fn test_links_with_surrounding_text() {
        assert_eq!(
            inline("Built [vita](https://g.it/v) & [docs](https://d.it)."),
            r#"Built <a href="https://g.it/v">vita</a> &amp; <a href="https://d.it">docs</a>."#
        );
    }

    #[test]
    fn test_link_parts_escaped() {
        assert_eq!(
            inline("[<b>](https://x.dev/?a=1&b=\"2\")"),
            r#"<a href="https://x.dev/?a=1&amp;b=&quot;2&quot;">&lt;b&gt;</a>"#
        );
    }

    #[test]
    fn test_incomplete_link_left_alone() {
        assert_eq!(inline("[not a link] (x)"), "[not a link] (x)");
        assert_eq!(inline("[open](unterminated"), "[open](unterminated");
    }
}
