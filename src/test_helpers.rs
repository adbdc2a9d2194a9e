//! Shared test utilities for inspecting rendered markup.
//!
//! Rendered pages are plain strings; these helpers do just enough scanning
//! to assert on attributes and element text without pulling in an HTML
//! parser.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let html = render_page(&SiteConfig::default(), 2026).into_string();
//! let ids = attr_values(&html, "id");
//! let panel = between(&html, r#"id="mobile-menu""#, "</header>");
//! assert_eq!(count(panel, "data-menu-close"), 6);
//! ```

/// Undo maud's escaping for the handful of entities it emits.
pub fn unescape(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Every value of ` {attr}="…"` in document order, unescaped.
pub fn attr_values(html: &str, attr: &str) -> Vec<String> {
    let needle = format!(" {attr}=\"");
    let mut values = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(&needle) {
        rest = &rest[start + needle.len()..];
        let end = rest
            .find('"')
            .unwrap_or_else(|| panic!("unterminated {attr} attribute"));
        values.push(unescape(&rest[..end]));
        rest = &rest[end..];
    }
    values
}

/// Text content directly following each occurrence of `open_tag`, up to the
/// next `<`.
pub fn element_texts(html: &str, open_tag: &str) -> Vec<String> {
    html.match_indices(open_tag)
        .map(|(i, _)| {
            let rest = &html[i + open_tag.len()..];
            let end = rest.find('<').unwrap_or(rest.len());
            unescape(&rest[..end])
        })
        .collect()
}

/// Slice from the first `start` marker up to the next `end` marker.
///
/// Panics with a clear message when either marker is missing.
pub fn between<'a>(html: &'a str, start: &str, end: &str) -> &'a str {
    let from = html
        .find(start)
        .unwrap_or_else(|| panic!("marker {start:?} not found"));
    let rest = &html[from..];
    let to = rest
        .find(end)
        .unwrap_or_else(|| panic!("end marker {end:?} not found after {start:?}"));
    &rest[..to]
}

/// Number of non-overlapping occurrences of `needle`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_values_in_order() {
        let html = r##"<a href="#a">x</a><div id="b"><a href="#c&amp;d">y</a>"##;
        assert_eq!(attr_values(html, "href"), ["#a", "#c&d"]);
        assert_eq!(attr_values(html, "id"), ["b"]);
    }

    #[test]
    fn attr_values_skips_prefixed_names() {
        let html = r#"<div data-id="x" id="y">"#;
        assert_eq!(attr_values(html, "id"), ["y"]);
    }

    #[test]
    fn element_texts_reads_until_next_tag() {
        let html = r#"<p class="x">one</p><p class="x">two &amp; three</p>"#;
        assert_eq!(element_texts(html, r#"<p class="x">"#), ["one", "two & three"]);
    }

    #[test]
    fn between_slices_first_region() {
        assert_eq!(between("a[b]c[d]", "[", "]"), "[b");
    }
}
