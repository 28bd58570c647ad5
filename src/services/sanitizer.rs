//! Text rewrites applied to raw SVG files before parsing.
//!
//! These are plain regex substitutions; files that don't match a pattern pass
//! through unchanged.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

static XML_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*<\?xml.*?>").expect("valid regex"));

/// Full-canvas rectangle the design tool leaves behind in every export.
static BACKGROUND_RECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<rect width="25[\d,.]+" height="25[\d,.]+" fill="none".*?/>"#)
        .expect("valid regex")
});

static TITLE_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<title").expect("valid regex"));

/// Only runs of zeros: `#000001` is left alone.
static ZERO_HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##""#0+""##).expect("valid regex"));

pub const CURRENT_COLOR: &str = "currentColor";

pub fn sanitize(raw: &str) -> String {
    let text = XML_DECLARATION.replace(raw, "");
    let text = BACKGROUND_RECT.replace_all(&text, "");
    let text = TITLE_FRAGMENT.replace_all(&text, "");
    let text = ZERO_HEX_COLOR.replace_all(&text, format!("\"{}\"", CURRENT_COLOR));

    trace!(
        before = raw.len(),
        after = text.len(),
        "Sanitized SVG text"
    );

    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_xml_declaration() {
        let raw = r#"<?xml version="1.0" encoding="UTF-8"?><svg><path d="M1 1"/></svg>"#;
        assert_eq!(sanitize(raw), r#"<svg><path d="M1 1"/></svg>"#);
    }

    #[test]
    fn test_xml_declaration_only_at_start() {
        let raw = "<svg>\n<?xml version=\"1.0\"?></svg>";
        assert_eq!(sanitize(raw), raw);
    }

    #[test]
    fn test_strips_background_rect() {
        let raw = r#"<svg><rect width="256" height="256" fill="none"/><path d="M1 1"/></svg>"#;
        assert_eq!(sanitize(raw), r#"<svg><path d="M1 1"/></svg>"#);
    }

    #[test]
    fn test_strips_background_rect_with_extra_attributes() {
        let raw = r#"<svg><rect width="255.5" height="255.5" fill="none" stroke="none" /><circle r="2"/></svg>"#;
        assert_eq!(sanitize(raw), r#"<svg><circle r="2"/></svg>"#);
    }

    #[test]
    fn test_keeps_other_rects() {
        let raw = r#"<svg><rect width="40" height="40" fill="none"/></svg>"#;
        assert_eq!(sanitize(raw), raw);
    }

    #[test]
    fn test_strips_title_fragment() {
        assert_eq!(sanitize("<svg><title/></svg>"), "<svg>/></svg>");
    }

    #[test]
    fn test_zero_hex_becomes_current_color() {
        assert_eq!(
            sanitize(r##"<path fill="#000000" stroke="#000"/>"##),
            r#"<path fill="currentColor" stroke="currentColor"/>"#
        );
    }

    #[test]
    fn test_non_zero_hex_is_untouched() {
        let raw = r##"<path fill="#3a3a3a" stroke="#000001"/>"##;
        assert_eq!(sanitize(raw), raw);
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let raw = concat!(
            r#"<?xml version="1.0"?><svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256">"#,
            r#"<rect width="256" height="256" fill="none"/>"#,
            r##"<path d="M1 1" fill="#000" stroke="#3a3a3a"/></svg>"##
        );
        let once = sanitize(raw);
        let twice = sanitize(&once);
        assert_eq!(once, twice);
        assert!(!once.contains("<?xml"));
        assert!(!once.contains("<rect"));
        assert!(once.contains(r#"fill="currentColor""#));
    }

    #[test]
    fn test_plain_svg_passes_through() {
        let raw = r#"<svg><line x1="0" y1="0" x2="1" y2="1"/></svg>"#;
        assert_eq!(sanitize(raw), raw);
    }
}
