//! Parse-and-rebuild HTML sanitization.
//!
//! The input is parsed into a DOM by ammonia and only the allow-listed
//! formatting tags are written back out, without attributes. Everything else
//! is unwrapped to its text, except `script` and `style` which are dropped with
//! their content. A residual pass then strips handler and script-scheme text
//! that survived as plain characters.

use std::collections::{HashMap, HashSet};

use ammonia::Builder;

use super::detect::{EVENT_HANDLER, SCRIPT_SCHEME};
use crate::utils::validation::constants::ALLOWED_TAGS;

fn sanitizer() -> Builder<'static> {
    let mut builder = Builder::default();
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect())
        .clean_content_tags(HashSet::from(["script", "style"]))
        .generic_attributes(HashSet::new())
        .tag_attributes(HashMap::new())
        .link_rel(None)
        .strip_comments(true);
    builder
}

/// Cleans user-provided markup down to `b`, `i`, `em`, `strong`, `p` and `br`.
///
/// The result is a fixed point: sanitizing it again returns it unchanged.
pub fn sanitize_html(input: &str) -> String {
    let rebuilt = sanitizer().clean(input).to_string();
    strip_residual(rebuilt)
}

/// Removes handler assignments and script schemes until none are left, since a
/// single removal can splice two fragments into a new match.
fn strip_residual(mut text: String) -> String {
    loop {
        let without_handlers = EVENT_HANDLER.replace_all(&text, "");
        let cleaned = SCRIPT_SCHEME.replace_all(&without_handlers, "").into_owned();
        if cleaned == text {
            return cleaned;
        }
        text = cleaned;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_tags_survive() {
        let cases = vec![
            ("<b>ok</b>", "<b>ok</b>"),
            ("<p>Hello <em>world</em></p>", "<p>Hello <em>world</em></p>"),
            ("<strong>Bold</strong> and <i>italic</i>", "<strong>Bold</strong> and <i>italic</i>"),
            ("line<br>break", "line<br>break"),
        ];

        for (input, expected) in cases {
            assert_eq!(sanitize_html(input), expected, "Wrong output for {}", input);
        }
    }

    #[test]
    fn test_script_block_removed_entirely() {
        assert_eq!(sanitize_html("<b>ok</b><script>alert(1)</script>"), "<b>ok</b>");
        assert_eq!(sanitize_html("<SCRIPT>alert(1)</SCRIPT>after"), "after");
        assert_eq!(sanitize_html("<style>body{}</style>text"), "text");
    }

    #[test]
    fn test_disallowed_tags_are_unwrapped_not_escaped() {
        assert_eq!(sanitize_html(r#"<img src=x onerror="alert(1)">"#), "");
        assert_eq!(sanitize_html("<div>Hi <em>there</em></div>"), "Hi <em>there</em>");
        assert_eq!(sanitize_html(r#"<a href="javascript:alert(1)">link</a>"#), "link");
    }

    #[test]
    fn test_attributes_are_dropped_from_allowed_tags() {
        assert_eq!(sanitize_html(r#"<p onclick="steal()" class="x">Hi</p>"#), "<p>Hi</p>");
        assert_eq!(sanitize_html(r#"<b style="color:red">x</b>"#), "<b>x</b>");
    }

    #[test]
    fn test_residual_text_is_stripped() {
        assert_eq!(sanitize_html("see javascript:alert(1)"), "see alert(1)");
        assert_eq!(sanitize_html("VBSCRIPT:run"), "run");
        assert_eq!(sanitize_html(r#"onclick="x()" hello"#), " hello");
        // Removing the inner scheme must not leave a new one behind
        assert_eq!(sanitize_html("javajavascript:script:x"), "x");
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(sanitize_html("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(sanitize_html("1 < 2"), "1 &lt; 2");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = vec![
            "<b>ok</b><script>alert(1)</script>",
            r#"<img src=x onerror="alert(1)">"#,
            "Tom & Jerry &amp; friends",
            "1 < 2 > 0",
            "<p>para <b>bold <i>both</i></b></p>",
            "<!-- comment -->visible",
            "javajavascript:script:x",
            r#"<div onmouseover='x'>on top</div>"#,
            "plain text",
            "",
        ];

        for input in inputs {
            let once = sanitize_html(input);
            let twice = sanitize_html(&once);
            assert_eq!(once, twice, "Not idempotent for {}", input);
        }
    }
}
