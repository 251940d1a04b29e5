use crate::attrs::ALLOWED_PROTOCOLS;
use crate::hooks::AllowedTags;
use ammonia::Builder;
use std::collections::HashSet;

/// Tags whose content is dropped along with the tag
const CLEAN_CONTENT_TAGS: &[&str] = &["script", "style"];

/// Whitelist sanitizer for control-bar slot content
///
/// Only tags present in the whitelist survive, each with only its listed
/// attributes. Everything else is stripped down to its text. Comments are
/// removed and `script`/`style` are dropped with their content even when
/// whitelisted.
#[derive(Debug, Clone, Default)]
pub struct SlotSanitizer {
    allowed: AllowedTags,
}

impl SlotSanitizer {
    #[must_use]
    pub const fn new(allowed: AllowedTags) -> Self {
        Self { allowed }
    }

    #[must_use]
    pub const fn allowed(&self) -> &AllowedTags {
        &self.allowed
    }

    /// Sanitize one HTML fragment
    #[must_use]
    pub fn clean(&self, html: &str) -> String {
        let mut builder = Builder::empty();

        let tags = self
            .allowed
            .keys()
            .filter(|tag| !CLEAN_CONTENT_TAGS.contains(&tag.as_str()));
        builder
            .add_tags(tags)
            .link_rel(None)
            .strip_comments(true)
            .clean_content_tags(CLEAN_CONTENT_TAGS.iter().copied().collect())
            .url_schemes(ALLOWED_PROTOCOLS.iter().copied().collect::<HashSet<_>>());

        for (tag, attributes) in &self.allowed {
            if !attributes.is_empty() && !CLEAN_CONTENT_TAGS.contains(&tag.as_str()) {
                builder.add_tag_attributes(tag, attributes.iter());
            }
        }

        builder.clean(html).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed(pairs: &[(&str, &[&str])]) -> AllowedTags {
        pairs
            .iter()
            .map(|(tag, attrs)| {
                (
                    (*tag).to_string(),
                    attrs.iter().map(|a| (*a).to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_whitelist_strips_all_tags() {
        let sanitizer = SlotSanitizer::default();
        assert_eq!(sanitizer.clean("<b>Play</b> now"), "Play now");
        assert_eq!(sanitizer.clean("plain"), "plain");
    }

    #[test]
    fn test_allowed_tag_keeps_listed_attributes() {
        let sanitizer = SlotSanitizer::new(allowed(&[("span", &["class"])]));
        assert_eq!(
            sanitizer.clean(r#"<span class="icon" onclick="x()">▶</span>"#),
            r#"<span class="icon">▶</span>"#
        );
    }

    #[test]
    fn test_script_dropped_with_content() {
        let sanitizer = SlotSanitizer::new(allowed(&[("b", &[]), ("script", &[])]));
        assert_eq!(sanitizer.clean("<script>alert(1)</script><b>ok</b>"), "<b>ok</b>");
    }

    #[test]
    fn test_comments_removed() {
        let sanitizer = SlotSanitizer::new(allowed(&[("i", &[])]));
        assert_eq!(sanitizer.clean("<!-- note --><i>x</i>"), "<i>x</i>");
    }

    #[test]
    fn test_disallowed_url_scheme_removed() {
        let sanitizer = SlotSanitizer::new(allowed(&[("a", &["href"])]));
        let cleaned = sanitizer.clean(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!cleaned.contains("javascript"));
        assert!(cleaned.contains('x'));
    }
}
