// Media Providers
//
// One renderer per embed provider. Each renderer emits the provider's custom
// media element, e.g. `<youtube-video src=".." slot="media"></youtube-video>`.
// Renderers are registered by slug in a `ProviderRegistry` owned by the
// embed renderer.

pub mod registry;

pub mod spotify;
pub mod vimeo;
pub mod wistia;
pub mod youtube;

pub use registry::ProviderRegistry;

pub use spotify::SpotifyProvider;
pub use vimeo::VimeoProvider;
pub use wistia::WistiaProvider;
pub use youtube::YouTubeProvider;

use crate::attrs::{esc_url, serialize_attrs, AttributeMap};
use crate::hooks::Hooks;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Slugs of the built-in providers, in registration order
pub const BUILTIN_SLUGS: &[&str] = &[
    youtube::SLUG,
    vimeo::SLUG,
    wistia::SLUG,
    spotify::SLUG,
];

/// Kind of media a provider plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
}

impl MediaKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders the media element for one embed provider
pub trait ProviderRenderer: Send + Sync {
    /// Registry key, e.g. "youtube"
    fn slug(&self) -> &'static str;

    /// Custom element tag, e.g. "youtube-video"
    fn tag(&self) -> &'static str;

    fn kind(&self) -> MediaKind;

    /// Provider attributes before the provider-attributes filters run
    fn attributes(&self) -> AttributeMap {
        AttributeMap::new()
    }

    /// Media element markup for `url`, or an empty string when the URL
    /// cannot be rendered (blank or disallowed scheme)
    fn markup(&self, url: &str, hooks: &Hooks) -> String {
        let src = esc_url(url);
        if src.is_empty() {
            tracing::debug!(provider = self.slug(), "URL escaped to empty, skipping provider markup");
            return String::new();
        }

        // src and slot are fixed by the element contract
        let attrs: AttributeMap = hooks
            .provider_attrs(self.slug(), self.attributes())
            .into_iter()
            .filter(|(key, _)| key != "src" && key != "slot")
            .collect();
        let attrs = serialize_attrs(&attrs);

        if attrs.is_empty() {
            format!(r#"<{tag} src="{src}" slot="media"></{tag}>"#, tag = self.tag())
        } else {
            format!(
                r#"<{tag} src="{src}" slot="media" {attrs}></{tag}>"#,
                tag = self.tag()
            )
        }
    }
}

impl fmt::Debug for dyn ProviderRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRenderer")
            .field("slug", &self.slug())
            .field("tag", &self.tag())
            .field("kind", &self.kind())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::AttrValue;

    struct DemoProvider;

    impl ProviderRenderer for DemoProvider {
        fn slug(&self) -> &'static str {
            "demo"
        }

        fn tag(&self) -> &'static str {
            "demo-video"
        }

        fn kind(&self) -> MediaKind {
            MediaKind::Video
        }
    }

    #[test]
    fn test_default_markup() {
        assert_eq!(
            DemoProvider.markup("https://demo.test/v/1", &Hooks::new()),
            r#"<demo-video src="https://demo.test/v/1" slot="media"></demo-video>"#
        );
    }

    #[test]
    fn test_markup_empty_for_unsafe_url() {
        let hooks = Hooks::new();
        assert_eq!(DemoProvider.markup("", &hooks), "");
        assert_eq!(DemoProvider.markup("  ", &hooks), "");
        assert_eq!(DemoProvider.markup("javascript:alert(1)", &hooks), "");
    }

    #[test]
    fn test_provider_attrs_filter_cannot_replace_src_or_slot() {
        let hooks = Hooks::new().on_provider_attrs_for("demo", |mut attrs| {
            attrs.insert("src".to_string(), AttrValue::from("https://evil.test"));
            attrs.insert("slot".to_string(), AttrValue::from("poster"));
            attrs.insert("muted".to_string(), AttrValue::Flag(true));
            attrs.insert("loop".to_string(), AttrValue::Flag(false));
            attrs
        });

        assert_eq!(
            DemoProvider.markup("https://demo.test/v/1", &hooks),
            r#"<demo-video src="https://demo.test/v/1" slot="media" muted></demo-video>"#
        );
    }

    #[test]
    fn test_media_kind_display() {
        assert_eq!(MediaKind::Video.to_string(), "video");
        assert_eq!(
            serde_json::to_string(&MediaKind::Audio).unwrap(),
            r#""audio""#
        );
    }
}
