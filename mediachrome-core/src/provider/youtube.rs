// YouTube Provider
//
// Renders `<youtube-video>` from the youtube-video-element package.

use super::{MediaKind, ProviderRenderer};

pub const SLUG: &str = "youtube";
pub const TAG: &str = "youtube-video";

/// YouTube embed renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct YouTubeProvider;

impl YouTubeProvider {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProviderRenderer for YouTubeProvider {
    fn slug(&self) -> &'static str {
        SLUG
    }

    fn tag(&self) -> &'static str {
        TAG
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Video
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::AttrValue;
    use crate::hooks::Hooks;

    #[test]
    fn test_youtube_markup() {
        let markup = YouTubeProvider::new().markup("https://www.youtube.com/watch?v=abc&t=10", &Hooks::new());
        assert_eq!(
            markup,
            r#"<youtube-video src="https://www.youtube.com/watch?v=abc&amp;t=10" slot="media"></youtube-video>"#
        );
    }

    #[test]
    fn test_youtube_attrs_filter() {
        let hooks = Hooks::new().on_provider_attrs_for(SLUG, |mut attrs| {
            attrs.insert("crossorigin".to_string(), AttrValue::Text(String::new()));
            attrs.insert("config".to_string(), AttrValue::from(r#"{"rel":0}"#));
            attrs
        });

        let markup = YouTubeProvider::new().markup("https://youtu.be/abc", &hooks);
        assert_eq!(
            markup,
            r#"<youtube-video src="https://youtu.be/abc" slot="media" crossorigin config="{&quot;rel&quot;:0}"></youtube-video>"#
        );
    }
}
