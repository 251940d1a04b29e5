use crate::attrs::{esc_url, serialize_attrs, AttrValue, AttributeMap};
use crate::settings::{controller, Settings};

pub const POSTER_IMAGE_TAG: &str = "media-poster-image";

/// Builds the optional `<media-poster-image>` element
#[derive(Debug, Clone, Copy, Default)]
pub struct PosterImageBuilder;

impl PosterImageBuilder {
    /// Poster element for the `poster` setting, or an empty string when the
    /// setting is unset, empty, not text, or not a safe URL
    #[must_use]
    pub fn build(settings: &Settings) -> String {
        let Some(poster) = settings.text(controller::POSTER) else {
            return String::new();
        };

        if esc_url(poster).is_empty() {
            tracing::debug!("poster URL rejected");
            return String::new();
        }

        let mut attrs = AttributeMap::new();
        attrs.insert("slot".to_string(), AttrValue::from("poster"));
        attrs.insert("src".to_string(), AttrValue::from(poster));

        format!(
            "<{POSTER_IMAGE_TAG} {}></{POSTER_IMAGE_TAG}>",
            serialize_attrs(&attrs)
        )
    }
}
