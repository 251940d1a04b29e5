//! Embed block rendering
//!
//! [`EmbedRenderer`] owns the provider registry, the preset source and the
//! hooks, and turns a parsed `core/embed` block into the figure markup. Any
//! block it cannot enhance is returned as its original content.

use crate::attrs::esc_attr;
use crate::block::{Block, BlockAttributes};
use crate::config::Config;
use crate::controller::MediaControllerBuilder;
use crate::hooks::Hooks;
use crate::provider::{MediaKind, ProviderRegistry};
use crate::settings::{MediaTypePath, NoPresets, PresetSource, ThemePresets};
use crate::Result;
use serde::Serialize;
use tracing::{debug, info};

/// Embed types handled by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedVariant {
    /// `type: "video"`, rendered with the `embed.video` settings
    Video,
    /// `type: "rich"`, rendered with the `embed.audio` settings
    Rich,
}

impl EmbedVariant {
    #[must_use]
    pub fn from_embed_type(embed_type: &str) -> Option<Self> {
        match embed_type {
            "video" => Some(Self::Video),
            "rich" => Some(Self::Rich),
            _ => None,
        }
    }

    /// oEmbed type string, also used in the `is-type-*` class
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Rich => "rich",
        }
    }

    #[must_use]
    pub fn media_type_path(self) -> MediaTypePath {
        match self {
            Self::Video => MediaTypePath::embed_video(),
            Self::Rich => MediaTypePath::embed_audio(),
        }
    }

    /// Provider slug assumed when the block does not name one
    #[must_use]
    pub const fn fallback_slug(self) -> &'static str {
        self.as_str()
    }

    #[must_use]
    pub const fn media_kind(self) -> MediaKind {
        match self {
            Self::Video => MediaKind::Video,
            Self::Rich => MediaKind::Audio,
        }
    }
}

/// Renders embed blocks inside a media controller
pub struct EmbedRenderer {
    registry: ProviderRegistry,
    presets: Box<dyn PresetSource>,
    hooks: Hooks,
}

impl EmbedRenderer {
    #[must_use]
    pub fn new(
        registry: ProviderRegistry,
        presets: impl PresetSource + 'static,
        hooks: Hooks,
    ) -> Self {
        Self {
            registry,
            presets: Box::new(presets),
            hooks,
        }
    }

    /// Renderer with the built-in providers, no presets and no hooks
    #[must_use]
    pub fn with_defaults() -> Self {
        let hooks = Hooks::new();
        Self::new(ProviderRegistry::with_builtin(&hooks), NoPresets, hooks)
    }

    /// Build the renderer from configuration
    ///
    /// Hooks come from the `hooks` section, built-in providers are filtered
    /// through them, and presets are loaded from `presets.theme_json`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let hooks = Hooks::from_config(&config.hooks);
        let registry = ProviderRegistry::with_builtin(&hooks);

        let renderer = match &config.presets.theme_json {
            Some(path) => {
                info!("Loading theme presets from {path}");
                Self::new(registry, ThemePresets::from_file(path)?, hooks)
            }
            None => Self::new(registry, NoPresets, hooks),
        };

        Ok(renderer)
    }

    #[must_use]
    pub const fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    #[must_use]
    pub fn presets(&self) -> &dyn PresetSource {
        self.presets.as_ref()
    }

    #[must_use]
    pub fn controller(&self) -> MediaControllerBuilder<'_> {
        MediaControllerBuilder::new(&self.registry, self.presets.as_ref(), &self.hooks)
    }

    /// Controller markup for embed attributes, or an empty string when the
    /// provider is unknown, of the wrong media kind, or cannot render
    #[must_use]
    pub fn render_embed(&self, attrs: &BlockAttributes, variant: EmbedVariant) -> String {
        let slug = attrs.provider_slug_or(variant.fallback_slug());

        let Some(provider) = self.registry.get(slug) else {
            debug!(provider = slug, "provider not registered");
            return String::new();
        };

        if provider.kind() != variant.media_kind() {
            debug!(
                provider = slug,
                kind = %provider.kind(),
                embed_type = variant.as_str(),
                "provider media kind does not match embed type"
            );
            return String::new();
        }

        self.controller()
            .build_with(provider.as_ref(), attrs, &variant.media_type_path())
    }

    /// Render a parsed block
    ///
    /// Returns the block's original content unchanged unless it is an embed
    /// of a supported type whose provider renders.
    #[must_use]
    pub fn render_block(&self, block: &Block) -> String {
        if !block.is_embed() {
            return block.inner_html.clone();
        }

        let Some(variant) = block
            .attrs
            .embed_type
            .as_deref()
            .and_then(EmbedVariant::from_embed_type)
        else {
            return block.inner_html.clone();
        };

        let controller = self.render_embed(&block.attrs, variant);
        if controller.is_empty() {
            return block.inner_html.clone();
        }

        let slug = block.attrs.provider_slug_or(variant.fallback_slug());
        let classes = [
            "wp-block-embed".to_string(),
            format!("is-type-{}", variant.as_str()),
            format!("is-provider-{slug}"),
            format!("wp-block-embed-{slug}"),
            block.attrs.class_name.clone().unwrap_or_default(),
        ];
        let class = classes
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            r#"<figure class="{}"><div class="wp-block-embed__wrapper">{controller}</div></figure>"#,
            esc_attr(&class)
        )
    }
}

impl std::fmt::Debug for EmbedRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbedRenderer")
            .field("registry", &self.registry)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

impl Default for EmbedRenderer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn block(value: serde_json::Value) -> Block {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_embed_variant() {
        assert_eq!(EmbedVariant::from_embed_type("video"), Some(EmbedVariant::Video));
        assert_eq!(EmbedVariant::from_embed_type("rich"), Some(EmbedVariant::Rich));
        assert_eq!(EmbedVariant::from_embed_type("photo"), None);
        assert_eq!(EmbedVariant::Rich.media_type_path().to_string(), "embed.audio");
    }

    #[test]
    fn test_render_video_block() {
        let renderer = EmbedRenderer::with_defaults();
        let html = renderer.render_block(&block(json!({
            "blockName": "core/embed",
            "attrs": {
                "url": "https://vimeo.com/1",
                "type": "video",
                "providerNameSlug": "vimeo",
                "className": "is-style-wide"
            },
            "innerHTML": "<figure>original</figure>"
        })));

        assert!(html.starts_with(
            r#"<figure class="wp-block-embed is-type-video is-provider-vimeo wp-block-embed-vimeo is-style-wide"><div class="wp-block-embed__wrapper"><media-controller "#
        ));
        assert!(html.contains(r#"<vimeo-video src="https://vimeo.com/1" slot="media"></vimeo-video>"#));
        assert!(html.ends_with("</media-controller></div></figure>"));
    }

    #[test]
    fn test_render_rich_block_uses_audio_settings() {
        let renderer = EmbedRenderer::with_defaults();
        let html = renderer.render_block(&block(json!({
            "blockName": "core/embed",
            "attrs": {
                "url": "https://open.spotify.com/track/1",
                "type": "rich",
                "providerNameSlug": "spotify"
            }
        })));

        assert!(html.contains("is-type-rich is-provider-spotify"));
        assert!(html.contains("<spotify-audio"));
        assert!(!html.contains("media-fullscreen-button"));
        assert!(html.contains("<media-volume-range></media-volume-range>"));
    }

    #[test]
    fn test_unsupported_blocks_pass_through() {
        let renderer = EmbedRenderer::with_defaults();

        let paragraph = block(json!({"blockName": "core/paragraph", "innerHTML": "<p>hi</p>"}));
        assert_eq!(renderer.render_block(&paragraph), "<p>hi</p>");

        let photo = block(json!({
            "blockName": "core/embed",
            "attrs": {"url": "https://flickr.com/p/1", "type": "photo", "providerNameSlug": "flickr"},
            "innerHTML": "<figure>photo</figure>"
        }));
        assert_eq!(renderer.render_block(&photo), "<figure>photo</figure>");

        let unknown = block(json!({
            "blockName": "core/embed",
            "attrs": {"url": "https://dai.ly/x", "type": "video", "providerNameSlug": "dailymotion"},
            "innerHTML": "<figure>dm</figure>"
        }));
        assert_eq!(renderer.render_block(&unknown), "<figure>dm</figure>");

        let no_slug = block(json!({
            "blockName": "core/embed",
            "attrs": {"url": "https://e.com/v.mp4", "type": "video"},
            "innerHTML": "<figure>raw</figure>"
        }));
        assert_eq!(renderer.render_block(&no_slug), "<figure>raw</figure>");
    }

    #[test]
    fn test_provider_kind_must_match_type() {
        let renderer = EmbedRenderer::with_defaults();
        let mismatched = block(json!({
            "blockName": "core/embed",
            "attrs": {"url": "https://open.spotify.com/track/1", "type": "video", "providerNameSlug": "spotify"},
            "innerHTML": "<figure>sp</figure>"
        }));
        assert_eq!(renderer.render_block(&mismatched), "<figure>sp</figure>");
    }

    #[test]
    fn test_from_config_with_theme_and_hooks() {
        let mut theme = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut theme,
            json!({
                "version": 3,
                "settings": {"custom": {"mediaChrome": {"presets": {
                    "embed": {"video": {"controls": false}}
                }}}}
            })
            .to_string()
            .as_bytes(),
        )
        .unwrap();

        let mut config = Config::default();
        config.presets.theme_json = Some(theme.path().to_string_lossy().into_owned());
        config.hooks.providers = Some(vec!["youtube".to_string()]);

        let renderer = EmbedRenderer::from_config(&config).unwrap();
        assert_eq!(renderer.registry().slugs(), vec!["youtube"]);

        let html = renderer.render_embed(
            &BlockAttributes::new("https://youtu.be/abc", "youtube"),
            EmbedVariant::Video,
        );
        assert!(html.starts_with(r#"<media-controller autohide="2" preload="metadata">"#));
        assert!(!html.contains("media-control-bar"));
    }

    #[test]
    fn test_from_config_missing_theme_fails() {
        let mut config = Config::default();
        config.presets.theme_json = Some("/nonexistent/theme.json".to_string());
        assert!(EmbedRenderer::from_config(&config).is_err());
    }
}
