//! `<media-controller>` orchestration
//!
//! Resolves the effective settings for a block, then assembles the provider
//! element, the poster image and the control bar inside one controller.

use crate::attrs::{serialize_attrs, AttrValue, AttributeMap};
use crate::block::BlockAttributes;
use crate::control_bar::ControlBarBuilder;
use crate::hooks::Hooks;
use crate::poster::PosterImageBuilder;
use crate::provider::{ProviderRegistry, ProviderRenderer};
use crate::settings::{
    controller, defaults, MediaTypePath, PresetSource, Settings, SettingsResolver,
};
use tracing::debug;

pub const MEDIA_CONTROLLER_TAG: &str = "media-controller";

/// Provider slug used when a block does not name one
pub const DEFAULT_PROVIDER_SLUG: &str = "video";

/// Top-level markup builder
#[derive(Clone, Copy)]
pub struct MediaControllerBuilder<'a> {
    registry: &'a ProviderRegistry,
    presets: &'a dyn PresetSource,
    hooks: &'a Hooks,
}

impl<'a> MediaControllerBuilder<'a> {
    #[must_use]
    pub fn new(
        registry: &'a ProviderRegistry,
        presets: &'a dyn PresetSource,
        hooks: &'a Hooks,
    ) -> Self {
        Self {
            registry,
            presets,
            hooks,
        }
    }

    /// Render the controller for a block, looking the provider up by slug
    ///
    /// Returns an empty string when the provider is not registered, the media
    /// type is disabled, or the provider cannot render the block URL.
    #[must_use]
    pub fn build(&self, block_attrs: &BlockAttributes, path: &MediaTypePath) -> String {
        let slug = block_attrs.provider_slug_or(DEFAULT_PROVIDER_SLUG);

        let Some(provider) = self.registry.get(slug) else {
            debug!(provider = slug, "provider not registered, skipping media controller");
            return String::new();
        };

        self.build_with(provider.as_ref(), block_attrs, path)
    }

    /// Render the controller with an already selected provider
    #[must_use]
    pub fn build_with(
        &self,
        provider: &dyn ProviderRenderer,
        block_attrs: &BlockAttributes,
        path: &MediaTypePath,
    ) -> String {
        let settings = SettingsResolver::new(self.presets).resolve(&block_attrs.overrides(), path);
        if settings.is_empty() {
            debug!(path = %path, "media type disabled, skipping media controller");
            return String::new();
        }

        let provider_markup = provider.markup(block_attrs.url(), self.hooks);
        if provider_markup.is_empty() {
            return String::new();
        }

        let attrs = self
            .hooks
            .controller_attrs(element_attrs(&settings, path), block_attrs);
        let attrs = serialize_attrs(&attrs);

        let poster = PosterImageBuilder::build(&settings);
        let control_bar = ControlBarBuilder::new(self.hooks).render(&settings);

        let open = if attrs.is_empty() {
            format!("<{MEDIA_CONTROLLER_TAG}>")
        } else {
            format!("<{MEDIA_CONTROLLER_TAG} {attrs}>")
        };

        format!("{open}{provider_markup}{poster}{control_bar}</{MEDIA_CONTROLLER_TAG}>")
    }
}

/// Controller element attributes from the effective settings
///
/// Boolean attributes holding anything but a flag fall back to the media
/// type's default, or off when there is none.
fn element_attrs(settings: &Settings, path: &MediaTypePath) -> AttributeMap {
    let mut attrs = settings.pick(controller::ELEMENT_ATTRIBUTES);
    let defaults = defaults::for_path(&path.segments());

    for key in controller::FLAG_ATTRIBUTES {
        if let Some(value) = attrs.get_mut(*key) {
            if value.as_bool().is_none() {
                *value = defaults
                    .get(key)
                    .filter(|d| d.as_bool().is_some())
                    .cloned()
                    .unwrap_or(AttrValue::Flag(false));
            }
        }
    }

    attrs
}

impl std::fmt::Debug for MediaControllerBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaControllerBuilder")
            .field("registry", self.registry)
            .field("hooks", self.hooks)
            .finish_non_exhaustive()
    }
}
