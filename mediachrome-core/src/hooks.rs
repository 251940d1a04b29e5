//! Extension points
//!
//! Every list, attribute map and slot decision the renderer makes passes
//! through a named filter slot on [`Hooks`]. Filters are injected at
//! construction time; an empty slot is the identity. Several filters may be
//! registered on one slot and run in registration order, each receiving the
//! previous one's output.
//!
//! ```rust
//! use mediachrome_core::hooks::Hooks;
//!
//! let hooks = Hooks::new()
//!     .on_allowed_components(|tags| {
//!         tags.into_iter()
//!             .filter(|tag| tag != "media-volume-range")
//!             .collect()
//!     })
//!     .on_component_slots("media_play_button", |mut slots, _settings| {
//!         slots.insert("icon".to_string(), "<b>Play</b>".to_string());
//!         slots
//!     });
//! ```

use crate::attrs::AttributeMap;
use crate::block::BlockAttributes;
use crate::catalog::ComponentDescriptor;
use crate::config::HooksConfig;
use crate::provider::MediaKind;
use crate::settings::Settings;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Slot name → raw HTML fragment
pub type SlotContent = IndexMap<String, String>;

/// Allowed HTML tag → allowed attribute names, used to sanitize slot content
pub type AllowedTags = IndexMap<String, Vec<String>>;

pub type ListFilter = Arc<dyn Fn(Vec<String>) -> Vec<String> + Send + Sync>;
pub type ComponentsFilter =
    Arc<dyn Fn(Vec<ComponentDescriptor>) -> Vec<ComponentDescriptor> + Send + Sync>;
pub type AllowedTagsFilter = Arc<dyn Fn(AllowedTags) -> AllowedTags + Send + Sync>;
/// Receives the component's hook name (tag with `_` for `-`)
pub type SlotsFilter = Arc<dyn Fn(&str, SlotContent, &Settings) -> SlotContent + Send + Sync>;
pub type ControllerAttrsFilter =
    Arc<dyn Fn(AttributeMap, &BlockAttributes) -> AttributeMap + Send + Sync>;
/// Receives the provider slug
pub type ProviderAttrsFilter = Arc<dyn Fn(&str, AttributeMap) -> AttributeMap + Send + Sync>;
pub type ProvidersFilter = Arc<dyn Fn(MediaKind, Vec<String>) -> Vec<String> + Send + Sync>;

/// Named filter slots consulted while rendering
#[derive(Clone, Default)]
pub struct Hooks {
    allowed_components: Vec<ListFilter>,
    components: Vec<ComponentsFilter>,
    allowed_slot_tags: Vec<AllowedTagsFilter>,
    slots: Vec<SlotsFilter>,
    controller_attrs: Vec<ControllerAttrsFilter>,
    provider_attrs: Vec<ProviderAttrsFilter>,
    enabled_providers: Vec<ProvidersFilter>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("allowed_components", &self.allowed_components.len())
            .field("components", &self.components.len())
            .field("allowed_slot_tags", &self.allowed_slot_tags.len())
            .field("slots", &self.slots.len())
            .field("controller_attrs", &self.controller_attrs.len())
            .field("provider_attrs", &self.provider_attrs.len())
            .field("enabled_providers", &self.enabled_providers.len())
            .finish()
    }
}

impl Hooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build hooks from the declarative `hooks` config section
    #[must_use]
    pub fn from_config(config: &HooksConfig) -> Self {
        let mut hooks = Self::new();

        if let Some(allowed) = config.allowed_components.clone() {
            hooks = hooks.on_allowed_components(move |_| allowed.clone());
        }

        if !config.allowed_slot_tags.is_empty() {
            let extra = config.allowed_slot_tags.clone();
            hooks = hooks.on_allowed_slot_tags(move |mut tags| {
                for (tag, attributes) in &extra {
                    tags.insert(tag.clone(), attributes.clone());
                }
                tags
            });
        }

        for (tag, content) in &config.slots {
            let content = content.clone();
            hooks = hooks.on_component_slots(&tag.replace('-', "_"), move |mut slots, _| {
                for (slot, html) in &content {
                    slots.insert(slot.clone(), html.clone());
                }
                slots
            });
        }

        if !config.controller_attrs.is_empty() {
            let extra = config.controller_attrs.clone();
            hooks = hooks.on_controller_attrs(move |mut attrs, _| {
                for (key, value) in &extra {
                    attrs.insert(key.clone(), value.clone());
                }
                attrs
            });
        }

        for (slug, extra) in &config.provider_attrs {
            let extra = extra.clone();
            hooks = hooks.on_provider_attrs_for(slug, move |mut attrs| {
                for (key, value) in &extra {
                    attrs.insert(key.clone(), value.clone());
                }
                attrs
            });
        }

        if let Some(enabled) = config.providers.clone() {
            hooks = hooks.on_enabled_providers(move |_, slugs| {
                slugs.into_iter().filter(|s| enabled.contains(s)).collect()
            });
        }

        hooks
    }

    // ========== Registration ==========

    /// Filter the list of component tags allowed in the control bar
    #[must_use]
    pub fn on_allowed_components(
        mut self,
        filter: impl Fn(Vec<String>) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.allowed_components.push(Arc::new(filter));
        self
    }

    /// Replace or filter the component catalog before the control bar reads it
    #[must_use]
    pub fn on_components(
        mut self,
        filter: impl Fn(Vec<ComponentDescriptor>) -> Vec<ComponentDescriptor> + Send + Sync + 'static,
    ) -> Self {
        self.components.push(Arc::new(filter));
        self
    }

    /// Filter the HTML whitelist used to sanitize slot content
    #[must_use]
    pub fn on_allowed_slot_tags(
        mut self,
        filter: impl Fn(AllowedTags) -> AllowedTags + Send + Sync + 'static,
    ) -> Self {
        self.allowed_slot_tags.push(Arc::new(filter));
        self
    }

    /// Supply slot content for any component
    #[must_use]
    pub fn on_slots(
        mut self,
        filter: impl Fn(&str, SlotContent, &Settings) -> SlotContent + Send + Sync + 'static,
    ) -> Self {
        self.slots.push(Arc::new(filter));
        self
    }

    /// Supply slot content for one component, addressed by hook name
    /// (`media_play_button` for `media-play-button`)
    #[must_use]
    pub fn on_component_slots(
        self,
        hook_name: &str,
        filter: impl Fn(SlotContent, &Settings) -> SlotContent + Send + Sync + 'static,
    ) -> Self {
        let target = hook_name.to_string();
        self.on_slots(move |name, slots, settings| {
            if name == target {
                filter(slots, settings)
            } else {
                slots
            }
        })
    }

    /// Filter the `<media-controller>` attribute map
    #[must_use]
    pub fn on_controller_attrs(
        mut self,
        filter: impl Fn(AttributeMap, &BlockAttributes) -> AttributeMap + Send + Sync + 'static,
    ) -> Self {
        self.controller_attrs.push(Arc::new(filter));
        self
    }

    /// Filter provider element attributes for any provider
    #[must_use]
    pub fn on_provider_attrs(
        mut self,
        filter: impl Fn(&str, AttributeMap) -> AttributeMap + Send + Sync + 'static,
    ) -> Self {
        self.provider_attrs.push(Arc::new(filter));
        self
    }

    /// Filter provider element attributes for one provider slug
    #[must_use]
    pub fn on_provider_attrs_for(
        self,
        slug: &str,
        filter: impl Fn(AttributeMap) -> AttributeMap + Send + Sync + 'static,
    ) -> Self {
        let target = slug.to_string();
        self.on_provider_attrs(move |name, attrs| {
            if name == target {
                filter(attrs)
            } else {
                attrs
            }
        })
    }

    /// Filter which built-in providers get registered, per media kind
    #[must_use]
    pub fn on_enabled_providers(
        mut self,
        filter: impl Fn(MediaKind, Vec<String>) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.enabled_providers.push(Arc::new(filter));
        self
    }

    // ========== Application ==========

    #[must_use]
    pub fn allowed_components(&self, tags: Vec<String>) -> Vec<String> {
        self.allowed_components.iter().fold(tags, |acc, f| f(acc))
    }

    #[must_use]
    pub fn components(&self, components: Vec<ComponentDescriptor>) -> Vec<ComponentDescriptor> {
        self.components.iter().fold(components, |acc, f| f(acc))
    }

    #[must_use]
    pub fn allowed_slot_tags(&self, tags: AllowedTags) -> AllowedTags {
        self.allowed_slot_tags.iter().fold(tags, |acc, f| f(acc))
    }

    #[must_use]
    pub fn slots(&self, hook_name: &str, slots: SlotContent, settings: &Settings) -> SlotContent {
        self.slots
            .iter()
            .fold(slots, |acc, f| f(hook_name, acc, settings))
    }

    #[must_use]
    pub fn controller_attrs(
        &self,
        attrs: AttributeMap,
        block_attrs: &BlockAttributes,
    ) -> AttributeMap {
        self.controller_attrs
            .iter()
            .fold(attrs, |acc, f| f(acc, block_attrs))
    }

    #[must_use]
    pub fn provider_attrs(&self, slug: &str, attrs: AttributeMap) -> AttributeMap {
        self.provider_attrs.iter().fold(attrs, |acc, f| f(slug, acc))
    }

    #[must_use]
    pub fn enabled_providers(&self, kind: MediaKind, slugs: Vec<String>) -> Vec<String> {
        self.enabled_providers
            .iter()
            .fold(slugs, |acc, f| f(kind, acc))
    }
}
