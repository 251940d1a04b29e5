//! Control-bar component catalog
//!
//! One static table describing every control-bar component: the custom
//! element tag, the visibility setting gating it, whether it is shown when that
//! setting is unset, and the named slots it accepts. Catalog order is render
//! order. Editor tooling reads the same table through [`CatalogSchema`].

use crate::settings::component as c;
use serde::Serialize;

/// Bumped whenever a component, key or slot changes
pub const CATALOG_VERSION: u32 = 1;

/// Static description of one control-bar component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    /// Custom element tag, e.g. `media-play-button`
    pub tag: &'static str,
    /// Component-visibility setting key gating the component
    pub setting_key: &'static str,
    /// Whether the component renders when its setting is unset
    pub default_enabled: bool,
    /// Named slots the component accepts
    pub slots: &'static [&'static str],
}

impl ComponentDescriptor {
    #[must_use]
    pub fn has_slot(&self, name: &str) -> bool {
        self.slots.contains(&name)
    }

    /// Tag with dashes replaced by underscores, used to key slot content
    #[must_use]
    pub fn hook_name(&self) -> String {
        self.tag.replace('-', "_")
    }
}

const fn component(
    tag: &'static str,
    setting_key: &'static str,
    default_enabled: bool,
    slots: &'static [&'static str],
) -> ComponentDescriptor {
    ComponentDescriptor {
        tag,
        setting_key,
        default_enabled,
        slots,
    }
}

/// Every control-bar component, in render order
pub const COMPONENTS: &[ComponentDescriptor] = &[
    component("media-play-button", c::PLAY_BUTTON, true, &["play", "pause", "icon"]),
    component("media-seek-backward-button", c::SEEK_BACKWARD_BUTTON, true, &["icon"]),
    component("media-seek-forward-button", c::SEEK_FORWARD_BUTTON, true, &["icon"]),
    component(
        "media-mute-button",
        c::MUTE_BUTTON,
        true,
        &["off", "low", "medium", "high", "icon"],
    ),
    component("media-volume-range", c::VOLUME_RANGE, true, &["thumb"]),
    component("media-time-display", c::TIME_DISPLAY, true, &[]),
    component(
        "media-time-range",
        c::TIME_RANGE,
        true,
        &["preview", "preview-arrow", "current", "thumb"],
    ),
    component("media-captions-button", c::CAPTIONS_BUTTON, false, &["on", "off", "icon"]),
    component("media-playback-rate-button", c::PLAYBACK_RATE_BUTTON, true, &[]),
    component("media-pip-button", c::PIP_BUTTON, false, &["enter", "exit", "icon"]),
    component("media-fullscreen-button", c::FULLSCREEN_BUTTON, true, &["enter", "exit", "icon"]),
    component("media-airplay-button", c::AIRPLAY_BUTTON, false, &["enter", "exit", "icon"]),
];

/// The full ordered component list
#[must_use]
pub fn components() -> Vec<ComponentDescriptor> {
    COMPONENTS.to_vec()
}

/// Every component tag, in catalog order
#[must_use]
pub fn tags() -> Vec<String> {
    COMPONENTS.iter().map(|d| d.tag.to_string()).collect()
}

/// Look up a component by tag
#[must_use]
pub fn find(tag: &str) -> Option<&'static ComponentDescriptor> {
    COMPONENTS.iter().find(|d| d.tag == tag)
}

/// Serializable view of the catalog shared with editor tooling
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSchema {
    pub version: u32,
    pub components: &'static [ComponentDescriptor],
}

#[must_use]
pub const fn schema() -> CatalogSchema {
    CatalogSchema {
        version: CATALOG_VERSION,
        components: COMPONENTS,
    }
}
