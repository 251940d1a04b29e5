//! Media settings: keys, media-type paths and the effective settings map
//!
//! Settings are resolved from three layers, highest precedence first:
//! per-block overrides, theme presets, built-in defaults. See [`SettingsResolver`].

pub mod defaults;
pub mod presets;
pub mod resolver;

pub use presets::{NoPresets, PresetSource, ThemePresets};
pub use resolver::SettingsResolver;

use crate::attrs::{AttrValue, AttributeMap};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Controller-level setting keys
pub mod controller {
    pub const MUTED: &str = "muted";
    pub const CONTROLS: &str = "controls";
    pub const PRELOAD: &str = "preload";
    pub const PLAYS_INLINE: &str = "playsInline";
    pub const POSTER: &str = "poster";
    pub const AUTOHIDE: &str = "autohide";

    /// Keys copied onto the `<media-controller>` element, in output order
    pub const ELEMENT_ATTRIBUTES: &[&str] = &[AUTOHIDE, MUTED, CONTROLS, PLAYS_INLINE, PRELOAD];

    /// Element attributes that only accept a boolean
    pub const FLAG_ATTRIBUTES: &[&str] = &[MUTED, CONTROLS, PLAYS_INLINE];
}

/// Component-visibility setting keys, one per control-bar component
pub mod component {
    pub const PLAY_BUTTON: &str = "playButton";
    pub const SEEK_BACKWARD_BUTTON: &str = "seekBackwardButton";
    pub const SEEK_FORWARD_BUTTON: &str = "seekForwardButton";
    pub const MUTE_BUTTON: &str = "muteButton";
    pub const VOLUME_RANGE: &str = "volumeRange";
    pub const TIME_DISPLAY: &str = "timeDisplay";
    pub const TIME_RANGE: &str = "timeRange";
    pub const CAPTIONS_BUTTON: &str = "captionsButton";
    pub const PLAYBACK_RATE_BUTTON: &str = "playbackRateButton";
    pub const PIP_BUTTON: &str = "pipButton";
    pub const FULLSCREEN_BUTTON: &str = "fullscreenButton";
    pub const AIRPLAY_BUTTON: &str = "airplayButton";
}

/// Ordered category key selecting a default/preset subtree, e.g. `embed.video`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaTypePath(Vec<String>);

impl MediaTypePath {
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn embed_video() -> Self {
        Self::new(["embed", "video"])
    }

    #[must_use]
    pub fn embed_audio() -> Self {
        Self::new(["embed", "audio"])
    }

    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        self.0.iter().map(String::as_str).collect()
    }
}

impl fmt::Display for MediaTypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Fully merged settings for one render
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(IndexMap<String, AttrValue>);

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// `true` when the key is present with an explicit `false`
    #[must_use]
    pub fn is_disabled(&self, key: &str) -> bool {
        self.get(key).is_some_and(AttrValue::is_false)
    }

    /// Non-empty text value for a key
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(AttrValue::as_text)
            .filter(|s| !s.is_empty())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttrValue)> {
        self.0.iter()
    }

    /// Subset of settings as an attribute map, in the order of `keys`
    #[must_use]
    pub fn pick(&self, keys: &[&str]) -> AttributeMap {
        keys.iter()
            .filter_map(|key| self.get(key).map(|v| ((*key).to_string(), v.clone())))
            .collect()
    }
}

impl FromIterator<(String, AttrValue)> for Settings {
    fn from_iter<T: IntoIterator<Item = (String, AttrValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
