//! Built-in default settings, one subtree per media-type path

use super::{component as c, controller as k, Settings};
use crate::attrs::AttrValue;

/// A const-constructible default value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Flag(bool),
    Number(i64),
    Text(&'static str),
}

impl From<DefaultValue> for AttrValue {
    fn from(value: DefaultValue) -> Self {
        match value {
            DefaultValue::Flag(b) => Self::Flag(b),
            DefaultValue::Number(n) => Self::Number(n),
            DefaultValue::Text(s) => Self::Text(s.to_string()),
        }
    }
}

/// Defaults for one media-type path
#[derive(Debug, Clone, Copy)]
pub struct DefaultsEntry {
    pub path: &'static [&'static str],
    pub values: &'static [(&'static str, DefaultValue)],
}

use DefaultValue::{Flag, Number, Text};

const VIDEO: &[(&str, DefaultValue)] = &[
    (k::MUTED, Flag(false)),
    (k::CONTROLS, Flag(true)),
    (k::PRELOAD, Text("metadata")),
    (k::PLAYS_INLINE, Flag(false)),
    (k::POSTER, Text("")),
    (k::AUTOHIDE, Number(2)),
    (c::PLAY_BUTTON, Flag(true)),
    (c::SEEK_BACKWARD_BUTTON, Flag(true)),
    (c::SEEK_FORWARD_BUTTON, Flag(true)),
    (c::MUTE_BUTTON, Flag(true)),
    (c::VOLUME_RANGE, Flag(true)),
    (c::TIME_DISPLAY, Flag(true)),
    (c::TIME_RANGE, Flag(true)),
    (c::CAPTIONS_BUTTON, Flag(false)),
    (c::PLAYBACK_RATE_BUTTON, Flag(true)),
    (c::PIP_BUTTON, Flag(false)),
    (c::FULLSCREEN_BUTTON, Flag(true)),
    (c::AIRPLAY_BUTTON, Flag(false)),
];

// No inline playback or poster for audio; components missing here fall back
// to their catalog default.
const AUDIO: &[(&str, DefaultValue)] = &[
    (k::MUTED, Flag(false)),
    (k::CONTROLS, Flag(true)),
    (k::PRELOAD, Text("metadata")),
    (k::AUTOHIDE, Number(2)),
    (c::PLAY_BUTTON, Flag(true)),
    (c::SEEK_BACKWARD_BUTTON, Flag(true)),
    (c::SEEK_FORWARD_BUTTON, Flag(true)),
    (c::TIME_DISPLAY, Flag(true)),
    (c::TIME_RANGE, Flag(true)),
    (c::CAPTIONS_BUTTON, Flag(false)),
    (c::PIP_BUTTON, Flag(false)),
    (c::FULLSCREEN_BUTTON, Flag(false)),
    (c::AIRPLAY_BUTTON, Flag(false)),
];

/// The static defaults table
pub const DEFAULTS: &[DefaultsEntry] = &[
    DefaultsEntry {
        path: &["embed", "video"],
        values: VIDEO,
    },
    DefaultsEntry {
        path: &["embed", "audio"],
        values: AUDIO,
    },
];

/// Default values for a media-type path, or `None` if the path is unknown
#[must_use]
pub fn lookup(path: &[&str]) -> Option<&'static [(&'static str, DefaultValue)]> {
    DEFAULTS
        .iter()
        .find(|entry| entry.path == path)
        .map(|entry| entry.values)
}

/// Defaults for a path as a [`Settings`] map (empty for unknown paths)
#[must_use]
pub fn for_path(path: &[&str]) -> Settings {
    lookup(path)
        .unwrap_or_default()
        .iter()
        .map(|(key, value)| ((*key).to_string(), AttrValue::from(*value)))
        .collect()
}
