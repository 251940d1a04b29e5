//! Theme/site preset sources
//!
//! Presets are sparse: a theme may set only `controls` for video and nothing
//! for audio. They live under the `settings.custom.mediaChrome.presets`
//! namespace of a theme.json document, addressed by the media-type path.

use crate::{Error, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Namespace of the preset tree inside a theme.json document
pub const THEME_PRESETS_NAMESPACE: &[&str] = &["settings", "custom", "mediaChrome", "presets"];

/// Read-only source of preset objects
pub trait PresetSource: Send + Sync {
    /// Preset object for a media-type path, `None` if the theme sets nothing
    fn get(&self, path: &[&str]) -> Option<Map<String, Value>>;
}

/// A preset source that never provides presets
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPresets;

impl PresetSource for NoPresets {
    fn get(&self, _path: &[&str]) -> Option<Map<String, Value>> {
        None
    }
}

/// Presets read from an in-memory preset tree
#[derive(Debug, Clone, Default)]
pub struct ThemePresets {
    root: Value,
}

impl ThemePresets {
    /// Wrap a tree already rooted at the presets namespace,
    /// e.g. `{"embed": {"video": {"muted": true}}}`
    #[must_use]
    pub const fn from_presets(root: Value) -> Self {
        Self { root }
    }

    /// Extract the presets namespace from a whole theme.json document.
    /// A document without the namespace yields no presets.
    #[must_use]
    pub fn from_theme_json(document: &Value) -> Self {
        let root = walk(document, THEME_PRESETS_NAMESPACE)
            .cloned()
            .unwrap_or(Value::Null);
        Self { root }
    }

    /// Load a theme.json file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::NotFound(format!(
                "theme file {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path)?;
        let document: Value = serde_json::from_str(&contents)?;
        if !document.is_object() {
            return Err(Error::InvalidInput(format!(
                "theme file {} must contain a JSON object",
                path.display()
            )));
        }

        tracing::debug!(path = %path.display(), "loaded theme presets");
        Ok(Self::from_theme_json(&document))
    }
}

impl PresetSource for ThemePresets {
    fn get(&self, path: &[&str]) -> Option<Map<String, Value>> {
        walk(&self.root, path)?.as_object().cloned()
    }
}

fn walk<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |node, segment| node.as_object()?.get(*segment))
}
