use super::{defaults, MediaTypePath, PresetSource, Settings};
use crate::attrs::{AttrValue, AttributeMap};
use crate::catalog;
use tracing::debug;

/// Merges per-instance overrides, theme presets and built-in defaults
///
/// Precedence, highest first: override, preset, default. Only keys that are
/// genuinely missing fall through; an explicit `false`, `0` or `""` wins.
pub struct SettingsResolver<'a> {
    presets: &'a dyn PresetSource,
}

impl<'a> SettingsResolver<'a> {
    #[must_use]
    pub fn new(presets: &'a dyn PresetSource) -> Self {
        Self { presets }
    }

    /// Resolve the effective settings for one render.
    ///
    /// Returns an empty [`Settings`] when the media-type path has no built-in
    /// defaults, which disables rendering for that media type.
    #[must_use]
    pub fn resolve(&self, overrides: &AttributeMap, path: &MediaTypePath) -> Settings {
        let segments = path.segments();

        let Some(defaults) = defaults::lookup(&segments) else {
            debug!(path = %path, "no defaults for media type path");
            return Settings::new();
        };

        let presets = self.presets.get(&segments).unwrap_or_default();

        Self::whitelist(defaults)
            .into_iter()
            .filter_map(|key| {
                let value = overrides
                    .get(key)
                    .cloned()
                    .or_else(|| presets.get(key).and_then(AttrValue::from_json))
                    .or_else(|| {
                        defaults
                            .iter()
                            .find(|(k, _)| *k == key)
                            .map(|(_, v)| AttrValue::from(*v))
                    })?;
                Some((key.to_string(), value))
            })
            .collect()
    }

    /// Recognized keys for a media type: its defaults followed by any
    /// catalog component key the defaults do not mention
    fn whitelist(defaults: &[(&'static str, defaults::DefaultValue)]) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = defaults.iter().map(|(k, _)| *k).collect();
        for component in catalog::COMPONENTS {
            if !keys.contains(&component.setting_key) {
                keys.push(component.setting_key);
            }
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{component, controller, NoPresets, ThemePresets};
    use serde_json::json;

    fn overrides(pairs: &[(&str, AttrValue)]) -> AttributeMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_defaults_only() {
        let resolver = SettingsResolver::new(&NoPresets);
        let settings = resolver.resolve(&AttributeMap::new(), &MediaTypePath::embed_video());

        assert_eq!(settings.get(controller::CONTROLS), Some(&AttrValue::Flag(true)));
        assert_eq!(settings.get(controller::AUTOHIDE), Some(&AttrValue::Number(2)));
        assert_eq!(settings.len(), 18);
    }

    #[test]
    fn test_override_beats_preset_and_default_even_when_falsy() {
        let presets = ThemePresets::from_presets(json!({
            "embed": {"video": {"controls": true, "autohide": 5, "preload": "auto"}}
        }));
        let resolver = SettingsResolver::new(&presets);

        let settings = resolver.resolve(
            &overrides(&[
                (controller::CONTROLS, false.into()),
                (controller::AUTOHIDE, 0.into()),
                (controller::PRELOAD, "".into()),
            ]),
            &MediaTypePath::embed_video(),
        );

        assert_eq!(settings.get(controller::CONTROLS), Some(&AttrValue::Flag(false)));
        assert_eq!(settings.get(controller::AUTOHIDE), Some(&AttrValue::Number(0)));
        assert_eq!(
            settings.get(controller::PRELOAD),
            Some(&AttrValue::Text(String::new()))
        );
    }

    #[test]
    fn test_preset_beats_default() {
        let presets = ThemePresets::from_presets(json!({
            "embed": {"video": {"muted": true, "airplayButton": true}}
        }));
        let resolver = SettingsResolver::new(&presets);
        let settings = resolver.resolve(&AttributeMap::new(), &MediaTypePath::embed_video());

        assert_eq!(settings.get(controller::MUTED), Some(&AttrValue::Flag(true)));
        assert_eq!(
            settings.get(component::AIRPLAY_BUTTON),
            Some(&AttrValue::Flag(true))
        );
    }

    #[test]
    fn test_non_scalar_preset_falls_through() {
        let presets = ThemePresets::from_presets(json!({
            "embed": {"video": {"preload": ["auto"], "muted": null}}
        }));
        let resolver = SettingsResolver::new(&presets);
        let settings = resolver.resolve(&AttributeMap::new(), &MediaTypePath::embed_video());

        assert_eq!(
            settings.get(controller::PRELOAD),
            Some(&AttrValue::Text("metadata".to_string()))
        );
        assert_eq!(settings.get(controller::MUTED), Some(&AttrValue::Flag(false)));
    }

    #[test]
    fn test_unknown_path_is_empty() {
        let presets = ThemePresets::from_presets(json!({
            "embed": {"image": {"muted": true}}
        }));
        let resolver = SettingsResolver::new(&presets);

        let settings = resolver.resolve(
            &overrides(&[(controller::MUTED, true.into())]),
            &MediaTypePath::new(["embed", "image"]),
        );
        assert!(settings.is_empty());

        let settings = resolver.resolve(&AttributeMap::new(), &MediaTypePath::new(["embed"]));
        assert!(settings.is_empty());
    }

    #[test]
    fn test_unknown_keys_dropped() {
        let resolver = SettingsResolver::new(&NoPresets);
        let settings = resolver.resolve(
            &overrides(&[
                ("url", "https://youtu.be/x".into()),
                ("className", "is-style-wide".into()),
            ]),
            &MediaTypePath::embed_video(),
        );

        assert!(!settings.contains("url"));
        assert!(!settings.contains("className"));
    }

    #[test]
    fn test_audio_whitelist() {
        let resolver = SettingsResolver::new(&NoPresets);
        let settings = resolver.resolve(
            &overrides(&[
                (controller::POSTER, "https://e.com/p.jpg".into()),
                (controller::PLAYS_INLINE, true.into()),
                (component::MUTE_BUTTON, false.into()),
            ]),
            &MediaTypePath::embed_audio(),
        );

        assert!(!settings.contains(controller::POSTER));
        assert!(!settings.contains(controller::PLAYS_INLINE));
        assert!(settings.is_disabled(component::MUTE_BUTTON));
        // Components without an audio default stay unset
        assert!(!settings.contains(component::VOLUME_RANGE));
    }
}
