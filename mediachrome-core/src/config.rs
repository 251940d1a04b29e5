use crate::attrs::AttrValue;
use crate::catalog;
use crate::provider::BUILTIN_SLUGS;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding an explicit config file path
pub const CONFIG_PATH_ENV: &str = "MEDIACHROME_CONFIG_PATH";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "mediachrome.yaml";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub presets: PresetsConfig,
    pub hooks: HooksConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "pretty"
    pub file_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file_path: None,
        }
    }
}

/// Where theme presets come from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetsConfig {
    /// theme.json providing `settings.custom.mediaChrome.presets`
    pub theme_json: Option<String>,
}

/// Declarative extension points, turned into filters by `Hooks::from_config`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HooksConfig {
    /// Replaces the allowed control-bar component tags
    pub allowed_components: Option<Vec<String>>,

    /// HTML tags (and their attributes) allowed inside slot content
    pub allowed_slot_tags: IndexMap<String, Vec<String>>,

    /// Slot content per component tag: tag → slot → HTML
    pub slots: IndexMap<String, IndexMap<String, String>>,

    /// Attributes merged into every `<media-controller>`
    pub controller_attrs: IndexMap<String, AttrValue>,

    /// Attributes merged into provider elements, per provider slug
    pub provider_attrs: IndexMap<String, IndexMap<String, AttrValue>>,

    /// Enabled built-in provider slugs (all when unset)
    pub providers: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from multiple sources with priority:
    /// 1. Environment variables (highest priority)
    /// 2. Config file (if provided)
    /// 3. Defaults (lowest priority)
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_file {
            if Path::new(path).exists() {
                builder = builder.add_source(File::with_name(path));
            }
        }

        // MEDIACHROME_LOGGING__LEVEL, MEDIACHROME_HOOKS__PROVIDERS=youtube,vimeo, ...
        builder = builder.add_source(
            Environment::with_prefix("MEDIACHROME")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("hooks.allowed_components")
                .with_list_parse_key("hooks.providers")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Load from file path
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::load(Some(path))
    }

    /// Check the configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !matches!(
            self.logging.level.to_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "warning" | "error"
        ) {
            errors.push(format!("Invalid log level: {}", self.logging.level));
        }

        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            errors.push(format!(
                "Invalid log format: {} (expected \"json\" or \"pretty\")",
                self.logging.format
            ));
        }

        if let Some(theme) = &self.presets.theme_json {
            if !Path::new(theme).exists() {
                errors.push(format!("Theme file not found: {theme}"));
            }
        }

        let hooks = &self.hooks;
        let component_tags = hooks
            .allowed_components
            .iter()
            .flatten()
            .chain(hooks.slots.keys());
        for tag in component_tags {
            if catalog::find(tag).is_none() {
                errors.push(format!("Unknown control bar component: {tag}"));
            }
        }

        for (tag, slots) in &hooks.slots {
            if let Some(component) = catalog::find(tag) {
                for slot in slots.keys().filter(|s| !component.has_slot(s)) {
                    errors.push(format!("Component {tag} has no slot named {slot}"));
                }
            }
        }

        let provider_slugs = hooks
            .providers
            .iter()
            .flatten()
            .chain(hooks.provider_attrs.keys());
        for slug in provider_slugs {
            if !BUILTIN_SLUGS.contains(&slug.as_str()) {
                errors.push(format!("Unknown provider: {slug}"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Load configuration from a config file or environment variables
///
/// Config file search order:
/// 1. `MEDIACHROME_CONFIG_PATH` (explicit path)
/// 2. `./mediachrome.yaml`
/// 3. Fall back to environment variables only
pub fn load_config(explicit_path: Option<&str>) -> crate::Result<Config> {
    let config_path = explicit_path
        .map(str::to_string)
        .or_else(|| std::env::var(CONFIG_PATH_ENV).ok())
        .filter(|p| Path::new(p).exists())
        .or_else(|| {
            Path::new(DEFAULT_CONFIG_FILE)
                .exists()
                .then(|| DEFAULT_CONFIG_FILE.to_string())
        });

    // Runs before logging is initialized, so report on stderr directly
    let config = match config_path {
        Some(path) => {
            eprintln!("Loading config from {path}");
            Config::from_file(&path)?
        }
        None => {
            eprintln!("No config file found, using environment variables");
            Config::from_env()?
        }
    };

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Config validation error: {error}");
        }
        return Err(crate::Error::InvalidInput(format!(
            "Configuration validation failed with {} error(s): {}",
            errors.len(),
            errors.join("; ")
        )));
    }

    Ok(config)
}
