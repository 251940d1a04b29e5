pub mod attrs;
pub mod block;
pub mod catalog;
pub mod config;
pub mod control_bar;
pub mod controller;
pub mod embed;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod poster;
pub mod provider;
pub mod sanitize;
pub mod settings;

pub use attrs::{AttrValue, AttributeMap};
pub use block::{Block, BlockAttributes};
pub use config::Config;
pub use controller::MediaControllerBuilder;
pub use embed::{EmbedRenderer, EmbedVariant};
pub use error::{Error, Result};
pub use hooks::Hooks;
pub use provider::{MediaKind, ProviderRegistry, ProviderRenderer};
pub use settings::{MediaTypePath, Settings, SettingsResolver};
