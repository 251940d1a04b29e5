// Spotify Provider
//
// The only built-in audio provider; embeds of type `rich` resolve here.

use super::{MediaKind, ProviderRenderer};

pub const SLUG: &str = "spotify";
pub const TAG: &str = "spotify-audio";

/// Spotify embed renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct SpotifyProvider;

impl SpotifyProvider {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProviderRenderer for SpotifyProvider {
    fn slug(&self) -> &'static str {
        SLUG
    }

    fn tag(&self) -> &'static str {
        TAG
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Audio
    }
}
