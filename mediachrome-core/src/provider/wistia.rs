// Wistia Provider

use super::{MediaKind, ProviderRenderer};

pub const SLUG: &str = "wistia";
pub const TAG: &str = "wistia-video";

#[derive(Debug, Clone, Copy, Default)]
pub struct WistiaProvider;

impl WistiaProvider {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProviderRenderer for WistiaProvider {
    fn slug(&self) -> &'static str {
        SLUG
    }

    fn tag(&self) -> &'static str {
        TAG
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Video
    }
}
