// Vimeo Provider

use super::{MediaKind, ProviderRenderer};

pub const SLUG: &str = "vimeo";
pub const TAG: &str = "vimeo-video";

#[derive(Debug, Clone, Copy, Default)]
pub struct VimeoProvider;

impl VimeoProvider {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProviderRenderer for VimeoProvider {
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
