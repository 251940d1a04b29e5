// Provider Registry
//
// Slug-keyed registry of provider renderers. Populated once before rendering,
// read-only afterwards.

use super::{
    MediaKind, ProviderRenderer, SpotifyProvider, VimeoProvider, WistiaProvider, YouTubeProvider,
};
use crate::hooks::Hooks;
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// Provider registry for looking up renderers by slug
///
/// Re-registering a slug replaces the previous renderer but keeps its
/// position in [`ProviderRegistry::slugs`].
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    /// Registered renderers by slug
    providers: IndexMap<String, Arc<dyn ProviderRenderer>>,
}

impl ProviderRegistry {
    /// Create new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in providers enabled by the
    /// enabled-providers filters
    ///
    /// # Example
    /// ```rust
    /// use mediachrome_core::hooks::Hooks;
    /// use mediachrome_core::provider::{MediaKind, ProviderRegistry};
    ///
    /// let hooks = Hooks::new().on_enabled_providers(|kind, slugs| match kind {
    ///     MediaKind::Audio => Vec::new(),
    ///     MediaKind::Video => slugs,
    /// });
    /// let registry = ProviderRegistry::with_builtin(&hooks);
    /// assert!(registry.has("youtube"));
    /// assert!(!registry.has("spotify"));
    /// ```
    #[must_use]
    pub fn with_builtin(hooks: &Hooks) -> Self {
        let builtin: [Arc<dyn ProviderRenderer>; 4] = [
            Arc::new(YouTubeProvider::new()),
            Arc::new(VimeoProvider::new()),
            Arc::new(WistiaProvider::new()),
            Arc::new(SpotifyProvider::new()),
        ];

        let mut registry = Self::new();
        for kind in [MediaKind::Video, MediaKind::Audio] {
            let slugs = builtin
                .iter()
                .filter(|p| p.kind() == kind)
                .map(|p| p.slug().to_string())
                .collect();
            let enabled = hooks.enabled_providers(kind, slugs);

            for provider in builtin
                .iter()
                .filter(|p| p.kind() == kind && enabled.iter().any(|s| s == p.slug()))
            {
                registry.register(Arc::clone(provider));
            }
        }

        debug!(providers = ?registry.slugs(), "Built-in providers registered");
        registry
    }

    /// Register a provider under its own slug
    pub fn register(&mut self, provider: Arc<dyn ProviderRenderer>) {
        self.providers.insert(provider.slug().to_string(), provider);
    }

    /// Get provider by slug
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<Arc<dyn ProviderRenderer>> {
        self.providers.get(slug).cloned()
    }

    #[must_use]
    pub fn has(&self, slug: &str) -> bool {
        self.providers.contains_key(slug)
    }

    /// List all registered slugs, in registration order
    #[must_use]
    pub fn slugs(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }

    /// Iterate registered providers, in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ProviderRenderer>> {
        self.providers.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.slugs())
            .finish()
    }
}
