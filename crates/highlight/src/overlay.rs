//! Site-wide default overlay for highlight option resolution.

use crate::resolve::ResolveOptions;
use pygopts_core::{OptionsMap, SiteConfig, merge};
use std::sync::Arc;

/// Overlays site-wide highlighter defaults onto block-local options.
///
/// Wraps the resolver a tag handler already uses: the inner resolver still
/// produces the block-local mapping exactly as before, the site configuration
/// contributes defaults for everything the block leaves unset, and block-local
/// values win on conflicting names. Each resolution builds a fresh mapping;
/// nothing is cached and the shared configuration is only ever read.
#[derive(Debug, Clone)]
pub struct SiteDefaults<R> {
    inner: R,
    config: Arc<SiteConfig>,
}

impl<R: ResolveOptions> SiteDefaults<R> {
    /// Wrap `inner` so its output gains the defaults carried by `config`.
    pub fn new(inner: R, config: Arc<SiteConfig>) -> Self {
        Self { inner, config }
    }
}

impl<R: ResolveOptions> ResolveOptions for SiteDefaults<R> {
    fn resolve(&self, args: &str) -> OptionsMap {
        let block = self.inner.resolve(args);
        let defaults = self.config.highlight_defaults();
        if defaults.is_empty() {
            return block;
        }

        log::debug!(
            "overlaying {} site-wide highlighter defaults onto {} block-local options",
            defaults.len(),
            block.len()
        );
        merge(defaults, &block)
    }
}
