#![deny(missing_docs)]
//! Pygopts core: highlighter option mappings, merge semantics, and site configuration.

/// Site configuration loading and the highlighter defaults accessor.
pub mod config;
/// Option mapping types and merge semantics.
pub mod options;

pub use config::{ConfigError, PYGMENTS_OPTIONS_KEY, SiteConfig};
pub use options::{OptValue, OptionsMap, merge};
