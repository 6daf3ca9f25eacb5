//! Configuration model and loading.
//!
//! Composed from defaults, a global file, a workspace file, and environment
//! variables. See [`merge::MergeService`] for precedence.

pub mod facade;
pub mod merge;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoldermapConfig {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default rendering behavior; individual CLI flags override these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Skip dot-prefixed entries inside subtree recursion.
    #[serde(default)]
    pub hide_hidden: bool,

    /// Default mode: target, preceding, or succeeding.
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_mode() -> String {
    "target".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            hide_hidden: false,
            mode: default_mode(),
        }
    }
}
