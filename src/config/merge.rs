//! MergeService: composes config sources and deserializes to FoldermapConfig.

use super::FoldermapConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from standard sources.
    /// Precedence: defaults (lowest) -> global file -> workspace file ->
    /// environment (highest).
    pub fn load(workspace_root: &Path) -> Result<FoldermapConfig, ConfigError> {
        let mut builder = builder_with_defaults()?;
        if let Some(global) = global_config_path() {
            builder = builder.add_source(File::from(global).required(false));
        }
        builder = builder.add_source(
            File::from(workspace_root.join("foldermap.toml")).required(false),
        );
        builder = add_environment(builder);

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<FoldermapConfig, ConfigError> {
        let builder = builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()))
            .add_source(
                Environment::with_prefix("FOLDERMAP")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("render.hide_hidden", false)?
        .set_default("render.mode", "target")?
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "file")?
        .set_default("logging.color", true)
}

/// FOLDERMAP_* prefix with __ separator for nested keys.
fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("FOLDERMAP")
            .separator("__")
            .try_parsing(true),
    )
}

/// Global config file path (~/.config/foldermap/config.toml on Linux).
fn global_config_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("", "foldermap", "foldermap")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
