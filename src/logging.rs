//! Structured logging via the `tracing` crate.
//!
//! Configurable level, format (text/json), and destination
//! (stdout/stderr/file). Environment variables override file config:
//! `FOLDERMAP_LOG`, `FOLDERMAP_LOG_FORMAT`, `FOLDERMAP_LOG_OUTPUT`,
//! `FOLDERMAP_LOG_FILE`.

use crate::error::FoldermapError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether logging is enabled (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path when output is file; None means use runtime default
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format, stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "file".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
        }
    }
}

/// Resolve the log file path with precedence: CLI, FOLDERMAP_LOG_FILE env,
/// config file, platform state directory default.
pub fn resolve_log_file_path(
    cli_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<PathBuf, FoldermapError> {
    if let Some(p) = cli_file {
        if !p.as_os_str().is_empty() {
            return Ok(p);
        }
    }
    if let Ok(env_path) = std::env::var("FOLDERMAP_LOG_FILE") {
        if !env_path.is_empty() {
            return Ok(PathBuf::from(env_path));
        }
    }
    if let Some(p) = config_file {
        if !p.as_os_str().is_empty() {
            return Ok(p);
        }
    }
    default_log_file_path()
}

fn default_log_file_path() -> Result<PathBuf, FoldermapError> {
    let project_dirs = directories::ProjectDirs::from("", "foldermap", "foldermap").ok_or_else(
        || {
            FoldermapError::ConfigError(
                "Could not determine platform state directory for log file".to_string(),
            )
        },
    )?;
    let state_dir = project_dirs
        .state_dir()
        .or_else(|| Some(project_dirs.data_dir()))
        .ok_or_else(|| {
            FoldermapError::ConfigError(
                "Platform state directory not available for log file".to_string(),
            )
        })?;
    Ok(state_dir.join("foldermap.log"))
}

fn open_log_file(path: &Path) -> Result<std::fs::File, FoldermapError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            FoldermapError::ConfigError(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            FoldermapError::ConfigError(format!("Failed to open log file {:?}: {}", path, e))
        })
}

/// Initialize the logging system.
///
/// Priority: environment variables, then config file, then defaults.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), FoldermapError> {
    if config.map(|c| !c.enabled).unwrap_or(false) {
        Registry::default()
            .with(EnvFilter::new("off"))
            .with(fmt::layer().with_writer(|| std::io::sink()))
            .init();
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let base = Registry::default().with(filter);
    let timer = ChronoUtc::rfc_3339();

    match (format.as_str(), output.as_str()) {
        ("json", "file") => {
            let file = open_log_file(&resolve_log_file_path(
                None,
                config.and_then(|c| c.file.clone()),
            )?)?;
            base.with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(timer)
                    .with_writer(file),
            )
            .init();
        }
        ("json", "stderr") => {
            base.with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(timer)
                    .with_writer(std::io::stderr),
            )
            .init();
        }
        ("json", _) => {
            base.with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(timer)
                    .with_writer(std::io::stdout),
            )
            .init();
        }
        (_, "file") => {
            let file = open_log_file(&resolve_log_file_path(
                None,
                config.and_then(|c| c.file.clone()),
            )?)?;
            base.with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(timer)
                    .with_ansi(false)
                    .with_writer(file),
            )
            .init();
        }
        (_, "stderr") => {
            base.with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(timer)
                    .with_ansi(use_color)
                    .with_writer(std::io::stderr),
            )
            .init();
        }
        _ => {
            base.with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(timer)
                    .with_ansi(use_color)
                    .with_writer(std::io::stdout),
            )
            .init();
        }
    }

    Ok(())
}

/// Build environment filter from config or the FOLDERMAP_LOG variable.
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, FoldermapError> {
    if let Ok(filter) = EnvFilter::try_from_env("FOLDERMAP_LOG") {
        return Ok(filter);
    }
    let level = config.map(|c| c.level.as_str()).unwrap_or("info");
    EnvFilter::try_new(level)
        .map_err(|e| FoldermapError::ConfigError(format!("Invalid log level directive: {}", e)))
}

/// Determine output format from config or environment.
fn determine_format(config: Option<&LoggingConfig>) -> Result<String, FoldermapError> {
    if let Ok(format) = std::env::var("FOLDERMAP_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }
    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    if format != "json" && format != "text" {
        return Err(FoldermapError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }
    Ok(format.to_string())
}

/// Determine output destination from config or environment.
fn determine_output(config: Option<&LoggingConfig>) -> Result<String, FoldermapError> {
    let output = match std::env::var("FOLDERMAP_LOG_OUTPUT") {
        Ok(v) => v,
        Err(_) => config
            .map(|c| c.output.clone())
            .unwrap_or_else(default_output),
    };
    match output.as_str() {
        "stdout" | "stderr" | "file" => Ok(output),
        _ => Err(FoldermapError::ConfigError(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
            output
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logging_config() {
        let config = LoggingConfig::default();
        assert!(config.enabled);
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "text");
        assert_eq!(config.output, "file");
        assert_eq!(config.file, None);
        assert!(config.color);
    }

    #[test]
    fn test_determine_output_rejects_unknown() {
        let config = LoggingConfig {
            output: "pipe".to_string(),
            ..LoggingConfig::default()
        };
        let err = determine_output(Some(&config)).unwrap_err();
        assert!(err.to_string().contains("Invalid log output"));
    }

    #[test]
    fn test_resolve_log_file_path_cli_wins() {
        let cli = Some(PathBuf::from("/tmp/cli.log"));
        let config = Some(PathBuf::from("/tmp/config.log"));
        let path = resolve_log_file_path(cli, config).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/cli.log"));
    }

    #[test]
    fn test_resolve_log_file_path_config_when_cli_none() {
        let config = Some(PathBuf::from("/tmp/config.log"));
        let path = resolve_log_file_path(None, config).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/config.log"));
    }

    #[test]
    fn test_resolve_log_file_path_default_fallback() {
        let path = resolve_log_file_path(None, None).unwrap();
        assert!(path.ends_with("foldermap.log"));
        assert!(path.components().count() >= 2);
    }
}
