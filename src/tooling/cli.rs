//! Command-line interface for all FolderMap operations.

use crate::config::{ConfigLoader, FoldermapConfig};
use crate::error::FoldermapError;
use crate::export::write_export;
use crate::logging::LoggingConfig;
use crate::render::{self, format, RenderOptions};
use crate::types::RenderMode;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

/// FolderMap CLI - directory structure rendering
#[derive(Parser)]
#[command(name = "foldermap")]
#[command(about = "Render directory trees as indented text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a directory structure to stdout
    Render {
        /// Target directory
        path: PathBuf,

        /// Render mode: target, preceding, or succeeding
        #[arg(long)]
        mode: Option<String>,

        /// Skip entries whose name starts with '.'
        #[arg(long)]
        hide_hidden: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Render a directory structure and export it as UTF-8 text
    Export {
        /// Target directory
        path: PathBuf,

        /// Export file path
        #[arg(long)]
        output: PathBuf,

        /// Render mode: target, preceding, or succeeding
        #[arg(long)]
        mode: Option<String>,

        /// Skip entries whose name starts with '.'
        #[arg(long)]
        hide_hidden: bool,
    },
    /// List the available render modes
    Modes,
}

/// Execution context holding loaded configuration.
pub struct CliContext {
    config: FoldermapConfig,
}

impl CliContext {
    /// Create a new CLI context, loading configuration from the given file
    /// or from the standard sources.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, FoldermapError> {
        let config = if let Some(path) = &config_path {
            ConfigLoader::load_from_file(path)?
        } else {
            let cwd = std::env::current_dir()
                .map_err(|e| FoldermapError::ConfigError(format!("cwd unavailable: {}", e)))?;
            ConfigLoader::load(&cwd)?
        };
        Ok(Self { config })
    }

    /// Loaded configuration.
    pub fn config(&self) -> &FoldermapConfig {
        &self.config
    }

    /// Logging configuration with CLI overrides applied.
    pub fn logging_config(&self, cli: &Cli) -> LoggingConfig {
        let mut logging = self.config.logging.clone();
        if cli.verbose {
            logging.level = "debug".to_string();
        }
        if let Some(level) = &cli.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &cli.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &cli.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &cli.log_file {
            logging.file = Some(file.clone());
        }
        logging
    }

    /// Execute a command, returning its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, FoldermapError> {
        match command {
            Commands::Render {
                path,
                mode,
                hide_hidden,
                format: output_format,
            } => {
                let mode = self.effective_mode(mode.as_deref())?;
                let opts = self.effective_options(*hide_hidden);
                info!(path = %path.display(), mode = %mode, hide_hidden = opts.hide_hidden, "rendering directory structure");

                match output_format.as_str() {
                    "text" => render::render_text(path, mode, &opts),
                    "json" => {
                        let nodes = render::render_structure(path, mode, &opts)?;
                        let payload = json!({
                            "mode": mode.as_str(),
                            "path": path.display().to_string(),
                            "hide_hidden": opts.hide_hidden,
                            "total": nodes.len(),
                            "entries": nodes,
                        });
                        Ok(serde_json::to_string_pretty(&payload)?)
                    }
                    other => Err(FoldermapError::InvalidFormat(other.to_string())),
                }
            }
            Commands::Export {
                path,
                output,
                mode,
                hide_hidden,
            } => {
                let mode = self.effective_mode(mode.as_deref())?;
                let opts = self.effective_options(*hide_hidden);
                info!(path = %path.display(), output = %output.display(), mode = %mode, "exporting directory structure");

                let text = render::render_text(path, mode, &opts)?;
                write_export(output, &text)?;
                Ok(format!("Exported to {}", output.display()))
            }
            Commands::Modes => Ok(describe_modes()),
        }
    }

    /// Mode from the CLI flag, falling back to the configured default.
    fn effective_mode(&self, cli_mode: Option<&str>) -> Result<RenderMode, FoldermapError> {
        match cli_mode {
            Some(s) => RenderMode::parse(s),
            None => RenderMode::parse(&self.config.render.mode),
        }
    }

    /// The --hide-hidden flag turns hiding on; the config default applies
    /// when the flag is absent.
    fn effective_options(&self, cli_hide_hidden: bool) -> RenderOptions {
        RenderOptions {
            hide_hidden: cli_hide_hidden || self.config.render.hide_hidden,
        }
    }
}

/// Short summary of available modes for --help adjacent output.
pub fn describe_modes() -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format::format_section_heading("Modes")));
    for mode in [
        RenderMode::TargetOnly,
        RenderMode::WithPreceding,
        RenderMode::WithSucceeding,
    ] {
        out.push_str(&format!("  {:<12} {}\n", mode.as_str(), mode.display_name()));
    }
    out
}
