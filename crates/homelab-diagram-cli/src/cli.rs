//! Command-line interface for the homelab-diagram utility
//!
//! Prints one edition of the home-lab flowchart, or lists the editions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use homelab_diagram::core::logging::{init_logging, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use homelab_diagram::{DiagramError, Variant};

/// Homelab Diagram - print the home-lab Mermaid flowcharts
#[derive(Parser)]
#[command(name = "homelab-diagram")]
#[command(about = "Print the Mermaid source of the home-lab service diagram")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the Mermaid source of a diagram variant
    Show {
        /// Which edition of the diagram to print
        #[arg(long, value_enum, default_value_t = VariantChoice::Full)]
        variant: VariantChoice,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap the source in a ```mermaid Markdown fence
        #[arg(long)]
        fenced: bool,
    },

    /// List the available diagram variants
    Variants {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Diagram editions selectable on the command line
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum VariantChoice {
    /// All services
    #[default]
    Full,
    /// Home automation core only
    Summary,
}

impl From<VariantChoice> for Variant {
    fn from(value: VariantChoice) -> Self {
        match value {
            VariantChoice::Full => Variant::Full,
            VariantChoice::Summary => Variant::Summary,
        }
    }
}

/// One entry of `variants --json`
#[derive(Debug, Serialize)]
struct VariantInfo {
    name: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct VariantList {
    variants: Vec<VariantInfo>,
    total: usize,
}

impl VariantList {
    fn all() -> Self {
        let variants: Vec<VariantInfo> = Variant::ALL
            .iter()
            .map(|v| VariantInfo {
                name: v.name(),
                description: v.description(),
            })
            .collect();
        let total = variants.len();
        Self { variants, total }
    }
}

/// Wrap diagram text in a Markdown code fence tagged `mermaid`
pub fn fence(text: &str) -> String {
    let body = text.strip_prefix('\n').unwrap_or(text);
    let newline = if body.ends_with('\n') { "" } else { "\n" };
    format!("```mermaid\n{}{}```\n", body, newline)
}

/// Main CLI application
#[derive(Default)]
pub struct DiagramApp;

impl DiagramApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());

        let log_format_str = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level_str), Some(&log_format_str)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("homelab-diagram v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Show {
                variant,
                output,
                fenced,
            } => self.show_command(variant.into(), output, fenced, cli.verbose),
            Commands::Variants { json } => self.variants_command(json, cli.verbose),
        }
    }

    /// Handle the show command
    fn show_command(
        &self,
        variant: Variant,
        output: Option<PathBuf>,
        fenced: bool,
        verbose: bool,
    ) -> Result<()> {
        debug!(%variant, fenced, "Selected diagram");

        let text = homelab_diagram::diagram(variant);
        let content = if fenced {
            fence(text)
        } else {
            text.to_string()
        };

        if verbose {
            eprintln!("Writing {} diagram ({} bytes)", variant, content.len());
        }

        self.write_output(output, &content)?;
        info!(%variant, bytes = content.len(), "Diagram written");
        Ok(())
    }

    /// Handle the variants command
    fn variants_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing diagram variants");
        }

        let list = VariantList::all();
        if json {
            println!("{}", serde_json::to_string_pretty(&list)?);
        } else {
            println!("Diagram variants:");
            for entry in &list.variants {
                println!("  {:<8} - {}", entry.name, entry.description);
            }
            println!();
            println!("Total: {} variants", list.total);
        }

        Ok(())
    }

    /// Write to a file or stdout
    fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_str() != Some("-") => {
                debug!(path = %path.display(), "Writing to file");
                fs::write(&path, content)
                    .map_err(DiagramError::from)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            _ => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(content.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(DiagramError::from)
                    .context("Failed to write to stdout")?;
            }
        }
        Ok(())
    }
}
