//! Folio CLI - static portfolio site generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static portfolio site generator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to folio.toml config file
    #[arg(short, long, default_value = "folio.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a sample config and content file
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Build the portfolio site
    Build {
        /// Content file (defaults to config or "content.json")
        #[arg(long)]
        content: Option<PathBuf>,

        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Theme id, overriding the one in the content file
        #[arg(short, long)]
        theme: Option<String>,

        /// Minify the stylesheet
        #[arg(long, conflicts_with = "no_minify")]
        minify: bool,

        /// Skip minification even when folio.toml enables it
        #[arg(long)]
        no_minify: bool,

        /// Insert content text without escaping
        #[arg(long)]
        no_escape: bool,
    },

    /// List available themes
    Themes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Build {
            content,
            output,
            theme,
            minify,
            no_minify,
            no_escape,
        } => {
            let minify = match (minify, no_minify) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let overrides = commands::build::Overrides {
                content,
                output,
                theme,
                minify,
                escape: if no_escape { Some(false) } else { None },
            };
            commands::build::run(&cli.config, overrides)?;
        }
        Commands::Themes => {
            commands::themes::run(&cli.config)?;
        }
    }

    Ok(())
}
