//! SassDoc theme CLI - renders documentation data with the bundled theme.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "sassdoc-theme")]
#[command(about = "Render SassDoc data to a static documentation site")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the theme configuration file
    #[arg(short, long, default_value = ".sassdocrc")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render documentation data to HTML
    Build {
        /// JSON file with the documentation context
        data: PathBuf,

        /// Output directory (defaults to config or "sassdoc")
        #[arg(short, long)]
        dest: Option<PathBuf>,

        /// Theme directory (defaults to the bundled theme)
        #[arg(short, long)]
        theme: Option<PathBuf>,
    },

    /// Print the custom annotations for the documentation extractor
    Annotations {
        /// Parse one occurrence: annotation name followed by its text
        #[arg(long, num_args = 2, value_names = ["NAME", "TEXT"])]
        parse: Option<Vec<String>>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Build { data, dest, theme } => {
            commands::build::run(&cli.config, data, dest, theme).await?;
        }
        Commands::Annotations { parse } => {
            commands::annotations::run(parse)?;
        }
    }

    Ok(())
}
