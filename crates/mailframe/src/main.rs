//! mailframe CLI - render HTML email templates into browsable previews.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "mailframe")]
#[command(about = "Render HTML email templates into browsable previews")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to mailframe.toml config file
    #[arg(short, long, default_value = "mailframe.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter config file with the built-in sample values
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Render every template and write the preview pages
    Build {
        /// Project root holding the templates (defaults to config or ".")
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Output directory (defaults to config or "example_emails")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Browse generated previews over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve
        #[arg(short, long, default_value = "example_emails")]
        dir: PathBuf,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Build { root, output } => {
            commands::build::run(&cli.config, root, output).await?;
        }
        Commands::Serve { port, dir, no_open } => {
            commands::serve::run(port, dir, !no_open).await?;
        }
    }

    Ok(())
}
