use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use preamble_atlas::{render_page, summary, AtlasConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "preamble-atlas",
    about = "World map of constitution preamble clusters"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Command {
    /// Load data and write the dashboard page
    Render {
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Cluster assignment CSV (overrides config)
        #[arg(long)]
        assignments: Option<PathBuf>,
        /// Country boundary GeoJSON path or URL (overrides config)
        #[arg(long)]
        geometry: Option<String>,
        /// Output HTML file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the cluster summaries as plain text
    Summary,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout can carry the page.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Render {
        config: None,
        assignments: None,
        geometry: None,
        output: None,
    }) {
        Command::Render {
            config,
            assignments,
            geometry,
            output,
        } => {
            let mut atlas = match config {
                Some(path) => AtlasConfig::load(&path)
                    .with_context(|| format!("reading config {}", path.display()))?,
                None => AtlasConfig::default(),
            };
            if let Some(path) = assignments {
                atlas.data.assignments = path;
            }
            if let Some(source) = geometry {
                atlas.data.geometry = source;
            }

            let html = render_page(&atlas)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!(path = %path.display(), "wrote dashboard");
                }
                None => print!("{html}"),
            }
        }
        Command::Summary => print!("{}", summary::render_summaries_text()),
    }
    Ok(())
}
