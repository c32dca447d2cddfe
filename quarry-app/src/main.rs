use anyhow::Result;
use clap::Parser;
use quarry_common::observability::{init_tracing, LogOptions};
use quarry_config::QuarryConfigLoader;
use std::path::PathBuf;

mod run;

/// Log into a Q&A site, search for the given words, and harvest the
/// question/answer text of every result whose title matches the query.
#[derive(Parser, Debug)]
#[command(name = "quarry")]
pub(crate) struct Cli {
    /// Words joined with single spaces to form the search query.
    #[arg(required = true)]
    pub(crate) words: Vec<String>,

    /// Configuration file (YAML).
    #[arg(long, default_value = "quarry.yaml")]
    pub(crate) config: PathBuf,

    /// Override the output file from the configuration.
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,

    /// Run the browser without a visible window.
    #[arg(long)]
    pub(crate) headless: bool,

    /// Extraction strategy override: accepted-answer or leading-bodies.
    #[arg(long)]
    pub(crate) strategy: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = QuarryConfigLoader::new().with_file(&cli.config).load()?;
    init_tracing(LogOptions::default())?;

    run::run_harvest(cli, cfg).await
}
