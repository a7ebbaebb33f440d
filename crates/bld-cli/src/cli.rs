//! CLI for the BLD bundle license downloader.

use anyhow::Result;
use bld_core::config::{self, BldConfig};
use bld_core::pipeline;
use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI: one positional manifest path, one optional output flag.
#[derive(Debug, Parser)]
#[command(name = "bld")]
#[command(about = "BLD: download bundle archives and collect their license files", long_about = None)]
pub struct Cli {
    /// Path to the manifest (info.json).
    pub manifest: PathBuf,

    /// Output directory for extracted license files (default: current directory).
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let cfg = match config::load_or_init() {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!("config unavailable, using defaults: {err:#}");
                BldConfig::default()
            }
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let summary = pipeline::run(&cli.manifest, cli.output.as_deref(), &cfg).await?;
        tracing::debug!(?summary, "pipeline finished");
        Ok(())
    }
}
