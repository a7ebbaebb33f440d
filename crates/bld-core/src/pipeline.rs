//! The per-URL pipeline: fetch, inspect, extract, write.
//!
//! URLs are processed strictly one at a time, in manifest order; the download
//! for URL N+1 does not start until URL N finished or failed. A failure in
//! any stage skips that URL and the loop moves on. Only manifest and
//! output-directory problems abort the run.

use anyhow::Result;
use std::path::Path;
use thiserror::Error;

use crate::archive::{self, ArchiveError, Inspection};
use crate::config::BldConfig;
use crate::fetch::{self, FetchError, FetchOptions};
use crate::manifest;
use crate::output;
use crate::url_model;

/// Per-URL failure; caught at the loop boundary and printed.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Archive(#[from] ArchiveError),
    #[error("write license files: {0}")]
    Write(#[from] std::io::Error),
    #[error("download task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Counts for one run. Informational only: failed URLs do not change the
/// process exit status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub urls_total: usize,
    pub urls_skipped: usize,
    pub files_written: usize,
}

/// Runs the whole pipeline: load the manifest, resolve the output directory
/// (both fatal on failure), then process one URL at a time.
pub async fn run(
    manifest_path: &Path,
    output_dir: Option<&Path>,
    cfg: &BldConfig,
) -> Result<RunSummary> {
    let manifest = manifest::load(manifest_path)?;
    let output_dir = output::resolve_output_dir(output_dir)?;
    let urls = manifest.zip_urls();

    let opts = FetchOptions::from_config(cfg);
    let mut summary = RunSummary {
        urls_total: urls.len(),
        ..RunSummary::default()
    };

    for url in urls {
        println!("Downloading: {url}");
        match process_url(&url, &output_dir, opts.clone()).await {
            Ok(written) if written > 0 => summary.files_written += written,
            Ok(_) => summary.urls_skipped += 1,
            Err(BundleError::Fetch(FetchError::Status(code))) => {
                println!("Failed to download {url} (HTTP {code})");
                summary.urls_skipped += 1;
            }
            Err(err) => {
                eprintln!("{}: {err}", url_model::display_name(&url));
                summary.urls_skipped += 1;
            }
        }
    }

    tracing::info!(
        total = summary.urls_total,
        skipped = summary.urls_skipped,
        files = summary.files_written,
        "run finished"
    );
    Ok(summary)
}

/// One URL end to end. Returns the number of license files written (0 when
/// the archive is empty or carries no license candidates).
///
/// The blocking curl download runs on the blocking pool; the single await on
/// its handle is this iteration's one suspend point.
async fn process_url(
    url: &str,
    output_dir: &Path,
    opts: FetchOptions,
) -> Result<usize, BundleError> {
    let owned_url = url.to_string();
    let body =
        tokio::task::spawn_blocking(move || fetch::download_to_memory(&owned_url, &opts)).await??;

    match archive::extract_licenses(body)? {
        Inspection::Empty => {
            println!("{} is empty.", url_model::display_name(url));
            Ok(0)
        }
        Inspection::NoLicense => {
            println!("{} does not contain license file", url_model::display_name(url));
            Ok(0)
        }
        Inspection::Licensed { root, licenses } => {
            let written = output::write_licenses(output_dir, &root, &licenses)?;
            tracing::debug!(url, root = %root, files = written.len(), "licenses written");
            Ok(written.len())
        }
    }
}
