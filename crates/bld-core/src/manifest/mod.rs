//! Manifest loading and URL extraction.
//!
//! Reads the manifest file, decodes the nested command/manufacturer/bundle
//! structure and flattens it into the ordered list of archive URLs. Both read
//! and decode failures are fatal to the whole run.

mod parse;

pub use parse::{ArtifactBundle, Command, Manufacturer, NestManifest, SourceInfo};

use anyhow::{Context, Result};
use std::path::Path;

/// Loads and decodes a manifest file, carrying the path as error context.
pub fn load(path: &Path) -> Result<NestManifest> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read manifest: {}", path.display()))?;
    let manifest: NestManifest = serde_json::from_slice(&bytes)
        .with_context(|| format!("decode manifest: {}", path.display()))?;
    Ok(manifest)
}

impl NestManifest {
    /// Flattens the manifest to its archive URLs, in per-category document
    /// order.
    pub fn zip_urls(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|(_, commands)| commands.iter())
            .map(|c| c.manufacturer.artifact_bundle.source_info.zip_url.clone())
            .collect()
    }
}
