//! Output-directory resolution and license file writing.

use crate::archive::{name, License};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves the output directory for a run.
///
/// An existing directory is used as-is; an existing non-directory is fatal; a
/// missing path is created with intermediates. Without an explicit path the
/// current working directory is used.
pub fn resolve_output_dir(requested: Option<&Path>) -> Result<PathBuf> {
    match requested {
        Some(path) if path.is_dir() => Ok(path.to_path_buf()),
        Some(path) if path.exists() => bail!("{} is not a directory", path.display()),
        Some(path) => {
            fs::create_dir_all(path)
                .with_context(|| format!("create output directory: {}", path.display()))?;
            Ok(path.to_path_buf())
        }
        None => std::env::current_dir().context("resolve current directory"),
    }
}

/// Writes extracted licenses under `<output>/<bundle-root-name>/`, printing
/// each destination path.
///
/// A pre-existing bundle directory is reused and existing files are truncated
/// silently, so a re-run overwrites previous results byte for byte.
pub fn write_licenses(
    output_dir: &Path,
    root: &str,
    licenses: &[License],
) -> std::io::Result<Vec<PathBuf>> {
    let bundle_dir = output_dir.join(name::bundle_root_name(root));
    fs::create_dir_all(&bundle_dir)?;

    let mut written = Vec::with_capacity(licenses.len());
    for license in licenses {
        let dest = bundle_dir.join(name::basename(&license.path));
        fs::write(&dest, &license.bytes)?;
        println!("{}", dest.display());
        written.push(dest);
    }
    Ok(written)
}
