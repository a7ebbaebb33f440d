//! Zip archive inspection and license extraction.
//!
//! Operates on a fully downloaded in-memory buffer: opens it read-only,
//! detects the bundle root (shortest entry path), filters file entries whose
//! stripped basename is exactly LICENSE/LICENCE and decompresses each
//! candidate into memory.

pub mod name;

use std::io::{Cursor, Read, Seek};
use thiserror::Error;
use zip::ZipArchive;

/// Metadata for one archive entry, in central-directory order.
#[derive(Debug, Clone)]
pub struct Entry {
    pub index: usize,
    pub path: String,
    pub is_file: bool,
}

/// An extracted license: entry path plus decompressed bytes.
#[derive(Debug)]
pub struct License {
    pub path: String,
    pub bytes: Vec<u8>,
}

/// What inspection found in one archive.
#[derive(Debug)]
pub enum Inspection {
    /// The archive has no entries at all.
    Empty,
    /// Entries exist but none is a license candidate.
    NoLicense,
    /// Bundle root path plus the extracted license contents.
    Licensed { root: String, licenses: Vec<License> },
}

#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The buffer is not a valid zip, or an entry could not be opened.
    #[error("invalid zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),
    /// An individual entry failed to decompress.
    #[error("read entry {path}: {source}")]
    EntryRead {
        path: String,
        source: std::io::Error,
    },
}

/// Opens `bytes` as a zip archive, finds the bundle root and extracts every
/// license candidate into memory.
///
/// An extraction failure for one entry aborts the remaining entries of this
/// archive; nothing extracted so far is returned.
pub fn extract_licenses(bytes: Vec<u8>) -> Result<Inspection, ArchiveError> {
    let mut zip = ZipArchive::new(Cursor::new(bytes))?;

    let entries = list_entries(&mut zip)?;
    let root = match shortest_path_entry(&entries) {
        Some(entry) => entry.path.clone(),
        None => return Ok(Inspection::Empty),
    };

    let candidates: Vec<&Entry> = entries
        .iter()
        .filter(|e| e.is_file && name::is_license_file(&e.path))
        .collect();
    if candidates.is_empty() {
        return Ok(Inspection::NoLicense);
    }

    let mut licenses = Vec::with_capacity(candidates.len());
    for entry in candidates {
        let mut file = zip.by_index(entry.index)?;
        let mut bytes = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut bytes)
            .map_err(|source| ArchiveError::EntryRead {
                path: entry.path.clone(),
                source,
            })?;
        licenses.push(License {
            path: entry.path.clone(),
            bytes,
        });
    }

    Ok(Inspection::Licensed { root, licenses })
}

/// Entry metadata in archive iteration order.
fn list_entries<R: Read + Seek>(zip: &mut ZipArchive<R>) -> Result<Vec<Entry>, ArchiveError> {
    let mut entries = Vec::with_capacity(zip.len());
    for index in 0..zip.len() {
        let file = zip.by_index(index)?;
        entries.push(Entry {
            index,
            path: file.name().to_string(),
            is_file: file.is_file(),
        });
    }
    Ok(entries)
}

/// Bundle root: the entry whose path has the fewest characters. Ties keep the
/// first entry encountered in archive order (replacement only on strictly
/// shorter paths).
fn shortest_path_entry(entries: &[Entry]) -> Option<&Entry> {
    let mut best: Option<(&Entry, usize)> = None;
    for entry in entries {
        let len = entry.path.chars().count();
        match best {
            Some((_, best_len)) if len >= best_len => {}
            _ => best = Some((entry, len)),
        }
    }
    best.map(|(entry, _)| entry)
}
