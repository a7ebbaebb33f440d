//! Entry-path name helpers: basename and extension stripping.
//!
//! Zip entry paths always use `/` separators; directory entries carry a
//! trailing slash.

/// Last path component of an entry path, ignoring a trailing slash.
pub fn basename(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}

/// Basename with its extension stripped (`LICENSE.txt` → `LICENSE`).
///
/// Only the last extension is removed; a leading dot is part of the name
/// (`.gitignore` stays `.gitignore`).
pub fn stem(path: &str) -> &str {
    let base = basename(path);
    match base.rfind('.') {
        Some(0) | None => base,
        Some(idx) => &base[..idx],
    }
}

/// Destination directory name for a bundle root entry.
///
/// Directory roots keep their name as-is (the dots in `mybundle-1.0/` are part
/// of the name, not an extension); file roots get their extension stripped.
pub fn bundle_root_name(path: &str) -> &str {
    if path.ends_with('/') {
        basename(path)
    } else {
        stem(path)
    }
}

/// True if the entry path names a license file: basename with extension
/// stripped exactly `LICENSE` or `LICENCE`, case-sensitive. No other spelling
/// variants are recognized.
pub fn is_license_file(path: &str) -> bool {
    let name = stem(path);
    name == "LICENSE" || name == "LICENCE"
}
