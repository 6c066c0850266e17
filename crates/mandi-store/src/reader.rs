//! Directory and file reads shared by every collection.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Collection, ContentError};

/// One `.json` file found in a collection directory.
pub(crate) struct ContentFile<T> {
    /// File name without the `.json` extension.
    pub stem: String,
    pub parsed: Result<T, ContentError>,
}

fn io_error(path: &Path, source: std::io::Error) -> ContentError {
    ContentError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Parse a single content file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let content = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    serde_json::from_str(&content).map_err(|source| ContentError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// List and parse every `.json` file in `dir`, in file-name order.
///
/// A missing directory is an empty collection. Per-file parse failures are
/// kept in [`ContentFile::parsed`] so callers decide how strict to be.
pub(crate) fn scan_collection<T: DeserializeOwned>(
    dir: &Path,
) -> Result<Vec<ContentFile<T>>, ContentError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| io_error(dir, e))? {
        let path = entry.map_err(|e| io_error(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    Ok(paths
        .into_iter()
        .map(|path| {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let parsed = read_json(&path);
            ContentFile { stem, parsed }
        })
        .collect())
}

/// Read a whole collection, failing on the first unreadable file.
pub(crate) fn read_collection<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>, ContentError> {
    scan_collection(dir)?
        .into_iter()
        .map(|file| file.parsed)
        .collect()
}

/// Read `<dir>/<slug>.json` if it exists.
pub(crate) fn read_entry<T: DeserializeOwned>(
    dir: &Path,
    slug: &str,
) -> Result<Option<T>, ContentError> {
    if !is_safe_slug(slug) {
        return Ok(None);
    }
    let path = dir.join(format!("{slug}.json"));
    if !path.is_file() {
        return Ok(None);
    }
    read_json(&path).map(Some)
}

/// Slugs are used as file names; anything that could leave the collection
/// directory never resolves.
pub(crate) fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && !slug.contains(['/', '\\', '\0'])
}

/// Degrade a failed collection read to an empty list.
pub(crate) fn or_warn<T>(collection: Collection, result: Result<Vec<T>, ContentError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(%collection, error = %e, "failed to read collection; serving empty list");
        Vec::new()
    })
}

/// Degrade a failed single-entry read to "not found".
pub(crate) fn entry_or_warn<T>(
    collection: Collection,
    slug: &str,
    result: Result<Option<T>, ContentError>,
) -> Option<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(%collection, slug, error = %e, "failed to read entry");
        None
    })
}

/// Display ordering for titles and names: case-insensitive, ties broken
/// by the raw string so the order is total.
pub(crate) fn display_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_slug_rejects_traversal() {
        assert!(is_safe_slug("home-decor"));
        assert!(!is_safe_slug(""));
        assert!(!is_safe_slug("../secrets"));
        assert!(!is_safe_slug("a/b"));
        assert!(!is_safe_slug("a\\b"));
        assert!(!is_safe_slug(".hidden"));
    }

    #[test]
    fn display_order_ignores_case() {
        let mut names = vec!["banana", "Apple", "cherry", "apple"];
        names.sort_by(|a, b| display_order(a, b));
        assert_eq!(names, vec!["Apple", "apple", "banana", "cherry"]);
    }

    #[test]
    fn missing_directory_is_empty_collection() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("does-not-exist");
        let items: Vec<serde_json::Value> = read_collection(&dir).expect("missing dir is ok");
        assert!(items.is_empty());
    }
}
