//! Workspace root detection and source discovery.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::config::{Config, TEST_FILE_MARKERS};
use crate::error::GenerateError;

/// Nearest ancestor of `path` (or `path` itself when it is a directory)
/// holding a root marker.
pub fn find_workspace_root<S: AsRef<str>>(
    path: &Path,
    markers: &[S],
) -> Result<PathBuf, GenerateError> {
    let start = if path.is_dir() { Some(path) } else { path.parent() };

    start
        .into_iter()
        .flat_map(Path::ancestors)
        .find(|dir| markers.iter().any(|m| dir.join(m.as_ref()).exists()))
        .map(Path::to_path_buf)
        .ok_or_else(|| GenerateError::NoWorkspace(path.to_path_buf()))
}

/// Component sources under `dir`, sorted.
///
/// Honors `.gitignore`, skips hidden entries, existing tests, declaration
/// files and anything inside the workspace's tests directory.
pub fn collect_sources(
    dir: &Path,
    workspace_root: &Path,
    config: &Config,
) -> Result<Vec<PathBuf>, GenerateError> {
    if !dir.is_dir() {
        return Err(GenerateError::Walk {
            path: dir.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let tests_dir = workspace_root.join(&config.paths.tests_dir);
    let walker = WalkBuilder::new(dir).hidden(true).git_ignore(true).build();

    let mut sources = Vec::new();
    for entry in walker.flatten() {
        let path = entry.path();
        if !path.is_file() || path.starts_with(&tests_dir) {
            continue;
        }

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !config.scan.source_extensions.iter().any(|e| e == extension) {
            continue;
        }

        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if file_name.ends_with(".d.ts") || TEST_FILE_MARKERS.iter().any(|m| file_name.contains(m)) {
            continue;
        }

        sources.push(path.to_path_buf());
    }

    sources.sort();
    Ok(sources)
}
