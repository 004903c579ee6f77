//! Path derivation: test destinations, component identities and import aliases.

use std::path::{Component, Path, PathBuf};

use crate::config::{PathsConfig, ROUTE_FILE_NAMES, ROUTE_IDENTITY_SUFFIX, TEST_FILE_INFIX};
use crate::error::GenerateError;
use crate::model::ComponentIdentity;

/// Maps original component locations to test locations and import paths.
#[derive(Debug, Clone)]
pub struct PathDeriver {
    tests_dir: PathBuf,
    alias_prefix: String,
    source_root: Option<PathBuf>,
}

impl Default for PathDeriver {
    fn default() -> Self {
        Self::new(&PathsConfig::default())
    }
}

impl PathDeriver {
    pub fn new(config: &PathsConfig) -> Self {
        Self {
            tests_dir: PathBuf::from(&config.tests_dir),
            alias_prefix: config.alias_prefix.clone(),
            source_root: config.source_root.as_ref().map(PathBuf::from),
        }
    }

    /// Returns `original_path` relative to `workspace_root`.
    ///
    /// Fails when the file does not lie under the root, including paths that
    /// escape it through `..` segments.
    pub fn relative_path<'a>(
        &self,
        workspace_root: &Path,
        original_path: &'a Path,
    ) -> Result<&'a Path, GenerateError> {
        let outside = || GenerateError::OutsideWorkspace {
            path: original_path.to_path_buf(),
            root: workspace_root.to_path_buf(),
        };

        let relative = original_path.strip_prefix(workspace_root).map_err(|_| outside())?;
        if relative.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(outside());
        }
        if relative.file_stem().is_none() {
            return Err(GenerateError::NotAFile(original_path.to_path_buf()));
        }
        Ok(relative)
    }

    /// Computes `<root>/<tests_dir>/<relative dir>/<name>.test<ext>`.
    pub fn derive_test_path(
        &self,
        workspace_root: &Path,
        original_path: &Path,
    ) -> Result<PathBuf, GenerateError> {
        let relative = self.relative_path(workspace_root, original_path)?;
        let mirrored = self.strip_source_root(relative);

        let stem = relative
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let file_name = match relative.extension() {
            Some(ext) => format!("{}{}.{}", stem, TEST_FILE_INFIX, ext.to_string_lossy()),
            None => format!("{}{}", stem, TEST_FILE_INFIX),
        };

        let mut test_path = workspace_root.join(&self.tests_dir);
        if let Some(dir) = mirrored.parent().filter(|d| !d.as_os_str().is_empty()) {
            test_path.push(dir);
        }
        test_path.push(file_name);
        Ok(test_path)
    }

    /// Rewrites a relative module specifier to the project alias form.
    ///
    /// `../../components/ui` and `./components/ui` both become `@/components/ui`.
    pub fn derive_module_alias_path(&self, relative_path: &str) -> String {
        let normalized = relative_path.replace('\\', "/");
        let mut rest = normalized.as_str();

        if rest.starts_with("../") {
            while let Some(stripped) = rest.strip_prefix("../") {
                rest = stripped;
            }
        } else if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        }

        format!("{}{}", self.alias_prefix, rest)
    }

    /// Import path of the component itself, e.g. `src/components/Card.tsx` -> `@/components/Card`.
    pub fn derive_component_import_path(&self, relative_path: &Path) -> String {
        let without_ext = self.strip_source_root(relative_path).with_extension("");
        let joined = without_ext
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().to_string()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");
        self.derive_module_alias_path(&joined)
    }

    fn strip_source_root<'a>(&self, relative: &'a Path) -> &'a Path {
        match &self.source_root {
            Some(root) => relative.strip_prefix(root).unwrap_or(relative),
            None => relative,
        }
    }
}

/// Derives the identifier the test refers to the component by.
///
/// Routing files (`page`, `layout`) take their parent directory's name plus `Page`.
pub fn derive_component_identity(original_path: &Path) -> ComponentIdentity {
    let stem = original_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    if ROUTE_FILE_NAMES.contains(&stem) {
        let dir = original_path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
            .unwrap_or("");
        return ComponentIdentity::new(format!("{}{}", capitalize(dir), ROUTE_IDENTITY_SUFFIX));
    }

    ComponentIdentity::new(capitalize(stem))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
