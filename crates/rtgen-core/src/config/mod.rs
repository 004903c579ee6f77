//! Configuration management for rtgen.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `rtgen.toml` file
//! 3. User config `~/.config/rtgen/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Test and import path policy.
    pub paths: PathsConfig,

    /// Import scanning configuration.
    pub scan: ScanConfig,

    /// Generated template configuration.
    pub template: TemplateConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./rtgen.toml` (project local)
    /// 2. `~/.config/rtgen/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration for a workspace rooted at `root`.
    pub fn load_from(root: &Path) -> Result<Self, ConfigError> {
        let local = root.join(CONFIG_FILE_NAME);
        if local.exists() {
            return Self::from_file(&local);
        }

        Self::load_user()
    }

    /// Load the user-level configuration, ignoring any project file.
    ///
    /// Used before the workspace root is known, e.g. to read `root_markers`.
    pub fn load_user() -> Result<Self, ConfigError> {
        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// `<config_dir>/rtgen/config.toml`, when the platform has a config directory.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rtgen").join("config.toml"))
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("RTGEN_TESTS_DIR") {
            self.paths.tests_dir = dir;
        }
        if let Ok(prefix) = std::env::var("RTGEN_ALIAS_PREFIX") {
            self.paths.alias_prefix = prefix;
        }
        if let Ok(root) = std::env::var("RTGEN_SOURCE_ROOT") {
            self.paths.source_root = if root.is_empty() { None } else { Some(root) };
        }
    }

    /// Reject values that would produce unusable output paths.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.paths.tests_dir.trim().is_empty() {
            return Err(ConfigError::Invalid("paths.tests_dir must not be empty".into()));
        }
        if !self.paths.alias_prefix.ends_with('/') {
            return Err(ConfigError::Invalid(format!(
                "paths.alias_prefix must end with '/', got {:?}",
                self.paths.alias_prefix
            )));
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Path derivation policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory under the workspace root that mirrors the source tree.
    pub tests_dir: String,

    /// Alias marker used in generated import paths (must end with `/`).
    pub alias_prefix: String,

    /// Leading source directory dropped when mirroring paths (`None` keeps it).
    pub source_root: Option<String>,

    /// Files marking a workspace root.
    ///
    /// Only the user config and defaults are consulted, since the project
    /// file cannot be located before the root is known.
    pub root_markers: Vec<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            tests_dir: DEFAULT_TESTS_DIR.to_string(),
            alias_prefix: DEFAULT_ALIAS_PREFIX.to_string(),
            source_root: Some(DEFAULT_SOURCE_ROOT.to_string()),
            root_markers: to_strings(DEFAULT_ROOT_MARKERS),
        }
    }
}

impl PathsConfig {
    /// Root markers plus the project config file, which always marks a root.
    pub fn workspace_markers(&self) -> Vec<String> {
        let mut markers = self.root_markers.clone();
        if !markers.iter().any(|m| m == CONFIG_FILE_NAME) {
            markers.push(CONFIG_FILE_NAME.to_string());
        }
        markers
    }
}

/// Import scanning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Module paths that are never mocked (exact match).
    pub excluded_modules: Vec<String>,

    /// Module path prefixes that are never mocked.
    pub excluded_prefixes: Vec<String>,

    /// Extensions (without leading dot) that select the markup template.
    pub markup_extensions: Vec<String>,

    /// Extensions (without leading dot) picked up when walking directories.
    pub source_extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            excluded_modules: to_strings(DEFAULT_EXCLUDED_IMPORT_MODULES),
            excluded_prefixes: to_strings(DEFAULT_EXCLUDED_IMPORT_PREFIXES),
            markup_extensions: to_strings(DEFAULT_MARKUP_EXTENSIONS),
            source_extensions: to_strings(DEFAULT_SOURCE_EXTENSIONS),
        }
    }
}

impl ScanConfig {
    /// Whether a module path denotes test infrastructure.
    pub fn is_excluded(&self, module_path: &str) -> bool {
        self.excluded_modules.iter().any(|module| module == module_path)
            || self
                .excluded_prefixes
                .iter()
                .any(|prefix| module_path.starts_with(prefix.as_str()))
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Generated template configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// UI framework root module replaced by the compatibility shim.
    pub framework_module: String,

    /// Module the markup template imports rendering utilities from.
    pub render_module: String,

    /// Bindings imported from `render_module`.
    pub render_bindings: Vec<String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            framework_module: DEFAULT_FRAMEWORK_MODULE.to_string(),
            render_module: DEFAULT_RENDER_MODULE.to_string(),
            render_bindings: to_strings(DEFAULT_RENDER_BINDINGS),
        }
    }
}

impl TemplateConfig {
    /// Whether a module path receives the framework compatibility shim.
    ///
    /// Any path naming the framework module qualifies except the DOM renderer.
    pub fn is_framework_root(&self, module_path: &str) -> bool {
        module_path.contains(self.framework_module.as_str())
            && !module_path.contains(FRAMEWORK_EXCLUDED_MODULE)
    }
}
