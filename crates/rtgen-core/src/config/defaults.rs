//! Default values for rtgen configuration.
//!
//! All hardcoded policy values are centralized here for easy maintenance.

// ============================================================================
// Path Defaults
// ============================================================================

/// Directory (relative to the workspace root) that receives generated tests.
pub const DEFAULT_TESTS_DIR: &str = "tests";

/// Project-wide import alias standing in for the source root.
pub const DEFAULT_ALIAS_PREFIX: &str = "@/";

/// Leading directory dropped when mirroring a source path under the tests directory.
pub const DEFAULT_SOURCE_ROOT: &str = "src";

/// Infix inserted before the extension of a generated test file.
pub const TEST_FILE_INFIX: &str = ".test";

/// Base names that follow the file-based routing convention.
pub const ROUTE_FILE_NAMES: &[&str] = &["page", "layout"];

/// Suffix appended to identities derived from routing files.
pub const ROUTE_IDENTITY_SUFFIX: &str = "Page";

/// Files whose presence marks a directory as a workspace root.
pub const DEFAULT_ROOT_MARKERS: &[&str] = &["package.json", "tsconfig.json", ".git"];

// ============================================================================
// Scan Defaults
// ============================================================================

/// Extensions that produce the markup (component) test template.
pub const DEFAULT_MARKUP_EXTENSIONS: &[&str] = &["tsx", "jsx"];

/// Extensions considered component sources when walking a directory.
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Module paths that denote test infrastructure and are never mocked.
pub const DEFAULT_EXCLUDED_IMPORT_MODULES: &[&str] = &["jest", "vitest"];

/// Module path prefixes that denote test infrastructure and are never mocked.
pub const DEFAULT_EXCLUDED_IMPORT_PREFIXES: &[&str] = &[
    "@testing-library/",
    "jest-",
    "jest/",
    "vitest/",
    "@jest/",
    "@vitest/",
];

/// File name fragments marking a file as a test rather than a source.
pub const TEST_FILE_MARKERS: &[&str] = &[".test.", ".spec."];

// ============================================================================
// Template Defaults
// ============================================================================

/// UI framework root module that receives the blanket compatibility shim.
pub const DEFAULT_FRAMEWORK_MODULE: &str = "react";

/// Module name that disqualifies a path from the compatibility shim.
pub const FRAMEWORK_EXCLUDED_MODULE: &str = "react-dom";

/// Module providing the rendering utilities in markup templates.
pub const DEFAULT_RENDER_MODULE: &str = "@testing-library/react";

/// Bindings imported from the rendering module.
pub const DEFAULT_RENDER_BINDINGS: &[&str] = &["render", "screen"];

/// Field marking a mock factory result as an ES module with a `default` slot.
pub const INTEROP_MARKER_FIELD: &str = "__esModule: true";

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "rtgen.toml";
