//! Data types shared by the generation pipeline.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Location of a component file inside its workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Workspace root directory.
    pub workspace_root: PathBuf,
    /// Absolute path to the original component file.
    pub original_path: PathBuf,
}

impl SourceLocation {
    pub fn new(workspace_root: impl Into<PathBuf>, original_path: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            original_path: original_path.into(),
        }
    }
}

/// Name the generated test refers to the component by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentIdentity(String);

impl ComponentIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the component is exported from its module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStyle {
    #[default]
    Default,
    Named,
}

/// Which test template a source file receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Files that can contain markup (`.tsx`, `.jsx`).
    Markup,
    /// Plain modules.
    Plain,
}

impl FileKind {
    /// Classify a path by extension against the markup extension list.
    pub fn from_path<S: AsRef<str>>(path: &Path, markup_extensions: &[S]) -> Self {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if markup_extensions.iter().any(|m| m.as_ref() == ext) {
            FileKind::Markup
        } else {
            FileKind::Plain
        }
    }
}

/// A value tagged with whether it was detected or substituted as a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "lowercase")]
pub enum Classified<T> {
    /// The value was positively detected in the source.
    Matched(T),
    /// Nothing matched (or the source was unreadable); the value is a default.
    Fallback(T),
}

impl<T> Classified<T> {
    pub fn value(&self) -> &T {
        match self {
            Classified::Matched(v) | Classified::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Classified::Fallback(_))
    }
}

/// Bindings introduced by one import statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    /// `import Foo from ...`
    pub default: Option<String>,
    /// `import { a, b as c } from ...`, holding the exported names (`a`, `b`).
    pub named: Vec<String>,
    /// `import * as ns from ...`
    pub namespace: Option<String>,
}

/// One recognized import statement from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    /// Statement text as it appears in the source.
    pub raw: String,
    /// Module specifier between the quotes.
    pub module_path: String,
    pub bindings: Bindings,
}

impl ImportStatement {
    /// Whether the module path is relative to the importing file.
    pub fn is_relative(&self) -> bool {
        self.module_path.starts_with("./") || self.module_path.starts_with("../")
    }
}

/// Shape of a single field in a mock factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockField {
    /// Component stand-in rendering a marker element tagged `tag`.
    Placeholder { key: String, tag: String },
    /// No-op callable.
    NoOp { key: String },
    /// Empty object standing in for a namespace.
    Namespace { key: String },
}

impl MockField {
    pub fn key(&self) -> &str {
        match self {
            MockField::Placeholder { key, .. }
            | MockField::NoOp { key }
            | MockField::Namespace { key } => key,
        }
    }
}

/// Body of a generated mock declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockBody {
    /// Blanket stand-in for the UI framework root module.
    FrameworkShim,
    /// One field per imported binding, in import order.
    Fields(Vec<MockField>),
}

/// Generated mock for one import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockDeclaration {
    /// Module path the mock replaces, alias-rewritten when it was relative.
    pub module_path: String,
    pub body: MockBody,
}

impl MockDeclaration {
    pub fn fields(&self) -> &[MockField] {
        match &self.body {
            MockBody::Fields(fields) => fields,
            MockBody::FrameworkShim => &[],
        }
    }

    pub fn field(&self, key: &str) -> Option<&MockField> {
        self.fields().iter().find(|f| f.key() == key)
    }
}
