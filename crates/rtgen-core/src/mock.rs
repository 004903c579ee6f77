//! Mock declaration synthesis.
//!
//! Every scanned import becomes one `jest.mock(...)` factory. The factory
//! shape depends only on naming conventions of the imported bindings:
//!
//! | binding                 | field                                      |
//! |-------------------------|--------------------------------------------|
//! | `Capitalized` (default) | `default: (props) => <marker element>`     |
//! | `lowercase` (default)   | `default: jest.fn()`                       |
//! | `{ Capitalized }`       | `Capitalized: (props) => <marker element>` |
//! | `{ lowercase }`         | `lowercase: jest.fn()`                     |
//! | `* as ns`               | `ns: {}`                                   |
//!
//! The framework root module is special-cased with a fixed shim. Every factory
//! starts with the ES module interop marker.

use std::fmt;

use tracing::debug;

use crate::config::{TemplateConfig, INTEROP_MARKER_FIELD};
use crate::model::{ImportStatement, MockBody, MockDeclaration, MockField};
use crate::paths::PathDeriver;

/// Indentation used for factory fields.
const FIELD_INDENT: &str = "    ";

/// Fields of the framework root shim, after the interop marker.
const FRAMEWORK_SHIM_FIELDS: &[&str] = &[
    "default: jest.fn(() => null)",
    "useState: jest.fn((initial) => [initial, jest.fn()])",
    "useEffect: jest.fn()",
    "useLayoutEffect: jest.fn()",
    "useContext: jest.fn()",
    "useReducer: jest.fn((reducer, initial) => [initial, jest.fn()])",
    "useRef: jest.fn((initial = null) => ({ current: initial }))",
    "useMemo: jest.fn((factory) => factory())",
    "useCallback: jest.fn((callback) => callback)",
    "createElement: jest.fn()",
    "cloneElement: jest.fn()",
    "Fragment: ({ children }) => children",
];

/// Builds mock declarations for scanned imports.
#[derive(Debug, Clone, Default)]
pub struct MockSynthesizer {
    paths: PathDeriver,
    template: TemplateConfig,
}

impl MockSynthesizer {
    pub fn new(paths: PathDeriver, template: TemplateConfig) -> Self {
        Self { paths, template }
    }

    /// Mock for one import. Imports without bindings yield a marker-only mock.
    pub fn synthesize(&self, import: &ImportStatement) -> MockDeclaration {
        let module_path = if import.is_relative() {
            self.paths.derive_module_alias_path(&import.module_path)
        } else {
            import.module_path.clone()
        };

        if self.template.is_framework_root(&import.module_path) {
            debug!(module = %module_path, "using framework shim");
            return MockDeclaration {
                module_path,
                body: MockBody::FrameworkShim,
            };
        }

        let bindings = &import.bindings;
        let mut fields = Vec::new();

        if let Some(name) = &bindings.default {
            fields.push(binding_field("default", name));
        }
        for name in &bindings.named {
            fields.push(binding_field(name, name));
        }
        if let Some(name) = &bindings.namespace {
            fields.push(MockField::Namespace { key: name.clone() });
        }

        debug!(module = %module_path, fields = fields.len(), "synthesized mock");
        MockDeclaration {
            module_path,
            body: MockBody::Fields(fields),
        }
    }

    /// Mocks for every import, in scan order.
    pub fn synthesize_all(&self, imports: &[ImportStatement]) -> Vec<MockDeclaration> {
        imports.iter().map(|import| self.synthesize(import)).collect()
    }
}

/// Field for a value binding: component-like names render a marker, others are no-ops.
fn binding_field(key: &str, name: &str) -> MockField {
    if name.starts_with(|c: char| c.is_uppercase()) {
        MockField::Placeholder {
            key: key.to_string(),
            tag: name.to_lowercase(),
        }
    } else {
        MockField::NoOp {
            key: key.to_string(),
        }
    }
}

impl fmt::Display for MockField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MockField::Placeholder { key, tag } => write!(
                f,
                "{key}: (props) => jest.requireActual(\"react\").createElement(\"div\", {{ \"data-testid\": \"{tag}\" }}, JSON.stringify(props))"
            ),
            MockField::NoOp { key } => write!(f, "{key}: jest.fn()"),
            MockField::Namespace { key } => write!(f, "{key}: {{}}"),
        }
    }
}

impl fmt::Display for MockDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "jest.mock(\"{}\", () => ({{", self.module_path)?;
        writeln!(f, "{FIELD_INDENT}{INTEROP_MARKER_FIELD},")?;
        match &self.body {
            MockBody::FrameworkShim => {
                for field in FRAMEWORK_SHIM_FIELDS {
                    writeln!(f, "{FIELD_INDENT}{field},")?;
                }
            }
            MockBody::Fields(fields) => {
                for field in fields {
                    writeln!(f, "{FIELD_INDENT}{field},")?;
                }
            }
        }
        write!(f, "}}))")
    }
}
