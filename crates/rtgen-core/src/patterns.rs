//! Regex patterns for import and export recognition.
//!
//! Patterns containing `{name}` are templates: the placeholder is replaced with
//! the escaped component identity before compiling.

/// Top-level import with bindings: `import <bindings> from '<path>'`.
///
/// Bindings may span lines (multi-line brace lists) but never contain quotes
/// or semicolons, so side-effect imports cannot swallow the next statement.
pub const IMPORT_PATTERN: &str = r#"(?m)^import\s+([^;'"]+?)\s+from\s+['"]([^'"]+)['"][ \t]*;?"#;

/// `export default Foo`, `export default function Foo`, `export default class Foo`.
pub const DEFAULT_EXPORT_PATTERN: &str =
    r"(?m)\bexport\s+default\s+(?:async\s+)?(?:function\s*\*?\s*|class\s+)?{name}\b";

/// `export const|let|var|function|class Foo`.
pub const NAMED_EXPORT_PATTERN: &str =
    r"(?m)\bexport\s+(?:(?:const|let|var|class)\s+|(?:async\s+)?function\s*\*?\s*){name}\b";

/// Re-export block `export { ... }`, capturing the specifier list.
///
/// `export type { ... }` does not match: type-only exports have no runtime value.
pub const EXPORT_BLOCK_PATTERN: &str = r"\bexport\s*\{([^}]*)\}";

/// Module path of a generated `jest.mock("<path>", ...)` declaration.
pub const MOCK_CALL_PATTERN: &str = r#"(?m)^jest\.mock\(\s*['"]([^'"]+)['"]"#;

/// Keyword marking a type-only import or specifier.
pub const TYPE_KEYWORD: &str = "type";

/// Fill a `{name}` template with an escaped identifier.
pub fn with_name(template: &str, name: &str) -> String {
    template.replace("{name}", &regex::escape(name))
}
