//! Top-level import extraction.

use regex::Regex;
use tracing::debug;

use crate::config::ScanConfig;
use crate::model::{Bindings, ImportStatement};
use crate::patterns::{IMPORT_PATTERN, MOCK_CALL_PATTERN, TYPE_KEYWORD};

/// Extracts mock-eligible import statements from source text.
#[derive(Debug, Clone, Default)]
pub struct ImportScanner {
    config: ScanConfig,
}

impl ImportScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Recognized imports in source order.
    ///
    /// Test-infrastructure modules and type-only imports are left out.
    /// Repeated imports of one module are kept as separate statements.
    pub fn scan(&self, text: &str) -> Vec<ImportStatement> {
        let re = match Regex::new(IMPORT_PATTERN) {
            Ok(r) => r,
            Err(_) => return Vec::new(),
        };

        let mut imports = Vec::new();
        for cap in re.captures_iter(text) {
            let (Some(raw), Some(clause), Some(module)) = (cap.get(0), cap.get(1), cap.get(2))
            else {
                continue;
            };
            let module_path = module.as_str();

            if self.config.is_excluded(module_path) {
                debug!(module = module_path, "skipping test infrastructure import");
                continue;
            }

            let Some(bindings) = parse_bindings(clause.as_str()) else {
                debug!(module = module_path, "skipping type-only import");
                continue;
            };

            imports.push(ImportStatement {
                raw: raw.as_str().trim_end().to_string(),
                module_path: module_path.to_string(),
                bindings,
            });
        }

        imports
    }
}

/// Parse the binding clause between `import` and `from`.
///
/// Returns `None` for `import type ...`, which has no runtime bindings.
pub fn parse_bindings(clause: &str) -> Option<Bindings> {
    let clause = clause.trim();
    if let Some(rest) = clause.strip_prefix(TYPE_KEYWORD) {
        if rest.starts_with(char::is_whitespace) || rest.starts_with('{') {
            return None;
        }
    }

    let mut bindings = Bindings::default();
    let mut remainder = clause.to_string();

    if let Some(open) = clause.find('{') {
        let close = clause[open..].find('}').map(|i| open + i).unwrap_or(clause.len());
        let inner = &clause[open + 1..close];
        bindings.named = inner.split(',').filter_map(named_specifier).collect();

        remainder = format!("{}{}", &clause[..open], clause.get(close + 1..).unwrap_or(""));
    }

    for part in remainder.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if let Some(star) = part.strip_prefix('*') {
            let name = star.trim().strip_prefix("as").map(str::trim).unwrap_or("");
            if is_identifier(name) {
                bindings.namespace = Some(name.to_string());
            }
        } else if is_identifier(part) {
            bindings.default = Some(part.to_string());
        }
    }

    Some(bindings)
}

/// Exported name of one `{ ... }` specifier, dropping any `as` alias.
fn named_specifier(spec: &str) -> Option<String> {
    let mut words = spec.split_whitespace();
    let mut name = words.next()?;
    if name == TYPE_KEYWORD {
        // `{ type Props }` is type-only; `{ type }` and `{ type as t }` bind a value.
        match words.next() {
            Some("as") | None => {}
            Some(_) => return None,
        }
        name = TYPE_KEYWORD;
    }
    is_identifier(name).then(|| name.to_string())
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Module paths of the `jest.mock(...)` declarations in generated test text.
pub fn mocked_modules(text: &str) -> Vec<String> {
    match Regex::new(MOCK_CALL_PATTERN) {
        Ok(re) => re
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect(),
        Err(_) => Vec::new(),
    }
}
