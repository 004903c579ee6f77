//! Export style detection for the component under test.

use regex::Regex;
use tracing::debug;

use crate::model::{Classified, ComponentIdentity, ExportStyle};
use crate::patterns::{
    with_name, DEFAULT_EXPORT_PATTERN, EXPORT_BLOCK_PATTERN, NAMED_EXPORT_PATTERN,
};

/// Decide whether `identity` is the default export or a named export of `text`.
///
/// The default pattern wins when both match. When neither matches the result is
/// `Fallback(Default)`: the component may not be exported under that name at all.
pub fn classify(text: &str, identity: &ComponentIdentity) -> Classified<ExportStyle> {
    let name = identity.as_str();

    let style = if is_default_export(text, name) {
        Classified::Matched(ExportStyle::Default)
    } else if is_named_export(text, name) {
        Classified::Matched(ExportStyle::Named)
    } else {
        Classified::Fallback(ExportStyle::Default)
    };

    debug!(component = name, ?style, "classified export style");
    style
}

/// Export style used when the source text could not be read.
pub fn unreadable() -> Classified<ExportStyle> {
    Classified::Fallback(ExportStyle::Default)
}

fn is_default_export(text: &str, name: &str) -> bool {
    if matches_template(DEFAULT_EXPORT_PATTERN, text, name) {
        return true;
    }
    export_block_specifiers(text).any(|spec| match spec.split_once(" as ") {
        Some((local, exported)) => local.trim() == name && exported.trim() == "default",
        None => false,
    })
}

fn is_named_export(text: &str, name: &str) -> bool {
    if matches_template(NAMED_EXPORT_PATTERN, text, name) {
        return true;
    }
    export_block_specifiers(text).any(|spec| spec == name)
}

fn matches_template(template: &str, text: &str, name: &str) -> bool {
    match Regex::new(&with_name(template, name)) {
        Ok(re) => re.is_match(text),
        Err(_) => false,
    }
}

/// Every specifier of every `export { ... }` block, trimmed and whitespace-collapsed.
fn export_block_specifiers(text: &str) -> impl Iterator<Item = String> + '_ {
    let blocks: Vec<String> = match Regex::new(EXPORT_BLOCK_PATTERN) {
        Ok(re) => re
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect(),
        Err(_) => Vec::new(),
    };

    blocks.into_iter().flat_map(|block| {
        block
            .split(',')
            .map(|spec| spec.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|spec| !spec.is_empty())
            .collect::<Vec<_>>()
    })
}
