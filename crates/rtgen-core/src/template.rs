//! Test file assembly.

use crate::config::TemplateConfig;
use crate::model::{ComponentIdentity, ExportStyle, FileKind, MockDeclaration};

/// Test cases of the markup suite; each renders the component.
pub const MARKUP_CASES: &[&str] = &[
    "renders without crashing",
    "renders expected content",
    "handles user interactions",
];

/// Name of the defined-check case of the plain suite.
pub const PLAIN_DEFINED_CASE: &str = "should be defined";

/// Placeholder cases of the plain suite, left with empty bodies.
pub const PLAIN_PLACEHOLDER_CASES: &[&str] = &["should work correctly", "should handle edge cases"];

/// Combines analysis results into the final test file text.
#[derive(Debug, Clone, Default)]
pub struct TemplateAssembler {
    config: TemplateConfig,
}

impl TemplateAssembler {
    pub fn new(config: TemplateConfig) -> Self {
        Self { config }
    }

    /// Render the test file.
    ///
    /// Layout: mock declarations, a blank line (only when there are mocks), the
    /// rendering utility import (markup only), the component import, a blank
    /// line and the three-case suite.
    pub fn assemble(
        &self,
        identity: &ComponentIdentity,
        export_style: ExportStyle,
        kind: FileKind,
        import_path: &str,
        mocks: &[MockDeclaration],
    ) -> String {
        let mut out = String::new();

        for mock in mocks {
            out.push_str(&mock.to_string());
            out.push('\n');
        }
        if !mocks.is_empty() {
            out.push('\n');
        }

        if kind == FileKind::Markup {
            out.push_str(&format!(
                "import {{ {} }} from \"{}\"\n",
                self.config.render_bindings.join(", "),
                self.config.render_module
            ));
        }
        out.push_str(&component_import(identity, export_style, import_path));
        out.push('\n');
        out.push('\n');

        match kind {
            FileKind::Markup => out.push_str(&markup_suite(identity)),
            FileKind::Plain => out.push_str(&plain_suite(identity)),
        }
        out
    }
}

/// `import X from "path"` or `import { X } from "path"`.
pub fn component_import(
    identity: &ComponentIdentity,
    style: ExportStyle,
    import_path: &str,
) -> String {
    match style {
        ExportStyle::Default => format!("import {identity} from \"{import_path}\""),
        ExportStyle::Named => format!("import {{ {identity} }} from \"{import_path}\""),
    }
}

fn markup_suite(identity: &ComponentIdentity) -> String {
    let cases: Vec<String> = MARKUP_CASES
        .iter()
        .map(|case| format!("    it(\"{case}\", () => {{\n        render(<{identity} />)\n    }})\n"))
        .collect();
    format!("describe(\"{identity}\", () => {{\n{}}})\n", cases.join("\n"))
}

fn plain_suite(identity: &ComponentIdentity) -> String {
    let mut cases = vec![format!(
        "    it(\"{PLAIN_DEFINED_CASE}\", () => {{\n        expect({identity}).toBeDefined()\n    }})\n"
    )];
    cases.extend(
        PLAIN_PLACEHOLDER_CASES
            .iter()
            .map(|case| format!("    it(\"{case}\", () => {{}})\n")),
    );
    format!("describe(\"{identity}\", () => {{\n{}}})\n", cases.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MockBody, MockField};

    #[test]
    fn test_markup_template_without_mocks() {
        let text = TemplateAssembler::default().assemble(
            &ComponentIdentity::new("Card"),
            ExportStyle::Default,
            FileKind::Markup,
            "@/components/Card",
            &[],
        );

        let expected = r#"import { render, screen } from "@testing-library/react"
import Card from "@/components/Card"

describe("Card", () => {
    it("renders without crashing", () => {
        render(<Card />)
    })

    it("renders expected content", () => {
        render(<Card />)
    })

    it("handles user interactions", () => {
        render(<Card />)
    })
})
"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn test_plain_template_named_export() {
        let text = TemplateAssembler::default().assemble(
            &ComponentIdentity::new("Utils"),
            ExportStyle::Named,
            FileKind::Plain,
            "@/lib/utils",
            &[],
        );

        let expected = r#"import { Utils } from "@/lib/utils"

describe("Utils", () => {
    it("should be defined", () => {
        expect(Utils).toBeDefined()
    })

    it("should work correctly", () => {})

    it("should handle edge cases", () => {})
})
"#;
        assert_eq!(text, expected);
        assert!(!text.contains("@testing-library"));
    }

    #[test]
    fn test_mocks_precede_imports_with_blank_line() {
        let mocks = vec![
            MockDeclaration {
                module_path: "@/lib/a".into(),
                body: MockBody::Fields(vec![MockField::NoOp { key: "a".into() }]),
            },
            MockDeclaration {
                module_path: "@/lib/b".into(),
                body: MockBody::Fields(vec![]),
            },
        ];
        let text = TemplateAssembler::default().assemble(
            &ComponentIdentity::new("Card"),
            ExportStyle::Default,
            FileKind::Markup,
            "@/Card",
            &mocks,
        );

        assert!(text.starts_with("jest.mock(\"@/lib/a\""));
        assert!(text.contains("}))\njest.mock(\"@/lib/b\""));
        assert!(text.contains("}))\n\nimport { render, screen }"));
    }
}
