//! Snippet definition type for the RSX mini-directive language.
//!
//! These are documentation-and-insertion records only; the directive language
//! itself is expanded by the RSX compiler, not by this server.

/// Definition of an RSX snippet with documentation.
#[derive(Debug, Clone)]
pub struct SnippetDef {
    /// Completion label (e.g., "{{@if}}")
    pub label: &'static str,
    /// Short one-line detail shown next to the label
    pub detail: &'static str,
    /// Snippet body with LSP tab-stop placeholders
    pub insert_text: &'static str,
    /// Markdown documentation
    pub documentation: &'static str,
}
