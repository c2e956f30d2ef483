//! Diagnostics conversion from section locator errors to LSP diagnostics.
//!
//! Locator errors are advisory: they describe sections the locator could not
//! complete (unclosed tags, missing fence pairs) and never block the regions
//! that did parse. They are published with Warning severity so the document
//! stays usable while being edited.

use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity};

use crate::document::RsxDocumentState;

/// Convert a document's locator errors to LSP diagnostics.
pub fn to_diagnostics(state: &RsxDocumentState) -> Vec<Diagnostic> {
    state
        .errors
        .iter()
        .map(|error| Diagnostic {
            range: state.line_index.span_to_range(&error.span),
            severity: Some(DiagnosticSeverity::WARNING),
            code: None,
            code_description: None,
            source: Some("rsx".to_string()),
            message: error.message.clone(),
            related_information: None,
            tags: None,
            data: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagnostics_for(source: &str) -> Vec<Diagnostic> {
        let state = RsxDocumentState::new("file:///t.rsx", source.to_string(), 0);
        to_diagnostics(&state)
    }

    #[test]
    fn well_formed_document_has_no_diagnostics() {
        let diags = diagnostics_for("<template>\n<p/>\n</template>\n");
        assert!(diags.is_empty());
    }

    #[test]
    fn unclosed_script_reports_warning() {
        let diags = diagnostics_for("<script>\nlet x = 1;\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Some(DiagnosticSeverity::WARNING));
        assert_eq!(diags[0].source, Some("rsx".to_string()));
        assert!(diags[0].message.contains("<script>"));
        assert_eq!(diags[0].range.start.line, 0);
    }

    #[test]
    fn unclosed_fence_reports_warning_but_document_builds() {
        let state = RsxDocumentState::new("file:///t.rsx", "---\nbody".to_string(), 0);
        let diags = to_diagnostics(&state);
        assert_eq!(diags.len(), 1);
        assert!(state.regions.is_empty());
        assert_eq!(state.root_mapping.length, 8);
    }
}
