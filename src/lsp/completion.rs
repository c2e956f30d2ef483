//! Completion support for the RSX directive language.
//!
//! Two independent snippet sources: directive snippets after an opening `{{`
//! (optionally followed by one of `@`, `#`, `:`), and section scaffolds on an
//! empty line or a partial opening prefix. Both are plain table lookups over
//! the host text; embedded-language completion is the capability providers'
//! business, not this module's.

use tower_lsp::lsp_types::*;

use crate::directives::{SnippetDef, DIRECTIVES, SECTION_SNIPPETS};
use crate::document::RsxDocumentState;

/// What kind of completion the cursor position calls for.
#[derive(Debug, PartialEq, Eq)]
enum CompletionContext {
    /// Cursor follows `{{`, or `{{` plus one directive sigil.
    Directive,
    /// Line up to the cursor is empty or a partial section-opening prefix.
    SectionScaffold,
    None,
}

/// Detect the completion context by scanning backwards from the cursor.
fn detect_context(source: &str, offset: usize) -> CompletionContext {
    let before = &source[..offset];

    if before.ends_with("{{") {
        return CompletionContext::Directive;
    }
    if let Some(last) = before.chars().last() {
        if matches!(last, '@' | '#' | ':') && before[..before.len() - last.len_utf8()].ends_with("{{")
        {
            return CompletionContext::Directive;
        }
    }

    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line = before[line_start..].trim();
    if matches!(line, "" | "<" | "-" | "--") {
        return CompletionContext::SectionScaffold;
    }

    CompletionContext::None
}

fn to_item(snippet: &SnippetDef) -> CompletionItem {
    CompletionItem {
        label: snippet.label.to_string(),
        kind: Some(CompletionItemKind::SNIPPET),
        detail: Some(snippet.detail.to_string()),
        insert_text: Some(snippet.insert_text.to_string()),
        insert_text_format: Some(InsertTextFormat::SNIPPET),
        documentation: Some(Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value: snippet.documentation.to_string(),
        })),
        ..Default::default()
    }
}

/// Generate completions at a position in an RSX document.
pub fn completion_at_position(
    state: &RsxDocumentState,
    position: Position,
) -> Option<CompletionResponse> {
    let offset = state.line_index.position_to_offset(position)?;

    let items: Vec<CompletionItem> = match detect_context(&state.snapshot, offset) {
        CompletionContext::Directive => DIRECTIVES.iter().map(to_item).collect(),
        CompletionContext::SectionScaffold => SECTION_SNIPPETS.iter().map(to_item).collect(),
        CompletionContext::None => Vec::new(),
    };

    if items.is_empty() {
        None
    } else {
        Some(CompletionResponse::Array(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_completions(source: &str, position: Position) -> Vec<CompletionItem> {
        let state = RsxDocumentState::new("file:///t.rsx", source.to_string(), 0);
        match completion_at_position(&state, position) {
            Some(CompletionResponse::Array(items)) => items,
            _ => vec![],
        }
    }

    fn labels(items: &[CompletionItem]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn open_double_brace_offers_directives() {
        let items = get_completions("<template>\n{{", Position::new(1, 2));
        let names = labels(&items);
        assert!(names.contains(&"{{@if}}"), "got: {:?}", names);
        assert!(names.contains(&"{{@each}}"), "got: {:?}", names);
        assert!(names.contains(&"{{}}"), "got: {:?}", names);
    }

    #[test]
    fn sigil_after_double_brace_offers_directives() {
        for text in ["{{@", "{{#", "{{:"] {
            let items = get_completions(text, Position::new(0, 3));
            assert!(
                labels(&items).contains(&"{{@if}}"),
                "no directives after {text:?}"
            );
        }
    }

    #[test]
    fn sigil_without_double_brace_offers_nothing() {
        let items = get_completions("hello @", Position::new(0, 7));
        assert!(items.is_empty());
    }

    #[test]
    fn empty_line_offers_section_scaffolds() {
        let items = get_completions("", Position::new(0, 0));
        let names = labels(&items);
        assert_eq!(names, vec!["---", "<script>", "<template>", "<style>"]);
    }

    #[test]
    fn partial_prefixes_offer_section_scaffolds() {
        for (text, col) in [("<", 1), ("-", 1), ("--", 2)] {
            let items = get_completions(text, Position::new(0, col));
            assert!(
                labels(&items).contains(&"<template>"),
                "no scaffolds after {text:?}"
            );
        }
    }

    #[test]
    fn mid_word_offers_nothing() {
        let items = get_completions("some prose here", Position::new(0, 9));
        assert!(items.is_empty());
    }

    #[test]
    fn directive_items_are_snippets() {
        let items = get_completions("{{", Position::new(0, 2));
        let item = items.iter().find(|i| i.label == "{{@if}}").unwrap();
        assert_eq!(item.kind, Some(CompletionItemKind::SNIPPET));
        assert_eq!(item.insert_text_format, Some(InsertTextFormat::SNIPPET));
        assert!(item.insert_text.as_ref().unwrap().contains("${1:condition}"));
    }

    #[test]
    fn detect_context_directive_beats_empty_line() {
        // "{{" alone on a line: directive context, not a scaffold
        assert_eq!(detect_context("{{", 2), CompletionContext::Directive);
    }
}
