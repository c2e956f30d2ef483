//! Hover information for RSX delimiters and directives.
//!
//! Lookup is a literal-substring scan inside a fixed-width window around the
//! cursor; the first matching table key wins. No ranking, no parsing.

use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position};

use crate::directives::HOVER_DOCS;
use crate::document::RsxDocumentState;

/// Bytes of context inspected on each side of the cursor.
const WINDOW: usize = 30;

/// Snap a byte offset down to the nearest character boundary.
fn floor_boundary(text: &str, mut offset: usize) -> usize {
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Get hover information for a position in the document.
pub fn hover_at_position(state: &RsxDocumentState, position: Position) -> Option<Hover> {
    let offset = state.line_index.position_to_offset(position)?;
    let text = &state.snapshot;

    let start = floor_boundary(text, offset.saturating_sub(WINDOW));
    let end = floor_boundary(text, (offset + WINDOW).min(text.len()));
    let window = &text[start..end];

    let (_, doc) = HOVER_DOCS.iter().find(|(key, _)| window.contains(key))?;

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: (*doc).to_string(),
        }),
        range: None,
    })
}
