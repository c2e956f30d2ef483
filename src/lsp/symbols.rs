//! Document symbols derived from virtual regions.
//!
//! One symbol per region whose capability set includes structure, with ranges
//! re-projected from the region's mapping into host document coordinates.
//! This is the in-process consumer of the mapping table; per-language outline
//! detail inside a region belongs to the capability providers.

use tower_lsp::lsp_types::{DocumentSymbol, SymbolKind};

use crate::document::RsxDocumentState;
use crate::syntax::SectionKind;

fn symbol_kind(kind: SectionKind) -> SymbolKind {
    match kind {
        SectionKind::Logic => SymbolKind::FUNCTION,
        SectionKind::Markup => SymbolKind::MODULE,
        SectionKind::Style => SymbolKind::MODULE,
        SectionKind::Script => SymbolKind::MODULE,
    }
}

/// Produce one symbol per structure-capable virtual region.
pub fn document_symbols(state: &RsxDocumentState) -> Vec<DocumentSymbol> {
    state
        .regions
        .iter()
        .filter(|region| region.mapping.capabilities.structure)
        .map(|region| {
            let range = state.line_index.span_to_range(&region.mapping.host_range());
            #[allow(deprecated)]
            DocumentSymbol {
                name: region.kind.as_str().to_string(),
                detail: Some(region.language_id.to_string()),
                kind: symbol_kind(region.kind),
                tags: None,
                deprecated: None,
                range,
                selection_range: range,
                children: None,
            }
        })
        .collect()
}
