//! Composite document state and lifecycle.
//!
//! An [`RsxDocumentState`] is one fully built decomposition of an `.rsx`
//! document: the snapshot, its virtual regions, the root mapping and the
//! locator's advisory errors. States are immutable once built; every text
//! change produces a complete replacement, never an in-place patch, so
//! readers can never observe a half-updated decomposition.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use dashmap::DashMap;
use tower_lsp::lsp_types::Url;

use crate::syntax::{self, SyntaxError};

use super::region::{Mapping, VirtualRegion};
use super::text::LineIndex;

/// State for a single `.rsx` document, rebuilt wholesale on every change.
#[derive(Debug, Clone)]
pub struct RsxDocumentState {
    /// The immutable host text this decomposition was derived from.
    pub snapshot: Arc<str>,
    /// Pre-computed line index over the host text.
    pub line_index: LineIndex,
    /// Virtual regions in section order. Regions whose delimiters were
    /// malformed are absent; that is a policy, not an error.
    pub regions: Vec<VirtualRegion>,
    /// Whole-document mapping with full capabilities.
    pub root_mapping: Mapping,
    /// Advisory errors from the section locator.
    pub errors: Vec<SyntaxError>,
    /// Document version from the client.
    pub version: i32,
}

impl RsxDocumentState {
    /// Run the full pipeline once: locate sections, trim each, emit a buffer
    /// and mapping per surviving region, and the root mapping over the whole
    /// text. Locator errors are carried as data and never abort the build.
    pub fn new(doc_id: &str, source: String, version: i32) -> Self {
        let snapshot: Arc<str> = source.into();
        let parsed = syntax::parse(&snapshot);

        let regions = parsed
            .sections
            .iter()
            .filter_map(|section| VirtualRegion::from_section(doc_id, &snapshot, section))
            .collect();

        Self {
            line_index: LineIndex::new(Arc::clone(&snapshot)),
            root_mapping: Mapping::root(snapshot.len()),
            snapshot,
            regions,
            errors: parsed.errors,
            version,
        }
    }

    /// Find the virtual region containing the given host offset.
    pub fn region_at_offset(&self, host_offset: usize) -> Option<&VirtualRegion> {
        self.regions
            .iter()
            .find(|r| r.mapping.contains_host_offset(host_offset))
    }
}

/// Thread-safe storage for open documents.
///
/// Each entry is an `Arc` to a fully built state; `open` swaps the entry
/// atomically once the replacement is complete.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Url, Arc<RsxDocumentState>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Open or update a document with the given source text.
    ///
    /// The new state is built completely before it replaces the previous one.
    /// If the rebuild panics, the previous successfully built state is kept
    /// and returned, so a transient failure never leaves a document with zero
    /// mappings.
    pub fn open(&self, uri: Url, source: String, version: i32) -> Arc<RsxDocumentState> {
        let doc_id = uri.to_string();
        self.open_with(uri, version, move || {
            RsxDocumentState::new(&doc_id, source, version)
        })
    }

    /// `open` with an arbitrary state builder; this is the seam the failure
    /// path is exercised through.
    fn open_with(
        &self,
        uri: Url,
        version: i32,
        build: impl FnOnce() -> RsxDocumentState,
    ) -> Arc<RsxDocumentState> {
        match catch_unwind(AssertUnwindSafe(build)) {
            Ok(state) => {
                let state = Arc::new(state);
                self.documents.insert(uri, Arc::clone(&state));
                state
            }
            Err(_) => {
                log::error!("rebuild failed for {uri}; keeping previous state");
                if let Some(prev) = self.documents.get(&uri) {
                    return Arc::clone(&prev);
                }
                // First build failed: fall back to an empty document so the
                // root mapping still exists.
                let empty = Arc::new(RsxDocumentState::new(uri.as_str(), String::new(), version));
                self.documents.insert(uri, Arc::clone(&empty));
                empty
            }
        }
    }

    /// Close a document.
    pub fn close(&self, uri: &Url) {
        self.documents.remove(uri);
    }

    /// Get a document's state.
    pub fn get(&self, uri: &Url) -> Option<Arc<RsxDocumentState>> {
        self.documents.get(uri).map(|r| Arc::clone(&r))
    }
}
