//! Document state management and text utilities.
//!
//! This module provides:
//! - `LineIndex` for efficient byte offset <-> LSP position conversion
//! - `VirtualBuffer`, `Mapping` and `VirtualRegion` for embedded sections
//! - `RsxDocumentState` and `DocumentStore` for document lifecycle management

mod buffer;
mod region;
mod state;
mod text;

pub use buffer::VirtualBuffer;
pub use region::{trim_section, Capabilities, Mapping, VirtualRegion};
pub use state::{DocumentStore, RsxDocumentState};
pub use text::LineIndex;
