//! RSX mini-directive language lookup tables.
//!
//! This module provides:
//! - `SnippetDef`, a documentation-and-insertion record
//! - Static tables for directive snippets, section scaffolds and hover docs

mod snippet;
mod tables;

pub use snippet::SnippetDef;
pub use tables::{DIRECTIVES, HOVER_DOCS, SECTION_SNIPPETS};
