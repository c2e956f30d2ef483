//! LSP protocol feature implementations.
//!
//! This module provides implementations for LSP features:
//! - Diagnostics conversion from section locator errors
//! - Directive and section-snippet completion
//! - Hover documentation for RSX delimiters and directives
//! - Document symbols derived from virtual regions

mod completion;
mod diagnostics;
mod hover;
mod symbols;

pub use completion::completion_at_position;
pub use diagnostics::to_diagnostics;
pub use hover::hover_at_position;
pub use symbols::document_symbols;
