//! Section locator for RSX composite documents.
//!
//! An `.rsx` file interleaves four sub-languages in one source file: a Rust
//! logic block fenced by `---` markers, plus `<template>`, `<style>` and
//! `<script>` tag blocks. This module locates the coarse, typed spans of
//! those sections in the raw text. It is a pure function over the text:
//! `parse(text)` returns the sections it could locate together with advisory
//! errors for constructs it could not, and never fails as a whole.
//!
//! Exact inner-content spans (delimiter stripping, leading-newline handling)
//! are the region trimmer's job, not the locator's.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// The kind of an RSX section. Closed set: adding a kind means extending
/// every `match` on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Rust logic block fenced by `---` markers.
    Logic,
    /// `<template>` markup block.
    Markup,
    /// `<style>` block.
    Style,
    /// `<script>` block.
    Script,
}

impl SectionKind {
    /// Stable name used in virtual region ids.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Logic => "logic",
            SectionKind::Markup => "markup",
            SectionKind::Style => "style",
            SectionKind::Script => "script",
        }
    }

    /// Language tag routed to the per-language tooling provider.
    pub fn language_id(self) -> &'static str {
        match self {
            SectionKind::Logic => "rust",
            SectionKind::Markup => "html",
            SectionKind::Style => "css",
            SectionKind::Script => "typescript",
        }
    }

    /// Opening/closing delimiter literals for tag-delimited kinds.
    /// The logic block uses paired `---` fences instead.
    pub fn delimiters(self) -> Option<(&'static str, &'static str)> {
        match self {
            SectionKind::Logic => None,
            SectionKind::Markup => Some(("<template>", "</template>")),
            SectionKind::Style => Some(("<style>", "</style>")),
            SectionKind::Script => Some(("<script>", "</script>")),
        }
    }

    fn all() -> [SectionKind; 4] {
        [
            SectionKind::Logic,
            SectionKind::Markup,
            SectionKind::Style,
            SectionKind::Script,
        ]
    }
}

/// The fence marker delimiting the logic block.
pub const FENCE: &str = "---";

/// A coarse, typed span of the composite source, in host byte offsets.
/// The span includes the delimiters themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub start: usize,
    pub end: usize,
}

/// An advisory syntax error reported by the locator.
///
/// Errors never abort parsing; sections that did parse are still returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub span: Range<usize>,
}

/// Result of locating sections in a document.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Sections ordered by start offset.
    pub sections: Vec<Section>,
    /// Advisory errors (unclosed blocks and the like).
    pub errors: Vec<SyntaxError>,
}

/// Locate all sections in `text`.
///
/// At most one section per kind is produced. A tag block with an opening tag
/// but no closing tag yields no section, only an error. An opening fence with
/// no closing fence yields a section spanning to end-of-text plus an error;
/// the trimmer drops such a section because the fence pair is incomplete.
pub fn parse(text: &str) -> ParseResult {
    let mut result = ParseResult::default();

    for kind in SectionKind::all() {
        match kind.delimiters() {
            Some((open, close)) => locate_tagged(text, kind, open, close, &mut result),
            None => locate_fenced(text, kind, &mut result),
        }
    }

    result.sections.sort_by_key(|s| s.start);
    result
}

fn locate_tagged(text: &str, kind: SectionKind, open: &str, close: &str, out: &mut ParseResult) {
    let Some(open_idx) = text.find(open) else {
        return;
    };

    // Last occurrence, so tag-like text inside the body never truncates the
    // coarse span early.
    let close_idx = text
        .rfind(close)
        .filter(|&i| i >= open_idx + open.len());

    match close_idx {
        Some(i) => out.sections.push(Section {
            kind,
            start: open_idx,
            end: i + close.len(),
        }),
        None => out.errors.push(SyntaxError {
            message: format!("unclosed {} section: missing {}", open, close),
            span: open_idx..text.len(),
        }),
    }
}

/// Fence markers only count at the start of a line.
static FENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^---").unwrap());

fn locate_fenced(text: &str, kind: SectionKind, out: &mut ParseResult) {
    let mut fences = FENCE_PATTERN.find_iter(text);
    let Some(first) = fences.next() else {
        return;
    };

    match fences.next() {
        Some(second) => out.sections.push(Section {
            kind,
            start: first.start(),
            end: second.end(),
        }),
        None => {
            // Emit the unclosed span anyway; the trimmer requires a complete
            // fence pair and drops it.
            out.sections.push(Section {
                kind,
                start: first.start(),
                end: text.len(),
            });
            out.errors.push(SyntaxError {
                message: format!("unclosed logic section: missing closing {FENCE}"),
                span: first.start()..text.len(),
            });
        }
    }
}
