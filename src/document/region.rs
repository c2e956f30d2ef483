//! Virtual regions and offset mapping for embedded sections.
//!
//! This is the heart of the virtualization engine: it narrows a coarse
//! [`Section`] to its exact inner-content span (delimiter stripping), carves
//! out a [`VirtualBuffer`] over that span, and records the single contiguous
//! [`Mapping`] that translates between the buffer's local coordinates and
//! host document coordinates, annotated with the tooling capabilities that
//! apply to the region's language.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::syntax::{Section, SectionKind, FENCE};

use super::buffer::VirtualBuffer;

/// Named tooling feature flags attached to a mapping.
///
/// These describe which tooling requests are legitimately forwardable to the
/// region's language provider; they are a policy, not a promise that the
/// provider supports the feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub verification: bool,
    pub completion: bool,
    pub semantic: bool,
    pub navigation: bool,
    pub structure: bool,
    pub format: bool,
}

impl Capabilities {
    pub const fn full() -> Self {
        Self {
            verification: true,
            completion: true,
            semantic: true,
            navigation: true,
            structure: true,
            format: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            verification: false,
            completion: false,
            semantic: false,
            navigation: false,
            structure: false,
            format: false,
        }
    }

    /// Capability policy per section kind.
    ///
    /// Script and style regions are fed to full-featured providers. Markup
    /// tooling does not verify or type-check a fragment, so those flags stay
    /// off. The embedded Rust body is a partial program: it keeps semantic
    /// features but is never reformatted by this tool.
    pub fn for_kind(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Script | SectionKind::Style => Self::full(),
            SectionKind::Markup => Self {
                completion: true,
                navigation: true,
                structure: true,
                format: true,
                ..Self::none()
            },
            SectionKind::Logic => Self {
                format: false,
                ..Self::full()
            },
        }
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.verification, "verification"),
            (self.completion, "completion"),
            (self.semantic, "semantic"),
            (self.navigation, "navigation"),
            (self.structure, "structure"),
            (self.format, "format"),
        ];
        let mut first = true;
        for (enabled, name) in flags {
            if enabled {
                if !first {
                    f.write_str("+")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

/// One contiguous range pair translating between host document offsets and
/// a virtual buffer's local offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    /// Host offset where the mapped range starts.
    pub source_offset: usize,
    /// Local offset where the mapped range starts (always 0 for regions).
    pub generated_offset: usize,
    /// Length of the mapped range in bytes.
    pub length: usize,
    pub capabilities: Capabilities,
}

impl Mapping {
    pub fn new(source_offset: usize, length: usize, capabilities: Capabilities) -> Self {
        Self {
            source_offset,
            generated_offset: 0,
            length,
            capabilities,
        }
    }

    /// The whole-document mapping with full capabilities. This keeps text
    /// outside any recognized section addressable by generic tooling.
    pub fn root(length: usize) -> Self {
        Self::new(0, length, Capabilities::full())
    }

    /// Translate a local offset to a host offset.
    pub fn to_host(&self, local: usize) -> usize {
        self.source_offset + (local - self.generated_offset)
    }

    /// Translate a local span to a host span.
    pub fn span_to_host(&self, span: &Range<usize>) -> Range<usize> {
        self.to_host(span.start)..self.to_host(span.end)
    }

    /// Translate a host offset into this mapping's local space, if covered.
    pub fn to_local(&self, host: usize) -> Option<usize> {
        self.contains_host_offset(host)
            .then(|| self.generated_offset + (host - self.source_offset))
    }

    /// Whether a host offset falls inside the mapped range.
    ///
    /// The end bound is inclusive so that a cursor sitting at the very end of
    /// the region (right before its closing delimiter) still counts as inside.
    pub fn contains_host_offset(&self, host: usize) -> bool {
        host >= self.source_offset && host <= self.source_offset + self.length
    }

    /// The host range covered by this mapping.
    pub fn host_range(&self) -> Range<usize> {
        self.source_offset..self.source_offset + self.length
    }
}

/// An independently addressable text view over one trimmed section, exposed
/// to per-language tooling.
#[derive(Debug, Clone)]
pub struct VirtualRegion {
    /// Deterministic id: document identity plus section kind, stable across
    /// rebuilds of the same document.
    pub id: String,
    pub kind: SectionKind,
    /// Language tag routed to the capability provider.
    pub language_id: &'static str,
    pub buffer: VirtualBuffer,
    pub mapping: Mapping,
}

impl VirtualRegion {
    /// Build the region for one located section, or None when the section's
    /// delimiters do not enclose any content.
    pub fn from_section(doc_id: &str, snapshot: &Arc<str>, section: &Section) -> Option<Self> {
        let content = trim_section(snapshot, section)?;
        let length = content.end - content.start;
        Some(Self {
            id: format!("{}_{}_section", doc_id, section.kind.as_str()),
            kind: section.kind,
            language_id: section.kind.language_id(),
            buffer: VirtualBuffer::new(Arc::clone(snapshot), content.clone()),
            mapping: Mapping::new(content.start, length, Capabilities::for_kind(section.kind)),
        })
    }
}

/// Narrow a coarse section to its exact inner-content span.
///
/// Returns None when the region must be dropped: missing fence pair, or a
/// content span that is empty or inverted. Dropping is the only failure mode;
/// trimming never panics and never yields a negative-length span.
pub fn trim_section(text: &str, section: &Section) -> Option<Range<usize>> {
    let span = text.get(section.start..section.end)?;
    match section.kind.delimiters() {
        Some((open, close)) => trim_tagged(text, section, span, open, close),
        None => trim_fenced(text, section, span),
    }
}

fn trim_tagged(
    text: &str,
    section: &Section,
    span: &str,
    open: &str,
    close: &str,
) -> Option<Range<usize>> {
    // Missing opening tag degrades to the section's own start rather than
    // dropping; the locator may have found the section by other means.
    let content_start = match span.find(open) {
        Some(i) => skip_leading_newline(text, section.start + i + open.len()),
        None => section.start,
    };

    // Last occurrence, so duplicate closing-tag text inside the body does not
    // truncate early. Opening-tag search stays first-occurrence on purpose;
    // the asymmetry is what makes bodies containing both literals resolve.
    let content_end = match span.rfind(close) {
        Some(i) => section.start + i,
        None => section.end,
    };

    (content_start < content_end).then(|| content_start..content_end)
}

fn trim_fenced(text: &str, section: &Section, span: &str) -> Option<Range<usize>> {
    // Both fences must be inside this section's span; an unmatched section
    // never borrows a delimiter from a sibling.
    let first = span.find(FENCE)?;
    let after_first = first + FENCE.len();
    let second = span.get(after_first..)?.find(FENCE)? + after_first;

    let content_start = skip_leading_newline(text, section.start + after_first);
    let content_end = section.start + second;

    (content_start < content_end).then(|| content_start..content_end)
}

/// Advance past a single `\n` directly after an opening delimiter, so body
/// indentation is preserved as written rather than as an artifact of the
/// delimiter line.
fn skip_leading_newline(text: &str, offset: usize) -> usize {
    if text.as_bytes().get(offset) == Some(&b'\n') {
        offset + 1
    } else {
        offset
    }
}
