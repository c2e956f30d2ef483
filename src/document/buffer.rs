//! Virtual text buffers over sub-spans of a host document.
//!
//! A [`VirtualBuffer`] exposes one trimmed region of the host snapshot behind
//! a zero-based coordinate space, so that tooling written against "a document"
//! can be pointed at a slice without ever seeing out-of-range text. Every
//! section kind goes through this one type; there is no per-kind buffer
//! construction.

use std::ops::Range;
use std::sync::Arc;

/// A read-only text view over `[start, end)` of the host snapshot.
///
/// Local offset 0 corresponds to `start` in the host document. Reads are
/// clamped: a request past the end of the buffer returns the available text
/// and never reads past `end`. There is no change tracking; callers treat
/// every read as a fresh full reread.
#[derive(Debug, Clone)]
pub struct VirtualBuffer {
    snapshot: Arc<str>,
    start: usize,
    end: usize,
}

impl VirtualBuffer {
    /// Create a buffer over `range` of `snapshot`.
    ///
    /// The range must lie within the snapshot; it is clamped if it does not.
    pub fn new(snapshot: Arc<str>, range: Range<usize>) -> Self {
        let end = range.end.min(snapshot.len());
        let start = range.start.min(end);
        Self {
            snapshot,
            start,
            end,
        }
    }

    /// Length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get text between two local offsets.
    ///
    /// Both offsets are clamped to the buffer length, so requesting
    /// `text(0, usize::MAX)` returns the full buffer text. An offset that
    /// does not fall on a character boundary yields an empty string rather
    /// than a panic.
    pub fn text(&self, local_start: usize, local_end: usize) -> &str {
        let end = local_end.min(self.len());
        let start = local_start.min(end);
        self.snapshot
            .get(self.start + start..self.start + end)
            .unwrap_or("")
    }

    /// The full text of the buffer.
    pub fn full_text(&self) -> &str {
        self.text(0, self.len())
    }

    /// The host-document range this buffer covers.
    pub fn host_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str, range: Range<usize>) -> VirtualBuffer {
        VirtualBuffer::new(Arc::from(text), range)
    }

    #[test]
    fn local_coordinates_start_at_zero() {
        let buf = buffer("aaa<b>hello</b>", 6..11);
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.full_text(), "hello");
        assert_eq!(buf.text(1, 4), "ell");
    }

    #[test]
    fn overlong_request_is_clamped() {
        let buf = buffer("0123456789", 2..6);
        assert_eq!(buf.text(0, usize::MAX), "2345");
        assert_eq!(buf.text(2, 100), "45");
    }

    #[test]
    fn start_past_end_yields_empty() {
        let buf = buffer("0123456789", 2..6);
        assert_eq!(buf.text(10, 20), "");
        assert_eq!(buf.text(3, 1), "");
    }

    #[test]
    fn never_reads_past_host_range() {
        let buf = buffer("secret-before|body|secret-after", 14..18);
        assert_eq!(buf.full_text(), "body");
        assert_eq!(buf.text(0, 1000), "body");
    }

    #[test]
    fn out_of_range_construction_is_clamped() {
        let buf = buffer("short", 2..99);
        assert_eq!(buf.full_text(), "ort");
        let buf = buffer("short", 99..120);
        assert!(buf.is_empty());
        assert_eq!(buf.full_text(), "");
    }

    #[test]
    fn non_boundary_offsets_do_not_panic() {
        // '😀' is 4 bytes; local offset 1 lands mid-character
        let buf = buffer("😀ab", 0..6);
        assert_eq!(buf.text(1, 6), "");
        assert_eq!(buf.full_text(), "😀ab");
    }
}
