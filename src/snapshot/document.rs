//! SnapshotDocument — the accumulated capture output.
//!
//! Append-only indented text plus banner/section headers. Created fresh at
//! the start of a capture and handed to the sink afterwards; it carries no
//! wall-clock data, so repeated captures of an unchanged graph are
//! byte-identical (timestamps live in artifact names, not in the text).

use crate::consts::BANNER_RULER;

pub struct SnapshotDocument {
    buf: String,
    indent_width: usize,
}

impl SnapshotDocument {
    pub fn new(indent_width: usize) -> Self {
        Self {
            buf: String::new(),
            indent_width: indent_width.max(1),
        }
    }

    /// Append one line at `level` (indent proportional to depth).
    pub fn line(&mut self, level: usize, text: &str) {
        self.buf
            .push_str(&" ".repeat(level * self.indent_width));
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Ruler-framed banner for the document title.
    pub fn banner(&mut self, title: &str) {
        self.line(0, BANNER_RULER);
        self.line(0, title);
        self.line(0, BANNER_RULER);
    }

    /// Section header line.
    pub fn section(&mut self, title: &str) {
        self.line(0, title);
    }

    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indentation_is_proportional_to_level() {
        let mut doc = SnapshotDocument::new(4);
        doc.line(0, "a");
        doc.line(1, "b");
        doc.line(2, "c");
        assert_eq!(doc.as_str(), "a\n    b\n        c\n");
    }

    #[test]
    fn zero_indent_width_is_clamped() {
        let doc = SnapshotDocument::new(0);
        assert_eq!(doc.indent_width(), 1);
    }
}
