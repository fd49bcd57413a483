//! The document buffer: one linear text stored in a Rope, addressed by char offset.

use ropey::Rope;
use std::io::{self, Write};

/// The whole document as a single character sequence.
///
/// Positions are **char offsets** (0-based), never byte offsets. Out-of-range positions
/// are clamped (insert) or ignored (delete); nothing here fails.
pub struct EditBuffer {
    text: Rope,
}

impl Default for EditBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl EditBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self { text: Rope::new() }
    }

    /// Build a buffer holding `s` verbatim.
    pub fn from_text(s: &str) -> Self {
        Self { text: Rope::from_str(s) }
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.text.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character at `pos`, if in range.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get_char(pos)
    }

    /// Insert one character; `pos` is clamped into `[0, len]`. Returns where it landed.
    pub fn insert_at(&mut self, pos: usize, ch: char) -> usize {
        let idx = pos.min(self.len());
        self.text.insert_char(idx, ch);
        idx
    }

    /// Remove the character at `pos`. Returns it, or `None` (and does nothing) when
    /// `pos` is outside `[0, len - 1]`.
    pub fn delete_at(&mut self, pos: usize) -> Option<char> {
        let ch = self.text.get_char(pos)?;
        self.text.remove(pos..=pos);
        Some(ch)
    }

    /// Swap the whole content for `text`.
    ///
    /// Not recorded anywhere: whoever calls this owns resetting undo/redo history.
    pub fn replace_all(&mut self, text: &str) {
        self.text = Rope::from_str(text);
    }

    /// Full copy of the text.
    pub fn snapshot(&self) -> String {
        self.text.to_string()
    }

    /// Stream the text to a writer without building a `String` first.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for chunk in self.text.chunks() {
            writer.write_all(chunk.as_bytes())?;
        }
        writer.flush()
    }

    /// Char offset just past the last non-whitespace character (0 if there is none).
    pub fn trimmed_end(&self) -> usize {
        let mut end = self.len();
        while end > 0 && self.text.char(end - 1).is_whitespace() {
            end -= 1;
        }
        end
    }

    /// Start of the run of non-whitespace characters ending at `end`.
    pub fn word_start_before(&self, end: usize) -> usize {
        let mut start = end.min(self.len());
        while start > 0 && !self.text.char(start - 1).is_whitespace() {
            start -= 1;
        }
        start
    }

    /// Text between two char offsets (clamped, order-insensitive).
    pub fn slice_to_string(&self, a: usize, b: usize) -> String {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        let len = self.len();
        self.text.slice(a.min(len)..b.min(len)).to_string()
    }
}
