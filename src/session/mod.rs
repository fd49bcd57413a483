//! EditorSession: one editing session over a shared dictionary.
//!
//! Owns the buffer and both history logs; the dictionary is shared read-only.

mod complete;
mod file_ops;
mod undo;

use crate::buffer::EditBuffer;
use crate::config::SuggestConfig;
use crate::dictionary::Dictionary;
use crate::history::ActionLog;
use crate::types::Action;
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

pub use file_ops::normalize_file_name;

/// The top-level editing state.
pub struct EditorSession {
    /// The document.
    buf: EditBuffer,
    /// Undo and redo logs.
    undo: ActionLog,
    redo: ActionLog,
    /// Word stores, loaded once.
    dict: Arc<Dictionary>,
    /// Autocomplete/fuzzy limits.
    suggest: SuggestConfig,
    /// Where the document was last opened from or saved to.
    file_path: Option<PathBuf>,
    /// Unsaved changes.
    dirty: bool,
}

impl EditorSession {
    /// Create a session with an empty document.
    pub fn new(dict: Arc<Dictionary>, suggest: SuggestConfig) -> Self {
        Self {
            buf: EditBuffer::new(),
            undo: ActionLog::new(),
            redo: ActionLog::new(),
            dict,
            suggest,
            file_path: None,
            dirty: false,
        }
    }

    /// Full document text.
    pub fn text(&self) -> String {
        self.buf.snapshot()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    pub fn undo_log(&self) -> &ActionLog {
        &self.undo
    }

    pub fn redo_log(&self) -> &ActionLog {
        &self.redo
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    pub fn set_file_path(&mut self, path: PathBuf) {
        self.file_path = Some(path);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Record a fresh forward edit; any redo future is gone after this.
    fn record(&mut self, action: Action) {
        self.undo.push(action);
        self.redo.clear();
        self.dirty = true;
    }

    /// Append one character at the end of the document.
    pub fn type_char(&mut self, ch: char) {
        let pos = self.buf.insert_at(self.buf.len(), ch);
        self.record(Action::insert(ch, pos));
    }

    /// Type every character of `text`.
    pub fn type_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.type_char(ch);
        }
    }

    /// Type `text` followed by a newline (line submission).
    pub fn type_line(&mut self, text: &str) {
        self.type_str(text);
        self.type_char('\n');
    }

    /// Delete the last character of the document, recording it for undo.
    ///
    /// Returns the removed character, or `None` when the document is empty.
    pub fn backspace(&mut self) -> Option<char> {
        let pos = self.buf.len().checked_sub(1)?;
        let ch = self.buf.delete_at(pos)?;
        self.record(Action::delete(ch, pos));
        Some(ch)
    }

    /// The trailing word: skip trailing whitespace, then take the non-whitespace run
    /// before it. Empty if the document has no such run.
    pub fn last_word(&self) -> String {
        let end = self.buf.trimmed_end();
        let start = self.buf.word_start_before(end);
        self.buf.slice_to_string(start, end)
    }

    /// Replace the trailing word (and any whitespace after it, e.g. the newline from line
    /// submission) with `new_word` plus one space.
    ///
    /// This goes through [`EditorSession::replace_all`], so both history logs are cleared.
    pub fn replace_last_word(&mut self, new_word: &str) {
        let end = self.buf.trimmed_end();
        let start = self.buf.word_start_before(end);
        let mut text = self.buf.slice_to_string(0, start);
        text.push_str(new_word);
        text.push(' ');
        debug!("replace last word at {start}..{end} with '{new_word}'");
        self.replace_all(&text);
    }

    /// Swap the whole document. Not undoable: both logs are cleared.
    pub fn replace_all(&mut self, text: &str) {
        self.buf.replace_all(text);
        self.undo.clear();
        self.redo.clear();
        self.dirty = true;
    }
}
