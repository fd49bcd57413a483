//! Common types shared by the session, the history logs and the REPL.

use crate::utils::is_word_whitespace;

/// Which way a single-character edit changed the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Insert,
    Delete,
}

impl ActionKind {
    /// The kind that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Self::Insert => Self::Delete,
            Self::Delete => Self::Insert,
        }
    }
}

/// One single-character mutation that has already been applied to the buffer.
///
/// - `ch`: the character inserted or removed
/// - `pos`: **char offset** in the buffer where it happened (0-based)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub ch: char,
    pub pos: usize,
}

impl Action {
    pub fn insert(ch: char, pos: usize) -> Self {
        Self { kind: ActionKind::Insert, ch, pos }
    }

    pub fn delete(ch: char, pos: usize) -> Self {
        Self { kind: ActionKind::Delete, ch, pos }
    }

    /// Whether this action touched a word separator. Drives undo/redo grouping.
    pub fn is_whitespace(&self) -> bool {
        is_word_whitespace(self.ch)
    }
}

/// Result of a grouped undo or redo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryOutcome {
    /// A word group was reverted/reapplied; `actions` single-character edits were processed.
    Applied { actions: usize },
    /// No word was reverted/reapplied ("nothing to undo" / "nothing to redo").
    Nothing,
}

impl HistoryOutcome {
    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }
}

/// Spell-check verdict for one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpellVerdict {
    Ok,
    Unknown,
}

/// A token from a spell-checked line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpellToken {
    /// The token, lowercased.
    pub word: String,
    pub verdict: SpellVerdict,
    /// Close dictionary words (only filled for unknown tokens).
    pub suggestions: Vec<String>,
}

/// What happened when the user picked from an autocomplete list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The last word was replaced with this suggestion.
    Replaced(String),
    /// The user picked 0.
    Cancelled,
    /// The choice was outside `1..=suggestions.len()`.
    InvalidChoice,
}
