//! Undo/redo history: a LIFO log of single-character actions.

use crate::types::Action;

/// Stack of [`Action`]s. Push appends, pop takes the most recent.
///
/// The session owns two of these (undo and redo); moving an action between them moves
/// the record itself.
#[derive(Clone, Debug, Default)]
pub struct ActionLog {
    actions: Vec<Action>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn pop(&mut self) -> Option<Action> {
        self.actions.pop()
    }

    /// The action `pop` would return next.
    pub fn peek(&self) -> Option<&Action> {
        self.actions.last()
    }

    /// Whether any logged action is not whitespace.
    pub fn has_word_action(&self) -> bool {
        self.actions.iter().rev().any(|a| !a.is_whitespace())
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
