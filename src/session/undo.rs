//! Grouped undo/redo.
//!
//! The logs hold single-character actions, but one `undo`/`redo` call moves a whole word:
//! undo stops right after reverting a non-whitespace action whose predecessor is
//! whitespace, redo stops right after reapplying a whitespace action whose successor is
//! not. Both therefore cut history at the same places, each whitespace→word boundary of
//! the typed text, so redo reapplies exactly the groups undo removed. A log with no word
//! left in it is not touched at all.

use super::EditorSession;
use crate::buffer::EditBuffer;
use crate::types::{Action, ActionKind, HistoryOutcome};
use log::debug;

/// Perform one `kind` of edit with `action`'s character and position.
fn apply(buf: &mut EditBuffer, kind: ActionKind, action: Action) {
    match kind {
        ActionKind::Insert => {
            buf.insert_at(action.pos, action.ch);
        }
        ActionKind::Delete => {
            buf.delete_at(action.pos);
        }
    }
}

/// Undo `action` on the buffer.
fn revert(buf: &mut EditBuffer, action: Action) {
    apply(buf, action.kind.inverse(), action);
}

/// Perform `action` on the buffer again.
fn reapply(buf: &mut EditBuffer, action: Action) {
    apply(buf, action.kind, action);
}

impl EditorSession {
    /// Undo the trailing word.
    ///
    /// Returns [`HistoryOutcome::Nothing`] and leaves everything untouched when the undo log
    /// holds no non-whitespace action.
    pub fn undo(&mut self) -> HistoryOutcome {
        if !self.undo.has_word_action() {
            debug!("undo: no word in {} logged action(s)", self.undo.len());
            return HistoryOutcome::Nothing;
        }

        let mut actions = 0;
        while let Some(action) = self.undo.pop() {
            revert(&mut self.buf, action);
            self.redo.push(action);
            actions += 1;

            if !action.is_whitespace() && self.undo.peek().is_some_and(Action::is_whitespace) {
                break;
            }
        }

        self.dirty = true;
        debug!("undo: reverted {actions} action(s), {} left", self.undo.len());
        HistoryOutcome::Applied { actions }
    }

    /// Redo the word group most recently undone.
    ///
    /// Mirror of [`EditorSession::undo`]: a word plus the whitespace after it.
    pub fn redo(&mut self) -> HistoryOutcome {
        if !self.redo.has_word_action() {
            debug!("redo: no word in {} logged action(s)", self.redo.len());
            return HistoryOutcome::Nothing;
        }

        let mut actions = 0;
        while let Some(action) = self.redo.pop() {
            reapply(&mut self.buf, action);
            self.undo.push(action);
            actions += 1;

            if action.is_whitespace()
                && self.redo.peek().is_some_and(|next| !next.is_whitespace())
            {
                break;
            }
        }

        self.dirty = true;
        debug!("redo: reapplied {actions} action(s), {} left", self.redo.len());
        HistoryOutcome::Applied { actions }
    }
}

#[cfg(test)]
mod tests {
    use crate::session::tests::session_with;
    use crate::types::HistoryOutcome;

    // ==================== grouped undo ====================

    #[test]
    fn cat_dog_scenario() {
        let mut s = session_with(&[]);
        s.type_str("cat dog");

        assert_eq!(s.undo(), HistoryOutcome::Applied { actions: 3 });
        assert_eq!(s.text(), "cat ");
        assert_eq!(s.undo(), HistoryOutcome::Applied { actions: 4 });
        assert_eq!(s.text(), "");
        assert!(s.undo().is_nothing());

        assert_eq!(s.redo(), HistoryOutcome::Applied { actions: 4 });
        assert_eq!(s.text(), "cat ");
        assert_eq!(s.redo(), HistoryOutcome::Applied { actions: 3 });
        assert_eq!(s.text(), "cat dog");
        assert!(s.redo().is_nothing());
    }

    #[test]
    fn undo_on_empty_history_reports_nothing() {
        let mut s = session_with(&[]);
        assert!(s.undo().is_nothing());
        assert!(s.redo().is_nothing());
        assert_eq!(s.text(), "");
    }

    #[test]
    fn trailing_whitespace_goes_with_the_word_before_it() {
        let mut s = session_with(&[]);
        s.type_line("one two");
        assert_eq!(s.undo(), HistoryOutcome::Applied { actions: 4 });
        assert_eq!(s.text(), "one ");
    }

    #[test]
    fn whitespace_only_history_is_left_alone() {
        let mut s = session_with(&[]);
        s.type_str(" \t ");
        assert!(s.undo().is_nothing());
        assert_eq!(s.text(), " \t ");
        assert_eq!(s.undo_log().len(), 3);
        assert!(s.redo_log().is_empty());
        assert!(s.redo().is_nothing());
        assert_eq!(s.text(), " \t ");
    }

    #[test]
    fn leading_whitespace_is_never_undone_alone() {
        let mut s = session_with(&[]);
        s.type_str("  cat");
        assert_eq!(s.undo(), HistoryOutcome::Applied { actions: 3 });
        assert_eq!(s.text(), "  ");
        assert!(s.undo().is_nothing());
        assert_eq!(s.text(), "  ");

        assert_eq!(s.redo(), HistoryOutcome::Applied { actions: 3 });
        assert_eq!(s.text(), "  cat");
        assert!(s.redo().is_nothing());
    }

    #[test]
    fn newline_after_completion_is_not_undone() {
        let mut s = session_with(&[]);
        s.type_str("hel");
        s.apply_completion(&["hello".to_string()], 1);
        s.type_char('\n');
        let before = s.text();
        assert!(s.undo().is_nothing());
        assert_eq!(s.text(), before);
        assert_eq!(s.text(), "hello \n");

        s.type_str("x");
        assert_eq!(s.undo(), HistoryOutcome::Applied { actions: 1 });
        assert_eq!(s.text(), "hello \n");
    }

    #[test]
    fn multi_space_gaps_round_trip() {
        let mut s = session_with(&[]);
        s.type_str("a  b   c");
        assert_eq!(s.undo(), HistoryOutcome::Applied { actions: 1 });
        assert_eq!(s.text(), "a  b   ");
        assert_eq!(s.undo(), HistoryOutcome::Applied { actions: 4 });
        assert_eq!(s.text(), "a  ");
        assert_eq!(s.redo(), HistoryOutcome::Applied { actions: 4 });
        assert_eq!(s.text(), "a  b   ");
    }

    #[test]
    fn undo_then_redo_round_trips_all_words() {
        let text = "the quick brown\nfox jumps";
        let mut s = session_with(&[]);
        s.type_str(text);

        let mut undos = 0;
        while !s.undo().is_nothing() {
            undos += 1;
        }
        assert_eq!(s.text(), "");
        assert_eq!(undos, 5);

        for _ in 0..undos {
            assert!(!s.redo().is_nothing());
        }
        assert_eq!(s.text(), text);
        assert!(s.redo_log().is_empty());
    }

    #[test]
    fn typing_after_undo_discards_redo() {
        let mut s = session_with(&[]);
        s.type_str("cat dog");
        s.undo();
        assert!(!s.redo_log().is_empty());
        s.type_char('x');
        assert!(s.redo_log().is_empty());
        assert!(s.redo().is_nothing());
        assert_eq!(s.text(), "cat x");
    }

    // ==================== backspace history ====================

    #[test]
    fn backspace_is_undone_by_reinserting() {
        let mut s = session_with(&[]);
        s.type_str("cats");
        s.backspace();
        assert_eq!(s.text(), "cat");
        // the delete of 's' and the typed word form one group
        assert_eq!(s.undo(), HistoryOutcome::Applied { actions: 5 });
        assert_eq!(s.text(), "");
        assert_eq!(s.redo(), HistoryOutcome::Applied { actions: 5 });
        assert_eq!(s.text(), "cat");
    }

    #[test]
    fn backspace_clears_redo() {
        let mut s = session_with(&[]);
        s.type_str("ab cd");
        s.undo();
        assert_eq!(s.text(), "ab ");
        s.backspace();
        assert!(s.redo_log().is_empty());
        assert_eq!(s.text(), "ab");
    }
}
