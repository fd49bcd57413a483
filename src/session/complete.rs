//! Autocomplete, spell-check and "did you mean" lookups against the dictionary.

use super::EditorSession;
use crate::types::{Completion, SpellToken, SpellVerdict};
use crate::utils::{normalize_word, split_tokens};
use log::debug;

impl EditorSession {
    /// Prefix suggestions for the lowercased trailing word, at most `prefix_limit`.
    ///
    /// Empty when there is no trailing word or nothing in the dictionary starts with it.
    pub fn autocomplete_suggestions(&self) -> Vec<String> {
        let word = normalize_word(&self.last_word());
        if word.is_empty() {
            return Vec::new();
        }
        let found = self
            .dict
            .trie()
            .suggest_by_prefix(&word, self.suggest.prefix_limit);
        debug!("autocomplete '{}': {} suggestion(s)", word, found.len());
        found
    }

    /// Apply a 1-based pick from `suggestions`; 0 cancels.
    pub fn apply_completion(&mut self, suggestions: &[String], choice: usize) -> Completion {
        if choice == 0 {
            return Completion::Cancelled;
        }
        match suggestions.get(choice - 1) {
            Some(word) => {
                self.replace_last_word(word);
                Completion::Replaced(word.clone())
            }
            None => Completion::InvalidChoice,
        }
    }

    /// Dictionary words within `max_edit_distance` of `word`, at most `fuzzy_limit`.
    pub fn fuzzy_suggestions(&self, word: &str) -> Vec<String> {
        self.dict.trie().suggest_by_edit_distance(
            &normalize_word(word),
            self.suggest.fuzzy_limit,
            self.suggest.max_edit_distance,
        )
    }

    /// Check each space/tab separated token of `line` against the dictionary.
    ///
    /// Tokens are lowercased; unknown ones carry fuzzy suggestions.
    pub fn spell_check(&self, line: &str) -> Vec<SpellToken> {
        split_tokens(line)
            .map(|token| {
                let word = normalize_word(token);
                if self.dict.contains(&word) {
                    SpellToken { word, verdict: SpellVerdict::Ok, suggestions: Vec::new() }
                } else {
                    let suggestions = self.fuzzy_suggestions(&word);
                    SpellToken { word, verdict: SpellVerdict::Unknown, suggestions }
                }
            })
            .collect()
    }
}
