//! `smartpad`: a line-oriented text editing session with dictionary-backed autocomplete,
//! fuzzy "did you mean" suggestions and spell-checking.
//!
//! ## Reading guide (high level architecture)
//! - **`trie::PrefixTrie`**: the word tree behind autocomplete (prefix enumeration) and fuzzy
//!   suggestions (edit-distance search with per-edge DP rows and branch pruning).
//! - **`membership::MembershipIndex`**: fixed-bucket hash set answering spell-check lookups.
//! - **`dictionary::Dictionary`**: loads one word stream into both of the above.
//! - **`buffer::EditBuffer`**: the document, one rope addressed by char offset.
//! - **`history::ActionLog`**: undo/redo stacks of single-character actions.
//! - **`session::EditorSession`**: typing, grouped (word-level) undo/redo, last-word
//!   replacement, autocomplete/spell-check flows, open/save.
//! - **`repl::Repl`** + **`commands::CommandRegistry`**: the text command loop used by the
//!   `smartpad` binary.

pub mod buffer;
pub mod commands;
pub mod config;
pub mod dictionary;
pub mod history;
pub mod membership;
pub mod repl;
pub mod session;
pub mod trie;
pub mod types;
pub mod utils;
