//! Utility functions.

use std::cmp::min; // comparison helpers
use std::path::PathBuf; // config search paths

/// Name of the config file looked up next to the working directory and the executable.
pub const CONFIG_FILE_NAME: &str = "smartpad.toml";

/// Whitespace as far as word grouping, last-word lookup and tokenizing are concerned.
pub fn is_word_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Lowercase a word the way the dictionary stores it.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
}

/// Split a spell-check line into tokens on spaces and tabs.
///
/// Runs of separators produce empty pieces, which are dropped here.
pub fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ' ' || c == '\t').filter(|t| !t.is_empty())
}

/// Get the default config search locations.
///
/// Returns:
/// - `./smartpad.toml` relative to the current working directory
/// - `smartpad.toml` next to the executable
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(CONFIG_FILE_NAME));
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }
    }

    paths
}

/// Calculate the Levenshtein distance between two strings.
///
/// Full-matrix version; the trie computes the same numbers one row at a time. Used for
/// "did you mean?" on unknown commands and to annotate fuzzy suggestions.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();
    if len1 == 0 { return len2; }
    if len2 == 0 { return len1; }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    for (i, row) in matrix.iter_mut().enumerate() { row[0] = i; }
    for (j, cell) in matrix[0].iter_mut().enumerate() { *cell = j; }

    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);
            matrix[i][j] = min(
                matrix[i - 1][j] + 1,
                min(
                    matrix[i][j - 1] + 1,
                    matrix[i - 1][j - 1] + cost
                )
            );
        }
    }

    matrix[len1][len2]
}
