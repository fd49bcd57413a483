//! Dictionary loading: feeds one word stream into both the trie and the membership index.

use crate::membership::MembershipIndex;
use crate::trie::PrefixTrie;
use crate::utils::normalize_word;
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The read-only word stores of a session.
///
/// The trie serves autocomplete and fuzzy suggestions; the membership index answers
/// spell-check lookups. Both are filled from the same words and never change afterwards.
pub struct Dictionary {
    trie: PrefixTrie,
    index: MembershipIndex,
}

impl Dictionary {
    /// An empty dictionary (nothing loaded).
    pub fn empty(buckets: usize) -> Self {
        Self {
            trie: PrefixTrie::new(),
            index: MembershipIndex::new(buckets),
        }
    }

    /// Build from already-tokenized words. Words are lowercased; empty ones are skipped.
    pub fn from_words<I, S>(words: I, buckets: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::empty(buckets);
        for word in words {
            dict.insert(word.as_ref());
        }
        dict
    }

    /// Build from text, splitting on any whitespace.
    pub fn from_reader<R: BufRead>(reader: R, buckets: usize) -> Result<Self> {
        let mut dict = Self::empty(buckets);
        for line in reader.lines() {
            let line = line.context("Reading dictionary")?;
            for word in line.split_whitespace() {
                dict.insert(word);
            }
        }
        Ok(dict)
    }

    /// Load a whitespace-separated word file.
    pub fn load_file(path: &Path, buckets: usize) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Cannot open dictionary file {}", path.display()))?;
        let dict = Self::from_reader(BufReader::new(file), buckets)
            .with_context(|| format!("Failed reading {}", path.display()))?;
        info!(
            "loaded dictionary {}: {} words, {} trie nodes, longest chain {}",
            path.display(),
            dict.trie.len(),
            dict.trie.node_count(),
            dict.index.longest_chain()
        );
        Ok(dict)
    }

    fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let word = normalize_word(word);
        self.trie.insert(&word);
        self.index.insert(&word);
    }

    /// Exact spell-check lookup. `word` must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn trie(&self) -> &PrefixTrie {
        &self.trie
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
