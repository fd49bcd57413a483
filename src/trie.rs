//! Prefix trie over the lowercase `a`–`z` alphabet.
//!
//! Nodes live in an arena (`Vec<TrieNode>`) and refer to their children by index, so the
//! tree is built and walked without any shared ownership. The root is a sentinel for the
//! empty prefix and is never a word.
//!
//! Three queries are supported:
//! - exact containment ([`PrefixTrie::contains`])
//! - alphabetical enumeration below a prefix ([`PrefixTrie::words_with_prefix`],
//!   [`PrefixTrie::suggest_by_prefix`])
//! - bounded Levenshtein search ([`PrefixTrie::suggest_by_edit_distance`]), which computes one
//!   dynamic-programming row per edge and prunes subtrees that can no longer get within budget.

use log::debug;

const ALPHABET: usize = 26;

/// Letters in child-slot order. Every traversal visits children in this order.
const LETTERS: &[u8; ALPHABET] = b"abcdefghijklmnopqrstuvwxyz";

/// Index of a node in the trie arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeId(usize);

const ROOT: NodeId = NodeId(0);

/// Map a character to its child slot, or `None` if it is outside `a`–`z`.
fn letter_index(ch: char) -> Option<usize> {
    let byte = u8::try_from(ch).ok()?;
    byte.is_ascii_lowercase().then(|| usize::from(byte - b'a'))
}

#[derive(Clone, Debug, Default)]
struct TrieNode {
    children: [Option<NodeId>; ALPHABET],
    is_word_end: bool,
}

/// A set of lowercase words with prefix and fuzzy lookup.
///
/// Built once from the dictionary and read-only afterwards; there is no removal.
#[derive(Clone, Debug)]
pub struct PrefixTrie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTrie {
    /// Create an empty trie holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a word, skipping every character outside `a`–`z`.
    ///
    /// Returns `true` if the word was not present before. A word made only of skipped
    /// characters is not inserted.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut current = ROOT;
        let mut walked = false;

        for ch in word.chars() {
            let Some(idx) = letter_index(ch) else {
                continue;
            };
            walked = true;
            current = match self.nodes[current.0].children[idx] {
                Some(child) => child,
                None => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(TrieNode::default());
                    self.nodes[current.0].children[idx] = Some(child);
                    child
                }
            };
        }

        if !walked {
            return false;
        }
        let node = &mut self.nodes[current.0];
        if node.is_word_end {
            return false;
        }
        node.is_word_end = true;
        self.word_count += 1;
        true
    }

    /// Whether `word` was inserted. Any character outside `a`–`z` means "no".
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|id| self.nodes[id.0].is_word_end)
    }

    /// Walk to the node spelling `prefix`.
    fn find(&self, prefix: &str) -> Option<NodeId> {
        let mut current = ROOT;
        for ch in prefix.chars() {
            let idx = letter_index(ch)?;
            current = self.nodes[current.0].children[idx]?;
        }
        Some(current)
    }

    /// Lazily enumerate every word starting with `prefix`, in alphabetical order.
    ///
    /// Yields nothing if no stored word has that prefix.
    pub fn words_with_prefix(&self, prefix: &str) -> PrefixIter<'_> {
        let stack = self
            .find(prefix)
            .map(|id| vec![(id, prefix.to_string())])
            .unwrap_or_default();
        PrefixIter { trie: self, stack }
    }

    /// Up to `limit` words starting with `prefix`, alphabetically.
    pub fn suggest_by_prefix(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.words_with_prefix(prefix).take(limit).collect()
    }

    /// Up to `limit` words within Levenshtein distance `max_cost` of `word`.
    ///
    /// Results come in depth-first, letter-ordered discovery order, *not* sorted by
    /// distance. An empty `word` yields nothing.
    pub fn suggest_by_edit_distance(
        &self,
        word: &str,
        limit: usize,
        max_cost: usize,
    ) -> Vec<String> {
        let target: Vec<char> = word.chars().collect();
        if target.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut search = FuzzySearch {
            trie: self,
            target: &target,
            max_cost,
            limit,
            candidate: String::new(),
            found: Vec::new(),
            visited: 0,
        };
        // Row for the empty candidate: distance to each target prefix is its length.
        let first_row: Vec<usize> = (0..=target.len()).collect();
        search.descend(ROOT, &first_row);

        debug!(
            "fuzzy '{}' (max_cost={}): {} match(es), visited {} of {} nodes",
            word,
            max_cost,
            search.found.len(),
            search.visited,
            self.nodes.len()
        );
        search.found
    }
}

/// Alphabetical depth-first walk below a prefix node.
///
/// Children are pushed in reverse letter order so they pop in `a`→`z` order.
pub struct PrefixIter<'a> {
    trie: &'a PrefixTrie,
    stack: Vec<(NodeId, String)>,
}

impl Iterator for PrefixIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((id, word)) = self.stack.pop() {
            let node = &self.trie.nodes[id.0];
            for (&letter, child) in LETTERS.iter().zip(node.children.iter()).rev() {
                if let Some(child) = child {
                    let mut next = word.clone();
                    next.push(char::from(letter));
                    self.stack.push((*child, next));
                }
            }
            if node.is_word_end {
                return Some(word);
            }
        }
        None
    }
}

/// State of one bounded edit-distance search.
struct FuzzySearch<'a> {
    trie: &'a PrefixTrie,
    target: &'a [char],
    max_cost: usize,
    limit: usize,
    /// Letters on the path from the root to the node being visited.
    candidate: String,
    found: Vec<String>,
    visited: usize,
}

impl FuzzySearch<'_> {
    /// Visit the children of `id`; `parent_row` is the DP row for `self.candidate`.
    fn descend(&mut self, id: NodeId, parent_row: &[usize]) {
        let trie = self.trie;
        let node = &trie.nodes[id.0];

        for (&letter, child) in LETTERS.iter().zip(node.children.iter()) {
            if self.found.len() >= self.limit {
                return;
            }
            let Some(child) = *child else {
                continue;
            };
            let ch = char::from(letter);
            let row = self.next_row(parent_row, ch);
            self.visited += 1;
            self.candidate.push(ch);

            if trie.nodes[child.0].is_word_end && row[self.target.len()] <= self.max_cost {
                self.found.push(self.candidate.clone());
            }
            // Extending the candidate can never bring the row minimum back down.
            if row.iter().min().is_some_and(|&m| m <= self.max_cost) {
                self.descend(child, &row);
            }

            self.candidate.pop();
        }
    }

    /// Wagner–Fischer step: the row for `candidate + ch` from the row for `candidate`.
    fn next_row(&self, prev: &[usize], ch: char) -> Vec<usize> {
        let mut row = Vec::with_capacity(prev.len());
        row.push(prev[0] + 1);
        for (j, &t) in self.target.iter().enumerate() {
            let insert = row[j] + 1;
            let delete = prev[j + 1] + 1;
            let replace = prev[j] + usize::from(t != ch);
            row.push(insert.min(delete).min(replace));
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::levenshtein_distance;

    fn trie_of(words: &[&str]) -> PrefixTrie {
        let mut t = PrefixTrie::new();
        for w in words {
            t.insert(w);
        }
        t
    }

    const WORDS: &[&str] = &[
        "a", "an", "and", "ant", "apple", "apply", "banana", "band", "bandana", "can", "cane",
        "cart", "cat", "cats", "dog", "dot", "hello", "help", "helper", "hell", "yellow",
    ];

    // ==================== insert / contains ====================

    #[test]
    fn new_trie_is_empty() {
        let t = PrefixTrie::new();
        assert!(t.is_empty());
        assert_eq!(t.node_count(), 1);
        assert!(!t.contains(""));
        assert!(!t.contains("a"));
    }

    #[test]
    fn inserted_words_are_contained() {
        let t = trie_of(WORDS);
        for w in WORDS {
            assert!(t.contains(w), "missing {w}");
        }
        assert_eq!(t.len(), WORDS.len());
    }

    #[test]
    fn words_stay_contained_after_more_inserts() {
        let mut t = trie_of(&["cat"]);
        for w in WORDS {
            t.insert(w);
            assert!(t.contains("cat"));
        }
    }

    #[test]
    fn insert_is_idempotent() {
        let mut t = PrefixTrie::new();
        assert!(t.insert("help"));
        let nodes = t.node_count();
        assert!(!t.insert("help"));
        assert_eq!(t.len(), 1);
        assert_eq!(t.node_count(), nodes);
    }

    #[test]
    fn prefixes_are_not_words() {
        let t = trie_of(&["helper"]);
        assert!(!t.contains("help"));
        assert!(!t.contains("h"));
        assert!(!t.contains("helpers"));
    }

    #[test]
    fn insert_skips_characters_outside_alphabet() {
        let t = trie_of(&["don't", "x-ray", "Zed"]);
        assert!(t.contains("dont"));
        assert!(t.contains("xray"));
        // 'Z' is skipped, leaving "ed"
        assert!(t.contains("ed"));
        assert!(!t.contains("zed"));
    }

    #[test]
    fn word_without_letters_is_not_inserted() {
        let mut t = PrefixTrie::new();
        assert!(!t.insert("123"));
        assert!(!t.insert(""));
        assert!(t.is_empty());
        assert!(!t.contains(""));
        assert!(t.suggest_by_prefix("", 10).is_empty());
    }

    #[test]
    fn contains_fails_closed_on_bad_characters() {
        let t = trie_of(&["hello"]);
        assert!(!t.contains("Hello"));
        assert!(!t.contains("hel-lo"));
        assert!(!t.contains("héllo"));
    }

    // ==================== prefix suggestions ====================

    #[test]
    fn prefix_scenario_orders_by_letter_path() {
        // Inserted out of order on purpose; DFS after "he" goes l-l-o before l-p.
        let t = trie_of(&["help", "helper", "hello"]);
        assert_eq!(t.suggest_by_prefix("he", 10), vec!["hello", "help", "helper"]);
    }

    #[test]
    fn prefix_results_are_bounded_prefixed_and_sorted() {
        let t = trie_of(WORDS);
        for prefix in ["", "a", "an", "ban", "c", "he", "hel", "y"] {
            for limit in [0, 1, 2, 5, 100] {
                let got = t.suggest_by_prefix(prefix, limit);
                assert!(got.len() <= limit);
                assert!(got.iter().all(|w| w.starts_with(prefix)));
                assert!(got.windows(2).all(|p| p[0] < p[1]), "not sorted: {got:?}");
            }
        }
    }

    #[test]
    fn prefix_truncation_keeps_alphabetical_head() {
        let t = trie_of(WORDS);
        let all = t.suggest_by_prefix("a", 100);
        assert_eq!(all, vec!["a", "an", "and", "ant", "apple", "apply"]);
        assert_eq!(t.suggest_by_prefix("a", 3), vec!["a", "an", "and"]);
    }

    #[test]
    fn prefix_that_is_itself_a_word_comes_first() {
        let t = trie_of(WORDS);
        assert_eq!(t.suggest_by_prefix("cat", 10), vec!["cat", "cats"]);
    }

    #[test]
    fn empty_prefix_lists_everything_up_to_limit() {
        let t = trie_of(WORDS);
        let mut sorted: Vec<String> = WORDS.iter().map(|w| (*w).to_string()).collect();
        sorted.sort();
        assert_eq!(t.suggest_by_prefix("", usize::MAX), sorted);
        assert_eq!(t.suggest_by_prefix("", 2), vec!["a", "an"]);
    }

    #[test]
    fn missing_or_invalid_prefix_gives_nothing() {
        let t = trie_of(WORDS);
        assert!(t.suggest_by_prefix("zz", 10).is_empty());
        assert!(t.suggest_by_prefix("hellos", 10).is_empty());
        assert!(t.suggest_by_prefix("He", 10).is_empty());
        assert!(t.suggest_by_prefix("h!", 10).is_empty());
    }

    #[test]
    fn prefix_iterator_is_lazy_and_matches_eager_call() {
        let t = trie_of(WORDS);
        let mut it = t.words_with_prefix("ba");
        assert_eq!(it.next().as_deref(), Some("banana"));
        let rest: Vec<String> = it.collect();
        assert_eq!(rest, vec!["band", "bandana"]);
        assert_eq!(t.suggest_by_prefix("ba", 10), vec!["banana", "band", "bandana"]);
    }

    // ==================== edit-distance suggestions ====================

    #[test]
    fn fuzzy_helo_follows_true_levenshtein() {
        // "help" is one substitution away from "helo", so it qualifies at max_cost 1.
        let t = trie_of(&["hello", "help"]);
        assert_eq!(t.suggest_by_edit_distance("helo", 5, 1), vec!["hello", "help"]);
    }

    #[test]
    fn fuzzy_excludes_words_over_budget() {
        let t = trie_of(&["hello", "help", "helper"]);
        // helper is 3 edits from helo
        assert_eq!(t.suggest_by_edit_distance("helo", 5, 1), vec!["hello", "help"]);
        assert_eq!(t.suggest_by_edit_distance("helo", 5, 3), vec!["hello", "help", "helper"]);
        assert!(t.suggest_by_edit_distance("xyz", 5, 2).is_empty());
    }

    #[test]
    fn fuzzy_zero_cost_is_exact_match() {
        let t = trie_of(WORDS);
        assert_eq!(t.suggest_by_edit_distance("cat", 10, 0), vec!["cat"]);
        assert!(t.suggest_by_edit_distance("cta", 10, 0).is_empty());
    }

    #[test]
    fn fuzzy_order_is_discovery_not_distance() {
        let t = trie_of(&["cart", "cat"]);
        // "cart" (distance 1) sits on the 'r' branch, visited before 't'.
        assert_eq!(t.suggest_by_edit_distance("cat", 10, 1), vec!["cart", "cat"]);
    }

    #[test]
    fn fuzzy_limit_truncates_in_discovery_order() {
        let t = trie_of(WORDS);
        let all = t.suggest_by_edit_distance("can", usize::MAX, 1);
        assert!(all.len() > 2);
        assert_eq!(t.suggest_by_edit_distance("can", 2, 1), all[..2].to_vec());
        assert!(t.suggest_by_edit_distance("can", 0, 1).is_empty());
    }

    #[test]
    fn fuzzy_empty_target_gives_nothing() {
        let t = trie_of(WORDS);
        assert!(t.suggest_by_edit_distance("", 10, 3).is_empty());
    }

    #[test]
    fn fuzzy_matches_brute_force_levenshtein() {
        let t = trie_of(WORDS);
        for target in ["helo", "cat", "bnd", "appel", "doog", "a", "yelow", "zzzz"] {
            for max_cost in 0..=3 {
                let got = t.suggest_by_edit_distance(target, usize::MAX, max_cost);
                for w in &got {
                    assert!(
                        levenshtein_distance(w, target) <= max_cost,
                        "{w} too far from {target}"
                    );
                }
                for w in WORDS {
                    if levenshtein_distance(w, target) <= max_cost {
                        assert!(got.iter().any(|g| g == w), "{w} missing for {target}/{max_cost}");
                    }
                }
            }
        }
    }
}
