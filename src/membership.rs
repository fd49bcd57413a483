//! Exact-membership word set used for spell-checking.
//!
//! A fixed number of buckets, each a chain of words. The bucket for a word is a polynomial
//! rolling hash of its characters; there is no rehashing, so the bucket count picked at
//! construction is kept for the index's lifetime. Words are stored as given: callers
//! normalise case before inserting or querying.

/// Bucket count used when the config does not say otherwise.
pub const DEFAULT_BUCKETS: usize = 50_000;

pub struct MembershipIndex {
    buckets: Vec<Vec<String>>,
    entries: usize,
}

impl Default for MembershipIndex {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKETS)
    }
}

impl MembershipIndex {
    /// Create an index with `buckets` chains (at least one).
    pub fn new(buckets: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); buckets.max(1)],
            entries: 0,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// `h = (h * 31 + char) mod buckets` over the raw characters.
    fn bucket_of(&self, word: &str) -> usize {
        let size = self.buckets.len() as u64;
        let h = word
            .chars()
            .fold(0u64, |h, ch| (h * 31 + u64::from(u32::from(ch))) % size);
        // h < size, which came from a usize
        usize::try_from(h).unwrap_or_default()
    }

    /// Add a word at the head of its chain. Inserting a word twice stores it twice.
    pub fn insert(&mut self, word: &str) {
        let idx = self.bucket_of(word);
        self.buckets[idx].push(word.to_string());
        self.entries += 1;
    }

    /// Whether `word` was inserted (full equality scan of its chain).
    pub fn contains(&self, word: &str) -> bool {
        let idx = self.bucket_of(word);
        // newest entries sit at the end of the Vec, i.e. the chain head
        self.buckets[idx].iter().rev().any(|w| w == word)
    }

    /// Length of the longest chain.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }
}
