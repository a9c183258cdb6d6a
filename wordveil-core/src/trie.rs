//! trie.rs - The dictionary trie and its shared build cache.
//!
//! This module provides a thread-safe, cached mechanism to convert a word
//! list into a [`Trie`] optimized for single-pass scanning. It uses a
//! global, shared cache so that repeated engine construction from the same
//! dictionary reuses one build.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

/// A single node of the dictionary trie.
///
/// Each node exclusively owns its children, so the trie forms a simple
/// rooted tree with no back edges and no shared ownership.
#[derive(Debug, Default)]
pub struct TrieNode {
    word_end: bool,
    children: HashMap<char, TrieNode>,
}

impl TrieNode {
    /// True iff the path from the root to this node spells a complete
    /// dictionary word (as opposed to merely a prefix of one).
    pub fn is_word_end(&self) -> bool {
        self.word_end
    }

    /// Follows the edge labeled `c`, if it exists.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }
}

/// A prefix tree over the dictionary word list.
///
/// Built once, immutable thereafter; a completed trie is safe for
/// unsynchronized concurrent reads by any number of scanners.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    /// Creates an empty trie. Scanning against it matches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie from a sequence of dictionary words.
    ///
    /// Duplicates are harmless and empty entries are ignored; no
    /// normalization (case folding, trimming) is performed.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Inserts one word, creating a node per character and marking the last.
    ///
    /// An empty word is a no-op; the root never carries a word-end mark.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.word_end {
            node.word_end = true;
            self.word_count += 1;
        }
    }

    /// Returns the root node, the starting point of every scan.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words the trie was built from.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// True iff the trie holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// True iff `word` is a complete dictionary entry (not just a prefix).
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &self.root;
        for c in word.chars() {
            match node.child(c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_word_end()
    }
}

lazy_static! {
    /// A thread-safe, global cache for built tries.
    /// The key is a hash of the sorted word list.
    static ref TRIE_CACHE: RwLock<HashMap<u64, Arc<Trie>>> = RwLock::new(HashMap::new());
}

/// Hashes a word list to create a stable, unique key for the cache.
///
/// To ensure determinism, the words are sorted before hashing.
fn hash_words(words: &[String]) -> u64 {
    let mut hasher = DefaultHasher::new();
    let mut words_to_hash = words.to_vec();
    words_to_hash.sort();
    words_to_hash.hash(&mut hasher);
    hasher.finish()
}

/// Gets a shared [`Trie`] from the cache or builds it if not found.
///
/// This is the public entry point for constructing dictionaries. It returns
/// an `Arc` to a completed trie, allowing for cheap sharing across engines
/// and threads.
pub fn get_or_build_trie(words: &[String]) -> Arc<Trie> {
    let cache_key = hash_words(words);

    // Attempt to acquire a read lock first.
    {
        let cache = TRIE_CACHE.read().unwrap();
        if let Some(trie) = cache.get(&cache_key) {
            debug!("Serving dictionary trie from cache for key: {}", &cache_key);
            return Arc::clone(trie);
        }
    } // Read lock is released here.

    debug!("Dictionary trie not found in cache. Building now.");
    let trie = Arc::new(Trie::build(words));

    // Acquire a write lock to insert the new trie.
    TRIE_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&trie));

    debug!(
        "Built and cached dictionary trie ({} words) for key: {}",
        trie.word_count(),
        &cache_key
    );
    trie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_marks_complete_words_only() {
        let trie = Trie::build(["bad", "badge"]);
        assert!(trie.contains("bad"));
        assert!(trie.contains("badge"));
        assert!(!trie.contains("ba"));
        assert!(!trie.contains("badger"));
        assert_eq!(trie.word_count(), 2);
    }

    #[test]
    fn empty_words_are_ignored_and_root_stays_unmarked() {
        let trie = Trie::build(["", "", "ok"]);
        assert_eq!(trie.word_count(), 1);
        assert!(!trie.root().is_word_end());
        assert!(!trie.contains(""));
    }

    #[test]
    fn duplicate_insertion_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("赌博");
        trie.insert("赌博");
        assert_eq!(trie.word_count(), 1);
        assert!(trie.contains("赌博"));
    }

    #[test]
    fn cache_reuses_tries_for_identical_word_lists() {
        let words = vec!["alpha".to_string(), "beta".to_string()];
        let reordered = vec!["beta".to_string(), "alpha".to_string()];
        let a = get_or_build_trie(&words);
        let b = get_or_build_trie(&reordered);
        assert!(Arc::ptr_eq(&a, &b));
    }
}
