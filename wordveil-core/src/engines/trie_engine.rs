// wordveil-core/src/engines/trie_engine.rs
//! A `FilterEngine` implementation that walks a dictionary trie in a
//! single left-to-right pass to find and mask sensitive words.
//! License: MIT OR APACHE 2.0

use std::sync::Arc;

use anyhow::Result;
use log::debug;

use crate::config::FilterConfig;
use crate::engine::FilterEngine;
use crate::filter_match::{FilterMatch, FilterSummary};
use crate::symbols::is_skippable;
use crate::trie::{get_or_build_trie, Trie};

/// The trie-backed word filter.
///
/// The dictionary is built once (or fetched from the shared build cache)
/// at construction and never mutated afterwards, so one engine may serve
/// any number of concurrent `filter` calls. All per-call scan state lives
/// in locals inside [`TrieEngine::walk`].
#[derive(Debug)]
pub struct TrieEngine {
    dictionary: Arc<Trie>,
    config: FilterConfig,
}

impl TrieEngine {
    pub fn new(config: FilterConfig) -> Result<Self> {
        config.validate()?;
        let dictionary = get_or_build_trie(&config.words);
        debug!(
            "TrieEngine ready with {} dictionary words.",
            dictionary.word_count()
        );
        Ok(Self { dictionary, config })
    }

    /// An engine over an empty dictionary; filtering passes everything
    /// through unchanged. This is the degraded mode used when the bundled
    /// word list cannot be loaded.
    pub fn passthrough() -> Self {
        Self {
            dictionary: Arc::new(Trie::new()),
            config: FilterConfig::default(),
        }
    }

    /// The single-pass scan shared by `filter`, `scan` and `analyze`.
    ///
    /// Walks `content` with three pieces of local state: `begin` (start of
    /// the current candidate window), `position` (character under
    /// examination) and a trie cursor holding the node reached by the
    /// window's non-skippable characters. Greedy from each start position:
    /// the earliest `begin` wins, and from that `begin` the first word-end
    /// node reached wins. When `output` is given, masked text is written
    /// into it; matches are collected either way.
    fn walk(&self, content: &str, mut output: Option<&mut String>) -> Vec<FilterMatch> {
        let chars: Vec<char> = content.chars().collect();
        let mut matches = Vec::new();

        let root = self.dictionary.root();
        let mut node = root;
        let mut begin = 0usize;
        let mut position = 0usize;

        while position < chars.len() {
            let c = chars[position];

            if is_skippable(c) {
                if std::ptr::eq(node, root) {
                    // No candidate in progress: the symbol goes straight out.
                    if let Some(out) = output.as_mut() {
                        out.push(c);
                    }
                    begin += 1;
                } // Otherwise it is absorbed into the candidate window.
                position += 1;
                continue;
            }

            match node.child(c) {
                None => {
                    // No dictionary word starts with the window's first
                    // character: emit it and rescan from the next position.
                    if let Some(out) = output.as_mut() {
                        out.push(chars[begin]);
                    }
                    begin += 1;
                    position = begin;
                    node = root;
                }
                Some(next) if next.is_word_end() => {
                    // chars[begin..=position] spells a dictionary word,
                    // inclusive of any symbols absorbed inside the span.
                    if let Some(out) = output.as_mut() {
                        out.push_str(&self.config.mask_token);
                    }
                    matches.push(FilterMatch {
                        original_string: chars[begin..=position].iter().collect(),
                        masked_string: self.config.mask_token.clone(),
                        start: begin,
                        end: position + 1,
                    });
                    position += 1;
                    begin = position;
                    node = root;
                }
                Some(next) => {
                    // Valid prefix of a longer word; keep extending.
                    node = next;
                    position += 1;
                }
            }
        }

        // A candidate that never completed is copied out verbatim.
        if let Some(out) = output.as_mut() {
            out.extend(chars[begin..].iter());
        }

        matches
    }
}

impl FilterEngine for TrieEngine {
    fn filter(&self, content: &str) -> String {
        if content.is_empty() || self.dictionary.is_empty() {
            return content.to_string();
        }
        let mut output = String::with_capacity(content.len());
        self.walk(content, Some(&mut output));
        output
    }

    fn scan(&self, content: &str) -> Vec<FilterMatch> {
        self.walk(content, None)
    }

    fn analyze(&self, content: &str) -> FilterSummary {
        FilterSummary::from_matches(&self.scan(content))
    }

    fn dictionary(&self) -> &Trie {
        &self.dictionary
    }

    fn config(&self) -> &FilterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(words: &[&str]) -> TrieEngine {
        TrieEngine::new(FilterConfig::from_words(words)).unwrap()
    }

    #[test]
    fn restarts_after_a_false_prefix() {
        // "ba" dead-ends, is re-emitted one character at a time, and the
        // scan still finds the later occurrence.
        let engine = engine(&["bad"]);
        assert_eq!(engine.filter("babad"), "ba***");
    }

    #[test]
    fn scan_reports_spans_in_character_offsets() {
        let engine = engine(&["bad"]);
        let matches = engine.scan("x b*a*d y");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].original_string, "b*a*d");
        assert_eq!(matches[0].masked_string, "***");
        assert_eq!(matches[0].start, 2);
        assert_eq!(matches[0].end, 7);
    }

    #[test]
    fn analyze_counts_without_rewriting() {
        let engine = engine(&["赌博", "嫖娼"]);
        let summary = engine.analyze("今天赌博，明天嫖娼");
        assert_eq!(summary.occurrences, 2);
        assert_eq!(summary.original_texts, vec!["赌博", "嫖娼"]);
    }

    #[test]
    fn passthrough_engine_matches_nothing() {
        let engine = TrieEngine::passthrough();
        assert!(engine.dictionary().is_empty());
        assert_eq!(engine.filter("anything at all"), "anything at all");
        assert!(engine.scan("anything at all").is_empty());
    }

    #[test]
    fn custom_mask_token_is_used() {
        let config = FilterConfig {
            mask_token: "[x]".to_string(),
            words: vec!["bad".to_string()],
        };
        let engine = TrieEngine::new(config).unwrap();
        assert_eq!(engine.filter("bad day"), "[x] day");
    }
}
