// wordveil-core/src/engine.rs
//! Defines the core FilterEngine trait and related data structures.
//!
//! The `FilterEngine` trait provides a pluggable interface for different
//! filtering strategies. This module defines the contract that all such
//! engines must adhere to, ensuring a consistent and interchangeable core
//! API for `wordveil`.
//!
//! License: MIT OR APACHE 2.0

// Publicly exposed types from other modules
use crate::config::FilterConfig;
use crate::filter_match::{FilterMatch, FilterSummary};
use crate::trie::Trie;

/// A trait that defines the core functionality of a word filter engine.
///
/// This trait decouples host applications (comment pipelines, request
/// handlers) from the specific matching strategy, allowing for different
/// engines to be used interchangeably.
pub trait FilterEngine: Send + Sync {
    /// Performs full filtering on the provided content.
    ///
    /// Returns a copy of `content` with every dictionary occurrence
    /// replaced by the configured mask token and all other characters
    /// preserved in their original order. Total over all inputs: an empty
    /// string, or one containing no dictionary words, comes back unchanged.
    /// Safe to call concurrently from any number of threads.
    fn filter(&self, content: &str) -> String;

    /// Finds every dictionary match in `content` without rewriting it.
    ///
    /// Each returned [`FilterMatch`] carries the original span (character
    /// offsets) and the replacement that `filter` would have written.
    fn scan(&self, content: &str) -> Vec<FilterMatch>;

    /// Summarizes the matches in `content` for statistics-only callers.
    /// The original content is not modified.
    fn analyze(&self, content: &str) -> FilterSummary;

    /// Returns a reference to the dictionary trie used by the engine.
    ///
    /// This is used by external components, such as a statistics command,
    /// to inspect the dictionary without rebuilding it.
    fn dictionary(&self) -> &Trie;

    /// Returns a reference to the engine's configuration.
    fn config(&self) -> &FilterConfig;
}
