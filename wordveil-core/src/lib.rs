// wordveil-core/src/lib.rs
//! # Wordveil Core Library
//!
//! `wordveil-core` provides the fundamental, platform-independent logic for
//! sensitive-word filtering. It defines the dictionary trie data structure,
//! provides mechanisms for loading and merging word lists, and implements a
//! pluggable `FilterEngine` trait for applying the filtering logic.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of input text against a fixed dictionary, without concerns
//! for I/O or application-specific state management. Host applications (web
//! request handlers, comment pipelines) call in with a string and get a
//! string back.
//!
//! ## Modules
//!
//! * `config`: Defines `FilterConfig` for specifying the mask token and word list.
//! * `trie`: The dictionary trie, its builder, and the shared build cache.
//! * `symbols`: Classifies characters that pass through without participating in matching.
//! * `filter_match`: Defines data structures for detailed reporting of filter events.
//! * `engine`: Defines the `FilterEngine` trait, enabling a modular design.
//! * `engines`: Contains concrete implementations of the `FilterEngine` trait.
//! * `headless`: Convenience entry points, including the process-wide default engine.
//!
//! ## Public API
//!
//! The public API provides a cohesive set of types and functions for
//! configuring and running a filter engine. Key components are organized by
//! functionality:
//!
//! **Configuration & Word Lists**
//!
//! * [`FilterConfig`]: Manages the mask token and the dictionary word list.
//! * [`merge_words`]: Merges default and user-defined word lists.
//! * [`FilterConfig::load_word_file`]: Loads a newline-delimited word file.
//! * [`FilterConfig::load_default`]: Loads the bundled word list.
//!
//! **Filter Engine**
//!
//! * [`FilterEngine`]: A trait for pluggable filtering strategies.
//! * [`TrieEngine`]: The concrete implementation of `FilterEngine` that walks a dictionary trie.
//!
//! **Headless Mode**
//!
//! * [`filter`]: Filters text against the bundled dictionary via the shared default engine.
//! * [`headless_filter_string`]: A convenience function for a full, one-shot filtering.
//!
//! **Match Reporting**
//!
//! * [`FilterMatch`]: A detailed record of a single matched and masked span, including its location.
//! * [`FilterSummary`]: A summary of all matches found in one input.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordveil_core::{headless_filter_string, FilterConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Build a configuration from an explicit word list.
//!     let config = FilterConfig::from_words(["bad"]);
//!
//!     // 2. Prepare some content to filter. Punctuation inside a word is
//!     //    bridged transparently, so "b*a*d" still matches "bad".
//!     let input = "this is b*a*d, really";
//!
//!     // 3. Filter the content in a single, headless function call.
//!     let output = headless_filter_string(config, input)?;
//!     assert_eq!(output, "this is ***, really");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The library uses `anyhow::Error` for fallible construction paths and
//! defines the structured [`WordveilError`] enum for clearer error
//! reporting. Filtering itself is total: `filter` has no error outcomes for
//! any input string, and a failure to load the bundled dictionary degrades
//! the default engine to a pass-through instead of failing callers.
//!
//! ## Design Principles
//!
//! * **Pluggable Architecture:** The `FilterEngine` trait allows for
//!   different matching strategies to be swapped out seamlessly.
//! * **Stateless:** All per-call scan state is local to the call; the
//!   dictionary is built once and shared immutably, so one engine serves
//!   any number of concurrent callers without locks.
//! * **Testable:** Logic is easily unit-testable in isolation.
//! * **Extensible:** The design supports adding new engines with minimal
//!   changes to the core application logic.
//!
//! ---
//! License: MIT OR Apache-2.0

// All modules must be declared before they can be used.
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod filter_match;
pub mod headless;
pub mod symbols;
pub mod trie;

// Correctly re-exporting modules and types from their canonical locations.
// This ensures the public API is clean and well-defined.

/// Re-exports the public configuration types and functions for managing word lists.
pub use config::{merge_words, FilterConfig, DEFAULT_MASK_TOKEN};

/// Re-exports the custom error type for clear error reporting.
pub use errors::WordveilError;

/// Re-exports types related to the core filter engine trait.
pub use engine::FilterEngine;

/// Re-exports the concrete `TrieEngine` implementation from its location.
pub use engines::trie_engine::TrieEngine;

/// Re-exports types for detailed match reporting.
pub use filter_match::{FilterMatch, FilterSummary};

/// Re-exports the skippable-character classifier used by the scanner.
pub use symbols::is_skippable;

/// Re-exports the dictionary trie and its shared build cache.
pub use trie::{get_or_build_trie, Trie, TrieNode};

/// Re-exports entry points for one-shot and process-wide use.
pub use headless::{default_engine, filter, headless_filter_string};
