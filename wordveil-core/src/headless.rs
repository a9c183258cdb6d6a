// wordveil-core/src/headless.rs

//! `headless.rs`
//! Convenience entry points for using the filter without managing engine
//! lifetimes. Provides a one-shot helper for explicit configurations and a
//! process-wide default engine built lazily from the bundled word list.

use anyhow::Result;
use log::error;
use once_cell::sync::Lazy;

use crate::config::FilterConfig;
use crate::engine::FilterEngine;
use crate::engines::trie_engine::TrieEngine;

/// The process-wide engine over the bundled dictionary.
///
/// Built on first use, which guarantees the dictionary is complete before
/// the first `filter` call can observe it. A load or validation failure is
/// logged and degrades the engine to a pass-through rather than failing
/// the caller's larger operation.
static DEFAULT_ENGINE: Lazy<TrieEngine> = Lazy::new(|| {
    let config = match FilterConfig::load_default() {
        Ok(config) => config,
        Err(e) => {
            error!(
                "Failed to load bundled word list: {:#}. Filtering degrades to pass-through.",
                e
            );
            return TrieEngine::passthrough();
        }
    };
    match TrieEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            error!(
                "Failed to build default filter engine: {:#}. Filtering degrades to pass-through.",
                e
            );
            TrieEngine::passthrough()
        }
    }
});

/// Filters `text` against the bundled dictionary.
///
/// This is the runtime entry point for host applications (request handlers,
/// comment pipelines): total, non-panicking, and safe to call concurrently
/// from any number of threads.
pub fn filter(text: &str) -> String {
    DEFAULT_ENGINE.filter(text)
}

/// Returns the shared default engine for callers that also need `scan` or
/// `analyze` against the bundled dictionary.
pub fn default_engine() -> &'static TrieEngine {
    &DEFAULT_ENGINE
}

/// Fully filters an input string against an explicit configuration.
/// This function is the primary entry point for one-shot, non-interactive use.
///
/// # Arguments
///
/// * `config` - The FilterConfig (mask token and word list) to filter with.
/// * `content` - The string to be filtered.
pub fn headless_filter_string(config: FilterConfig, content: &str) -> Result<String> {
    let engine = TrieEngine::new(config)?;
    Ok(engine.filter(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_filter_string() -> Result<()> {
        let config = FilterConfig::from_words(["fake", "spam"]);
        let content = "report fake news and s p a m here";
        let filtered = headless_filter_string(config, content)?;
        assert_eq!(filtered, "report *** news and *** here");
        Ok(())
    }

    #[test]
    fn test_default_engine_uses_bundled_dictionary() {
        // The bundled list is non-empty, and plain ASCII prose passes
        // through untouched.
        assert!(!default_engine().dictionary().is_empty());
        assert_eq!(filter("a perfectly ordinary comment"), "a perfectly ordinary comment");
    }
}
