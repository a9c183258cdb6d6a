//! Configuration management for `wordveil-core`.
//!
//! This module defines the filter configuration (mask token plus dictionary
//! word list) and provides utilities for loading it from the bundled
//! resource, from plain newline-delimited word files, and from YAML, as
//! well as for merging user-supplied dictionaries with the defaults.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::WordveilError;

/// The token substituted for every confirmed dictionary match.
pub const DEFAULT_MASK_TOKEN: &str = "***";

/// Represents the top-level configuration for a filter engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// The replacement written in place of each matched span.
    pub mask_token: String,
    /// The dictionary of sensitive words, in the exact form they must
    /// match; no case folding or trimming is applied on their behalf.
    pub words: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            mask_token: DEFAULT_MASK_TOKEN.to_string(),
            words: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Builds a configuration from an in-memory word list with the default
    /// mask token.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            mask_token: DEFAULT_MASK_TOKEN.to_string(),
            words: words.into_iter().map(|w| w.as_ref().to_string()).collect(),
        }
    }

    /// Loads the bundled default word list from the embedded resource.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default word list from embedded resource...");
        let raw = include_str!("../config/sensitive_words.txt");
        let config = Self::from_word_lines(raw);
        debug!("Loaded {} default dictionary words.", config.words.len());
        Ok(config)
    }

    /// Loads a plain newline-delimited word file, one dictionary word per
    /// line. Blank lines are skipped, not an error.
    pub fn load_word_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading word list from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list file {}", path.display()))?;
        let config = Self::from_word_lines(&text);
        info!(
            "Loaded {} words from file {}.",
            config.words.len(),
            path.display()
        );
        Ok(config)
    }

    /// Loads a full filter configuration (mask token and word list) from a
    /// YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading filter config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: FilterConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        info!(
            "Loaded {} words from config {}.",
            config.words.len(),
            path.display()
        );
        Ok(config)
    }

    fn from_word_lines(raw: &str) -> Self {
        Self {
            mask_token: DEFAULT_MASK_TOKEN.to_string(),
            words: raw
                .lines()
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Validates configuration integrity.
    ///
    /// An empty mask token is rejected outright; empty or duplicate word
    /// entries are harmless at build time and only produce a warning.
    pub fn validate(&self) -> Result<()> {
        if self.mask_token.is_empty() {
            return Err(
                WordveilError::InvalidConfig("`mask_token` must not be empty.".to_string()).into(),
            );
        }

        let mut seen = HashSet::new();
        for word in &self.words {
            if word.is_empty() {
                warn!("Ignoring empty dictionary entry.");
            } else if !seen.insert(word.as_str()) {
                warn!("Duplicate dictionary entry: '{}'.", word);
            }
        }
        Ok(())
    }
}

/// Merges a user-supplied configuration with the defaults.
///
/// User words extend the default dictionary (duplicates collapse); the
/// user's mask token, when present, replaces the default one.
pub fn merge_words(
    default_config: FilterConfig,
    user_config: Option<FilterConfig>,
) -> FilterConfig {
    debug!(
        "merge_words called. Initial default word count: {}",
        default_config.words.len()
    );

    let mut mask_token = default_config.mask_token;
    let mut seen: HashSet<String> = HashSet::new();
    let mut words: Vec<String> = Vec::new();
    for word in default_config.words {
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user words.", user_cfg.words.len());
        for word in user_cfg.words {
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }
        mask_token = user_cfg.mask_token;
    }

    debug!("Final total words after merge: {}", words.len());
    FilterConfig { mask_token, words }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_lines_skip_blanks_without_trimming_content() {
        let config = FilterConfig::from_word_lines("bad\n\n  spaced  \n赌博\n");
        assert_eq!(config.words, vec!["bad", "  spaced  ", "赌博"]);
        assert_eq!(config.mask_token, DEFAULT_MASK_TOKEN);
    }

    #[test]
    fn empty_mask_token_fails_validation() {
        let config = FilterConfig {
            mask_token: String::new(),
            words: vec!["bad".to_string()],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn merge_prefers_user_mask_token_and_unions_words() {
        let default_config = FilterConfig::from_words(["bad", "worse"]);
        let user_config = FilterConfig {
            mask_token: "[MASKED]".to_string(),
            words: vec!["worse".to_string(), "worst".to_string()],
        };
        let merged = merge_words(default_config, Some(user_config));
        assert_eq!(merged.mask_token, "[MASKED]");
        assert_eq!(merged.words, vec!["bad", "worse", "worst"]);
    }
}
