//! Provides core data structures for reporting dictionary matches found
//! while scanning within the `wordveil-core` library.

use serde::{Deserialize, Serialize};

/// Represents a single instance of a matched dictionary word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterMatch {
    /// The matched span exactly as it appeared in the input, including any
    /// skippable characters absorbed inside it (so `b*a*d` is reported as
    /// `b*a*d`, not `bad`).
    pub original_string: String,
    /// The token written to the output in place of the span.
    pub masked_string: String,
    /// Offset of the first character of the span, counted in characters.
    pub start: usize,
    /// Offset one past the last character of the span.
    pub end: usize,
}

/// Aggregate view of every match found in one input, for callers that want
/// statistics without producing masked output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterSummary {
    pub occurrences: usize,
    pub original_texts: Vec<String>,
}

impl FilterSummary {
    pub fn from_matches(matches: &[FilterMatch]) -> Self {
        Self {
            occurrences: matches.len(),
            original_texts: matches.iter().map(|m| m.original_string.clone()).collect(),
        }
    }
}
