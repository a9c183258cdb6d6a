// wordveil-core/src/symbols.rs
//! Character classification for the scanner.
//!
//! The dictionary alphabet is ASCII letters/digits plus the CJK range
//! U+2E80..=U+9FFF. Everything else is "skippable": copied through to the
//! output untouched, and bridged over transparently while a candidate match
//! is in progress, so that `b*a*d` still matches a dictionary entry `bad`.
//!
//! License: MIT OR APACHE 2.0

/// Lower bound of the CJK block treated as matchable text.
const CJK_RANGE_START: char = '\u{2E80}';
/// Upper bound of the CJK block treated as matchable text.
const CJK_RANGE_END: char = '\u{9FFF}';

/// Returns true if `c` takes no part in dictionary matching.
///
/// Skippable characters never advance or reset the trie cursor; they are
/// emitted verbatim when no match is in progress and absorbed into the
/// matched span otherwise. Pure and total over all `char`s.
pub fn is_skippable(c: char) -> bool {
    !c.is_ascii_alphanumeric() && !(CJK_RANGE_START..=CJK_RANGE_END).contains(&c)
}
