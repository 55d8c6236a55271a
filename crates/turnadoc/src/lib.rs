//! # turnadoc
//!
//! Reconstruct AsciiDoc source text from rendered output.
//!
//! An AsciiDoc renderer rewrites source markup into display text: special
//! characters become HTML entities, typographic shorthands become numeric
//! character references, straight quotes become curly ones. This crate
//! reverses that substitution layer for a single text fragment, producing
//! source markup that re-parses to an equivalent result.
//!
//! The caller is expected to walk its own document tree and hand each text
//! fragment to [`unescape`]; assembling block syntax, attribute lists, and
//! table layout around the results is out of scope here.
//!
//! ## Example
//!
//! ```rust
//! use turnadoc::unescape;
//!
//! let text = unescape("Tom &amp; Jerry&#8482; &#8212; isn&#8217;t it?").unwrap();
//! assert_eq!(text, "Tom & Jerry(TM) -- isn't it?");
//! ```
//!
//! ## Design
//!
//! The engine scans character by character, feeding every registered rule in
//! parallel and letting the longest completed match win. A run of bare
//! markup characters that would be re-interpreted on a round trip is wrapped
//! in `pass:[…]`. Curly close quotes are lexically identical whether the
//! author typed an apostrophe or closed a quotation, so a second pass over
//! the recorded quote marks settles each one after the scan. Unrecognized
//! character references are left as typed — AsciiDoc re-renders them as is.

mod context;
mod quotes;
mod rules;
mod scanner;
mod service;

pub use rules::{Rule, Ruleset};
pub use service::Unescaper;

use once_cell::sync::Lazy;

/// Error type for unescape operations.
///
/// Normal input never fails: every character either matches a rule or is
/// passed through literally. These variants flag defects in rule or
/// bookkeeping state and abort the conversion of the offending fragment.
#[derive(Debug, thiserror::Error)]
pub enum TurnadocError {
    /// A rule reported a completed match of length zero, which would stall
    /// the scan.
    #[error("rule `{0}` completed an empty match")]
    EmptyMatch(String),

    /// A recorded quote mark does not fit the accumulated output.
    #[error("quote mark at {pos} lies outside the output (length {len})")]
    QuoteMarkOutOfBounds { pos: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, TurnadocError>;

static DEFAULT_UNESCAPER: Lazy<Unescaper> = Lazy::new(Unescaper::new);

/// Reverse renderer substitutions in `text` using the standard rule table.
///
/// Accepts any input: the empty string maps to the empty string, and text
/// containing no substitutable sequences is returned unchanged.
pub fn unescape(text: &str) -> Result<String> {
    DEFAULT_UNESCAPER.unescape(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(unescape("").unwrap(), "");
    }

    #[test]
    fn test_clean_text_is_unchanged() {
        for text in [
            "The quick brown fox.",
            "two\nlines of text",
            "snake_case_name stays put",
            "a*b and 1*2 arithmetic",
            "h\u{e9}llo w\u{f6}rld \u{2014} na\u{ef}ve",
        ] {
            assert_eq!(unescape(text).unwrap(), text, "input: {:?}", text);
        }
    }

    #[test]
    fn test_crate_level_example() {
        let text = unescape("&lt;tag&gt; contents").unwrap();
        assert_eq!(text, "<tag> contents");
    }
}
