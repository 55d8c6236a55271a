//! Curly-quote disambiguation.
//!
//! A rendered right single quote reads the same whether the author typed
//! an apostrophe or closed a quotation, and the scanner only sees one
//! substitution at a time. This pass replays the quote marks recorded
//! during the scan, in creation order, and rewrites every closer that
//! cannot actually close anything into a literal apostrophe.

use crate::{Result, TurnadocError};

/// A curly-quote replacement recorded during the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QuoteMark {
    /// Byte offset of the two-character placeholder in the scanner output.
    pub pos: usize,
    /// Whether the mark opens a quotation.
    pub open: bool,
}

/// Width in bytes of every quote placeholder.
const MARK_WIDTH: usize = 2;

/// Rewrite close-quote placeholders that act as apostrophes.
///
/// A closer becomes an apostrophe when no quotation is open, or when a
/// following mark exists and opens a new quotation — a closer cannot end a
/// quote that another one is about to start. Only the final mark has no
/// follower; everything else looks one entry ahead. A closer downgraded
/// because of a following opener leaves the open quotation pending.
pub(crate) fn resolve_apostrophes(out: &str, marks: &[QuoteMark]) -> Result<String> {
    if marks.is_empty() {
        return Ok(out.to_string());
    }

    let mut result = String::with_capacity(out.len());
    let mut last_pos = 0;
    let mut pending_open = false;

    for (idx, mark) in marks.iter().enumerate() {
        if mark.pos < last_pos || mark.pos + MARK_WIDTH > out.len() {
            return Err(TurnadocError::QuoteMarkOutOfBounds {
                pos: mark.pos,
                len: out.len(),
            });
        }
        result.push_str(&out[last_pos..mark.pos]);
        last_pos = mark.pos;

        if mark.open {
            result.push_str(&out[last_pos..last_pos + MARK_WIDTH]);
            pending_open = true;
        } else {
            let next_opens = marks.get(idx + 1).is_some_and(|next| next.open);
            if !pending_open || next_opens {
                result.push('\'');
            } else {
                result.push_str(&out[last_pos..last_pos + MARK_WIDTH]);
                pending_open = false;
            }
        }
        last_pos += MARK_WIDTH;
    }

    result.push_str(&out[last_pos..]);
    Ok(result)
}
