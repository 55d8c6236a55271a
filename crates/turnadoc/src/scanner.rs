//! The transduction engine.
//!
//! Drives a character-by-character scan over the input, feeding each
//! character to every rule still eligible at the current restart point.
//! Completed matches compete by length — the longest wins, with later
//! registrations breaking ties — and a winner rewinds the cursor to the
//! end of its match so over-read characters get rescanned. Positions where
//! nothing matches flush their pending buffer through verbatim.

use turnadoc_core::{ActiveList, Entry};

use crate::context::ScanContext;
use crate::quotes::QuoteMark;
use crate::rules::{Feed, Matcher, Ruleset};
use crate::{Result, TurnadocError};

/// Scan `text`, applying the winning rule at every restart point.
///
/// Returns the rewritten text together with the curly-quote marks recorded
/// along the way, in creation order.
pub(crate) fn run(rules: &Ruleset, text: &str) -> Result<(String, Vec<QuoteMark>)> {
    let mut ctx = ScanContext::new(text);

    loop {
        ctx.reset_buffer();
        let mut active = rules.matchers();

        // Feed characters until every matcher has completed or dropped
        // out. Matchers that completed earlier are re-recorded each round
        // without being fed, so a longer match can still overtake them.
        let winner = loop {
            let fed = ctx.advance();
            let mut best: Option<Entry> = None;
            let mut extending = false;

            let mut cursor = active.cursor();
            while let Some(entry) = active.next_entry(&mut cursor) {
                match fed {
                    None => {
                        if active.get(entry).is_done(true) {
                            record(&mut active, &mut best, entry);
                        }
                    }
                    Some(c) => {
                        if active.get(entry).is_done(false) {
                            record(&mut active, &mut best, entry);
                            continue;
                        }
                        match active.get_mut(entry).feed(c, &ctx) {
                            Feed::NoMatch => active.remove(entry),
                            Feed::Done => record(&mut active, &mut best, entry),
                            Feed::More => extending = true,
                        }
                    }
                }
            }

            if !extending {
                break best;
            }
        };

        match winner {
            None => ctx.flush(),
            Some(entry) => {
                let matcher = active.get(entry);
                if matcher.len() == 0 {
                    return Err(TurnadocError::EmptyMatch(matcher.name().to_string()));
                }
                let piece = ctx.take_match(matcher.len());
                let replacement = matcher.produce(&piece);
                if let Some(open) = matcher.quote_mark() {
                    ctx.mark_quote(open);
                }
                ctx.emit(&replacement);
            }
        }

        if !ctx.has_next() {
            break;
        }
    }

    Ok(ctx.finish())
}

/// Record `entry` as the round's completed candidate.
///
/// The longer match wins; on equal length the later entry wins. The loser
/// leaves the active set, while the winner stays eligible to be beaten by
/// a longer match in a later round.
fn record(active: &mut ActiveList<Matcher<'_>>, best: &mut Option<Entry>, entry: Entry) {
    match *best {
        None => *best = Some(entry),
        Some(current) => {
            if active.get(current).len() > active.get(entry).len() {
                active.remove(entry);
            } else {
                active.remove(current);
                *best = Some(entry);
            }
        }
    }
}
