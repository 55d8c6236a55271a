//! The standard substitution table.

use super::rule::Rule;

/// Built-in rules in priority order.
///
/// Order is load-bearing: when two rules complete a match of equal length
/// at the same position, the later registration wins, and the special-run
/// rule must stay last so every literal gets first refusal.
pub(crate) fn standard_rules() -> Vec<(&'static str, Rule)> {
    vec![
        // special characters
        ("lt", Rule::literal("&lt;", "<")),
        ("gt", Rule::literal("&gt;", ">")),
        ("amp", Rule::literal("&amp;", "&")),
        // quotation marks
        ("ldquo", Rule::literal("&#8220;", "\"`")),
        ("rdquo", Rule::literal("&#8221;", "`\"")),
        ("rsquo", Rule::quote_close("&#8217;", "`'")),
        ("lsquo", Rule::quote_open("&#8216;", "'`")),
        // character replacements
        ("copy", Rule::literal("&#169;", "(C)")),
        ("reg", Rule::literal("&#174;", "(R)")),
        ("trade", Rule::literal("&#8482;", "(TM)")),
        ("mdash", Rule::literal("&#8212;", "--")),
        ("spaced-mdash", Rule::literal("&#8201;&#8212;&#8201;", " -- ")),
        ("hellip", Rule::literal("&#8230;", "...")),
        ("rarr", Rule::literal("&#8594;", "->")),
        ("rArr", Rule::literal("&#8658;", "=>")),
        ("larr", Rule::literal("&#8592;", "<-")),
        ("lArr", Rule::literal("&#8656;", "<=")),
        // bare markup characters
        ("specials", Rule::SpecialRun),
    ]
}
