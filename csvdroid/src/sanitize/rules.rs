//! Ordered replacement tables and code point deny ranges.
//!
//! Every table is applied top to bottom. Several patterns are substrings of
//! others (`%@` vs `%1$@`, `**` vs `*`), so entries must stay in this order.

/// A literal substring rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

const fn rule(pattern: &'static str, replacement: &'static str) -> Replacement {
    Replacement {
        pattern,
        replacement,
    }
}

/// Applies `rules` in order, each one over the output of the previous.
pub fn apply_rules(input: &str, rules: &[Replacement]) -> String {
    rules.iter().fold(input.to_string(), |acc, r| {
        if acc.contains(r.pattern) {
            acc.replace(r.pattern, r.replacement)
        } else {
            acc
        }
    })
}

/// An inclusive range of code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointRange {
    pub start: char,
    pub end: char,
}

impl CodePointRange {
    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }
}

const fn range(start: char, end: char) -> CodePointRange {
    CodePointRange { start, end }
}

/// Removes every character that falls into one of `ranges`.
pub fn strip_ranges(input: &str, ranges: &[CodePointRange]) -> String {
    input
        .chars()
        .filter(|c| !ranges.iter().any(|r| r.contains(*c)))
        .collect()
}

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Separators that become underscores.
pub const KEY_SEPARATORS: &[Replacement] = &[
    rule(" ", "_"),
    rule("\u{a0}", "_"),
    rule("-", "_"),
    rule("**", "__"),
    rule("\\n", "_"),
];

/// Format specifiers that would otherwise leak into resource names.
pub const KEY_PLACEHOLDERS: &[Replacement] = &[
    rule("%d", "xyz"),
    rule("%@", "xyz"),
    rule("%1$@", "xyz"),
    rule("%1$d", "xyz"),
    rule("%1$s", "xyz"),
    rule("%1@", "xyz"),
    rule("%2$@", "xyz"),
    rule("%2$d", "xyz"),
    rule("%3$s", "xyz"),
    rule("%2@", "xyz"),
    rule("%3$@", "xyz"),
    rule("%3$d", "xyz"),
    rule("%3@", "xyz"),
    rule("@", "_at_"),
];

/// Punctuation and symbols dropped from keys.
pub const KEY_DELETIONS: &[Replacement] = &[
    rule(" ", ""),
    rule(".", ""),
    rule("'", ""),
    rule("!", ""),
    rule("?", ""),
    rule(",", ""),
    rule(":", ""),
    rule(";", ""),
    rule("+", ""),
    rule(">", ""),
    rule("<", ""),
    rule("&", ""),
    rule("[", ""),
    rule("]", ""),
    rule("(", ""),
    rule(")", ""),
    rule("/", ""),
    rule("\u{2026}", ""),
    rule("%%", ""),
    rule("*", ""),
    rule("\u{2019}", ""),
    rule("\u{201d}", ""),
    rule("\u{2013}", ""),
];

/// Keys that collide with keywords in generated `R.string` code.
pub const RESERVED_KEYS: &[&str] = &["continue", "return", "new", "no"];

/// Emoji and pictographs removed from keys.
///
/// This is a fixed deny list, not every emoji block.
pub const EMOJI_RANGES: &[CodePointRange] = &[
    // symbols & pictographs
    range('\u{1f300}', '\u{1f5ff}'),
    // emoticons
    range('\u{1f600}', '\u{1f64f}'),
    // dingbats
    range('\u{2702}', '\u{27b0}'),
    // high voltage sign
    range('\u{26a1}', '\u{26a1}'),
    // variation selector-16
    range('\u{fe0f}', '\u{fe0f}'),
    // cup with straw
    range('\u{1f964}', '\u{1f965}'),
];

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// Apostrophes must be backslash-escaped in Android string resources.
pub const VALUE_QUOTES: &[Replacement] = &[rule("'", "\\'")];

/// iOS object placeholders to Android positional strings. Numbered forms first.
pub const VALUE_PLACEHOLDERS: &[Replacement] = &[
    rule("%1$@", "%1$s"),
    rule("%1@", "%1$s"),
    rule("%2$@", "%2$s"),
    rule("%2@", "%2$s"),
    rule("%3$@", "%3$s"),
    rule("%3@", "%3$s"),
    rule("%@", "%1$s"),
];

/// XML entity escaping. `&` goes first so produced entities are not re-escaped.
pub const VALUE_ENTITIES: &[Replacement] = &[
    rule("&", "&amp;"),
    rule("<", "&lt;"),
    rule(">", "&gt;"),
];

/// Control characters left behind by the authoring tool.
pub const VALUE_CONTROL_CHARS: &[Replacement] = &[rule("\u{3}", ""), rule("\u{13}", "")];

/// Typographic normalization.
pub const VALUE_TYPOGRAPHY: &[Replacement] = &[
    rule("\u{a0}", " "),
    rule("...", "\u{2026}"),
    rule("**", "\\\""),
    rule("\u{201d}", "\\\""),
];

/// The value pipeline, stage by stage. Percent handling runs after it.
pub const VALUE_STAGES: &[&[Replacement]] = &[
    VALUE_QUOTES,
    VALUE_PLACEHOLDERS,
    VALUE_ENTITIES,
    VALUE_CONTROL_CHARS,
    VALUE_TYPOGRAPHY,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_rules_is_sequential() {
        let rules = [rule("ab", "b"), rule("bb", "c")];
        // "abb" -> "bb" -> "c": the second rule sees the first one's output.
        assert_eq!(apply_rules("abb", &rules), "c");
    }

    #[test]
    fn test_numbered_placeholders_precede_unnumbered() {
        let first_unnumbered = VALUE_PLACEHOLDERS
            .iter()
            .position(|r| r.pattern == "%@")
            .unwrap();
        assert_eq!(first_unnumbered, VALUE_PLACEHOLDERS.len() - 1);
    }

    #[test]
    fn test_ampersand_escaped_before_other_entities() {
        assert_eq!(VALUE_ENTITIES[0].pattern, "&");
        assert_eq!(apply_rules("<&>", VALUE_ENTITIES), "&lt;&amp;&gt;");
    }

    #[test]
    fn test_double_asterisk_separator_precedes_asterisk_deletion() {
        let key = apply_rules("a**b*c", KEY_SEPARATORS);
        assert_eq!(apply_rules(&key, KEY_DELETIONS), "a__bc");
    }

    #[test]
    fn test_emoji_ranges_each_range() {
        let samples = [
            ('\u{1f300}', '\u{1f5ff}', '\u{1f389}'), // party popper
            ('\u{1f600}', '\u{1f64f}', '\u{1f600}'), // grinning face
            ('\u{2702}', '\u{27b0}', '\u{2705}'),    // check mark button
            ('\u{26a1}', '\u{26a1}', '\u{26a1}'),    // high voltage
            ('\u{fe0f}', '\u{fe0f}', '\u{fe0f}'),    // variation selector-16
            ('\u{1f964}', '\u{1f965}', '\u{1f964}'), // cup with straw
        ];
        for (range, (start, end, sample)) in EMOJI_RANGES.iter().zip(samples) {
            assert_eq!(range.start, start);
            assert_eq!(range.end, end);
            assert!(range.contains(sample));
            assert_eq!(strip_ranges(&format!("a{sample}b"), EMOJI_RANGES), "ab");
        }
    }

    #[test]
    fn test_emoji_ranges_leave_other_emoji_blocks() {
        // Rocket, sun, hugging face, and the neighbours of the cup-with-straw pair.
        for kept in ['\u{1f680}', '\u{2600}', '\u{1f917}', '\u{1f963}', '\u{1f966}'] {
            let s = kept.to_string();
            assert_eq!(strip_ranges(&s, EMOJI_RANGES), s, "{kept} should be kept");
        }
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let r = range('\u{2702}', '\u{27b0}');
        assert!(r.contains('\u{2702}'));
        assert!(r.contains('\u{27b0}'));
        assert!(!r.contains('\u{2701}'));
        assert!(!r.contains('\u{27b1}'));
    }
}
