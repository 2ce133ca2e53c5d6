//! Resource name sanitization.

use super::rules::{
    EMOJI_RANGES, KEY_DELETIONS, KEY_PLACEHOLDERS, KEY_SEPARATORS, RESERVED_KEYS, apply_rules,
    strip_ranges,
};

/// Turns a human-authored label into an Android resource name.
///
/// Total and deterministic. The result only contains `[a-z0-9_]`, never starts
/// with a digit and is never a reserved word. It may be empty when the label has
/// nothing usable in it, which callers should treat as bad source data.
///
/// ```rust
/// use csvdroid::sanitize_key;
///
/// assert_eq!(sanitize_key("Hello World!"), "hello_world");
/// assert_eq!(sanitize_key("%@ liked your post"), "xyz_liked_your_post");
/// assert_eq!(sanitize_key("new"), "_new");
/// ```
pub fn sanitize_key(raw: &str) -> String {
    let key = raw.to_lowercase();
    let key = apply_rules(&key, KEY_SEPARATORS);
    let key = apply_rules(&key, KEY_PLACEHOLDERS);
    let key = apply_rules(&key, KEY_DELETIONS);
    let key = guard_leading(key);
    let key = strip_emoji(&key);

    // Anything the tables above do not know about (accents, `#`, `$`, tabs, ...).
    let key: String = key.chars().filter(is_identifier_char).collect();
    guard_leading(key)
}

/// Removes the emoji and pictograph ranges listed in [`EMOJI_RANGES`].
fn strip_emoji(text: &str) -> String {
    strip_ranges(text, EMOJI_RANGES)
}

fn guard_leading(key: String) -> String {
    let starts_with_digit = key.chars().next().is_some_and(|c| c.is_ascii_digit());
    if starts_with_digit || RESERVED_KEYS.contains(&key.as_str()) {
        format!("_{}", key)
    } else {
        key
    }
}

fn is_identifier_char(c: &char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'
}
