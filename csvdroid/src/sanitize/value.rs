//! Resource value sanitization.

use lazy_static::lazy_static;
use regex::Regex;

use super::rules::{VALUE_STAGES, apply_rules};

lazy_static! {
    static ref POSITIONAL_SPECIFIER: Regex = Regex::new(r"%\d\$[sd]").unwrap();
}

/// Rewrites a translated string into Android string-resource syntax.
///
/// Stages, in order: apostrophe escaping, iOS to Android placeholders, XML
/// entities, control character removal, typography, then percent handling.
///
/// ```rust
/// use csvdroid::sanitize_value;
///
/// assert_eq!(sanitize_value("%@ & %2$@"), "%1$s &amp; %2$s");
/// assert_eq!(sanitize_value("It's 100%% done"), "It\\'s 100% done");
/// ```
pub fn sanitize_value(raw: &str) -> String {
    let value = VALUE_STAGES
        .iter()
        .fold(raw.to_string(), |acc, stage| apply_rules(&acc, stage));
    disambiguate_percent(value)
}

/// Resolves `%%` depending on whether the string goes through positional formatting.
///
/// Formatted strings keep the escape as `\%%`; plain strings get a literal `%`.
/// The check runs on the placeholder-rewritten value, so `%@` counts as `%1$s`.
fn disambiguate_percent(value: String) -> String {
    if !value.contains("%%") {
        return value;
    }
    if POSITIONAL_SPECIFIER.is_match(&value) {
        value.replace("%%", r"\%%")
    } else {
        value.replace("%%", "%")
    }
}
