//! Output file location for each language.

use std::path::{Path, PathBuf};

use crate::types::Language;

/// File name used when no basename is configured.
pub const DEFAULT_FILE_NAME: &str = "strings.xml";

/// `strings.xml`, or `<basename>.xml` when a non-empty basename is given.
pub fn output_file_name(basename: Option<&str>) -> String {
    match basename.map(str::trim).filter(|b| !b.is_empty()) {
        Some(name) if name.ends_with(".xml") => name.to_string(),
        Some(name) => format!("{}.xml", name),
        None => DEFAULT_FILE_NAME.to_string(),
    }
}

/// Resolves `<root>/values[-<code>[-r<REGION>]]/<file name>`.
///
/// ```rust
/// use std::path::Path;
/// use csvdroid::{Language, language_filepath};
///
/// let fr_ca = Language::new("fr", Some("CA".to_string()));
/// assert_eq!(
///     language_filepath(Path::new("/out"), &fr_ca, None),
///     Path::new("/out/values-fr-rCA/strings.xml"),
/// );
/// ```
pub fn language_filepath(root: &Path, language: &Language, basename: Option<&str>) -> PathBuf {
    root.join(language.qualifier())
        .join(output_file_name(basename))
}
