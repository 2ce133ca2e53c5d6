//! Source table and Android resource formats.
//!
//! [`csv`] reads the localization table; [`android_strings`] emits and reads
//! `strings.xml`.

pub mod android_strings;
pub mod csv;

// Reexporting the formats for easier access
pub use android_strings::{AndroidStrings, StringResource, format_document, format_row};
pub use csv::{CsvTable, process_value};
