#![forbid(unsafe_code)]
//! Android string resources from CSV localization tables.
//!
//! Reads a table of keys, per-language values and comments, and writes one
//! `values[-xx[-rYY]]/strings.xml` per language. Keys are normalized into valid
//! resource names, values are rewritten from iOS placeholder syntax into
//! Android positional format strings and escaped for XML.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use csvdroid::{ConvertOptions, Language, TableLayout, convert};
//!
//! let options = ConvertOptions::new()
//!     .with_output_dir("app/src/main/res")
//!     .with_layout(
//!         TableLayout::new()
//!             .with_comments_column(Some("Comment".to_string()))
//!             .with_default_column(Some("English".to_string()))
//!             .with_language("English", Language::default_language())
//!             .with_language("French", "fr".parse()?),
//!     );
//! convert("translations.csv", options)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The sanitizers and emitters are also usable on their own:
//!
//! ```rust
//! use csvdroid::{sanitize_key, sanitize_value};
//!
//! assert_eq!(sanitize_key("Continue"), "_continue");
//! assert_eq!(sanitize_value("%1$@ and %2@"), "%1$s and %2$s");
//! ```

pub mod converter;
pub mod error;
pub mod formats;
pub mod options;
pub mod paths;
pub mod sanitize;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    converter::{Converter, RenderedFile, convert},
    error::Error,
    formats::{AndroidStrings, CsvTable, format_document, format_row},
    options::{ConvertOptions, LanguageColumn, TableLayout},
    paths::language_filepath,
    sanitize::{sanitize_key, sanitize_value},
    types::{CommentIndex, Language, LanguageRecords, LocalizationTable, Record},
};
