//! Options for reading a localization table and writing Android resources.
//!
//! All types deserialize with `serde`, so a front end can load them from a
//! config file and then override single fields with the builder methods.

use std::path::PathBuf;

use serde::Deserialize;

use crate::{error::Error, types::Language};

/// Header of the keys column when none is configured.
pub const DEFAULT_KEYS_COLUMN: &str = "Key";

/// Maps one table column to the language it is rendered as.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageColumn {
    /// Column header in the source table (e.g. "English").
    pub column: String,
    /// Target language (e.g. `default`, `fr`, `fr-CA`).
    pub language: Language,
}

impl LanguageColumn {
    pub fn new(column: impl Into<String>, language: Language) -> Self {
        Self {
            column: column.into(),
            language,
        }
    }
}

/// Where the keys, comments and translations live in the source table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    /// Header of the keys column.
    pub keys_column: String,
    /// Header of the translator comments column, if any.
    pub comments_column: Option<String>,
    /// Header of the column used when a language cell is empty.
    pub default_column: Option<String>,
    /// Language columns, rendered in this order.
    pub languages: Vec<LanguageColumn>,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            keys_column: DEFAULT_KEYS_COLUMN.to_string(),
            comments_column: None,
            default_column: None,
            languages: Vec::new(),
        }
    }
}

impl TableLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys_column(mut self, column: impl Into<String>) -> Self {
        self.keys_column = column.into();
        self
    }

    pub fn with_comments_column(mut self, column: Option<String>) -> Self {
        self.comments_column = column;
        self
    }

    pub fn with_default_column(mut self, column: Option<String>) -> Self {
        self.default_column = column;
        self
    }

    /// Appends a language column.
    pub fn with_language(mut self, column: impl Into<String>, language: Language) -> Self {
        self.languages.push(LanguageColumn::new(column, language));
        self
    }

    /// Checks the layout before any table is read.
    pub fn validate(&self) -> Result<(), Error> {
        if self.keys_column.trim().is_empty() {
            return Err(Error::validation_error("keys column header is empty"));
        }
        if self.languages.is_empty() {
            return Err(Error::validation_error("no language columns configured"));
        }
        for (i, lang) in self.languages.iter().enumerate() {
            if self.languages[..i].iter().any(|l| l.language == lang.language) {
                return Err(Error::validation_error(format!(
                    "language `{}` is configured more than once",
                    lang.language
                )));
            }
        }
        Ok(())
    }
}

/// Everything needed for one table-to-resources run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Root of the Android `res/` tree.
    pub output_dir: PathBuf,
    /// File name without `.xml`; `strings` when unset.
    pub output_basename: Option<String>,
    pub layout: TableLayout,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            output_basename: None,
            layout: TableLayout::default(),
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_output_basename(mut self, basename: Option<String>) -> Self {
        self.output_basename = basename;
        self
    }

    pub fn with_layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.layout.validate()
    }
}
