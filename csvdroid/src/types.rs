//! Core types for csvdroid.
//! Table readers produce these; the Android emitter consumes them.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use serde::Deserialize;
use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// Language code that stands for "no locale qualifier" (`res/values/`).
pub const DEFAULT_LANGUAGE_CODE: &str = "default";

/// One localization entry for a single language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Raw, human-authored key as it appears in the source table.
    pub key: String,

    /// Value for this record's language, with fallback already resolved.
    pub value: String,

    /// Optional comment for translators.
    pub comment: Option<String>,
}

impl Record {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Record {{ key: {}, value: {} }}", self.key, self.value)
    }
}

/// Target language and optional region of one output file.
///
/// The code `default` is a sentinel for the unqualified base resource directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Language {
    /// Lowercase language code (e.g. "en", "fr") or `default`.
    pub code: String,

    /// Uppercase region code (e.g. "CA"), if any.
    pub region: Option<String>,
}

impl Language {
    pub fn new(code: impl Into<String>, region: Option<String>) -> Self {
        Self {
            code: code.into(),
            region,
        }
    }

    /// The sentinel language written to `values/`.
    pub fn default_language() -> Self {
        Self::new(DEFAULT_LANGUAGE_CODE, None)
    }

    pub fn is_default(&self) -> bool {
        self.code == DEFAULT_LANGUAGE_CODE
    }

    /// Android resource directory name for this language.
    ///
    /// ```rust
    /// use csvdroid::Language;
    ///
    /// assert_eq!(Language::default_language().qualifier(), "values");
    /// assert_eq!(Language::new("fr", None).qualifier(), "values-fr");
    /// assert_eq!(Language::new("fr", Some("CA".into())).qualifier(), "values-fr-rCA");
    /// ```
    pub fn qualifier(&self) -> String {
        if self.is_default() {
            return "values".to_string();
        }
        match self.region.as_deref().filter(|r| !r.is_empty()) {
            Some(region) => format!("values-{}-r{}", self.code, region),
            None => format!("values-{}", self.code),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.code, region),
            None => write!(f, "{}", self.code),
        }
    }
}

/// Accepts `default`, `fr`, `fr-CA` and `fr_CA`.
///
/// Scripts and variants have no `values-xx-rYY` form and are rejected.
impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(DEFAULT_LANGUAGE_CODE) {
            return Ok(Language::default_language());
        }

        let langid: LanguageIdentifier = trimmed
            .replace('_', "-")
            .parse()
            .map_err(|_| Error::InvalidLanguage(s.to_string()))?;

        if langid.language.as_str() == "und"
            || langid.script.is_some()
            || langid.variants().next().is_some()
        {
            return Err(Error::InvalidLanguage(s.to_string()));
        }

        Ok(Language {
            code: langid.language.as_str().to_string(),
            region: langid.region.map(|region| region.as_str().to_string()),
        })
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Read-only lookup from raw key to translator comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentIndex {
    comments: HashMap<String, String>,
}

impl CommentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the non-empty comments of `records`, keyed by raw key.
    pub fn from_records(records: &[Record]) -> Self {
        records
            .iter()
            .filter_map(|r| r.comment.as_ref().map(|c| (r.key.clone(), c.clone())))
            .collect()
    }

    pub fn insert(&mut self, key: impl Into<String>, comment: impl Into<String>) {
        let comment = comment.into();
        if !comment.trim().is_empty() {
            self.comments.insert(key.into(), comment);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.comments.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

impl FromIterator<(String, String)> for CommentIndex {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut index = CommentIndex::new();
        for (key, comment) in iter {
            index.insert(key, comment);
        }
        index
    }
}

/// All records of one language, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRecords {
    pub language: Language,
    pub records: Vec<Record>,
}

impl LanguageRecords {
    /// `(key, value)` pairs in source order, borrowed from the records.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        self.records
            .iter()
            .map(|r| (r.key.as_str(), r.value.as_str()))
            .collect()
    }

    pub fn comment_index(&self) -> CommentIndex {
        CommentIndex::from_records(&self.records)
    }
}

/// A resolved localization table: one ordered record set per language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizationTable {
    pub languages: Vec<LanguageRecords>,
}

impl LocalizationTable {
    pub fn find_language(&self, language: &Language) -> Option<&LanguageRecords> {
        self.languages.iter().find(|l| &l.language == language)
    }
}
