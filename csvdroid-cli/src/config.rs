//! Command-line arguments and the optional TOML config file they override.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use csvdroid::{ConvertOptions, Language, LanguageColumn};

use crate::validation::validate_language_code;

/// A `--lang` argument: `COLUMN=LANGUAGE`, or just `LANGUAGE` when the column
/// header is the language code itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageArg {
    pub column: String,
    pub language: Language,
}

impl FromStr for LanguageArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, code) = match s.rsplit_once('=') {
            Some((column, code)) => (column.trim(), code.trim()),
            None => (s.trim(), s.trim()),
        };
        if column.is_empty() {
            return Err(format!("Missing column name in `{}`", s));
        }
        Ok(LanguageArg {
            column: column.to_string(),
            language: validate_language_code(code)?,
        })
    }
}

/// Options shared by `convert` and `preview`.
#[derive(clap::Args, Debug, Clone)]
pub struct TableArgs {
    /// The CSV localization table to read
    #[arg(short, long)]
    pub input: PathBuf,

    /// Language column, as `COLUMN=LANGUAGE` (e.g. `English=default`, `French=fr-CA`); repeatable
    #[arg(short, long = "lang")]
    pub langs: Vec<LanguageArg>,

    /// Header of the keys column (default: `Key`)
    #[arg(long)]
    pub keys: Option<String>,

    /// Header of the translator comments column
    #[arg(long)]
    pub comments: Option<String>,

    /// Header of the column used when a language cell is empty
    #[arg(long)]
    pub default: Option<String>,

    /// Root of the Android `res/` directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output file name without `.xml` (default: `strings`)
    #[arg(long)]
    pub basename: Option<String>,

    /// TOML file with default options; command-line flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl TableArgs {
    /// Builds the effective options: config file first, then flags on top.
    pub fn to_options(&self) -> Result<ConvertOptions, String> {
        let mut options = match &self.config {
            Some(path) => load_config(path)?,
            None => ConvertOptions::default(),
        };

        if let Some(output_dir) = &self.output_dir {
            options.output_dir = output_dir.clone();
        }
        if self.basename.is_some() {
            options.output_basename = self.basename.clone();
        }
        if let Some(keys) = &self.keys {
            options.layout.keys_column = keys.clone();
        }
        if self.comments.is_some() {
            options.layout.comments_column = self.comments.clone();
        }
        if self.default.is_some() {
            options.layout.default_column = self.default.clone();
        }
        if !self.langs.is_empty() {
            options.layout.languages = self
                .langs
                .iter()
                .map(|l| LanguageColumn::new(l.column.clone(), l.language.clone()))
                .collect();
        }

        Ok(options)
    }
}

/// Reads [`ConvertOptions`] from a TOML file.
///
/// ```toml
/// output_dir = "app/src/main/res"
///
/// [layout]
/// comments_column = "Comment"
/// default_column = "English"
///
/// [[layout.languages]]
/// column = "English"
/// language = "default"
/// ```
pub fn load_config(path: &Path) -> Result<ConvertOptions, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
    toml::from_str(&content).map_err(|e| format!("Invalid config {}: {}", path.display(), e))
}
