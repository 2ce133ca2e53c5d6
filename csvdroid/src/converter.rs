//! Table-to-resources conversion.
//!
//! [`Converter::render`] is pure: it maps a [`LocalizationTable`] to one
//! [`RenderedFile`] per language. [`Converter::write`] puts them on disk.

use std::{collections::HashMap, fs, path::Path, path::PathBuf};

use crate::{
    error::Error,
    formats::{AndroidStrings, CsvTable, android_strings::format_document},
    options::ConvertOptions,
    paths::language_filepath,
    sanitize::sanitize_key,
    traits::Parser,
    types::{Language, LanguageRecords, LocalizationTable},
};

/// The resource document for one language and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub language: Language,
    pub path: PathBuf,
    pub contents: String,
}

impl RenderedFile {
    /// An empty document means there is nothing to write.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Reads the rendered document back as `strings.xml`.
    pub fn parse(&self) -> Result<AndroidStrings, Error> {
        AndroidStrings::from_str(&self.contents)
    }
}

/// Renders and writes Android string resources.
#[derive(Debug, Clone)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Renders every language of `table`, in table order.
    pub fn render(&self, table: &LocalizationTable) -> Vec<RenderedFile> {
        table
            .languages
            .iter()
            .map(|records| self.render_language(records))
            .collect()
    }

    /// Renders a single language.
    pub fn render_language(&self, records: &LanguageRecords) -> RenderedFile {
        report_key_problems(records);

        let path = language_filepath(
            &self.options.output_dir,
            &records.language,
            self.options.output_basename.as_deref(),
        );
        let contents = format_document(&records.entries(), &records.comment_index());

        RenderedFile {
            language: records.language.clone(),
            path,
            contents,
        }
    }

    /// Writes every non-empty file, creating directories as needed.
    ///
    /// Returns the paths actually written.
    pub fn write(&self, files: &[RenderedFile]) -> Result<Vec<PathBuf>, Error> {
        let mut written = Vec::new();
        for file in files {
            if file.is_empty() {
                tracing::info!(language = %file.language, "no strings, nothing written");
                continue;
            }
            if let Some(parent) = file.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&file.path, &file.contents)?;
            tracing::info!(language = %file.language, path = %file.path.display(), "wrote strings");
            written.push(file.path.clone());
        }
        Ok(written)
    }

    /// Reads the CSV table at `input`, renders it and writes the results.
    pub fn convert_file<P: AsRef<Path>>(&self, input: P) -> Result<Vec<RenderedFile>, Error> {
        let table = CsvTable::read_from(input)?.to_localization_table(&self.options.layout)?;
        let files = self.render(&table);
        self.write(&files)?;
        Ok(files)
    }
}

/// Logs keys that sanitize to nothing or to the same resource name.
fn report_key_problems(records: &LanguageRecords) {
    let mut names: HashMap<String, &str> = HashMap::new();
    for record in &records.records {
        let name = sanitize_key(&record.key);
        if name.is_empty() {
            tracing::warn!(
                language = %records.language,
                key = %record.key,
                "key sanitizes to an empty resource name"
            );
            continue;
        }
        if let Some(previous) = names.insert(name.clone(), record.key.as_str()) {
            tracing::warn!(
                language = %records.language,
                name = %name,
                first = %previous,
                second = %record.key,
                "keys collide after sanitizing"
            );
        }
    }
}

/// Convenience wrapper: convert `input` with `options` and return the rendered files.
pub fn convert<P: AsRef<Path>>(
    input: P,
    options: ConvertOptions,
) -> Result<Vec<RenderedFile>, Error> {
    Converter::new(options).convert_file(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{options::TableLayout, types::Record};

    fn records(language: Language, rows: &[(&str, &str)]) -> LanguageRecords {
        LanguageRecords {
            language,
            records: rows.iter().map(|(k, v)| Record::new(*k, *v)).collect(),
        }
    }

    #[test]
    fn test_render_language_path_and_contents() {
        let converter = Converter::new(ConvertOptions::new().with_output_dir("/out"));
        let file = converter.render_language(&records(
            Language::new("fr", Some("CA".to_string())),
            &[("Hello", "Bonjour"), ("Bye", "Salut")],
        ));
        assert_eq!(file.path, PathBuf::from("/out/values-fr-rCA/strings.xml"));
        let parsed = file.parse().unwrap();
        assert_eq!(parsed.names().collect::<Vec<_>>(), vec!["hello", "bye"]);
    }

    #[test]
    fn test_render_language_with_basename() {
        let converter = Converter::new(
            ConvertOptions::new()
                .with_output_dir("/out")
                .with_output_basename(Some("app".to_string())),
        );
        let file = converter.render_language(&records(Language::default_language(), &[]));
        assert_eq!(file.path, PathBuf::from("/out/values/app.xml"));
        assert!(file.is_empty());
    }

    #[test]
    fn test_render_carries_comments() {
        let converter = Converter::new(ConvertOptions::new());
        let lang = LanguageRecords {
            language: Language::default_language(),
            records: vec![
                Record::new("title", "Title").with_comment("Screen title"),
                Record::new("secret", "x").with_comment("DONOTTRANSLATE"),
            ],
        };
        let file = converter.render_language(&lang);
        assert!(file.contents.contains("<!-- Screen title -->"));
        assert!(!file.contents.contains("secret"));
    }

    #[test]
    fn test_render_keeps_table_language_order() {
        let table = LocalizationTable {
            languages: vec![
                records(Language::new("de", None), &[("a", "A")]),
                records(Language::default_language(), &[("a", "A")]),
            ],
        };
        let layout = TableLayout::new();
        let files = Converter::new(ConvertOptions::new().with_layout(layout)).render(&table);
        assert_eq!(files[0].language, Language::new("de", None));
        assert!(files[1].language.is_default());
    }

    #[test]
    fn test_colliding_keys_are_still_emitted() {
        let converter = Converter::new(ConvertOptions::new());
        let file = converter.render_language(&records(
            Language::default_language(),
            &[("Sign-In", "Sign in"), ("sign in", "Sign in!")],
        ));
        assert_eq!(file.contents.matches("name=\"sign_in\"").count(), 2);
    }
}
