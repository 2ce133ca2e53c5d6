//! CSV localization tables.
//!
//! A table has one header row naming its columns: a keys column, an optional
//! comments column and one column per language. [`CsvTable`] is the raw grid;
//! [`CsvTable::to_localization_table`] resolves it against a [`TableLayout`].

use std::{collections::HashSet, io::BufRead};

use crate::{
    error::Error,
    options::TableLayout,
    traits::Parser,
    types::{LanguageRecords, LocalizationTable, Record},
};

/// Raw CSV grid: trimmed header names plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of the column whose header is `header` (surrounding spaces ignored).
    pub fn column_index(&self, header: &str) -> Result<usize, Error> {
        let header = header.trim();
        self.headers
            .iter()
            .position(|h| h == header)
            .ok_or_else(|| Error::UnknownColumn(header.to_string()))
    }

    /// Resolves the grid into per-language record sets.
    ///
    /// Blank keys are skipped. Empty language cells fall back to the layout's
    /// default column, and every value goes through [`process_value`].
    pub fn to_localization_table(&self, layout: &TableLayout) -> Result<LocalizationTable, Error> {
        layout.validate()?;

        let keys = self.column_index(&layout.keys_column)?;
        let comments = layout
            .comments_column
            .as_deref()
            .map(|c| self.column_index(c))
            .transpose()?;
        let default = layout
            .default_column
            .as_deref()
            .map(|c| self.column_index(c))
            .transpose()?;
        let columns = layout
            .languages
            .iter()
            .map(|l| self.column_index(&l.column))
            .collect::<Result<Vec<_>, _>>()?;

        let mut languages: Vec<LanguageRecords> = layout
            .languages
            .iter()
            .map(|l| LanguageRecords {
                language: l.language.clone(),
                records: Vec::with_capacity(self.rows.len()),
            })
            .collect();

        let mut seen = HashSet::new();
        for row in &self.rows {
            let key = cell(row, keys).trim();
            if key.is_empty() {
                continue;
            }
            if !seen.insert(key) {
                tracing::warn!(key, "duplicate key in localization table");
            }

            let comment = comments
                .map(|i| cell(row, i).trim())
                .filter(|c| !c.is_empty());
            let fallback = default.map(|i| cell(row, i));

            for (records, &column) in languages.iter_mut().zip(&columns) {
                records.records.push(Record {
                    key: key.to_string(),
                    value: process_value(cell(row, column), fallback),
                    comment: comment.map(str::to_string),
                });
            }
        }

        Ok(LocalizationTable { languages })
    }
}

/// Missing trailing cells read as empty.
fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or_default()
}

/// Resolves a table cell into the value handed to the sanitizer.
///
/// Empty cells take `default_value`. Double quotes are escaped as `\"`, except
/// that a value wrapped in quotes keeps its outer pair.
pub fn process_value(row_value: &str, default_value: Option<&str>) -> String {
    let value = if row_value.is_empty() {
        default_value.unwrap_or_default()
    } else {
        row_value
    };

    let escaped = value.replace('"', "\\\"");
    if escaped.len() > 4 && escaped.starts_with("\\\"") && escaped.ends_with("\\\"") {
        format!("\"{}\"", &escaped[2..escaped.len() - 2])
    } else {
        escaped
    }
}

impl Parser for CsvTable {
    /// Parse from any reader. The first row is the header.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect::<Vec<_>>();
        if headers.iter().all(String::is_empty) {
            return Err(Error::DataMismatch(
                "localization table has no header row".to_string(),
            ));
        }

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(CsvTable { headers, rows })
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(writer);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
