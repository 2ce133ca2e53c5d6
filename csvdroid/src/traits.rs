//! Reading and writing traits shared by the table and resource formats.

use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use encoding_rs_io::DecodeReaderBytesBuilder;

use crate::error::Error;

/// A trait for formats that can be read from and written to a single file.
///
/// # Example
///
/// ```rust,no_run
/// use csvdroid::traits::Parser;
/// use csvdroid::formats::AndroidStrings;
///
/// let strings = AndroidStrings::read_from("res/values/strings.xml")?;
/// strings.write_to("res/values-fr/strings.xml")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path.
    ///
    /// The file is decoded BOM-aware: UTF-16 spreadsheet exports and UTF-8 files
    /// with or without a BOM all reach [`Parser::from_reader`] as UTF-8.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let decoder = DecodeReaderBytesBuilder::new()
            .encoding(Some(encoding_rs::UTF_8))
            .bom_override(true)
            .strip_bom(true)
            .build(file);
        Self::from_reader(BufReader::new(decoder))
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to file path, creating missing parent directories.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush().map_err(Error::Io)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }
}
