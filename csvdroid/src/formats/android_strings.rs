//! Android `strings.xml` emission and read-back.
//!
//! [`format_row`] and [`format_document`] produce the exact text written to
//! disk. [`AndroidStrings`] reads such documents back through `quick-xml`, which
//! is how emitted output and existing resource files are inspected.

use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use rayon::prelude::*;
use std::io::{BufRead, Write};

use crate::{
    error::Error,
    sanitize::{sanitize_key, sanitize_value},
    traits::Parser,
    types::CommentIndex,
};

/// Comments containing this marker keep their row out of the output.
pub const DO_NOT_TRANSLATE_MARKER: &str = "DONOTTRANSLATE";

const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const INDENT: &str = "    ";

/// Formats one `<string>` element, or returns an empty string for excluded rows.
///
/// A row is excluded when its comment carries [`DO_NOT_TRANSLATE_MARKER`] or its
/// sanitized value is empty.
///
/// ```rust
/// use csvdroid::format_row;
///
/// assert_eq!(
///     format_row("Welcome", "Hi %@!", None),
///     "    <string name=\"welcome\">Hi %1$s!</string>\n",
/// );
/// assert_eq!(format_row("k", "v", Some("please DONOTTRANSLATE this")), "");
/// ```
pub fn format_row(key: &str, value: &str, comment: Option<&str>) -> String {
    if comment.is_some_and(|c| c.contains(DO_NOT_TRANSLATE_MARKER)) {
        tracing::debug!(key, "skipping row marked {}", DO_NOT_TRANSLATE_MARKER);
        return String::new();
    }

    let value = sanitize_value(value);
    if value.is_empty() {
        tracing::debug!(key, "skipping row with empty value");
        return String::new();
    }

    let mut row = String::new();
    if let Some(comment) = comment.map(sanitize_comment).filter(|c| !c.is_empty()) {
        row.push_str(&format!("\n{INDENT}<!-- {comment} -->\n"));
    }
    row.push_str(&format!(
        "{INDENT}<string name=\"{}\">{}</string>\n",
        sanitize_key(key),
        value
    ));
    row
}

/// Formats a complete `strings.xml` document from `(key, value)` pairs.
///
/// Rows keep the order of `records`. An empty record set yields an empty string,
/// meaning there is nothing to write.
pub fn format_document<K, V>(records: &[(K, V)], comments: &CommentIndex) -> String
where
    K: AsRef<str> + Sync,
    V: AsRef<str> + Sync,
{
    if records.is_empty() {
        return String::new();
    }

    // `collect` on an indexed parallel iterator keeps the input order.
    let rows: Vec<String> = records
        .par_iter()
        .map(|(key, value)| {
            let key = key.as_ref();
            format_row(key, value.as_ref(), comments.get(key))
        })
        .collect();

    let mut output = String::with_capacity(rows.iter().map(String::len).sum::<usize>() + 64);
    output.push_str(XML_PROLOG);
    output.push('\n');
    output.push_str("<resources>\n");
    for row in &rows {
        output.push_str(row);
    }
    output.push_str("</resources>\n");
    output
}

/// Trims comment text and breaks up `--`, which XML comments may not contain.
fn sanitize_comment(comment: &str) -> String {
    let mut text = comment.trim().to_string();
    while text.contains("--") {
        text = text.replace("--", "- -");
    }
    if text.ends_with('-') {
        text.push(' ');
    }
    text
}

/// A parsed `strings.xml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AndroidStrings {
    pub strings: Vec<StringResource>,
}

impl AndroidStrings {
    pub fn find(&self, name: &str) -> Option<&StringResource> {
        self.strings.iter().find(|s| s.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(|s| s.name.as_str())
    }
}

/// One `<string>` element. `value` holds the XML-unescaped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringResource {
    pub name: String,
    pub value: String,
    pub translatable: Option<bool>,
}

impl Parser for AndroidStrings {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);

        let mut buf = Vec::new();
        let mut strings = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) if e.name().as_ref() == b"string" => {
                    let (name, translatable) = parse_string_attributes(e)?;
                    let value = read_string_value(&mut xml_reader)?;
                    strings.push(StringResource {
                        name,
                        value,
                        translatable,
                    });
                }
                Ok(Event::Empty(ref e)) if e.name().as_ref() == b"string" => {
                    let (name, translatable) = parse_string_attributes(e)?;
                    strings.push(StringResource {
                        name,
                        value: String::new(),
                        translatable,
                    });
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::XmlParse(e)),
            }
            buf.clear();
        }
        Ok(AndroidStrings { strings })
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new(&mut writer);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

        xml_writer.write_event(Event::Start(BytesStart::new("resources")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

        for sr in &self.strings {
            let mut elem = BytesStart::new("string");
            elem.push_attribute(("name", sr.name.as_str()));
            if let Some(translatable) = sr.translatable {
                elem.push_attribute(("translatable", if translatable { "true" } else { "false" }));
            }

            xml_writer.write_event(Event::Text(BytesText::new(INDENT)))?;
            xml_writer.write_event(Event::Start(elem))?;
            xml_writer.write_event(Event::Text(BytesText::new(&sr.value)))?;
            xml_writer.write_event(Event::End(BytesEnd::new("string")))?;
            xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new("resources")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        Ok(())
    }
}

fn parse_string_attributes(e: &BytesStart) -> Result<(String, Option<bool>), Error> {
    let mut name = None;
    let mut translatable = None;

    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|e| Error::DataMismatch(e.to_string()))?;
        match attr.key.as_ref() {
            b"name" => name = Some(attr.unescape_value()?.to_string()),
            b"translatable" => {
                translatable = Some(attr.unescape_value()? == "true");
            }
            _ => {}
        }
    }
    let name =
        name.ok_or_else(|| Error::InvalidResource("string tag missing 'name'".to_string()))?;
    Ok((name, translatable))
}

/// Collects everything up to the matching `</string>`.
///
/// Text is unescaped and kept with its whitespace. Inline markup such as `<b>` or
/// `<xliff:g id="n">` is kept as tags so no text after it is lost.
fn read_string_value<R: BufRead>(xml_reader: &mut Reader<R>) -> Result<String, Error> {
    let mut buf = Vec::new();
    let mut value = String::new();
    let mut depth = 0usize;
    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => value.push_str(&e.unescape()?),
            Ok(Event::CData(e)) => value.push_str(&String::from_utf8_lossy(&e.into_inner())),
            Ok(Event::Start(e)) => {
                depth += 1;
                value.push('<');
                value.push_str(&String::from_utf8_lossy(&e));
                value.push('>');
            }
            Ok(Event::Empty(e)) => {
                value.push('<');
                value.push_str(&String::from_utf8_lossy(&e));
                value.push_str("/>");
            }
            Ok(Event::End(e)) => {
                if depth == 0 {
                    return Ok(value);
                }
                depth -= 1;
                value.push_str("</");
                value.push_str(&String::from_utf8_lossy(e.name().as_ref()));
                value.push('>');
            }
            Ok(Event::Eof) => return Err(Error::InvalidResource("Unexpected EOF".to_string())),
            Ok(_) => (),
            Err(e) => return Err(Error::XmlParse(e)),
        }
        buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_format_row_plain() {
        assert_eq!(
            format_row("Sign In", "Sign in", None),
            "    <string name=\"sign_in\">Sign in</string>\n"
        );
    }

    #[test]
    fn test_format_row_with_comment() {
        assert_eq!(
            format_row("greeting", "Hello", Some("Shown on launch")),
            "\n    <!-- Shown on launch -->\n    <string name=\"greeting\">Hello</string>\n"
        );
    }

    #[test]
    fn test_format_row_blank_comment_emits_no_block() {
        assert_eq!(
            format_row("greeting", "Hello", Some("  ")),
            "    <string name=\"greeting\">Hello</string>\n"
        );
    }

    #[test]
    fn test_format_row_do_not_translate() {
        assert_eq!(format_row("k", "v", Some("please DONOTTRANSLATE this")), "");
        assert_eq!(format_row("k", "v", Some("DONOTTRANSLATE")), "");
    }

    #[test]
    fn test_format_row_empty_value() {
        assert_eq!(format_row("k", "", None), "");
        // Only control characters: empty once sanitized.
        assert_eq!(format_row("k", "\u{3}\u{13}", None), "");
    }

    #[test]
    fn test_format_row_sanitizes_key_and_value() {
        assert_eq!(
            format_row("Items & %@", "%@ & co", None),
            "    <string name=\"items__xyz\">%1$s &amp; co</string>\n"
        );
    }

    #[test]
    fn test_comment_double_dash_is_broken_up() {
        assert_eq!(sanitize_comment("a -- b"), "a - - b");
        assert_eq!(sanitize_comment("a---b"), "a- - -b");
        assert_eq!(sanitize_comment("ends with -"), "ends with - ");
    }

    #[test]
    fn test_format_document_empty() {
        let records: Vec<(String, String)> = Vec::new();
        assert_eq!(format_document(&records, &CommentIndex::new()), "");
    }

    #[test]
    fn test_format_document_single_record() {
        let doc = format_document(&[("hello", "Hello")], &CommentIndex::new());
        assert_eq!(
            doc,
            indoc! {r#"
                <?xml version="1.0" encoding="utf-8"?>
                <resources>
                    <string name="hello">Hello</string>
                </resources>
            "#}
        );
        assert_eq!(doc.matches("<string ").count(), 1);
    }

    #[test]
    fn test_format_document_keeps_order_and_comments() {
        let mut comments = CommentIndex::new();
        comments.insert("Zebra", "Animal name");
        comments.insert("Hidden", "DONOTTRANSLATE");
        let records = [
            ("Zebra", "Zebra"),
            ("Hidden", "internal"),
            ("Apple", "Apple"),
            ("Empty", ""),
        ];
        let doc = format_document(&records, &comments);
        assert_eq!(
            doc,
            indoc! {r#"
                <?xml version="1.0" encoding="utf-8"?>
                <resources>

                    <!-- Animal name -->
                    <string name="zebra">Zebra</string>
                    <string name="apple">Apple</string>
                </resources>
            "#}
        );
    }

    #[test]
    fn test_format_document_all_rows_excluded_keeps_frame() {
        let doc = format_document(&[("k", "")], &CommentIndex::new());
        assert_eq!(
            doc,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n</resources>\n"
        );
    }

    #[test]
    fn test_emitted_document_reads_back() {
        let mut comments = CommentIndex::new();
        comments.insert("greeting", "Say -- hi");
        let records = [
            ("greeting", "Hi <%@> & 'friends'"),
            ("new", "New"),
            ("progress", "%1$@ is 100%% done"),
        ];
        let doc = format_document(&records, &comments);
        let parsed = AndroidStrings::from_str(&doc).unwrap();
        assert_eq!(
            parsed.names().collect::<Vec<_>>(),
            vec!["greeting", "_new", "progress"]
        );
        assert_eq!(
            parsed.find("greeting").unwrap().value,
            r"Hi <%1$s> & \'friends\'"
        );
        assert_eq!(parsed.find("progress").unwrap().value, r"%1$s is 100\%% done");
    }

    #[test]
    fn test_parse_basic_strings_xml() {
        let xml = r#"
        <resources>
            <string name="hello">Hello</string>
            <string name="bye" translatable="false">Goodbye</string>
            <string name="empty"></string>
            <string name="self_closing"/>
        </resources>
        "#;
        let strings = AndroidStrings::from_str(xml).unwrap();
        assert_eq!(strings.strings.len(), 4);
        assert_eq!(strings.strings[0].value, "Hello");
        assert_eq!(strings.strings[0].translatable, None);
        assert_eq!(strings.strings[1].translatable, Some(false));
        assert_eq!(strings.strings[2].value, "");
        assert_eq!(strings.strings[3].name, "self_closing");
        assert_eq!(strings.strings[3].value, "");
    }

    #[test]
    fn test_parse_keeps_inline_markup_and_whitespace() {
        let xml = indoc! {r#"
            <resources>
                <string name="a">Hello <b>World</b> again</string>
                <string name="b"> padded </string>
                <string name="c">Tap <xliff:g id="count">%1$d</xliff:g> times<br/>now</string>
                <string name="d"><![CDATA[<i>raw</i>]]> &amp; more</string>
            </resources>
        "#};
        let strings = AndroidStrings::from_str(xml).unwrap();
        assert_eq!(strings.names().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
        assert_eq!(strings.find("a").unwrap().value, "Hello <b>World</b> again");
        assert_eq!(strings.find("b").unwrap().value, " padded ");
        assert_eq!(
            strings.find("c").unwrap().value,
            r#"Tap <xliff:g id="count">%1$d</xliff:g> times<br/>now"#
        );
        assert_eq!(strings.find("d").unwrap().value, "<i>raw</i> & more");
    }

    #[test]
    fn test_unclosed_string_is_an_error() {
        let xml = r#"<resources><string name="a">Hello <b>World</b>"#;
        assert!(AndroidStrings::from_str(xml).is_err());
    }

    #[test]
    fn test_missing_name_attribute() {
        let xml = "<resources><string>No name attr</string></resources>";
        let result = AndroidStrings::from_str(xml);
        let err = format!("{:?}", result.unwrap_err());
        assert!(err.contains("missing 'name'"));
    }

    #[test]
    fn test_writer_round_trip() {
        let strings = AndroidStrings {
            strings: vec![
                StringResource {
                    name: "greet".to_string(),
                    value: "Tom & Jerry".to_string(),
                    translatable: None,
                },
                StringResource {
                    name: "brand".to_string(),
                    value: "Acme".to_string(),
                    translatable: Some(false),
                },
            ],
        };
        let mut out = Vec::new();
        strings.to_writer(&mut out).unwrap();
        let reparsed = AndroidStrings::from_str(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(reparsed, strings);
    }
}
