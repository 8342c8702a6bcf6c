// src/csv.rs
use std::io::{self, Write};

use crate::model::ElementDescriptor;

pub const HEADERS: [&str; 7] = ["Type", "XPath", "Text", "ID", "Class", "Placeholder", "Alt"];

/* ---------------- Writing ---------------- */

// Every field after Type is wrapped in quotes. Embedded quotes are written
// as-is, so a path like //a[@href="/x"] does not survive a CSV round-trip.
fn quoted(field: &str) -> String {
    format!("\"{}\"", field)
}

fn opt(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

/// Cells of one export row, in `HEADERS` order.
pub fn row_cells(d: &ElementDescriptor) -> [String; 7] {
    [
        s!(d.kind.as_str()),
        quoted(&d.xpath),
        quoted(opt(&d.text)),
        quoted(opt(&d.id)),
        quoted(opt(&d.class)),
        quoted(opt(&d.placeholder)),
        quoted(opt(&d.alt)),
    ]
}

/// Write a single row (no line terminator).
pub fn write_row<W: Write>(mut w: W, d: &ElementDescriptor) -> io::Result<()> {
    write!(w, "{}", row_cells(d).join(","))
}

/// Header line, then one `\n`-separated line per descriptor. No trailing newline.
pub fn write_csv<'a, W, I>(mut w: W, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a ElementDescriptor>,
{
    write!(w, "{}", HEADERS.join(","))?;
    for d in items {
        writeln!(w)?;
        write_row(&mut w, d)?;
    }
    Ok(())
}

/// Full export string for Download / `--out`.
pub fn to_csv<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a ElementDescriptor>,
{
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_csv(&mut buf, items);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- Clipboard text ---------------- */

/// One path per line, no trailing newline.
pub fn paths_text<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a ElementDescriptor>,
{
    items
        .into_iter()
        .map(|d| d.xpath.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind::*;

    #[test]
    fn empty_list_is_header_only() {
        let none: Vec<ElementDescriptor> = Vec::new();
        assert_eq!(to_csv(&none), "Type,XPath,Text,ID,Class,Placeholder,Alt");
    }

    #[test]
    fn bare_descriptor_gets_empty_quoted_optionals() {
        let d = ElementDescriptor::new(Nav, "//nav");
        assert_eq!(to_csv([&d]), "Type,XPath,Text,ID,Class,Placeholder,Alt\nnav,\"//nav\",\"\",\"\",\"\",\"\",\"\"");
    }

    #[test]
    fn embedded_quotes_are_not_escaped() {
        let d = ElementDescriptor::new(Link, r#"//a[@href="/login"]"#).with_text("Login");
        let mut buf = Vec::new();
        write_row(&mut buf, &d).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            r#"link,"//a[@href="/login"]","Login","","","","""#
        );
    }

    #[test]
    fn paths_are_newline_joined() {
        let items = vec![
            ElementDescriptor::new(Button, "//b[1]"),
            ElementDescriptor::new(Button, "//b[2]"),
        ];
        assert_eq!(paths_text(&items), "//b[1]\n//b[2]");
        assert_eq!(paths_text(&items[..0]), "");
    }
}
