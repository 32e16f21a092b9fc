//! Element table extraction.

use remarker_common::warning::has_warned;
use remarker_vocab::{DirectorySource, Dtd, MemorySource, VocabError, parse_elements};

fn fixtures() -> DirectorySource {
    DirectorySource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

/// A one-table document with a row per `(name, empty, dtd)`.
fn index(rows: &[(&str, &str, &str)]) -> String {
    let mut html = String::from("<table>\n<tr><th>Name<th>Start<th>End<th>Empty<th>Depr.<th>DTD<th>Description\n");
    for (name, empty, dtd) in rows {
        html.push_str(&format!(
            "<tr><td title=\"Name\">{name}<td>&nbsp;<td>&nbsp;<td title=\"Empty\">{empty}<td>&nbsp;<td title=\"DTD\">{dtd}<td>text\n"
        ));
    }
    html.push_str("</table>");
    html
}

#[test]
fn test_fixture_elements() {
    let elements = parse_elements(&fixtures(), "elements.html").unwrap();
    assert_eq!(elements.len(), 16);
    let names: Vec<&str> = elements.keys().map(String::as_str).collect();
    assert_eq!(&names[..4], ["a", "abbr", "applet", "area"]);
}

#[test]
fn test_br_is_empty_and_not_inline() {
    let elements = parse_elements(&fixtures(), "elements.html").unwrap();
    let br = &elements["br"];
    assert_eq!(br.lowercase, "br");
    assert_eq!(br.uppercase, "BR");
    assert!(br.empty);
    assert!(!br.inline);
    assert_eq!(br.dtd, Dtd::Strict);
}

#[test]
fn test_inline_flags() {
    let elements = parse_elements(&fixtures(), "elements.html").unwrap();
    for name in ["a", "abbr", "b", "button", "img", "span", "tt"] {
        assert!(elements[name].inline, "{name} should be inline");
    }
    for name in ["applet", "area", "div", "html", "script", "td"] {
        assert!(!elements[name].inline, "{name} should not be inline");
    }
}

#[test]
fn test_dtd_column() {
    let elements = parse_elements(&fixtures(), "elements.html").unwrap();
    assert_eq!(elements["applet"].dtd, Dtd::Loose);
    assert_eq!(elements["basefont"].dtd, Dtd::Loose);
    assert_eq!(elements["frame"].dtd, Dtd::Frameset);
    assert_eq!(elements["div"].dtd, Dtd::Strict);
}

#[test]
fn test_empty_column() {
    let elements = parse_elements(&fixtures(), "elements.html").unwrap();
    let empty: Vec<&str> = elements
        .values()
        .filter(|element| element.empty)
        .map(|element| element.uppercase.as_str())
        .collect();
    assert_eq!(empty, ["AREA", "BASEFONT", "BR", "FRAME", "IMG"]);
}

#[test]
fn test_header_rows_are_not_elements() {
    let elements = parse_elements(&fixtures(), "elements.html").unwrap();
    assert!(!elements.contains_key("name"));
}

#[test]
fn test_last_duplicate_wins() {
    let source = MemorySource::new().with(
        "dup.html",
        &index(&[("HR", "", ""), ("Q", "", ""), ("HR", "E", "L")]),
    );
    let elements = parse_elements(&source, "dup.html").unwrap();
    assert_eq!(elements.len(), 2);
    assert!(elements["hr"].empty);
    assert_eq!(elements["hr"].dtd, Dtd::Loose);
    assert!(has_warned(
        "Elements",
        "HR is listed more than once; keeping the last row"
    ));
}

#[test]
fn test_missing_inline_elements_are_reported() {
    let source = MemorySource::new().with("few.html", &index(&[("ABBR", "", "")]));
    let elements = parse_elements(&source, "few.html").unwrap();
    assert_eq!(elements.len(), 1);
    assert!(has_warned(
        "Elements",
        "inline element SAMP does not appear in few.html"
    ));
    assert!(!has_warned(
        "Elements",
        "inline element ABBR does not appear in few.html"
    ));
}

#[test]
fn test_short_row_is_fatal() {
    let source = MemorySource::new().with(
        "short.html",
        "<table><tr><td title=Name>P<td>&nbsp;<td>O</table>",
    );
    assert_eq!(
        parse_elements(&source, "short.html"),
        Err(VocabError::MissingCell { index: 3, found: 3 })
    );
}
