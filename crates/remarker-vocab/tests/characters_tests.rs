//! Character table extraction.

use remarker_common::warning::has_warned;
use remarker_vocab::{
    CharacterDefinition, DirectorySource, MemorySource, VocabError, parse_characters,
};

fn fixtures() -> DirectorySource {
    DirectorySource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

fn pre(declarations: &str) -> String {
    format!("<html><body><pre>\n{declarations}\n</pre></body></html>")
}

#[test]
fn test_fixture_characters() {
    let characters = parse_characters(&fixtures(), "characters.html").unwrap();
    assert_eq!(characters.len(), 19);
    assert_eq!(characters["nbsp"].value, '\u{A0}');
    assert_eq!(characters["yuml"].value, '\u{FF}');
    assert_eq!(characters["hellip"].value, '\u{2026}');
    assert_eq!(characters["euro"].value, '\u{20AC}');
    assert_eq!(characters["amp"].value, '&');
    assert_eq!(characters["lt"].value, '<');
}

#[test]
fn test_apos_is_always_present() {
    let source = MemorySource::new().with("empty.html", "<html><body></body></html>");
    let characters = parse_characters(&source, "empty.html").unwrap();
    assert_eq!(
        characters.get("apos"),
        Some(&CharacterDefinition::new("apos", '\''))
    );
    assert_eq!(characters.len(), 1);
}

#[test]
fn test_names_keep_their_case() {
    let characters = parse_characters(&fixtures(), "characters.html").unwrap();
    assert_eq!(characters["Agrave"].value, '\u{C0}');
    assert_eq!(characters["agrave"].value, '\u{E0}');
    assert_eq!(characters["AElig"].name, "AElig");
    assert!(!characters.contains_key("aelig"));
}

#[test]
fn test_table_is_sorted_by_name() {
    let characters = parse_characters(&fixtures(), "characters.html").unwrap();
    let names: Vec<&String> = characters.keys().collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    for (key, definition) in &characters {
        assert_eq!(key, &definition.name);
    }
}

#[test]
fn test_unescaped_declaration() {
    let source = MemorySource::new().with(
        "nbsp.html",
        &pre(r#"&lt;!ENTITY nbsp CDATA "&amp;#160;" -- no-break space --&gt;"#),
    );
    let characters = parse_characters(&source, "nbsp.html").unwrap();
    assert_eq!(characters["nbsp"].value, '\u{A0}');
}

#[test]
fn test_later_declaration_overwrites() {
    let source = MemorySource::new().with(
        "twice.html",
        &pre(
            r#"&lt;!ENTITY dagger CDATA "&amp;#8224;" --&gt;
&lt;!ENTITY dagger CDATA "&amp;#8225;" --&gt;"#,
        ),
    );
    let characters = parse_characters(&source, "twice.html").unwrap();
    assert_eq!(characters["dagger"].value, '\u{2021}');
}

#[test]
fn test_block_without_declarations_is_reported() {
    let source = MemorySource::new().with(
        "comment-only.html",
        &pre("&lt;!-- nothing declared here --&gt;"),
    );
    let characters = parse_characters(&source, "comment-only.html").unwrap();
    assert_eq!(characters.len(), 1);
    assert!(has_warned(
        "Characters",
        "<pre> block 0 of comment-only.html declares no entities"
    ));
}

#[test]
fn test_non_scalar_code_point_is_skipped() {
    let source = MemorySource::new().with(
        "surrogate.html",
        &pre(
            r#"&lt;!ENTITY bad CDATA "&amp;#55296;" --&gt;
&lt;!ENTITY good CDATA "&amp;#9824;" --&gt;"#,
        ),
    );
    let characters = parse_characters(&source, "surrogate.html").unwrap();
    assert!(!characters.contains_key("bad"));
    assert_eq!(characters["good"].value, '\u{2660}');
    assert!(has_warned(
        "Characters",
        "entity bad has no valid code point (55296)"
    ));
}

#[test]
fn test_missing_resource() {
    let error = parse_characters(&MemorySource::new(), "characters.html").unwrap_err();
    assert!(matches!(error, VocabError::Resource { name, .. } if name == "characters.html"));
}
