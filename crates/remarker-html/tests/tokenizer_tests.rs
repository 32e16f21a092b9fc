//! Integration tests for the markup tokenizer.

use remarker_html::tokenizer::named_character_references::{is_legacy_entity, lookup_entity};
use remarker_html::{Attribute, HTMLTokenizer, Token};

/// Helper to tokenize a string and return the tokens
fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = HTMLTokenizer::new(input.to_string());
    tokenizer.run();
    tokenizer.into_tokens()
}

fn text(data: &str) -> Token {
    Token::Text {
        data: data.to_string(),
    }
}

#[test]
fn test_plain_text_is_one_token() {
    let tokens = tokenize("Hello");
    assert_eq!(tokens, vec![text("Hello"), Token::EndOfFile]);
}

#[test]
fn test_doctype_is_a_declaration() {
    let tokens = tokenize(r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN">"#);
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::Declaration { data } => assert!(data.starts_with("DOCTYPE HTML PUBLIC")),
        other => panic!("Expected Declaration token, got {other}"),
    }
}

#[test]
fn test_start_tag_lowercases_names() {
    let tokens = tokenize(r#"<TD TITLE="Name" Align=center nowrap>"#);
    assert_eq!(
        tokens[0],
        Token::StartTag {
            name: "td".to_string(),
            self_closing: false,
            attributes: vec![
                Attribute::new("title".to_string(), "Name".to_string()),
                Attribute::new("align".to_string(), "center".to_string()),
                Attribute::new("nowrap".to_string(), String::new()),
            ],
        }
    );
}

#[test]
fn test_single_quoted_attribute_and_self_closing() {
    let tokens = tokenize("<br class='x'/>");
    assert_eq!(
        tokens[0],
        Token::StartTag {
            name: "br".to_string(),
            self_closing: true,
            attributes: vec![Attribute::new("class".to_string(), "x".to_string())],
        }
    );
}

#[test]
fn test_duplicate_attributes_keep_first() {
    let tokens = tokenize(r#"<td title="Name" title="Other">"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes.len(), 1);
            assert_eq!(attributes[0].value, "Name");
        }
        other => panic!("Expected StartTag token, got {other}"),
    }
}

#[test]
fn test_end_tag() {
    let tokens = tokenize("</TR >");
    assert_eq!(
        tokens,
        vec![
            Token::EndTag {
                name: "tr".to_string()
            },
            Token::EndOfFile
        ]
    );
}

#[test]
fn test_comment() {
    let tokens = tokenize("a<!-- -- note -->b");
    assert_eq!(
        tokens,
        vec![
            text("a"),
            Token::Comment {
                data: " -- note ".to_string()
            },
            text("b"),
            Token::EndOfFile
        ]
    );
}

#[test]
fn test_escaped_entity_declaration_in_text() {
    let tokens = tokenize(r#"&lt;!ENTITY nbsp   CDATA "&amp;#160;" -- no-break space --&gt;"#);
    assert_eq!(
        tokens[0],
        text(r#"<!ENTITY nbsp   CDATA "&#160;" -- no-break space -->"#)
    );
}

#[test]
fn test_numeric_character_references() {
    let tokens = tokenize("&#65;&#x42;&#X43;&#0;&#1114112;");
    assert_eq!(tokens[0], text("ABC\u{FFFD}\u{FFFD}"));
}

#[test]
fn test_named_references_and_literal_ampersands() {
    let tokens = tokenize("&nbsp;&eacute; AT&amp;T &amp &unknown; & &#;");
    assert_eq!(
        tokens[0],
        text("\u{A0}\u{E9} AT&T & &unknown; & &#;")
    );
}

#[test]
fn test_references_in_attribute_values() {
    let tokens = tokenize(r#"<a href="?a=1&amp;b=2" title=x&lt;y>"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes[0].value, "?a=1&b=2");
            assert_eq!(attributes[1].value, "x<y");
        }
        other => panic!("Expected StartTag token, got {other}"),
    }
}

#[test]
fn test_script_content_is_raw_text() {
    let tokens = tokenize("<script>if (a < b) { x = '<td>'; }</SCRIPT>after");
    assert_eq!(
        tokens,
        vec![
            Token::StartTag {
                name: "script".to_string(),
                self_closing: false,
                attributes: Vec::new(),
            },
            text("if (a < b) { x = '<td>'; }"),
            Token::EndTag {
                name: "script".to_string()
            },
            text("after"),
            Token::EndOfFile
        ]
    );
}

#[test]
fn test_lone_less_than_stays_text() {
    let tokens = tokenize("a < b");
    assert_eq!(tokens, vec![text("a < b"), Token::EndOfFile]);
}

#[test]
fn test_unterminated_tag_is_dropped() {
    let tokens = tokenize("text<td title=\"Na");
    assert_eq!(tokens, vec![text("text"), Token::EndOfFile]);
}

#[test]
fn test_named_entity_table() {
    assert_eq!(lookup_entity("amp"), Some('&'));
    assert_eq!(lookup_entity("nbsp"), Some('\u{A0}'));
    assert_eq!(lookup_entity("yuml"), Some('\u{FF}'));
    assert_eq!(lookup_entity("AElig"), Some('\u{C6}'));
    assert_eq!(lookup_entity("mdash"), Some('\u{2014}'));
    assert_eq!(lookup_entity("notarealentity"), None);
    assert!(is_legacy_entity("lt"));
    assert!(!is_legacy_entity("nbsp"));
}
