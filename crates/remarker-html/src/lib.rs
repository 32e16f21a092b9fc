//! Markup reader for the W3C HTML 4.01 reference documents.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer**: tags with quoted, unquoted and bare attributes, comments,
//!   declarations, raw text for `<script>`/`<style>`, numeric and named
//!   character references
//! - **Tree builder**: stack of open elements, void elements, and the
//!   implied end tags of tables, lists and paragraphs
//!
//! # Not Implemented
//!
//! - The WHATWG insertion modes, foster parenting, adoption agency
//! - Any encoding other than UTF-8
//!
//! Both stages are lenient and never fail; whatever the input, a tree comes out.

/// Tree construction.
pub mod parser;
/// Tokenizer for converting input into tokens.
pub mod tokenizer;

pub use parser::{HTMLParser, print_tree};
pub use tokenizer::{Attribute, HTMLTokenizer, Token};

use remarker_dom::DomTree;

/// Tokenize and parse a whole document.
#[must_use]
pub fn parse_document(input: &str) -> DomTree {
    let mut tokenizer = HTMLTokenizer::new(input.to_string());
    tokenizer.run();
    HTMLParser::new(tokenizer.into_tokens()).run()
}
