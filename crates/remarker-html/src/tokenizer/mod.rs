//! Markup tokenizer module.
//!
//! Loosely follows [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization),
//! trimmed down to what HTML 4 reference pages need.

/// Character reference decoding.
pub mod character_reference;
/// Tokenizer state machine implementation.
pub mod core;
/// Helper methods for tokenizer state transitions and emission.
pub mod helpers;
/// Named character reference lookup table.
pub mod named_character_references;
/// Token types produced by the tokenizer.
pub mod token;

pub use self::core::{HTMLTokenizer, TokenizerState};
pub use token::{Attribute, Token};
