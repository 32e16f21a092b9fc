//! HTML 4.01 vocabulary tables.
//!
//! Reads the W3C reference pages (the entity declarations, the index of
//! elements and the index of attributes) and turns them into three sorted,
//! read-only maps:
//!
//! - [`CharacterTable`]: entity name to character;
//! - [`ElementTable`]: element name to case variants, inline and empty flags
//!   and DTD;
//! - [`AttributeTable`]: attribute name to value type and DTD per element.
//!
//! Documents come from a [`NodeSource`]. [`Vocabulary`] parses them once on
//! first use and can be shared between threads.

pub mod attributes;
pub mod cell;
pub mod characters;
pub mod dtd;
pub mod elements;
pub mod error;
pub mod source;
pub mod vocabulary;

pub use attributes::{
    AttributeDefinition, AttributeTable, AttributeType, Scope, WILDCARD, parse_attributes,
};
pub use cell::cell_value;
pub use characters::{CharacterDefinition, CharacterTable, parse_characters};
pub use dtd::Dtd;
pub use elements::{ElementDefinition, ElementTable, is_inline, parse_elements};
pub use error::VocabError;
pub use source::{DirectorySource, MemorySource, NodeSource, ResourceNames, Selection};
pub use vocabulary::{Tables, Vocabulary};
