//! Named character entities.
//!
//! The entity document lists its declarations inside `<pre>` blocks, as
//! escaped DTD text:
//!
//! ```text
//! <!ENTITY nbsp   CDATA "&#160;" -- no-break space = non-breaking space, U+00A0 ISOnum -->
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use remarker_common::warning::warn_once;
use serde::Serialize;

use crate::error::VocabError;
use crate::source::NodeSource;

/// Query selecting the declaration blocks.
pub const PRE_BLOCKS: &str = "//pre";

static ENTITY_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<!ENTITY ([A-Za-z0-9]+) +CDATA "&#([0-9]+);""#)
        .expect("entity declaration pattern is valid")
});

/// Name-to-character table, sorted by name.
pub type CharacterTable = BTreeMap<String, CharacterDefinition>;

/// One named character entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterDefinition {
    /// Entity name, case preserved (`Agrave` and `agrave` differ).
    pub name: String,
    /// The character it stands for.
    pub value: char,
}

impl CharacterDefinition {
    /// Create a definition.
    #[must_use]
    pub fn new(name: &str, value: char) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

/// Build the character table from the `<pre>` blocks of `resource`.
///
/// `apos` is always present: HTML 4 never declared it, but XML does and the
/// generated code needs it. Blocks that declare nothing are reported and
/// otherwise ignored.
///
/// # Errors
///
/// Fails only if the node source does.
pub fn parse_characters<S: NodeSource + ?Sized>(
    source: &S,
    resource: &str,
) -> Result<CharacterTable, VocabError> {
    let mut characters = CharacterTable::new();
    let _ = characters.insert("apos".to_string(), CharacterDefinition::new("apos", '\''));

    let blocks = source.load_nodes(resource, PRE_BLOCKS)?;
    for (index, &block) in blocks.nodes().iter().enumerate() {
        let text = blocks.tree().text_content(block);
        let mut declared = 0_usize;
        for captures in ENTITY_DECLARATION.captures_iter(&text) {
            let (_, [name, code]) = captures.extract();
            let Some(value) = code.parse::<u32>().ok().and_then(char::from_u32) else {
                warn_once(
                    "Characters",
                    &format!("entity {name} has no valid code point ({code})"),
                );
                continue;
            };
            let _ = characters.insert(name.to_string(), CharacterDefinition::new(name, value));
            declared += 1;
        }
        if declared == 0 {
            warn_once(
                "Characters",
                &format!("<pre> block {index} of {resource} declares no entities"),
            );
        }
    }
    Ok(characters)
}
