//! The index of elements.

use std::collections::BTreeMap;

use remarker_common::warning::warn_once;
use serde::Serialize;

use crate::cell::cell_value;
use crate::dtd::Dtd;
use crate::error::VocabError;
use crate::source::NodeSource;

/// Query selecting the data rows of the element and attribute indexes.
pub const NAME_ROWS: &str = "//tr[td[1]/@title='Name']";

const NAME_CELL: usize = 0;
const EMPTY_CELL: usize = 3;
const DTD_CELL: usize = 5;

/// `%fontstyle;` in the strict DTD.
pub const FONTSTYLE: [&str; 5] = ["TT", "I", "B", "BIG", "SMALL"];

/// `%phrase;` in the strict DTD.
pub const PHRASE: [&str; 10] = [
    "EM", "STRONG", "DFN", "CODE", "SAMP", "KBD", "VAR", "CITE", "ABBR", "ACRONYM",
];

/// `%special;` in the strict DTD.
pub const SPECIAL: [&str; 11] = [
    "A", "IMG", "OBJECT", "BR", "SCRIPT", "MAP", "Q", "SUB", "SUP", "SPAN", "BDO",
];

/// `%formctrl;` in the strict DTD.
pub const FORMCTRL: [&str; 5] = ["INPUT", "SELECT", "TEXTAREA", "LABEL", "BUTTON"];

/// Members of `%special;` that are not laid out inline.
const NOT_INLINE: [&str; 2] = ["BR", "SCRIPT"];

/// Every inline element name, upper case, in DTD order.
#[must_use]
pub fn inline_names() -> impl Iterator<Item = &'static str> {
    FONTSTYLE
        .into_iter()
        .chain(PHRASE)
        .chain(SPECIAL)
        .chain(FORMCTRL)
        .filter(|name| !NOT_INLINE.contains(name))
}

/// Whether the DTD classifies `name` as inline. Case-insensitive.
#[must_use]
pub fn is_inline(name: &str) -> bool {
    inline_names().any(|inline| inline.eq_ignore_ascii_case(name))
}

/// Name-to-element table, sorted by lowercase name.
pub type ElementTable = BTreeMap<String, ElementDefinition>;

/// One HTML 4.01 element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementDefinition {
    /// `abbr`
    pub lowercase: String,
    /// `ABBR`
    pub uppercase: String,
    /// Part of the inline classification.
    pub inline: bool,
    /// Declared `EMPTY` (no content, no end tag).
    pub empty: bool,
    /// Least permissive DTD that has the element.
    pub dtd: Dtd,
}

impl ElementDefinition {
    /// Build a definition from a declared name; inline-ness is derived.
    #[must_use]
    pub fn new(name: &str, empty: bool, dtd: Dtd) -> Self {
        Self {
            lowercase: name.to_lowercase(),
            uppercase: name.to_uppercase(),
            inline: is_inline(name),
            empty,
            dtd,
        }
    }
}

/// Build the element table from the rows of `resource`.
///
/// # Errors
///
/// Returns [`VocabError::MissingCell`] if a row is too short to carry the
/// Empty or DTD column, or whatever the node source fails with.
pub fn parse_elements<S: NodeSource + ?Sized>(
    source: &S,
    resource: &str,
) -> Result<ElementTable, VocabError> {
    let rows = source.load_nodes(resource, NAME_ROWS)?;
    let tree = rows.tree();

    let mut elements = ElementTable::new();
    for &row in rows.nodes() {
        let name = cell_value(tree, row, NAME_CELL)?;
        let empty = cell_value(tree, row, EMPTY_CELL)? == "E";
        let dtd = Dtd::classify(&cell_value(tree, row, DTD_CELL)?);

        let element = ElementDefinition::new(&name, empty, dtd);
        if let Some(previous) = elements.insert(element.lowercase.clone(), element) {
            warn_once(
                "Elements",
                &format!("{} is listed more than once; keeping the last row", previous.uppercase),
            );
        }
    }

    for name in inline_names() {
        if !elements.contains_key(&name.to_lowercase()) {
            warn_once(
                "Elements",
                &format!("inline element {name} does not appear in {resource}"),
            );
        }
    }
    Ok(elements)
}
