//! The index of attributes.
//!
//! Each row binds an attribute to a set of elements. The "Related Elements"
//! cell takes one of two forms:
//!
//! - `A, AREA, LINK`: the listed elements only;
//! - `All elements but BASE, BASEFONT`: everything else.
//!
//! The second form is stored as a wildcard entry ([`WILDCARD`]) plus an
//! explicit `None` for each excluded element.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use strum_macros::Display;

use crate::cell::cell_value;
use crate::dtd::Dtd;
use crate::elements::NAME_ROWS;
use crate::error::VocabError;
use crate::source::NodeSource;

/// Key standing for "every element without its own entry".
pub const WILDCARD: &str = "*";

const NAME_CELL: usize = 0;
const SCOPE_CELL: usize = 1;
const TYPE_CELL: usize = 2;
const DTD_CELL: usize = 5;

static LISTED_ELEMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([A-Z0-9]+(?:, *[A-Z0-9]+)*)$").expect("element list pattern is valid")
});

static ALL_ELEMENTS_BUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^All elements but ([A-Z0-9]+(?:, *[A-Z0-9]+)*)$")
        .expect("element exclusion pattern is valid")
});

/// How an attribute's value is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum AttributeType {
    /// Minimizable: the value is the attribute's own name (`disabled`).
    Boolean,
    /// `%Number;`
    Number,
    /// Anything else (CDATA, URIs, enumerations, ...).
    String,
}

impl AttributeType {
    /// Derive the type from the Type column of the row declaring `name`.
    ///
    /// `name` is the lowercase attribute name.
    #[must_use]
    pub fn classify(name: &str, code: &str) -> Self {
        if code.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) == Some(name) {
            Self::Boolean
        } else if code == "NUMBER" {
            Self::Number
        } else {
            Self::String
        }
    }
}

/// Which elements a row applies to, lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Exactly these elements.
    Only(Vec<String>),
    /// Every element except these.
    AllBut(Vec<String>),
}

impl Scope {
    /// Parse a Related Elements cell.
    ///
    /// Whitespace runs (including line breaks inside the cell) count as a
    /// single space.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::UnrecognizedScope`] if the cell is in neither
    /// form.
    pub fn parse(cell: &str) -> Result<Self, VocabError> {
        let normalized = cell.split_whitespace().collect::<Vec<_>>().join(" ");
        if let Some(captures) = ALL_ELEMENTS_BUT.captures(&normalized) {
            let (_, [names]) = captures.extract();
            Ok(Self::AllBut(split_names(names)))
        } else if let Some(captures) = LISTED_ELEMENTS.captures(&normalized) {
            let (_, [names]) = captures.extract();
            Ok(Self::Only(split_names(names)))
        } else {
            Err(VocabError::UnrecognizedScope(cell.to_string()))
        }
    }
}

fn split_names(names: &str) -> Vec<String> {
    names.split(',').map(|name| name.trim().to_lowercase()).collect()
}

/// Name-to-attribute table, sorted by lowercase name.
pub type AttributeTable = BTreeMap<String, AttributeDefinition>;

/// One HTML 4.01 attribute, across every element it appears on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeDefinition {
    /// Lowercase attribute name.
    pub name: String,
    /// Value type per lowercase element name (or [`WILDCARD`]). `None`
    /// marks an element the attribute explicitly does not apply to.
    pub types_by_element: BTreeMap<String, Option<AttributeType>>,
    /// DTD per lowercase element name (or [`WILDCARD`]), same keys as
    /// `types_by_element`.
    pub dtds_by_element: BTreeMap<String, Option<Dtd>>,
}

impl AttributeDefinition {
    /// A definition with no element bindings yet.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            types_by_element: BTreeMap::new(),
            dtds_by_element: BTreeMap::new(),
        }
    }

    fn bind(&mut self, element: &str, kind: Option<AttributeType>, dtd: Option<Dtd>) {
        let _ = self.types_by_element.insert(element.to_string(), kind);
        let _ = self.dtds_by_element.insert(element.to_string(), dtd);
    }

    /// Fold one row into the definition. Entries already present for the
    /// same element are replaced.
    pub fn apply(&mut self, scope: &Scope, kind: AttributeType, dtd: Dtd) {
        match scope {
            Scope::Only(elements) => {
                for element in elements {
                    self.bind(element, Some(kind), Some(dtd));
                }
            }
            Scope::AllBut(excluded) => {
                self.bind(WILDCARD, Some(kind), Some(dtd));
                for element in excluded {
                    self.bind(element, None, None);
                }
            }
        }
    }

    /// Value type on `element`, or `None` where the attribute does not apply.
    ///
    /// A concrete entry wins over the wildcard, even an explicit `None`.
    #[must_use]
    pub fn type_for(&self, element: &str) -> Option<AttributeType> {
        resolve(&self.types_by_element, element)
    }

    /// DTD that allows the attribute on `element`, if any.
    #[must_use]
    pub fn dtd_for(&self, element: &str) -> Option<Dtd> {
        resolve(&self.dtds_by_element, element)
    }

    /// Whether the attribute may appear on `element`.
    #[must_use]
    pub fn applies_to(&self, element: &str) -> bool {
        self.type_for(element).is_some()
    }
}

fn resolve<T: Copy>(map: &BTreeMap<String, Option<T>>, element: &str) -> Option<T> {
    let element = element.to_lowercase();
    map.get(&element)
        .or_else(|| map.get(WILDCARD))
        .copied()
        .flatten()
}

/// Build the attribute table from the rows of `resource`.
///
/// Rows repeating a name are merged into one definition; for an element
/// bound by both, the later row wins.
///
/// # Errors
///
/// Returns [`VocabError::MissingCell`] for a short row,
/// [`VocabError::UnrecognizedScope`] for a Related Elements cell in an
/// unknown form, or whatever the node source fails with.
pub fn parse_attributes<S: NodeSource + ?Sized>(
    source: &S,
    resource: &str,
) -> Result<AttributeTable, VocabError> {
    let rows = source.load_nodes(resource, NAME_ROWS)?;
    let tree = rows.tree();

    let mut attributes = AttributeTable::new();
    for &row in rows.nodes() {
        let name = cell_value(tree, row, NAME_CELL)?.to_lowercase();
        let scope = Scope::parse(&cell_value(tree, row, SCOPE_CELL)?)?;
        let kind = AttributeType::classify(&name, &cell_value(tree, row, TYPE_CELL)?);
        let dtd = Dtd::classify(&cell_value(tree, row, DTD_CELL)?);

        attributes
            .entry(name)
            .or_insert_with_key(|name| AttributeDefinition::new(name))
            .apply(&scope, kind, dtd);
    }
    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_listed() {
        assert_eq!(
            Scope::parse("A, AREA, LINK").unwrap(),
            Scope::Only(vec!["a".into(), "area".into(), "link".into()])
        );
        assert_eq!(Scope::parse("H1").unwrap(), Scope::Only(vec!["h1".into()]));
    }

    #[test]
    fn test_scope_line_breaks_are_spaces() {
        assert_eq!(
            Scope::parse("All elements but\n  BASE,\n BASEFONT").unwrap(),
            Scope::AllBut(vec!["base".into(), "basefont".into()])
        );
    }

    #[test]
    fn test_scope_is_case_insensitive() {
        assert_eq!(
            Scope::parse("all elements but Br").unwrap(),
            Scope::AllBut(vec!["br".into()])
        );
    }

    #[test]
    fn test_scope_rejects_other_forms() {
        for cell in ["", "A; AREA", "A,", "Most elements", "All elements"] {
            assert_eq!(
                Scope::parse(cell),
                Err(VocabError::UnrecognizedScope(cell.to_string())),
                "cell {cell:?}"
            );
        }
    }

    #[test]
    fn test_type_classification() {
        assert_eq!(AttributeType::classify("disabled", "(disabled)"), AttributeType::Boolean);
        assert_eq!(AttributeType::classify("rows", "NUMBER"), AttributeType::Number);
        assert_eq!(AttributeType::classify("rows", "%MultiLength;"), AttributeType::String);
        assert_eq!(AttributeType::classify("nowrap", "(checked)"), AttributeType::String);
        assert_eq!(AttributeType::classify("align", "(left|right)"), AttributeType::String);
    }

    #[test]
    fn test_resolution_prefers_concrete_keys() {
        let mut attribute = AttributeDefinition::new("lang");
        attribute.apply(
            &Scope::AllBut(vec!["br".into()]),
            AttributeType::String,
            Dtd::Strict,
        );
        attribute.apply(&Scope::Only(vec!["pre".into()]), AttributeType::Number, Dtd::Loose);

        assert_eq!(attribute.type_for("P"), Some(AttributeType::String));
        assert_eq!(attribute.type_for("pre"), Some(AttributeType::Number));
        assert_eq!(attribute.dtd_for("pre"), Some(Dtd::Loose));
        assert_eq!(attribute.type_for("br"), None);
        assert!(!attribute.applies_to("BR"));
        assert!(attribute.applies_to("div"));
    }

    #[test]
    fn test_listed_attribute_without_wildcard() {
        let mut attribute = AttributeDefinition::new("href");
        attribute.apply(&Scope::Only(vec!["a".into()]), AttributeType::String, Dtd::Strict);
        assert!(attribute.applies_to("a"));
        assert!(!attribute.applies_to("p"));
        assert_eq!(attribute.dtd_for("p"), None);
    }
}
