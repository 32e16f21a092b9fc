//! The three tables, built together and memoized.

use std::sync::OnceLock;

use serde::Serialize;

use crate::attributes::{AttributeTable, parse_attributes};
use crate::characters::{CharacterTable, parse_characters};
use crate::elements::{ElementTable, parse_elements};
use crate::error::VocabError;
use crate::source::{NodeSource, ResourceNames};

/// Characters, elements and attributes of HTML 4.01.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tables {
    /// Named character entities, by case-preserved name.
    pub characters: CharacterTable,
    /// Elements, by lowercase name.
    pub elements: ElementTable,
    /// Attributes, by lowercase name.
    pub attributes: AttributeTable,
}

impl Tables {
    /// Parse all three tables from `source`, characters first.
    ///
    /// # Errors
    ///
    /// Stops at the first table that fails and returns its error.
    pub fn parse<S: NodeSource + ?Sized>(
        source: &S,
        names: &ResourceNames,
    ) -> Result<Self, VocabError> {
        let characters = parse_characters(source, &names.characters)?;
        let elements = parse_elements(source, &names.elements)?;
        let attributes = parse_attributes(source, &names.attributes)?;
        Ok(Self {
            characters,
            elements,
            attributes,
        })
    }
}

/// Lazily parsed, shareable vocabulary.
///
/// The first call to any accessor parses every table; concurrent first
/// callers wait for that parse instead of starting their own. The outcome,
/// error included, is kept for the lifetime of the value.
///
/// ```no_run
/// use remarker_vocab::{DirectorySource, Vocabulary};
///
/// let vocabulary = Vocabulary::new(DirectorySource::new("resources"));
/// let elements = vocabulary.elements()?;
/// assert!(elements["abbr"].inline);
/// # Ok::<(), remarker_vocab::VocabError>(())
/// ```
#[derive(Debug)]
pub struct Vocabulary<S> {
    source: S,
    names: ResourceNames,
    tables: OnceLock<Result<Tables, VocabError>>,
}

impl<S: NodeSource> Vocabulary<S> {
    /// Read the default resource names from `source`.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_names(source, ResourceNames::default())
    }

    /// Read custom resource names from `source`.
    #[must_use]
    pub const fn with_names(source: S, names: ResourceNames) -> Self {
        Self {
            source,
            names,
            tables: OnceLock::new(),
        }
    }

    /// All three tables.
    ///
    /// # Errors
    ///
    /// Returns the error of the one parse attempt, on every call.
    pub fn tables(&self) -> Result<&Tables, VocabError> {
        self.tables
            .get_or_init(|| Tables::parse(&self.source, &self.names))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Named character entities.
    ///
    /// # Errors
    ///
    /// See [`Vocabulary::tables`].
    pub fn characters(&self) -> Result<&CharacterTable, VocabError> {
        self.tables().map(|tables| &tables.characters)
    }

    /// Elements.
    ///
    /// # Errors
    ///
    /// See [`Vocabulary::tables`].
    pub fn elements(&self) -> Result<&ElementTable, VocabError> {
        self.tables().map(|tables| &tables.elements)
    }

    /// Attributes.
    ///
    /// # Errors
    ///
    /// See [`Vocabulary::tables`].
    pub fn attributes(&self) -> Result<&AttributeTable, VocabError> {
        self.tables().map(|tables| &tables.attributes)
    }

    /// The underlying node source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Resource names in use.
    #[must_use]
    pub const fn names(&self) -> &ResourceNames {
        &self.names
    }
}
