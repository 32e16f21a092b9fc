//! Errors raised while building the vocabulary tables.

use remarker_dom::path::QueryError;
use thiserror::Error;

/// Why a table could not be built.
///
/// `MissingCell` and `UnrecognizedScope` mean the reference document no
/// longer has the shape the parsers expect; they abort the whole table.
/// The type is `Clone` so a memoized failure can be handed to every caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
    /// A row has fewer element children than the parser reads.
    #[error("row has no cell at position {index} (only {found} cells)")]
    MissingCell {
        /// Zero-based cell index that was requested.
        index: usize,
        /// Number of cells the row actually has.
        found: usize,
    },

    /// An attribute's "related elements" cell matches neither scope form.
    #[error("unrecognized element scope {0:?}")]
    UnrecognizedScope(String),

    /// A reference document could not be read.
    #[error("cannot read resource {name:?}: {reason}")]
    Resource {
        /// Resource name as passed to the node source.
        name: String,
        /// Underlying failure, rendered.
        reason: String,
    },

    /// The node source was given a malformed path query.
    #[error("invalid path query: {0}")]
    Query(#[from] QueryError),
}
