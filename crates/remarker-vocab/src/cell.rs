//! Reading cells out of a table row.

use remarker_dom::{DomTree, NodeId};

use crate::error::VocabError;

/// Trimmed text of the `index`-th cell of `row`.
///
/// Only element children count as cells, so the whitespace text between
/// `<td>`s does not shift positions.
///
/// # Errors
///
/// Returns [`VocabError::MissingCell`] if the row has `index` cells or fewer.
pub fn cell_value(tree: &DomTree, row: NodeId, index: usize) -> Result<String, VocabError> {
    tree.element_children(row)
        .nth(index)
        .map(|cell| tree.text_content(cell).trim().to_string())
        .ok_or_else(|| VocabError::MissingCell {
            index,
            found: tree.element_children(row).count(),
        })
}
