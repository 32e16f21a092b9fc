//! Where the reference documents come from.
//!
//! The table parsers only ever ask one question: "which nodes of resource X
//! match query Q?". [`NodeSource`] is that question as a trait. The provided
//! implementation of [`NodeSource::load_nodes`] reads the resource, parses it
//! with `remarker-html` and evaluates the query with
//! [`remarker_dom::path`]; implementors only say how to read.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use remarker_dom::path::PathQuery;
use remarker_dom::{DomTree, NodeId};
use remarker_html::parse_document;

use crate::error::VocabError;

/// Nodes matched by a query, together with the tree they live in.
#[derive(Debug, Clone)]
pub struct Selection {
    tree: DomTree,
    nodes: Vec<NodeId>,
}

impl Selection {
    /// Wrap a tree and the matched node ids (in document order).
    #[must_use]
    pub const fn new(tree: DomTree, nodes: Vec<NodeId>) -> Self {
        Self { tree, nodes }
    }

    /// The parsed document.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Matched nodes in document order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of matched nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the query matched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Supplies reference documents and answers path queries against them.
pub trait NodeSource {
    /// Return the raw markup of a named resource.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::Resource`] if the resource does not exist or
    /// cannot be read.
    fn read(&self, resource: &str) -> Result<String, VocabError>;

    /// Load `resource` and select the nodes matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::Query`] for a malformed query (checked before
    /// anything is read), or whatever [`NodeSource::read`] fails with.
    fn load_nodes(&self, resource: &str, query: &str) -> Result<Selection, VocabError> {
        let query = PathQuery::parse(query)?;
        let tree = parse_document(&self.read(resource)?);
        let nodes = query.evaluate(&tree);
        Ok(Selection::new(tree, nodes))
    }
}

/// Names of the three reference documents within a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    /// Named character entity declarations (`<pre>` blocks).
    pub characters: String,
    /// The index of elements table.
    pub elements: String,
    /// The index of attributes table.
    pub attributes: String,
}

impl Default for ResourceNames {
    fn default() -> Self {
        Self {
            characters: "characters.html".to_string(),
            elements: "elements.html".to_string(),
            attributes: "attributes.html".to_string(),
        }
    }
}

/// Reads resources as files below a root directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Resolve resource names against `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory resources are read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl NodeSource for DirectorySource {
    fn read(&self, resource: &str) -> Result<String, VocabError> {
        let path = self.root.join(resource);
        // The W3C pages predate UTF-8 everywhere; stray Latin-1 bytes only
        // ever appear in prose, never in the cells we read.
        fs::read(&path)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .map_err(|e| VocabError::Resource {
                name: resource.to_string(),
                reason: format!("{}: {e}", path.display()),
            })
    }
}

/// Holds resources in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    /// An empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a resource, builder style.
    #[must_use]
    pub fn with(mut self, name: &str, markup: &str) -> Self {
        self.insert(name, markup);
        self
    }

    /// Add (or replace) a resource.
    pub fn insert(&mut self, name: &str, markup: &str) {
        let _ = self
            .documents
            .insert(name.to_string(), markup.to_string());
    }
}

impl NodeSource for MemorySource {
    fn read(&self, resource: &str) -> Result<String, VocabError> {
        self.documents
            .get(resource)
            .cloned()
            .ok_or_else(|| VocabError::Resource {
                name: resource.to_string(),
                reason: "no such document".to_string(),
            })
    }
}
