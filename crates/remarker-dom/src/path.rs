//! Path queries over a [`DomTree`].
//!
//! A deliberately small subset of XPath 1.0 abbreviated syntax, enough to
//! pick rows and blocks out of a reference document:
//!
//! ```text
//! //pre                       every <pre> element
//! //tr[td[1]/@title='Name']   rows whose first cell is titled "Name"
//! /html/body/table[2]//tr     rows of the second table in <body>
//! ```
//!
//! Grammar:
//!
//! ```text
//! path       := step+
//! step       := ('/' | '//') name predicate*
//! predicate  := '[' integer ']' | '[' relative ( '=' literal )? ']'
//! relative   := relstep ('/' relstep)*
//! relstep    := name ('[' integer ']')? | '@' name
//! ```
//!
//! Names compare case-insensitively and `*` matches any element. Results are
//! returned in document order without duplicates.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{DomTree, NodeId};

/// A path query that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query string was empty or whitespace.
    #[error("path query is empty")]
    Empty,
    /// A character appeared where the grammar does not allow it.
    #[error("unexpected {found} at offset {offset} in path query")]
    Unexpected {
        /// What was found (a quoted character or "end of query").
        found: String,
        /// Byte offset into the query string.
        offset: usize,
    },
    /// A string literal was opened but never closed.
    #[error("unterminated string literal starting at offset {0}")]
    UnterminatedLiteral(usize),
}

/// Which nodes a step looks at relative to its context node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    /// `/name`
    Child,
    /// `//name`
    Descendant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NameTest {
    Any,
    Named(String),
}

impl NameTest {
    fn matches(&self, tag_name: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Named(name) => name.eq_ignore_ascii_case(tag_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RelativeStep {
    Element {
        name: NameTest,
        position: Option<usize>,
    },
    Attribute(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate {
    /// `[n]`, 1-based among same-named element siblings.
    Position(usize),
    /// `[a/b/@c]` or `[a/b/@c='value']`.
    Matches {
        path: Vec<RelativeStep>,
        literal: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    axis: Axis,
    name: NameTest,
    predicates: Vec<Predicate>,
}

/// A parsed path query, reusable across documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathQuery {
    source: String,
    steps: Vec<Step>,
}

impl PathQuery {
    /// Parse a query string.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] if the string does not follow the grammar.
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(QueryError::Empty);
        }
        let steps = QueryParser::new(query).parse_path()?;
        Ok(Self {
            source: query.to_string(),
            steps,
        })
    }

    /// Evaluate the query against a tree, starting from the document node.
    #[must_use]
    pub fn evaluate(&self, tree: &DomTree) -> Vec<NodeId> {
        let mut context = vec![tree.root()];
        for step in &self.steps {
            let mut matched = BTreeSet::new();
            for &node in &context {
                let candidates: Vec<NodeId> = match step.axis {
                    Axis::Child => tree.element_children(node).collect(),
                    Axis::Descendant => tree
                        .descendants(node)
                        .filter(|&id| tree.as_element(id).is_some())
                        .collect(),
                };
                matched.extend(
                    candidates
                        .into_iter()
                        .filter(|&id| step_matches(tree, id, step)),
                );
            }
            context = matched.into_iter().collect();
        }
        context
    }
}

impl FromStr for PathQuery {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parse `query` and evaluate it against `tree` in one go.
///
/// # Errors
///
/// Returns a [`QueryError`] if the query does not parse.
pub fn select(tree: &DomTree, query: &str) -> Result<Vec<NodeId>, QueryError> {
    Ok(PathQuery::parse(query)?.evaluate(tree))
}

fn step_matches(tree: &DomTree, id: NodeId, step: &Step) -> bool {
    let Some(element) = tree.as_element(id) else {
        return false;
    };
    step.name.matches(&element.tag_name)
        && step
            .predicates
            .iter()
            .all(|predicate| predicate_holds(tree, id, &step.name, predicate))
}

fn predicate_holds(tree: &DomTree, id: NodeId, name: &NameTest, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::Position(position) => sibling_position(tree, id, name) == *position,
        Predicate::Matches { path, literal } => {
            let values = relative_values(tree, id, path);
            match literal {
                None => !values.is_empty(),
                Some(expected) => values.iter().any(|value| value == expected),
            }
        }
    }
}

/// 1-based position of `id` among its element siblings that pass `name`.
fn sibling_position(tree: &DomTree, id: NodeId, name: &NameTest) -> usize {
    let Some(parent) = tree.parent(id) else {
        return 1;
    };
    tree.element_children(parent)
        .filter(|&sibling| {
            tree.as_element(sibling)
                .is_some_and(|e| name.matches(&e.tag_name))
        })
        .position(|sibling| sibling == id)
        .map_or(0, |index| index + 1)
}

/// String values reached by a relative path: attribute values, or the
/// trimmed text content of the final elements.
fn relative_values(tree: &DomTree, start: NodeId, path: &[RelativeStep]) -> Vec<String> {
    let mut nodes = vec![start];
    for step in path {
        match step {
            RelativeStep::Element { name, position } => {
                nodes = nodes
                    .iter()
                    .flat_map(|&node| {
                        tree.element_children(node)
                            .filter(|&child| {
                                tree.as_element(child)
                                    .is_some_and(|e| name.matches(&e.tag_name))
                            })
                            .collect::<Vec<_>>()
                    })
                    .filter(|&child| position.is_none_or(|p| sibling_position(tree, child, name) == p))
                    .collect();
            }
            RelativeStep::Attribute(attr) => {
                // The parser only allows an attribute as the last step.
                return nodes
                    .iter()
                    .filter_map(|&node| tree.as_element(node)?.attr(attr).map(str::to_string))
                    .collect();
            }
        }
    }
    nodes
        .iter()
        .map(|&node| tree.text_content(node).trim().to_string())
        .collect()
}

/// Recursive descent over the query characters.
struct QueryParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> QueryParser<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.advance(c);
        }
    }

    fn unexpected(&self) -> QueryError {
        QueryError::Unexpected {
            found: self
                .peek()
                .map_or_else(|| "end of query".to_string(), |c| format!("'{c}'")),
            offset: self.pos,
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), QueryError> {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.advance(expected);
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn parse_path(&mut self) -> Result<Vec<Step>, QueryError> {
        let mut steps = Vec::new();
        while self.peek() == Some('/') {
            self.advance('/');
            let axis = if self.peek() == Some('/') {
                self.advance('/');
                Axis::Descendant
            } else {
                Axis::Child
            };
            let name = self.parse_name_test()?;
            let mut predicates = Vec::new();
            while self.peek() == Some('[') {
                predicates.push(self.parse_predicate()?);
            }
            steps.push(Step {
                axis,
                name,
                predicates,
            });
        }
        if steps.is_empty() || self.pos < self.input.len() {
            return Err(self.unexpected());
        }
        Ok(steps)
    }

    fn parse_name_test(&mut self) -> Result<NameTest, QueryError> {
        if self.peek() == Some('*') {
            self.advance('*');
            return Ok(NameTest::Any);
        }
        Ok(NameTest::Named(self.parse_name()?))
    }

    fn parse_name(&mut self) -> Result<String, QueryError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !(c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':') {
                break;
            }
            self.advance(c);
        }
        if self.pos == start {
            return Err(self.unexpected());
        }
        Ok(self.input[start..self.pos].to_ascii_lowercase())
    }

    fn parse_integer(&mut self) -> Result<usize, QueryError> {
        let start = self.pos;
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            self.advance(c);
        }
        self.input[start..self.pos]
            .parse()
            .map_err(|_| QueryError::Unexpected {
                found: format!("'{}'", &self.input[start..self.pos]),
                offset: start,
            })
    }

    fn parse_predicate(&mut self) -> Result<Predicate, QueryError> {
        self.expect('[')?;
        self.skip_whitespace();
        if self.peek().is_some_and(|c| c.is_ascii_digit()) {
            let position = self.parse_integer()?;
            self.expect(']')?;
            return Ok(Predicate::Position(position));
        }

        let mut path = vec![self.parse_relative_step()?];
        while self.peek() == Some('/') {
            if matches!(path.last(), Some(RelativeStep::Attribute(_))) {
                return Err(self.unexpected());
            }
            self.advance('/');
            path.push(self.parse_relative_step()?);
        }

        self.skip_whitespace();
        let literal = if self.peek() == Some('=') {
            self.advance('=');
            self.skip_whitespace();
            Some(self.parse_literal()?)
        } else {
            None
        };
        self.expect(']')?;
        Ok(Predicate::Matches { path, literal })
    }

    fn parse_relative_step(&mut self) -> Result<RelativeStep, QueryError> {
        if self.peek() == Some('@') {
            self.advance('@');
            return Ok(RelativeStep::Attribute(self.parse_name()?));
        }
        let name = self.parse_name_test()?;
        let position = if self.peek() == Some('[') {
            self.advance('[');
            self.skip_whitespace();
            let position = self.parse_integer()?;
            self.expect(']')?;
            Some(position)
        } else {
            None
        };
        Ok(RelativeStep::Element { name, position })
    }

    fn parse_literal(&mut self) -> Result<String, QueryError> {
        let start = self.pos;
        let quote = match self.peek() {
            Some(q @ ('\'' | '"')) => q,
            _ => return Err(self.unexpected()),
        };
        self.advance(quote);
        let body_start = self.pos;
        let Some(len) = self.remaining().find(quote) else {
            return Err(QueryError::UnterminatedLiteral(start));
        };
        self.pos += len;
        let literal = self.input[body_start..self.pos].to_string();
        self.advance(quote);
        Ok(literal)
    }
}
