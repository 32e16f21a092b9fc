use remarker_common::warning::warn_once;
use remarker_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

use crate::tokenizer::Token;

/// [§ 13.1.2 Void elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// Plus the HTML 4 ones that HTML5 dropped (`basefont`, `frame`, `isindex`).
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "basefont", "br", "col", "frame", "hr", "img", "input", "isindex", "link",
    "meta", "param", "wbr",
];

/// Start tags that implicitly close an open `<p>`.
const CLOSES_PARAGRAPH: [&str; 16] = [
    "address", "blockquote", "center", "div", "dl", "h1", "h2", "h3", "h4", "h5", "h6", "hr",
    "ol", "p", "pre", "table",
];

/// Implied end tags: a start tag `trigger` closes the nearest open element
/// in `closes`, unless one of `scope` is reached first.
struct ImpliedEnd {
    trigger: &'static [&'static str],
    closes: &'static [&'static str],
    scope: &'static [&'static str],
}

const IMPLIED_ENDS: [ImpliedEnd; 6] = [
    ImpliedEnd {
        trigger: &["td", "th"],
        closes: &["td", "th"],
        scope: &["tr", "table"],
    },
    ImpliedEnd {
        trigger: &["tr"],
        closes: &["tr"],
        scope: &["table"],
    },
    ImpliedEnd {
        trigger: &["thead", "tbody", "tfoot"],
        closes: &["thead", "tbody", "tfoot"],
        scope: &["table"],
    },
    ImpliedEnd {
        trigger: &["li"],
        closes: &["li"],
        scope: &["ul", "ol", "menu", "dir"],
    },
    ImpliedEnd {
        trigger: &["dt", "dd"],
        closes: &["dt", "dd"],
        scope: &["dl"],
    },
    ImpliedEnd {
        trigger: &["option"],
        closes: &["option"],
        scope: &["select"],
    },
];

/// Elements that bound the search for an open `<p>`.
const PARAGRAPH_SCOPE: [&str; 7] = ["body", "td", "th", "li", "div", "blockquote", "table"];

/// Tree builder for HTML 4 reference pages.
///
/// Keeps a stack of open elements and applies the handful of implied-end
/// rules that hand-written HTML 4 relies on (unclosed `<td>`, `<tr>`, `<p>`,
/// `<li>`). It never fails: stray end tags are reported and ignored.
pub struct HTMLParser {
    tokens: Vec<Token>,

    /// [§ 13.2.4.3 The stack of open elements](https://html.spec.whatwg.org/multipage/parsing.html#the-stack-of-open-elements)
    stack_of_open_elements: Vec<NodeId>,

    /// `NodeId::ROOT` (index 0) is the Document node.
    tree: DomTree,
}

impl HTMLParser {
    /// Create a parser over a token stream from [`crate::HTMLTokenizer`].
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            stack_of_open_elements: Vec::new(),
            tree: DomTree::new(),
        }
    }

    /// Run the parser and return the DOM tree.
    #[must_use]
    pub fn run(mut self) -> DomTree {
        let tokens = std::mem::take(&mut self.tokens);
        for token in tokens {
            match token {
                Token::StartTag {
                    name,
                    self_closing,
                    attributes,
                } => {
                    let attrs: AttributesMap =
                        attributes.into_iter().map(|a| (a.name, a.value)).collect();
                    self.insert_element(&name, attrs, self_closing);
                }
                Token::EndTag { name } => self.close_element(&name),
                Token::Text { data } => {
                    let parent = self.current_node();
                    self.tree.append_text(parent, &data);
                }
                Token::Comment { data } => {
                    let parent = self.current_node();
                    let comment = self.tree.alloc(NodeType::Comment(data));
                    self.tree.append_child(parent, comment);
                }
                Token::Declaration { .. } => {}
                Token::EndOfFile => break,
            }
        }
        self.tree
    }

    /// [§ 13.2.4.3](https://html.spec.whatwg.org/multipage/parsing.html#current-node)
    /// "The current node is the bottommost node in this stack of open elements."
    fn current_node(&self) -> NodeId {
        self.stack_of_open_elements
            .last()
            .copied()
            .unwrap_or(NodeId::ROOT)
    }

    fn tag_name(&self, id: NodeId) -> &str {
        self.tree.as_element(id).map_or("", |e| e.tag_name.as_str())
    }

    fn insert_element(&mut self, name: &str, attrs: AttributesMap, self_closing: bool) {
        if CLOSES_PARAGRAPH.contains(&name) {
            self.close_in_scope(&["p"], &PARAGRAPH_SCOPE);
        }
        for rule in &IMPLIED_ENDS {
            if rule.trigger.contains(&name) {
                self.close_in_scope(rule.closes, rule.scope);
            }
        }

        let mut data = ElementData::new(name);
        data.attrs = attrs;
        let parent = self.current_node();
        let element = self.tree.alloc(NodeType::Element(data));
        self.tree.append_child(parent, element);

        if !self_closing && !VOID_ELEMENTS.contains(&name) {
            self.stack_of_open_elements.push(element);
        }
    }

    /// Pop up to and including the nearest open element named in `targets`,
    /// unless an element named in `scope` is nearer.
    fn close_in_scope(&mut self, targets: &[&str], scope: &[&str]) {
        for index in (0..self.stack_of_open_elements.len()).rev() {
            let tag = self.tag_name(self.stack_of_open_elements[index]);
            if targets.contains(&tag) {
                self.stack_of_open_elements.truncate(index);
                return;
            }
            if scope.contains(&tag) {
                return;
            }
        }
    }

    fn close_element(&mut self, name: &str) {
        let position = self
            .stack_of_open_elements
            .iter()
            .rposition(|&id| self.tag_name(id) == name);
        match position {
            Some(index) => self.stack_of_open_elements.truncate(index),
            None if VOID_ELEMENTS.contains(&name) => {}
            None => warn_once("HTML", &format!("ignored end tag </{name}> with no open element")),
        }
    }
}

/// Print the element structure of a tree, one node per line.
pub fn print_tree(tree: &DomTree, id: NodeId, depth: usize) {
    let indent = "  ".repeat(depth);
    if let Some(node) = tree.get(id) {
        match &node.node_type {
            NodeType::Document => println!("{indent}#document"),
            NodeType::Element(data) => println!("{indent}<{}>", data.tag_name),
            NodeType::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    println!("{indent}{text:?}");
                }
            }
            NodeType::Comment(data) => println!("{indent}<!--{data}-->"),
        }
    }
    for &child in tree.children(id) {
        print_tree(tree, child, depth + 1);
    }
}
