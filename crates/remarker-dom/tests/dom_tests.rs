//! Tests for DOM tree construction and traversal.

use remarker_dom::{DomTree, ElementData, NodeId, NodeType};

/// Helper to create an element node under `parent` and return its NodeId.
fn append_element(tree: &mut DomTree, parent: NodeId, tag: &str) -> NodeId {
    let id = tree.alloc(NodeType::Element(ElementData::new(tag)));
    tree.append_child(parent, id);
    id
}

// ========== append_child / append_text ==========

#[test]
fn test_append_child_sets_parent() {
    let mut tree = DomTree::new();
    let table = append_element(&mut tree, NodeId::ROOT, "table");
    let row = append_element(&mut tree, table, "tr");

    assert_eq!(tree.parent(row), Some(table));
    assert_eq!(tree.children(table), &[row]);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_append_text_merges_adjacent_text() {
    let mut tree = DomTree::new();
    let pre = append_element(&mut tree, NodeId::ROOT, "pre");
    tree.append_text(pre, "<!ENTITY ");
    tree.append_text(pre, "nbsp");

    assert_eq!(tree.children(pre).len(), 1);
    assert_eq!(tree.as_text(tree.children(pre)[0]), Some("<!ENTITY nbsp"));
}

#[test]
fn test_append_text_after_element_starts_new_node() {
    let mut tree = DomTree::new();
    let td = append_element(&mut tree, NodeId::ROOT, "td");
    tree.append_text(td, "A");
    let _ = append_element(&mut tree, td, "a");
    tree.append_text(td, "B");

    assert_eq!(tree.children(td).len(), 3);
}

// ========== element_children ==========

#[test]
fn test_element_children_skips_text_and_comments() {
    let mut tree = DomTree::new();
    let tr = append_element(&mut tree, NodeId::ROOT, "tr");
    tree.append_text(tr, "\n");
    let first = append_element(&mut tree, tr, "td");
    let comment = tree.alloc(NodeType::Comment(" cell ".to_string()));
    tree.append_child(tr, comment);
    tree.append_text(tr, "\n  ");
    let second = append_element(&mut tree, tr, "td");

    let cells: Vec<NodeId> = tree.element_children(tr).collect();
    assert_eq!(cells, vec![first, second]);
}

// ========== descendants / text_content ==========

#[test]
fn test_descendants_are_in_document_order() {
    let mut tree = DomTree::new();
    let body = append_element(&mut tree, NodeId::ROOT, "body");
    let p = append_element(&mut tree, body, "p");
    let em = append_element(&mut tree, p, "em");
    let pre = append_element(&mut tree, body, "pre");

    let order: Vec<NodeId> = tree.descendants(NodeId::ROOT).collect();
    assert_eq!(order, vec![body, p, em, pre]);
}

#[test]
fn test_text_content_concatenates_descendants() {
    let mut tree = DomTree::new();
    let td = append_element(&mut tree, NodeId::ROOT, "td");
    tree.append_text(td, "  ");
    let a = append_element(&mut tree, td, "a");
    tree.append_text(a, "BASEFONT");
    tree.append_text(td, "\n");

    assert_eq!(tree.text_content(td), "  BASEFONT\n");
    assert_eq!(tree.text_content(a), "BASEFONT");
}

#[test]
fn test_text_content_of_text_node_is_its_data() {
    let mut tree = DomTree::new();
    tree.append_text(NodeId::ROOT, "plain");
    let text = tree.children(NodeId::ROOT)[0];
    assert_eq!(tree.text_content(text), "plain");
}

// ========== ElementData ==========

#[test]
fn test_element_data_lowercases_tag_name() {
    let mut data = ElementData::new("TD");
    let _ = data.attrs.insert("title".to_string(), "Name".to_string());

    assert_eq!(data.tag_name, "td");
    assert!(data.is("Td"));
    assert_eq!(data.attr("title"), Some("Name"));
    assert_eq!(data.attr("align"), None);
}
