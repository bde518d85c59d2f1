use json_dom::{Document, DomNode, Element, ErrorKind, Node};
use rstest::rstest;
use serde_json::{json, Value};

fn sample() -> Value {
    json!({"a": 1, "b": {"c": true}})
}

fn tags<V: json_dom::JsonValue>(elements: &[Element<'_, V>]) -> Vec<String> {
    elements.iter().map(|e| e.tag_name().to_string()).collect()
}

#[rstest]
fn navigation_wildcard_is_preorder() {
    let value = sample();
    let doc = Document::new("root", &value);
    let all = doc.document_element().get_elements_by_tag_name(Some("*"));
    assert_eq!(tags(&all.to_vec()), vec!["a", "b", "c"]);
}

#[rstest]
fn navigation_wildcard_recurses_through_matches() {
    let value = json!({"x": {"y": {"z": 1}}, "w": [{"v": 2}]});
    let doc = Document::new("root", &value);
    let all = doc.document_element().get_elements_by_tag_name(Some("*"));
    assert_eq!(tags(&all.to_vec()), vec!["x", "y", "z", "w", "n0", "v"]);
}

#[rstest]
#[case(Some("c"), vec!["c"])]
#[case(Some("b"), vec!["b"])]
#[case(Some("missing"), vec![])]
#[case(Some("root"), vec![])]
#[case(None, vec![])]
fn navigation_by_tag_name(#[case] name: Option<&str>, #[case] expected: Vec<&str>) {
    let value = sample();
    let doc = Document::new("root", &value);
    let found = doc.document_element().get_elements_by_tag_name(name);
    assert_eq!(tags(&found.to_vec()), expected);
}

#[rstest]
fn navigation_nested_matches_are_all_returned() {
    let value = json!({"item": {"item": {"item": 1}}});
    let doc = Document::new("root", &value);
    let found = doc.document_element().get_elements_by_tag_name(Some("item"));
    assert_eq!(found.len(), 3);
    let depths: Vec<usize> = found
        .iter()
        .map(|element| {
            let mut depth = 0;
            let mut current = element.parent_node();
            while let Some(parent) = current {
                depth += 1;
                current = parent.parent_node();
            }
            depth
        })
        .collect();
    assert_eq!(depths, vec![1, 2, 3]);
}

#[rstest]
fn navigation_siblings() {
    let value = sample();
    let doc = Document::new("root", &value);
    let children = doc.document_element().child_elements();
    let a = children.get(0).unwrap();
    let b = children.get(1).unwrap();

    assert_eq!(a.next_sibling(), Ok(Some(b)));
    assert_eq!(b.previous_sibling(), Ok(Some(a)));
    assert_eq!(a.previous_sibling(), Ok(None));
    assert_eq!(b.next_sibling(), Ok(None));
}

#[rstest]
fn navigation_siblings_through_node_contract() {
    let value = json!([1, 2, 3]);
    let doc = Document::new("list", &value);
    let first = doc.document_element().first_child().unwrap();
    let second = DomNode::next_sibling(&first).unwrap().unwrap();
    let third = DomNode::next_sibling(&second).unwrap().unwrap();
    assert_eq!(DomNode::next_sibling(&third), Ok(None));
    assert_eq!(DomNode::previous_sibling(&second), Ok(Some(first)));
    assert_eq!(doc.document_element().last_child(), Some(third));
}

#[rstest]
fn navigation_root_has_no_siblings_to_ask_for() {
    let value = sample();
    let doc = Document::new("root", &value);
    let root = doc.document_element();
    assert_eq!(root.next_sibling().unwrap_err().kind, ErrorKind::Detached);
    assert_eq!(
        DomNode::previous_sibling(&root).unwrap_err().kind,
        ErrorKind::Detached
    );
}

#[rstest]
fn navigation_parents_and_owner_document() {
    let value = sample();
    let doc = Document::new("root", &value);
    let root = doc.document_element();
    let c = doc.get_elements_by_tag_name(Some("c")).get(0).unwrap();
    let b = c.parent_node().unwrap();
    assert_eq!(b.tag_name(), "b");
    assert_eq!(b.parent_node(), Some(root));
    assert!(root.parent_node().is_none());

    let text = c.first_child().unwrap();
    assert_eq!(text.parent_node(), Some(c));
    for node in [Node::Element(root), Node::Element(c), text] {
        assert!(std::ptr::eq(node.owner_document(), &doc));
    }
}

#[rstest]
fn navigation_identity_not_content() {
    let value = json!({"same": 1, "same ": 1});
    let doc = Document::new("root", &value);
    let children = doc.document_element().child_elements();
    let first = children.get(0).unwrap();
    let second = children.get(1).unwrap();
    assert_eq!(first.tag_name(), second.tag_name());
    assert_ne!(first, second);
    assert_eq!(children.index_of(&second), Some(1));
    assert!(first.is_same_node(&children.get(0).unwrap()));
    assert!(!first.is_same_node(&second));
}

#[rstest]
fn navigation_document_search_includes_document_element() {
    let value = sample();
    let doc = Document::new("root", &value);
    let all = doc.get_elements_by_tag_name(Some("*"));
    assert_eq!(tags(&all.to_vec()), vec!["root", "a", "b", "c"]);
    assert_eq!(tags(&doc.get_elements_by_tag_name(Some("c")).to_vec()), vec!["c"]);
    assert!(doc.get_elements_by_tag_name(None).is_empty());
}
