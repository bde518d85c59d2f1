use std::fmt;

use smol_str::SmolStr;

use crate::arena::{NodeId, NodeKind};
use crate::error::Error;
use crate::types::JsonValue;
use crate::Result;

use super::{Attr, Document, Element, NamedNodeMap, NodeList, Text};
use self::sealed::FromId;

pub(crate) mod sealed {
    use crate::arena::NodeId;
    use crate::dom::Document;

    /// Builds a handle from an arena index. Crate-private so that every
    /// handle in circulation was reached through its own document.
    pub trait FromId<'d, V: 'd>: Sized {
        fn from_id(document: &'d Document<V>, id: NodeId) -> Self;
    }
}

/// Navigation contract shared by every node of a projected document.
///
/// Handles are cheap `Copy` values: a document reference plus an arena
/// index. Two handles denote the same node exactly when both match, so
/// `==` is identity, not structural equality.
///
/// Every mutation entry point exists only to complete the DOM surface and
/// returns an [`ErrorKind::NotSupported`](crate::ErrorKind::NotSupported)
/// error.
///
/// Handles only come from navigation; an arena index alone cannot be turned
/// back into a node:
///
/// ```compile_fail
/// use json_dom::{Document, DomNode, Element};
///
/// let value = serde_json::json!({"a": 1});
/// let doc = Document::new("root", &value);
/// let id = doc.document_element().node_id();
/// let _ = Element::from_id(&doc, id);
/// ```
pub trait DomNode<'d, V: JsonValue + 'd>: Copy + FromId<'d, V> {
    fn document(&self) -> &'d Document<V>;

    fn node_id(&self) -> NodeId;

    fn node_name(&self) -> SmolStr;

    fn node_type(&self) -> u16;

    fn node_value(&self) -> Option<String>;

    fn parent_node(&self) -> Option<Element<'d, V>>;

    fn child_nodes(&self) -> NodeList<'d, V>;

    fn next_sibling(&self) -> Result<Option<Node<'d, V>>>;

    fn previous_sibling(&self) -> Result<Option<Node<'d, V>>>;

    fn text_content(&self) -> String;

    fn owner_document(&self) -> &'d Document<V> {
        self.document()
    }

    fn first_child(&self) -> Option<Node<'d, V>> {
        self.child_nodes().first()
    }

    fn last_child(&self) -> Option<Node<'d, V>> {
        self.child_nodes().last()
    }

    fn has_child_nodes(&self) -> bool {
        !self.child_nodes().is_empty()
    }

    fn attributes(&self) -> Option<NamedNodeMap<'d, V>> {
        None
    }

    fn has_attributes(&self) -> bool {
        false
    }

    fn is_same_node<N: DomNode<'d, V>>(&self, other: &N) -> bool {
        std::ptr::eq(self.document(), other.document()) && self.node_id() == other.node_id()
    }

    fn namespace_uri(&self) -> Option<String> {
        None
    }

    fn prefix(&self) -> Option<String> {
        None
    }

    fn local_name(&self) -> Option<SmolStr> {
        None
    }

    fn lookup_namespace_uri(&self, _prefix: Option<&str>) -> Option<String> {
        None
    }

    fn append_child(&self, _new_child: Node<'d, V>) -> Result<Node<'d, V>> {
        Err(Error::not_supported("appendChild"))
    }

    fn insert_before(
        &self,
        _new_child: Node<'d, V>,
        _ref_child: Option<Node<'d, V>>,
    ) -> Result<Node<'d, V>> {
        Err(Error::not_supported("insertBefore"))
    }

    fn remove_child(&self, _old_child: Node<'d, V>) -> Result<Node<'d, V>> {
        Err(Error::not_supported("removeChild"))
    }

    fn replace_child(
        &self,
        _new_child: Node<'d, V>,
        _old_child: Node<'d, V>,
    ) -> Result<Node<'d, V>> {
        Err(Error::not_supported("replaceChild"))
    }

    fn set_node_value(&self, _value: &str) -> Result<()> {
        Err(Error::not_supported("setNodeValue"))
    }

    fn set_text_content(&self, _text: &str) -> Result<()> {
        Err(Error::not_supported("setTextContent"))
    }

    fn set_prefix(&self, _prefix: &str) -> Result<()> {
        Err(Error::not_supported("setPrefix"))
    }

    fn normalize(&self) -> Result<()> {
        Err(Error::not_supported("normalize"))
    }

    fn clone_node(&self, _deep: bool) -> Result<Node<'d, V>> {
        Err(Error::not_supported("cloneNode"))
    }
}

/// Any node of a projected document.
pub enum Node<'d, V> {
    Element(Element<'d, V>),
    Text(Text<'d, V>),
    Attribute(Attr<'d, V>),
}

impl<'d, V> Clone for Node<'d, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'d, V> Copy for Node<'d, V> {}

impl<'d, V> PartialEq for Node<'d, V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Element(a), Node::Element(b)) => a == b,
            (Node::Text(a), Node::Text(b)) => a == b,
            (Node::Attribute(a), Node::Attribute(b)) => a == b,
            _ => false,
        }
    }
}

impl<'d, V> Eq for Node<'d, V> {}

impl<'d, V: JsonValue> fmt::Debug for Node<'d, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(node) => fmt::Debug::fmt(node, f),
            Node::Text(node) => fmt::Debug::fmt(node, f),
            Node::Attribute(node) => fmt::Debug::fmt(node, f),
        }
    }
}

impl<'d, V> Node<'d, V> {
    pub fn as_element(&self) -> Option<Element<'d, V>> {
        match self {
            Node::Element(element) => Some(*element),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<Text<'d, V>> {
        match self {
            Node::Text(text) => Some(*text),
            _ => None,
        }
    }

    pub fn as_attribute(&self) -> Option<Attr<'d, V>> {
        match self {
            Node::Attribute(attr) => Some(*attr),
            _ => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }
}

impl<'d, V> From<Element<'d, V>> for Node<'d, V> {
    fn from(element: Element<'d, V>) -> Self {
        Node::Element(element)
    }
}

impl<'d, V> From<Text<'d, V>> for Node<'d, V> {
    fn from(text: Text<'d, V>) -> Self {
        Node::Text(text)
    }
}

impl<'d, V> From<Attr<'d, V>> for Node<'d, V> {
    fn from(attr: Attr<'d, V>) -> Self {
        Node::Attribute(attr)
    }
}

impl<'d, V: JsonValue> FromId<'d, V> for Node<'d, V> {
    fn from_id(document: &'d Document<V>, id: NodeId) -> Self {
        match document.kind_of(id) {
            NodeKind::Element => Node::Element(Element::from_id(document, id)),
            NodeKind::Text => Node::Text(Text::from_id(document, id)),
            NodeKind::Attribute => Node::Attribute(Attr::from_id(document, id)),
        }
    }
}

impl<'d, V: JsonValue> DomNode<'d, V> for Node<'d, V> {
    fn document(&self) -> &'d Document<V> {
        match self {
            Node::Element(node) => node.document(),
            Node::Text(node) => node.document(),
            Node::Attribute(node) => node.document(),
        }
    }

    fn node_id(&self) -> NodeId {
        match self {
            Node::Element(node) => node.node_id(),
            Node::Text(node) => node.node_id(),
            Node::Attribute(node) => node.node_id(),
        }
    }

    fn node_name(&self) -> SmolStr {
        match self {
            Node::Element(node) => node.node_name(),
            Node::Text(node) => node.node_name(),
            Node::Attribute(node) => node.node_name(),
        }
    }

    fn node_type(&self) -> u16 {
        match self {
            Node::Element(node) => node.node_type(),
            Node::Text(node) => node.node_type(),
            Node::Attribute(node) => node.node_type(),
        }
    }

    fn node_value(&self) -> Option<String> {
        match self {
            Node::Element(node) => DomNode::node_value(node),
            Node::Text(node) => DomNode::node_value(node),
            Node::Attribute(node) => DomNode::node_value(node),
        }
    }

    fn parent_node(&self) -> Option<Element<'d, V>> {
        match self {
            Node::Element(node) => node.parent_node(),
            Node::Text(node) => node.parent_node(),
            Node::Attribute(node) => node.parent_node(),
        }
    }

    fn child_nodes(&self) -> NodeList<'d, V> {
        match self {
            Node::Element(node) => node.child_nodes(),
            Node::Text(node) => node.child_nodes(),
            Node::Attribute(node) => node.child_nodes(),
        }
    }

    fn next_sibling(&self) -> Result<Option<Node<'d, V>>> {
        match self {
            Node::Element(node) => DomNode::next_sibling(node),
            Node::Text(node) => DomNode::next_sibling(node),
            Node::Attribute(node) => DomNode::next_sibling(node),
        }
    }

    fn previous_sibling(&self) -> Result<Option<Node<'d, V>>> {
        match self {
            Node::Element(node) => DomNode::previous_sibling(node),
            Node::Text(node) => DomNode::previous_sibling(node),
            Node::Attribute(node) => DomNode::previous_sibling(node),
        }
    }

    fn text_content(&self) -> String {
        match self {
            Node::Element(node) => node.text_content(),
            Node::Text(node) => node.text_content(),
            Node::Attribute(node) => node.text_content(),
        }
    }

    fn attributes(&self) -> Option<NamedNodeMap<'d, V>> {
        match self {
            Node::Element(node) => DomNode::attributes(node),
            _ => None,
        }
    }

    fn has_attributes(&self) -> bool {
        match self {
            Node::Element(node) => DomNode::has_attributes(node),
            _ => false,
        }
    }

    fn local_name(&self) -> Option<SmolStr> {
        match self {
            Node::Element(node) => node.local_name(),
            Node::Text(node) => node.local_name(),
            Node::Attribute(node) => node.local_name(),
        }
    }
}

/// Neighbor of `id` inside its parent's child list.
pub(crate) fn sibling<'d, V, N>(
    document: &'d Document<V>,
    id: NodeId,
    forward: bool,
    operation: &'static str,
) -> Result<Option<N>>
where
    V: JsonValue,
    N: DomNode<'d, V>,
{
    let parent = document
        .parent_of(id)
        .ok_or_else(|| Error::detached(operation))?;
    let siblings: NodeList<'d, V> = NodeList::new(document, document.child_ids(parent));
    let this = Node::from_id(document, id);
    let Some(index) = siblings.index_of(&this) else {
        return Ok(None);
    };
    let neighbor = if forward {
        index.checked_add(1)
    } else {
        index.checked_sub(1)
    };
    Ok(neighbor
        .and_then(|index| siblings.id_at(index))
        .map(|id| N::from_id(document, id)))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn leaf_and_identity<'d, V: JsonValue + 'd, N: DomNode<'d, V>>(node: N, other: N) -> (bool, bool) {
        (node.has_child_nodes(), node.is_same_node(&other))
    }

    #[rstest]
    fn test_default_bodies_work_through_generic_bounds() {
        let value = json!({"a": 1, "b": {}});
        let doc = Document::new("root", &value);
        let children = doc.document_element().child_elements().to_vec();
        assert_eq!(leaf_and_identity(children[0], children[0]), (true, true));
        assert_eq!(leaf_and_identity(children[1], children[0]), (false, false));
        let text = children[0].first_child().unwrap();
        assert_eq!(leaf_and_identity(text, text), (false, true));
    }

    #[rstest]
    fn test_equal_indices_in_other_documents_are_different_nodes() {
        let big = json!({"a": {"b": {"c": 1}}});
        let small = json!({"a": 1});
        let big_doc = Document::new("root", &big);
        let small_doc = Document::new("root", &small);
        let big_a = big_doc.document_element().child_elements().get(0).unwrap();
        let small_a = small_doc.document_element().child_elements().get(0).unwrap();
        assert_eq!(big_a.node_id(), small_a.node_id());
        assert!(!big_a.is_same_node(&small_a));
        assert_ne!(Node::from(big_a), Node::from(small_a));
    }
}
