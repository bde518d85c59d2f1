use std::fmt;
use std::rc::Rc;

use smol_str::SmolStr;

use crate::arena::{NodeId, SlotData};
use crate::constants::{is_wildcard, ELEMENT_NODE};
use crate::error::Error;
use crate::types::JsonValue;
use crate::Result;

use super::node::sealed::FromId;
use super::node::sibling;
use super::{Attr, Document, DomNode, NamedNodeMap, Node, NodeList};

/// Projection of one `(key, value)` pair of a JSON tree.
///
/// The tag name is the sanitized key. Every element carries exactly two
/// attributes, `name` (the verbatim key) and `type` (the value's type tag).
/// A complex value yields one child element per entry; a scalar yields a
/// single text child. Attributes and children are built on first access
/// and cached for the document's lifetime.
pub struct Element<'d, V> {
    document: &'d Document<V>,
    id: NodeId,
}

impl<'d, V> Clone for Element<'d, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'d, V> Copy for Element<'d, V> {}

impl<'d, V> PartialEq for Element<'d, V> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.document, other.document) && self.id == other.id
    }
}

impl<'d, V> Eq for Element<'d, V> {}

impl<'d, V: JsonValue> Element<'d, V> {
    pub fn tag_name(&self) -> SmolStr {
        self.document.name_of(self.id)
    }

    /// The original JSON key, before sanitizing.
    pub fn json_key(&self) -> SmolStr {
        self.entry().0
    }

    pub fn json_element(&self) -> V {
        self.entry().1
    }

    /// Value of the named attribute, or an empty string when absent.
    pub fn get_attribute(&self, name: &str) -> String {
        self.get_attribute_node(name)
            .map(|attr| attr.value())
            .unwrap_or_default()
    }

    pub fn get_attribute_node(&self, name: &str) -> Option<Attr<'d, V>> {
        self.attributes().get_named_item(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes().contains(name)
    }

    pub fn attributes(&self) -> NamedNodeMap<'d, V> {
        NamedNodeMap::new(self.document, self.document.attribute_entries(self.id))
    }

    /// Child nodes that are elements, in document order.
    pub fn child_elements(&self) -> NodeList<'d, V, Element<'d, V>> {
        let ids: Vec<NodeId> = self
            .child_nodes()
            .iter()
            .filter_map(|node| node.as_element())
            .map(|element| element.id)
            .collect();
        NodeList::new(self.document, Rc::from(ids))
    }

    /// Descendant elements in pre-order whose tag name equals `name`, or all
    /// of them for `"*"`. `None` matches nothing.
    pub fn get_elements_by_tag_name(&self, name: Option<&str>) -> NodeList<'d, V, Element<'d, V>> {
        let Some(name) = name else {
            return NodeList::empty(self.document);
        };
        let mut found = Vec::new();
        self.collect_by_tag_name(name, &mut found);
        NodeList::new(self.document, Rc::from(found))
    }

    pub(crate) fn collect_by_tag_name(&self, name: &str, found: &mut Vec<NodeId>) {
        for child in self.child_nodes().iter() {
            let Node::Element(child) = child else {
                continue;
            };
            if is_wildcard(name) || child.tag_name() == name {
                found.push(child.id);
            }
            child.collect_by_tag_name(name, found);
        }
    }

    /// Following sibling element.
    ///
    /// Fails with [`ErrorKind::Detached`](crate::ErrorKind::Detached) on the
    /// document element, which has no parent.
    pub fn next_sibling(&self) -> Result<Option<Element<'d, V>>> {
        sibling(self.document, self.id, true, "nextSibling")
    }

    /// Preceding sibling element. Fails like [`Element::next_sibling`].
    pub fn previous_sibling(&self) -> Result<Option<Element<'d, V>>> {
        sibling(self.document, self.id, false, "previousSibling")
    }

    pub fn get_attribute_ns(&self, _namespace_uri: Option<&str>, _local_name: &str) -> Result<String> {
        Err(Error::not_supported("getAttributeNS"))
    }

    pub fn get_attribute_node_ns(
        &self,
        _namespace_uri: Option<&str>,
        _local_name: &str,
    ) -> Result<Option<Attr<'d, V>>> {
        Err(Error::not_supported("getAttributeNodeNS"))
    }

    pub fn get_elements_by_tag_name_ns(
        &self,
        _namespace_uri: Option<&str>,
        _local_name: &str,
    ) -> Result<NodeList<'d, V, Element<'d, V>>> {
        Err(Error::not_supported("getElementsByTagNameNS"))
    }

    pub fn has_attribute_ns(&self, _namespace_uri: Option<&str>, _local_name: &str) -> Result<bool> {
        Err(Error::not_supported("hasAttributeNS"))
    }

    pub fn set_attribute(&self, _name: &str, _value: &str) -> Result<()> {
        Err(Error::not_supported("setAttribute"))
    }

    pub fn set_attribute_ns(
        &self,
        _namespace_uri: Option<&str>,
        _qualified_name: &str,
        _value: &str,
    ) -> Result<()> {
        Err(Error::not_supported("setAttributeNS"))
    }

    pub fn set_attribute_node(&self, _new_attr: Attr<'d, V>) -> Result<Option<Attr<'d, V>>> {
        Err(Error::not_supported("setAttributeNode"))
    }

    pub fn set_attribute_node_ns(&self, _new_attr: Attr<'d, V>) -> Result<Option<Attr<'d, V>>> {
        Err(Error::not_supported("setAttributeNodeNS"))
    }

    pub fn remove_attribute(&self, _name: &str) -> Result<()> {
        Err(Error::not_supported("removeAttribute"))
    }

    pub fn remove_attribute_ns(&self, _namespace_uri: Option<&str>, _local_name: &str) -> Result<()> {
        Err(Error::not_supported("removeAttributeNS"))
    }

    pub fn remove_attribute_node(&self, _old_attr: Attr<'d, V>) -> Result<Attr<'d, V>> {
        Err(Error::not_supported("removeAttributeNode"))
    }

    pub fn set_id_attribute(&self, _name: &str, _is_id: bool) -> Result<()> {
        Err(Error::not_supported("setIdAttribute"))
    }

    pub fn set_id_attribute_ns(
        &self,
        _namespace_uri: Option<&str>,
        _local_name: &str,
        _is_id: bool,
    ) -> Result<()> {
        Err(Error::not_supported("setIdAttributeNS"))
    }

    pub fn set_id_attribute_node(&self, _id_attr: Attr<'d, V>, _is_id: bool) -> Result<()> {
        Err(Error::not_supported("setIdAttributeNode"))
    }

    fn entry(&self) -> (SmolStr, V) {
        self.document.with_slot(self.id, |slot| match &slot.data {
            SlotData::Element { key, value } => (key.clone(), *value),
            _ => unreachable!("element handle points at a non-element slot"),
        })
    }
}

impl<'d, V: JsonValue> FromId<'d, V> for Element<'d, V> {
    fn from_id(document: &'d Document<V>, id: NodeId) -> Self {
        Self { document, id }
    }
}

impl<'d, V: JsonValue> DomNode<'d, V> for Element<'d, V> {
    fn document(&self) -> &'d Document<V> {
        self.document
    }

    fn node_id(&self) -> NodeId {
        self.id
    }

    fn node_name(&self) -> SmolStr {
        self.tag_name()
    }

    fn node_type(&self) -> u16 {
        ELEMENT_NODE
    }

    fn node_value(&self) -> Option<String> {
        None
    }

    fn parent_node(&self) -> Option<Element<'d, V>> {
        self.document
            .parent_of(self.id)
            .map(|parent| Element::from_id(self.document, parent))
    }

    fn child_nodes(&self) -> NodeList<'d, V> {
        NodeList::new(self.document, self.document.child_ids(self.id))
    }

    fn next_sibling(&self) -> Result<Option<Node<'d, V>>> {
        sibling(self.document, self.id, true, "nextSibling")
    }

    fn previous_sibling(&self) -> Result<Option<Node<'d, V>>> {
        sibling(self.document, self.id, false, "previousSibling")
    }

    // Text lives in the synthetic text child only.
    fn text_content(&self) -> String {
        String::new()
    }

    fn attributes(&self) -> Option<NamedNodeMap<'d, V>> {
        Some(Element::attributes(self))
    }

    fn has_attributes(&self) -> bool {
        !Element::attributes(self).is_empty()
    }

    fn local_name(&self) -> Option<SmolStr> {
        Some(self.tag_name())
    }
}

impl<'d, V: JsonValue> fmt::Debug for Element<'d, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("tag", &self.tag_name())
            .finish()
    }
}
