use std::fmt;

use smol_str::SmolStr;

use crate::arena::{AttrSource, NodeId, SlotData};
use crate::constants::ATTRIBUTE_NODE;
use crate::error::Error;
use crate::types::JsonValue;
use crate::Result;

use super::node::sealed::FromId;
use super::{Document, DomNode, Element, Node, NodeList};

/// Synthetic attribute of a projected element.
///
/// The value is not stored: every call to [`Attr::value`] reads it again
/// from the owning element's JSON key or JSON value.
pub struct Attr<'d, V> {
    document: &'d Document<V>,
    id: NodeId,
}

impl<'d, V> Clone for Attr<'d, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'d, V> Copy for Attr<'d, V> {}

impl<'d, V> PartialEq for Attr<'d, V> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.document, other.document) && self.id == other.id
    }
}

impl<'d, V> Eq for Attr<'d, V> {}

impl<'d, V: JsonValue> Attr<'d, V> {
    pub fn name(&self) -> SmolStr {
        self.document.name_of(self.id)
    }

    pub fn value(&self) -> String {
        let Some((source, owner)) = self.source() else {
            return String::new();
        };
        match source {
            AttrSource::JsonKey => owner.json_key().to_string(),
            AttrSource::JsonType => owner.json_element().kind().as_str().to_string(),
        }
    }

    pub fn owner_element(&self) -> Option<Element<'d, V>> {
        self.source().map(|(_, owner)| owner)
    }

    /// Always true: both attributes are present on every element.
    pub fn specified(&self) -> bool {
        true
    }

    pub fn is_id(&self) -> bool {
        false
    }

    pub fn set_value(&self, _value: &str) -> Result<()> {
        Err(Error::not_supported("setValue"))
    }

    fn source(&self) -> Option<(AttrSource, Element<'d, V>)> {
        let (source, owner) = self.document.with_slot(self.id, |slot| match slot.data {
            SlotData::Attribute { source } => slot.parent.map(|owner| (source, owner)),
            _ => None,
        })?;
        Some((source, Element::from_id(self.document, owner)))
    }
}

impl<'d, V: JsonValue> FromId<'d, V> for Attr<'d, V> {
    fn from_id(document: &'d Document<V>, id: NodeId) -> Self {
        Self { document, id }
    }
}

impl<'d, V: JsonValue> DomNode<'d, V> for Attr<'d, V> {
    fn document(&self) -> &'d Document<V> {
        self.document
    }

    fn node_id(&self) -> NodeId {
        self.id
    }

    fn node_name(&self) -> SmolStr {
        self.name()
    }

    fn node_type(&self) -> u16 {
        ATTRIBUTE_NODE
    }

    fn node_value(&self) -> Option<String> {
        Some(self.value())
    }

    // Attributes are not children of their element.
    fn parent_node(&self) -> Option<Element<'d, V>> {
        None
    }

    fn child_nodes(&self) -> NodeList<'d, V> {
        NodeList::empty(self.document)
    }

    fn next_sibling(&self) -> Result<Option<Node<'d, V>>> {
        Ok(None)
    }

    fn previous_sibling(&self) -> Result<Option<Node<'d, V>>> {
        Ok(None)
    }

    fn text_content(&self) -> String {
        self.value()
    }

    fn local_name(&self) -> Option<SmolStr> {
        Some(self.name())
    }
}

impl<'d, V: JsonValue> fmt::Debug for Attr<'d, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attr")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("value", &self.value())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use crate::dom::{Document, DomNode};
    use crate::ATTRIBUTE_NODE;

    #[rstest]
    fn test_attribute_values() {
        let value = json!({"first name": [1, 2]});
        let doc = Document::new("root", &value);
        let child = doc.document_element().child_elements().to_vec();
        let element = child[0];
        let name = element.get_attribute_node("name").unwrap();
        let ty = element.get_attribute_node("type").unwrap();
        assert_eq!(name.value(), "first name");
        assert_eq!(ty.value(), "array");
        assert_eq!(name.node_type(), ATTRIBUTE_NODE);
        assert_eq!(name.node_value().as_deref(), Some("first name"));
        assert_eq!(name.owner_element(), Some(element));
        assert!(name.specified());
        assert!(!name.is_id());
    }

    #[rstest]
    fn test_attribute_is_detached_from_tree() {
        let value = json!("x");
        let doc = Document::new("s", &value);
        let attr = doc.document_element().get_attribute_node("type").unwrap();
        assert_eq!(attr.parent_node(), None);
        assert_eq!(attr.next_sibling(), Ok(None));
        assert_eq!(attr.previous_sibling(), Ok(None));
        assert!(!attr.has_child_nodes());
        assert!(attr.set_value("number").is_err());
        assert_eq!(attr.value(), "string");
    }
}
