use std::fmt;
use std::rc::Rc;

use smol_str::SmolStr;

use crate::arena::{NodeId, SlotData};
use crate::constants::TEXT_NODE;
use crate::error::Error;
use crate::types::JsonValue;
use crate::Result;

use super::node::sealed::FromId;
use super::node::sibling;
use super::{Document, DomNode, Element, Node, NodeList};

/// Text form of a scalar JSON value, the only child of its element.
pub struct Text<'d, V> {
    document: &'d Document<V>,
    id: NodeId,
}

impl<'d, V> Clone for Text<'d, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'d, V> Copy for Text<'d, V> {}

impl<'d, V> PartialEq for Text<'d, V> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.document, other.document) && self.id == other.id
    }
}

impl<'d, V> Eq for Text<'d, V> {}

impl<'d, V: JsonValue> Text<'d, V> {
    pub fn data(&self) -> Rc<str> {
        self.document.with_slot(self.id, |slot| match &slot.data {
            SlotData::Text { text } => Rc::clone(text),
            _ => Rc::from(""),
        })
    }

    /// Length in UTF-16 code units.
    pub fn length(&self) -> usize {
        self.data().encode_utf16().count()
    }

    pub fn whole_text(&self) -> String {
        self.data().to_string()
    }

    pub fn is_element_content_whitespace(&self) -> bool {
        false
    }

    pub fn set_data(&self, _data: &str) -> Result<()> {
        Err(Error::not_supported("setData"))
    }

    pub fn append_data(&self, _data: &str) -> Result<()> {
        Err(Error::not_supported("appendData"))
    }

    pub fn insert_data(&self, _offset: usize, _data: &str) -> Result<()> {
        Err(Error::not_supported("insertData"))
    }

    pub fn delete_data(&self, _offset: usize, _count: usize) -> Result<()> {
        Err(Error::not_supported("deleteData"))
    }

    pub fn replace_data(&self, _offset: usize, _count: usize, _data: &str) -> Result<()> {
        Err(Error::not_supported("replaceData"))
    }

    pub fn split_text(&self, _offset: usize) -> Result<Text<'d, V>> {
        Err(Error::not_supported("splitText"))
    }

    pub fn replace_whole_text(&self, _content: &str) -> Result<Text<'d, V>> {
        Err(Error::not_supported("replaceWholeText"))
    }
}

impl<'d, V: JsonValue> FromId<'d, V> for Text<'d, V> {
    fn from_id(document: &'d Document<V>, id: NodeId) -> Self {
        Self { document, id }
    }
}

impl<'d, V: JsonValue> DomNode<'d, V> for Text<'d, V> {
    fn document(&self) -> &'d Document<V> {
        self.document
    }

    fn node_id(&self) -> NodeId {
        self.id
    }

    fn node_name(&self) -> SmolStr {
        self.document.name_of(self.id)
    }

    fn node_type(&self) -> u16 {
        TEXT_NODE
    }

    fn node_value(&self) -> Option<String> {
        Some(self.whole_text())
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

    fn text_content(&self) -> String {
        self.whole_text()
    }
}

impl<'d, V: JsonValue> fmt::Debug for Text<'d, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Text")
            .field("id", &self.id)
            .field("data", &self.data())
            .finish()
    }
}
