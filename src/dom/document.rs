use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use smallvec::smallvec;
use smol_str::SmolStr;

use crate::arena::{Arena, AttrEntries, AttrSource, NodeId, NodeKind, Slot, SlotData};
use crate::constants::{
    is_wildcard, ATTRIBUTE_NAME, ATTRIBUTE_TYPE, DOCUMENT_NODE, DOCUMENT_NODE_NAME,
};
use crate::error::Error;
use crate::options::DocumentOptions;
use crate::text::sanitize_tag_name;
use crate::types::JsonValue;
use crate::Result;

use super::node::sealed::FromId;
use super::{Attr, Element, Node, NodeList, Text};

/// Read-only DOM view over a JSON value.
///
/// The document owns every node of the projection. Nodes below the
/// document element are created on first access and then kept, so handles
/// and lists obtained twice refer to the same nodes.
///
/// Caches use `RefCell` and `Rc`, which makes the document `!Sync`:
/// traversal is single-threaded by construction.
///
/// # Examples
/// ```
/// use json_dom::{Document, DomNode};
/// use serde_json::json;
///
/// let value = json!({"user": {"name": "Ada"}});
/// let doc = Document::new("root", &value);
/// let names = doc.get_elements_by_tag_name(Some("name"));
/// assert_eq!(names.len(), 1);
/// let name = names.get(0).unwrap();
/// assert_eq!(name.first_child().unwrap().text_content(), "Ada");
/// ```
pub struct Document<V> {
    root_key: SmolStr,
    value: V,
    root: NodeId,
    root_list: Rc<[NodeId]>,
    no_children: Rc<[NodeId]>,
    no_attributes: Rc<AttrEntries>,
    arena: RefCell<Arena<V>>,
}

impl<V: JsonValue> Document<V> {
    pub fn new(root_key: impl Into<SmolStr>, value: V) -> Self {
        let root_key = root_key.into();
        let tag = SmolStr::new(sanitize_tag_name(&root_key));
        let mut arena = Arena::new();
        let root = arena.push(Slot::element(None, tag, root_key.clone(), value));
        tracing::debug!(root_key = %root_key, kind = %value.kind(), "created JSON DOM document");
        Self {
            root_key,
            value,
            root,
            root_list: Rc::from(vec![root]),
            no_children: Rc::from(Vec::new()),
            no_attributes: Rc::default(),
            arena: RefCell::new(arena),
        }
    }

    pub fn with_options(value: V, options: &DocumentOptions) -> Self {
        Self::new(options.root_key.clone(), value)
    }

    pub fn document_element(&self) -> Element<'_, V> {
        Element::from_id(self, self.root)
    }

    pub fn root_key(&self) -> &str {
        &self.root_key
    }

    pub fn json_element(&self) -> V {
        self.value
    }

    pub fn node_name(&self) -> &'static str {
        DOCUMENT_NODE_NAME
    }

    pub fn node_type(&self) -> u16 {
        DOCUMENT_NODE
    }

    /// The document element, as the only child of the document.
    pub fn child_nodes(&self) -> NodeList<'_, V> {
        NodeList::new(self, Rc::clone(&self.root_list))
    }

    /// Elements of the whole document in pre-order, the document element
    /// included, whose tag name equals `name` (`"*"` matches all).
    ///
    /// Unlike [`Element::get_elements_by_tag_name`], which only searches
    /// below the element, a matching document element is the first result.
    pub fn get_elements_by_tag_name(&self, name: Option<&str>) -> NodeList<'_, V, Element<'_, V>> {
        let Some(name) = name else {
            return NodeList::empty(self);
        };
        let root = self.document_element();
        let mut found = Vec::new();
        if is_wildcard(name) || root.tag_name() == name {
            found.push(self.root);
        }
        root.collect_by_tag_name(name, &mut found);
        NodeList::new(self, Rc::from(found))
    }

    /// Always `None`: the projection declares no ID attributes.
    pub fn get_element_by_id(&self, _element_id: &str) -> Option<Element<'_, V>> {
        None
    }

    /// Number of nodes materialized so far.
    pub fn node_count(&self) -> usize {
        self.arena.borrow().len()
    }

    pub fn get_elements_by_tag_name_ns(
        &self,
        _namespace_uri: Option<&str>,
        _local_name: &str,
    ) -> Result<NodeList<'_, V, Element<'_, V>>> {
        Err(Error::not_supported("getElementsByTagNameNS"))
    }

    pub fn create_element(&self, _tag_name: &str) -> Result<Element<'_, V>> {
        Err(Error::not_supported("createElement"))
    }

    pub fn create_element_ns(
        &self,
        _namespace_uri: Option<&str>,
        _qualified_name: &str,
    ) -> Result<Element<'_, V>> {
        Err(Error::not_supported("createElementNS"))
    }

    pub fn create_text_node(&self, _data: &str) -> Result<Text<'_, V>> {
        Err(Error::not_supported("createTextNode"))
    }

    pub fn create_attribute(&self, _name: &str) -> Result<Attr<'_, V>> {
        Err(Error::not_supported("createAttribute"))
    }

    pub fn import_node<'a>(&'a self, _node: Node<'a, V>, _deep: bool) -> Result<Node<'a, V>> {
        Err(Error::not_supported("importNode"))
    }

    pub fn adopt_node<'a>(&'a self, _node: Node<'a, V>) -> Result<Node<'a, V>> {
        Err(Error::not_supported("adoptNode"))
    }

    pub fn rename_node<'a>(
        &'a self,
        _node: Node<'a, V>,
        _namespace_uri: Option<&str>,
        _qualified_name: &str,
    ) -> Result<Node<'a, V>> {
        Err(Error::not_supported("renameNode"))
    }

    pub(crate) fn with_slot<R>(&self, id: NodeId, f: impl FnOnce(&Slot<V>) -> R) -> R {
        f(self.arena.borrow().get(id))
    }

    pub(crate) fn kind_of(&self, id: NodeId) -> NodeKind {
        self.with_slot(id, |slot| slot.kind)
    }

    pub(crate) fn name_of(&self, id: NodeId) -> SmolStr {
        self.with_slot(id, |slot| slot.name.clone())
    }

    /// Parent element of an element or text node. Attributes and the
    /// document element have none.
    pub(crate) fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.with_slot(id, |slot| match slot.kind {
            NodeKind::Attribute => None,
            NodeKind::Element | NodeKind::Text => slot.parent,
        })
    }

    pub(crate) fn child_ids(&self, id: NodeId) -> Rc<[NodeId]> {
        let (cached, value) = self.with_slot(id, |slot| {
            let value = match &slot.data {
                SlotData::Element { value, .. } => Some(*value),
                _ => None,
            };
            (slot.children.clone(), value)
        });
        if let Some(children) = cached {
            return children;
        }
        let Some(value) = value else {
            return Rc::clone(&self.no_children);
        };

        // Pull everything out of the JSON value before touching the arena.
        let ids: Rc<[NodeId]> = if value.is_complex() {
            let entries = value.children();
            let mut arena = self.arena.borrow_mut();
            let ids: Vec<NodeId> = entries
                .into_iter()
                .map(|(key, child)| {
                    let tag = SmolStr::new(sanitize_tag_name(&key));
                    arena.push(Slot::element(Some(id), tag, key, child))
                })
                .collect();
            Rc::from(ids)
        } else {
            let text: Rc<str> = Rc::from(value.text_value());
            let mut arena = self.arena.borrow_mut();
            Rc::from(vec![arena.push(Slot::text(id, text))])
        };

        self.arena.borrow_mut().get_mut(id).children = Some(Rc::clone(&ids));
        tracing::trace!(node = id.index(), children = ids.len(), "materialized child nodes");
        ids
    }

    pub(crate) fn attribute_entries(&self, id: NodeId) -> Rc<AttrEntries> {
        let (cached, kind) = self.with_slot(id, |slot| (slot.attributes.clone(), slot.kind));
        if let Some(entries) = cached {
            return entries;
        }
        if kind != NodeKind::Element {
            return Rc::clone(&self.no_attributes);
        }

        let mut arena = self.arena.borrow_mut();
        let name = arena.push(Slot::attribute(id, ATTRIBUTE_NAME, AttrSource::JsonKey));
        let ty = arena.push(Slot::attribute(id, ATTRIBUTE_TYPE, AttrSource::JsonType));
        let entries: Rc<AttrEntries> = Rc::new(smallvec![
            (SmolStr::new_static(ATTRIBUTE_NAME), name),
            (SmolStr::new_static(ATTRIBUTE_TYPE), ty),
        ]);
        arena.get_mut(id).attributes = Some(Rc::clone(&entries));
        tracing::trace!(node = id.index(), "materialized attributes");
        entries
    }
}

impl<V: JsonValue> fmt::Debug for Document<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("root_key", &self.root_key)
            .field("kind", &self.value.kind())
            .field("nodes", &self.node_count())
            .finish()
    }
}
