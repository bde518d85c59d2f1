use std::rc::Rc;

use smallvec::SmallVec;
use smol_str::SmolStr;

/// Index of a node inside its document's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    Attribute,
}

/// Where a synthetic attribute reads its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrSource {
    /// The owning element's JSON key, verbatim.
    JsonKey,
    /// The declared type tag of the owning element's JSON value.
    JsonType,
}

#[derive(Debug, Clone)]
pub enum SlotData<V> {
    Element { key: SmolStr, value: V },
    Text { text: Rc<str> },
    Attribute { source: AttrSource },
}

pub(crate) type AttrEntries = SmallVec<[(SmolStr, NodeId); 2]>;

#[derive(Debug)]
pub struct Slot<V> {
    pub kind: NodeKind,
    /// Element parent for elements and text; owning element for attributes.
    pub parent: Option<NodeId>,
    pub name: SmolStr,
    pub data: SlotData<V>,
    pub children: Option<Rc<[NodeId]>>,
    pub attributes: Option<Rc<AttrEntries>>,
}

impl<V> Slot<V> {
    pub fn element(parent: Option<NodeId>, tag: SmolStr, key: SmolStr, value: V) -> Self {
        Self {
            kind: NodeKind::Element,
            parent,
            name: tag,
            data: SlotData::Element { key, value },
            children: None,
            attributes: None,
        }
    }

    pub fn text(parent: NodeId, text: Rc<str>) -> Self {
        Self {
            kind: NodeKind::Text,
            parent: Some(parent),
            name: SmolStr::new_static(crate::constants::TEXT_NODE_NAME),
            data: SlotData::Text { text },
            children: None,
            attributes: None,
        }
    }

    pub fn attribute(owner: NodeId, name: &'static str, source: AttrSource) -> Self {
        Self {
            kind: NodeKind::Attribute,
            parent: Some(owner),
            name: SmolStr::new_static(name),
            data: SlotData::Attribute { source },
            children: None,
            attributes: None,
        }
    }
}

/// Append-only node storage. Slots are never removed or reordered, so a
/// `NodeId` stays valid for the arena's lifetime.
#[derive(Debug)]
pub struct Arena<V> {
    pub slots: Vec<Slot<V>>,
}

impl<V> Default for Arena<V> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<V> Arena<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, slot: Slot<V>) -> NodeId {
        let id = NodeId::new(self.slots.len());
        self.slots.push(slot);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Slot<V> {
        &self.slots[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Slot<V> {
        &mut self.slots[id.index()]
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}
