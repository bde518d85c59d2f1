use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::arena::NodeId;
use crate::types::JsonValue;

use super::{Document, DomNode, Node};

/// Fixed, ordered sequence of nodes.
///
/// Lists handed out for an element's children share the element's cached
/// id slice, so repeated calls return the same list (see [`NodeList::ptr_eq`]).
pub struct NodeList<'d, V, N = Node<'d, V>> {
    document: &'d Document<V>,
    ids: Rc<[NodeId]>,
    marker: PhantomData<N>,
}

impl<'d, V, N> Clone for NodeList<'d, V, N> {
    fn clone(&self) -> Self {
        Self {
            document: self.document,
            ids: Rc::clone(&self.ids),
            marker: PhantomData,
        }
    }
}

impl<'d, V: JsonValue, N: DomNode<'d, V>> NodeList<'d, V, N> {
    pub(crate) fn new(document: &'d Document<V>, ids: Rc<[NodeId]>) -> Self {
        Self {
            document,
            ids,
            marker: PhantomData,
        }
    }

    pub(crate) fn empty(document: &'d Document<V>) -> Self {
        Self::new(document, Rc::from(Vec::new()))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<N> {
        self.id_at(index).map(|id| N::from_id(self.document, id))
    }

    /// DOM spelling of [`NodeList::get`].
    pub fn item(&self, index: usize) -> Option<N> {
        self.get(index)
    }

    pub fn first(&self) -> Option<N> {
        self.get(0)
    }

    pub fn last(&self) -> Option<N> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Position of `node` in this list, compared by identity.
    pub fn index_of<M: DomNode<'d, V>>(&self, node: &M) -> Option<usize> {
        if !std::ptr::eq(self.document, node.document()) {
            return None;
        }
        let id = node.node_id();
        self.ids.iter().position(|&candidate| candidate == id)
    }

    pub fn contains<M: DomNode<'d, V>>(&self, node: &M) -> bool {
        self.index_of(node).is_some()
    }

    pub fn iter(&self) -> Iter<'_, 'd, V, N> {
        Iter {
            document: self.document,
            ids: self.ids.iter(),
            marker: PhantomData,
        }
    }

    pub fn to_vec(&self) -> Vec<N> {
        self.iter().collect()
    }

    /// Whether both lists are the same cached instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.ids, &other.ids)
    }

    pub(crate) fn id_at(&self, index: usize) -> Option<NodeId> {
        self.ids.get(index).copied()
    }
}

impl<'d, V: JsonValue, N: DomNode<'d, V> + fmt::Debug> fmt::Debug for NodeList<'d, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, 'd, V, N> {
    document: &'d Document<V>,
    ids: std::slice::Iter<'a, NodeId>,
    marker: PhantomData<N>,
}

impl<'a, 'd, V: JsonValue, N: DomNode<'d, V>> Iterator for Iter<'a, 'd, V, N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        self.ids.next().map(|&id| N::from_id(self.document, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<'a, 'd, V: JsonValue, N: DomNode<'d, V>> ExactSizeIterator for Iter<'a, 'd, V, N> {}

impl<'a, 'd, V: JsonValue, N: DomNode<'d, V>> IntoIterator for &'a NodeList<'d, V, N> {
    type Item = N;
    type IntoIter = Iter<'a, 'd, V, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
