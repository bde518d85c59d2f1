use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use smol_str::SmolStr;

use crate::arena::AttrEntries;
use crate::error::Error;
use crate::types::JsonValue;
use crate::Result;

use super::{Attr, Document, DomNode};

/// Ordered name to node lookup, used for an element's attributes.
///
/// Built once per element; unknown names resolve to `None`.
pub struct NamedNodeMap<'d, V, N = Attr<'d, V>> {
    document: &'d Document<V>,
    entries: Rc<AttrEntries>,
    marker: PhantomData<N>,
}

impl<'d, V, N> Clone for NamedNodeMap<'d, V, N> {
    fn clone(&self) -> Self {
        Self {
            document: self.document,
            entries: Rc::clone(&self.entries),
            marker: PhantomData,
        }
    }
}

impl<'d, V: JsonValue, N: DomNode<'d, V>> NamedNodeMap<'d, V, N> {
    pub(crate) fn new(document: &'d Document<V>, entries: Rc<AttrEntries>) -> Self {
        Self {
            document,
            entries,
            marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_named_item(&self, name: &str) -> Option<N> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|&(_, id)| N::from_id(self.document, id))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(entry, _)| entry == name)
    }

    pub fn item(&self, index: usize) -> Option<N> {
        self.entries
            .get(index)
            .map(|&(_, id)| N::from_id(self.document, id))
    }

    pub fn names(&self) -> Vec<SmolStr> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn to_vec(&self) -> Vec<N> {
        self.entries
            .iter()
            .map(|&(_, id)| N::from_id(self.document, id))
            .collect()
    }

    /// Whether both maps are the same cached instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }

    pub fn get_named_item_ns(&self, _namespace_uri: Option<&str>, _local_name: &str) -> Result<Option<N>> {
        Err(Error::not_supported("getNamedItemNS"))
    }

    pub fn set_named_item(&self, _node: N) -> Result<Option<N>> {
        Err(Error::not_supported("setNamedItem"))
    }

    pub fn set_named_item_ns(&self, _node: N) -> Result<Option<N>> {
        Err(Error::not_supported("setNamedItemNS"))
    }

    pub fn remove_named_item(&self, _name: &str) -> Result<N> {
        Err(Error::not_supported("removeNamedItem"))
    }

    pub fn remove_named_item_ns(&self, _namespace_uri: Option<&str>, _local_name: &str) -> Result<N> {
        Err(Error::not_supported("removeNamedItemNS"))
    }
}

impl<'d, V: JsonValue, N: DomNode<'d, V> + fmt::Debug> fmt::Debug for NamedNodeMap<'d, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.entries
                    .iter()
                    .map(|(name, id)| (name, N::from_id(self.document, *id))),
            )
            .finish()
    }
}
