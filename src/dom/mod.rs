//! DOM-shaped view of a JSON tree.
//!
//! A [`Document`] wraps one JSON value as its document element. Elements,
//! text nodes and attributes are `Copy` handles into the document's arena;
//! the closed [`Node`] enum and the [`DomNode`] trait give generic tree
//! walkers one navigation surface over all three.

mod attr;
mod document;
mod element;
mod list;
mod map;
mod node;
mod text;

pub use attr::Attr;
pub use document::Document;
pub use element::Element;
pub use list::{Iter, NodeList};
pub use map::NamedNodeMap;
pub use node::{DomNode, Node};
pub use text::Text;
