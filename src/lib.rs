//! Read-only DOM projection of JSON values.
//!
//! Tooling written against the document object model (XPath evaluators,
//! tree printers, visitors) can walk a JSON value through this crate without
//! knowing it is JSON. Each `(key, value)` pair becomes an element whose tag
//! is the sanitized key, with a `name` attribute holding the original key and
//! a `type` attribute holding the JSON type. Objects and arrays become child
//! elements; scalars become a single text child.
//!
//! ```
//! use json_dom::{Document, DomNode};
//! use serde_json::json;
//!
//! let value = json!({"a": 1, "b": {"c": true}});
//! let doc = Document::new("root", &value);
//! let root = doc.document_element();
//! assert_eq!(root.get_attribute("type"), "object");
//!
//! let c = doc.get_elements_by_tag_name(Some("c")).get(0).unwrap();
//! assert_eq!(c.first_child().unwrap().text_content(), "true");
//! ```

mod arena;
pub mod constants;
pub mod dom;
pub mod error;
pub mod options;
pub mod text;
pub mod types;

pub use crate::arena::NodeId;
pub use crate::constants::{
    ATTRIBUTE_NAME, ATTRIBUTE_NODE, ATTRIBUTE_TYPE, DOCUMENT_NODE, ELEMENT_NODE, TEXT_NODE,
    TEXT_NODE_NAME, WILDCARD,
};
pub use crate::dom::{Attr, Document, DomNode, Element, NamedNodeMap, Node, NodeList, Text};
pub use crate::error::{Error, ErrorKind};
pub use crate::options::DocumentOptions;
pub use crate::text::{is_xml_name, sanitize_tag_name};
pub use crate::types::{JsonKind, JsonValue};

pub type Result<T> = std::result::Result<T, Error>;

/// Project `value` under the default root key.
pub fn to_document<V: JsonValue>(value: V) -> Document<V> {
    to_document_with_options(value, &DocumentOptions::default())
}

pub fn to_document_with_options<V: JsonValue>(value: V, options: &DocumentOptions) -> Document<V> {
    Document::with_options(value, options)
}
