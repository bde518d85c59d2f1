/// Attribute carrying the element's original JSON key.
pub const ATTRIBUTE_NAME: &str = "name";

/// Attribute carrying the declared type of the element's JSON value.
pub const ATTRIBUTE_TYPE: &str = "type";

/// The special tag name matching every element.
pub const WILDCARD: &str = "*";

pub const DEFAULT_ROOT_KEY: &str = "root";

pub const TEXT_NODE_NAME: &str = "#text";

pub const DOCUMENT_NODE_NAME: &str = "#document";

pub const ELEMENT_NODE: u16 = 1;
pub const ATTRIBUTE_NODE: u16 = 2;
pub const TEXT_NODE: u16 = 3;
pub const DOCUMENT_NODE: u16 = 9;

#[inline]
pub fn is_wildcard(name: &str) -> bool {
    name == WILDCARD
}
