use smol_str::SmolStr;

use crate::constants::DEFAULT_ROOT_KEY;

/// Options for projecting a JSON value into a document.
///
/// # Examples
/// ```
/// use json_dom::DocumentOptions;
///
/// let opts = DocumentOptions::new().with_root_key("config");
/// assert_eq!(opts.root_key, "config");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// JSON key assigned to the top-level value. It becomes the root
    /// element's `name` attribute and, sanitized, its tag name.
    pub root_key: SmolStr,
}

impl DocumentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root_key(mut self, root_key: impl Into<SmolStr>) -> Self {
        self.root_key = root_key.into();
        self
    }
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            root_key: SmolStr::new_static(DEFAULT_ROOT_KEY),
        }
    }
}
