use std::fmt;

use serde_json::Value;
use smol_str::SmolStr;

/// Declared type of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl JsonKind {
    /// The type tag exposed through the `type` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            JsonKind::Object => "object",
            JsonKind::Array => "array",
            JsonKind::String => "string",
            JsonKind::Number => "number",
            JsonKind::Boolean => "boolean",
            JsonKind::Null => "null",
        }
    }

    /// Objects and arrays have children; everything else has a text value.
    pub const fn is_complex(self) -> bool {
        matches!(self, JsonKind::Object | JsonKind::Array)
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to a JSON tree, implemented by cheap copyable handles
/// (typically a shared reference into the parsed value).
///
/// A value is either complex, and then only `children` is meaningful, or a
/// scalar, and then only `text_value` is.
pub trait JsonValue: Copy {
    fn kind(self) -> JsonKind;

    fn is_complex(self) -> bool {
        self.kind().is_complex()
    }

    /// Ordered `(key, child)` pairs. Array indices are stringified. Empty for
    /// scalars.
    fn children(self) -> Vec<(SmolStr, Self)>;

    /// Textual form of a scalar. Empty for complex values.
    fn text_value(self) -> String;
}

impl<'v> JsonValue for &'v Value {
    fn kind(self) -> JsonKind {
        match self {
            Value::Object(_) => JsonKind::Object,
            Value::Array(_) => JsonKind::Array,
            Value::String(_) => JsonKind::String,
            Value::Number(_) => JsonKind::Number,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Null => JsonKind::Null,
        }
    }

    fn children(self) -> Vec<(SmolStr, Self)> {
        match self {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| (SmolStr::new(key), value))
                .collect(),
            Value::Array(items) => {
                let mut buffer = itoa::Buffer::new();
                items
                    .iter()
                    .enumerate()
                    .map(|(index, value)| (SmolStr::new(buffer.format(index)), value))
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    fn text_value(self) -> String {
        match self {
            Value::String(text) => text.clone(),
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            Value::Null => "null".to_string(),
            Value::Object(_) | Value::Array(_) => String::new(),
        }
    }
}
