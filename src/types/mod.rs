mod value;

pub use value::{JsonKind, JsonValue};
