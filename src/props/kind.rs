use std::fmt;

use serde_json::Value;

/// The value type a prop accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropKind {
    String,
    Number,
    Bool,
    /// A renderable child: text, or a list of children.
    Node,
    /// An element type override such as a tag name.
    ElementType,
    /// One of a fixed set of string keys, e.g. the declared variants.
    OneOf(Vec<String>),
    /// Anything. Used for opaque system style props.
    Any,
}

impl PropKind {
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Bool => value.is_boolean(),
            Self::Node => value.is_string() || value.is_array() || value.is_null(),
            Self::ElementType => value.as_str().is_some_and(|name| !name.is_empty()),
            Self::OneOf(keys) => value
                .as_str()
                .is_some_and(|key| keys.iter().any(|allowed| allowed == key)),
            Self::Any => true,
        }
    }
}

impl fmt::Display for PropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("a string"),
            Self::Number => f.write_str("a number"),
            Self::Bool => f.write_str("a boolean"),
            Self::Node => f.write_str("a renderable node"),
            Self::ElementType => f.write_str("an element type"),
            Self::OneOf(keys) => write!(f, "one of [{}]", keys.join(", ")),
            Self::Any => f.write_str("any value"),
        }
    }
}
