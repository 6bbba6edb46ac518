use serde_json::Value;

use crate::props::{PropBag, PropKind, PropShape};

const GLOBAL_PROPS: &[(&str, PropKind)] = &[
    ("id", PropKind::String),
    ("className", PropKind::String),
    ("title", PropKind::String),
    ("role", PropKind::String),
    ("hidden", PropKind::Bool),
    ("tabIndex", PropKind::Number),
];

const NO_PROPS: &[(&str, PropKind)] = &[];

const LABEL_PROPS: &[(&str, PropKind)] = &[("htmlFor", PropKind::String)];

const ANCHOR_PROPS: &[(&str, PropKind)] = &[
    ("href", PropKind::String),
    ("target", PropKind::String),
    ("rel", PropKind::String),
    ("download", PropKind::Any),
];

const BUTTON_PROPS: &[(&str, PropKind)] = &[
    ("type", PropKind::String),
    ("name", PropKind::String),
    ("value", PropKind::String),
    ("form", PropKind::String),
    ("disabled", PropKind::Bool),
];

const INPUT_PROPS: &[(&str, PropKind)] = &[
    ("type", PropKind::String),
    ("name", PropKind::String),
    ("value", PropKind::Any),
    ("placeholder", PropKind::String),
    ("disabled", PropKind::Bool),
    ("readOnly", PropKind::Bool),
    ("required", PropKind::Bool),
    ("checked", PropKind::Bool),
    ("min", PropKind::Any),
    ("max", PropKind::Any),
];

const IMAGE_PROPS: &[(&str, PropKind)] = &[
    ("src", PropKind::String),
    ("alt", PropKind::String),
    ("width", PropKind::Any),
    ("height", PropKind::Any),
    ("loading", PropKind::String),
];

/// Native props and defaults of a built-in element, or `None` if the tag is
/// unknown.
pub(crate) fn intrinsic_element(tag: &str) -> Option<(PropShape, PropBag)> {
    let (props, defaults): (&[(&str, PropKind)], &[(&str, &str)]) = match tag {
        "div" | "span" | "p" | "ul" | "li" | "section" => (NO_PROPS, &[]),
        "label" => (LABEL_PROPS, &[]),
        "a" => (ANCHOR_PROPS, &[]),
        "button" => (BUTTON_PROPS, &[("type", "button")]),
        "input" => (INPUT_PROPS, &[("type", "text")]),
        "img" => (IMAGE_PROPS, &[]),
        _ => return None,
    };

    let shape = GLOBAL_PROPS.iter().chain(props).cloned().collect();
    let defaults = defaults
        .iter()
        .map(|(key, value)| (key.to_string(), Value::from(*value)))
        .collect();

    Some((shape, defaults))
}
