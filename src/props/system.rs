use super::{PropKind, PropShape};

/// Style props understood by the style translation layer.
///
/// Components merge these like any other prop and never interpret the
/// values, so every key accepts [`PropKind::Any`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemProps(PropShape);

#[rustfmt::skip]
const STANDARD_KEYS: &[&str] = &[
    // Color
    "color", "bg", "background", "backgroundColor", "opacity",
    // Space
    "m", "mt", "mr", "mb", "ml", "mx", "my", "margin",
    "p", "pt", "pr", "pb", "pl", "px", "py", "padding",
    // Layout
    "w", "h", "width", "height", "minW", "maxW", "minH", "maxH", "display", "overflow",
    // Flex
    "alignItems", "justifyContent", "flexDirection", "flexWrap", "flex",
    // Typography
    "fontSize", "fontWeight", "lineHeight", "textAlign", "textOverflow", "whiteSpace",
    // Border
    "border", "borderWidth", "borderColor", "borderRadius", "rounded",
    // Position
    "position", "top", "right", "bottom", "left", "zIndex",
];

impl SystemProps {
    /// The default set of style prop names.
    pub fn standard() -> Self {
        Self(STANDARD_KEYS.iter().map(|key| (*key, PropKind::Any)).collect())
    }

    /// A custom set of style prop names.
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self(keys.into_iter().map(|key| (key, PropKind::Any)).collect())
    }

    pub fn shape(&self) -> &PropShape {
        &self.0
    }
}

impl Default for SystemProps {
    fn default() -> Self {
        Self::standard()
    }
}
