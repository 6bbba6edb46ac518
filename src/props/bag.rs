use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    element::{Node, TargetDescriptor},
    style::{ThemingDimension, ThemingSelection},
};

/// A flat bag of attribute values keyed by prop name.
pub type PropBag = IndexMap<String, Value>;

/// The props a component is invoked with.
///
/// Ordinary props live in a flat bag. The theming props and the fixed extras
/// (`as`, `isTruncated`, `children`) are held apart because the component
/// consumes them instead of forwarding them to the element.
#[derive(Debug, Clone, Default)]
pub struct Props {
    values: PropBag,
    theming: ThemingSelection,
    as_element: Option<TargetDescriptor>,
    is_truncated: bool,
    children: Vec<Node>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds props from a flat bag, routing reserved keys the same way
    /// [`Props::prop`] does.
    pub fn from_bag(values: PropBag) -> Self {
        values
            .into_iter()
            .fold(Self::default(), |props, (key, value)| props.prop(key, value))
    }

    pub(crate) fn from_parts(
        values: PropBag,
        theming: ThemingSelection,
        is_truncated: bool,
        children: Vec<Node>,
    ) -> Self {
        Self {
            values,
            theming,
            as_element: None,
            is_truncated,
            children,
        }
    }

    /// Sets a prop by name.
    ///
    /// `variant`, `variantColor`, `variantSize` and `isTruncated` are consumed
    /// by the component, so string and boolean values for them land in the
    /// theming selection and truncation flag. Other values stay in the bag
    /// where [`PropContract::check`] reports them.
    ///
    /// [`PropContract::check`]: super::PropContract::check
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();

        if let Some(dimension) = ThemingDimension::from_prop_name(&key) {
            if let Some(selected) = value.as_str() {
                self.theming.set(dimension, selected);
                return self;
            }
        } else if key == "isTruncated" {
            if let Some(is_truncated) = value.as_bool() {
                self.is_truncated = is_truncated;
                return self;
            }
        }

        self.values.insert(key, value);
        self
    }

    pub fn variant(self, variant: impl Into<String>) -> Self {
        self.theming_prop(ThemingDimension::Variant, variant)
    }

    pub fn variant_color(self, variant_color: impl Into<String>) -> Self {
        self.theming_prop(ThemingDimension::VariantColor, variant_color)
    }

    pub fn variant_size(self, variant_size: impl Into<String>) -> Self {
        self.theming_prop(ThemingDimension::VariantSize, variant_size)
    }

    pub fn theming_prop(mut self, dimension: ThemingDimension, key: impl Into<String>) -> Self {
        self.theming.set(dimension, key);
        self
    }

    /// Renders the component as `target` instead of its own target.
    pub fn as_element(mut self, target: TargetDescriptor) -> Self {
        self.as_element = Some(target);
        self
    }

    pub fn truncated(mut self, is_truncated: bool) -> Self {
        self.is_truncated = is_truncated;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Reads a boolean prop, treating a missing or non-boolean value as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn values(&self) -> &PropBag {
        &self.values
    }

    pub fn theming(&self) -> &ThemingSelection {
        &self.theming
    }

    pub fn element_override(&self) -> Option<&TargetDescriptor> {
        self.as_element.as_ref()
    }

    pub fn is_truncated(&self) -> bool {
        self.is_truncated
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn into_parts(self) -> PropsParts {
        PropsParts {
            values: self.values,
            theming: self.theming,
            is_truncated: self.is_truncated,
            as_element: self.as_element,
            children: self.children,
        }
    }
}

pub(crate) struct PropsParts {
    pub values: PropBag,
    pub theming: ThemingSelection,
    pub is_truncated: bool,
    pub as_element: Option<TargetDescriptor>,
    pub children: Vec<Node>,
}
