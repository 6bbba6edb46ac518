use indexmap::IndexMap;
use serde_json::Value;

use crate::{PropError, style::ThemingDimension};

use super::{PropKind, PropShape, Props, SystemProps, generic_middleware};

/// Where a prop in a [`PropContract`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropSource {
    Generic,
    Hook,
    Native,
    System,
    Theming,
    Extra,
}

/// The `as`, `isTruncated` and `children` props every component accepts.
pub const EXTRA_PROPS: [(&str, PropKind); 3] = [
    ("as", PropKind::ElementType),
    ("isTruncated", PropKind::Bool),
    ("children", PropKind::Node),
];

/// The full set of props a component accepts for one choice of generic props.
///
/// Overlapping keys resolve generic over hook over native. System style props
/// only fill keys none of those declare. Theming props and the fixed extras
/// always keep their own definition.
#[derive(Debug, Clone, PartialEq)]
pub struct PropContract {
    props: IndexMap<String, (PropKind, PropSource)>,
}

impl PropContract {
    pub fn builder() -> PropContractBuilder {
        PropContractBuilder::default()
    }

    pub fn get(&self, key: &str) -> Option<&PropKind> {
        self.props.get(key).map(|(kind, _)| kind)
    }

    pub fn source_of(&self, key: &str) -> Option<PropSource> {
        self.props.get(key).map(|(_, source)| *source)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.props.keys()
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// The contract flattened back into a shape.
    pub fn shape(&self) -> PropShape {
        self.props
            .iter()
            .map(|(key, (kind, _))| (key.clone(), kind.clone()))
            .collect()
    }

    /// Checks every prop in `props` against this contract.
    pub fn check(&self, props: &Props) -> Result<(), PropError> {
        for (key, value) in props.values() {
            self.check_value(key, value)?;
        }

        for dimension in ThemingDimension::ORDER {
            if let Some(key) = props.theming().get(dimension) {
                self.check_value(dimension.prop_name(), &Value::from(key))?;
            }
        }

        Ok(())
    }

    fn check_value(&self, key: &str, value: &Value) -> Result<(), PropError> {
        let kind = self
            .get(key)
            .ok_or_else(|| PropError::UnknownProp(key.to_string()))?;

        if !kind.accepts(value) {
            return Err(PropError::KindMismatch {
                key: key.to_string(),
                expected: kind.clone(),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PropContractBuilder {
    generic: PropShape,
    hook: PropShape,
    native: PropShape,
    system: SystemProps,
    theming: Vec<(ThemingDimension, Vec<String>)>,
}

impl PropContractBuilder {
    pub fn generic(mut self, generic: PropShape) -> Self {
        self.generic = generic;
        self
    }

    pub fn hook(mut self, hook: PropShape) -> Self {
        self.hook = hook;
        self
    }

    pub fn native(mut self, native: PropShape) -> Self {
        self.native = native;
        self
    }

    pub fn system(mut self, system: SystemProps) -> Self {
        self.system = system;
        self
    }

    /// Declares a theming prop that accepts the given style-map keys.
    pub fn theming(mut self, dimension: ThemingDimension, keys: Vec<String>) -> Self {
        self.theming.retain(|(existing, _)| *existing != dimension);
        self.theming.push((dimension, keys));
        self
    }

    pub fn build(self) -> PropContract {
        let mut props = IndexMap::new();

        for (key, kind) in generic_middleware(&self.generic, &self.hook, &self.native).iter() {
            let source = if self.generic.contains(key) {
                PropSource::Generic
            } else if self.hook.contains(key) {
                PropSource::Hook
            } else {
                PropSource::Native
            };
            props.insert(key.clone(), (kind.clone(), source));
        }

        for (key, kind) in self.system.shape().iter() {
            props
                .entry(key.clone())
                .or_insert_with(|| (kind.clone(), PropSource::System));
        }

        for (dimension, keys) in self.theming {
            props.insert(
                dimension.prop_name().to_string(),
                (PropKind::OneOf(keys), PropSource::Theming),
            );
        }

        for (key, kind) in EXTRA_PROPS {
            props.insert(key.to_string(), (kind, PropSource::Extra));
        }

        PropContract { props }
    }
}
