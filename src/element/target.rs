use std::sync::Arc;

use crate::{
    ConfigurationError,
    component::Component,
    props::{PropBag, PropKind, PropShape},
};

use super::intrinsic::intrinsic_element;

/// The element a component renders as: a name, the props it natively
/// accepts and its default prop values.
///
/// Cloning is cheap; descriptors are shared between a component and every
/// element it renders.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetDescriptor(Arc<TargetInner>);

#[derive(Debug, Clone)]
struct TargetInner {
    name: String,
    shape: PropShape,
    defaults: PropBag,
    component: Option<Arc<Component>>,
}

impl PartialEq for TargetInner {
    fn eq(&self, other: &Self) -> bool {
        let same_component = match (&self.component, &other.component) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };

        same_component
            && self.name == other.name
            && self.shape == other.shape
            && self.defaults == other.defaults
    }
}

impl TargetDescriptor {
    pub fn new(name: impl Into<String>, shape: PropShape) -> Result<Self, ConfigurationError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ConfigurationError::UnresolvableTarget(name));
        }

        Ok(Self::from_parts(name, shape, PropBag::new()))
    }

    /// A built-in element such as `"button"` or `"div"`.
    pub fn intrinsic(tag: &str) -> Result<Self, ConfigurationError> {
        let (shape, defaults) = intrinsic_element(tag)
            .ok_or_else(|| ConfigurationError::UnresolvableTarget(tag.to_string()))?;

        Ok(Self::from_parts(tag.to_string(), shape, defaults))
    }

    pub fn with_defaults(self, defaults: PropBag) -> Self {
        let mut inner = Arc::unwrap_or_clone(self.0);
        inner.defaults.extend(defaults);
        Self(Arc::new(inner))
    }

    pub(crate) fn from_parts(name: String, shape: PropShape, defaults: PropBag) -> Self {
        Self(Arc::new(TargetInner {
            name,
            shape,
            defaults,
            component: None,
        }))
    }

    /// A target that renders through `component`, so its hook, styles and
    /// element apply to whatever wraps it.
    pub(crate) fn from_component(component: Component) -> Self {
        Self(Arc::new(TargetInner {
            name: component.display_name().to_string(),
            shape: component.native_shape(),
            defaults: component.default_props().clone(),
            component: Some(Arc::new(component)),
        }))
    }

    #[doc(hidden)]
    pub fn __derived(name: &'static str, props: &[(&'static str, PropKind)]) -> Self {
        Self::from_parts(
            name.to_string(),
            props.iter().cloned().collect(),
            PropBag::new(),
        )
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The props this element natively accepts.
    pub fn shape(&self) -> &PropShape {
        &self.0.shape
    }

    pub fn defaults(&self) -> &PropBag {
        &self.0.defaults
    }

    /// The component this target renders through, if it wraps one.
    pub fn component(&self) -> Option<&Component> {
        self.0.component.as_deref()
    }
}

/// A type with a statically known target descriptor.
///
/// Usually derived with `#[derive(Target)]` on a struct describing the
/// element's props.
pub trait Target {
    fn descriptor() -> TargetDescriptor;
}

/// Anything that can be turned into a [`TargetDescriptor`].
pub trait IntoTarget {
    fn into_target(self) -> Result<TargetDescriptor, ConfigurationError>;
}

impl IntoTarget for TargetDescriptor {
    fn into_target(self) -> Result<TargetDescriptor, ConfigurationError> {
        Ok(self)
    }
}

impl IntoTarget for &TargetDescriptor {
    fn into_target(self) -> Result<TargetDescriptor, ConfigurationError> {
        Ok(self.clone())
    }
}

impl IntoTarget for &str {
    fn into_target(self) -> Result<TargetDescriptor, ConfigurationError> {
        TargetDescriptor::intrinsic(self)
    }
}

impl IntoTarget for String {
    fn into_target(self) -> Result<TargetDescriptor, ConfigurationError> {
        TargetDescriptor::intrinsic(&self)
    }
}
