use std::{fmt, sync::Arc};

use crate::{
    props::{PropBag, PropShape, Props},
    style::{Computed, Style},
};

/// Attribute bag given up front or computed from the component's props.
pub type Attrs = Computed<PropBag, Props>;

/// Base style given up front or computed from the component's props.
pub type BaseStyle = Computed<Style, Props>;

type HookFn = Arc<dyn Fn(&Props) -> PropBag + Send + Sync>;

/// Runs on every render and contributes extra attributes.
///
/// The function must be pure: the same props always produce the same bag.
/// Nothing checks this; an impure hook just renders inconsistent attributes.
#[derive(Clone)]
pub struct Hook {
    shape: PropShape,
    run: HookFn,
}

impl Hook {
    /// A hook consuming the props in `shape`.
    pub fn new(shape: PropShape, f: impl Fn(&Props) -> PropBag + Send + Sync + 'static) -> Self {
        Self {
            shape,
            run: Arc::new(f),
        }
    }

    /// Consumes nothing and contributes nothing.
    pub fn noop() -> Self {
        Self::new(PropShape::new(), |_| PropBag::new())
    }

    pub fn shape(&self) -> &PropShape {
        &self.shape
    }

    pub fn run(&self, props: &Props) -> PropBag {
        (self.run)(props)
    }
}

impl Default for Hook {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook").field("shape", &self.shape).finish_non_exhaustive()
    }
}

/// Everything `create_component` accepts besides the target.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub(crate) hook: Option<Hook>,
    pub(crate) theme_key: Option<String>,
    pub(crate) attrs: Option<Attrs>,
    pub(crate) base_style: Option<BaseStyle>,
}

impl CreateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hook(
        mut self,
        shape: PropShape,
        f: impl Fn(&Props) -> PropBag + Send + Sync + 'static,
    ) -> Self {
        self.hook = Some(Hook::new(shape, f));
        self
    }

    /// The component's entry in the style registry. Usually its name.
    pub fn theme_key(mut self, theme_key: impl Into<String>) -> Self {
        self.theme_key = Some(theme_key.into());
        self
    }

    pub fn attrs(mut self, attrs: PropBag) -> Self {
        self.attrs = Some(Computed::Static(attrs));
        self
    }

    pub fn attrs_with(mut self, f: impl Fn(&Props) -> PropBag + Send + Sync + 'static) -> Self {
        self.attrs = Some(Computed::from_fn(f));
        self
    }

    pub fn base_style(mut self, style: Style) -> Self {
        self.base_style = Some(Computed::Static(style));
        self
    }

    pub fn base_style_with(mut self, f: impl Fn(&Props) -> Style + Send + Sync + 'static) -> Self {
        self.base_style = Some(Computed::from_fn(f));
        self
    }
}
