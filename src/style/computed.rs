use std::{fmt, sync::Arc};

/// A value that is either given up front or computed from a context.
///
/// Used for `attrs`, `base_style` and style-map entries, which all accept
/// either form.
pub enum Computed<T, Ctx: ?Sized> {
    Static(T),
    Computed(Arc<dyn Fn(&Ctx) -> T + Send + Sync>),
}

impl<T: Clone, Ctx: ?Sized> Computed<T, Ctx> {
    pub fn from_fn(f: impl Fn(&Ctx) -> T + Send + Sync + 'static) -> Self {
        Self::Computed(Arc::new(f))
    }

    pub fn resolve(&self, ctx: &Ctx) -> T {
        match self {
            Self::Static(value) => value.clone(),
            Self::Computed(f) => f(ctx),
        }
    }

    /// The value if it doesn't depend on a context.
    pub fn as_static(&self) -> Option<&T> {
        match self {
            Self::Static(value) => Some(value),
            Self::Computed(_) => None,
        }
    }
}

impl<T: Default, Ctx: ?Sized> Default for Computed<T, Ctx> {
    fn default() -> Self {
        Self::Static(T::default())
    }
}

impl<T, Ctx: ?Sized> From<T> for Computed<T, Ctx> {
    fn from(value: T) -> Self {
        Self::Static(value)
    }
}

impl<T: Clone, Ctx: ?Sized> Clone for Computed<T, Ctx> {
    fn clone(&self) -> Self {
        match self {
            Self::Static(value) => Self::Static(value.clone()),
            Self::Computed(f) => Self::Computed(f.clone()),
        }
    }
}

impl<T: fmt::Debug, Ctx: ?Sized> fmt::Debug for Computed<T, Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}
