use thiserror::Error;

use crate::{props::PropKind, style::ThemingDimension};

/// Author-time failures: a component or its theming was declared against
/// something that doesn't exist.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("target \"{0}\" has no resolvable native prop shape.")]
    UnresolvableTarget(String),
    #[error("no style configuration is registered under theme key \"{0}\".")]
    UnknownThemeKey(String),
    #[error("{dimension} \"{key}\" is not declared in the component's style configuration.")]
    UnknownVariant {
        dimension: ThemingDimension,
        key: String,
    },
}

/// A prop bag that does not fit a component's merged prop contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropError {
    #[error("prop \"{0}\" is not accepted by this component.")]
    UnknownProp(String),
    #[error("prop \"{key}\" expects {expected}.")]
    KindMismatch { key: String, expected: PropKind },
}
