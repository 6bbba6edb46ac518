//! A factory for themable components.
//!
//! [`create_component`](component::create_component) wraps a target element
//! with an optional hook and theming options. The resulting component accepts
//! the merged prop contract (generic over hook over native props, plus system
//! style props, theming props and `as`/`isTruncated`/`children`) and resolves
//! its variant styles from the [`ThemeContext`](theme::ThemeContext) on every
//! render.

extern crate self as chakra_system;

pub mod props;

pub mod style;

pub mod element;

pub mod component;

pub mod components;

pub mod theme;

mod error;
pub use error::*;

mod utils;
pub use utils::ThemingColorsExt;

#[doc(hidden)]
pub use serde_json;
