//! Variant style resolution.
//!
//! A [`ComponentStyle`] maps each theming dimension's keys to a style or a
//! style function. [`resolve_style`] turns it into one concrete [`Style`] for
//! the current [`ThemingProps`].

use indexmap::IndexMap;
use serde_json::Value;

/// A flat style object. Keys are style prop names; values are opaque.
pub type Style = IndexMap<String, Value>;

mod computed;
pub use computed::*;

mod theming;
pub use theming::*;

mod component_style;
pub use component_style::*;

mod resolver;
pub use resolver::*;

/// Builds a [`Style`] from `key => value` pairs.
///
/// ```
/// let style = chakra_system::style! { "background" => "blue", "zIndex" => 2 };
/// assert_eq!(style.len(), 2);
/// ```
#[macro_export]
macro_rules! style {
    ( $( $key:expr => $value:expr ),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut map = $crate::style::Style::new();
        $(
            map.insert(::std::string::String::from($key), $crate::serde_json::Value::from($value));
        )*
        map
    }};
}

/// Builds a [`PropBag`](crate::props::PropBag) from `key => value` pairs.
#[macro_export]
macro_rules! attrs {
    ( $( $key:expr => $value:expr ),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut map = $crate::props::PropBag::new();
        $(
            map.insert(::std::string::String::from($key), $crate::serde_json::Value::from($value));
        )*
        map
    }};
}
