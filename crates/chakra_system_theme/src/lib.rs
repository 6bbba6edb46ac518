//! Theme data consumed by `chakra_system` components.
//!
//! A [`Theme`] is read-only configuration: design tokens loaded from JSON plus
//! the color mode a theme starts in. Components never mutate it.

mod schema;
pub use schema::*;

mod color_mode;
pub use color_mode::*;

mod deserializers;
