//! Theme context supplied to components at render time.
//!
//! The theme data itself lives in `chakra_system_theme` and is re-exported
//! here. [`ThemeContext`] adds the active color mode and the registry of
//! component styles keyed by theme key.

pub use chakra_system_theme::*;

mod registry;
pub use registry::*;

mod context;
pub use context::*;
