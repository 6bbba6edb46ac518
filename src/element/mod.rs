//! Render targets and the elements components produce.

mod intrinsic;

mod target;
pub use target::*;

mod node;
pub use node::*;

/// Derives [`Target`] for a struct describing an element's native props.
pub use chakra_system_macros::Target;
