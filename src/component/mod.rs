//! The component factory.
//!
//! [`create_component`] wraps a target descriptor, an optional hook and
//! theming options into a [`Component`] whose props follow the merged prop
//! contract and whose style follows the registered [`ComponentStyle`].
//!
//! [`ComponentStyle`]: crate::style::ComponentStyle

mod options;
pub use options::*;

mod factory;
pub use factory::*;
