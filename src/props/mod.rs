//! Prop shapes and the merged prop contract of a component.
//!
//! A component's accepted props combine generic props, hook props and the
//! target's native props, in that order of precedence, plus the system style
//! props, the theming props and the fixed extras.

mod kind;
pub use kind::*;

mod shape;
pub use shape::*;

mod system;
pub use system::*;

mod bag;
pub use bag::*;

mod contract;
pub use contract::*;
