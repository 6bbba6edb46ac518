//! Components built with the factory, with their default styles.

mod button;
pub use button::*;

mod badge;
pub use badge::*;

use crate::theme::StyleRegistry;

/// A registry holding the style of every built-in component.
pub fn default_styles() -> StyleRegistry {
    StyleRegistry::new()
        .with(BUTTON_THEME_KEY, button_style())
        .with(BADGE_THEME_KEY, badge_style())
}
