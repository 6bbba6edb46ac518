use serde_json::Value;

use crate::style::ThemingProps;

/// Fallback scale for components rendered without a `variantColor`.
pub const DEFAULT_ACCENT: &str = "gray";

/// Extension trait for reading theme colors inside computed styles.
pub trait ThemingColorsExt {
    /// The chosen variant color, or [`DEFAULT_ACCENT`].
    fn accent(&self) -> &str;

    /// The accent's `light` shade in light mode and its `dark` shade in dark
    /// mode. `Null` if the theme has no such color.
    fn shade(&self, light: &str, dark: &str) -> Value;

    /// Picks between two values by color mode.
    fn by_mode<T>(&self, light: T, dark: T) -> T;
}

impl ThemingColorsExt for ThemingProps {
    fn accent(&self) -> &str {
        match self.variant_color.as_str() {
            "" => DEFAULT_ACCENT,
            color => color,
        }
    }

    fn shade(&self, light: &str, dark: &str) -> Value {
        let path = format!("{}.{}", self.accent(), self.by_mode(light, dark));
        self.theme.color(&path).map_or(Value::Null, Value::from)
    }

    fn by_mode<T>(&self, light: T, dark: T) -> T {
        if self.color_mode.is_dark() { dark } else { light }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::theme::{ColorMode, DEFAULT_THEME};

    fn ctx(color_mode: ColorMode) -> ThemingProps {
        ThemingProps::new(Arc::new(DEFAULT_THEME.clone()), color_mode)
    }

    #[test]
    fn test_accent_falls_back_to_gray() {
        assert_eq!(ctx(ColorMode::Light).accent(), "gray");
        assert_eq!(ctx(ColorMode::Light).variant_color("teal").accent(), "teal");
    }

    #[test]
    fn test_shade_follows_color_mode() {
        let light = ctx(ColorMode::Light).variant_color("teal");
        let dark = ctx(ColorMode::Dark).variant_color("teal");

        assert_eq!(light.shade("500", "200"), json!("#319795"));
        assert_eq!(dark.shade("500", "200"), json!("#81E6D9"));
    }

    #[test]
    fn test_missing_shade_is_null() {
        let ctx = ctx(ColorMode::Light).variant_color("purple");
        assert_eq!(ctx.shade("500", "200"), Value::Null);
    }
}
