use std::sync::Arc;

use crate::style::{ThemingProps, ThemingSelection};

use super::{ColorMode, DEFAULT_THEME, StyleRegistry, Theme};

/// What the theme provider exposes to a render: the theme, the active color
/// mode and the registered component styles.
///
/// A snapshot is cheap to clone and never changes once built.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    theme: Arc<Theme>,
    color_mode: ColorMode,
    styles: Arc<StyleRegistry>,
}

impl ThemeContext {
    /// A context starting in the theme's initial color mode, with no
    /// component styles.
    pub fn new<T: AsRef<Theme>>(theme: T) -> Self {
        let theme = theme.as_ref().clone();
        Self {
            color_mode: theme.initial_color_mode,
            theme: Arc::new(theme),
            styles: Arc::new(StyleRegistry::new()),
        }
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    pub fn with_styles(mut self, styles: impl Into<Arc<StyleRegistry>>) -> Self {
        self.styles = styles.into();
        self
    }

    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// The theming snapshot for one render with the given selection.
    pub fn theming(&self, selection: &ThemingSelection) -> ThemingProps {
        ThemingProps::from_selection(selection, self.theme.clone(), self.color_mode)
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(&*DEFAULT_THEME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ComponentStyle;

    #[test]
    fn test_starts_in_initial_color_mode() {
        let theme = Theme::from_string(r#"{ "name": "night", "initial_color_mode": "dark" }"#)
            .unwrap();
        let cx = ThemeContext::new(theme);

        assert_eq!(cx.color_mode(), ColorMode::Dark);
        assert!(cx.styles().is_empty());
    }

    #[test]
    fn test_with_color_mode_leaves_original_untouched() {
        let light = ThemeContext::default();
        let dark = light.clone().with_color_mode(light.color_mode().toggled());

        assert_eq!(light.color_mode(), ColorMode::Light);
        assert_eq!(dark.color_mode(), ColorMode::Dark);
        assert!(Arc::ptr_eq(light.theme(), dark.theme()));
    }

    #[test]
    fn test_with_styles() {
        let cx = ThemeContext::default()
            .with_styles(StyleRegistry::new().with("Button", ComponentStyle::new()));
        assert!(cx.styles().contains("Button"));
    }
}
