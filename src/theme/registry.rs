use indexmap::IndexMap;

use crate::{ConfigurationError, style::ComponentStyle};

/// Component styles keyed by theme key, e.g. `"Button"`.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry(IndexMap<String, ComponentStyle>);

impl StyleRegistry {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn with(mut self, theme_key: impl Into<String>, style: ComponentStyle) -> Self {
        self.register(theme_key, style);
        self
    }

    /// Registers `style`, replacing any style already under `theme_key`.
    pub fn register(&mut self, theme_key: impl Into<String>, style: ComponentStyle) {
        self.0.insert(theme_key.into(), style);
    }

    pub fn get(&self, theme_key: &str) -> Option<&ComponentStyle> {
        self.0.get(theme_key)
    }

    pub fn try_get(&self, theme_key: &str) -> Result<&ComponentStyle, ConfigurationError> {
        self.get(theme_key)
            .ok_or_else(|| ConfigurationError::UnknownThemeKey(theme_key.to_string()))
    }

    pub fn contains(&self, theme_key: &str) -> bool {
        self.0.contains_key(theme_key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = StyleRegistry::new()
            .with("Button", ComponentStyle::new().variant("solid", style! {}));
        registry.register("Button", ComponentStyle::new());

        assert_eq!(registry.len(), 1);
        assert!(registry.get("Button").is_some_and(|style| style.variant.is_empty()));
    }

    #[test]
    fn test_try_get_unknown_key() {
        let registry = StyleRegistry::new();
        assert_eq!(
            registry.try_get("Badge").err(),
            Some(ConfigurationError::UnknownThemeKey("Badge".into()))
        );
    }
}
