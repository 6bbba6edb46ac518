use indexmap::IndexMap;

use crate::ConfigurationError;

use super::{Computed, Style, ThemingDimension, ThemingProps, ThemingSelection};

/// A style-map entry: a fixed style or one computed from the theming context.
pub type StyleEntry = Computed<Style, ThemingProps>;

/// Variant key to style entry.
pub type StyleMap = IndexMap<String, StyleEntry>;

/// A component's per-variant styles.
///
/// Each theming dimension has its own map. A dimension the component isn't
/// themed along is an empty map.
#[derive(Debug, Clone, Default)]
pub struct ComponentStyle {
    pub variant: StyleMap,
    pub variant_color: StyleMap,
    pub variant_size: StyleMap,
}

impl ComponentStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(self, key: impl Into<String>, style: Style) -> Self {
        self.entry(ThemingDimension::Variant, key, style.into())
    }

    pub fn variant_with(
        self,
        key: impl Into<String>,
        f: impl Fn(&ThemingProps) -> Style + Send + Sync + 'static,
    ) -> Self {
        self.entry(ThemingDimension::Variant, key, Computed::from_fn(f))
    }

    pub fn variant_color(self, key: impl Into<String>, style: Style) -> Self {
        self.entry(ThemingDimension::VariantColor, key, style.into())
    }

    pub fn variant_color_with(
        self,
        key: impl Into<String>,
        f: impl Fn(&ThemingProps) -> Style + Send + Sync + 'static,
    ) -> Self {
        self.entry(ThemingDimension::VariantColor, key, Computed::from_fn(f))
    }

    pub fn variant_size(self, key: impl Into<String>, style: Style) -> Self {
        self.entry(ThemingDimension::VariantSize, key, style.into())
    }

    pub fn variant_size_with(
        self,
        key: impl Into<String>,
        f: impl Fn(&ThemingProps) -> Style + Send + Sync + 'static,
    ) -> Self {
        self.entry(ThemingDimension::VariantSize, key, Computed::from_fn(f))
    }

    pub fn entry(
        mut self,
        dimension: ThemingDimension,
        key: impl Into<String>,
        entry: StyleEntry,
    ) -> Self {
        self.map_mut(dimension).insert(key.into(), entry);
        self
    }

    pub fn map(&self, dimension: ThemingDimension) -> &StyleMap {
        match dimension {
            ThemingDimension::Variant => &self.variant,
            ThemingDimension::VariantColor => &self.variant_color,
            ThemingDimension::VariantSize => &self.variant_size,
        }
    }

    pub fn map_mut(&mut self, dimension: ThemingDimension) -> &mut StyleMap {
        match dimension {
            ThemingDimension::Variant => &mut self.variant,
            ThemingDimension::VariantColor => &mut self.variant_color,
            ThemingDimension::VariantSize => &mut self.variant_size,
        }
    }

    pub fn get(&self, dimension: ThemingDimension, key: &str) -> Option<&StyleEntry> {
        self.map(dimension).get(key)
    }

    /// The dimensions this style declares, each with its variant keys.
    pub fn declared(&self) -> Vec<(ThemingDimension, Vec<String>)> {
        ThemingDimension::ORDER
            .into_iter()
            .filter(|dimension| !self.map(*dimension).is_empty())
            .map(|dimension| (dimension, self.map(dimension).keys().cloned().collect()))
            .collect()
    }

    /// Strict counterpart to resolution: fails on the first chosen key that
    /// has no entry, instead of silently skipping it.
    pub fn check_selection(&self, selection: &ThemingSelection) -> Result<(), ConfigurationError> {
        for dimension in ThemingDimension::ORDER {
            if let Some(key) = selection.get(dimension)
                && !self.map(dimension).contains_key(key)
            {
                return Err(ConfigurationError::UnknownVariant {
                    dimension,
                    key: key.to_string(),
                });
            }
        }

        Ok(())
    }
}
