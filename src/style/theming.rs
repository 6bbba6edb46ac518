#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{fmt, sync::Arc};

use enum_assoc::Assoc;

use crate::theme::{ColorMode, Theme};

/// The three axes a component can be themed along.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn prop_name(&self) -> &'static str)]
pub enum ThemingDimension {
    #[assoc(prop_name = "variant")]
    Variant,
    #[assoc(prop_name = "variantColor")]
    VariantColor,
    #[assoc(prop_name = "variantSize")]
    VariantSize,
}

impl ThemingDimension {
    /// Resolution order. Later dimensions override earlier ones.
    pub const ORDER: [ThemingDimension; 3] = [Self::Variant, Self::VariantColor, Self::VariantSize];

    pub fn from_prop_name(name: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|dimension| dimension.prop_name() == name)
    }
}

impl fmt::Display for ThemingDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prop_name())
    }
}

/// The theming props a caller picked for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemingSelection {
    variant: Option<String>,
    variant_color: Option<String>,
    variant_size: Option<String>,
}

impl ThemingSelection {
    /// The chosen key, or `None` if the dimension is unset or empty.
    pub fn get(&self, dimension: ThemingDimension) -> Option<&str> {
        let key = match dimension {
            ThemingDimension::Variant => &self.variant,
            ThemingDimension::VariantColor => &self.variant_color,
            ThemingDimension::VariantSize => &self.variant_size,
        };

        key.as_deref().filter(|key| !key.is_empty())
    }

    pub fn set(&mut self, dimension: ThemingDimension, key: impl Into<String>) {
        let slot = match dimension {
            ThemingDimension::Variant => &mut self.variant,
            ThemingDimension::VariantColor => &mut self.variant_color,
            ThemingDimension::VariantSize => &mut self.variant_size,
        };

        *slot = Some(key.into());
    }
}

/// Read-only snapshot handed to computed styles during resolution.
///
/// An empty string means the dimension was not chosen.
#[derive(Debug, Clone)]
pub struct ThemingProps {
    pub variant: String,
    pub variant_color: String,
    pub variant_size: String,
    pub theme: Arc<Theme>,
    pub color_mode: ColorMode,
}

impl ThemingProps {
    pub fn new(theme: Arc<Theme>, color_mode: ColorMode) -> Self {
        Self {
            variant: String::new(),
            variant_color: String::new(),
            variant_size: String::new(),
            theme,
            color_mode,
        }
    }

    pub fn from_selection(
        selection: &ThemingSelection,
        theme: Arc<Theme>,
        color_mode: ColorMode,
    ) -> Self {
        let pick = |dimension| selection.get(dimension).unwrap_or_default().to_string();

        Self {
            variant: pick(ThemingDimension::Variant),
            variant_color: pick(ThemingDimension::VariantColor),
            variant_size: pick(ThemingDimension::VariantSize),
            theme,
            color_mode,
        }
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn variant_color(mut self, variant_color: impl Into<String>) -> Self {
        self.variant_color = variant_color.into();
        self
    }

    pub fn variant_size(mut self, variant_size: impl Into<String>) -> Self {
        self.variant_size = variant_size.into();
        self
    }

    pub fn color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    pub fn get(&self, dimension: ThemingDimension) -> Option<&str> {
        let key = match dimension {
            ThemingDimension::Variant => &self.variant,
            ThemingDimension::VariantColor => &self.variant_color,
            ThemingDimension::VariantSize => &self.variant_size,
        };

        Some(key.as_str()).filter(|key| !key.is_empty())
    }
}
