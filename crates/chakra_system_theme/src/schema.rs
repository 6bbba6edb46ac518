use std::{ops::Deref, sync::LazyLock};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ColorMode;

use super::deserializers::{de_non_empty_name, de_tokens};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Theme {
    #[serde(deserialize_with = "de_non_empty_name")]
    pub name: String,
    #[serde(default)]
    pub initial_color_mode: ColorMode,
    #[serde(default)]
    pub colors: IndexMap<String, ColorToken>,
    #[serde(default, deserialize_with = "de_tokens")]
    pub sizes: IndexMap<String, String>,
    #[serde(default, deserialize_with = "de_tokens")]
    pub space: IndexMap<String, String>,
}

/// A color token is either a single value (`"white": "#fff"`) or a scale
/// (`"teal": { "500": "#319795" }`).
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorToken {
    Single(String),
    Scale(IndexMap<String, String>),
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: LazyLockTheme = LazyLockTheme::new(|| Theme::from_string(include_str!($path)).unwrap());
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

generate_builtin_themes!(["../themes/default.json", DEFAULT_THEME]);

impl Theme {
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }

    /// Looks up a color by token path.
    ///
    /// `"white"` names a single color, `"teal.500"` names a shade in a scale.
    pub fn color(&self, path: &str) -> Option<&str> {
        let (name, shade) = match path.split_once('.') {
            Some((name, shade)) => (name, Some(shade)),
            None => (path, None),
        };

        match (self.colors.get(name)?, shade) {
            (ColorToken::Single(value), None) => Some(value),
            (ColorToken::Scale(scale), Some(shade)) => scale.get(shade).map(String::as_str),
            _ => None,
        }
    }

    pub fn size(&self, key: &str) -> Option<&str> {
        self.sizes.get(key).map(String::as_str)
    }

    pub fn space(&self, key: &str) -> Option<&str> {
        self.space.get(key).map(String::as_str)
    }
}
