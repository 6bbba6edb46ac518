#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{fmt, str::FromStr};

use enum_assoc::Assoc;
use serde::Serialize;
use thiserror::Error;

/// The active color mode supplied by the host application.
///
/// Persisting the user's choice is the host's concern; components only read it.
/// Deserializes through [`FromStr`].
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
#[func(pub fn as_str(&self) -> &'static str)]
#[func(pub fn toggled(&self) -> ColorMode)]
pub enum ColorMode {
    #[default]
    #[assoc(as_str = "light")]
    #[assoc(toggled = ColorMode::Dark)]
    Light,
    #[assoc(as_str = "dark")]
    #[assoc(toggled = ColorMode::Light)]
    Dark,
}

impl ColorMode {
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color mode \"{0}\", expected \"light\" or \"dark\"")]
pub struct UnknownColorMode(pub String);

impl FromStr for ColorMode {
    type Err = UnknownColorMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownColorMode(other.to_string())),
        }
    }
}
