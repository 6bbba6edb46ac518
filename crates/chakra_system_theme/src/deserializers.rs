use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::Error};

use crate::{ColorMode, ColorToken};

pub fn de_non_empty_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;

    if name.trim().is_empty() {
        return Err(D::Error::custom("theme name can't be empty."));
    }

    Ok(name)
}

impl<'de> Deserialize<'de> for ColorMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for ColorToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum StringOrScale {
            One(String),
            Scale(IndexMap<String, String>),
        }

        match StringOrScale::deserialize(deserializer)? {
            StringOrScale::One(value) => Ok(ColorToken::Single(value)),
            StringOrScale::Scale(scale) => {
                if scale.is_empty() {
                    return Err(D::Error::custom("color scale can't be empty."));
                }

                Ok(ColorToken::Scale(scale))
            }
        }
    }
}

/// Size and space tokens accept either a CSS length string or a bare number,
/// which is read as pixels.
pub fn de_tokens<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, StringOrFloat>::deserialize(deserializer)?;

    Ok(raw
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                StringOrFloat::String(string) => string,
                StringOrFloat::Float(pixels) => format!("{pixels}px"),
            };
            (key, value)
        })
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f64),
}
