//! Text encodings for catalog records.
//!
//! Two formats are supported: JSON for data interchange (APIs, object
//! storage) and YAML for human-authored seed files. Both use the same field
//! names and the same omit-on-zero rule for optional attributes.

use core::fmt;
use core::str::FromStr;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CodecError;

/// Supported text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Json,
    Yaml,
}

impl Encoding {
    /// Infer the encoding from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| CodecError::UnknownFormat(path.display().to_string()))?;
        ext.parse()
    }

    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Encoding::Json => "json",
            Encoding::Yaml => "yaml",
        }
    }

    pub fn encode<T: Serialize + ?Sized>(self, value: &T) -> Result<String, CodecError> {
        Ok(match self {
            Encoding::Json => serde_json::to_string(value)?,
            Encoding::Yaml => serde_yaml::to_string(value)?,
        })
    }

    /// Like [`Encoding::encode`], but indents JSON output. YAML is always block style.
    pub fn encode_pretty<T: Serialize + ?Sized>(self, value: &T) -> Result<String, CodecError> {
        Ok(match self {
            Encoding::Json => serde_json::to_string_pretty(value)?,
            Encoding::Yaml => serde_yaml::to_string(value)?,
        })
    }

    pub fn decode<T: DeserializeOwned>(self, text: &str) -> Result<T, CodecError> {
        Ok(match self {
            Encoding::Json => serde_json::from_str(text)?,
            Encoding::Yaml => serde_yaml::from_str(text)?,
        })
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Encoding {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Encoding::Json),
            "yaml" | "yml" => Ok(Encoding::Yaml),
            other => Err(CodecError::UnknownFormat(other.to_string())),
        }
    }
}

/// `skip_serializing_if` predicate for omit-on-zero fields.
///
/// A field equal to its type's default (`""`, `0`) is left out of the
/// payload; `#[serde(default)]` restores it on the way back in.
pub fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// `deserialize_with` helper that reads an explicit `null` as the zero value.
///
/// Pairs with `#[serde(default)]`: a missing key and a `null` key both decode
/// to `T::default()`, matching what the products service's own decoder does.
pub fn null_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn from_path_infers_by_extension() {
        assert_eq!(Encoding::from_path("data/products.yaml").unwrap(), Encoding::Yaml);
        assert_eq!(Encoding::from_path("products.YML").unwrap(), Encoding::Yaml);
        assert_eq!(Encoding::from_path("/tmp/out.json").unwrap(), Encoding::Json);
    }

    #[test]
    fn from_path_rejects_unknown_or_missing_extension() {
        assert!(matches!(
            Encoding::from_path("products.csv"),
            Err(CodecError::UnknownFormat(_))
        ));
        assert!(matches!(
            Encoding::from_path("products"),
            Err(CodecError::UnknownFormat(_))
        ));
    }

    #[test]
    fn parse_and_display_agree() {
        for enc in [Encoding::Json, Encoding::Yaml] {
            assert_eq!(enc.to_string().parse::<Encoding>().unwrap(), enc);
        }
    }

    #[test]
    fn decode_reports_format_specific_errors() {
        let err = Encoding::Json.decode::<BTreeMap<String, i64>>("{not json").unwrap_err();
        assert!(matches!(err, CodecError::Json(_)));

        let err = Encoding::Yaml.decode::<BTreeMap<String, i64>>("a: [1, 2").unwrap_err();
        assert!(matches!(err, CodecError::Yaml(_)));
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Nullable {
        #[serde(deserialize_with = "null_as_zero")]
        name: String,
        #[serde(deserialize_with = "null_as_zero")]
        count: i64,
    }

    #[test]
    fn null_as_zero_accepts_null_missing_and_present_values() {
        let decoded: Nullable = Encoding::Json.decode(r#"{"name":null,"count":null}"#).unwrap();
        assert_eq!(decoded, Nullable::default());

        let decoded: Nullable = Encoding::Yaml.decode("name: ~\ncount:\n").unwrap();
        assert_eq!(decoded, Nullable::default());

        let decoded: Nullable = Encoding::Json.decode(r#"{"count":4}"#).unwrap();
        assert_eq!(decoded, Nullable { name: String::new(), count: 4 });

        assert!(Encoding::Json.decode::<Nullable>(r#"{"count":"four"}"#).is_err());
    }

    #[test]
    fn is_zero_matches_default_values() {
        assert!(is_zero(&0_i64));
        assert!(is_zero(&String::new()));
        assert!(!is_zero(&7_i64));
        assert!(!is_zero(&"yes".to_string()));
    }
}
