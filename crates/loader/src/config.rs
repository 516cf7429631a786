//! Loader configuration.
//!
//! Resolution order:
//! 1. Built-in defaults
//! 2. YAML file (`--config PATH`, or `storefront-loader.yaml` in the working
//!    directory when present)
//! 3. Environment variables (`STOREFRONT_OUT_DIR`, `STOREFRONT_IMAGE_EXTENSION`,
//!    `STOREFRONT_LOG_FORMAT`)
//! 4. Command-line flags (applied by the binary)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use storefront_core::Encoding;
use storefront_observability::LogFormat;

use crate::error::{LoaderError, LoaderResult};

pub const DEFAULT_CONFIG_FILE: &str = "storefront-loader.yaml";
pub const ENV_PREFIX: &str = "STOREFRONT_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Directory that receives `products.yaml` and `categories.yaml`.
    pub out_dir: PathBuf,
    /// Extension appended to a product id to name its image (no dot).
    pub image_extension: String,
    pub log_format: LogFormat,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("data"),
            image_extension: "jpg".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl LoaderConfig {
    /// Load defaults, then the config file, then the process environment.
    pub fn load(path: Option<&Path>) -> LoaderResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env(std::env::vars())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> LoaderResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| LoaderError::io(path, e))?;
        // An empty file is a valid (all-defaults) config.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = Encoding::Yaml.decode(&text)?;
        config.image_extension = normalize_extension(&config.image_extension);
        Ok(config)
    }

    /// Overlay `STOREFRONT_*` variables; unrelated variables are ignored.
    pub fn apply_env<I, K, V>(&mut self, vars: I) -> LoaderResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value = value.as_ref();
            match name {
                "OUT_DIR" => self.out_dir = PathBuf::from(value),
                "IMAGE_EXTENSION" => self.image_extension = normalize_extension(value),
                "LOG_FORMAT" => {
                    self.log_format = value
                        .parse()
                        .map_err(|e| LoaderError::config(format!("{ENV_PREFIX}LOG_FORMAT: {e}")))?;
                }
                _ => {}
            }
        }
        Ok(())
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_string()
}
