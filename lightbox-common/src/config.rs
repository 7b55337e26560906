use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PhotoId, SizedImage};

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// How completions of superseded requests are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPolicy {
    /// Every completion is committed in the order it resolves, even if a
    /// newer id was requested in the meantime.
    #[default]
    LastResolvedWins,
    /// Completions for anything but the most recent request are dropped.
    LatestRequestWins,
}

/// Lightbox settings, read from `lightbox.json` by the web host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    /// Directory holding `<id>.json` metadata documents
    pub metadata_base: String,
    /// JSON array of photo ids, in gallery order
    pub index_url: String,
    /// Largest width/height requested from the image CDN
    pub max_dimension: u32,
    /// Optional image format override (`fm`)
    pub image_format: Option<String>,
    /// Optional image quality, 1-100 (`q`)
    pub image_quality: Option<u8>,
    pub fetch_policy: FetchPolicy,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            metadata_base: "/data/photos".to_string(),
            index_url: "/data/photos.json".to_string(),
            max_dimension: 4000,
            image_format: None,
            image_quality: None,
            fetch_policy: FetchPolicy::default(),
        }
    }
}

impl LightboxConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.metadata_base.trim().is_empty() {
            return Err(ConfigError::Invalid("metadata_base is empty".to_string()));
        }
        if self.max_dimension == 0 {
            return Err(ConfigError::Invalid(
                "max_dimension must be positive".to_string(),
            ));
        }
        if let Some(q) = self.image_quality {
            if !(1..=100).contains(&q) {
                return Err(ConfigError::Invalid(format!(
                    "image_quality {q} is outside 1-100"
                )));
            }
        }
        Ok(())
    }

    /// URL of the metadata document for `id`
    pub fn metadata_url(&self, id: &PhotoId) -> String {
        format!("{}/{}.json", self.metadata_base.trim_end_matches('/'), id)
    }

    pub fn sizer(&self) -> SizedImage {
        SizedImage {
            max_dimension: self.max_dimension,
            format: self.image_format.clone(),
            quality: self.image_quality,
        }
    }
}
