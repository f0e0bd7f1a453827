//! Application configuration schemas.
//!
//! Configuration is deserialized from an optional TOML file overlaid with
//! `MEDIA__`-prefixed environment variables via the `config` crate. Every
//! field has a default, so running without a file is valid.

pub mod logging;
pub mod media;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::media::MediaConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Media manager settings (capacity limits).
    #[serde(default)]
    pub media: MediaConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional. Environment variables use the `MEDIA` prefix
    /// and `__` as the section separator, e.g.
    /// `MEDIA__MEDIA__MAX_IMAGES_PER_FOLDER=12`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("MEDIA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        tracing::debug!(path, "Configuration loaded");
        Ok(parsed)
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.media.max_images_per_folder, 10);
        assert!(!config.media.root_has_capacity_limit);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = AppConfig::from_toml_str(
            r#"
            [media]
            max_images_per_folder = 25
            root_has_capacity_limit = true

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.media.max_images_per_folder, 25);
        assert!(config.media.root_has_capacity_limit);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let config = AppConfig::load("does/not/exist/media").unwrap();
        assert!(config.media.max_images_per_folder > 0);
    }
}
