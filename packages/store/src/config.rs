//! # Application configuration — `matrimony.toml`
//!
//! Defines the TOML configuration bundled with the web client
//! (filename: [`MatrimonyConfig::filename`] = `"matrimony.toml"`). The browser
//! build embeds the file at compile time, so these values are fixed per
//! deployment.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://api.example.com"
//!
//! [images]
//! default_bride = "https://cdn.example.com/default_bride.png"
//! default_groom = "https://cdn.example.com/default_groom.png"
//!
//! [search]
//! results_delay_ms = 1000   # delay before opening quick-search results
//!
//! [secure_id]
//! key = "matrimony"         # obfuscation key for profile ids in URLs
//! ```
//!
//! All structs derive `Default` (with production defaults) so that a missing or
//! empty config file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::models::Gender;

/// Top-level configuration stored in `matrimony.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrimonyConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub images: ImagesConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub secure_id: SecureIdConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to. No trailing slash needed.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Fallback photos shown when a profile has none, or when one fails to load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImagesConfig {
    #[serde(default = "default_bride")]
    pub default_bride: String,
    #[serde(default = "default_groom")]
    pub default_groom: String,
}

fn default_bride() -> String {
    "https://vysyamat.blob.core.windows.net/vysyamala/default_bride.png".to_string()
}

fn default_groom() -> String {
    "https://vysyamat.blob.core.windows.net/vysyamala/default_groom.png".to_string()
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            default_bride: default_bride(),
            default_groom: default_groom(),
        }
    }
}

impl ImagesConfig {
    /// Default photo for a member of the given gender (unknown → groom).
    pub fn for_member(&self, gender: Option<Gender>) -> &str {
        match gender {
            Some(Gender::Female) => &self.default_bride,
            _ => &self.default_groom,
        }
    }

    /// Default photo for the profiles a viewer browses, i.e. the opposite gender.
    pub fn for_viewer(&self, viewer: Option<Gender>) -> &str {
        match viewer {
            Some(Gender::Male) => &self.default_bride,
            _ => &self.default_groom,
        }
    }
}

/// Search behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Milliseconds to wait after a successful quick search before navigating,
    /// giving shared state time to settle.
    #[serde(default = "default_results_delay")]
    pub results_delay_ms: u64,
}

fn default_results_delay() -> u64 {
    1000
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            results_delay_ms: default_results_delay(),
        }
    }
}

/// Key for the reversible profile-id obfuscation used in detail URLs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecureIdConfig {
    #[serde(default = "default_secure_key")]
    pub key: String,
}

fn default_secure_key() -> String {
    "matrimony".to_string()
}

impl Default for SecureIdConfig {
    fn default() -> Self {
        Self {
            key: default_secure_key(),
        }
    }
}

impl MatrimonyConfig {
    /// Builder method to point at a different backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "matrimony.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = MatrimonyConfig::from_toml("").unwrap();
        assert_eq!(config, MatrimonyConfig::default());
        assert_eq!(config.search.results_delay_ms, 1000);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = MatrimonyConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.images, ImagesConfig::default());

        let text = config.to_toml().unwrap();
        assert_eq!(MatrimonyConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_default_images_by_gender() {
        let images = ImagesConfig::default();
        assert_eq!(images.for_viewer(Some(Gender::Male)), images.default_bride);
        assert_eq!(images.for_viewer(Some(Gender::Female)), images.default_groom);
        assert_eq!(images.for_member(Some(Gender::Female)), images.default_bride);
        assert_eq!(images.for_member(None), images.default_groom);
    }
}
