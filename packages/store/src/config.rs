//! # Client configuration: `client.toml`
//!
//! The web shell embeds a small TOML document at build time and layers it over
//! the built-in defaults with the [`config`] crate. Every key is optional; an
//! empty document yields [`ClientConfig::default`].
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:8000/api/"
//!
//! [ui]
//! placeholder_image = "placeholder.png"
//! default_avatar_url = "https://..."
//! status_clear_ms = 1000
//! redirect_delay_ms = 1500
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config, loaded with [`ClientConfig::from_toml`]. |
//! | [`ApiConfig`] | Backend location. The base URL is normalised to end with `/`. |
//! | [`UiConfig`] | Presentation constants: fallback images and status/redirect delays. |

use config::{Config, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "placeholder.png";
pub const DEFAULT_AVATAR_URL: &str =
    "https://i.pinimg.com/736x/2c/47/d5/2c47d5dd5b532f83bb55c4cd6f5bd1ef.jpg";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid client configuration: {0}")]
    Invalid(#[from] config::ConfigError),
}

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the REST backend lives.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Presentation settings shared by the page renderers.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Image shown when a poster or cover is missing or fails to load.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    /// Avatar shown for users without one.
    #[serde(default = "default_avatar_url")]
    pub default_avatar_url: String,
    /// How long a transient status message stays visible.
    #[serde(default = "default_status_clear_ms")]
    pub status_clear_ms: u32,
    /// Delay before navigating away after a successful form submission.
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u32,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

fn default_avatar_url() -> String {
    DEFAULT_AVATAR_URL.to_string()
}

fn default_status_clear_ms() -> u32 {
    1000
}

fn default_redirect_delay_ms() -> u32 {
    1500
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
            default_avatar_url: default_avatar_url(),
            status_clear_ms: default_status_clear_ms(),
            redirect_delay_ms: default_redirect_delay_ms(),
        }
    }
}

impl ClientConfig {
    /// Layer a TOML document over the defaults.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("api.base_url", DEFAULT_API_BASE_URL)?
            .set_default("ui.placeholder_image", DEFAULT_PLACEHOLDER_IMAGE)?
            .set_default("ui.default_avatar_url", DEFAULT_AVATAR_URL)?
            .set_default("ui.status_clear_ms", i64::from(default_status_clear_ms()))?
            .set_default("ui.redirect_delay_ms", i64::from(default_redirect_delay_ms()))?
            .add_source(File::from_str(s, FileFormat::Toml))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        Ok(loaded.normalized())
    }

    /// Builder method to point the client at another backend.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api.base_url.trim();
        self.api.base_url = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };
        self
    }
}
