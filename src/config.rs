//! App Configuration
//!
//! Reference region, seed places, routing and theme settings.
//! Loaded from the `places.toml` embedded at build time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Place, Region};

const EMBEDDED_CONFIG: &str = include_str!("../places.toml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid region: {message}")]
    InvalidRegion { message: String },

    #[error("Invalid route settings: {message}")]
    InvalidRoute { message: String },
}

/// How coordinate text that passed the presence check is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CoordinatePolicy {
    /// Reject non-numeric or out-of-range coordinates
    #[default]
    Strict,
    /// Accept anything non-empty, parsing leniently (may yield NaN)
    Permissive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Routing endpoint, query string is appended
    pub base_url: String,
    /// `dirflg` value, "d" = driving
    pub travel_mode: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://maps.apple.com/".to_string(),
            travel_mode: "d".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub policy: CoordinatePolicy,
}

/// Presentation constants consumed by the UI layer as CSS custom properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub background: String,
    pub text: String,
    pub error: String,
    pub button: String,
    pub button_text: String,
    pub callout: String,
    pub map_height_px: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#fed".to_string(),
            text: "#333333".to_string(),
            error: "#c66".to_string(),
            button: "#ff7f50".to_string(),
            button_text: "#fff".to_string(),
            callout: "red".to_string(),
            map_height_px: 500,
        }
    }
}

impl Theme {
    /// Inline style declaring the theme as CSS variables
    pub fn css_vars(&self) -> String {
        format!(
            "--places-bg: {}; --places-text: {}; --places-error: {}; --places-button: {}; \
             --places-button-text: {}; --places-callout: {}; --places-map-height: {}px;",
            self.background,
            self.text,
            self.error,
            self.button,
            self.button_text,
            self.callout,
            self.map_height_px,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub region: Region,
    #[serde(default)]
    pub route: RouteConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub seed: Vec<Place>,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            region: Region {
                latitude: 12.9716,
                longitude: 77.5946,
                latitude_delta: 0.2,
                longitude_delta: 0.2,
                title: "Home Base".to_string(),
            },
            route: RouteConfig::default(),
            validation: ValidationConfig::default(),
            seed: vec![
                Place::new("Vidhana Soudha", 12.9796, 77.5906),
                Place::new("Cubbon Park", 12.9763, 77.5929),
                Place::new("Lalbagh Botanical Garden", 12.9507, 77.5848),
            ],
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Embedded config, falling back to defaults if it does not parse
    pub fn load() -> Self {
        match Self::from_toml(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(&format!("[CONFIG] {}, using defaults", e).into());
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.region;
        if !(r.latitude.is_finite() && r.longitude.is_finite()) {
            return Err(ConfigError::InvalidRegion {
                message: "center must be finite".to_string(),
            });
        }
        if !(r.latitude_delta > 0.0 && r.longitude_delta > 0.0) {
            return Err(ConfigError::InvalidRegion {
                message: "deltas must be positive".to_string(),
            });
        }
        if self.route.base_url.is_empty() {
            return Err(ConfigError::InvalidRoute {
                message: "base_url is empty".to_string(),
            });
        }
        Ok(())
    }
}
