//! Route Request
//!
//! A routing URL handed over by the map view, checked before it reaches
//! the system URL handler.

use thiserror::Error;
use url::Url;

/// Schemes the shell is willing to open
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "maps"];

#[derive(Error, Debug, PartialEq)]
pub enum RouteError {
    #[error("Malformed route URL: {0}")]
    Malformed(#[from] url::ParseError),

    #[error("Scheme '{0}' is not allowed")]
    SchemeNotAllowed(String),

    #[error("Route URL has no host")]
    MissingHost,

    #[error("Route URL is missing '{0}'")]
    MissingParameter(&'static str),
}

/// Validated routing request
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    url: Url,
}

impl RouteRequest {
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let url = Url::parse(raw)?;

        if !ALLOWED_SCHEMES.contains(&url.scheme()) {
            return Err(RouteError::SchemeNotAllowed(url.scheme().to_string()));
        }
        if matches!(url.scheme(), "http" | "https") && url.host_str().is_none() {
            return Err(RouteError::MissingHost);
        }
        for key in ["saddr", "daddr"] {
            if !url.query_pairs().any(|(k, _)| k == key) {
                return Err(RouteError::MissingParameter(key));
            }
        }

        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Destination as sent, e.g. "12.93,77.59"
    pub fn destination(&self) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == "daddr")
            .map(|(_, v)| v.into_owned())
    }
}
