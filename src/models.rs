//! Frontend Models
//!
//! Place, region and marker data structures.

use serde::{Deserialize, Serialize};

/// A named point recorded by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

/// Visible map region anchored at the reference point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "latitudeDelta")]
    pub latitude_delta: f64,
    #[serde(rename = "longitudeDelta")]
    pub longitude_delta: f64,
    /// Label shown on the reference pin
    #[serde(default)]
    pub title: String,
}

impl Region {
    /// Project a coordinate onto the region as (left%, top%).
    ///
    /// Returns None for points outside the region or non-finite input.
    /// North is up, so latitude grows towards top = 0.
    pub fn project(&self, latitude: f64, longitude: f64) -> Option<(f64, f64)> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        if self.latitude_delta <= 0.0 || self.longitude_delta <= 0.0 {
            return None;
        }
        let west = self.longitude - self.longitude_delta / 2.0;
        let north = self.latitude + self.latitude_delta / 2.0;
        let left = (longitude - west) / self.longitude_delta * 100.0;
        let top = (north - latitude) / self.latitude_delta * 100.0;
        if (0.0..=100.0).contains(&left) && (0.0..=100.0).contains(&top) {
            Some((left, top))
        } else {
            None
        }
    }
}

/// Display marker derived from a Place
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub title: String,
    /// Navigation target for the marker's callout
    pub route_url: String,
    /// Position on the map surface, None when off-region
    pub position: Option<(f64, f64)>,
}
