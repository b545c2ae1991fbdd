//! Navigation Utilities
//!
//! Routing URL construction and marker derivation for the map view.

use crate::config::RouteConfig;
use crate::models::{Marker, Place, Region};

/// Routing request from the reference point to a destination.
///
/// Shape: `<base>?saddr=<refLat>,<refLon>&daddr=<lat>,<lon>&dirflg=<mode>`.
/// Coordinates are written as-is, commas unescaped.
pub fn route_url(route: &RouteConfig, reference: &Region, latitude: f64, longitude: f64) -> String {
    format!(
        "{}?saddr={},{}&daddr={},{}&dirflg={}",
        route.base_url,
        reference.latitude,
        reference.longitude,
        latitude,
        longitude,
        route.travel_mode,
    )
}

/// One marker per place, in list order.
///
/// The region is fixed, so markers outside it get no surface position.
pub fn derive_markers(places: &[Place], reference: &Region, route: &RouteConfig) -> Vec<Marker> {
    places
        .iter()
        .map(|place| Marker {
            title: place.name.clone(),
            route_url: route_url(route, reference, place.latitude, place.longitude),
            position: reference.project(place.latitude, place.longitude),
        })
        .collect()
}
