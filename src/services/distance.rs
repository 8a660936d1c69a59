// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Great-circle distance between two coordinates.

use geo::{Distance, Haversine, Point};

/// Haversine distance in kilometres between two (latitude, longitude)
/// pairs given in decimal degrees. Inputs are not range checked.
pub fn distance_km(from_lat: f64, from_lon: f64, to_lat: f64, to_lon: f64) -> f64 {
    // geo points are (x = longitude, y = latitude)
    let origin = Point::new(from_lon, from_lat);
    let destination = Point::new(to_lon, to_lat);
    Haversine.distance(origin, destination) / 1000.0
}

/// Render a distance the way the API reports it, e.g. `"157.2 km"`.
pub fn format_km(km: f64) -> String {
    format!("{} km", km)
}
