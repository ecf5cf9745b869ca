//! Geo-fence Evaluation
//!
//! Circular containment and crossing detection over latitude/longitude
//! pairs, using great-circle (haversine) distance.
//!
//! Distances use the mean Earth radius 6372.8 km and are rounded to two
//! decimal places (10 m resolution), which is well inside GPS noise for the
//! fence sizes this is meant for. Coordinates are taken at face value; the
//! caller guarantees valid decimal degrees.
//!
//! Like the scalar detectors in [`crate::threshold`], fence crossing is a
//! pure function of a `(previous, current)` pair; the fence itself holds no
//! state beyond its geometry.

use libm::{asin, cos, round, sin, sqrt};

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6372.8;

/// A point on the globe in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in decimal degrees, positive north
    pub lat: f64,
    /// Longitude in decimal degrees, positive east
    pub lon: f64,
}

impl GeoPoint {
    /// Construct from decimal degrees
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

fn to_radians(deg: f64) -> f64 {
    deg / 180.0 * core::f64::consts::PI
}

/// Great-circle distance between two points in kilometers, rounded to two
/// decimal places.
pub fn haversine(p1: GeoPoint, p2: GeoPoint) -> f64 {
    let rlat1 = to_radians(p1.lat);
    let rlat2 = to_radians(p2.lat);
    let d_lat = to_radians(p2.lat - p1.lat);
    let d_lon = to_radians(p2.lon - p1.lon);

    let h = sin(d_lat / 2.0) * sin(d_lat / 2.0)
        + sin(d_lon / 2.0) * sin(d_lon / 2.0) * cos(rlat1) * cos(rlat2);

    round(EARTH_RADIUS_KM * 2.0 * asin(sqrt(h)) * 100.0) / 100.0
}

/// A circular fence: a center point and a radius in kilometers
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoFence {
    center: GeoPoint,
    radius_km: f64,
}

impl GeoFence {
    /// Build a fence around `center` with the given radius in kilometers
    pub fn new(center: GeoPoint, radius_km: f64) -> Self {
        Self { center, radius_km }
    }

    /// Center of the fence
    pub fn center(&self) -> GeoPoint {
        self.center
    }

    /// Radius in kilometers
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Is the point inside (or exactly on) the fence?
    pub fn is_inside(&self, point: GeoPoint) -> bool {
        self.radius_km >= haversine(self.center, point)
    }

    /// True iff `cur` is inside the fence and `prev` was not
    pub fn did_enter(&self, prev: GeoPoint, cur: GeoPoint) -> bool {
        self.is_inside(cur) && !self.is_inside(prev)
    }

    /// True iff `prev` was inside the fence and `cur` is not
    pub fn did_exit(&self, prev: GeoPoint, cur: GeoPoint) -> bool {
        self.is_inside(prev) && !self.is_inside(cur)
    }
}
