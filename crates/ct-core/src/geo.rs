//! Geographic coordinate type and distance helpers.
//!
//! Location preferences use the *planar* distance in degree space
//! ([`GeoPoint::planar_distance`]): it is only ever compared against other
//! distances from the same household, so the curvature error cancels out.

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Euclidean distance in raw lat/lon degrees.
    #[inline]
    pub fn planar_distance(self, other: GeoPoint) -> f64 {
        let d_lat = self.lat - other.lat;
        let d_lon = self.lon - other.lon;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
