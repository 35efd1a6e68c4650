/// A single selected geographic coordinate pair.
///
/// Latitude and longitude are taken exactly as delivered by the map surface;
/// range validation is the surface's job, not ours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
