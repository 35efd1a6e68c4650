//! Wire payload for the area-calculation service.
//!
//! The service expects coordinates as decimal strings keyed by 1-based
//! ordinal: `{"markers": {"marker1": {"latitude": "40", "longitude":
//! "-3.5"}, ...}}`. Encoding is a pure transform over the ordered point
//! list, recomputed fresh at submit time and never stored.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::GeoPoint;

/// A coordinate pair in wire form: shortest round-trip decimal strings,
/// locale-independent, full precision of the stored `f64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WirePoint {
    pub latitude: String,
    pub longitude: String,
}

/// Request body for the calculate-area endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaRequest {
    pub markers: BTreeMap<String, WirePoint>,
}

impl AreaRequest {
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Encodes an ordered point list into the wire payload.
///
/// Key `marker{i+1}` always maps to `points[i]`. Total for 0..=4 points;
/// the minimum-count rule lives in the gate, not here. A `BTreeMap` keeps
/// the keys in ordinal order because the capacity bound keeps the numeric
/// suffix single-digit.
pub fn encode(points: &[GeoPoint]) -> AreaRequest {
    let markers = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let key = format!("marker{}", index + 1);
            let wire = WirePoint {
                latitude: point.latitude.to_string(),
                longitude: point.longitude.to_string(),
            };
            (key, wire)
        })
        .collect();

    AreaRequest { markers }
}
