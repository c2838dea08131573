//! Spatial bounds for spatial filters.

use serde::Serialize;

/// A latitude/longitude pair. Both parts must be finite; JSON has no NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl SpatialCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Wire form: `[lat, lon]`.
    pub fn to_array(self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

/// Shape a spatial filter matches against, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SpatialBound {
    Rectangular {
        #[serde(rename = "minCoords")]
        min_coords: [f64; 2],
        #[serde(rename = "maxCoords")]
        max_coords: [f64; 2],
    },
    Radius {
        coords: [f64; 2],
        radius: f64,
    },
}

impl SpatialBound {
    pub fn rectangle(min: SpatialCoordinates, max: SpatialCoordinates) -> Self {
        debug_assert!(min.is_finite() && max.is_finite(), "non-finite rectangle corner");
        SpatialBound::Rectangular {
            min_coords: min.to_array(),
            max_coords: max.to_array(),
        }
    }

    /// `center` and `radius` must be finite.
    pub fn radius(center: SpatialCoordinates, radius: f64) -> Self {
        debug_assert!(
            center.is_finite() && radius.is_finite(),
            "non-finite radius bound"
        );
        SpatialBound::Radius {
            coords: center.to_array(),
            radius,
        }
    }
}
