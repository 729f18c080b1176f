// Simulated GPS parameters
use serde::{Deserialize, Serialize};

use super::validation::{ValidationError, require_within};

/// Rough metres per degree of latitude, used only for display.
const METRES_PER_DEGREE: f64 = 111_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatedPositionParams {
    pub base_lat: f64,
    pub base_lng: f64,
    /// Maximum jitter applied to the base point, in degrees.
    pub coord_variation: f64,
}

impl SimulatedPositionParams {
    pub fn new(base_lat: f64, base_lng: f64, coord_variation: f64) -> Self {
        Self {
            base_lat,
            base_lng,
            coord_variation,
        }
    }

    pub fn variation_metres(&self) -> f64 {
        self.coord_variation * METRES_PER_DEGREE
    }

    pub fn validate(&self, errors: &mut Vec<ValidationError>) {
        require_within("gps.base_lat", self.base_lat, -90.0, 90.0, errors);
        require_within("gps.base_lng", self.base_lng, -180.0, 180.0, errors);
        require_within(
            "gps.coord_variation",
            self.coord_variation,
            0.0,
            f64::MAX,
            errors,
        );
    }
}

impl Default for SimulatedPositionParams {
    // Nagpur
    fn default() -> Self {
        Self::new(21.17662638279427, 79.0616383891541, 0.0025)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_center_is_in_range() {
        let params = SimulatedPositionParams::default();
        assert!(params.base_lat.abs() <= 90.0);
        assert!(params.base_lng.abs() <= 180.0);

        let mut errors = Vec::new();
        params.validate(&mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_variation_metres() {
        let params = SimulatedPositionParams::default();
        assert!((params.variation_metres() - 277.5).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_coordinates() {
        let mut errors = Vec::new();
        SimulatedPositionParams::new(91.0, -180.5, -0.1).validate(&mut errors);

        let fields: Vec<&str> = errors
            .iter()
            .map(|e| match e {
                ValidationError::OutOfRange { field, .. } => *field,
                other => panic!("unexpected error {other:?}"),
            })
            .collect();
        assert_eq!(fields, vec!["gps.base_lat", "gps.base_lng", "gps.coord_variation"]);
    }

    #[test]
    fn test_poles_and_antimeridian_are_valid() {
        let mut errors = Vec::new();
        SimulatedPositionParams::new(-90.0, 180.0, 0.0).validate(&mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_infinite_variation_is_rejected() {
        let mut errors = Vec::new();
        SimulatedPositionParams::new(0.0, 0.0, f64::INFINITY).validate(&mut errors);
        assert_eq!(errors.len(), 1);
    }
}
