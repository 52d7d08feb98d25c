use serde::{Deserialize, Serialize};

/// A probed or target position on the print bed, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointCoordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PointCoordinates {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Default for PointCoordinates {
    /// Front-left calibration point used when the config does not name one.
    fn default() -> Self {
        Self::new(20.0, 20.0, 0.0)
    }
}

impl std::fmt::Display for PointCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X{:.2} Y{:.2} Z{:.2}", self.x, self.y, self.z)
    }
}
