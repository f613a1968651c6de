//! Named 2D location.

use serde::{Deserialize, Serialize};

/// A named point in the plane.
///
/// Deserializes from either `{"id": "A", "x": 0.0, "y": 1.0}` or the
/// positional form `["A", 0.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
///
/// let a = Location::new("A", 0.0, 0.0);
/// let b = Location::new("B", 3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: String,
    x: f64,
    y: f64,
}

impl Location {
    /// Creates a location.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self { id: id.into(), x, y }
    }

    /// Unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Horizontal coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
