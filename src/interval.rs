//! Accepted hit-distance window.

/// Closed interval [min, max] of ray parameters a hit may land in.
///
/// Built from the camera's `min_distance` / `max_distance`. Callers must keep
/// `min < max`; an inverted window just rejects everything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Nearest accepted distance, also used as the surface bias
    pub min: f32,
    /// Farthest accepted distance
    pub max: f32,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Inclusive containment test
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }
}
