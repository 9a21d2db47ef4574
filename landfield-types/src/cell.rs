use serde::{Deserialize, Serialize};

/// One emitted lattice sample: the window center and the mean of the value
/// field over the qualifying points in that window.
///
/// Cells whose window held no qualifying point are never constructed, so
/// `value` is always a finite mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleCell {
    pub center_x: f64,
    pub center_y: f64,
    pub value: f64,
}

impl SampleCell {
    pub fn new(center_x: f64, center_y: f64, value: f64) -> Self {
        Self {
            center_x,
            center_y,
            value,
        }
    }

    /// The `(center_x, center_y, value)` triple consumed by renderers.
    pub fn as_triple(&self) -> (f64, f64, f64) {
        (self.center_x, self.center_y, self.value)
    }
}

impl From<SampleCell> for (f64, f64, f64) {
    fn from(cell: SampleCell) -> Self {
        cell.as_triple()
    }
}

/// Aggregate over the qualifying points of a single window.
///
/// `centroid_x`/`centroid_y` are the coordinate means of the points that
/// contributed to `value`; a sweep does not emit them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowMean {
    pub value: f64,
    pub centroid_x: f64,
    pub centroid_y: f64,
    pub count: usize,
}
