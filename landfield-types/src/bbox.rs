use geo::Rect;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle `[[x_min, x_max], [y_min, y_max]]`.
///
/// Bounds are inclusive on all four sides. Unlike `geo::Rect`, the bounds are
/// stored exactly as given and never reordered, so a degenerate extent
/// (`min > max` on an axis) stays observable and can be rejected by callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extent {
    /// Create an extent from per-axis bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use landfield_types::bbox::Extent;
    ///
    /// let unit = Extent::new(0.0, 1.0, 0.0, 1.0);
    /// assert_eq!(unit.width(), 1.0);
    /// ```
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// The unbounded rectangle; contains every point with non-NaN coordinates.
    pub fn everything() -> Self {
        Self::new(
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
        )
    }

    /// Square window of half-width `radius` around a center.
    pub fn around(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self::new(
            center_x - radius,
            center_x + radius,
            center_y - radius,
            center_y + radius,
        )
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Midpoint of both axes.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// True when neither axis is inverted. NaN bounds are never ordered.
    pub fn is_ordered(&self) -> bool {
        self.x_min <= self.x_max && self.y_min <= self.y_max
    }

    /// True when all four bounds are finite.
    pub fn is_finite(&self) -> bool {
        [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Inclusive containment test: `x_min <= x <= x_max && y_min <= y <= y_max`.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Interval-overlap test. Touching edges count as overlap; the extents are
    /// disjoint only when one lies entirely to one side of the other on
    /// either axis.
    pub fn intersects(&self, other: &Extent) -> bool {
        !(self.x_max < other.x_min
            || self.x_min > other.x_max
            || self.y_max < other.y_min
            || self.y_min > other.y_max)
    }

    /// Grow the extent by `margin` on every side.
    pub fn expand(&self, margin: f64) -> Self {
        Self::new(
            self.x_min - margin,
            self.x_max + margin,
            self.y_min - margin,
            self.y_max + margin,
        )
    }

    /// Smallest extent containing both `self` and the point.
    pub fn include(&self, x: f64, y: f64) -> Self {
        Self::new(
            self.x_min.min(x),
            self.x_max.max(x),
            self.y_min.min(y),
            self.y_max.max(y),
        )
    }
}

impl From<Rect<f64>> for Extent {
    fn from(rect: Rect<f64>) -> Self {
        Self::new(rect.min().x, rect.max().x, rect.min().y, rect.max().y)
    }
}

impl From<Extent> for Rect<f64> {
    /// Note that `geo::Rect` normalises its corners, so an inverted extent
    /// comes back ordered.
    fn from(extent: Extent) -> Self {
        Rect::new(
            geo::coord! { x: extent.x_min, y: extent.y_min },
            geo::coord! { x: extent.x_max, y: extent.y_max },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let extent = Extent::new(0.0, 1.0, 0.0, 1.0);
        assert!(extent.contains(0.0, 0.0));
        assert!(extent.contains(1.0, 1.0));
        assert!(extent.contains(0.0, 1.0));
        assert!(!extent.contains(1.0 + f64::EPSILON, 0.5));
        assert!(!extent.contains(f64::NAN, 0.5));
    }

    #[test]
    fn test_intersects_touching_edges() {
        let a = Extent::new(0.0, 1.0, 0.0, 1.0);
        let touching = Extent::new(1.0, 2.0, 0.0, 1.0);
        let apart = Extent::new(1.5, 2.0, 0.0, 1.0);
        let above = Extent::new(0.0, 1.0, 2.0, 3.0);

        assert!(a.intersects(&touching));
        assert!(touching.intersects(&a));
        assert!(!a.intersects(&apart));
        assert!(!a.intersects(&above));
        assert!(a.intersects(&Extent::everything()));
    }

    #[test]
    fn test_ordering_and_finiteness() {
        assert!(Extent::new(0.0, 0.0, 1.0, 1.0).is_ordered());
        assert!(!Extent::new(1.0, 0.0, 0.0, 1.0).is_ordered());
        assert!(!Extent::new(0.0, 1.0, 1.0, 0.0).is_ordered());
        assert!(!Extent::new(f64::NAN, 1.0, 0.0, 1.0).is_ordered());
        assert!(!Extent::everything().is_finite());
        assert!(Extent::everything().is_ordered());
    }

    #[test]
    fn test_around_and_expand() {
        let window = Extent::around(1.0, 2.0, 0.5);
        assert_eq!(window, Extent::new(0.5, 1.5, 1.5, 2.5));
        assert_eq!(window.expand(0.5), Extent::new(0.0, 2.0, 1.0, 3.0));
    }

    #[test]
    fn test_rect_conversion() {
        let extent = Extent::new(-74.0, -73.9, 40.7, 40.8);
        let rect: Rect<f64> = extent.into();
        assert_eq!(Extent::from(rect), extent);
    }
}
