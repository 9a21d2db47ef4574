//! Extent and value-range helpers.
//!
//! These compute the plain numeric bounds a sweep needs (the data extent)
//! and the bounds a rendering collaborator needs to build its scales (the
//! value range of the emitted cells).

use geo::{BoundingRect, Rect};
use landfield_types::{Extent, Locate, PointRecord, SampleCell};

/// Per-axis min/max over every item with a finite position.
///
/// Returns `None` when no item has a finite position.
///
/// # Examples
///
/// ```rust
/// use landfield::{PointRecord, spatial::extent};
///
/// let records = vec![
///     PointRecord::new(25.96, -80.22, 14.5, "Square Ft."),
///     PointRecord::new(25.90, -80.30, 9.0, "Square Ft."),
/// ];
/// let e = extent(&records).unwrap();
/// assert_eq!((e.x_min, e.x_max), (25.90, 25.96));
/// assert_eq!((e.y_min, e.y_max), (-80.30, -80.22));
/// ```
pub fn extent<T: Locate>(items: &[T]) -> Option<Extent> {
    items
        .iter()
        .map(|item| (item.x(), item.y()))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .fold(None, |acc: Option<Extent>, (x, y)| {
            Some(match acc {
                Some(e) => e.include(x, y),
                None => Extent::new(x, x, y, y),
            })
        })
}

/// Bounding rectangle of the record positions as a `geo::Rect`
/// (`x = lat`, `y = lon`).
pub fn bounding_rect(records: &[PointRecord]) -> Option<Rect> {
    let points: Vec<_> = records
        .iter()
        .filter(|r| r.has_finite_position())
        .map(PointRecord::position)
        .collect();
    if points.is_empty() {
        return None;
    }

    geo::MultiPoint::new(points).bounding_rect()
}

/// Min/max of the aggregate values, or `None` for an empty cell list.
///
/// ```rust
/// use landfield::{SampleCell, spatial::value_range};
///
/// let cells = vec![SampleCell::new(0.0, 0.0, 4.0), SampleCell::new(0.0, 1.0, 9.5)];
/// assert_eq!(value_range(&cells), Some((4.0, 9.5)));
/// assert_eq!(value_range(&[]), None);
/// ```
pub fn value_range(cells: &[SampleCell]) -> Option<(f64, f64)> {
    cells.iter().map(|c| c.value).fold(None, |acc, v| {
        Some(match acc {
            Some((lo, hi)) => (f64::min(lo, v), f64::max(hi, v)),
            None => (v, v),
        })
    })
}
