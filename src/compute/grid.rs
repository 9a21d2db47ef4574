//! Sliding-window grid aggregation over a [`QuadTree`].
//!
//! A sweep lays a regular lattice of sample centers over an extent padded by
//! the window radius. Each center owns a square window of half-width
//! `radius`; the qualifying items inside the window are averaged and the
//! cell is emitted only when at least one item qualified. Windows overlap
//! whenever `radius > step / 2`, so the result is a smoothed field.
//!
//! Every cell is a pure function of the immutable tree and its center, so
//! cells can be evaluated in any order.
//!
//! ```rust
//! use landfield::compute::grid::sweep;
//! use landfield::{Extent, IndexConfig, PointRecord, QuadTree};
//!
//! let tree = QuadTree::build(
//!     vec![
//!         PointRecord::new(0.0, 0.0, 10.0, "A"),
//!         PointRecord::new(0.0, 0.0, 20.0, "A"),
//!     ],
//!     IndexConfig::default(),
//! );
//! let cells = sweep(
//!     &tree,
//!     &Extent::new(0.0, 0.0, 0.0, 0.0),
//!     1.0,
//!     0.5,
//!     |r: &PointRecord| r.land_unit == "A",
//!     |r: &PointRecord| r.land_value,
//! )
//! .unwrap();
//! assert!(cells.iter().all(|c| c.value == 15.0));
//! ```

use crate::compute::spatial::QuadTree;
use crate::compute::validation::{validate_extent, validate_radius, validate_step};
use crate::config::SweepConfig;
use crate::error::{FieldError, Result};
use crate::records::{is_priced_per_square_foot, land_value};
use landfield_types::{Extent, Locate, PointRecord, SampleCell, WindowMean};

/// Relative slack, in units of `step`, for keeping a stepped center that
/// lands on the upper bound up to rounding.
const STEP_TOLERANCE: f64 = 1e-9;

/// Most windows a single sweep will evaluate. Lattices that would exceed it
/// are rejected before any center is generated.
pub const MAX_LATTICE_CELLS: usize = 1 << 26;

/// Sample centers along one axis.
///
/// Stepped values `min - radius + i * step` up to and including
/// `max + radius`, then `max - radius` appended unconditionally so the high
/// edge is sampled even when `step` does not divide the range. The appended
/// value may duplicate a stepped one.
///
/// # Examples
///
/// ```
/// use landfield::compute::grid::axis_centers;
///
/// let xs = axis_centers(0.0, 1.0, 0.5, 0.1).unwrap();
/// assert_eq!(xs.len(), 4);
/// assert!((xs[3] - 0.9).abs() < 1e-12);
/// ```
pub fn axis_centers(min: f64, max: f64, step: f64, radius: f64) -> Result<Vec<f64>> {
    validate_step(step)?;
    validate_radius(radius)?;
    validate_extent(&Extent::new(min, max, 0.0, 0.0))?;
    axis_len(min, max, step, radius)?;
    Ok(centers_unchecked(min, max, step, radius))
}

/// Upper bound on the number of centers along one axis, rejecting spans
/// that would need more than [`MAX_LATTICE_CELLS`] of them.
fn axis_len(min: f64, max: f64, step: f64, radius: f64) -> Result<usize> {
    let span = (max + radius) - (min - radius);
    // Stepped values, one of slack for the tolerance, and the forced edge.
    let len = (span / step).floor() + 3.0;
    if !len.is_finite() || len > MAX_LATTICE_CELLS as f64 {
        return Err(FieldError::InvalidParameter(format!(
            "Step {} over a span of {} needs about {} centers per axis (limit {})",
            step, span, len, MAX_LATTICE_CELLS
        )));
    }
    Ok(len as usize)
}

fn centers_unchecked(min: f64, max: f64, step: f64, radius: f64) -> Vec<f64> {
    let start = min - radius;
    let stop = max + radius + step * STEP_TOLERANCE;

    let mut centers = Vec::new();
    let mut i = 0u64;
    loop {
        let center = start + i as f64 * step;
        if center > stop {
            break;
        }
        centers.push(center);
        i += 1;
    }
    centers.push(max - radius);
    centers
}

/// Mean of `value_field` over the qualifying items in the window centered at
/// `(center_x, center_y)`.
///
/// Items with a non-finite value are skipped. Returns `None` when nothing
/// qualified; the coordinate means in the result cover the same items as
/// the value mean.
pub fn window_mean<T, P, V>(
    tree: &QuadTree<T>,
    center_x: f64,
    center_y: f64,
    radius: f64,
    predicate: P,
    value_field: V,
) -> Option<WindowMean>
where
    T: Locate,
    P: Fn(&T) -> bool,
    V: Fn(&T) -> f64,
{
    let window = Extent::around(center_x, center_y, radius);

    let mut count = 0usize;
    let (mut sum_value, mut sum_x, mut sum_y) = (0.0, 0.0, 0.0);
    tree.visit_in(&window, |item| {
        if !predicate(item) {
            return;
        }
        let value = value_field(item);
        if !value.is_finite() {
            return;
        }
        count += 1;
        sum_value += value;
        sum_x += item.x();
        sum_y += item.y();
    });

    if count == 0 {
        return None;
    }

    let n = count as f64;
    Some(WindowMean {
        value: sum_value / n,
        centroid_x: sum_x / n,
        centroid_y: sum_y / n,
        count,
    })
}

/// Sweep the lattice over `extent` and emit one cell per non-empty window.
///
/// Iteration order is x-centers outer, y-centers inner. All parameters are
/// checked before the tree is touched, so a rejected call yields no cells.
pub fn sweep<T, P, V>(
    tree: &QuadTree<T>,
    extent: &Extent,
    step: f64,
    radius: f64,
    predicate: P,
    value_field: V,
) -> Result<Vec<SampleCell>>
where
    T: Locate,
    P: Fn(&T) -> bool,
    V: Fn(&T) -> f64,
{
    validate_step(step)?;
    validate_radius(radius)?;
    validate_extent(extent)?;

    let nx = axis_len(extent.x_min, extent.x_max, step, radius)?;
    let ny = axis_len(extent.y_min, extent.y_max, step, radius)?;
    if nx.checked_mul(ny).is_none_or(|n| n > MAX_LATTICE_CELLS) {
        return Err(FieldError::InvalidParameter(format!(
            "Lattice of {}x{} centers exceeds the limit of {} cells",
            nx, ny, MAX_LATTICE_CELLS
        )));
    }

    let xs = centers_unchecked(extent.x_min, extent.x_max, step, radius);
    let ys = centers_unchecked(extent.y_min, extent.y_max, step, radius);

    let mut cells = Vec::new();
    for &cx in &xs {
        for &cy in &ys {
            if let Some(mean) = window_mean(tree, cx, cy, radius, &predicate, &value_field) {
                cells.push(SampleCell::new(cx, cy, mean.value));
            }
        }
    }

    log::debug!(
        "Swept {}x{} lattice (step {}, radius {}): {} cells emitted",
        xs.len(),
        ys.len(),
        step,
        radius,
        cells.len()
    );

    Ok(cells)
}

/// A reusable sweep: lattice parameters plus the qualifying predicate and
/// the averaged field.
#[derive(Debug, Clone, Copy)]
pub struct Sweep<P, V> {
    config: SweepConfig,
    predicate: P,
    value_field: V,
}

/// Predicate and value-field pair of the land-value sweep.
pub type LandValueSweep = Sweep<fn(&PointRecord) -> bool, fn(&PointRecord) -> f64>;

impl LandValueSweep {
    /// Average `land_value` over records priced per square foot with a
    /// positive value.
    pub fn land_value(config: SweepConfig) -> Self {
        Sweep {
            config,
            predicate: is_priced_per_square_foot,
            value_field: land_value,
        }
    }
}

impl<P, V> Sweep<P, V> {
    pub fn new(config: SweepConfig, predicate: P, value_field: V) -> Self {
        Self {
            config,
            predicate,
            value_field,
        }
    }

    pub fn config(&self) -> SweepConfig {
        self.config
    }

    /// Run the sweep over `extent`.
    pub fn run<T>(&self, tree: &QuadTree<T>, extent: &Extent) -> Result<Vec<SampleCell>>
    where
        T: Locate,
        P: Fn(&T) -> bool,
        V: Fn(&T) -> f64,
    {
        sweep(
            tree,
            extent,
            self.config.step,
            self.config.radius,
            &self.predicate,
            &self.value_field,
        )
    }

    /// Evaluate a single window without running the whole lattice.
    pub fn sample<T>(&self, tree: &QuadTree<T>, center_x: f64, center_y: f64) -> Option<WindowMean>
    where
        T: Locate,
        P: Fn(&T) -> bool,
        V: Fn(&T) -> f64,
    {
        window_mean(
            tree,
            center_x,
            center_y,
            self.config.radius,
            &self.predicate,
            &self.value_field,
        )
    }
}
