//! One-shot pipeline from a record snapshot to a smoothed land-value field.

use crate::compute::grid::{Sweep, sweep};
use crate::compute::spatial::QuadTree;
use crate::config::Config;
use crate::error::Result;
use crate::spatial::extent;
use landfield_types::{Extent, PointRecord, SampleCell, WindowMean};
use std::sync::Arc;

/// An indexed snapshot of land-value records.
///
/// The records are shared between the caller-facing point list and the
/// index; nothing is copied after construction.
///
/// ```rust
/// use landfield::{Config, LandField, PointRecord, SweepConfig};
///
/// let records = vec![
///     PointRecord::new(25.960, -80.220, 12.0, "Square Ft."),
///     PointRecord::new(25.961, -80.221, 18.0, "Square Ft."),
///     PointRecord::new(25.962, -80.219, 400.0, "Acre"),
/// ];
/// let field = LandField::build(records, &Config::default());
///
/// assert_eq!(field.points().len(), 3);
/// let cells = field.cells().unwrap();
/// assert!(cells.iter().all(|c| c.value >= 12.0 && c.value <= 18.0));
/// ```
#[derive(Debug, Clone)]
pub struct LandField {
    index: QuadTree<PointRecord>,
    extent: Option<Extent>,
    config: Config,
}

impl LandField {
    /// Index `records` with `config.index`. Never fails.
    pub fn build(records: impl Into<Arc<[PointRecord]>>, config: &Config) -> Self {
        let records: Arc<[PointRecord]> = records.into();
        let extent = extent(&records[..]);
        let index = QuadTree::build(records, config.index);
        Self {
            index,
            extent,
            config: *config,
        }
    }

    /// The original records, unfiltered and in input order.
    pub fn points(&self) -> &[PointRecord] {
        self.index.items()
    }

    /// Data extent of the records, or `None` when there are none.
    pub fn extent(&self) -> Option<Extent> {
        self.extent
    }

    pub fn index(&self) -> &QuadTree<PointRecord> {
        &self.index
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Records inside `rect` (inclusive bounds, unspecified order).
    pub fn query(&self, rect: &Extent) -> Vec<&PointRecord> {
        self.index.query(rect)
    }

    /// Land-value cells over the data extent using the configured lattice.
    ///
    /// An empty snapshot yields an empty list; invalid sweep parameters fail
    /// before any window is evaluated.
    pub fn cells(&self) -> Result<Vec<SampleCell>> {
        self.config.sweep.validate()?;
        match self.extent {
            Some(extent) => Sweep::land_value(self.config.sweep).run(&self.index, &extent),
            None => Ok(Vec::new()),
        }
    }

    /// Cells over the data extent for an arbitrary predicate and value field.
    pub fn cells_with<P, V>(&self, predicate: P, value_field: V) -> Result<Vec<SampleCell>>
    where
        P: Fn(&PointRecord) -> bool,
        V: Fn(&PointRecord) -> f64,
    {
        self.config.sweep.validate()?;
        let Some(extent) = self.extent else {
            return Ok(Vec::new());
        };
        sweep(
            &self.index,
            &extent,
            self.config.sweep.step,
            self.config.sweep.radius,
            predicate,
            value_field,
        )
    }

    /// Land-value window mean around a single center.
    pub fn sample(&self, center_x: f64, center_y: f64) -> Option<WindowMean> {
        Sweep::land_value(self.config.sweep).sample(&self.index, center_x, center_y)
    }
}
