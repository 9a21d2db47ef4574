//! Quadtree range queries and sliding-window grid aggregation over
//! geolocated land-value records.
//!
//! ```rust
//! use landfield::{Config, Extent, LandField};
//!
//! let records = landfield::records::from_json_str(r#"[
//!     {"lat": 25.9600, "lon": -80.2200, "land_value": 12.0, "land_unit": "Square Ft."},
//!     {"lat": 25.9610, "lon": -80.2210, "land_value": 18.0, "land_unit": "Square Ft."}
//! ]"#)?;
//! let field = LandField::build(records, &Config::default());
//!
//! let nearby = field.query(&Extent::new(25.959, 25.9605, -80.221, -80.219));
//! assert_eq!(nearby.len(), 1);
//!
//! for cell in field.cells()? {
//!     let (x, y, value) = cell.as_triple();
//!     assert!(value >= 12.0 && value <= 18.0);
//! #   let _ = (x, y);
//! }
//! # Ok::<(), landfield::FieldError>(())
//! ```

pub mod compute;
pub mod config;
pub mod error;
pub mod field;
pub mod records;
pub mod spatial;

pub use compute::grid::{LandValueSweep, Sweep, axis_centers, sweep, window_mean};
pub use compute::spatial::QuadTree;
pub use config::{Config, IndexConfig, SweepConfig};
pub use error::{FieldError, Result};
pub use field::LandField;

pub use landfield_types::{Extent, Locate, PointRecord, SampleCell, WindowMean};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{FieldError, LandField, Result};

    pub use crate::{Config, IndexConfig, SweepConfig};

    pub use crate::{Extent, PointRecord, QuadTree, SampleCell, Sweep};

    pub use crate::records::{SQUARE_FEET, is_priced_per_square_foot, land_value};
}
