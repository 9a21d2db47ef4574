//! # landfield-types
//!
//! Plain data types shared by the landfield index and grid aggregator:
//!
//! - **Records**: `PointRecord`, the immutable geolocated land-value record
//! - **Extents**: `Extent`, an inclusive axis-aligned rectangle
//! - **Cells**: `SampleCell` and `WindowMean`, the outputs of a grid sweep
//!
//! All types are serializable with Serde. The planar axes follow the record
//! layout: `x` is latitude and `y` is longitude.
//!
//! ## Examples
//!
//! ```rust
//! use landfield_types::bbox::Extent;
//! use landfield_types::point::PointRecord;
//!
//! let parcel = PointRecord::new(25.96, -80.22, 14.5, "Square Ft.");
//! let area = Extent::new(25.9, 26.0, -80.3, -80.2);
//! assert!(area.contains(parcel.lat, parcel.lon));
//! ```

pub mod bbox;
pub mod cell;
pub mod point;

pub use bbox::Extent;
pub use cell::{SampleCell, WindowMean};
pub use point::{Locate, PointRecord};
