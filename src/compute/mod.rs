//! Index and aggregation algorithms.
//!
//! - `spatial`: quadtree construction and range queries
//! - `grid`: lattice generation and window averaging
//! - `validation`: parameter and record checks

pub mod grid;
pub mod spatial;
pub mod validation;
