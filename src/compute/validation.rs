//! Validation for sweep parameters, extents and decoded records.

use crate::error::{FieldError, Result};
use landfield_types::{Extent, PointRecord};

/// Validates a lattice step: finite and strictly positive.
///
/// # Examples
///
/// ```
/// use landfield::compute::validation::validate_step;
///
/// assert!(validate_step(0.5).is_ok());
/// assert!(validate_step(0.0).is_err());
/// assert!(validate_step(f64::NAN).is_err());
/// ```
pub fn validate_step(step: f64) -> Result<()> {
    if !step.is_finite() || step <= 0.0 {
        return Err(FieldError::InvalidParameter(format!(
            "Step must be finite and positive, got: {}",
            step
        )));
    }
    Ok(())
}

/// Validates a window half-width: finite and strictly positive.
///
/// # Examples
///
/// ```
/// use landfield::compute::validation::validate_radius;
///
/// assert!(validate_radius(1e-3).is_ok());
/// assert!(validate_radius(-1.0).is_err());
/// ```
pub fn validate_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(FieldError::InvalidParameter(format!(
            "Radius must be finite and positive, got: {}",
            radius
        )));
    }
    Ok(())
}

/// Validates a sweep extent: finite bounds with `min <= max` on both axes.
///
/// A zero-width axis is allowed; it still yields sample centers.
///
/// # Examples
///
/// ```
/// use landfield::compute::validation::validate_extent;
/// use landfield_types::Extent;
///
/// assert!(validate_extent(&Extent::new(0.0, 1.0, 0.0, 1.0)).is_ok());
/// assert!(validate_extent(&Extent::new(1.0, 0.0, 0.0, 1.0)).is_err());
/// ```
pub fn validate_extent(extent: &Extent) -> Result<()> {
    if !extent.is_finite() {
        return Err(FieldError::InvalidParameter(format!(
            "Extent bounds must be finite, got: {:?}",
            extent
        )));
    }

    if extent.x_min > extent.x_max {
        return Err(FieldError::InvalidParameter(format!(
            "x_min ({}) must be <= x_max ({})",
            extent.x_min, extent.x_max
        )));
    }

    if extent.y_min > extent.y_max {
        return Err(FieldError::InvalidParameter(format!(
            "y_min ({}) must be <= y_max ({})",
            extent.y_min, extent.y_max
        )));
    }

    Ok(())
}

/// Validates that a record can be placed in the index.
pub fn validate_record(record: &PointRecord) -> Result<()> {
    if !record.lat.is_finite() {
        return Err(FieldError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            record.lat
        )));
    }

    if !record.lon.is_finite() {
        return Err(FieldError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            record.lon
        )));
    }

    Ok(())
}

/// Validates multiple records, reporting the first offending index.
pub fn validate_records(records: &[PointRecord]) -> Result<()> {
    for (idx, record) in records.iter().enumerate() {
        validate_record(record)
            .map_err(|e| FieldError::InvalidInput(format!("Record at index {}: {}", idx, e)))?;
    }
    Ok(())
}
