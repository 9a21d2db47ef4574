//! Decoding of upstream record lists and the canonical land-value filter.
//!
//! Upstream services deliver records as a JSON array of objects with `lat`,
//! `lon`, `land_value` and `land_unit` (plus fields such as `id` or
//! `land_area`, which are ignored). Database-backed sources may emit `null`
//! for any of them. Two policies are offered:
//!
//! - **lenient** (`from_json_*`): records without a finite position are
//!   dropped with a warning; a missing value becomes NaN (never averaged)
//!   and a missing unit becomes the empty string.
//! - **strict** (`from_json_str_strict`): any missing or non-finite
//!   coordinate rejects the whole list.

use crate::compute::validation::validate_records;
use crate::error::{FieldError, Result};
use landfield_types::PointRecord;
use serde::Deserialize;
use std::io::Read;

/// Unit string of records whose `land_value` is a price per square foot.
pub const SQUARE_FEET: &str = "Square Ft.";

/// The default sweep predicate: priced per square foot with a positive value.
///
/// ```
/// use landfield::PointRecord;
/// use landfield::records::is_priced_per_square_foot;
///
/// assert!(is_priced_per_square_foot(&PointRecord::new(0.0, 0.0, 12.5, "Square Ft.")));
/// assert!(!is_priced_per_square_foot(&PointRecord::new(0.0, 0.0, 12.5, "Acre")));
/// assert!(!is_priced_per_square_foot(&PointRecord::new(0.0, 0.0, 0.0, "Square Ft.")));
/// ```
pub fn is_priced_per_square_foot(record: &PointRecord) -> bool {
    record.land_unit == SQUARE_FEET && record.land_value > 0.0
}

/// The default sweep value field.
pub fn land_value(record: &PointRecord) -> f64 {
    record.land_value
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    lat: Option<f64>,
    lon: Option<f64>,
    land_value: Option<f64>,
    land_unit: Option<String>,
}

impl RawRecord {
    fn into_record(self) -> Option<PointRecord> {
        let lat = self.lat.filter(|v| v.is_finite())?;
        let lon = self.lon.filter(|v| v.is_finite())?;
        Some(PointRecord::new(
            lat,
            lon,
            self.land_value.unwrap_or(f64::NAN),
            self.land_unit.unwrap_or_default(),
        ))
    }
}

fn lenient(raw: Vec<RawRecord>) -> Vec<PointRecord> {
    let total = raw.len();
    let records: Vec<PointRecord> = raw.into_iter().filter_map(RawRecord::into_record).collect();

    let dropped = total - records.len();
    if dropped > 0 {
        log::warn!(
            "Dropped {} of {} records without a finite position",
            dropped,
            total
        );
    }
    log::debug!("Decoded {} records", records.len());
    records
}

/// Decode a JSON array of records, dropping unplaceable ones.
///
/// ```
/// use landfield::records::from_json_str;
///
/// let json = r#"[
///     {"id": 1, "lat": 25.96, "lon": -80.22, "land_value": 14.5, "land_unit": "Square Ft."},
///     {"id": 2, "lat": null, "lon": -80.21, "land_value": 9.0, "land_unit": "Square Ft."}
/// ]"#;
/// let records = from_json_str(json).unwrap();
/// assert_eq!(records.len(), 1);
/// ```
pub fn from_json_str(json: &str) -> Result<Vec<PointRecord>> {
    let raw: Vec<RawRecord> = serde_json::from_str(json)?;
    Ok(lenient(raw))
}

/// Byte-slice variant of [`from_json_str`].
pub fn from_json_slice(bytes: &[u8]) -> Result<Vec<PointRecord>> {
    let raw: Vec<RawRecord> = serde_json::from_slice(bytes)?;
    Ok(lenient(raw))
}

/// Reader variant of [`from_json_str`].
pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<PointRecord>> {
    let raw: Vec<RawRecord> = serde_json::from_reader(reader)?;
    Ok(lenient(raw))
}

/// Decode a JSON array of records, rejecting the list if any record lacks a
/// finite position.
pub fn from_json_str_strict(json: &str) -> Result<Vec<PointRecord>> {
    let raw: Vec<RawRecord> = serde_json::from_str(json)?;

    let mut records = Vec::with_capacity(raw.len());
    for (idx, r) in raw.into_iter().enumerate() {
        let (Some(lat), Some(lon)) = (r.lat, r.lon) else {
            return Err(FieldError::InvalidInput(format!(
                "Record at index {}: missing coordinate",
                idx
            )));
        };
        records.push(PointRecord::new(
            lat,
            lon,
            r.land_value.unwrap_or(f64::NAN),
            r.land_unit.unwrap_or_default(),
        ));
    }

    validate_records(&records)?;
    Ok(records)
}
