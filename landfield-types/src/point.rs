use geo::Point;
use serde::{Deserialize, Serialize};

/// Anything that occupies a single planar position and can be indexed.
///
/// The quadtree is generic over this trait so it can organise records of any
/// shape; `PointRecord` maps latitude to `x` and longitude to `y`.
pub trait Locate {
    /// Position along the first axis.
    fn x(&self) -> f64;

    /// Position along the second axis.
    fn y(&self) -> f64;
}

/// A geolocated land-value record.
///
/// Records have no explicit identity: two records with identical fields are
/// still two records. They are created once from the input set and never
/// mutated afterwards.
///
/// # Examples
///
/// ```
/// use landfield_types::point::{Locate, PointRecord};
///
/// let record = PointRecord::new(25.96, -80.22, 14.5, "Square Ft.");
/// assert_eq!(record.x(), 25.96);
/// assert_eq!(record.y(), -80.22);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub lat: f64,
    pub lon: f64,
    pub land_value: f64,
    pub land_unit: String,
}

impl PointRecord {
    pub fn new(lat: f64, lon: f64, land_value: f64, land_unit: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            land_value,
            land_unit: land_unit.into(),
        }
    }

    /// Planar position of the record (`x = lat`, `y = lon`).
    pub fn position(&self) -> Point<f64> {
        Point::new(self.lat, self.lon)
    }

    /// Whether both coordinates are finite and the record can be placed.
    pub fn has_finite_position(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl Locate for PointRecord {
    fn x(&self) -> f64 {
        self.lat
    }

    fn y(&self) -> f64 {
        self.lon
    }
}

impl Locate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }

    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl<T: Locate + ?Sized> Locate for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}
