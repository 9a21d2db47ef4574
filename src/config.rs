//! Serializable configuration for index construction and grid sweeps.
//!
//! Every field has a default, so partial documents are accepted:
//!
//! ```rust
//! use landfield::Config;
//!
//! let config = Config::from_json(r#"{ "sweep": { "step": 0.001 } }"#).unwrap();
//! assert_eq!(config.sweep.step, 0.001);
//! assert_eq!(config.sweep.radius, 5e-3);
//! assert_eq!(config.index.bucket_capacity, 8);
//! ```

use crate::compute::validation::{validate_radius, validate_step};
use crate::error::{FieldError, Result};
use serde::{Deserialize, Serialize};

/// Quadtree construction parameters.
///
/// A leaf splits once it holds more than `bucket_capacity` records, unless it
/// is already at `max_depth` or all of its records share one position. Those
/// leaves keep every record they receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    #[serde(default = "IndexConfig::default_bucket_capacity")]
    pub bucket_capacity: usize,

    #[serde(default = "IndexConfig::default_max_depth")]
    pub max_depth: usize,
}

impl IndexConfig {
    const fn default_bucket_capacity() -> usize {
        8
    }

    const fn default_max_depth() -> usize {
        24
    }

    pub fn with_bucket_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Bucket capacity must be greater than zero");
        self.bucket_capacity = capacity;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        assert!(depth > 0, "Max depth must be greater than zero");
        self.max_depth = depth;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.bucket_capacity == 0 {
            return Err(FieldError::InvalidParameter(
                "Bucket capacity must be greater than zero".to_string(),
            ));
        }
        if self.max_depth == 0 {
            return Err(FieldError::InvalidParameter(
                "Max depth must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            bucket_capacity: Self::default_bucket_capacity(),
            max_depth: Self::default_max_depth(),
        }
    }
}

/// Lattice spacing and window half-width for a sweep, in coordinate degrees.
///
/// The radius may exceed the step; windows then overlap and the output is a
/// smoothed field rather than a disjoint binning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "SweepConfig::default_step")]
    pub step: f64,

    #[serde(default = "SweepConfig::default_radius")]
    pub radius: f64,
}

impl SweepConfig {
    const fn default_step() -> f64 {
        8e-4
    }

    const fn default_radius() -> f64 {
        5e-3
    }

    pub fn new(step: f64, radius: f64) -> Self {
        Self { step, radius }
    }

    /// Denser lattice with a tighter window, for street-level views.
    pub fn fine() -> Self {
        Self::new(4e-4, 1e-3)
    }

    pub fn validate(&self) -> Result<()> {
        validate_step(self.step)?;
        validate_radius(self.radius)
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            step: Self::default_step(),
            radius: Self::default_radius(),
        }
    }
}

/// Top-level configuration for a `LandField`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,

    #[serde(default)]
    pub sweep: SweepConfig,
}

impl Config {
    pub fn with_index(mut self, index: IndexConfig) -> Self {
        self.index = index;
        self
    }

    pub fn with_sweep(mut self, sweep: SweepConfig) -> Self {
        self.sweep = sweep;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.index.validate()?;
        self.sweep.validate()
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
