//! Search configuration.
//!
//! A [`SearchConfig`] captures everything the sampler needs besides the
//! random source: how many colors to find, the LAB sampling box, and an
//! optional attempt cap. Together with a PRNG seed it makes a search
//! reproducible.

use crate::error::SamplerError;
use serde::{Deserialize, Serialize};

/// Closed sampling interval `[min, max]` for one LAB axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

impl SampleRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, axis: &str) -> Result<(), SamplerError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(SamplerError::InvalidConfiguration(format!(
                "{axis} range bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(SamplerError::InvalidConfiguration(format!(
                "{axis} range is inverted: min {} > max {}",
                self.min, self.max
            )));
        }
        if !(self.max - self.min).is_finite() {
            return Err(SamplerError::InvalidConfiguration(format!(
                "{axis} range [{}, {}] is wider than f64 can represent",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Parameters of one rejection-sampling search.
///
/// Missing fields in JSON input fall back to [`SearchConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of in-gamut colors to find.
    pub count: usize,
    /// Sampling range for L*.
    pub lightness: SampleRange,
    /// Sampling range shared by a* and b*.
    pub chroma: SampleRange,
    /// Maximum number of attempts, or `None` to search until done.
    pub max_attempts: Option<u64>,
}

impl SearchConfig {
    pub const DEFAULT_COUNT: usize = 10;
    pub const DEFAULT_LIGHTNESS: SampleRange = SampleRange::new(0.0, 100.0);
    // Asymmetric, as in the signed 8-bit a*/b* encoding.
    pub const DEFAULT_CHROMA: SampleRange = SampleRange::new(-128.0, 127.0);

    /// Default configuration searching for `count` colors.
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON. The result is not validated.
    pub fn from_json(json: &str) -> Result<Self, SamplerError> {
        serde_json::from_str(json)
            .map_err(|e| SamplerError::InvalidConfiguration(format!("invalid config JSON: {e}")))
    }

    /// Rejects a zero count, inverted or non-finite ranges, ranges whose
    /// width overflows `f64`, and a zero attempt cap.
    pub fn validate(&self) -> Result<(), SamplerError> {
        if self.count == 0 {
            return Err(SamplerError::InvalidConfiguration(
                "count must be at least 1".into(),
            ));
        }
        self.lightness.validate("lightness")?;
        self.chroma.validate("chroma")?;
        if self.max_attempts == Some(0) {
            return Err(SamplerError::InvalidConfiguration(
                "max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            count: Self::DEFAULT_COUNT,
            lightness: Self::DEFAULT_LIGHTNESS,
            chroma: Self::DEFAULT_CHROMA,
            max_attempts: None,
        }
    }
}
