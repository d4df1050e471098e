//! Error types for gamut search.

use thiserror::Error;

/// Errors produced by the sampler and its surrounding helpers.
///
/// Color conversions and the gamut test are total and never fail.
#[derive(Debug, Error)]
pub enum SamplerError {
    /// The search configuration was rejected before any sampling began.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The attempt cap was reached before enough colors were accepted.
    #[error(
        "search exhausted after {attempts} attempts: found {found} of {requested} in-gamut colors"
    )]
    BoundedSearchExhausted {
        attempts: u64,
        found: usize,
        requested: usize,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A swatch would have zero width or height, or overflows `u32`.
    #[error("invalid dimensions: swatch width and height must be non-zero")]
    InvalidDimensions,

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(String),
}
