#![deny(unsafe_code)]
//! Core types for gamut-search: finding displayable sRGB colors by
//! rejection sampling CIELAB.
//!
//! Provides the color types (`Lab`, `Xyz`, `LinearRgb`, `Srgb`) and their
//! pure conversions, the sRGB gamut test, the `UniformSource` random-source
//! capability with the seedable `Xorshift64`, `SearchConfig`, and the
//! `RejectionSampler`.

pub mod color;
pub mod config;
pub mod error;
pub mod gamut;
pub mod prng;
pub mod sampler;

pub use color::{Lab, LinearRgb, Srgb, Xyz};
pub use config::{SampleRange, SearchConfig};
pub use error::SamplerError;
pub use gamut::is_in_gamut;
pub use prng::{UniformSource, Xorshift64};
pub use sampler::{find_in_gamut_colors, RejectionSampler, SearchOutcome};
