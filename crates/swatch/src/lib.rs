#![deny(unsafe_code)]
//! Swatch rendering for colors found by gamut-search.
//!
//! [`pixel`] turns a color list into a raw RGBA8 strip and is always
//! available. [`png`] writes that strip to disk and sits behind the `png`
//! feature (default on) so the `image` dependency stays optional.

pub mod pixel;

#[cfg(feature = "png")]
pub mod png;

pub use pixel::colors_to_rgba;
