//! PNG output of a color strip.
//!
//! Feature-gated behind `png`. The buffer layout lives in [`crate::pixel`].

use gamut_search_core::{SamplerError, Srgb};
use std::path::Path;

use crate::pixel::colors_to_rgba;

/// Writes `colors` as a PNG strip of `cell x cell` squares.
///
/// Returns `SamplerError::InvalidDimensions` for an empty list, a zero cell
/// size, or dimensions that overflow `u32`, and `SamplerError::Io` on write
/// failure.
pub fn write_png(colors: &[Srgb], cell: usize, path: &Path) -> Result<(), SamplerError> {
    if colors.is_empty() || cell == 0 {
        return Err(SamplerError::InvalidDimensions);
    }
    let width = colors
        .len()
        .checked_mul(cell)
        .ok_or(SamplerError::InvalidDimensions)?;
    let w = u32::try_from(width).map_err(|_| SamplerError::InvalidDimensions)?;
    let h = u32::try_from(cell).map_err(|_| SamplerError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, colors_to_rgba(colors, cell))
        .ok_or_else(|| SamplerError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SamplerError::Io(e.to_string()))?;
    log::debug!("wrote {}x{} swatch to {}", w, h, path.display());
    Ok(())
}
