//! Pure-computation RGBA8 buffers from a list of [`Srgb`] colors.

use gamut_search_core::Srgb;

/// Lays `colors` out as a horizontal strip of `cell x cell` squares.
///
/// The buffer is row-major RGBA8 with width `colors.len() * cell` and height
/// `cell`; channel bytes follow [`Srgb::to_rgb8`] and alpha is always 255.
pub fn colors_to_rgba(colors: &[Srgb], cell: usize) -> Vec<u8> {
    let row: Vec<u8> = colors
        .iter()
        .flat_map(|c| {
            let [r, g, b] = c.to_rgb8();
            std::iter::repeat([r, g, b, 255u8]).take(cell)
        })
        .flatten()
        .collect();
    row.repeat(cell)
}
