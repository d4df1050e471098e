//! Color types and conversion functions for gamut search.
//!
//! Provides four color types (`Lab`, `Xyz`, `LinearRgb`, `Srgb`) and pure
//! conversion functions between them. All conversions are pure functions
//! (no methods with side effects) and total over real inputs. Uses `f64`
//! throughout for precision.
//!
//! The forward pipeline used by the sampler is
//! `Lab -> Xyz -> LinearRgb -> Srgb`. The gamut test sits between the linear
//! and gamma-encoded stages; gamma encoding is only meaningful for linear
//! components in [0, 1].

use crate::error::SamplerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Domain constants for the CIELAB, CIEXYZ and sRGB transforms.
///
/// These are fixed values, not configuration. They are grouped here so an
/// alternate illuminant or RGB primaries can be substituted in one place.
pub mod reference {
    /// D65 reference white, X component (0–100 scale).
    pub const WHITE_X: f64 = 95.047;
    /// D65 reference white, Y component (0–100 scale).
    pub const WHITE_Y: f64 = 100.000;
    /// D65 reference white, Z component (0–100 scale).
    pub const WHITE_Z: f64 = 108.883;

    /// Breakpoint of the inverse CIELAB nonlinearity, in `f` space.
    pub const LAB_F_BREAK: f64 = 0.206893034;
    /// Slope of the linear segment of the CIELAB nonlinearity.
    pub const LAB_SLOPE: f64 = 7.787;
    /// Offset of the linear segment of the CIELAB nonlinearity.
    pub const LAB_OFFSET: f64 = 16.0 / 116.0;

    /// XYZ (normalized to 0–1) to linear sRGB, row-major.
    #[allow(clippy::excessive_precision)]
    pub const XYZ_TO_LINEAR: [[f64; 3]; 3] = [
        [3.2404542, -1.5371385, -0.4985314],
        [-0.9692660, 1.8760108, 0.0415560],
        [0.0556434, -0.2040259, 1.0572252],
    ];

    /// Linear sRGB to XYZ (normalized to 0–1), row-major. Inverse of
    /// [`XYZ_TO_LINEAR`].
    #[allow(clippy::excessive_precision)]
    pub const LINEAR_TO_XYZ: [[f64; 3]; 3] = [
        [0.4124564, 0.3575761, 0.1804375],
        [0.2126729, 0.7151522, 0.0721750],
        [0.0193339, 0.1191920, 0.9503041],
    ];

    /// Linear components at or below this value use the linear gamma segment.
    pub const GAMMA_LINEAR_BREAK: f64 = 0.0031308;
    /// Encoded components at or below this value use the linear segment on decode.
    pub const GAMMA_ENCODED_BREAK: f64 = 0.04045;
    /// Slope of the linear gamma segment.
    pub const GAMMA_SLOPE: f64 = 12.92;
    /// Exponent of the power gamma segment.
    pub const GAMMA_EXPONENT: f64 = 2.4;
    /// Scale of the power gamma segment.
    pub const GAMMA_SCALE: f64 = 1.055;
    /// Offset of the power gamma segment.
    pub const GAMMA_OFFSET: f64 = 0.055;
}

use reference::*;

/// CIELAB color. `l` is perceptual lightness, conceptually in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// CIEXYZ tristimulus values on a 0–100 scale (D65).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Linear-light RGB. Displayable colors have every component in [0, 1];
/// values outside that range mean the color is out of gamut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Gamma-encoded sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"` for human-readable formats.
/// The hex round-trip has 8-bit quantization (1/255 precision loss).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    /// Whether this color lies inside the sRGB gamut. See [`crate::gamut::is_in_gamut`].
    pub fn in_gamut(&self) -> bool {
        crate::gamut::is_in_gamut(*self)
    }
}

impl Srgb {
    /// Quantizes each component to 8 bits as `floor(c * 255)`, clamped to
    /// [0, 255].
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f64| (c * 255.0).floor().clamp(0.0, 255.0) as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `SamplerError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, SamplerError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(SamplerError::InvalidColor(format!(
                "expected 6 hex digits, got {:?}",
                hex
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|e| SamplerError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Srgb {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    ///
    /// Components are quantized to 8-bit (0–255) with rounding.
    pub fn to_hex(self) -> String {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Inverse of the CIELAB nonlinearity.
fn lab_f_inv(t: f64) -> f64 {
    if t > LAB_F_BREAK {
        t * t * t
    } else {
        (t - LAB_OFFSET) / LAB_SLOPE
    }
}

/// CIELAB nonlinearity. The breakpoint is the cube of [`LAB_F_BREAK`] so
/// that this is the exact inverse of [`lab_f_inv`].
fn lab_f(t: f64) -> f64 {
    if t > LAB_F_BREAK * LAB_F_BREAK * LAB_F_BREAK {
        t.cbrt()
    } else {
        LAB_SLOPE * t + LAB_OFFSET
    }
}

fn mul3(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Converts CIELAB to CIEXYZ (D65, 0–100 scale).
pub fn lab_to_xyz(c: Lab) -> Xyz {
    let fy = (c.l + 16.0) / 116.0;
    let fx = c.a / 500.0 + fy;
    let fz = fy - c.b / 200.0;
    Xyz {
        x: WHITE_X * lab_f_inv(fx),
        y: WHITE_Y * lab_f_inv(fy),
        z: WHITE_Z * lab_f_inv(fz),
    }
}

/// Converts CIEXYZ (D65, 0–100 scale) to CIELAB.
pub fn xyz_to_lab(c: Xyz) -> Lab {
    let fx = lab_f(c.x / WHITE_X);
    let fy = lab_f(c.y / WHITE_Y);
    let fz = lab_f(c.z / WHITE_Z);
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Converts CIEXYZ (0–100 scale) to linear sRGB. The result may lie outside
/// [0, 1].
pub fn xyz_to_linear(c: Xyz) -> LinearRgb {
    let [r, g, b] = mul3(&XYZ_TO_LINEAR, [c.x / 100.0, c.y / 100.0, c.z / 100.0]);
    LinearRgb { r, g, b }
}

/// Converts linear sRGB to CIEXYZ (0–100 scale).
pub fn linear_to_xyz(c: LinearRgb) -> Xyz {
    let [x, y, z] = mul3(&LINEAR_TO_XYZ, [c.r, c.g, c.b]);
    Xyz {
        x: x * 100.0,
        y: y * 100.0,
        z: z * 100.0,
    }
}

/// Convenience: CIELAB to linear sRGB via XYZ.
pub fn lab_to_linear(c: Lab) -> LinearRgb {
    xyz_to_linear(lab_to_xyz(c))
}

/// Applies sRGB gamma to convert a single linear component to sRGB.
///
/// Only meaningful for `c` in [0, 1]; gamut-test before encoding.
pub fn linear_component_to_srgb(c: f64) -> f64 {
    if c <= GAMMA_LINEAR_BREAK {
        GAMMA_SLOPE * c
    } else {
        GAMMA_SCALE * c.powf(1.0 / GAMMA_EXPONENT) - GAMMA_OFFSET
    }
}

/// Applies inverse sRGB gamma to convert a single sRGB component to linear.
pub fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= GAMMA_ENCODED_BREAK {
        c / GAMMA_SLOPE
    } else {
        ((c + GAMMA_OFFSET) / GAMMA_SCALE).powf(GAMMA_EXPONENT)
    }
}

/// Converts linear RGB to sRGB by applying sRGB gamma per channel.
pub fn linear_to_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: linear_component_to_srgb(c.r),
        g: linear_component_to_srgb(c.g),
        b: linear_component_to_srgb(c.b),
    }
}

/// Converts sRGB to linear RGB by applying inverse sRGB gamma.
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(c.r),
        g: srgb_component_to_linear(c.g),
        b: srgb_component_to_linear(c.b),
    }
}
