use crate::error::{AmbientError, AmbientResult};
use glam::Vec3;
use std::fmt;
use std::str::FromStr;

/// 8-bit sRGB color as written to the ambient style variable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional, case-insensitive).
    pub fn from_hex(hex: &str) -> AmbientResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AmbientError::InvalidColor(hex.to_string()));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| AmbientError::InvalidColor(hex.to_string()))?;
        Ok(Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[inline]
    fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32)
    }

    #[inline]
    fn from_vec3_rounded(v: Vec3) -> Self {
        let channel = |c: f32| c.round().clamp(0.0, 255.0) as u8;
        Self::new(channel(v.x), channel(v.y), channel(v.z))
    }
}

impl FromStr for Rgb {
    type Err = AmbientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Channel-wise linear blend from `a` toward `b`.
///
/// Weights at or below 0 return `a` exactly, at or above 1 return `b`
/// exactly; in between each channel is interpolated and rounded to the
/// nearest integer. A NaN weight is treated as 0.
pub fn mix(a: Rgb, b: Rgb, weight: f32) -> Rgb {
    if weight.is_nan() || weight <= 0.0 {
        return a;
    }
    if weight >= 1.0 {
        return b;
    }
    Rgb::from_vec3_rounded(a.to_vec3().lerp(b.to_vec3(), weight))
}
