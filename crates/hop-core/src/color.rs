//! RGBA material colors.

use std::fmt;

/// Linear RGBA color with components in `[0, 1]`, as used by MJCF
/// `rgba="r g b a"` attributes.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba(pub [f32; 4]);

impl Rgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba([r, g, b, a])
    }

    /// Parse an MJCF `rgba` attribute (four whitespace-separated floats).
    pub fn parse(s: &str) -> Option<Rgba> {
        let mut out = [0.0f32; 4];
        let mut parts = s.split_whitespace();
        for slot in &mut out {
            *slot = parts.next()?.parse().ok()?;
        }
        if parts.next().is_some() {
            return None;
        }
        Some(Rgba(out))
    }
}

impl fmt::Display for Rgba {
    /// Formats as an MJCF attribute value, e.g. `0.9 0.1 0.1 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "{r} {g} {b} {a}")
    }
}
