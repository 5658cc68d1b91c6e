//! Rainbow lookup tables
//!
//! Three 256-entry tables map a gray level to the red, green and blue
//! components of a blue -> cyan -> green -> yellow -> red ramp. Each table is
//! a piecewise-linear curve with slope `256 / 64` on its ramps:
//!
//! ```text
//! gray     0        64       128       192       255
//! red      0 ........0 ......0 /////// 255 ..... 255
//! green    0 /////// 255 ............. 255 \\\\\\ 0
//! blue   255 ...... 255 \\\\\\ 0 ................ 0
//! ```
//!
//! The breakpoints are not symmetric: red starts rising after 128, blue
//! starts falling after 64, and green starts falling at 192 from an origin
//! of 191. Values are computed in floating point and stored with
//! [`clamp_to_u8`].

use heatmap_core::color::clamp_to_u8;

/// A 256-entry table indexed by gray level.
pub type LookupTable = [u8; 256];

/// Slope of every ramp segment.
const RAMP_SLOPE: f32 = 256.0 / 64.0;

/// Red component for gray level `i`, before rounding.
pub fn red_curve(i: u8) -> f32 {
    let x = i as f32;
    match i {
        0..=128 => 0.0,
        129..=191 => (x - 128.0) * RAMP_SLOPE,
        _ => 255.0,
    }
}

/// Green component for gray level `i`, before rounding.
pub fn green_curve(i: u8) -> f32 {
    let x = i as f32;
    match i {
        0..=63 => x * RAMP_SLOPE,
        64..=191 => 255.0,
        _ => 255.0 - (x - 191.0) * RAMP_SLOPE,
    }
}

/// Blue component for gray level `i`, before rounding.
pub fn blue_curve(i: u8) -> f32 {
    let x = i as f32;
    match i {
        0..=64 => 255.0,
        65..=127 => 255.0 - (x - 63.0) * RAMP_SLOPE,
        _ => 0.0,
    }
}

/// Build a table by sampling `curve` at every gray level.
pub fn build_table(curve: impl Fn(u8) -> f32) -> LookupTable {
    let mut table = [0u8; 256];
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = clamp_to_u8(curve(i as u8));
    }
    table
}

/// The red, green and blue rainbow tables.
///
/// Built fresh by [`RainbowLut::new`]; nothing is cached between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RainbowLut {
    red: LookupTable,
    green: LookupTable,
    blue: LookupTable,
}

impl RainbowLut {
    /// Build all three tables.
    pub fn new() -> Self {
        tracing::trace!("building rainbow lookup tables");
        Self {
            red: build_table(red_curve),
            green: build_table(green_curve),
            blue: build_table(blue_curve),
        }
    }

    /// The red table.
    pub fn red(&self) -> &LookupTable {
        &self.red
    }

    /// The green table.
    pub fn green(&self) -> &LookupTable {
        &self.green
    }

    /// The blue table.
    pub fn blue(&self) -> &LookupTable {
        &self.blue
    }

    /// Map a gray pixel, looking each channel up in its own table.
    #[inline]
    pub fn map(&self, r: u8, g: u8, b: u8) -> [u8; 3] {
        [
            self.red[r as usize],
            self.green[g as usize],
            self.blue[b as usize],
        ]
    }

    /// The color of each gray level, as `[r, g, b]` triples.
    pub fn colors(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        (0..=255u8).map(move |v| self.map(v, v, v))
    }
}

impl Default for RainbowLut {
    fn default() -> Self {
        Self::new()
    }
}
