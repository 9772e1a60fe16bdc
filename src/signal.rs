// =============================================================================
// Signal Mappers — percentile rank to color / quantized level
// =============================================================================
//
// Two output mappings, one per pipeline variant:
//
// Zone coloring:  ranks inside a neutral band centred on 0.5 map to a fixed
//                 mid-gray; everything else maps to a red/green gradient
//                 (red = bid-dominated flow, green = ask-dominated flow).
//
// Quantized level: the rank is recentred on 0.5 and scaled to a signed
//                  integer in [-4, 4], rounding half-integers away from zero.
//
// Both are pure functions of the current rank — no hysteresis, no smoothing.
// =============================================================================

use serde::{Deserialize, Serialize};

/// An RGB output color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// Mid-gray emitted for neutral ranks, data gaps, and insufficient
    /// history.
    pub const NEUTRAL: Color = Color {
        red: 128,
        green: 128,
        blue: 128,
    };
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Map a percentile rank to a zone color.
///
/// # Arguments
/// - `rank` — percentile rank in [0, 1].
/// - `neutral_zone` — width of the no-signal band centred at 0.5, in
///   [0.0, 0.5].  Ranks inside `[0.5 - z/2, 0.5 + z/2]` (inclusive) map to
///   [`Color::NEUTRAL`].
///
/// Outside the band the color is a two-channel gradient:
/// red = round((1 - rank) * 255), green = round(rank * 255), blue = 0.
pub fn color_for_rank(rank: f64, neutral_zone: f64) -> Color {
    let lower = 0.5 - neutral_zone / 2.0;
    let upper = 0.5 + neutral_zone / 2.0;

    if rank >= lower && rank <= upper {
        return Color::NEUTRAL;
    }

    Color {
        red: channel((1.0 - rank) * 255.0),
        green: channel(rank * 255.0),
        blue: 0,
    }
}

/// Map a recency-weighted percentile rank to a signed level in [-4, 4].
///
/// `level = round((rank - 0.5) * 8)` with half-integers rounding away from
/// zero (`f64::round` semantics).  For rank in [0, 1] the result is always
/// within [-4, 4]; rank 0.5 maps to exactly 0.
pub fn level_for_rank(rank: f64) -> i32 {
    ((rank - 0.5) * 8.0).round() as i32
}

/// Round and clamp a gradient channel value to [0, 255].
fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
