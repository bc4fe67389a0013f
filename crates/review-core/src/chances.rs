//! Centipawn evaluations mapped onto a bounded winning-chance scale.

/// Steepness of the centipawn sigmoid.
const CP_SCALE: f64 = 0.004;

/// Maps a signed centipawn evaluation to a winning chance in (-1, 1).
///
/// The curve is a logistic sigmoid rescaled to be odd around zero: 0 maps
/// to 0.0, +100 to roughly +0.20, and large advantages saturate toward
/// ±1.0. Comparing chances instead of raw centipawns keeps swings
/// comparable between level and lopsided positions.
#[inline]
pub fn winning_chance(cp: i32) -> f64 {
    2.0 / (1.0 + (-CP_SCALE * f64::from(cp)).exp()) - 1.0
}
