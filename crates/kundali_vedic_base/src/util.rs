//! Shared utility functions for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-17 % 360 + 360 rounds to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Zero-based 30° segment index (0..=11) of a longitude.
pub fn sign_index_of(deg: f64) -> u8 {
    ((normalize_360(deg) / 30.0).floor() as u8).min(11)
}
