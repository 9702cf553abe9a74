//! Level conversions.
//!
//! Allocation-free and `no_std`, backed by `libm`.

use libm::logf;

/// Convert linear gain to decibels.
///
/// Inputs at or below 1e-10 are floored there (-200 dB).
///
/// # Example
/// ```rust
/// use basicosc_core::linear_to_db;
///
/// assert!((linear_to_db(0.1) - (-20.0)).abs() < 0.01);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    // 20 * log10(linear) = 20 * ln(linear) / ln(10)
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels() {
        for (linear, db) in [(1.0_f32, 0.0_f32), (0.1, -20.0), (0.5, -6.0206), (2.0, 6.0206)] {
            let got = linear_to_db(linear);
            assert!((got - db).abs() < 1e-3, "{linear} gave {got} dB, expected {db}");
        }
    }

    #[test]
    fn silence_is_floored() {
        assert!((linear_to_db(0.0) - (-200.0)).abs() < 0.01);
    }
}
