//! Two-decimal rounding.

/// Rounds to 2 decimal places, halves towards positive infinity.
///
/// `-0.125` becomes `-0.12`, not `-0.13`.
///
/// # Examples
///
/// ```
/// use series_core::math::round_to_cents;
///
/// assert_eq!(round_to_cents(4.5 * 0.1), 0.45);
/// assert_eq!(round_to_cents(1.005_1), 1.01);
/// assert_eq!(round_to_cents(-2.344), -2.34);
/// assert_eq!(round_to_cents(-0.125), -0.12);
/// ```
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
