//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions between floating-point and integer
//! domains. Clocks are kept as `f64` seconds while the story timeline and the
//! on-screen countdowns work in whole seconds.

/// Convert a finite `f64` into `f32`, asserting that it fits the target type.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Callers pass elapsed times and positions well inside f32 range."
)]
#[must_use]
pub fn expect_f32(value: f64) -> f32 {
    debug_assert!(value.is_finite(), "expected finite f64 for f32 conversion");
    debug_assert!(
        value <= f64::from(f32::MAX),
        "f64 value {value} exceeds f32::MAX"
    );
    debug_assert!(
        value >= f64::from(f32::MIN),
        "f64 value {value} is below f32::MIN"
    );
    value as f32
}

/// Floor a non-negative duration to whole seconds.
///
/// Negative and non-finite inputs yield `0`; values beyond `u32::MAX` saturate.
///
/// # Examples
/// ```
/// use turkey_field::numeric::whole_seconds;
/// assert_eq!(whole_seconds(8.9), 8);
/// assert_eq!(whole_seconds(-1.0), 0);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The floored value is clamped to the u32 domain before casting."
)]
#[must_use]
pub fn whole_seconds(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.floor().min(f64::from(u32::MAX)) as u32
}

/// Floor a value and clamp it into the `i32` domain.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn floor_to_i32(value: f64) -> i32 {
    if value.is_nan() {
        return 0;
    }
    let floored = value.floor();
    let clamped = floored.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    clamped as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.999, 0)]
    #[case(9.1, 9)]
    #[case(f64::NAN, 0)]
    #[case(f64::INFINITY, 0)]
    #[case(1e12, u32::MAX)]
    fn whole_seconds_floors_and_saturates(#[case] input: f64, #[case] expected: u32) {
        assert_eq!(whole_seconds(input), expected);
    }

    #[rstest]
    #[case(-0.5, -1)]
    #[case(3.7, 3)]
    #[case(f64::NAN, 0)]
    #[case(1e20, i32::MAX)]
    fn floor_to_i32_clamps(#[case] input: f64, #[case] expected: i32) {
        assert_eq!(floor_to_i32(input), expected);
    }
}
