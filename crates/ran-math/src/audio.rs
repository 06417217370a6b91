//! Decibel / linear amplitude conversion.

/// Linear amplitude to decibels: `20 * log10(amplitude)`.
///
/// An amplitude of 0 maps to negative infinity.
#[inline(always)]
pub fn amp_to_db(amplitude: f32) -> f32 {
    20.0 * amplitude.log10()
}

/// Decibels to linear amplitude: `10^(decibel / 20)`.
#[inline(always)]
pub fn db_to_amp(decibel: f32) -> f32 {
    10.0f32.powf(decibel / 20.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unity_is_zero_db() {
        assert_eq!(amp_to_db(1.0), 0.0);
        assert_eq!(db_to_amp(0.0), 1.0);
    }

    #[test]
    fn ten_x_is_twenty_db() {
        assert!((amp_to_db(10.0) - 20.0).abs() < 1e-5);
        assert!((db_to_amp(-20.0) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn silence_is_negative_infinity() {
        assert_eq!(amp_to_db(0.0), f32::NEG_INFINITY);
    }

    proptest! {
        #[test]
        fn conversions_invert(db in -120.0f32..40.0) {
            let back = amp_to_db(db_to_amp(db));
            prop_assert!((back - db).abs() < 1e-3, "{db} -> {back}");
        }
    }
}
