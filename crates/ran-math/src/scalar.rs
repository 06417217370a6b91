//! Scalar helpers shared by the vector and matrix types.

/// π as `f32`.
pub const PI: f32 = std::f32::consts::PI;

/// Degrees to radians.
#[inline(always)]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * (PI / 180.0)
}

/// Radians to degrees.
#[inline(always)]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * (180.0 / PI)
}

/// `num * num`.
#[inline(always)]
pub fn pow2f(num: f32) -> f32 {
    num * num
}

/// `num * num`.
#[inline(always)]
pub fn pow2i(num: i32) -> i32 {
    num * num
}

/// The larger of `a` and `b` (`b` when they compare equal or `a` is NaN).
#[inline(always)]
pub fn maxf(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// The smaller of `a` and `b` (`b` when they compare equal or `a` is NaN).
#[inline(always)]
pub fn minf(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}

/// The larger of `a` and `b`.
#[inline(always)]
pub fn maxi(a: i32, b: i32) -> i32 {
    a.max(b)
}

/// The smaller of `a` and `b`.
#[inline(always)]
pub fn mini(a: i32, b: i32) -> i32 {
    a.min(b)
}

/// Clamp `val` into `[minval, maxval]`.
///
/// Unlike [`f32::clamp`] this never panics; with `minval > maxval` the
/// result is `maxval`.
#[inline(always)]
pub fn clampf(val: f32, minval: f32, maxval: f32) -> f32 {
    minf(maxf(val, minval), maxval)
}

/// Clamp `val` into `[minval, maxval]`.
///
/// With `minval > maxval` the result is `maxval`.
#[inline(always)]
pub fn clampi(val: i32, minval: i32, maxval: i32) -> i32 {
    mini(maxi(val, minval), maxval)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_conversions_round_trip() {
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-6);
        assert!((rad_to_deg(PI / 2.0) - 90.0).abs() < 1e-4);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clampf(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clampf(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clampf(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clampi(7, -2, 3), 3);
        assert_eq!(clampi(-7, -2, 3), -2);
    }

    #[test]
    fn inverted_bounds_do_not_panic() {
        assert_eq!(clampf(0.5, 1.0, 0.0), 0.0);
        assert_eq!(clampi(2, 5, 1), 1);
    }

    #[test]
    fn min_max_and_squares() {
        assert_eq!(maxf(1.0, 2.0), 2.0);
        assert_eq!(minf(1.0, 2.0), 1.0);
        assert_eq!(maxi(-1, -2), -1);
        assert_eq!(mini(-1, -2), -2);
        assert_eq!(pow2f(3.0), 9.0);
        assert_eq!(pow2i(-4), 16);
    }
}
