//! Proptest strategies for the numeric types.
//!
//! Components are drawn from a bounded range so sums and products stay
//! well inside `f32` precision.

use proptest::prelude::*;
use ran_math::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

/// Bound on generated components.
pub const COMPONENT_RANGE: f32 = 100.0;

pub fn arb_component() -> impl Strategy<Value = f32> {
    -COMPONENT_RANGE..COMPONENT_RANGE
}

pub fn arb_vec2() -> impl Strategy<Value = Vec2> {
    (arb_component(), arb_component()).prop_map(|(x, y)| Vec2::new(x, y))
}

pub fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (arb_component(), arb_component(), arb_component()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

pub fn arb_vec4() -> impl Strategy<Value = Vec4> {
    (
        arb_component(),
        arb_component(),
        arb_component(),
        arb_component(),
    )
        .prop_map(|(x, y, z, w)| Vec4::new(x, y, z, w))
}

/// A vector with norm at least 1, safe to normalize.
pub fn arb_nonzero_vec3() -> impl Strategy<Value = Vec3> {
    arb_vec3().prop_filter("norm too small", |v| v.norm() >= 1.0)
}

pub fn arb_mat2() -> impl Strategy<Value = Mat2> {
    (arb_vec2(), arb_vec2()).prop_map(|(a, b)| Mat2::from_cols(a, b))
}

pub fn arb_mat3() -> impl Strategy<Value = Mat3> {
    (arb_vec3(), arb_vec3(), arb_vec3()).prop_map(|(a, b, c)| Mat3::from_cols(a, b, c))
}

pub fn arb_mat4() -> impl Strategy<Value = Mat4> {
    (arb_vec4(), arb_vec4(), arb_vec4(), arb_vec4())
        .prop_map(|(a, b, c, d)| Mat4::from_cols(a, b, c, d))
}

/// Off-diagonal entries in `[-1, 1)` plus a diagonal of magnitude at
/// least `n + 1`: strictly diagonally dominant, hence invertible with a
/// small condition number.
pub fn arb_well_conditioned_mat3() -> impl Strategy<Value = Mat3> {
    (
        prop::array::uniform9(-1.0f32..1.0),
        prop::array::uniform3(4.0f32..8.0),
        prop::array::uniform3(any::<bool>()),
    )
        .prop_map(|(e, d, neg)| {
            let diag = |i: usize| if neg[i] { -d[i] } else { d[i] };
            Mat3::from_cols(
                Vec3::new(diag(0), e[1], e[2]),
                Vec3::new(e[3], diag(1), e[5]),
                Vec3::new(e[6], e[7], diag(2)),
            )
        })
}

/// 4x4 counterpart of [`arb_well_conditioned_mat3`].
pub fn arb_well_conditioned_mat4() -> impl Strategy<Value = Mat4> {
    (
        prop::array::uniform16(-1.0f32..1.0),
        prop::array::uniform4(5.0f32..10.0),
        prop::array::uniform4(any::<bool>()),
    )
        .prop_map(|(e, d, neg)| {
            let diag = |i: usize| if neg[i] { -d[i] } else { d[i] };
            Mat4::from_cols(
                Vec4::new(diag(0), e[1], e[2], e[3]),
                Vec4::new(e[4], diag(1), e[6], e[7]),
                Vec4::new(e[8], e[9], diag(2), e[11]),
                Vec4::new(e[12], e[13], e[14], diag(3)),
            )
        })
}

/// A proper rotation: the basis vectors rotated by a random angle about a
/// random axis.
pub fn arb_rotation_mat3() -> impl Strategy<Value = Mat3> {
    (arb_nonzero_vec3(), -3.1f32..3.1).prop_map(|(axis, angle)| {
        Mat3::from_cols(
            Vec3::new(1.0, 0.0, 0.0).rotate(angle, axis),
            Vec3::new(0.0, 1.0, 0.0).rotate(angle, axis),
            Vec3::new(0.0, 0.0, 1.0).rotate(angle, axis),
        )
    })
}
