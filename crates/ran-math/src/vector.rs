//! 2, 3 and 4 component vectors over `f32` and `i32`.
//!
//! All vector types are `#[repr(C)]` plain data with public components, so
//! they can be handed to graphics APIs as-is (see `to_array`).

mod ops;

use std::fmt;

use crate::matrix::{Mat3, Mat4};
use crate::scalar::{clampf, clampi, deg_to_rad, maxf, maxi, minf, mini, PI};

/// Items shared by every vector type.
macro_rules! vector_common {
    ($name:ident, $t:ty, $n:literal, $max:path, $min:path, $clamp:path, $($field:ident),+) => {
        impl $name {
            /// All components zero.
            pub const ZERO: Self = Self { $($field: 0 as $t),+ };
            /// All components one.
            pub const ONE: Self = Self { $($field: 1 as $t),+ };

            /// Create a vector from its components.
            #[inline(always)]
            pub const fn new($($field: $t),+) -> Self {
                Self { $($field),+ }
            }

            /// Create a vector with every component set to `v`.
            #[inline(always)]
            pub const fn splat(v: $t) -> Self {
                Self { $($field: v),+ }
            }

            /// Components in order, as a plain array.
            #[inline(always)]
            pub const fn to_array(self) -> [$t; $n] {
                [$(self.$field),+]
            }

            /// Component-wise maximum.
            #[inline(always)]
            pub fn max(self, other: Self) -> Self {
                Self { $($field: $max(self.$field, other.$field)),+ }
            }

            /// Component-wise minimum.
            #[inline(always)]
            pub fn min(self, other: Self) -> Self {
                Self { $($field: $min(self.$field, other.$field)),+ }
            }

            /// Clamp every component into `[minval, maxval]`.
            #[inline(always)]
            pub fn clamp(self, minval: $t, maxval: $t) -> Self {
                Self { $($field: $clamp(self.$field, minval, maxval)),+ }
            }
        }

        impl From<[$t; $n]> for $name {
            #[inline(always)]
            fn from(components: [$t; $n]) -> Self {
                let [$($field),+] = components;
                Self { $($field),+ }
            }
        }

        impl From<$name> for [$t; $n] {
            #[inline(always)]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let components = [$(self.$field),+];
                write!(f, "(")?;
                for (i, c) in components.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{c}")?;
                }
                write!(f, ")")
            }
        }
    };
}

/// Float-only geometry.
macro_rules! float_vector {
    ($name:ident, $($field:ident),+) => {
        impl $name {
            /// Dot product.
            #[inline(always)]
            pub fn dot(self, other: Self) -> f32 {
                0.0 $(+ self.$field * other.$field)+
            }

            /// Squared euclidean norm.
            #[inline(always)]
            pub fn norm2(self) -> f32 {
                self.dot(self)
            }

            /// Euclidean norm.
            #[inline(always)]
            pub fn norm(self) -> f32 {
                self.norm2().sqrt()
            }

            /// L1 (taxicab) norm.
            #[inline(always)]
            pub fn norm_one(self) -> f32 {
                0.0 $(+ self.$field.abs())+
            }

            /// Infinity (maximum) norm.
            #[inline(always)]
            pub fn norm_inf(self) -> f32 {
                let mut m = 0.0f32;
                $(m = maxf(m, self.$field.abs());)+
                m
            }

            /// Unit vector in the same direction.
            ///
            /// Returns [`Self::ZERO`] when the norm is within `f32::EPSILON`
            /// of zero.
            #[inline(always)]
            pub fn normalize(self) -> Self {
                let norm = self.norm();
                if norm.abs() <= f32::EPSILON {
                    Self::ZERO
                } else {
                    self * (1.0 / norm)
                }
            }

            /// Rescale to length `s`; [`Self::ZERO`] for a (near) zero vector.
            #[inline(always)]
            pub fn scale_as(self, s: f32) -> Self {
                let norm = self.norm();
                if norm.abs() <= f32::EPSILON {
                    Self::ZERO
                } else {
                    self * (s / norm)
                }
            }

            /// `self + other * s`.
            #[inline(always)]
            pub fn add_scaled(self, other: Self, s: f32) -> Self {
                self + other * s
            }

            /// `self - other * s`.
            #[inline(always)]
            pub fn sub_scaled(self, other: Self, s: f32) -> Self {
                self - other * s
            }

            /// Midpoint of `self` and `other`.
            #[inline(always)]
            pub fn center(self, other: Self) -> Self {
                (self + other) * 0.5
            }

            /// Squared distance to `other`.
            #[inline(always)]
            pub fn distance2(self, other: Self) -> f32 {
                (self - other).norm2()
            }

            /// Distance to `other`.
            #[inline(always)]
            pub fn distance(self, other: Self) -> f32 {
                self.distance2(other).sqrt()
            }
        }
    };
}

/// Integer-only helpers.
macro_rules! int_vector {
    ($name:ident, $($field:ident),+) => {
        impl $name {
            /// Squared distance to `other`.
            #[inline(always)]
            pub fn distance2(self, other: Self) -> i32 {
                0 $(+ (self.$field - other.$field) * (self.$field - other.$field))+
            }

            /// Distance to `other`.
            #[inline(always)]
            pub fn distance(self, other: Self) -> f32 {
                (self.distance2(other) as f32).sqrt()
            }
        }

        impl Eq for $name {}
    };
}

/// Two `f32` components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
#[allow(missing_docs)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Three `f32` components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
#[allow(missing_docs)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Four `f32` components. Also used for quaternions as `(x, y, z, w)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
#[allow(missing_docs)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Two `i32` components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Hash)]
#[repr(C)]
#[allow(missing_docs)]
pub struct IVec2 {
    pub x: i32,
    pub y: i32,
}

/// Three `i32` components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Hash)]
#[repr(C)]
#[allow(missing_docs)]
pub struct IVec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Four `i32` components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Hash)]
#[repr(C)]
#[allow(missing_docs)]
pub struct IVec4 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
}

vector_common!(Vec2, f32, 2, maxf, minf, clampf, x, y);
vector_common!(Vec3, f32, 3, maxf, minf, clampf, x, y, z);
vector_common!(Vec4, f32, 4, maxf, minf, clampf, x, y, z, w);
vector_common!(IVec2, i32, 2, maxi, mini, clampi, x, y);
vector_common!(IVec3, i32, 3, maxi, mini, clampi, x, y, z);
vector_common!(IVec4, i32, 4, maxi, mini, clampi, x, y, z, w);

float_vector!(Vec2, x, y);
float_vector!(Vec3, x, y, z);
float_vector!(Vec4, x, y, z, w);

int_vector!(IVec2, x, y);
int_vector!(IVec3, x, y, z);
int_vector!(IVec4, x, y, z, w);

impl Vec2 {
    /// Z component of the 3D cross product of `(self, 0)` and `(other, 0)`.
    #[inline(always)]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Rotate counter-clockwise by `angle` radians.
    #[inline(always)]
    pub fn rotate(self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Rotate counter-clockwise by `angle` degrees.
    #[inline(always)]
    pub fn rotate_deg(self, angle: f32) -> Self {
        self.rotate(deg_to_rad(angle))
    }
}

impl Vec3 {
    /// Cross product.
    #[inline(always)]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Normalized cross product.
    #[inline(always)]
    pub fn cross_normalized(self, other: Self) -> Self {
        self.cross(other).normalize()
    }

    /// Angle between `self` and `other` in radians, in `[0, π]`.
    ///
    /// The cosine is clamped so rounding past ±1 does not produce NaN.
    #[inline(always)]
    pub fn angle(self, other: Self) -> f32 {
        let cos = self.dot(other) * (1.0 / (self.norm() * other.norm()));
        if cos > 1.0 {
            0.0
        } else if cos < -1.0 {
            PI
        } else {
            cos.acos()
        }
    }

    /// Angle between `self` and `other` in degrees.
    #[inline(always)]
    pub fn angle_deg(self, other: Self) -> f32 {
        crate::scalar::rad_to_deg(self.angle(other))
    }

    /// Rotate by `angle` radians around `axis` (right-handed).
    ///
    /// Rodrigues' formula:
    /// `v cos t + (k × v) sin t + k (k · v)(1 - cos t)` with `k` the
    /// normalized axis.
    pub fn rotate(self, angle: f32, axis: Self) -> Self {
        let (s, c) = angle.sin_cos();
        let k = axis.normalize();
        self * c + k.cross(self) * s + k * (k.dot(self) * (1.0 - c))
    }

    /// Rotate by `angle` degrees around `axis`.
    #[inline(always)]
    pub fn rotate_deg(self, angle: f32, axis: Self) -> Self {
        self.rotate(deg_to_rad(angle), axis)
    }

    /// Projection of `self` onto `onto`.
    #[inline(always)]
    pub fn project_onto(self, onto: Self) -> Self {
        onto * (self.dot(onto) / onto.norm2())
    }

    /// A vector orthogonal to `self`.
    #[inline(always)]
    pub fn ortho(self) -> Self {
        let f = (self.x.abs() + 0.5).fract();
        Self::new(-self.y, self.x - f * self.z, f * self.y)
    }

    /// Apply the rotation part of `m`, normalizing its columns first.
    pub fn rotate_by_mat3(self, m: Mat3) -> Self {
        m.c1.normalize() * self.x + m.c2.normalize() * self.y + m.c3.normalize() * self.z
    }

    /// Apply the rotation part of `m`, normalizing its first three
    /// columns first.
    pub fn rotate_by_mat4(self, m: Mat4) -> Self {
        let r = m.c1.normalize() * self.x + m.c2.normalize() * self.y + m.c3.normalize() * self.z;
        r.truncate()
    }

    /// Append `w` as the fourth component.
    #[inline(always)]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl Vec4 {
    /// Drop the `w` component.
    #[inline(always)]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}
