//! Implementations of `std::ops`.

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{IVec2, IVec3, IVec4, Vec2, Vec3, Vec4};

/// Component-wise arithmetic shared by float and integer vectors.
macro_rules! componentwise_ops {
    ($name:ident, $t:ty, $($field:ident),+) => {
        impl Add for $name {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl Add<$t> for $name {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: $t) -> Self {
                Self { $($field: self.$field + rhs),+ }
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl Sub<$t> for $name {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: $t) -> Self {
                Self { $($field: self.$field - rhs),+ }
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl Mul<$t> for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: $t) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl Mul<$name> for $t {
            type Output = $name;

            #[inline(always)]
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl AddAssign for $name {
            #[inline(always)]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $name {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign<$t> for $name {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: $t) {
                *self = *self * rhs;
            }
        }

        impl Index<usize> for $name {
            type Output = $t;

            #[inline]
            fn index(&self, index: usize) -> &$t {
                let fields = [$(&self.$field),+];
                match fields.get(index).copied() {
                    Some(component) => component,
                    None => panic!(
                        "component index {index} out of range for {}",
                        stringify!($name)
                    ),
                }
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut $t {
                let fields = [$(&mut self.$field),+];
                match fields.into_iter().nth(index) {
                    Some(component) => component,
                    None => panic!(
                        "component index {index} out of range for {}",
                        stringify!($name)
                    ),
                }
            }
        }
    };
}

/// Division, only meaningful for float vectors.
macro_rules! division_ops {
    ($name:ident, $($field:ident),+) => {
        impl Div for $name {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                Self { $($field: self.$field / rhs.$field),+ }
            }
        }

        impl Div<f32> for $name {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: f32) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl DivAssign<f32> for $name {
            #[inline(always)]
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }
    };
}

componentwise_ops!(Vec2, f32, x, y);
componentwise_ops!(Vec3, f32, x, y, z);
componentwise_ops!(Vec4, f32, x, y, z, w);
componentwise_ops!(IVec2, i32, x, y);
componentwise_ops!(IVec3, i32, x, y, z);
componentwise_ops!(IVec4, i32, x, y, z, w);

division_ops!(Vec2, x, y);
division_ops!(Vec3, x, y, z);
division_ops!(Vec4, x, y, z, w);
