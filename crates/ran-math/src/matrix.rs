//! Column-major 2x2, 3x3 and 4x4 `f32` matrices.
//!
//! Columns are public fields `c1..cN`; `m.c2.x` is row 0 of column 1.
//! `matrix * vector` treats the vector as a column.

/// Items shared by every matrix type.
macro_rules! matrix_common {
    ($name:ident, $col:ident, $n:literal, $($c:ident),+) => {
        impl $name {
            /// All entries zero.
            pub const ZERO: Self = Self { $($c: $col::ZERO),+ };

            /// Create a matrix from its columns.
            #[inline(always)]
            pub const fn from_cols($($c: $col),+) -> Self {
                Self { $($c),+ }
            }

            /// Columns in order.
            #[inline(always)]
            pub const fn to_cols(self) -> [$col; $n] {
                [$(self.$c),+]
            }

            /// Entries flattened column by column, ready for upload to a
            /// column-major graphics API.
            pub fn to_cols_array(self) -> [f32; $n * $n] {
                let mut out = [0.0; $n * $n];
                for (i, col) in self.to_cols().iter().enumerate() {
                    out[i * $n..(i + 1) * $n].copy_from_slice(&col.to_array());
                }
                out
            }

            /// A growable array holding `count` identity matrices.
            pub fn identity_array(count: usize) -> ran_array::GrowableArray<Self> {
                let mut arr = ran_array::GrowableArray::new();
                arr.reserve(count);
                for _ in 0..count {
                    arr.push_back(Self::IDENTITY);
                }
                arr
            }

            /// Exchange two columns (zero-based).
            ///
            /// # Panics
            ///
            /// Panics if either index is not below the dimension.
            pub fn swap_cols(self, a: usize, b: usize) -> Self {
                let mut cols = self.to_cols();
                cols.swap(a, b);
                let [$($c),+] = cols;
                Self { $($c),+ }
            }

            /// Exchange two rows (zero-based).
            ///
            /// # Panics
            ///
            /// Panics if either index is not below the dimension.
            pub fn swap_rows(self, a: usize, b: usize) -> Self {
                let mut m = self;
                $(
                    let t = m.$c[a];
                    m.$c[a] = m.$c[b];
                    m.$c[b] = t;
                )+
                m
            }

            /// `rᵀ · self · c`, a row vector times the matrix times a
            /// column vector.
            #[inline(always)]
            pub fn rmc(self, r: $col, c: $col) -> f32 {
                r.dot(self * c)
            }

            /// Inverse, or `None` if the determinant is exactly zero.
            pub fn try_inverse(self) -> Option<Self> {
                if self.determinant() == 0.0 {
                    None
                } else {
                    Some(self.inverse())
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl std::ops::Mul<$col> for $name {
            type Output = $col;

            #[inline(always)]
            fn mul(self, v: $col) -> $col {
                let cols = self.to_cols();
                let mut out = $col::ZERO;
                for (i, col) in cols.iter().enumerate() {
                    out += *col * v[i];
                }
                out
            }
        }

        impl std::ops::Mul for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Self { $($c: self * rhs.$c),+ }
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, s: f32) -> Self {
                Self { $($c: self.$c * s),+ }
            }
        }

        impl std::ops::MulAssign for $name {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                for (i, col) in self.to_cols().iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{col}")?;
                }
                Ok(())
            }
        }
    };
}

mod mat2;
mod mat3;
mod mat4;

pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;
