use crate::vector::Vec2;

/// A 2x2 column-major matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[allow(missing_docs)]
pub struct Mat2 {
    pub c1: Vec2,
    pub c2: Vec2,
}

matrix_common!(Mat2, Vec2, 2, c1, c2);

impl Mat2 {
    /// Ones on the diagonal.
    pub const IDENTITY: Self = Self {
        c1: Vec2::new(1.0, 0.0),
        c2: Vec2::new(0.0, 1.0),
    };

    /// Rows become columns.
    #[inline(always)]
    pub fn transpose(self) -> Self {
        Self {
            c1: Vec2::new(self.c1.x, self.c2.x),
            c2: Vec2::new(self.c1.y, self.c2.y),
        }
    }

    /// Sum of the diagonal.
    #[inline(always)]
    pub fn trace(self) -> f32 {
        self.c1.x + self.c2.y
    }

    /// Determinant.
    #[inline(always)]
    pub fn determinant(self) -> f32 {
        self.c1.x * self.c2.y - self.c2.x * self.c1.y
    }

    /// Closed-form inverse. A singular matrix yields non-finite entries;
    /// use [`Mat2::try_inverse`] to detect that case.
    #[inline]
    pub fn inverse(self) -> Self {
        let inv_det = 1.0 / (self.c1.x * self.c2.y - self.c1.y * self.c2.x);
        Self {
            c1: Vec2::new(self.c2.y * inv_det, -(self.c1.y * inv_det)),
            c2: Vec2::new(-(self.c2.x * inv_det), self.c1.x * inv_det),
        }
    }
}
