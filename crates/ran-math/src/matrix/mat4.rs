use super::Mat3;
use crate::vector::{Vec3, Vec4};

/// A 4x4 column-major matrix, the usual affine or projective transform.
///
/// The upper-left 3x3 block is the linear part; [`Mat4::upper_left`] and
/// [`Mat4::with_upper_left`] move it to and from a [`Mat3`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[allow(missing_docs)]
pub struct Mat4 {
    pub c1: Vec4,
    pub c2: Vec4,
    pub c3: Vec4,
    pub c4: Vec4,
}

matrix_common!(Mat4, Vec4, 4, c1, c2, c3, c4);

impl Mat4 {
    /// Ones on the diagonal.
    pub const IDENTITY: Self = Self {
        c1: Vec4::new(1.0, 0.0, 0.0, 0.0),
        c2: Vec4::new(0.0, 1.0, 0.0, 0.0),
        c3: Vec4::new(0.0, 0.0, 1.0, 0.0),
        c4: Vec4::new(0.0, 0.0, 0.0, 1.0),
    };

    /// Rows become columns.
    #[inline(always)]
    pub fn transpose(self) -> Self {
        let m = self;
        Self {
            c1: Vec4::new(m.c1.x, m.c2.x, m.c3.x, m.c4.x),
            c2: Vec4::new(m.c1.y, m.c2.y, m.c3.y, m.c4.y),
            c3: Vec4::new(m.c1.z, m.c2.z, m.c3.z, m.c4.z),
            c4: Vec4::new(m.c1.w, m.c2.w, m.c3.w, m.c4.w),
        }
    }

    /// Sum of the diagonal.
    #[inline(always)]
    pub fn trace(self) -> f32 {
        (self.c1.x + self.c2.y) + (self.c3.z + self.c4.w)
    }

    /// Trace of the upper-left 3x3 block.
    #[inline(always)]
    pub fn trace3(self) -> f32 {
        self.c1.x + (self.c2.y + self.c3.z)
    }

    /// Determinant via 2x2 minors of the last two columns.
    pub fn determinant(self) -> f32 {
        let (a, b, c, d) = (self.c1, self.c2, self.c3, self.c4);

        let t0 = c.z * d.w - d.z * c.w;
        let t1 = c.y * d.w - d.y * c.w;
        let t2 = c.y * d.z - d.y * c.z;
        let t3 = c.x * d.w - d.x * c.w;
        let t4 = c.x * d.z - d.x * c.z;
        let t5 = c.x * d.y - d.x * c.y;

        a.x * (b.y * t0 - b.z * t1 + b.w * t2) - a.y * (b.x * t0 - b.z * t3 + b.w * t4)
            + a.z * (b.x * t1 - b.y * t3 + b.w * t5)
            - a.w * (b.x * t2 - b.y * t4 + b.z * t5)
    }

    /// Adjugate divided by the determinant.
    ///
    /// A singular matrix yields non-finite entries; use
    /// [`Mat4::try_inverse`] to detect that case.
    pub fn inverse(self) -> Self {
        let (a, b, c, d) = (self.c1, self.c2, self.c3, self.c4);
        let mut r = Self::ZERO;

        // Minors from columns 3 and 4 give the first two rows.
        let t = minors(c, d);
        r.c1.x = (b.y * t[0] - b.z * t[1]) + b.w * t[2];
        r.c2.x = -((b.x * t[0] - b.z * t[3]) + b.w * t[4]);
        r.c3.x = (b.x * t[1] - b.y * t[3]) + b.w * t[5];
        r.c4.x = -((b.x * t[2] - b.y * t[4]) + b.z * t[5]);

        r.c1.y = -((a.y * t[0] - a.z * t[1]) + a.w * t[2]);
        r.c2.y = (a.x * t[0] - a.z * t[3]) + a.w * t[4];
        r.c3.y = -((a.x * t[1] - a.y * t[3]) + a.w * t[5]);
        r.c4.y = (a.x * t[2] - a.y * t[4]) + a.z * t[5];

        let t = minors(b, d);
        r.c1.z = (a.y * t[0] - a.z * t[1]) + a.w * t[2];
        r.c2.z = -((a.x * t[0] - a.z * t[3]) + a.w * t[4]);
        r.c3.z = (a.x * t[1] - a.y * t[3]) + a.w * t[5];
        r.c4.z = -((a.x * t[2] - a.y * t[4]) + a.z * t[5]);

        let t = minors(b, c);
        r.c1.w = -((a.y * t[0] - a.z * t[1]) + a.w * t[2]);
        r.c2.w = (a.x * t[0] - a.z * t[3]) + a.w * t[4];
        r.c3.w = -((a.x * t[1] - a.y * t[3]) + a.w * t[5]);
        r.c4.w = (a.x * t[2] - a.y * t[4]) + a.z * t[5];

        let det = (a.x * r.c1.x + a.y * r.c2.x) + (a.z * r.c3.x + a.w * r.c4.x);
        r * (1.0 / det)
    }

    /// Quaternion `(x, y, z, w)` of the rotation in the upper-left block.
    #[inline]
    pub fn to_quat(self) -> Vec4 {
        self.upper_left().to_quat()
    }

    /// Transform `v` extended with `w` as its fourth component, dropping
    /// the fourth component of the result. `w = 1.0` transforms a point,
    /// `w = 0.0` a direction.
    #[inline(always)]
    pub fn mul_vec3(self, v: Vec3, w: f32) -> Vec3 {
        (self * v.extend(w)).truncate()
    }

    /// The upper-left 3x3 block.
    #[inline(always)]
    pub fn upper_left(self) -> Mat3 {
        Mat3::from_cols(self.c1.truncate(), self.c2.truncate(), self.c3.truncate())
    }

    /// The upper-left 3x3 block, transposed.
    #[inline(always)]
    pub fn upper_left_transposed(self) -> Mat3 {
        self.upper_left().transpose()
    }

    /// `self` with its upper-left 3x3 block replaced by `m`.
    #[inline(always)]
    pub fn with_upper_left(self, m: Mat3) -> Self {
        Self {
            c1: m.c1.extend(self.c1.w),
            c2: m.c2.extend(self.c2.w),
            c3: m.c3.extend(self.c3.w),
            c4: self.c4,
        }
    }

    /// Left-to-right product of `ms`; identity when `ms` is empty.
    pub fn product(ms: &[Mat4]) -> Self {
        ms.iter()
            .copied()
            .reduce(|acc, m| acc * m)
            .unwrap_or(Self::IDENTITY)
    }
}

/// The six 2x2 minors of two columns, in the order the inverse consumes
/// them.
#[inline(always)]
fn minors(p: Vec4, q: Vec4) -> [f32; 6] {
    [
        p.z * q.w - q.z * p.w,
        p.y * q.w - q.y * p.w,
        p.y * q.z - q.y * p.z,
        p.x * q.w - q.x * p.w,
        p.x * q.z - q.x * p.z,
        p.x * q.y - q.x * p.y,
    ]
}
