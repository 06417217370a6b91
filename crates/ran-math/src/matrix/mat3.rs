use crate::vector::{Vec3, Vec4};

/// A 3x3 column-major matrix, typically a rotation or a normal matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[allow(missing_docs)]
pub struct Mat3 {
    pub c1: Vec3,
    pub c2: Vec3,
    pub c3: Vec3,
}

matrix_common!(Mat3, Vec3, 3, c1, c2, c3);

impl Mat3 {
    /// Ones on the diagonal.
    pub const IDENTITY: Self = Self {
        c1: Vec3::new(1.0, 0.0, 0.0),
        c2: Vec3::new(0.0, 1.0, 0.0),
        c3: Vec3::new(0.0, 0.0, 1.0),
    };

    /// Rows become columns.
    #[inline(always)]
    pub fn transpose(self) -> Self {
        Self {
            c1: Vec3::new(self.c1.x, self.c2.x, self.c3.x),
            c2: Vec3::new(self.c1.y, self.c2.y, self.c3.y),
            c3: Vec3::new(self.c1.z, self.c2.z, self.c3.z),
        }
    }

    /// Sum of the diagonal.
    #[inline(always)]
    pub fn trace(self) -> f32 {
        (self.c1.x + self.c2.y) + self.c3.z
    }

    /// Determinant, expanded along the first row.
    pub fn determinant(self) -> f32 {
        let m = self;
        let a = m.c1.x * (m.c2.y * m.c3.z - m.c3.y * m.c2.z);
        let b = m.c2.x * (m.c1.y * m.c3.z - m.c1.z * m.c3.y);
        let c = m.c3.x * (m.c1.y * m.c2.z - m.c1.z * m.c2.y);
        (a - b) + c
    }

    /// Adjugate divided by the determinant.
    ///
    /// A singular matrix yields non-finite entries; use
    /// [`Mat3::try_inverse`] to detect that case.
    pub fn inverse(self) -> Self {
        let m = self;
        let adj = Self {
            c1: Vec3::new(
                m.c2.y * m.c3.z - m.c2.z * m.c3.y,
                -(m.c1.y * m.c3.z - m.c3.y * m.c1.z),
                m.c1.y * m.c2.z - m.c2.y * m.c1.z,
            ),
            c2: Vec3::new(
                -(m.c2.x * m.c3.z - m.c3.x * m.c2.z),
                m.c1.x * m.c3.z - m.c1.z * m.c3.x,
                -(m.c1.x * m.c2.z - m.c2.x * m.c1.z),
            ),
            c3: Vec3::new(
                m.c2.x * m.c3.y - m.c3.x * m.c2.y,
                -(m.c1.x * m.c3.y - m.c3.x * m.c1.y),
                m.c1.x * m.c2.y - m.c1.y * m.c2.x,
            ),
        };
        let det = (m.c1.x * adj.c1.x + m.c1.y * adj.c2.x) + m.c1.z * adj.c3.x;
        adj * (1.0 / det)
    }

    /// The rotation held by `self` as a quaternion `(x, y, z, w)`.
    ///
    /// Uses the trace when it is non-negative, otherwise the largest
    /// diagonal entry, to keep the square root away from zero.
    pub fn to_quat(self) -> Vec4 {
        let m = self;
        let trace = m.trace();

        if trace >= 0.0 {
            let r = (1.0 + trace).sqrt();
            let rinv = 0.5 / r;
            Vec4::new(
                rinv * (m.c2.z - m.c3.y),
                rinv * (m.c3.x - m.c1.z),
                rinv * (m.c1.y - m.c2.x),
                r * 0.5,
            )
        } else if m.c1.x >= m.c2.y && m.c1.x >= m.c3.z {
            let r = ((1.0 - m.c2.y) - m.c3.z + m.c1.x).sqrt();
            let rinv = 0.5 / r;
            Vec4::new(
                r * 0.5,
                rinv * (m.c1.y + m.c2.x),
                rinv * (m.c1.z + m.c3.x),
                rinv * (m.c2.z - m.c3.y),
            )
        } else if m.c2.y >= m.c3.z {
            let r = ((1.0 - m.c1.x) - m.c3.z + m.c2.y).sqrt();
            let rinv = 0.5 / r;
            Vec4::new(
                rinv * (m.c1.y + m.c2.x),
                r * 0.5,
                rinv * (m.c2.z + m.c3.y),
                rinv * (m.c3.x - m.c1.z),
            )
        } else {
            let r = ((1.0 - m.c1.x) - m.c2.y + m.c3.z).sqrt();
            let rinv = 0.5 / r;
            Vec4::new(
                rinv * (m.c1.z + m.c3.x),
                rinv * (m.c2.z + m.c3.y),
                r * 0.5,
                rinv * (m.c1.y - m.c2.x),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Mat3, b: Mat3) -> bool {
        a.to_cols_array()
            .iter()
            .zip(b.to_cols_array())
            .all(|(x, y)| (x - y).abs() < 1e-5)
    }

    fn close4(a: Vec4, b: Vec4) -> bool {
        (a - b).norm_inf() < 1e-5
    }

    fn sample() -> Mat3 {
        Mat3::from_cols(
            Vec3::new(2.0, 0.0, 1.0),
            Vec3::new(-1.0, 3.0, 0.0),
            Vec3::new(0.0, 1.0, 4.0),
        )
    }

    fn rot_z_90() -> Mat3 {
        Mat3::from_cols(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
    }

    #[test]
    fn determinant_matches_hand_expansion() {
        // rows: [2 -1 0; 0 3 1; 1 0 4]
        // 2(12 - 0) + 1(0 - 1) + 0 = 23
        assert_eq!(sample().determinant(), 23.0);
        assert_eq!(Mat3::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3::ZERO.determinant(), 0.0);
    }

    #[test]
    fn inverse_round_trips_to_identity() {
        let m = sample();
        assert!(close(m * m.inverse(), Mat3::IDENTITY));
        assert!(close(m.inverse() * m, Mat3::IDENTITY));
        assert!(m.try_inverse().is_some());
    }

    #[test]
    fn rotation_inverse_is_transpose() {
        let r = rot_z_90();
        assert!(close(r.inverse(), r.transpose()));
    }

    #[test]
    fn singular_has_no_inverse() {
        let s = Mat3::from_cols(Vec3::ONE, Vec3::ONE, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(s.try_inverse(), None);
    }

    #[test]
    fn mul_vector_rotates() {
        assert_eq!(rot_z_90() * Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn quat_of_identity() {
        assert_eq!(Mat3::IDENTITY.to_quat(), Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn quat_of_quarter_turn_about_z() {
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert!(close4(rot_z_90().to_quat(), Vec4::new(0.0, 0.0, h, h)));
    }

    #[test]
    fn quat_branches_for_half_turns() {
        let about_x = Mat3::from_cols(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
        );
        let about_y = Mat3::from_cols(
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
        );
        let about_z = Mat3::from_cols(
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert!(close4(about_x.to_quat(), Vec4::new(1.0, 0.0, 0.0, 0.0)));
        assert!(close4(about_y.to_quat(), Vec4::new(0.0, 1.0, 0.0, 0.0)));
        assert!(close4(about_z.to_quat(), Vec4::new(0.0, 0.0, 1.0, 0.0)));
    }

    #[test]
    fn swaps_and_flat_layout() {
        let m = sample();
        assert_eq!(m.swap_cols(0, 2).c1, m.c3);
        let r = m.swap_rows(1, 2);
        assert_eq!(r.c1, Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(
            m.to_cols_array(),
            [2.0, 0.0, 1.0, -1.0, 3.0, 0.0, 0.0, 1.0, 4.0]
        );
    }

    #[test]
    fn scale_and_rmc() {
        let m = sample() * 2.0;
        assert_eq!(m.c2, Vec3::new(-2.0, 6.0, 0.0));
        // Row 1, column 1 of the scaled matrix.
        assert_eq!(m.rmc(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 0.0)), 6.0);
    }

    #[test]
    fn display_prints_columns() {
        let s = Mat3::IDENTITY.to_string();
        assert_eq!(s.matches('(').count(), 3);
    }
}
