//! Rotation matrix and homogeneous transform value types.
//!
//! Angles cross this API in degrees (the vendor convention) and are
//! converted to radians internally. The Euler composition order is fixed:
//! W (roll about X) outermost, P (pitch about Y), R (yaw about Z) innermost,
//! so the matrix product is `Rz(r) * Ry(p) * Rx(w)`.

use standoffkit_core::EulerAngles;

/// Pitch recovery loses a unique W/R split when |sin(p)| reaches 1.
const GIMBAL_EPS: f64 = 1e-9;

/// A 3x3 rotation matrix, row-major.
///
/// Orthonormal by construction when built from Euler angles; the inverse of
/// an orthonormal matrix is its transpose, which [`RotationMatrix::inverse`]
/// relies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix(pub [[f64; 3]; 3]);

impl RotationMatrix {
    /// The identity rotation.
    pub const IDENTITY: Self = Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Build the rotation matrix for a W-P-R orientation triple (degrees).
    pub fn from_euler(angles: EulerAngles) -> Self {
        let (sw, cw) = angles.w.to_radians().sin_cos();
        let (sp, cp) = angles.p.to_radians().sin_cos();
        let (sr, cr) = angles.r.to_radians().sin_cos();

        Self([
            [cp * cr, sw * sp * cr - cw * sr, sw * sr + cw * sp * cr],
            [cp * sr, cw * cr + sw * sp * sr, cw * sp * sr - sw * cr],
            [-sp, sw * cp, cw * cp],
        ])
    }

    /// Recover the W-P-R orientation triple (degrees).
    ///
    /// Near pitch = +/-90 degrees the W and R components are not unique;
    /// the formulas still return a value but callers should treat results
    /// in that region as numerically unstable.
    pub fn to_euler(&self) -> EulerAngles {
        let m = &self.0;
        let mut sin_p = -m[2][0];
        if sin_p.abs() >= 1.0 - GIMBAL_EPS {
            tracing::warn!(
                pitch_sine = sin_p,
                "pitch at or beyond +/-90 degrees; W/R recovery is not unique"
            );
            // asin is undefined outside [-1, 1]; rounding error can push
            // an orthonormal matrix marginally past the boundary.
            sin_p = sin_p.clamp(-1.0, 1.0);
        }
        EulerAngles {
            w: m[2][1].atan2(m[2][2]).to_degrees(),
            p: sin_p.asin().to_degrees(),
            r: m[1][0].atan2(m[0][0]).to_degrees(),
        }
    }

    /// The inverse rotation. Valid only for orthonormal input, for which
    /// the inverse is the transpose.
    pub fn inverse(&self) -> Self {
        let m = &self.0;
        Self([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Standard 3x3 matrix product `self * other`. Non-commutative: the
    /// product applies `other`'s frame inside `self`'s frame.
    pub fn compose(&self, other: &Self) -> Self {
        let (a, b) = (&self.0, &other.0);
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        Self(out)
    }

    /// The local Z (approach) axis expressed in the parent frame: the
    /// matrix's third column.
    pub fn approach_axis(&self) -> [f64; 3] {
        let m = &self.0;
        [m[0][2], m[1][2], m[2][2]]
    }
}

/// A 4x4 homogeneous transform, row-major: rotation plus translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform4x4(pub [[f64; 4]; 4]);

impl Transform4x4 {
    /// Embed a rotation and a translation into a homogeneous transform.
    pub fn from_parts(rotation: &RotationMatrix, translation: [f64; 3]) -> Self {
        let r = &rotation.0;
        Self([
            [r[0][0], r[0][1], r[0][2], translation[0]],
            [r[1][0], r[1][1], r[1][2], translation[1]],
            [r[2][0], r[2][1], r[2][2], translation[2]],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Embed a rotation with zero translation.
    pub fn from_rotation(rotation: &RotationMatrix) -> Self {
        Self::from_parts(rotation, [0.0; 3])
    }

    /// A pure translation transform.
    pub fn translation(translation: [f64; 3]) -> Self {
        Self::from_parts(&RotationMatrix::IDENTITY, translation)
    }

    /// Standard 4x4 matrix product `self * other`.
    pub fn multiply(&self, other: &Self) -> Self {
        let (a, b) = (&self.0, &other.0);
        let mut out = [[0.0; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j] + a[i][3] * b[3][j];
            }
        }
        Self(out)
    }

    /// Transform a 3-vector, treating it as a homogeneous point.
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.0;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2] + m[0][3],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2] + m[1][3],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2] + m[2][3],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn assert_matrix_close(a: &RotationMatrix, b: &RotationMatrix) {
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (a.0[i][j] - b.0[i][j]).abs() < EPS,
                    "element [{i}][{j}]: {} vs {}",
                    a.0[i][j],
                    b.0[i][j]
                );
            }
        }
    }

    #[test]
    fn test_zero_angles_give_identity() {
        let m = RotationMatrix::from_euler(EulerAngles::new(0.0, 0.0, 0.0));
        assert_matrix_close(&m, &RotationMatrix::IDENTITY);
    }

    #[test]
    fn test_yaw_quarter_turn() {
        // R = 90: local X maps onto world Y.
        let m = RotationMatrix::from_euler(EulerAngles::new(0.0, 0.0, 90.0));
        assert!((m.0[0][0]).abs() < EPS);
        assert!((m.0[1][0] - 1.0).abs() < EPS);
        assert!((m.0[2][2] - 1.0).abs() < EPS);
    }

    #[test]
    fn test_inverse_is_transpose() {
        let samples = [
            EulerAngles::new(10.0, 20.0, 30.0),
            EulerAngles::new(-45.0, 60.0, 120.0),
            EulerAngles::new(179.0, -89.0, -179.0),
            EulerAngles::new(0.0, 0.0, 0.0),
        ];
        for angles in samples {
            let m = RotationMatrix::from_euler(angles);
            let inv = m.inverse();
            for i in 0..3 {
                for j in 0..3 {
                    assert_eq!(inv.0[i][j], m.0[j][i]);
                }
            }
            // and the product with the inverse is the identity
            assert_matrix_close(&m.compose(&inv), &RotationMatrix::IDENTITY);
        }
    }

    #[test]
    fn test_euler_round_trip() {
        let samples = [
            EulerAngles::new(12.5, -34.0, 56.75),
            EulerAngles::new(-120.0, 45.0, 170.0),
            EulerAngles::new(90.0, 0.0, -90.0),
        ];
        for angles in samples {
            let recovered = RotationMatrix::from_euler(angles).to_euler();
            assert!((recovered.w - angles.w).abs() < 1e-9);
            assert!((recovered.p - angles.p).abs() < 1e-9);
            assert!((recovered.r - angles.r).abs() < 1e-9);
        }
    }

    #[test]
    fn test_gimbal_region_returns_finite_angles() {
        let m = RotationMatrix::from_euler(EulerAngles::new(30.0, 90.0, -15.0));
        let recovered = m.to_euler();
        assert!(recovered.w.is_finite());
        assert!((recovered.p - 90.0).abs() < 1e-6);
        assert!(recovered.r.is_finite());
    }

    #[test]
    fn test_approach_axis_identity_is_world_z() {
        assert_eq!(RotationMatrix::IDENTITY.approach_axis(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_homogeneous_apply() {
        let rot = RotationMatrix::from_euler(EulerAngles::new(0.0, 0.0, 90.0));
        let t = Transform4x4::from_parts(&rot, [10.0, 0.0, -5.0]);
        let v = t.apply([1.0, 0.0, 0.0]);
        assert!((v[0] - 10.0).abs() < EPS);
        assert!((v[1] - 1.0).abs() < EPS);
        assert!((v[2] + 5.0).abs() < EPS);
    }

    #[test]
    fn test_multiply_against_composed_parts() {
        let rot = RotationMatrix::from_euler(EulerAngles::new(15.0, -30.0, 45.0));
        let a = Transform4x4::from_rotation(&rot);
        let b = Transform4x4::translation([1.0, 2.0, 3.0]);
        // rotate-after-translate equals applying in sequence
        let combined = a.multiply(&b);
        let v = [4.0, -5.0, 6.0];
        let expected = a.apply(b.apply(v));
        let got = combined.apply(v);
        for k in 0..3 {
            assert!((expected[k] - got[k]).abs() < EPS);
        }
    }
}
