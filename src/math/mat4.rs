//! 4x4 transformation matrix using column-major convention.
//!
//! # Convention
//! - Elements are stored flat: the element at (row r, column c) lives at
//!   index `c * 4 + r`. Use [`Mat4::at`] / [`Mat4::set`] rather than raw
//!   indexing.
//! - Translation is stored in the **last column**
//! - Vertex batches are transformed as `v' = M * v` (column vectors); the
//!   3-wide overload applies only the upper 3x3 block and ignores
//!   translation.
//!
//! Builders (`identity`, `rotate`, `translate`, `frustum`) mutate in place
//! and each *overwrites* rather than composes. In particular `translate`
//! only touches the translation column, so callers combining rotation and
//! translation apply them as separate transform stages.

use super::vec3::Vec3;
use super::vec4::Vec4;

/// 4x4 matrix stored as 16 contiguous floats, column-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    e: [f32; 16],
}

impl Mat4 {
    /// Creates a new identity matrix.
    pub fn new() -> Self {
        let mut m = Mat4 { e: [0.0; 16] };
        m.identity();
        m
    }

    /// Access the element at (row, col).
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.e[col * 4 + row]
    }

    /// Set the element at (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.e[col * 4 + row] = value;
    }

    /// Resets to the multiplicative identity.
    pub fn identity(&mut self) {
        self.e = [0.0; 16];
        self.e[0x0] = 1.0;
        self.e[0x5] = 1.0;
        self.e[0xa] = 1.0;
        self.e[0xf] = 1.0;
    }

    /// Builds a combined rotation from three Euler-style angles in radians.
    ///
    /// Overwrites the whole matrix: the upper 3x3 block becomes the
    /// product of the elementary rotations, translation and perspective
    /// terms are zeroed and the homogeneous element set to 1.
    pub fn rotate(&mut self, a: f32, b: f32, c: f32) {
        let (sa, ca) = a.sin_cos();
        let (sb, cb) = b.sin_cos();
        let (sc, cc) = c.sin_cos();

        self.set(0, 0, cc * cb);
        self.set(1, 0, ca * sc * cb + sa * sb);
        self.set(2, 0, sa * sc * cb - ca * sb);
        self.set(3, 0, 0.0);

        self.set(0, 1, -sc);
        self.set(1, 1, ca * cc);
        self.set(2, 1, sa * cc);
        self.set(3, 1, 0.0);

        self.set(0, 2, cc * sb);
        self.set(1, 2, ca * sc * sb - sa * cb);
        self.set(2, 2, sa * sc * sb + ca * cb);
        self.set(3, 2, 0.0);

        self.set(0, 3, 0.0);
        self.set(1, 3, 0.0);
        self.set(2, 3, 0.0);
        self.set(3, 3, 1.0);
    }

    /// Overwrites the translation column with `p`.
    ///
    /// This builds a pure translation matrix when starting from identity.
    /// It does *not* compose with existing matrix content: the rotation
    /// block is left as-is, so rotate and translate are applied as
    /// separate stages rather than multiplied together.
    pub fn translate(&mut self, p: Vec3) {
        self.set(0, 3, p.x);
        self.set(1, 3, p.y);
        self.set(2, 3, p.z);
        self.set(3, 3, 1.0);
    }

    /// OpenGL-style off-center perspective projection from the six frustum
    /// planes. The caller must ensure `r != l`, `t != b` and `f != n`.
    pub fn frustum(&mut self, l: f32, r: f32, b: f32, t: f32, n: f32, f: f32) {
        self.e = [0.0; 16];

        self.set(0, 0, (2.0 * n) / (r - l));
        self.set(1, 1, (2.0 * n) / (t - b));

        self.set(0, 2, (r + l) / (r - l));
        self.set(1, 2, (t + b) / (t - b));
        self.set(2, 2, -(f + n) / (f - n));
        self.set(3, 2, -1.0);

        self.set(2, 3, -(2.0 * f * n) / (f - n));
    }

    /// Transforms a batch of homogeneous vertices: `out[i] = M * in[i]`.
    ///
    /// Input and output must be distinct buffers of the same length.
    pub fn transform_vec4(&self, input: &[Vec4], out: &mut [Vec4]) {
        debug_assert_eq!(input.len(), out.len());
        for (s, d) in input.iter().zip(out.iter_mut()) {
            *d = Vec4::new(
                s.x * self.at(0, 0) + s.y * self.at(0, 1) + s.z * self.at(0, 2) + s.w * self.at(0, 3),
                s.x * self.at(1, 0) + s.y * self.at(1, 1) + s.z * self.at(1, 2) + s.w * self.at(1, 3),
                s.x * self.at(2, 0) + s.y * self.at(2, 1) + s.z * self.at(2, 2) + s.w * self.at(2, 3),
                s.x * self.at(3, 0) + s.y * self.at(3, 1) + s.z * self.at(3, 2) + s.w * self.at(3, 3),
            );
        }
    }

    /// Transforms a batch of direction vectors by the upper 3x3 block only.
    /// Translation and perspective terms are ignored.
    pub fn transform_vec3(&self, input: &[Vec3], out: &mut [Vec3]) {
        debug_assert_eq!(input.len(), out.len());
        for (s, d) in input.iter().zip(out.iter_mut()) {
            *d = Vec3::new(
                s.x * self.at(0, 0) + s.y * self.at(0, 1) + s.z * self.at(0, 2),
                s.x * self.at(1, 0) + s.y * self.at(1, 1) + s.z * self.at(1, 2),
                s.x * self.at(2, 0) + s.y * self.at(2, 1) + s.z * self.at(2, 2),
            );
        }
    }

    /// Swaps off-diagonal element pairs in place.
    pub fn transpose(&mut self) {
        self.e.swap(0x1, 0x4);
        self.e.swap(0x2, 0x8);
        self.e.swap(0x3, 0xc);
        self.e.swap(0x6, 0x9);
        self.e.swap(0x7, 0xd);
        self.e.swap(0xb, 0xe);
    }

    /// Computes the inverse via cofactor expansion, if it exists.
    /// Returns `None` when the determinant is exactly zero.
    pub fn invert(&self) -> Option<Mat4> {
        let e = &self.e;
        let mut inv = [0.0f32; 16];

        inv[0] = e[5] * e[10] * e[15] - e[5] * e[11] * e[14] - e[9] * e[6] * e[15]
            + e[9] * e[7] * e[14]
            + e[13] * e[6] * e[11]
            - e[13] * e[7] * e[10];

        inv[4] = -e[4] * e[10] * e[15] + e[4] * e[11] * e[14] + e[8] * e[6] * e[15]
            - e[8] * e[7] * e[14]
            - e[12] * e[6] * e[11]
            + e[12] * e[7] * e[10];

        inv[8] = e[4] * e[9] * e[15] - e[4] * e[11] * e[13] - e[8] * e[5] * e[15]
            + e[8] * e[7] * e[13]
            + e[12] * e[5] * e[11]
            - e[12] * e[7] * e[9];

        inv[12] = -e[4] * e[9] * e[14] + e[4] * e[10] * e[13] + e[8] * e[5] * e[14]
            - e[8] * e[6] * e[13]
            - e[12] * e[5] * e[10]
            + e[12] * e[6] * e[9];

        inv[1] = -e[1] * e[10] * e[15] + e[1] * e[11] * e[14] + e[9] * e[2] * e[15]
            - e[9] * e[3] * e[14]
            - e[13] * e[2] * e[11]
            + e[13] * e[3] * e[10];

        inv[5] = e[0] * e[10] * e[15] - e[0] * e[11] * e[14] - e[8] * e[2] * e[15]
            + e[8] * e[3] * e[14]
            + e[12] * e[2] * e[11]
            - e[12] * e[3] * e[10];

        inv[9] = -e[0] * e[9] * e[15] + e[0] * e[11] * e[13] + e[8] * e[1] * e[15]
            - e[8] * e[3] * e[13]
            - e[12] * e[1] * e[11]
            + e[12] * e[3] * e[9];

        inv[13] = e[0] * e[9] * e[14] - e[0] * e[10] * e[13] - e[8] * e[1] * e[14]
            + e[8] * e[2] * e[13]
            + e[12] * e[1] * e[10]
            - e[12] * e[2] * e[9];

        inv[2] = e[1] * e[6] * e[15] - e[1] * e[7] * e[14] - e[5] * e[2] * e[15]
            + e[5] * e[3] * e[14]
            + e[13] * e[2] * e[7]
            - e[13] * e[3] * e[6];

        inv[6] = -e[0] * e[6] * e[15] + e[0] * e[7] * e[14] + e[4] * e[2] * e[15]
            - e[4] * e[3] * e[14]
            - e[12] * e[2] * e[7]
            + e[12] * e[3] * e[6];

        inv[10] = e[0] * e[5] * e[15] - e[0] * e[7] * e[13] - e[4] * e[1] * e[15]
            + e[4] * e[3] * e[13]
            + e[12] * e[1] * e[7]
            - e[12] * e[3] * e[5];

        inv[14] = -e[0] * e[5] * e[14] + e[0] * e[6] * e[13] + e[4] * e[1] * e[14]
            - e[4] * e[2] * e[13]
            - e[12] * e[1] * e[6]
            + e[12] * e[2] * e[5];

        inv[3] = -e[1] * e[6] * e[11] + e[1] * e[7] * e[10] + e[5] * e[2] * e[11]
            - e[5] * e[3] * e[10]
            - e[9] * e[2] * e[7]
            + e[9] * e[3] * e[6];

        inv[7] = e[0] * e[6] * e[11] - e[0] * e[7] * e[10] - e[4] * e[2] * e[11]
            + e[4] * e[3] * e[10]
            + e[8] * e[2] * e[7]
            - e[8] * e[3] * e[6];

        inv[11] = -e[0] * e[5] * e[11] + e[0] * e[7] * e[9] + e[4] * e[1] * e[11]
            - e[4] * e[3] * e[9]
            - e[8] * e[1] * e[7]
            + e[8] * e[3] * e[5];

        inv[15] = e[0] * e[5] * e[10] - e[0] * e[6] * e[9] - e[4] * e[1] * e[10]
            + e[4] * e[2] * e[9]
            + e[8] * e[1] * e[6]
            - e[8] * e[2] * e[5];

        let det = e[0] * inv[0] + e[1] * inv[4] + e[2] * inv[8] + e[3] * inv[12];
        if det == 0.0 {
            return None;
        }
        let inv_det = 1.0 / det;

        for v in &mut inv {
            *v *= inv_det;
        }

        Some(Mat4 { e: inv })
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::new()
    }
}
