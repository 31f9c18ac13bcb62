//! Column-major 4x4 matrix type.
//!
//! # Convention
//!
//! [`Mat4`] stores 16 floats in **column-major** order: element at logical
//! (column `c`, row `r`) lives at linear offset `c * 4 + r`. Graphics APIs
//! that consume column-major `mat4` uniforms can read the storage directly
//! ([`Mat4::as_ptr`]) with the transpose flag off.
//!
//! Multiplication is conventional: `a * b` applies `b` first, then `a`.
//! Transform chains compose right-to-left, so new transforms multiply onto
//! the **left** of the accumulated matrix:
//!
//! ```rust
//! use glint_math::{Axis, Mat4, Vec3, Vec4};
//!
//! let mut translation = Mat4::IDENTITY;
//! translation.translate(Vec3::new(1.0, 2.0, 3.0));
//! let mut rotation = Mat4::IDENTITY;
//! rotation.rotate(90.0, Axis::Z);
//!
//! // translate first, then rotate
//! let m = rotation * translation;
//! let p = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
//! assert!((p.x - -2.0).abs() < glint_math::EPSILON);
//! assert!((p.y - 2.0).abs() < glint_math::EPSILON);
//! ```
//!
//! `translate` and `scale` are deliberate quirks inherited from the demo:
//! they edit the translation column and the diagonal **in place** rather
//! than composing a fresh transform matrix. See the method docs.

use crate::{radians, simd, Axis, Vec3, Vec4, EPSILON};
use glint_core::{Error, Result};
use std::ops::Mul;

/// A 4x4 matrix of `f32`, stored column-major.
///
/// # Example
///
/// ```rust
/// use glint_math::{Mat4, Vec4};
///
/// let id = Mat4::IDENTITY;
/// let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
/// assert_eq!(id * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C, align(16))]
pub struct Mat4 {
    // column-major: e[c * 4 + r]
    e: [f32; 16],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { e: [0.0; 16] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        e: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// The multiplicative identity. Alias for [`Mat4::IDENTITY`].
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from row arrays, as it reads on the page.
    ///
    /// The rows are transposed into column-major storage.
    ///
    /// ```rust
    /// use glint_math::Mat4;
    ///
    /// let m = Mat4::from_rows([
    ///     [1.0, 0.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]);
    /// assert_eq!(m, Mat4::IDENTITY);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let mut e = [0.0f32; 16];
        let mut c = 0;
        while c < 4 {
            let mut r = 0;
            while r < 4 {
                e[c * 4 + r] = rows[r][c];
                r += 1;
            }
            c += 1;
        }
        Self { e }
    }

    /// Creates a matrix from column arrays (the storage order).
    #[inline]
    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        let mut e = [0.0f32; 16];
        let mut c = 0;
        while c < 4 {
            let mut r = 0;
            while r < 4 {
                e[c * 4 + r] = cols[c][r];
                r += 1;
            }
            c += 1;
        }
        Self { e }
    }

    /// Creates a matrix from a flat column-major array.
    #[inline]
    pub const fn from_cols_array(e: [f32; 16]) -> Self {
        Self { e }
    }

    /// Returns the flat column-major storage.
    ///
    /// This is the exact byte layout a column-major `mat4` uniform upload
    /// expects, no transpose needed.
    #[inline]
    pub const fn to_cols_array(self) -> [f32; 16] {
        self.e
    }

    /// Pointer to the first element of the column-major storage.
    ///
    /// Valid for reading 16 contiguous floats; intended for FFI uniform
    /// upload (`glUniformMatrix4fv`-style, transpose flag false).
    #[inline]
    pub const fn as_ptr(&self) -> *const f32 {
        self.e.as_ptr()
    }

    /// Element at (column `c`, row `r`).
    ///
    /// # Panics
    ///
    /// Panics if `c` or `r` is out of range.
    #[inline]
    pub fn at(&self, c: usize, r: usize) -> f32 {
        assert!(c < 4 && r < 4, "Mat4 index out of bounds: ({c}, {r})");
        self.e[c * 4 + r]
    }

    /// Mutable element at (column `c`, row `r`).
    ///
    /// # Panics
    ///
    /// Panics if `c` or `r` is out of range.
    #[inline]
    pub fn at_mut(&mut self, c: usize, r: usize) -> &mut f32 {
        assert!(c < 4 && r < 4, "Mat4 index out of bounds: ({c}, {r})");
        &mut self.e[c * 4 + r]
    }

    /// Returns column `c` as a vector.
    #[inline]
    pub fn col(&self, c: usize) -> Vec4 {
        Vec4::new(self.at(c, 0), self.at(c, 1), self.at(c, 2), self.at(c, 3))
    }

    /// Returns row `r` as a vector.
    #[inline]
    pub fn row(&self, r: usize) -> Vec4 {
        Vec4::new(self.at(0, r), self.at(1, r), self.at(2, r), self.at(3, r))
    }

    /// Multiplies two matrices: conventional `self * other`, applying
    /// `other` first. Routed through the SIMD lane multiply.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        Self {
            e: simd::mat4_mul(&self.e, &other.e),
        }
    }

    /// Transforms a [`Vec4`] by this matrix.
    #[inline]
    pub fn transform(&self, v: Vec4) -> Vec4 {
        let v = v.to_array();
        let mut out = [0.0f32; 4];
        for (r, slot) in out.iter_mut().enumerate() {
            *slot = self.e[r] * v[0]
                + self.e[4 + r] * v[1]
                + self.e[8 + r] * v[2]
                + self.e[12 + r] * v[3];
        }
        Vec4::from_array(out)
    }

    /// Adds `v` into the translation column (column 3) in place.
    ///
    /// This is an **additive** update of the existing column-3 values, not
    /// a multiply by a translation matrix. It therefore composes by
    /// addition: apply it after any scale or rotation already in `self`.
    /// A quirk kept from the original demo for call-site compatibility.
    ///
    /// ```rust
    /// use glint_math::{Mat4, Vec3};
    ///
    /// let mut m = Mat4::IDENTITY;
    /// m.translate(Vec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(m.at(3, 0), 1.0);
    /// assert_eq!(m.at(3, 1), 2.0);
    /// assert_eq!(m.at(3, 2), 3.0);
    /// ```
    #[inline]
    pub fn translate(&mut self, v: Vec3) {
        self.e[12] += v.x;
        self.e[13] += v.y;
        self.e[14] += v.z;
    }

    /// Multiplies the diagonal entries (0,0), (1,1), (2,2) by `v` in place.
    ///
    /// A direct diagonal scale, not matrix-multiply composition — the same
    /// documented quirk as [`Mat4::translate`].
    #[inline]
    pub fn scale(&mut self, v: Vec3) {
        self.e[0] *= v.x;
        self.e[5] *= v.y;
        self.e[10] *= v.z;
    }

    /// Rotates about one cardinal axis: builds the standard trigonometric
    /// rotation matrix for `axis` and sets `self = self * rotation`, so the
    /// rotation applies before whatever `self` already represents.
    ///
    /// Axis input arrives pre-validated as [`Axis`]; convert a raw one-hot
    /// selector with [`Vec3i::axis`](crate::Vec3i::axis) first.
    pub fn rotate(&mut self, degrees: f32, axis: Axis) {
        let rad = radians(degrees);
        let (sin, cos) = rad.sin_cos();
        let r = match axis {
            Axis::X => Self::from_rows([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, cos, -sin, 0.0],
                [0.0, sin, cos, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]),
            Axis::Y => Self::from_rows([
                [cos, 0.0, sin, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [-sin, 0.0, cos, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]),
            Axis::Z => Self::from_rows([
                [cos, -sin, 0.0, 0.0],
                [sin, cos, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]),
        };
        *self = self.mul_mat(&r);
    }

    /// Builds a right-handed perspective projection.
    ///
    /// Vertical field of view in degrees, [-1, 1] NDC z-range, `near` and
    /// `far` clip planes. Transforms view space into clip space;
    /// everything outside the NDC cube gets clipped.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `fov <= 0` or `far <= near`.
    pub fn perspective(fov: f32, ratio: f32, near: f32, far: f32) -> Result<Self> {
        if fov <= 0.0 {
            return Err(Error::invalid_argument(
                "perspective",
                format!("fov must be positive, got {fov}"),
            ));
        }
        if far <= near {
            return Err(Error::invalid_argument(
                "perspective",
                format!("far ({far}) must exceed near ({near})"),
            ));
        }
        let tan_half_fov = radians(fov / 2.0).tan();
        let top = near * tan_half_fov;
        let right = top * ratio;
        let mut m = Self::ZERO;
        *m.at_mut(0, 0) = near / right;
        *m.at_mut(1, 1) = near / top;
        *m.at_mut(2, 2) = -(far + near) / (far - near);
        *m.at_mut(2, 3) = -1.0;
        *m.at_mut(3, 2) = -(2.0 * far * near) / (far - near);
        Ok(m)
    }

    /// Builds a right-handed view matrix.
    ///
    /// Forward points from `target` to `eye` (view space looks down -Z),
    /// right is `cross(up, forward)` normalised, true-up is
    /// `cross(forward, right)`. The result is `rotation * translation`
    /// where the translation moves the world by `-eye` and the rotation's
    /// rows are (right, true-up, forward).
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `up` is parallel to the view direction (or
    /// `eye == target`), which leaves the basis underdetermined.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Self> {
        let f = (eye - target).normalise();
        let right = up.cross(f);
        if right.length_squared() <= EPSILON * EPSILON {
            return Err(Error::invalid_argument(
                "look_at",
                "up is parallel to the view direction",
            ));
        }
        let s = right.normalise();
        let u = f.cross(s);
        let rotation = Self::from_rows([
            [s.x, s.y, s.z, 0.0],
            [u.x, u.y, u.z, 0.0],
            [f.x, f.y, f.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let translation = Self::from_rows([
            [1.0, 0.0, 0.0, -eye.x],
            [0.0, 1.0, 0.0, -eye.y],
            [0.0, 0.0, 1.0, -eye.z],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        Ok(rotation.mul_mat(&translation))
    }

    /// Converts to a glam matrix (glam is column-major too).
    #[inline]
    pub fn to_glam(self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&self.e)
    }

    /// Creates from a glam matrix.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self {
            e: m.to_cols_array(),
        }
    }
}

impl Default for Mat4 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Mat4 * Vec4
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_mat_close(a: &Mat4, b: &Mat4) {
        let (a, b) = (a.to_cols_array(), b.to_cols_array());
        for i in 0..16 {
            assert!((a[i] - b[i]).abs() <= EPSILON, "element {i}: {} vs {}", a[i], b[i]);
        }
    }

    #[test]
    fn test_column_major_storage() {
        let m = Mat4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        // column c, row r lives at c * 4 + r
        let e = m.to_cols_array();
        assert_eq!(e[0], 1.0); // (0, 0)
        assert_eq!(e[1], 5.0); // (0, 1)
        assert_eq!(e[4], 2.0); // (1, 0)
        assert_eq!(e[12], 4.0); // (3, 0): translation slot x
        assert_eq!(m.at(3, 0), 4.0);
        assert_eq!(m.row(0).to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.col(0).to_array(), [1.0, 5.0, 9.0, 13.0]);
    }

    #[test]
    fn test_from_cols_matches_from_rows_transposed() {
        let rows = [
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ];
        let cols = [
            [1.0, 5.0, 9.0, 13.0],
            [2.0, 6.0, 10.0, 14.0],
            [3.0, 7.0, 11.0, 15.0],
            [4.0, 8.0, 12.0, 16.0],
        ];
        assert_eq!(Mat4::from_rows(rows), Mat4::from_cols(cols));
    }

    #[test]
    fn test_mul_identity() {
        let random = Mat4::from_rows([
            [69.0, 12.3, -14.3, 20.0],
            [52.0, 2.3, -114.3, -30.0],
            [69.0, 12.3, -4.3, 0.0],
            [69.0, 12.3, -2.2, 20.0],
        ]);
        assert_eq!(Mat4::IDENTITY * random, random);
        assert_eq!(random * Mat4::IDENTITY, random);
    }

    #[test]
    fn test_mul_zero() {
        let ones = Mat4::from_rows([[1.0; 4]; 4]);
        assert_eq!(Mat4::ZERO * ones, Mat4::ZERO);
        assert_eq!(ones * Mat4::ZERO, Mat4::ZERO);
    }

    #[test]
    fn test_mul_known() {
        let a = Mat4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let b = Mat4::from_rows([
            [16.0, 15.0, 14.0, 13.0],
            [12.0, 11.0, 10.0, 9.0],
            [8.0, 7.0, 6.0, 5.0],
            [4.0, 3.0, 2.0, 1.0],
        ]);
        let expected = Mat4::from_rows([
            [80.0, 70.0, 60.0, 50.0],
            [240.0, 214.0, 188.0, 162.0],
            [400.0, 358.0, 316.0, 274.0],
            [560.0, 502.0, 444.0, 386.0],
        ]);
        assert_mat_close(&(a * b), &expected);

        // the other order must differ everywhere
        let ab = (a * b).to_cols_array();
        let ba = (b * a).to_cols_array();
        for i in 0..16 {
            assert!((ab[i] - ba[i]).abs() > EPSILON);
        }
    }

    #[test]
    fn test_mul_associative() {
        let a = Mat4::from_rows([
            [0.5, -2.0, 3.25, 1.0],
            [4.0, 0.125, -7.0, 2.0],
            [-1.5, 10.0, 0.0, -3.0],
            [2.0, 2.0, 2.0, 1.0],
        ]);
        let b = Mat4::IDENTITY * a;
        let mut c = Mat4::IDENTITY;
        c.rotate(37.0, Axis::Y);
        assert_mat_close(&((a * b) * c), &(a * (b * c)));
    }

    #[test]
    fn test_translate_additive() {
        let mut m = Mat4::IDENTITY;
        m.translate(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.at(3, 0), 1.0);
        assert_eq!(m.at(3, 1), 2.0);
        assert_eq!(m.at(3, 2), 3.0);
        // rest of the identity untouched
        assert_eq!(m.at(0, 0), 1.0);
        assert_eq!(m.at(1, 1), 1.0);
        assert_eq!(m.at(2, 2), 1.0);
        assert_eq!(m.at(3, 3), 1.0);
        assert_eq!(m.at(0, 1), 0.0);

        // additive, not a matrix product
        m.translate(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(m.at(3, 0), 2.0);
        assert_eq!(m.at(3, 1), 3.0);
        assert_eq!(m.at(3, 2), 4.0);
    }

    #[test]
    fn test_scale_diagonal() {
        let mut m = Mat4::IDENTITY;
        m.scale(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(m.at(0, 0), 2.0);
        assert_eq!(m.at(1, 1), 3.0);
        assert_eq!(m.at(2, 2), 4.0);
        assert_eq!(m.at(3, 3), 1.0);
    }

    #[test]
    fn test_rotate_z_maps_x_to_y() {
        let mut m = Mat4::IDENTITY;
        m.rotate(90.0, Axis::Z);
        let v = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_x_maps_y_to_z() {
        let mut m = Mat4::IDENTITY;
        m.rotate(90.0, Axis::X);
        let v = m * Vec4::new(0.0, 1.0, 0.0, 1.0);
        assert_abs_diff_eq!(v.y, 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.z, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_y_maps_z_to_x() {
        let mut m = Mat4::IDENTITY;
        m.rotate(90.0, Axis::Y);
        let v = m * Vec4::new(0.0, 0.0, 1.0, 1.0);
        assert_abs_diff_eq!(v.x, 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.z, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_applies_before_existing_transform() {
        // m starts as a translation; rotation multiplies on the right,
        // so points rotate first, then translate
        let mut m = Mat4::IDENTITY;
        m.translate(Vec3::new(10.0, 0.0, 0.0));
        m.rotate(90.0, Axis::Z);
        let v = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(v.x, 10.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_perspective_matches_glam() {
        let m = Mat4::perspective(45.0, 1920.0 / 1080.0, 0.1, 100.0).unwrap();
        let oracle = glam::Mat4::perspective_rh_gl(radians(45.0), 1920.0 / 1080.0, 0.1, 100.0);
        assert_mat_close(&m, &Mat4::from_glam(oracle));
    }

    #[test]
    fn test_perspective_rejects_bad_ranges() {
        assert!(Mat4::perspective(0.0, 1.0, 0.1, 100.0)
            .unwrap_err()
            .is_invalid_argument());
        assert!(Mat4::perspective(-45.0, 1.0, 0.1, 100.0).is_err());
        assert!(Mat4::perspective(45.0, 1.0, 100.0, 0.1).is_err());
        assert!(Mat4::perspective(45.0, 1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_look_at_matches_glam() {
        let eye = Vec3::new(0.0, 0.0, 3.0);
        let target = Vec3::new(0.5, -0.25, 0.0);
        let up = Vec3::Y;
        let m = Mat4::look_at(eye, target, up).unwrap();
        let oracle = glam::Mat4::look_at_rh(eye.to_glam(), target.to_glam(), up.to_glam());
        assert_mat_close(&m, &Mat4::from_glam(oracle));
    }

    #[test]
    fn test_look_at_origin_view() {
        // eye behind the origin looking forward: view moves world by -eye
        let m = Mat4::look_at(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y).unwrap();
        let p = m * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(p.z, -3.0, epsilon = EPSILON);
    }

    #[test]
    fn test_look_at_rejects_degenerate_up() {
        let err = Mat4::look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::Y).unwrap_err();
        assert!(err.is_invalid_argument());
        // eye == target has no view direction at all
        assert!(Mat4::look_at(Vec3::ONE, Vec3::ONE, Vec3::Y).is_err());
    }

    #[test]
    fn test_uniform_upload_layout() {
        let mut m = Mat4::IDENTITY;
        m.translate(Vec3::new(7.0, 8.0, 9.0));
        let flat = m.to_cols_array();
        // translation occupies offsets 12..15 in column-major storage
        assert_eq!(flat[12..15], [7.0, 8.0, 9.0]);
        let first = unsafe { *m.as_ptr() };
        assert_eq!(first, 1.0);
    }
}
