//! SIMD fast paths for the math kernel.
//!
//! Implemented with the [`wide`] crate's portable 128-bit `f32x4` lanes on
//! stable Rust. Every function here has a `*_scalar` reference twin with
//! identical semantics — the SIMD path is an optimization, never a
//! behavioral change, and the tests in this module hold the two to
//! epsilon-bounded agreement (and to exact agreement on the defined edge
//! cases, such as normalising the zero vector).
//!
//! The kernel's public types ([`Vec3`](crate::Vec3), [`Vec4`](crate::Vec4),
//! [`Mat4`](crate::Mat4)) route through the lane versions; the scalar twins
//! double as the portable fallback for anyone auditing the numerics.
//!
//! # Example
//!
//! ```rust
//! use glint_math::simd;
//!
//! let z = simd::cross3([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
//! assert_eq!(z, [0.0, 0.0, 1.0]);
//! ```

use wide::f32x4;

/// Dot product of two 3-component vectors, padded into one lane each.
#[inline]
pub fn dot3(a: [f32; 3], b: [f32; 3]) -> f32 {
    let va = f32x4::from([a[0], a[1], a[2], 0.0]);
    let vb = f32x4::from([b[0], b[1], b[2], 0.0]);
    (va * vb).reduce_add()
}

/// Scalar reference for [`dot3`].
#[inline]
pub fn dot3_scalar(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Dot product of two 4-component vectors.
#[inline]
pub fn dot4(a: [f32; 4], b: [f32; 4]) -> f32 {
    (f32x4::from(a) * f32x4::from(b)).reduce_add()
}

/// Scalar reference for [`dot4`].
#[inline]
pub fn dot4_scalar(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

/// 3D cross product.
///
/// Uses the yzx-shuffle formulation: with `a' = (a.y, a.z, a.x)` and
/// `b' = (b.y, b.z, b.x)`, the lane `a * b' - a' * b` holds the result
/// components in (z, x, y) order, so one final shuffle restores (x, y, z).
#[inline]
pub fn cross3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    let va = f32x4::from([a[0], a[1], a[2], 0.0]);
    let vb = f32x4::from([b[0], b[1], b[2], 0.0]);
    let va_yzx = f32x4::from([a[1], a[2], a[0], 0.0]);
    let vb_yzx = f32x4::from([b[1], b[2], b[0], 0.0]);
    let zxy = (va * vb_yzx - va_yzx * vb).to_array();
    [zxy[1], zxy[2], zxy[0]]
}

/// Scalar reference for [`cross3`].
#[inline]
pub fn cross3_scalar(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Normalises a 3-component vector.
///
/// The zero vector returns the zero vector — the division-by-zero guard is
/// part of the operation's contract, in the SIMD path and the scalar path
/// alike.
#[inline]
pub fn normalise3(v: [f32; 3]) -> [f32; 3] {
    if v[0] == 0.0 && v[1] == 0.0 && v[2] == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let lane = f32x4::from([v[0], v[1], v[2], 0.0]);
    let len = (lane * lane).reduce_add().sqrt();
    let out = (lane / f32x4::splat(len)).to_array();
    [out[0], out[1], out[2]]
}

/// Scalar reference for [`normalise3`].
#[inline]
pub fn normalise3_scalar(v: [f32; 3]) -> [f32; 3] {
    if v[0] == 0.0 && v[1] == 0.0 && v[2] == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let len = dot3_scalar(v, v).sqrt();
    [v[0] / len, v[1] / len, v[2] / len]
}

/// Multiplies two column-major 4x4 matrices: conventional `a * b`.
///
/// Each output column j is a linear combination of `a`'s columns weighted
/// by column j of `b` — four lane multiply-adds per column.
#[inline]
pub fn mat4_mul(a: &[f32; 16], b: &[f32; 16]) -> [f32; 16] {
    let a0 = f32x4::from([a[0], a[1], a[2], a[3]]);
    let a1 = f32x4::from([a[4], a[5], a[6], a[7]]);
    let a2 = f32x4::from([a[8], a[9], a[10], a[11]]);
    let a3 = f32x4::from([a[12], a[13], a[14], a[15]]);

    let mut out = [0.0f32; 16];
    for j in 0..4 {
        let col = a0 * f32x4::splat(b[j * 4])
            + a1 * f32x4::splat(b[j * 4 + 1])
            + a2 * f32x4::splat(b[j * 4 + 2])
            + a3 * f32x4::splat(b[j * 4 + 3]);
        out[j * 4..j * 4 + 4].copy_from_slice(&col.to_array());
    }
    out
}

/// Scalar reference for [`mat4_mul`].
pub fn mat4_mul_scalar(a: &[f32; 16], b: &[f32; 16]) -> [f32; 16] {
    let mut out = [0.0f32; 16];
    for j in 0..4 {
        for r in 0..4 {
            let mut acc = 0.0f32;
            for k in 0..4 {
                acc += a[k * 4 + r] * b[j * 4 + k];
            }
            out[j * 4 + r] = acc;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    fn assert_close(a: &[f32], b: &[f32]) {
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() <= EPSILON, "{x} vs {y}");
        }
    }

    #[test]
    fn test_dot_agrees_with_scalar() {
        let a3 = [-7.23, -0.176, -23.31];
        let b3 = [-5.12, -6.21, -97.09];
        assert!((dot3(a3, b3) - dot3_scalar(a3, b3)).abs() <= EPSILON);

        let a4 = [3.14, 2.17, -1.31, 9.99];
        let b4 = [1.2, 5.77, 3.09, 1.06];
        assert!((dot4(a4, b4) - dot4_scalar(a4, b4)).abs() <= EPSILON);
    }

    #[test]
    fn test_cross_agrees_with_scalar() {
        let cases = [
            ([5.0, 2.0, -2.0], [1.0, 10.0, 19.0]),
            ([1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            ([0.0, 0.0, 0.0], [44.2, 2.12, -23.2]),
        ];
        for (a, b) in cases {
            assert_close(&cross3(a, b), &cross3_scalar(a, b));
        }
    }

    #[test]
    fn test_normalise_agrees_with_scalar() {
        let cases = [
            [5.4, 2.33, 28.33],
            [-12.0, -3.0, 1.0],
            [0.0, 0.0, 1e-4],
        ];
        for v in cases {
            assert_close(&normalise3(v), &normalise3_scalar(v));
        }
    }

    #[test]
    fn test_normalise_zero_exact_in_both_paths() {
        assert_eq!(normalise3([0.0; 3]), [0.0; 3]);
        assert_eq!(normalise3_scalar([0.0; 3]), [0.0; 3]);
    }

    #[test]
    fn test_mat4_mul_agrees_with_scalar() {
        let mut a = [0.0f32; 16];
        let mut b = [0.0f32; 16];
        for i in 0..16 {
            a[i] = (i as f32) * 0.75 - 4.0;
            b[i] = 16.0 - (i as f32) * 1.25;
        }
        assert_close(&mat4_mul(&a, &b), &mat4_mul_scalar(&a, &b));
    }

    #[test]
    fn test_mat4_mul_identity() {
        let mut id = [0.0f32; 16];
        for c in 0..4 {
            id[c * 4 + c] = 1.0;
        }
        let mut m = [0.0f32; 16];
        for i in 0..16 {
            m[i] = i as f32 + 0.5;
        }
        assert_eq!(mat4_mul(&id, &m), m);
        assert_eq!(mat4_mul(&m, &id), m);
    }
}
