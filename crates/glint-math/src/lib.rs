//! # glint-math
//!
//! The math kernel for the glint demo: vectors, 4x4 matrices, and the view
//! and projection constructions every other part of the demo calls into.
//!
//! # Conventions
//!
//! - [`Mat4`] stores 16 floats in **column-major** order: element
//!   (column `c`, row `r`) sits at linear offset `c * 4 + r`. A pointer to
//!   this storage is directly valid as a `mat4` uniform for a
//!   column-major-expecting graphics API, transpose flag false.
//! - `a * b` is conventional matrix multiplication: `b` is applied first,
//!   then `a`. Transform chains therefore grow by multiplying new
//!   transforms on the **left** of the accumulated matrix.
//! - Vector types are 16 bytes in size and alignment so they can be loaded
//!   straight into 128-bit SIMD lanes; `Vec3` carries an invisible padding
//!   lane. Code copying `Vec3` arrays into vertex buffers must not assume
//!   a 12-byte stride.
//!
//! # Usage
//!
//! ```rust
//! use glint_math::{Mat4, Vec3};
//!
//! let projection = Mat4::perspective(45.0, 16.0 / 9.0, 0.1, 100.0).unwrap();
//! let view = Mat4::look_at(
//!     Vec3::new(0.0, 0.0, 3.0),
//!     Vec3::ZERO,
//!     Vec3::Y,
//! ).unwrap();
//!
//! let mut model = Mat4::IDENTITY;
//! model.translate(Vec3::new(1.0, 2.0, 3.0));
//! ```
//!
//! # Dependencies
//!
//! - [`wide`] - Portable 128-bit SIMD lanes for the fast paths
//! - [`glam`] - Interop conversions (also serves as a test oracle)
//! - [`glint_core`] - `InvalidArgument` precondition errors
//!
//! # Used By
//!
//! - `glint-scene` - Camera view-matrix updates
//! - `glint-obj` - Mesh vertex storage

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat4;
mod vec;
pub mod simd;

pub use mat4::*;
pub use vec::*;

/// Shared tolerance for approximate float comparisons.
///
/// Every epsilon-bounded check in the demo (tests included) uses this one
/// constant so that "close enough" means the same thing everywhere.
pub const EPSILON: f32 = 1e-3;

/// Archimedes' constant, single precision.
pub const PI: f32 = std::f32::consts::PI;

/// Converts degrees to radians.
///
/// ```rust
/// use glint_math::{radians, PI};
///
/// assert!((radians(180.0) - PI).abs() < 1e-6);
/// ```
#[inline]
pub const fn radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}
