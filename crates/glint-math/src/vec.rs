//! Vector types for the demo's math kernel.
//!
//! All vector types are `#[repr(C, align(16))]` so a value occupies exactly
//! one 128-bit SIMD lane: [`Vec2`] and [`Vec3`] are padded out to 16 bytes
//! by their alignment. This is a layout contract, not an implementation
//! detail — anything serializing these types must use `size_of`, never a
//! hand-counted component size.
//!
//! # Usage
//!
//! ```rust
//! use glint_math::Vec3;
//!
//! let front = Vec3::new(0.0, 0.0, -1.0);
//! let up = Vec3::Y;
//! let right = front.cross(up).normalise();
//! assert!((right.length() - 1.0).abs() < glint_math::EPSILON);
//! ```

use crate::simd;
use glint_core::{Error, Result};
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// A 2D vector, padded to a 16-byte lane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C, align(16))]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Converts to an array of the live components.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

/// A 3D vector, padded to a 16-byte lane.
///
/// The padding lane means `size_of::<Vec3>() == 16`, not 12. Downstream
/// code copying `Vec3` arrays into GPU buffers must account for the
/// 16-byte stride.
///
/// # Example
///
/// ```rust
/// use glint_math::Vec3;
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(v.x, 1.0);
/// assert_eq!(v[2], 3.0);
/// assert_eq!(std::mem::size_of::<Vec3>(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C, align(16))]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array of the live components.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product with another vector.
    ///
    /// NaN and infinity propagate per ordinary IEEE-754 rules.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        simd::dot3(self.to_array(), other.to_array())
    }

    /// Cross product.
    ///
    /// Anticommutative: `a.cross(b) == b.cross(a).scale(-1.0)`. Parallel
    /// inputs yield the zero vector (exactly for exact inputs, within
    /// [`EPSILON`](crate::EPSILON) otherwise).
    ///
    /// ```rust
    /// use glint_math::Vec3;
    ///
    /// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::from_array(simd::cross3(self.to_array(), other.to_array()))
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Normalises the vector to unit length.
    ///
    /// The zero vector maps to the zero vector — a deliberate guard
    /// against NaN propagation, relied on by callers normalising movement
    /// directions that may legitimately be zero. Every other input yields
    /// unit magnitude within [`EPSILON`](crate::EPSILON).
    ///
    /// ```rust
    /// use glint_math::Vec3;
    ///
    /// assert_eq!(Vec3::ZERO.normalise(), Vec3::ZERO);
    /// ```
    #[inline]
    pub fn normalise(self) -> Self {
        Self::from_array(simd::normalise3(self.to_array()))
    }

    /// Scales every component by `s`. Equivalent to `self * s`.
    #[inline]
    pub fn scale(self, s: f32) -> Self {
        self * s
    }

    /// Converts to a glam vector.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from a glam vector.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// A 4D vector occupying exactly one 16-byte lane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C, align(16))]
pub struct Vec4 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W component
    pub w: f32,
}

impl Vec4 {
    /// Zero vector (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        simd::dot4(self.to_array(), other.to_array())
    }

    /// Widens a [`Vec3`] with the given `w` component.
    #[inline]
    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Truncates to a [`Vec3`], dropping `w`.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Selects one of the three cardinal rotation axes.
///
/// This is the validated form of the one-hot [`Vec3i`] selector the demo
/// originally used. Arbitrary-axis and quaternion rotation are out of
/// scope; a single cardinal axis per [`Mat4::rotate`](crate::Mat4::rotate)
/// call is a known limitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Rotation about +X.
    X,
    /// Rotation about +Y.
    Y,
    /// Rotation about +Z.
    Z,
}

/// A one-hot integer triple selecting a rotation axis.
///
/// Exactly one component must be 1 and the rest 0; anything else is
/// rejected when converting to [`Axis`]. Kept as the wire form of the axis
/// selector so call sites mirror the original demo's API.
///
/// # Example
///
/// ```rust
/// use glint_math::{Axis, Vec3i};
///
/// assert_eq!(Vec3i::new(0, 1, 0).axis().unwrap(), Axis::Y);
/// assert!(Vec3i::new(1, 1, 0).axis().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C, align(16))]
pub struct Vec3i {
    /// X selector
    pub x: i32,
    /// Y selector
    pub y: i32,
    /// Z selector
    pub z: i32,
}

impl Vec3i {
    /// Creates a new selector.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Validates the one-hot invariant and returns the selected axis.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the triple is not one-hot.
    pub fn axis(self) -> Result<Axis> {
        match (self.x, self.y, self.z) {
            (1, 0, 0) => Ok(Axis::X),
            (0, 1, 0) => Ok(Axis::Y),
            (0, 0, 1) => Ok(Axis::Z),
            _ => Err(Error::invalid_argument(
                "rotate",
                format!(
                    "axis selector must be one-hot, got ({}, {}, {})",
                    self.x, self.y, self.z
                ),
            )),
        }
    }
}

impl TryFrom<Vec3i> for Axis {
    type Error = Error;

    #[inline]
    fn try_from(v: Vec3i) -> Result<Axis> {
        v.axis()
    }
}

// Indexing
impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

// Vec3 + Vec3
impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Vec3 - Vec3
impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Vec3 * f32
impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// f32 * Vec3
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

// Vec4 + Vec4
impl Add for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

// Vec4 - Vec4
impl Sub for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

// Vec4 * f32
impl Mul<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> glam::Vec3 {
        v.to_glam()
    }
}
