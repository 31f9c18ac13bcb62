//! Error types for the glint crates.
//!
//! # Usage
//!
//! ```rust
//! use glint_core::{Error, Result};
//!
//! fn check_fov(fov: f32) -> Result<()> {
//!     if fov <= 0.0 {
//!         return Err(Error::invalid_argument(
//!             "perspective",
//!             format!("fov must be positive, got {fov}"),
//!         ));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `glint-math` - Precondition checks on `perspective`, `look_at`, axis
//!   selection
//! - `glint-obj` - OBJ parse and file errors
//! - `glint-scene` - Propagated view-matrix construction errors

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across the glint crates.
///
/// [`InvalidArgument`](Error::InvalidArgument) marks programmer errors
/// (contract violations), not runtime conditions to recover from. Callers
/// are expected to propagate these immediately rather than degrade.
#[derive(Debug, Error)]
pub enum Error {
    /// A precondition violation: degenerate field of view or clip range in
    /// `perspective`, a non-one-hot rotation axis, or an `up` vector
    /// parallel to the view direction in `look_at`.
    #[error("invalid argument to {op}: {reason}")]
    InvalidArgument {
        /// Operation that rejected its input
        op: &'static str,
        /// What was wrong with the input
        reason: String,
    },

    /// A line of OBJ input did not match the supported grammar.
    #[error("parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number in the source text
        line: usize,
        /// What failed to parse
        reason: String,
    },

    /// I/O error while reading a mesh file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(op: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            op,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Parse`] error.
    #[inline]
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a precondition violation.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` if this is a parse error.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
