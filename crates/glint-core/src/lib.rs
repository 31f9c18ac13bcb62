//! # glint-core
//!
//! Shared error handling for the glint crates.
//!
//! The demo's failure surface is deliberately narrow: math operations can
//! only fail on precondition violations ([`Error::InvalidArgument`]), and
//! the OBJ loader can fail on malformed input ([`Error::Parse`]) or plain
//! I/O ([`Error::Io`]). There is no partial-failure state anywhere, so a
//! single flat enum covers the whole workspace.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

pub use error::*;
