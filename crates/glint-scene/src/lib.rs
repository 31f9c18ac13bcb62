//! # glint-scene
//!
//! Per-frame state for the glint demo: a first-person [`Camera`], the
//! [`InputState`] key tracker it reads, and a [`FrameClock`] for deltas.
//!
//! Nothing here owns a window or a GL context. The platform layer feeds
//! key transitions and mouse deltas in, and reads a view matrix back out;
//! all state is explicit and passed by reference, never global.
//!
//! # Usage
//!
//! ```rust
//! use glint_math::Vec3;
//! use glint_scene::{Camera, InputState, Key};
//!
//! let mut input = InputState::new();
//! let mut camera = Camera::new(Vec3::new(0.0, 0.0, -3.0));
//!
//! // one frame: W held, mouse still
//! input.begin_frame();
//! input.set_key(Key::W, true);
//! input.begin_frame();
//! camera.update(&input, 0.0, 0.0, 1.0 / 60.0).unwrap();
//! ```

mod camera;
mod clock;
mod input;

pub use camera::*;
pub use clock::*;
pub use input::*;
