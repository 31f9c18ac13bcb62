//! First-person camera with yaw/pitch Euler angles.

use crate::{InputState, Key};
use glint_core::Result;
use glint_math::{radians, Mat4, Vec3};

/// Units per second of WASD movement.
const SPEED: f32 = 2.0;

/// Pitch is clamped short of straight up/down so the view basis never
/// degenerates against the world up vector.
const PITCH_LIMIT: f32 = 89.0;

/// A first-person camera driven by key state and mouse deltas.
///
/// Yaw starts at -90 degrees so the camera initially faces down -Z (a yaw
/// of zero would look along +X). Mouse deltas arrive pre-scaled by the
/// caller's sensitivity; the camera just accumulates them.
///
/// # Example
///
/// ```rust
/// use glint_math::Vec3;
/// use glint_scene::{Camera, InputState};
///
/// let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
/// let input = InputState::new();
/// camera.update(&input, 0.0, 0.0, 0.016).unwrap();
/// let view = camera.view();
/// ```
#[derive(Debug, Clone)]
pub struct Camera {
    view: Mat4,
    up: Vec3,
    front: Vec3,
    pos: Vec3,
    yaw: f32,
    pitch: f32,
    speed: f32,
}

impl Camera {
    /// Creates a camera at `position` facing down -Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            view: Mat4::IDENTITY,
            up: Vec3::Y,
            front: Vec3::new(0.0, 0.0, -1.0),
            pos: position,
            yaw: -90.0,
            pitch: 0.0,
            speed: SPEED,
        }
    }

    /// The view matrix from the most recent [`update`](Camera::update).
    #[inline]
    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    /// Current world position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.pos
    }

    /// Current look direction (unit length after the first update).
    #[inline]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Advances the camera one frame.
    ///
    /// Applies WASD movement scaled by `dt`, accumulates the mouse deltas
    /// into yaw and pitch (pitch clamped to ±89 degrees), rebuilds the
    /// look direction, and refreshes the view matrix.
    pub fn update(
        &mut self,
        input: &InputState,
        mouse_dx: f32,
        mouse_dy: f32,
        dt: f32,
    ) -> Result<()> {
        let step = self.speed * dt;
        self.handle_keys(input, step);

        self.yaw += mouse_dx;
        self.pitch = (self.pitch + mouse_dy).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let dir = Vec3::new(
            radians(self.yaw).cos() * radians(self.pitch).cos(),
            radians(self.pitch).sin(),
            radians(self.yaw).sin() * radians(self.pitch).cos(),
        );
        self.front = dir.normalise();
        // pitch clamp keeps front clear of up, so this cannot reject
        self.view = Mat4::look_at(self.pos, self.pos + self.front, self.up)?;
        Ok(())
    }

    fn handle_keys(&mut self, input: &InputState, step: f32) {
        if input.held(Key::W) {
            self.pos = self.pos + self.front.scale(step);
        }
        if input.held(Key::S) {
            self.pos = self.pos - self.front.scale(step);
        }
        let strafe = self.front.cross(self.up).normalise();
        if input.held(Key::A) {
            self.pos = self.pos - strafe.scale(step);
        }
        if input.held(Key::D) {
            self.pos = self.pos + strafe.scale(step);
        }
    }
}
