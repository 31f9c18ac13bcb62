//! Scripted camera walk command.

use crate::WalkArgs;
use anyhow::Result;
use glint_math::Vec3;
use glint_scene::{Camera, InputState, Key};
use tracing::debug;

/// Runs the walk command: holds W for the requested number of fixed-step
/// frames while applying per-frame mouse deltas, then prints where the
/// camera ended up and its final view matrix.
pub fn run(args: WalkArgs) -> Result<()> {
    let mut input = InputState::new();
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));

    for frame in 0..args.frames {
        input.begin_frame();
        input.set_key(Key::W, true);
        camera.update(&input, args.yaw, args.pitch, args.dt)?;
        debug!(
            frame,
            x = camera.position().x,
            y = camera.position().y,
            z = camera.position().z,
            "stepped"
        );
    }

    let pos = camera.position();
    let front = camera.front();
    println!("after {} frames (dt = {}):", args.frames, args.dt);
    println!("  position: ({:.4}, {:.4}, {:.4})", pos.x, pos.y, pos.z);
    println!("  front:    ({:.4}, {:.4}, {:.4})", front.x, front.y, front.z);
    println!("  view:");
    super::print_matrix(camera.view());
    Ok(())
}
