//! Projection matrix command.

use crate::ProjectArgs;
use anyhow::Result;
use glint_math::Mat4;

/// Runs the project command, printing the perspective matrix.
pub fn run(args: ProjectArgs) -> Result<()> {
    let m = Mat4::perspective(args.fov, args.aspect, args.near, args.far)?;
    println!(
        "perspective(fov={}, aspect={}, near={}, far={}):",
        args.fov, args.aspect, args.near, args.far
    );
    super::print_matrix(&m);
    Ok(())
}
