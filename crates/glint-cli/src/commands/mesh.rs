//! Mesh inspection command.

use crate::MeshArgs;
use anyhow::{Context, Result};
use tracing::debug;

/// Runs the mesh command, printing counts and bounds per file.
pub fn run(args: MeshArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        debug!(path = %path.display(), "loading mesh");
        let mesh = glint_obj::parse_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?;

        println!("{}", path.display());
        println!("  Vertices: {}", mesh.vertices.len());
        println!("  Faces:    {}", mesh.faces.len());
        println!("  Indices:  {}", mesh.indices.len());
        if let Some((min, max)) = mesh.bounds() {
            println!(
                "  Bounds:   ({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})",
                min.x, min.y, min.z, max.x, max.y, max.z
            );
        }
        if verbose {
            for (i, v) in mesh.vertices.iter().enumerate() {
                println!("  v[{i}] = ({:.4}, {:.4}, {:.4})", v.x, v.y, v.z);
            }
        }
        if args.input.len() > 1 {
            println!();
        }
    }
    Ok(())
}
