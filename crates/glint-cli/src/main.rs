//! glint - headless inspection CLI for the demo crates
//!
//! Exercises the math kernel, the OBJ loader and the camera without a
//! window or GL context: print a projection matrix, inspect a mesh, or
//! replay a scripted camera walk frame by frame.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "glint")]
#[command(author, version, about = "Headless inspection tool for the glint demo")]
#[command(long_about = "
Inspect the glint demo's math and assets from the terminal.

Examples:
  glint mesh cube.obj                   # Vertex/face counts and bounds
  glint project --fov 45 --aspect 1.78  # Print the projection matrix
  glint walk --frames 60 --dt 0.016     # Replay a scripted camera walk
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect an OBJ mesh
    #[command(visible_alias = "m")]
    Mesh(MeshArgs),

    /// Print a perspective projection matrix
    #[command(visible_alias = "p")]
    Project(ProjectArgs),

    /// Replay a scripted first-person camera walk
    #[command(visible_alias = "w")]
    Walk(WalkArgs),
}

#[derive(Args)]
struct MeshArgs {
    /// OBJ files to inspect
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Args)]
struct ProjectArgs {
    /// Vertical field of view in degrees
    #[arg(long, default_value = "45.0")]
    fov: f32,

    /// Width / height aspect ratio
    #[arg(long, default_value = "1.7777778")]
    aspect: f32,

    /// Near clip plane
    #[arg(long, default_value = "0.1")]
    near: f32,

    /// Far clip plane
    #[arg(long, default_value = "100.0")]
    far: f32,
}

#[derive(Args)]
struct WalkArgs {
    /// Number of frames to simulate
    #[arg(long, default_value = "60")]
    frames: u32,

    /// Fixed timestep per frame in seconds
    #[arg(long, default_value = "0.016")]
    dt: f32,

    /// Yaw delta per frame in degrees
    #[arg(long, default_value = "0.0")]
    yaw: f32,

    /// Pitch delta per frame in degrees
    #[arg(long, default_value = "0.0")]
    pitch: f32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    match cli.command {
        Commands::Mesh(args) => commands::mesh::run(args, cli.verbose),
        Commands::Project(args) => commands::project::run(args),
        Commands::Walk(args) => commands::walk::run(args),
    }
}
