//! Integration tests for the glint crates.
//!
//! The math cases here are ports of the demo's original standalone test
//! programs (cross, dot, matrix multiply, normalise, translate), kept with
//! their literal expected values; the rest verify that the crates compose:
//! camera over math, meshes over math, and the uniform-upload layout
//! contract end to end.
