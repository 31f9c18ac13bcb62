//! Command implementations.

pub mod mesh;
pub mod project;
pub mod walk;

use glint_math::Mat4;

/// Prints a matrix row by row, the way it reads in math notation.
pub fn print_matrix(m: &Mat4) {
    for r in 0..4 {
        let row = m.row(r).to_array();
        println!(
            "  [{:>10.4} {:>10.4} {:>10.4} {:>10.4}]",
            row[0], row[1], row[2], row[3]
        );
    }
}
