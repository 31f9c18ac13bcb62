//! # glint-obj
//!
//! A naive OBJ loader for the demo's constrained mesh grammar: position
//! lines (`v x y z`) and triangle faces (`f i j k`). Texture coordinates,
//! normals, polygonal faces and the `i/j/k` index syntax are all
//! unsupported and rejected with a line-numbered parse error; any line
//! that starts with something other than `v` or `f` is skipped.
//!
//! Indices are stored exactly as written in the file. OBJ counts from 1,
//! so callers indexing into [`Mesh::vertices`] subtract 1 themselves —
//! kept this way because the demo uploads [`Mesh::indices`] to the GPU
//! untouched.
//!
//! # Usage
//!
//! ```rust
//! let src = "\
//! v 0.0 0.0 0.0
//! v 1.0 0.0 0.0
//! v 0.0 1.0 0.0
//! f 1 2 3
//! ";
//! let mesh = glint_obj::parse_str(src).unwrap();
//! assert_eq!(mesh.vertices.len(), 3);
//! assert_eq!(mesh.indices, vec![1, 2, 3]);
//! ```

use glint_core::{Error, Result};
use glint_math::Vec3;
use std::fs;
use std::path::Path;

/// A triangle as three vertex indices, as written in the file (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// First vertex index
    pub a: u32,
    /// Second vertex index
    pub b: u32,
    /// Third vertex index
    pub c: u32,
}

/// A parsed mesh: positions plus triangle indices.
///
/// `vertices` are padded [`Vec3`]s (16-byte stride — do not memcpy them
/// assuming 12 bytes). `indices` is `faces` flattened in file order, ready
/// for an index buffer.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions in file order.
    pub vertices: Vec<Vec3>,
    /// Triangle faces in file order.
    pub faces: Vec<Face>,
    /// Flattened face indices, as written in the file.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Axis-aligned bounds of the vertex positions, or `None` for an
    /// empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices[1..] {
            min = Vec3::new(min.x.min(v.x), min.y.min(v.y), min.z.min(v.z));
            max = Vec3::new(max.x.max(v.x), max.y.max(v.y), max.z.max(v.z));
        }
        Some((min, max))
    }
}

/// Parses OBJ text.
///
/// # Errors
///
/// [`Error::Parse`] with the offending 1-based line number when a `v` or
/// `f` line does not match the supported grammar.
pub fn parse_str(src: &str) -> Result<Mesh> {
    let mut mesh = Mesh::default();
    for (idx, line) in src.lines().enumerate() {
        let line_no = idx + 1;
        if line.starts_with('v') {
            mesh.vertices.push(parse_vertex(line, line_no)?);
        } else if line.starts_with('f') {
            let face = parse_face(line, line_no)?;
            mesh.faces.push(face);
            mesh.indices.extend([face.a, face.b, face.c]);
        }
        // anything else (comments, object names, blank lines) is skipped
    }
    Ok(mesh)
}

/// Reads and parses an OBJ file.
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be read, otherwise as [`parse_str`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Mesh> {
    let src = fs::read_to_string(path)?;
    parse_str(&src)
}

fn parse_vertex(line: &str, line_no: usize) -> Result<Vec3> {
    let mut tokens = line.split_whitespace();
    // "vt"/"vn" land here too and fail the tag check: unsupported on purpose
    if tokens.next() != Some("v") {
        return Err(Error::parse(line_no, "unsupported vertex attribute line"));
    }
    let mut xyz = [0.0f32; 3];
    for slot in &mut xyz {
        let token = tokens
            .next()
            .ok_or_else(|| Error::parse(line_no, "expected 3 vertex components"))?;
        *slot = token
            .parse()
            .map_err(|_| Error::parse(line_no, format!("bad vertex component {token:?}")))?;
    }
    Ok(Vec3::from_array(xyz))
}

fn parse_face(line: &str, line_no: usize) -> Result<Face> {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some("f") {
        return Err(Error::parse(line_no, "unsupported face line"));
    }
    let mut ijk = [0u32; 3];
    for slot in &mut ijk {
        let token = tokens
            .next()
            .ok_or_else(|| Error::parse(line_no, "expected 3 face indices"))?;
        *slot = token
            .parse()
            .map_err(|_| Error::parse(line_no, format!("bad face index {token:?}")))?;
    }
    Ok(Face {
        a: ijk[0],
        b: ijk[1],
        c: ijk[2],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const QUAD: &str = "\
# a unit quad
o quad
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
f 1 2 3
f 1 3 4
";

    #[test]
    fn test_parse_quad() {
        let mesh = parse_str(QUAD).unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.faces.len(), 2);
        assert_eq!(mesh.indices, vec![1, 2, 3, 1, 3, 4]);
        assert_eq!(mesh.vertices[2], Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_indices_kept_one_based() {
        let mesh = parse_str("v 0 0 0\nv 1 1 1\nv 2 2 2\nf 1 2 3\n").unwrap();
        // as written in the file, no silent re-basing
        assert_eq!(mesh.faces[0], Face { a: 1, b: 2, c: 3 });
    }

    #[test]
    fn test_unknown_lines_skipped() {
        let mesh = parse_str("# comment\no thing\ns off\nusemtl none\n").unwrap();
        assert!(mesh.vertices.is_empty());
        assert!(mesh.faces.is_empty());
    }

    #[test]
    fn test_bounds() {
        let mesh = parse_str(QUAD).unwrap();
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Vec3::ZERO);
        assert_eq!(max, Vec3::new(1.0, 1.0, 0.0));
        assert!(Mesh::default().bounds().is_none());
    }

    #[test]
    fn test_rejects_normals_and_texcoords() {
        let err = parse_str("v 0 0 0\nvn 0 1 0\n").unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("line 2"));
        assert!(parse_str("vt 0.5 0.5\n").is_err());
    }

    #[test]
    fn test_rejects_malformed_lines() {
        assert!(parse_str("v 1.0 2.0\n").is_err());
        assert!(parse_str("v 1.0 2.0 banana\n").is_err());
        assert!(parse_str("f 1 2\n").is_err());
        // slash-indexed faces are outside the subset
        let err = parse_str("f 1/1/1 2/2/2 3/3/3\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_parse_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(QUAD.as_bytes()).unwrap();
        let mesh = parse_file(file.path()).unwrap();
        assert_eq!(mesh.vertices.len(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_file("/no/such/mesh.obj").unwrap_err();
        assert!(err.is_io_error());
    }
}
