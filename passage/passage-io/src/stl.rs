//! STL (Stereolithography) file output.
//!
//! Supports both binary and ASCII formats.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use passage_types::{Face, Point3, PolygonMesh};

use crate::error::IoResult;

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Save a mesh to an STL file.
///
/// Quads are written as two triangles sharing the quad's first vertex, so
/// the winding of both halves matches the quad's.
///
/// # Arguments
///
/// * `mesh` - The sanitized face list to save
/// * `path` - Output file path
/// * `binary` - If true, save as binary STL; if false, save as ASCII
///
/// # Errors
///
/// Returns an error if the file cannot be written.
///
/// # Example
///
/// ```no_run
/// use passage_io::save_stl;
/// use passage_types::PolygonMesh;
///
/// let mesh = PolygonMesh::new();
/// save_stl(&mesh, "rotor.stl", true).unwrap();
/// ```
pub fn save_stl<P: AsRef<Path>>(mesh: &PolygonMesh, path: P, binary: bool) -> IoResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    if binary {
        save_stl_binary(mesh, writer)
    } else {
        save_stl_ascii(mesh, writer)
    }
}

/// Split a face into triangles, preserving winding.
fn triangles(face: &Face) -> Vec<[Point3<f64>; 3]> {
    match *face {
        Face::Triangle(v) => vec![v],
        Face::Quad([a, b, c, d]) => vec![[a, b, c], [a, c, d]],
    }
}

/// Face normal from the cross product, zero for degenerate triangles.
fn normal(tri: &[Point3<f64>; 3]) -> (f64, f64, f64) {
    let e1 = tri[1] - tri[0];
    let e2 = tri[2] - tri[0];
    let n = e1.cross(&e2);
    let len = n.norm();
    if len > f64::EPSILON {
        (n.x / len, n.y / len, n.z / len)
    } else {
        (0.0, 0.0, 0.0)
    }
}

/// Save mesh as binary STL.
fn save_stl_binary<W: Write>(mesh: &PolygonMesh, mut writer: W) -> IoResult<()> {
    // 80-byte header, padded with spaces
    let mut header = [b' '; HEADER_SIZE];
    let text = b"Binary STL generated by passage-io";
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;

    #[allow(clippy::cast_possible_truncation)]
    // Truncation: face counts beyond u32 range are unsupported by STL
    let triangle_count = mesh.triangle_count() as u32;
    writer.write_all(&triangle_count.to_le_bytes())?;

    for face in &mesh.faces {
        for tri in triangles(face) {
            let (nx, ny, nz) = normal(&tri);
            write_f32_triplet(&mut writer, nx, ny, nz)?;
            for v in tri {
                write_f32_triplet(&mut writer, v.x, v.y, v.z)?;
            }
            writer.write_all(&0u16.to_le_bytes())?;
        }
    }

    Ok(())
}

/// Write three f64s as little-endian f32s.
fn write_f32_triplet<W: Write>(writer: &mut W, x: f64, y: f64, z: f64) -> IoResult<()> {
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: f64 to f32 is intentional for STL format
    {
        writer.write_all(&(x as f32).to_le_bytes())?;
        writer.write_all(&(y as f32).to_le_bytes())?;
        writer.write_all(&(z as f32).to_le_bytes())?;
    }
    Ok(())
}

/// Save mesh as ASCII STL.
fn save_stl_ascii<W: Write>(mesh: &PolygonMesh, mut writer: W) -> IoResult<()> {
    writeln!(writer, "solid passage")?;

    for face in &mesh.faces {
        for tri in triangles(face) {
            let (nx, ny, nz) = normal(&tri);
            writeln!(writer, "  facet normal {nx:.6e} {ny:.6e} {nz:.6e}")?;
            writeln!(writer, "    outer loop")?;
            for v in tri {
                writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
            }
            writeln!(writer, "    endloop")?;
            writeln!(writer, "  endfacet")?;
        }
    }

    writeln!(writer, "endsolid passage")?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_mesh() -> PolygonMesh {
        let mut mesh = PolygonMesh::new();
        mesh.push(Face::Triangle([
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]));
        mesh.push(Face::Quad([
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ]));
        mesh
    }

    #[test]
    fn binary_layout_is_exact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.stl");
        let mesh = sample_mesh();
        save_stl(&mesh, &path, true).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // Header + count + 3 triangles of 50 bytes (the quad splits in two)
        assert_eq!(bytes.len(), 84 + 3 * 50);
        let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]);
        assert_eq!(count, 3);
    }

    #[test]
    fn ascii_lists_every_facet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.stl");
        save_stl(&sample_mesh(), &path, false).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("solid passage"));
        assert!(text.trim_end().ends_with("endsolid passage"));
        assert_eq!(text.matches("facet normal").count(), 3);
        assert_eq!(text.matches("vertex").count(), 9);
    }

    #[test]
    fn quad_halves_share_winding() {
        let quad = Face::Quad([
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]);
        let tris = triangles(&quad);
        assert_eq!(tris.len(), 2);
        // Both halves face +z for a counter-clockwise quad
        assert!(normal(&tris[0]).2 > 0.0);
        assert!(normal(&tris[1]).2 > 0.0);
    }

    #[test]
    fn empty_mesh_writes_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.stl");
        save_stl(&PolygonMesh::new(), &path, true).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 84);
    }
}
