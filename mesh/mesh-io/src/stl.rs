//! STL (Stereolithography) file format support.
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
//!     UINT16    – Attribute byte count
//! end
//! ```
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//! endsolid name
//! ```
//!
//! Binary files whose header happens to start with `solid` are common. Such a
//! file is treated as binary whenever its length matches the face count in
//! the header. When the length does not match (trailing padding is common),
//! the ASCII parse is tried first and the binary parse is used if ASCII
//! yields no facets while the body holds every declared triangle.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use mesh_types::{IndexedMesh, MeshTopology, Point3, Vector3, Vertex};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle record in binary STL.
const TRIANGLE_SIZE: usize = 50;

/// Name written after `solid` / `endsolid` in ASCII output.
const SOLID_NAME: &str = "keepsake";

/// Load a mesh from an STL file, detecting ASCII vs binary.
///
/// Every facet becomes three fresh vertices; nothing is welded.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist
/// - [`IoError::InvalidHeader`] / [`IoError::InvalidFaceCount`] for truncated binary files
/// - [`IoError::InvalidContent`] / [`IoError::ParseFloat`] for malformed ASCII files
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    let mesh = parse_stl(&bytes)?;

    debug!(
        path = %path.display(),
        faces = mesh.face_count(),
        "Loaded STL"
    );
    Ok(mesh)
}

/// Read an STL mesh from any reader.
///
/// # Errors
///
/// Same as [`load_stl`], minus the missing-file case.
pub fn read_stl<R: Read>(mut reader: R) -> IoResult<IndexedMesh> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_stl(&bytes)
}

fn parse_stl(bytes: &[u8]) -> IoResult<IndexedMesh> {
    if !looks_like_ascii(bytes) {
        return parse_binary(bytes);
    }
    let ascii = std::str::from_utf8(bytes)
        .map_err(|e| IoError::invalid_content(format!("ASCII STL is not UTF-8: {e}")))
        .and_then(parse_ascii);
    match ascii {
        Ok(mesh) if !mesh.faces.is_empty() => Ok(mesh),
        _ if holds_declared_faces(bytes) => {
            debug!(bytes = bytes.len(), "Solid header without ASCII facets, reading as binary");
            parse_binary(bytes)
        }
        result => result,
    }
}

/// `true` when the body after the header has room for every declared triangle.
fn holds_declared_faces(bytes: &[u8]) -> bool {
    declared_face_count(bytes).is_some_and(|count| {
        (count as usize)
            .checked_mul(TRIANGLE_SIZE)
            .and_then(|body| body.checked_add(HEADER_SIZE + 4))
            .is_some_and(|needed| bytes.len() >= needed)
    })
}

/// ASCII unless the byte count is exactly what the binary header promises.
fn looks_like_ascii(bytes: &[u8]) -> bool {
    if !bytes.trim_ascii_start().starts_with(b"solid") {
        return false;
    }
    match declared_face_count(bytes) {
        Some(count) => bytes.len() != HEADER_SIZE + 4 + count as usize * TRIANGLE_SIZE,
        None => true,
    }
}

fn declared_face_count(bytes: &[u8]) -> Option<u32> {
    let raw = bytes.get(HEADER_SIZE..HEADER_SIZE + 4)?;
    Some(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

#[allow(clippy::cast_possible_truncation)]
// Truncation: mesh indices are u32, meshes with >4B vertices are unsupported
fn parse_binary(bytes: &[u8]) -> IoResult<IndexedMesh> {
    let face_count = declared_face_count(bytes).ok_or(IoError::InvalidHeader {
        expected: HEADER_SIZE + 4,
        got: bytes.len(),
    })?;

    let body = &bytes[HEADER_SIZE + 4..];
    let available = (body.len() / TRIANGLE_SIZE) as u32;
    if available < face_count {
        return Err(IoError::InvalidFaceCount {
            expected: face_count,
            got: available,
        });
    }

    let mut mesh = IndexedMesh::with_capacity(face_count as usize * 3, face_count as usize);
    for record in body.chunks_exact(TRIANGLE_SIZE).take(face_count as usize) {
        // Stored normal (first 12 bytes) is ignored; winding is authoritative.
        let base = mesh.vertices.len() as u32;
        mesh.vertices.push(read_vertex(&record[12..24]));
        mesh.vertices.push(read_vertex(&record[24..36]));
        mesh.vertices.push(read_vertex(&record[36..48]));
        mesh.faces.push([base, base + 1, base + 2]);
    }
    Ok(mesh)
}

fn read_vertex(buf: &[u8]) -> Vertex {
    let component = |i: usize| {
        f64::from(f32::from_le_bytes([
            buf[i * 4],
            buf[i * 4 + 1],
            buf[i * 4 + 2],
            buf[i * 4 + 3],
        ]))
    };
    Vertex::from_coords(component(0), component(1), component(2))
}

#[allow(clippy::cast_possible_truncation)]
// Truncation: mesh indices are u32, meshes with >4B vertices are unsupported
fn parse_ascii(text: &str) -> IoResult<IndexedMesh> {
    let mut mesh = IndexedMesh::new();
    let mut facet: Vec<Vertex> = Vec::with_capacity(3);
    let mut in_loop = false;

    for (line_no, line) in text.lines().enumerate() {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };

        match keyword.to_ascii_lowercase().as_str() {
            "outer" => {
                in_loop = true;
                facet.clear();
            }
            "vertex" if in_loop => {
                let coords: Vec<f64> = parts
                    .take(3)
                    .map(str::parse::<f64>)
                    .collect::<Result<_, _>>()?;
                let [x, y, z] = coords[..] else {
                    return Err(IoError::invalid_content(format!(
                        "line {}: vertex needs three coordinates",
                        line_no + 1
                    )));
                };
                facet.push(Vertex::from_coords(x, y, z));
            }
            "endloop" => in_loop = false,
            "endfacet" => {
                if facet.len() != 3 {
                    return Err(IoError::invalid_content(format!(
                        "line {}: facet has {} vertices, expected 3",
                        line_no + 1,
                        facet.len()
                    )));
                }
                let base = mesh.vertices.len() as u32;
                mesh.vertices.append(&mut facet);
                mesh.faces.push([base, base + 1, base + 2]);
            }
            "endsolid" => break,
            _ => {}
        }
    }

    Ok(mesh)
}

/// Save a mesh as STL, replacing `path` atomically.
///
/// The mesh is written to a temporary file in the destination directory and
/// renamed over `path` once fully flushed.
///
/// # Arguments
///
/// * `mesh` - The mesh to save
/// * `path` - Output file path
/// * `binary` - Binary STL if true, ASCII otherwise
///
/// # Errors
///
/// Returns [`IoError::Write`] if the directory is missing or unwritable, or
/// the rename fails. No partial file is left at `path`.
pub fn save_stl<P: AsRef<Path>>(mesh: &IndexedMesh, path: P, binary: bool) -> IoResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_error = |source: io::Error| IoError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut staging = NamedTempFile::new_in(dir).map_err(write_error)?;
    {
        let mut writer = BufWriter::new(staging.as_file_mut());
        write_stl(mesh, &mut writer, binary).map_err(write_error)?;
        writer.flush().map_err(write_error)?;
    }
    staging.as_file().sync_all().map_err(write_error)?;
    staging.persist(path).map_err(|e| write_error(e.error))?;

    info!(
        path = %path.display(),
        faces = mesh.face_count(),
        binary,
        "Saved STL"
    );
    Ok(())
}

/// Serialize a mesh as STL to any writer.
///
/// # Errors
///
/// Propagates failures from `writer`.
pub fn write_stl<W: Write>(mesh: &IndexedMesh, writer: W, binary: bool) -> io::Result<()> {
    if binary {
        write_binary(mesh, writer)
    } else {
        write_ascii(mesh, writer)
    }
}

#[allow(clippy::cast_possible_truncation)]
// Truncation: STL stores f32 and a u32 face count
fn write_binary<W: Write>(mesh: &IndexedMesh, mut writer: W) -> io::Result<()> {
    let mut header = [b' '; HEADER_SIZE];
    let text = b"Binary STL generated by keepsake mesh-io";
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;
    writer.write_all(&(mesh.face_count() as u32).to_le_bytes())?;

    for tri in mesh.triangles() {
        let n = tri.normal().unwrap_or_else(Vector3::zeros);
        for p in [Point3::from(n), tri.v0, tri.v1, tri.v2] {
            write_point(&mut writer, &p)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
// Truncation: STL stores f32
fn write_point<W: Write>(writer: &mut W, p: &Point3<f64>) -> io::Result<()> {
    writer.write_all(&(p.x as f32).to_le_bytes())?;
    writer.write_all(&(p.y as f32).to_le_bytes())?;
    writer.write_all(&(p.z as f32).to_le_bytes())
}

fn write_ascii<W: Write>(mesh: &IndexedMesh, mut writer: W) -> io::Result<()> {
    writeln!(writer, "solid {SOLID_NAME}")?;
    for tri in mesh.triangles() {
        let n = tri.normal().unwrap_or_else(Vector3::zeros);
        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in [tri.v0, tri.v1, tri.v2] {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {SOLID_NAME}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::{MeshBounds, cuboid};

    fn block() -> IndexedMesh {
        cuboid(Point3::new(-1.0, 0.5, 0.0), Point3::new(2.0, 1.5, 0.25))
    }

    #[test]
    fn binary_roundtrip_keeps_geometry() {
        let original = block();
        let mut buf = Vec::new();
        write_stl(&original, &mut buf, true).unwrap();
        assert_eq!(buf.len(), HEADER_SIZE + 4 + 12 * TRIANGLE_SIZE);

        let loaded = read_stl(&buf[..]).unwrap();
        assert_eq!(loaded.face_count(), 12);
        assert_eq!(loaded.vertex_count(), 36);
        assert_relative_eq!(loaded.signed_volume(), original.signed_volume(), epsilon = 1e-6);
    }

    #[test]
    fn ascii_roundtrip_keeps_bounds() {
        let original = block();
        let mut buf = Vec::new();
        write_stl(&original, &mut buf, false).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("solid keepsake"));
        assert!(text.trim_end().ends_with("endsolid keepsake"));

        let loaded = read_stl(&buf[..]).unwrap();
        let (a, b) = (original.bounds(), loaded.bounds());
        assert_relative_eq!(a.min, b.min, epsilon = 1e-5);
        assert_relative_eq!(a.max, b.max, epsilon = 1e-5);
    }

    #[test]
    fn binary_header_starting_with_solid_is_binary() {
        let mut buf = Vec::new();
        write_stl(&block(), &mut buf, true).unwrap();
        buf[..5].copy_from_slice(b"solid");
        let loaded = read_stl(&buf[..]).unwrap();
        assert_eq!(loaded.face_count(), 12);
    }

    #[test]
    fn solid_header_binary_with_trailing_bytes_is_binary() {
        let mut buf = Vec::new();
        write_stl(&block(), &mut buf, true).unwrap();
        buf[..5].copy_from_slice(b"solid");
        buf.extend_from_slice(&[0; 3]);
        let loaded = read_stl(&buf[..]).unwrap();
        assert_eq!(loaded.face_count(), 12);
        assert_eq!(loaded.vertex_count(), 36);
    }

    #[test]
    fn solid_header_with_short_body_is_rejected() {
        let mut buf = Vec::new();
        write_stl(&block(), &mut buf, true).unwrap();
        buf[..5].copy_from_slice(b"solid");
        buf.truncate(buf.len() - 7);
        assert!(read_stl(&buf[..]).is_err());
    }

    #[test]
    fn ascii_facet_parsing() {
        let ascii = "solid test
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid test";
        let mesh = read_stl(ascii.as_bytes()).unwrap();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertices[1].position.x, 1.0);
    }

    #[test]
    fn ascii_short_facet_is_rejected() {
        let ascii = "solid t\nfacet normal 0 0 1\nouter loop\nvertex 0 0 0\nvertex 1 0 0\nendloop\nendfacet\nendsolid t\n";
        assert!(matches!(
            read_stl(ascii.as_bytes()),
            Err(IoError::InvalidContent { .. })
        ));
    }

    #[test]
    fn truncated_binary_is_rejected() {
        let mut buf = Vec::new();
        write_stl(&block(), &mut buf, true).unwrap();
        buf.truncate(buf.len() - TRIANGLE_SIZE);
        assert!(matches!(
            read_stl(&buf[..]),
            Err(IoError::InvalidFaceCount {
                expected: 12,
                got: 11
            })
        ));
    }

    #[test]
    fn tiny_binary_is_rejected() {
        assert!(matches!(
            read_stl(&[0u8; 10][..]),
            Err(IoError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn binary_normals_match_winding() {
        let mut buf = Vec::new();
        let mesh = cuboid(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        write_stl(&mesh, &mut buf, true).unwrap();
        // First face of the cuboid table is on the bottom: normal -Z.
        let record = &buf[HEADER_SIZE + 4..HEADER_SIZE + 4 + TRIANGLE_SIZE];
        let nz = f32::from_le_bytes([record[8], record[9], record[10], record[11]]);
        assert_eq!(nz, -1.0);
    }

    #[test]
    fn load_missing_file() {
        let result = load_stl("nonexistent_asset_12345.stl");
        assert!(matches!(result, Err(IoError::FileNotFound { path }) if path.ends_with("nonexistent_asset_12345.stl")));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.stl");
        save_stl(&block(), &path, true).unwrap();
        let loaded = load_stl(&path).unwrap();
        assert_eq!(loaded.face_count(), 12);
        // Only the final file remains; the staging file was renamed.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.stl");
        std::fs::write(&path, b"stale").unwrap();
        save_stl(&block(), &path, false).unwrap();
        assert_eq!(load_stl(&path).unwrap().face_count(), 12);
    }

    #[test]
    fn save_into_missing_directory_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("model.stl");
        let err = save_stl(&block(), &path, true).unwrap_err();
        assert!(matches!(err, IoError::Write { .. }));
        assert!(!path.exists());
    }
}
