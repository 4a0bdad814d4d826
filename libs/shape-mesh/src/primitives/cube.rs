//! # Cube Primitive
//!
//! Generates a unit cube centred on the origin. Each face has its own four
//! vertices so it can carry a flat normal and a full texture unwrap.

use config::constants::{CUBE_INDEX_COUNT, CUBE_VERTEX_COUNT};
use glam::{Vec2, Vec3};
use tracing::debug;

use super::{copy_table, ensure_positive};
use crate::error::MeshResult;
use crate::mesh::{reserve_buffer, Mesh, MeshRequest};

/// Corner positions of the unit cube, four per face.
///
/// Face order: -Y, +Y, -Z, +Z, -X, +X.
const CUBE_POSITIONS: [[f32; 3]; CUBE_VERTEX_COUNT] = [
    [-0.5, -0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, -0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, 0.5, 0.5],
    [0.5, 0.5, 0.5],
    [0.5, 0.5, -0.5],
    [-0.5, -0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [0.5, 0.5, -0.5],
    [0.5, -0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [-0.5, 0.5, 0.5],
    [0.5, 0.5, 0.5],
    [0.5, -0.5, 0.5],
    [-0.5, -0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [-0.5, 0.5, 0.5],
    [-0.5, 0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [0.5, 0.5, -0.5],
];

/// Outward normal of each face, in face order.
const FACE_NORMALS: [[f32; 3]; 6] = [
    [0.0, -1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, -1.0],
    [0.0, 0.0, 1.0],
    [-1.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
];

const CUBE_TEX_COORDS: [[f32; 2]; CUBE_VERTEX_COUNT] = [
    [0.0, 0.0],
    [0.0, 1.0],
    [1.0, 1.0],
    [1.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
    [0.0, 0.0],
    [0.0, 0.0],
    [0.0, 1.0],
    [1.0, 1.0],
    [1.0, 0.0],
    [0.0, 0.0],
    [0.0, 1.0],
    [1.0, 1.0],
    [1.0, 0.0],
    [0.0, 0.0],
    [0.0, 1.0],
    [1.0, 1.0],
    [1.0, 0.0],
    [0.0, 0.0],
    [0.0, 1.0],
    [1.0, 1.0],
    [1.0, 0.0],
];

/// Two counter-clockwise triangles per face, viewed from outside.
const CUBE_INDICES: [u32; CUBE_INDEX_COUNT] = [
    0, 2, 1, 0, 3, 2, // -Y
    4, 5, 6, 4, 6, 7, // +Y
    8, 9, 10, 8, 10, 11, // -Z
    12, 15, 14, 12, 14, 13, // +Z
    16, 17, 18, 16, 18, 19, // -X
    20, 23, 22, 20, 22, 21, // +X
];

/// Creates a cube mesh centred on the origin with edge length `scale`.
///
/// # Arguments
///
/// * `scale` - Edge length; must be positive
/// * `request` - Which buffers to produce; colors are not available
///
/// # Returns
///
/// A mesh with 24 vertices and 36 indices (2 triangles per face). The index
/// table does not depend on `scale`.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{create_cube, MeshRequest};
///
/// let mesh = create_cube(1.0, MeshRequest::ALL).unwrap();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.index_count(), 36);
/// assert_eq!(&mesh.indices().unwrap()[..3], &[0, 2, 1]);
/// ```
pub fn create_cube(scale: f32, request: MeshRequest) -> MeshResult<Mesh> {
    ensure_positive("scale", scale)?;

    if request.colors {
        debug!("cube has no vertex colors, colors buffer left empty");
    }

    let mut mesh = Mesh::with_counts(CUBE_VERTEX_COUNT, CUBE_INDEX_COUNT);

    if request.positions {
        mesh.set_positions(Some(copy_table("positions", &CUBE_POSITIONS, |p| {
            Vec3::from_array(p) * scale
        })?));
    }

    if request.normals {
        let mut normals = reserve_buffer("normals", CUBE_VERTEX_COUNT)?;
        for normal in FACE_NORMALS {
            normals.extend_from_slice(&[Vec3::from_array(normal); 4]);
        }
        mesh.set_normals(Some(normals));
    }

    if request.tex_coords {
        mesh.set_tex_coords(Some(copy_table(
            "tex_coords",
            &CUBE_TEX_COORDS,
            Vec2::from_array,
        )?));
    }

    if request.indices {
        mesh.set_indices(Some(copy_table("indices", &CUBE_INDICES, |i| i)?));
    }

    debug!(scale, "generated cube mesh");
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;

    #[test]
    fn test_cube_counts() {
        let mesh = create_cube(1.0, MeshRequest::ALL).unwrap();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_cube_validates() {
        let mesh = create_cube(3.0, MeshRequest::ALL).unwrap();
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_cube_centered() {
        let mesh = create_cube(10.0, MeshRequest::NONE.with_positions()).unwrap();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, Vec3::splat(-5.0));
        assert_eq!(max, Vec3::splat(5.0));
    }

    #[test]
    fn test_cube_never_produces_colors() {
        let mesh = create_cube(1.0, MeshRequest::ALL).unwrap();
        assert!(mesh.colors().is_none());
    }

    #[test]
    fn test_cube_face_normals_are_flat() {
        let mesh = create_cube(1.0, MeshRequest::NONE.with_normals()).unwrap();
        for face in mesh.normals().unwrap().chunks_exact(4) {
            assert!(face.iter().all(|n| *n == face[0]));
        }
    }

    #[test]
    fn test_cube_outward_winding() {
        let mesh = create_cube(2.0, MeshRequest::ALL).unwrap();
        let positions = mesh.positions().unwrap();
        let normals = mesh.normals().unwrap();
        for [a, b, c] in mesh.triangles().unwrap() {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
            assert!(face.dot(normals[a]) > 0.0, "triangle {a},{b},{c} faces inward");
        }
    }

    #[test]
    fn test_cube_invalid_scale() {
        assert!(matches!(
            create_cube(0.0, MeshRequest::ALL),
            Err(MeshError::InvalidParameter { parameter: "scale", .. })
        ));
        assert!(create_cube(-1.0, MeshRequest::ALL).is_err());
    }
}
