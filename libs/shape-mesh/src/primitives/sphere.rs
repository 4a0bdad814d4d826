//! # Sphere Primitive
//!
//! Generates a latitude/longitude sphere. The grid includes both poles as
//! degenerate rings and duplicates the seam column, so every vertex owns a
//! distinct texture coordinate.

use std::f32::consts::PI;

use config::constants::{MAX_MESH_VERTICES, MIN_SPHERE_SLICES};
use glam::{Vec2, Vec3};
use tracing::debug;

use super::ensure_positive;
use crate::error::{MeshError, MeshResult};
use crate::mesh::{reserve_buffer, Mesh, MeshRequest};

/// Number of vertices in a sphere grid: `(slices/2 + 1) * (slices + 1)`.
///
/// # Example
///
/// ```rust
/// use shape_mesh::primitives::sphere_vertex_count;
///
/// assert_eq!(sphere_vertex_count(4), Some(15));
/// ```
///
/// Returns `None` when the count does not fit in `usize`.
pub fn sphere_vertex_count(slices: u32) -> Option<usize> {
    let slices = usize::try_from(slices).ok()?;
    (slices / 2 + 1).checked_mul(slices.checked_add(1)?)
}

/// Number of indices needed to draw a sphere: `6 * slices * (slices/2)`.
///
/// Callers can size their own buffers with this without generating anything.
///
/// # Example
///
/// ```rust
/// use shape_mesh::primitives::sphere_index_count;
///
/// assert_eq!(sphere_index_count(4), Some(48));
/// ```
///
/// Returns `None` when the count does not fit in `usize`.
pub fn sphere_index_count(slices: u32) -> Option<usize> {
    let slices = usize::try_from(slices).ok()?;
    (slices / 2).checked_mul(slices)?.checked_mul(6)
}

/// Creates a sphere mesh using latitude/longitude tessellation.
///
/// # Arguments
///
/// * `slices` - Longitudinal divisions; must be even and at least 4
/// * `radius` - The radius of the sphere; must be positive
/// * `request` - Which buffers to produce
///
/// # Algorithm
///
/// With `parallels = slices / 2` and `step = 2π / slices`, vertex `(i, j)`
/// for `i in 0..=parallels`, `j in 0..=slices` sits at
/// `radius * (sin(step·i)·sin(step·j), cos(step·i), sin(step·i)·cos(step·j))`.
/// Its normal is the position divided by the radius and its texture
/// coordinate is `(j / slices, (1 - i) / (parallels - 1))`. Each grid quad
/// becomes two counter-clockwise triangles.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{create_sphere, MeshRequest};
///
/// use config::constants::DEFAULT_SPHERE_SLICES;
///
/// let mesh = create_sphere(DEFAULT_SPHERE_SLICES, 2.0, MeshRequest::ALL).unwrap();
/// assert_eq!(mesh.index_count(), 6 * 16 * 8);
/// assert!(mesh.validate().is_ok());
/// ```
pub fn create_sphere(slices: u32, radius: f32, request: MeshRequest) -> MeshResult<Mesh> {
    if slices < MIN_SPHERE_SLICES {
        return Err(MeshError::invalid_parameter(
            "slices",
            format!("must be at least {MIN_SPHERE_SLICES}: {slices}"),
        ));
    }
    if slices % 2 != 0 {
        return Err(MeshError::invalid_parameter(
            "slices",
            format!("must be even: {slices}"),
        ));
    }
    ensure_positive("radius", radius)?;

    let too_many = |count: Option<usize>| MeshError::TooManyVertices {
        count: count.unwrap_or(usize::MAX),
        max: MAX_MESH_VERTICES,
    };
    let vertex_count = match sphere_vertex_count(slices) {
        Some(count) if count <= MAX_MESH_VERTICES => count,
        count => return Err(too_many(count)),
    };
    let index_count = sphere_index_count(slices).ok_or_else(|| too_many(None))?;

    let parallels = slices / 2;
    let angle_step = (2.0 * PI) / slices as f32;

    let mut positions = request
        .positions
        .then(|| reserve_buffer::<Vec3>("positions", vertex_count))
        .transpose()?;
    let mut normals = request
        .normals
        .then(|| reserve_buffer::<Vec3>("normals", vertex_count))
        .transpose()?;
    let mut tex_coords = request
        .tex_coords
        .then(|| reserve_buffer::<Vec2>("tex_coords", vertex_count))
        .transpose()?;
    let mut indices = request
        .indices
        .then(|| reserve_buffer::<u32>("indices", index_count))
        .transpose()?;

    for i in 0..=parallels {
        let (sin_i, cos_i) = (angle_step * i as f32).sin_cos();

        for j in 0..=slices {
            let (sin_j, cos_j) = (angle_step * j as f32).sin_cos();
            let position = Vec3::new(
                radius * sin_i * sin_j,
                radius * cos_i,
                radius * sin_i * cos_j,
            );

            if let Some(positions) = positions.as_mut() {
                positions.push(position);
            }
            if let Some(normals) = normals.as_mut() {
                normals.push(position / radius);
            }
            if let Some(tex_coords) = tex_coords.as_mut() {
                tex_coords.push(Vec2::new(
                    j as f32 / slices as f32,
                    (1.0 - i as f32) / (parallels - 1) as f32,
                ));
            }
        }
    }

    if let Some(indices) = indices.as_mut() {
        let row = slices + 1;
        for i in 0..parallels {
            for j in 0..slices {
                let top = i * row + j;
                let bottom = (i + 1) * row + j;

                indices.extend_from_slice(&[top, bottom, bottom + 1]);
                indices.extend_from_slice(&[top, bottom + 1, top + 1]);
            }
        }
    }

    debug!(slices, radius, vertex_count, index_count, "generated sphere mesh");

    let mut mesh = Mesh::with_counts(vertex_count, index_count);
    mesh.set_positions(positions);
    mesh.set_normals(normals);
    mesh.set_tex_coords(tex_coords);
    mesh.set_indices(indices);
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_counts_smallest() {
        let mesh = create_sphere(4, 1.0, MeshRequest::ALL).unwrap();
        assert_eq!(mesh.vertex_count(), 15);
        assert_eq!(mesh.index_count(), 48);
        assert_eq!(mesh.indices().unwrap().len(), 48);
        assert_eq!(mesh.positions().unwrap().len(), 15);
    }

    #[test]
    fn test_sphere_validates() {
        let mesh = create_sphere(16, 5.0, MeshRequest::ALL).unwrap();
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_sphere_poles() {
        let mesh = create_sphere(8, 3.0, MeshRequest::NONE.with_positions()).unwrap();
        let positions = mesh.positions().unwrap();
        // First ring collapses onto the north pole
        for p in &positions[..9] {
            assert_relative_eq!(p.y, 3.0);
            assert!(p.x.abs() < 1e-6 && p.z.abs() < 1e-6);
        }
        // Last ring collapses onto the south pole
        for p in &positions[positions.len() - 9..] {
            assert_relative_eq!(p.y, -3.0);
        }
    }

    #[test]
    fn test_sphere_seam_is_duplicated() {
        let mesh = create_sphere(8, 1.0, MeshRequest::NONE.with_positions()).unwrap();
        let positions = mesh.positions().unwrap();
        let row = 9;
        for i in 0..=4 {
            let first = positions[i * row];
            let last = positions[i * row + 8];
            assert!((first - last).length() < 1e-5);
        }
    }

    #[test]
    fn test_sphere_first_quad_indices() {
        let mesh = create_sphere(4, 1.0, MeshRequest::NONE.with_indices()).unwrap();
        assert_eq!(&mesh.indices().unwrap()[..6], &[0, 5, 6, 0, 6, 1]);
    }

    #[test]
    fn test_sphere_tex_coords_formula() {
        let mesh = create_sphere(8, 1.0, MeshRequest::NONE.with_tex_coords()).unwrap();
        let tex = mesh.tex_coords().unwrap();
        assert_eq!(tex[0], Vec2::new(0.0, 1.0 / 3.0));
        assert_eq!(tex[8], Vec2::new(1.0, 1.0 / 3.0));
        assert_eq!(tex[9 + 4], Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_sphere_only_requested_buffers() {
        let mesh = create_sphere(6, 1.0, MeshRequest::NONE.with_normals()).unwrap();
        assert!(mesh.positions().is_none());
        assert!(mesh.tex_coords().is_none());
        assert!(mesh.indices().is_none());
        assert!(mesh.colors().is_none());
        assert_eq!(mesh.normals().unwrap().len(), mesh.vertex_count());
    }

    #[test]
    fn test_sphere_counts_without_buffers() {
        let mesh = create_sphere(32, 1.0, MeshRequest::NONE).unwrap();
        assert_eq!(Some(mesh.index_count()), sphere_index_count(32));
        assert_eq!(Some(mesh.vertex_count()), sphere_vertex_count(32));
    }

    #[test]
    fn test_sphere_counts_do_not_overflow() {
        let slices = u32::MAX - 1;
        let expected_indices = (slices as u128 / 2) * slices as u128 * 6;
        let expected_vertices = (slices as u128 / 2 + 1) * (slices as u128 + 1);
        match usize::try_from(expected_indices) {
            Ok(count) => assert_eq!(sphere_index_count(slices), Some(count)),
            Err(_) => assert_eq!(sphere_index_count(slices), None),
        }
        match usize::try_from(expected_vertices) {
            Ok(count) => assert_eq!(sphere_vertex_count(slices), Some(count)),
            Err(_) => assert_eq!(sphere_vertex_count(slices), None),
        }
    }

    #[test]
    fn test_sphere_huge_slices_rejected() {
        let result = create_sphere(u32::MAX - 1, 1.0, MeshRequest::ALL);
        assert!(matches!(result, Err(MeshError::TooManyVertices { .. })));
    }

    #[test]
    fn test_sphere_odd_slices() {
        let result = create_sphere(5, 1.0, MeshRequest::ALL);
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter { parameter: "slices", .. })
        ));
    }

    #[test]
    fn test_sphere_too_few_slices() {
        assert!(create_sphere(2, 1.0, MeshRequest::ALL).is_err());
        assert!(create_sphere(0, 1.0, MeshRequest::ALL).is_err());
    }

    #[test]
    fn test_sphere_invalid_radius() {
        assert!(create_sphere(8, 0.0, MeshRequest::ALL).is_err());
        assert!(create_sphere(8, -1.0, MeshRequest::ALL).is_err());
        assert!(create_sphere(8, f32::NAN, MeshRequest::ALL).is_err());
    }

    #[test]
    fn test_sphere_too_many_vertices() {
        let result = create_sphere(1 << 14, 1.0, MeshRequest::NONE);
        assert!(matches!(result, Err(MeshError::TooManyVertices { .. })));
    }
}
