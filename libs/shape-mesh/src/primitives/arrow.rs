//! # Arrow Primitive
//!
//! A small arrowhead made of four flat triangles, each with a solid color.
//!
//! ```text
//!      v1
//!      /\
//!     /  \
//!    / v4 \
//!   v2    v3
//! ```
//!
//! `v4` sits in front of the base plane, so the two facets `v1 v4 v2` and
//! `v1 v4 v3` form a shallow ridge. The vertex table lists each facet twice,
//! once per color slot.

use config::constants::{ARROW_INDEX_COUNT, ARROW_VERTEX_COUNT};
use glam::Vec3;
use tracing::debug;

use super::{copy_table, ensure_positive};
use crate::error::MeshResult;
use crate::mesh::{reserve_buffer, Mesh, MeshRequest};

/// Tip.
pub const ARROW_TIP: [f32; 3] = [0.0, 1.0, 0.0];
/// Left base corner.
pub const ARROW_BASE_LEFT: [f32; 3] = [-0.3, -0.3, 0.0];
/// Right base corner.
pub const ARROW_BASE_RIGHT: [f32; 3] = [0.3, -0.3, 0.0];
/// Centre point raised towards the viewer.
pub const ARROW_FRONT: [f32; 3] = [0.0, 0.0, 0.3];

pub const ARROW_RED: [f32; 4] = [1.0, 0.0, 0.0, 0.0];
pub const ARROW_GREEN: [f32; 4] = [0.0, 1.0, 0.0, 0.0];
pub const ARROW_BLUE: [f32; 4] = [0.0, 0.0, 1.0, 0.0];

const ARROW_POSITIONS: [[f32; 3]; ARROW_VERTEX_COUNT] = [
    ARROW_TIP,
    ARROW_FRONT,
    ARROW_BASE_LEFT,
    ARROW_TIP,
    ARROW_FRONT,
    ARROW_BASE_RIGHT,
    ARROW_TIP,
    ARROW_FRONT,
    ARROW_BASE_LEFT,
    ARROW_TIP,
    ARROW_FRONT,
    ARROW_BASE_RIGHT,
];

/// One color per triangle: red, green, blue, red.
const TRIANGLE_COLORS: [[f32; 4]; ARROW_INDEX_COUNT / 3] =
    [ARROW_RED, ARROW_GREEN, ARROW_BLUE, ARROW_RED];

const ARROW_INDICES: [u32; ARROW_INDEX_COUNT] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// Creates the arrowhead mesh scaled uniformly by `scale`.
///
/// Produces positions, per-vertex colors and indices. The arrow has no
/// normals or texture coordinates; requesting them leaves those slots empty.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{create_arrow, MeshRequest};
///
/// let mesh = create_arrow(1.0, MeshRequest::ALL).unwrap();
/// assert_eq!(mesh.index_count(), 12);
/// assert_eq!(mesh.colors().unwrap().len(), 12);
/// assert!(mesh.normals().is_none());
/// ```
pub fn create_arrow(scale: f32, request: MeshRequest) -> MeshResult<Mesh> {
    ensure_positive("scale", scale)?;

    if request.normals || request.tex_coords {
        debug!("arrow has no normals or texture coordinates, buffers left empty");
    }

    let mut mesh = Mesh::with_counts(ARROW_VERTEX_COUNT, ARROW_INDEX_COUNT);

    if request.positions {
        mesh.set_positions(Some(copy_table("positions", &ARROW_POSITIONS, |p| {
            Vec3::from_array(p) * scale
        })?));
    }

    if request.colors {
        let mut colors = reserve_buffer("colors", ARROW_VERTEX_COUNT)?;
        for color in TRIANGLE_COLORS {
            colors.extend_from_slice(&[color; 3]);
        }
        mesh.set_colors(Some(colors));
    }

    if request.indices {
        mesh.set_indices(Some(copy_table("indices", &ARROW_INDICES, |i| i)?));
    }

    debug!(scale, "generated arrow mesh");
    Ok(mesh)
}
