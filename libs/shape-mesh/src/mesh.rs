//! # Mesh Data Structure
//!
//! Parallel per-vertex buffers plus a triangle index list, each of them
//! optional. A generator only fills the buffers named in the caller's
//! [`MeshRequest`]; the vertex and index counts are always known.

use config::constants::F32_TOLERANCE;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// Selects which output buffers a generator should produce.
///
/// Buffers that are not requested are never allocated.
///
/// # Example
///
/// ```rust
/// use shape_mesh::MeshRequest;
///
/// let request = MeshRequest::NONE.with_positions().with_indices();
/// assert!(request.positions && request.indices);
/// assert!(!request.normals);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshRequest {
    /// Vertex positions (3 floats per vertex)
    pub positions: bool,
    /// Unit vertex normals (3 floats per vertex)
    pub normals: bool,
    /// Texture coordinates (2 floats per vertex)
    pub tex_coords: bool,
    /// RGBA vertex colors (4 floats per vertex)
    pub colors: bool,
    /// Triangle index list
    pub indices: bool,
}

impl MeshRequest {
    /// Requests nothing; only the counts are computed.
    pub const NONE: Self = Self {
        positions: false,
        normals: false,
        tex_coords: false,
        colors: false,
        indices: false,
    };

    /// Requests every buffer.
    pub const ALL: Self = Self {
        positions: true,
        normals: true,
        tex_coords: true,
        colors: true,
        indices: true,
    };

    /// Adds positions to the request.
    pub fn with_positions(mut self) -> Self {
        self.positions = true;
        self
    }

    /// Adds normals to the request.
    pub fn with_normals(mut self) -> Self {
        self.normals = true;
        self
    }

    /// Adds texture coordinates to the request.
    pub fn with_tex_coords(mut self) -> Self {
        self.tex_coords = true;
        self
    }

    /// Adds vertex colors to the request.
    pub fn with_colors(mut self) -> Self {
        self.colors = true;
        self
    }

    /// Adds the index list to the request.
    pub fn with_indices(mut self) -> Self {
        self.indices = true;
        self
    }
}

/// A generated triangle mesh.
///
/// Per-vertex buffers that are present all have exactly
/// [`vertex_count`](Mesh::vertex_count) elements, and the index buffer, when
/// present, has exactly [`index_count`](Mesh::index_count) entries grouped in
/// counter-clockwise triples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    positions: Option<Vec<Vec3>>,
    normals: Option<Vec<Vec3>>,
    tex_coords: Option<Vec<Vec2>>,
    colors: Option<Vec<[f32; 4]>>,
    indices: Option<Vec<u32>>,
    vertex_count: usize,
    index_count: usize,
}

impl Mesh {
    /// Creates a mesh shell for a shape of the given size with no buffers.
    pub(crate) fn with_counts(vertex_count: usize, index_count: usize) -> Self {
        Self {
            vertex_count,
            index_count,
            ..Self::default()
        }
    }

    pub(crate) fn set_positions(&mut self, positions: Option<Vec<Vec3>>) {
        self.positions = positions;
    }

    pub(crate) fn set_normals(&mut self, normals: Option<Vec<Vec3>>) {
        self.normals = normals;
    }

    pub(crate) fn set_tex_coords(&mut self, tex_coords: Option<Vec<Vec2>>) {
        self.tex_coords = tex_coords;
    }

    pub(crate) fn set_colors(&mut self, colors: Option<Vec<[f32; 4]>>) {
        self.colors = colors;
    }

    pub(crate) fn set_indices(&mut self, indices: Option<Vec<u32>>) {
        self.indices = indices;
    }

    /// Returns the number of vertices of the shape, whether or not any
    /// per-vertex buffer was produced.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of indices needed to draw the shape, whether or
    /// not the index buffer was produced.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.index_count
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.index_count / 3
    }

    #[inline]
    pub fn positions(&self) -> Option<&[Vec3]> {
        self.positions.as_deref()
    }

    #[inline]
    pub fn normals(&self) -> Option<&[Vec3]> {
        self.normals.as_deref()
    }

    #[inline]
    pub fn tex_coords(&self) -> Option<&[Vec2]> {
        self.tex_coords.as_deref()
    }

    #[inline]
    pub fn colors(&self) -> Option<&[[f32; 4]]> {
        self.colors.as_deref()
    }

    #[inline]
    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    /// Iterates the index buffer as triangles.
    pub fn triangles(&self) -> Option<impl Iterator<Item = [u32; 3]> + '_> {
        self.indices
            .as_deref()
            .map(|indices| indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]]))
    }

    /// Computes the axis-aligned bounding box of the positions.
    ///
    /// Returns `None` when positions were not requested.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let positions = self.positions.as_deref()?;
        let (first, rest) = positions.split_first()?;
        Some(
            rest.iter()
                .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p))),
        )
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Every present per-vertex buffer has `vertex_count` elements
    /// - The index buffer has `index_count` entries forming whole triangles
    /// - All indices are in range
    /// - Normals have unit length
    pub fn validate(&self) -> MeshResult<()> {
        let lengths = [
            ("positions", self.positions.as_ref().map(Vec::len)),
            ("normals", self.normals.as_ref().map(Vec::len)),
            ("tex_coords", self.tex_coords.as_ref().map(Vec::len)),
            ("colors", self.colors.as_ref().map(Vec::len)),
        ];
        for (name, len) in lengths {
            if let Some(len) = len {
                if len != self.vertex_count {
                    return Err(MeshError::validation(format!(
                        "{name} has {len} elements, expected {}",
                        self.vertex_count
                    )));
                }
            }
        }

        if self.index_count % 3 != 0 {
            return Err(MeshError::validation(format!(
                "index count {} is not a multiple of 3",
                self.index_count
            )));
        }

        if let Some(indices) = &self.indices {
            if indices.len() != self.index_count {
                return Err(MeshError::validation(format!(
                    "indices has {} entries, expected {}",
                    indices.len(),
                    self.index_count
                )));
            }
            if let Some(bad) = indices
                .iter()
                .find(|&&index| index as usize >= self.vertex_count)
            {
                return Err(MeshError::validation(format!(
                    "index {bad} out of range for {} vertices",
                    self.vertex_count
                )));
            }
        }

        if let Some(normals) = &self.normals {
            if let Some(position) = normals
                .iter()
                .position(|n| (n.length() - 1.0).abs() > F32_TOLERANCE)
            {
                return Err(MeshError::validation(format!(
                    "normal {position} is not unit length"
                )));
            }
        }

        Ok(())
    }

    /// Exports positions as a flat f32 array for GPU upload.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Option<Vec<f32>> {
        self.positions
            .as_ref()
            .map(|positions| positions.iter().flat_map(|p| p.to_array()).collect())
    }

    /// Exports normals as a flat f32 array for GPU upload.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals
            .as_ref()
            .map(|normals| normals.iter().flat_map(|n| n.to_array()).collect())
    }

    /// Exports texture coordinates as a flat [u, v, u, v, ...] array.
    pub fn tex_coords_f32(&self) -> Option<Vec<f32>> {
        self.tex_coords
            .as_ref()
            .map(|tex_coords| tex_coords.iter().flat_map(|t| t.to_array()).collect())
    }

    /// Exports colors as a flat [r, g, b, a, ...] array.
    pub fn colors_f32(&self) -> Option<Vec<f32>> {
        self.colors
            .as_ref()
            .map(|colors| colors.iter().flatten().copied().collect())
    }
}

/// Allocates an empty buffer able to hold exactly `len` elements.
///
/// Allocation failure is reported instead of aborting the process.
pub(crate) fn reserve_buffer<T>(buffer: &'static str, len: usize) -> MeshResult<Vec<T>> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(len)
        .map_err(|source| MeshError::AllocationFailed {
            buffer,
            len,
            source,
        })?;
    Ok(vec)
}
