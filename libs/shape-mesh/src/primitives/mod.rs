//! # Primitives
//!
//! Mesh generation for the built-in shapes (sphere, cube, arrow).

pub mod arrow;
pub mod cube;
pub mod sphere;

pub use arrow::create_arrow;
pub use cube::create_cube;
pub use sphere::{create_sphere, sphere_index_count, sphere_vertex_count};

use crate::error::{MeshError, MeshResult};
use crate::mesh::reserve_buffer;

/// Rejects zero, negative and non-finite sizes.
fn ensure_positive(parameter: &'static str, value: f32) -> MeshResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(
            parameter,
            format!("must be positive and finite: {value}"),
        ))
    }
}

/// Copies a constant table into a freshly reserved buffer, mapping each entry.
fn copy_table<T: Copy, U>(
    buffer: &'static str,
    table: &[T],
    map: impl Fn(T) -> U,
) -> MeshResult<Vec<U>> {
    let mut out = reserve_buffer(buffer, table.len())?;
    out.extend(table.iter().map(|&entry| map(entry)));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("scale", 1.0).is_ok());
        assert!(ensure_positive("scale", 0.0).is_err());
        assert!(ensure_positive("scale", -2.0).is_err());
        assert!(ensure_positive("scale", f32::NAN).is_err());
        assert!(ensure_positive("scale", f32::INFINITY).is_err());
    }

    #[test]
    fn test_copy_table_maps_entries() {
        let out = copy_table("values", &[1.0f32, 2.0], |v| v * 3.0).unwrap();
        assert_eq!(out, vec![3.0, 6.0]);
    }
}
