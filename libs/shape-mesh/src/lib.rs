//! # Shape Mesh
//!
//! Procedural mesh generation for simple shapes: a latitude/longitude
//! sphere, a flat-shaded cube and a four-facet arrowhead.
//!
//! ## Architecture
//!
//! ```text
//! shape parameters + MeshRequest → primitives → Mesh (optional buffers) → renderer
//! ```
//!
//! Every generator is a pure function. Each call allocates its own buffers
//! and hands them to the caller; nothing is cached between calls, so
//! generators may run concurrently on any number of threads.
//!
//! ## Usage
//!
//! ```rust
//! use shape_mesh::{create_sphere, MeshRequest};
//!
//! let mesh = create_sphere(4, 1.0, MeshRequest::ALL)?;
//! assert_eq!(mesh.vertex_count(), 15);
//! assert_eq!(mesh.index_count(), 48);
//! # Ok::<(), shape_mesh::MeshError>(())
//! ```

pub mod error;
pub mod mesh;
pub mod primitives;
pub mod transform;

pub use error::{MeshError, MeshResult};
pub use mesh::{Mesh, MeshRequest};
pub use primitives::{create_arrow, create_cube, create_sphere};
