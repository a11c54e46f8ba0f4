//! Marching cubes isosurface extraction
//!
//! The traversal walks a grid of cubes over a cube-shaped region, classifies every cube by the
//! signs of the field at its corners and emits triangles from the case table. Triangle vertices
//! are placed on cube edges by linear interpolation of the field; normals are estimated from
//! central differences of the field.
//!
//! ```
//! use isomesh_field::Sphere;
//! use isomesh_marching::{Grid, MarchingCubes};
//! use isomesh_math::point3;
//!
//! let mut mc = MarchingCubes::new(Grid::new(point3(-1.0, -1.0, -1.0), 2.0, 0.1));
//! let mut sphere = Sphere::new(point3(0.0, 0.0, 0.0), 0.5);
//! let mesh = mc.polygonize(&mut sphere).unwrap();
//! assert!(mesh.count_faces() > 0);
//! ```

#![warn(missing_docs)]

mod classify;
mod error;
mod grid;
mod interpolate;
mod marching_cubes;

pub mod tables;

pub use classify::{classify, is_inside, sample, Cube};
pub use error::Error;
pub use grid::{Grid, DEFAULT_DELTA, EPSILON};
pub use interpolate::{crossing, outward_normal, DegeneratePolicy, EdgeInterpolator, EdgeVertex};
pub use marching_cubes::{CycleStats, MarchingCubes};
