//! Isomesh: isosurface extraction engine
//!
//! Polygonizes the zero level of a scalar field with marching cubes, once per update cycle.

#![warn(missing_docs)]

mod app;
mod error;
mod settings;

pub use app::{run, Report};
pub use error::Error;
pub use settings::Settings;

// Isomesh scalar fields
pub use isomesh_field as field;

// Isomesh logging
pub use isomesh_log as log;

// Isomesh marching cubes
pub use isomesh_marching as marching;

// Isomesh math crate
pub use isomesh_math as math;

// Isomesh mesh buffers
pub use isomesh_mesh as mesh;

pub use isomesh_field::ScalarField;
pub use isomesh_log::Log;
pub use isomesh_marching::MarchingCubes;
pub use isomesh_mesh::Mesh;
