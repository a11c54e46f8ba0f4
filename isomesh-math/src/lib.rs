//! Isomesh wrapper around cgmath

#![warn(missing_docs)]

pub use cgmath::num_traits::clamp;
pub use cgmath::vec3;
pub use cgmath::point3;
pub use cgmath::EuclideanSpace;
pub use cgmath::InnerSpace;
pub use cgmath::MetricSpace;
pub use cgmath::VectorSpace;
pub use cgmath::Zero;

/// 3 dimentional point of f32
pub type Point3 = cgmath::Point3<f32>;
/// 3 dimentional vector of f32
pub type Vec3 = cgmath::Vector3<f32>;
/// 3 dimentional vector of usize, used for grid cell coordinates
pub type Vec3u = cgmath::Vector3<usize>;

/// Returns unit vectors along X, Y and Z axes
pub fn axes() -> [Vec3; 3] {
    [Vec3::unit_x(), Vec3::unit_y(), Vec3::unit_z()]
}

/// Checks if all components of the vector are finite
pub fn is_finite(v: Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}
