use isomesh_math::{EuclideanSpace, InnerSpace, MetricSpace, Point3, Vec3};

use crate::ScalarField;

/// Half-space bounded by a plane
///
/// The value grows along the plane normal, so the side the normal points to is inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    /// Plane normal, not required to be unit length
    pub normal: Vec3,
    /// Signed offset of the plane along the normal
    pub offset: f32,
}

impl Plane {
    /// Constructs new Plane instance
    pub fn new(normal: Vec3, offset: f32) -> Self {
        Self { normal, offset }
    }
}

impl ScalarField for Plane {
    fn evaluate(&self, position: Point3) -> f32 {
        self.normal.dot(position.to_vec()) - self.offset
    }
}

/// Solid sphere, positive inside
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    /// Sphere center
    pub center: Point3,
    /// Sphere radius
    pub radius: f32,
}

impl Sphere {
    /// Constructs new Sphere instance
    pub fn new(center: Point3, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl ScalarField for Sphere {
    fn evaluate(&self, position: Point3) -> f32 {
        self.radius - self.center.distance(position)
    }
}

/// Field with the same value everywhere
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constant(pub f32);

impl ScalarField for Constant {
    fn evaluate(&self, _position: Point3) -> f32 {
        self.0
    }
}
