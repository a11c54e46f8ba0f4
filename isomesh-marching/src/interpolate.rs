use isomesh_field::ScalarField;
use isomesh_log::debug;
use isomesh_math::{axes, clamp, InnerSpace, Point3, Vec3, Zero};
use isomesh_mesh::MeshBuilder;
use serde::{Deserialize, Serialize};

use crate::classify::{sample, Cube};
use crate::Error;

/// What to do with an edge that has equal field values at both ends
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Drop the whole triangle the edge belongs to
    #[default]
    Skip,
    /// Clamp the crossing parameter into the edge, the middle of the edge is used when it is
    /// not finite
    Clamp,
    /// Abort the cycle with [`Error::DegenerateEdge`]
    Fail,
}

/// Surface point on a cube edge
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeVertex {
    /// Position of the crossing
    pub position: Point3,
    /// Estimated surface normal
    pub normal: Vec3,
}

/// Returns the parameter `t` of the zero crossing between two values: `f1 + (f2 - f1) * t == 0`
#[inline]
pub fn crossing(f1: f32, f2: f32) -> f32 {
    -f1 / (f2 - f1)
}

/// Turns a field gradient into the surface normal
///
/// Normals point towards decreasing field value, outward from the inside region. A zero
/// gradient gives a zero normal.
pub fn outward_normal(gradient: Vec3) -> Vec3 {
    if gradient.magnitude2() > 0.0 {
        -gradient.normalize()
    } else {
        Vec3::zero()
    }
}

/// Locates isosurface crossings on cube edges and emits them into a mesh
pub struct EdgeInterpolator<'a, F: ScalarField + ?Sized> {
    field: &'a F,
    delta: f32,
    policy: DegeneratePolicy,
}

impl<'a, F: ScalarField + ?Sized> EdgeInterpolator<'a, F> {
    /// Constructs the interpolator with normal estimation step `delta`
    pub fn new(field: &'a F, delta: f32) -> Self {
        Self {
            field,
            delta,
            policy: DegeneratePolicy::default(),
        }
    }

    /// Sets degenerate edge policy
    pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Finds the crossing on the edge and estimates the normal there
    ///
    /// Returns [`Error::DegenerateEdge`] for equal endpoint values unless the policy is
    /// [`DegeneratePolicy::Clamp`].
    pub fn locate(&self, cube: &Cube, edge: usize) -> Result<EdgeVertex, Error> {
        let (p1, p2) = cube.edge_endpoints(edge);
        let f1 = sample(self.field, p1)?;
        let f2 = sample(self.field, p2)?;

        let t = crossing(f1, f2);
        let t = if t.is_finite() {
            t
        } else {
            match self.policy {
                DegeneratePolicy::Clamp => 0.5,
                DegeneratePolicy::Skip | DegeneratePolicy::Fail => {
                    return Err(Error::DegenerateEdge { edge, position: p1 })
                }
            }
        };
        let t = match self.policy {
            DegeneratePolicy::Clamp => clamp(t, 0.0, 1.0),
            _ => t,
        };

        let position = p1 + (p2 - p1) * t;
        let normal = outward_normal(self.gradient(position)?);
        Ok(EdgeVertex { position, normal })
    }

    /// Central differences of the field around the position, not divided by the step
    pub fn gradient(&self, position: Point3) -> Result<Vec3, Error> {
        let mut gradient = Vec3::zero();
        for (i, axis) in axes().into_iter().enumerate() {
            let offset = axis * self.delta;
            gradient[i] =
                sample(self.field, position + offset)? - sample(self.field, position - offset)?;
        }
        Ok(gradient)
    }

    /// Locates the crossing on the edge and appends it to the mesh
    ///
    /// Returns index of the new vertex.
    pub fn emit(&self, cube: &Cube, edge: usize, builder: &mut MeshBuilder) -> Result<u32, Error> {
        let vertex = self.locate(cube, edge)?;
        Ok(builder.emit_vertex(vertex.position, vertex.normal))
    }

    /// Emits a triangle given by three cube edges
    ///
    /// All three crossings are located before anything is emitted. Returns `false` when the
    /// triangle was skipped as degenerate.
    pub fn emit_triangle(
        &self,
        cube: &Cube,
        edges: [usize; 3],
        builder: &mut MeshBuilder,
    ) -> Result<bool, Error> {
        let mut vertices = [EdgeVertex {
            position: cube.corner,
            normal: Vec3::zero(),
        }; 3];
        for (vertex, edge) in vertices.iter_mut().zip(edges.iter()) {
            match self.locate(cube, *edge) {
                Ok(located) => *vertex = located,
                Err(Error::DegenerateEdge { edge, position })
                    if self.policy == DegeneratePolicy::Skip =>
                {
                    debug!(
                        "Skipping triangle {:?}: edge {} at {:?} is degenerate",
                        edges, edge, position
                    );
                    return Ok(false);
                }
                Err(error) => return Err(error),
            }
        }
        for vertex in vertices.iter() {
            builder.emit_vertex(vertex.position, vertex.normal);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isomesh_field::{Constant, Plane, Sphere};
    use isomesh_math::{point3, vec3, MetricSpace};

    const DELTA: f32 = 0.001;

    fn unit_cube() -> Cube {
        Cube::new(point3(0.0, 0.0, 0.0), 1.0)
    }

    #[test]
    fn crossing_parameter() {
        assert_eq!(crossing(-0.5, 0.5), 0.5);
        assert_eq!(crossing(1.0, -3.0), 0.25);
        assert!(!crossing(1.0, 1.0).is_finite());
        assert!(!crossing(0.0, 0.0).is_finite());
    }

    #[test]
    fn normal_points_against_gradient() {
        assert_eq!(outward_normal(vec3(2.0, 0.0, 0.0)), vec3(-1.0, 0.0, 0.0));
        assert_eq!(outward_normal(vec3(0.0, 0.0, 0.0)), vec3(0.0, 0.0, 0.0));
    }

    #[test]
    fn plane_crossing() {
        let plane = Plane::new(vec3(1.0, 0.0, 0.0), 0.25);
        let interpolator = EdgeInterpolator::new(&plane, DELTA);
        // edge 2 runs from corner 2 (1, 1, 0) to corner 3 (0, 1, 0)
        let vertex = interpolator.locate(&unit_cube(), 2).unwrap();
        assert!(vertex.position.distance(point3(0.25, 1.0, 0.0)) < 1e-5);
        assert!((vertex.normal - vec3(-1.0, 0.0, 0.0)).magnitude() < 1e-5);
    }

    #[test]
    fn sphere_normal_points_outward() {
        let sphere = Sphere::new(point3(0.0, 0.0, 0.0), 0.5);
        let interpolator = EdgeInterpolator::new(&sphere, DELTA);
        // edge 0 runs from the center to (1, 0, 0)
        let vertex = interpolator.locate(&unit_cube(), 0).unwrap();
        assert!(vertex.position.distance(point3(0.5, 0.0, 0.0)) < 1e-5);
        assert!((vertex.normal - vec3(1.0, 0.0, 0.0)).magnitude() < 1e-3);
    }

    #[test]
    fn emit_appends_one_vertex() {
        let plane = Plane::new(vec3(1.0, 0.0, 0.0), 0.5);
        let interpolator = EdgeInterpolator::new(&plane, DELTA);
        let mut builder = MeshBuilder::new();
        assert_eq!(interpolator.emit(&unit_cube(), 0, &mut builder), Ok(0));
        assert_eq!(interpolator.emit(&unit_cube(), 4, &mut builder), Ok(1));
        let mesh = builder.build();
        assert_eq!(mesh.count_vertices(), 2);
        assert_eq!(mesh.normals().len(), 2);
        assert_eq!(mesh.indices::<u32>(), &[0, 1]);
    }

    #[test]
    fn degenerate_edge_fails() {
        let field = Constant(1.0);
        let interpolator =
            EdgeInterpolator::new(&field, DELTA).with_policy(DegeneratePolicy::Fail);
        assert_eq!(
            interpolator.locate(&unit_cube(), 0),
            Err(Error::DegenerateEdge {
                edge: 0,
                position: point3(0.0, 0.0, 0.0)
            })
        );
    }

    #[test]
    fn degenerate_edge_clamps_to_middle() {
        let field = Constant(1.0);
        let interpolator =
            EdgeInterpolator::new(&field, DELTA).with_policy(DegeneratePolicy::Clamp);
        let vertex = interpolator.locate(&unit_cube(), 8).unwrap();
        assert_eq!(vertex.position, point3(0.0, 0.0, 0.5));
        assert_eq!(vertex.normal, vec3(0.0, 0.0, 0.0));
    }

    #[test]
    fn degenerate_triangle_is_skipped() {
        let field = Constant(1.0);
        let interpolator = EdgeInterpolator::new(&field, DELTA);
        let mut builder = MeshBuilder::new();
        let emitted = interpolator.emit_triangle(&unit_cube(), [0, 8, 3], &mut builder);
        assert_eq!(emitted, Ok(false));
        assert_eq!(builder.count_vertices(), 0);
    }

    #[test]
    fn triangle_emits_three_vertices() {
        let plane = Plane::new(vec3(1.0, 0.0, 0.0), 0.5);
        let interpolator = EdgeInterpolator::new(&plane, DELTA);
        let mut builder = MeshBuilder::new();
        let emitted = interpolator.emit_triangle(&unit_cube(), [0, 2, 4], &mut builder);
        assert_eq!(emitted, Ok(true));
        let mesh = builder.build();
        assert_eq!(mesh.count_faces(), 1);
        for position in mesh.positions() {
            assert!((position[0] - 0.5).abs() < 1e-5);
        }
    }
}
