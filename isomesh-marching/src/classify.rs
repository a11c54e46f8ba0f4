use isomesh_field::ScalarField;
use isomesh_math::{Point3, Vec3};

use crate::tables::{CORNERS, EDGES};
use crate::Error;

/// Axis-aligned cube of the traversal grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
    /// Minimal corner
    pub corner: Point3,
    /// Edge length
    pub edge: f32,
}

impl Cube {
    /// Constructs new Cube instance
    pub fn new(corner: Point3, edge: f32) -> Self {
        Self { corner, edge }
    }

    /// Returns absolute position of a corner (0..8)
    pub fn corner_position(&self, corner: usize) -> Point3 {
        self.corner + Vec3::from(CORNERS[corner]) * self.edge
    }

    /// Returns absolute positions of an edge (0..12) endpoints
    pub fn edge_endpoints(&self, edge: usize) -> (Point3, Point3) {
        let [a, b] = EDGES[edge];
        (self.corner_position(a), self.corner_position(b))
    }
}

/// Evaluates the field, rejecting NaN and infinite values
pub fn sample<F>(field: &F, position: Point3) -> Result<f32, Error>
where
    F: ScalarField + ?Sized,
{
    let value = field.evaluate(position);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteSample { position, value })
    }
}

/// Checks if the value is inside of the volume
///
/// Zero is outside.
#[inline]
pub fn is_inside(value: f32) -> bool {
    value > 0.0
}

/// Returns case index of the cube: bit `i` is set when corner `i` is inside
pub fn classify<F>(field: &F, cube: &Cube) -> Result<u8, Error>
where
    F: ScalarField + ?Sized,
{
    let mut case = 0;
    for corner in 0..CORNERS.len() {
        if is_inside(sample(field, cube.corner_position(corner))?) {
            case |= 1 << corner;
        }
    }
    Ok(case)
}
