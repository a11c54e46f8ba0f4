use isomesh_math::{is_finite, point3, EuclideanSpace, Point3, Vec3, Vec3u};

use crate::classify::Cube;
use crate::Error;

/// Tolerance accepting the last row of cubes when it reaches the extent only up to floating
/// point error
pub const EPSILON: f32 = 1e-4;

/// Default normal estimation step
pub const DEFAULT_DELTA: f32 = 1e-3;

/// Cube-shaped region split into cubes of equal size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    /// Minimal corner of the region
    pub origin: Point3,
    /// Side length of the region
    pub extent: f32,
    /// Edge length of a single cube
    pub cube_edge: f32,
    /// Finite difference step for normal estimation
    pub delta: f32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            origin: point3(0.0, 0.0, 0.0),
            extent: 1.0,
            cube_edge: 0.1,
            delta: DEFAULT_DELTA,
        }
    }
}

impl Grid {
    /// Constructs the grid with default normal estimation step
    pub fn new(origin: Point3, extent: f32, cube_edge: f32) -> Self {
        Self {
            origin,
            extent,
            cube_edge,
            delta: DEFAULT_DELTA,
        }
    }

    /// Sets normal estimation step
    pub fn with_delta(mut self, delta: f32) -> Self {
        self.delta = delta;
        self
    }

    /// Checks that the grid can be traversed
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.cube_edge.is_finite() && self.cube_edge > 0.0) {
            return Err(Error::InvalidCubeEdge(self.cube_edge));
        }
        if !(self.extent.is_finite() && self.extent >= 0.0) {
            return Err(Error::InvalidExtent(self.extent));
        }
        if !(self.delta.is_finite() && self.delta > 0.0) {
            return Err(Error::InvalidDelta(self.delta));
        }
        if !is_finite(self.origin.to_vec()) {
            return Err(Error::InvalidOrigin(self.origin));
        }
        Ok(())
    }

    /// Returns number of cubes along each axis
    ///
    /// A row is counted when its far side lies within [`EPSILON`] of the extent. Zero for an
    /// invalid grid.
    pub fn cells(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        ((self.extent + EPSILON) / self.cube_edge).floor() as usize
    }

    /// Returns total number of cubes, saturating at `usize::MAX`
    pub fn count_cubes(&self) -> usize {
        self.cells().saturating_pow(3)
    }

    /// Returns the cube at integer cell coordinates
    pub fn cube(&self, cell: Vec3u) -> Cube {
        let offset = Vec3::new(cell.x as f32, cell.y as f32, cell.z as f32) * self.cube_edge;
        Cube::new(self.origin + offset, self.cube_edge)
    }

    /// Iterates over cell coordinates, X is the outer axis and Z the inner one
    pub fn iter(&self) -> impl Iterator<Item = Vec3u> {
        let cells = self.cells();
        (0..cells).flat_map(move |x| {
            (0..cells).flat_map(move |y| (0..cells).map(move |z| Vec3u::new(x, y, z)))
        })
    }
}
