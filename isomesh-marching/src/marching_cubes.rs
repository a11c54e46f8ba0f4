use isomesh_field::ScalarField;
use isomesh_log::{debug, warn};
use isomesh_mesh::{Mesh, MeshBuilder};

use crate::classify::classify;
use crate::grid::Grid;
use crate::interpolate::{DegeneratePolicy, EdgeInterpolator};
use crate::tables;
use crate::Error;

/// Counters of a single traversal
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CycleStats {
    /// Number of visited cubes
    pub cubes: usize,
    /// Number of cubes the surface passes through
    pub surface_cubes: usize,
    /// Number of emitted triangles
    pub triangles: usize,
    /// Number of triangles dropped as degenerate
    pub skipped: usize,
}

/// Marching cubes mesh generator
///
/// Owns the published mesh and a builder for the next one. Each [`MarchingCubes::polygonize`]
/// call rebuilds the mesh from scratch and replaces the published one only on success.
#[derive(Debug, Default)]
pub struct MarchingCubes {
    /// Traversal region
    pub grid: Grid,
    /// Degenerate edge policy
    pub policy: DegeneratePolicy,
    builder: MeshBuilder,
    mesh: Mesh,
    stats: CycleStats,
    cycles: u64,
}

impl MarchingCubes {
    /// Constructs the generator over the grid
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            ..Default::default()
        }
    }

    /// Sets degenerate edge policy
    pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs a full cycle: advances the field once, traverses the grid and publishes the mesh
    ///
    /// The grid is validated before the field is touched. On any error the previously
    /// published mesh stays in place.
    pub fn polygonize<F>(&mut self, field: &mut F) -> Result<&Mesh, Error>
    where
        F: ScalarField + ?Sized,
    {
        if let Err(error) = self.grid.validate() {
            warn!("Marching cubes grid is misconfigured: {}", error);
            return Err(error);
        }

        field.advance();
        self.builder.clear();

        match traverse(&self.grid, self.policy, &*field, &mut self.builder) {
            Ok(stats) => {
                self.builder.publish(&mut self.mesh);
                self.stats = stats;
                self.cycles += 1;
                debug!(
                    "Cycle {}: {} cubes, {} on surface, {} triangles, {} skipped",
                    self.cycles, stats.cubes, stats.surface_cubes, stats.triangles, stats.skipped
                );
                Ok(&self.mesh)
            }
            Err(error) => {
                self.builder.clear();
                Err(error)
            }
        }
    }

    /// Traverses the grid once against the current field state, without advancing it
    pub fn extract<F>(&self, field: &F) -> Result<Mesh, Error>
    where
        F: ScalarField + ?Sized,
    {
        self.grid.validate()?;
        let mut builder = MeshBuilder::new();
        traverse(&self.grid, self.policy, field, &mut builder)?;
        Ok(builder.build())
    }

    /// Returns the last published mesh
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Returns counters of the last successful cycle
    pub fn last_stats(&self) -> CycleStats {
        self.stats
    }

    /// Returns number of successful cycles
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}

fn traverse<F>(
    grid: &Grid,
    policy: DegeneratePolicy,
    field: &F,
    builder: &mut MeshBuilder,
) -> Result<CycleStats, Error>
where
    F: ScalarField + ?Sized,
{
    let interpolator = EdgeInterpolator::new(field, grid.delta).with_policy(policy);
    let mut stats = CycleStats::default();

    for cell in grid.iter() {
        let cube = grid.cube(cell);
        let case = classify(field, &cube)?;
        stats.cubes += 1;

        let triangles = tables::triangles(case);
        if triangles.is_empty() {
            continue;
        }
        stats.surface_cubes += 1;

        for triangle in triangles.iter() {
            if interpolator.emit_triangle(&cube, *triangle, builder)? {
                stats.triangles += 1;
            } else {
                stats.skipped += 1;
            }
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use isomesh_field::{Constant, Sphere};
    use isomesh_math::point3;

    #[test]
    fn stats_of_single_cube() {
        let mut mc = MarchingCubes::new(Grid::new(point3(0.0, 0.0, 0.0), 1.0, 1.0));
        let mut field = Sphere::new(point3(0.0, 0.0, 0.0), 0.5);
        mc.polygonize(&mut field).unwrap();
        assert_eq!(
            mc.last_stats(),
            CycleStats {
                cubes: 1,
                surface_cubes: 1,
                triangles: 1,
                skipped: 0
            }
        );
        assert_eq!(mc.cycles(), 1);
    }

    #[test]
    fn empty_region() {
        let mut mc = MarchingCubes::new(Grid::new(point3(0.0, 0.0, 0.0), 0.5, 1.0));
        let mesh = mc.polygonize(&mut Constant(1.0)).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mc.last_stats().cubes, 0);
    }

    #[test]
    fn extract_matches_polygonize_for_static_field() {
        let mut mc = MarchingCubes::new(Grid::new(point3(-1.0, -1.0, -1.0), 2.0, 0.25));
        let mut field = Sphere::new(point3(0.1, 0.0, -0.2), 0.7);
        let extracted = mc.extract(&field).unwrap();
        let published = mc.polygonize(&mut field).unwrap();
        assert_eq!(&extracted, published);
    }
}
