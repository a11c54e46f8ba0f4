use std::fs::File;
use std::io::BufWriter;

use crate::log::{debug, info};
use crate::mesh::Mesh;
use crate::{Error, Settings};

/// Summary of a finished run
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// Number of cycles run
    pub cycles: usize,
    /// Mesh of the last cycle
    pub mesh: Mesh,
    /// Largest triangle count among the cycles
    pub max_triangles: usize,
}

/// Animates the settings' metaball field for the configured number of cycles
///
/// Every cycle rebuilds the mesh. The last mesh is written to the output file if any.
pub fn run(settings: &Settings) -> Result<Report, Error> {
    let mut generator = settings.generator();
    let mut field = settings.field()?;
    let mut max_triangles = 0;

    info!(
        "Running {} cycles over {} cubes",
        settings.cycles,
        generator.grid.count_cubes()
    );

    for cycle in 0..settings.cycles {
        let triangles = generator.polygonize(&mut field)?.count_faces();
        let stats = generator.last_stats();
        debug!(
            "Cycle {} at t = {:.3}: {} triangles in {} surface cubes",
            cycle, field.time, triangles, stats.surface_cubes
        );
        max_triangles = max_triangles.max(triangles);
    }

    let mesh = generator.mesh().clone();
    info!(
        "Last mesh: {} vertices, {} triangles",
        mesh.count_vertices(),
        mesh.count_faces()
    );

    if let Some(path) = settings.output.as_ref() {
        let mut writer = BufWriter::new(File::create(path)?);
        mesh.write_obj(&mut writer)?;
        info!("Mesh written to {:?}", path);
    }

    Ok(Report {
        cycles: settings.cycles,
        mesh,
        max_triangles,
    })
}
