use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::field::MetaballField;
use crate::marching::{DegeneratePolicy, Grid, MarchingCubes};
use crate::math::Point3;
use crate::Error;

/// Isomesh Settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Minimal corner of the bounding region
    pub origin: [f32; 3],
    /// Side length of the bounding region
    pub extent: f32,
    /// Edge length of a marching cube
    pub cube_edge: f32,
    /// Finite difference step for normals
    pub delta: f32,
    /// Degenerate edge handling
    pub degenerate: DegeneratePolicy,
    /// Number of metaballs in the demo field
    pub metaballs: usize,
    /// Seed of the metaball layout
    pub seed: u64,
    /// Animation time added by each cycle
    pub time_step: f32,
    /// Number of cycles to run
    pub cycles: usize,
    /// Path of the OBJ file receiving the last mesh
    pub output: Option<PathBuf>,
    /// Enable or disable debug outputs
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            origin: [0.0, 0.0, 0.0],
            extent: 1.0,
            cube_edge: 0.05,
            delta: 0.001,
            degenerate: DegeneratePolicy::Skip,
            metaballs: 4,
            seed: 0,
            time_step: 1.0 / 60.0,
            cycles: 60,
            output: None,
            debug: false,
        }
    }
}

impl Settings {
    /// Parses settings from JSON, missing keys keep default values
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes settings into pretty JSON
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets bounding region
    pub fn region(mut self, origin: [f32; 3], extent: f32) -> Self {
        self.origin = origin;
        self.extent = extent;
        self
    }

    /// Sets cube edge length
    pub fn cube_edge(mut self, value: f32) -> Self {
        self.cube_edge = value;
        self
    }

    /// Sets normal estimation step
    pub fn delta(mut self, value: f32) -> Self {
        self.delta = value;
        self
    }

    /// Sets degenerate edge handling
    pub fn degenerate(mut self, value: DegeneratePolicy) -> Self {
        self.degenerate = value;
        self
    }

    /// Sets metaballs count and layout seed
    pub fn metaballs(mut self, count: usize, seed: u64) -> Self {
        self.metaballs = count;
        self.seed = seed;
        self
    }

    /// Sets number of cycles
    pub fn cycles(mut self, value: usize) -> Self {
        self.cycles = value;
        self
    }

    /// Sets OBJ output path
    pub fn output(mut self, value: Option<PathBuf>) -> Self {
        self.output = value;
        self
    }

    /// Sets debug mode
    pub fn debug(mut self, value: bool) -> Self {
        self.debug = value;
        self
    }

    /// Returns traversal grid
    pub fn grid(&self) -> Grid {
        Grid::new(Point3::from(self.origin), self.extent, self.cube_edge).with_delta(self.delta)
    }

    /// Returns mesh generator configured by the settings
    pub fn generator(&self) -> MarchingCubes {
        MarchingCubes::new(self.grid()).with_policy(self.degenerate)
    }

    /// Returns the demo metaball field placed inside of the bounding region
    ///
    /// Fails with the grid error when the region can not be traversed.
    pub fn field(&self) -> Result<MetaballField, Error> {
        self.grid().validate()?;
        let min = Point3::from(self.origin);
        let max = Point3::new(
            min.x + self.extent,
            min.y + self.extent,
            min.z + self.extent,
        );
        // keep balls away from the region walls so the surface stays closed
        let margin = 0.3 * self.extent;
        Ok(MetaballField::random(
            self.metaballs,
            Point3::new(min.x + margin, min.y + margin, min.z + margin),
            Point3::new(max.x - margin, max.y - margin, max.z - margin),
            self.seed,
        )
        .with_time_step(self.time_step))
    }
}
