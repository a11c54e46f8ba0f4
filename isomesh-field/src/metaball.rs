use isomesh_log::debug;
use isomesh_math::{point3, vec3, MetricSpace, Point3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ScalarField;

/// Squared distance below which a ball contribution stops growing
const MIN_DISTANCE2: f32 = 1e-6;

/// Default amount of time added to the animation clock by each advance
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;

/// Orbital motion of a metaball around its anchor
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Motion {
    /// Radius of the orbit in XZ plane
    pub orbit: f32,
    /// Angular speed, radians per time unit
    pub speed: f32,
    /// Initial angle
    pub phase: f32,
    /// Amplitude of vertical bobbing
    pub bob: f32,
}

/// Single metaball
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metaball {
    /// Point the ball moves around
    pub anchor: Point3,
    /// Current center
    pub center: Point3,
    /// Ball radius, the contribution equals 1.0 at this distance
    pub radius: f32,
    /// Ball motion
    pub motion: Motion,
}

impl Metaball {
    /// Constructs a still metaball
    pub fn new(center: Point3, radius: f32) -> Self {
        Self {
            anchor: center,
            center,
            radius,
            motion: Motion::default(),
        }
    }

    /// Sets the ball motion
    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self.center = self.position_at(0.0);
        self
    }

    /// Returns `radius² / distance²` for the position
    pub fn contribution(&self, position: Point3) -> f32 {
        let distance2 = self.center.distance2(position).max(MIN_DISTANCE2);
        self.radius * self.radius / distance2
    }

    fn position_at(&self, time: f32) -> Point3 {
        let angle = self.motion.phase + self.motion.speed * time;
        self.anchor
            + vec3(
                self.motion.orbit * angle.cos(),
                self.motion.bob * (2.0 * angle).sin(),
                self.motion.orbit * angle.sin(),
            )
    }
}

/// Sum of metaballs, positive where the summed contribution exceeds 1.0
#[derive(Clone, Debug, PartialEq)]
pub struct MetaballField {
    /// Balls of the field
    pub balls: Vec<Metaball>,
    /// Current animation time
    pub time: f32,
    /// Time added by each advance
    pub time_step: f32,
}

impl Default for MetaballField {
    fn default() -> Self {
        Self {
            balls: Vec::new(),
            time: 0.0,
            time_step: DEFAULT_TIME_STEP,
        }
    }
}

impl MetaballField {
    /// Constructs a field from balls
    pub fn new(balls: Vec<Metaball>) -> Self {
        Self {
            balls,
            ..Default::default()
        }
    }

    /// Places `count` balls at random anchors inside of the box, with random motion
    ///
    /// Radii are a quarter to a half of the smallest box side. The same seed always produces
    /// the same layout.
    pub fn random(count: usize, min: Point3, max: Point3, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let size = (max - min).x.min((max - min).y).min((max - min).z);
        let balls = (0..count)
            .map(|_| {
                let anchor = point3(
                    rng.gen_range(min.x..=max.x),
                    rng.gen_range(min.y..=max.y),
                    rng.gen_range(min.z..=max.z),
                );
                let radius = rng.gen_range(0.25..=0.5) * size;
                let motion = Motion {
                    orbit: rng.gen_range(0.0..=0.25) * size,
                    speed: rng.gen_range(0.5..=2.0),
                    phase: rng.gen_range(0.0..=std::f32::consts::TAU),
                    bob: rng.gen_range(0.0..=0.1) * size,
                };
                Metaball::new(anchor, radius).with_motion(motion)
            })
            .collect::<Vec<_>>();
        debug!("Generated {} metaballs (seed {})", balls.len(), seed);
        Self::new(balls)
    }

    /// Sets the animation time step
    pub fn with_time_step(mut self, time_step: f32) -> Self {
        self.time_step = time_step;
        self
    }
}

impl ScalarField for MetaballField {
    fn evaluate(&self, position: Point3) -> f32 {
        self.balls
            .iter()
            .map(|ball| ball.contribution(position))
            .sum::<f32>()
            - 1.0
    }

    fn advance(&mut self) {
        self.time += self.time_step;
        let time = self.time;
        for ball in self.balls.iter_mut() {
            ball.center = ball.position_at(time);
        }
    }
}
