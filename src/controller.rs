//! The demo controller: generates the vectors once and toggles which pair
//! is drawn as time passes.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::{DemoConfig, Norm};
use crate::error::Result;
use crate::library::{ORIGIN, Vec3, dot, dot_geometric, scale};
use crate::relation::{Relation, classify};
use crate::sampling::{range_i32, sample_vector};
use crate::sink::{Event, RayColor, Sink};

/// Which vector pair the next `step` draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairMode {
    Unscaled,
    Scaled,
}

impl PairMode {
    pub fn toggled(self) -> PairMode {
        match self {
            PairMode::Unscaled => PairMode::Scaled,
            PairMode::Scaled => PairMode::Unscaled,
        }
    }

    /// Colors for vector A and vector B.
    pub fn colors(self) -> (RayColor, RayColor) {
        match self {
            PairMode::Unscaled => (RayColor::Cyan, RayColor::Red),
            PairMode::Scaled => (RayColor::Yellow, RayColor::Magenta),
        }
    }
}

pub struct VectorDemo {
    rng: StdRng,
    switch_interval: f32,
    scalar_range: (i32, i32),
    norm: Norm,
    vector_a: Vec3,
    vector_b: Vec3,
    scaled_a: Vec3,
    scaled_b: Vec3,
    scalar_a: i32,
    scalar_b: i32,
    unscaled_dot: f32,
    scaled_dot: f32,
    relation: Option<Relation>,
    pair_mode: PairMode,
    elapsed: f32,
}

impl VectorDemo {
    pub fn new(config: &DemoConfig) -> Result<VectorDemo> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        VectorDemo::with_rng(config, rng)
    }

    pub fn with_rng(config: &DemoConfig, rng: StdRng) -> Result<VectorDemo> {
        config.validate()?;
        Ok(VectorDemo {
            rng,
            switch_interval: config.switch_interval,
            scalar_range: (config.scalar_min, config.scalar_max),
            norm: config.norm,
            vector_a: ORIGIN,
            vector_b: ORIGIN,
            scaled_a: ORIGIN,
            scaled_b: ORIGIN,
            scalar_a: 0,
            scalar_b: 0,
            unscaled_dot: 0.0,
            scaled_dot: 0.0,
            relation: None,
            pair_mode: PairMode::Unscaled,
            elapsed: 0.0,
        })
    }

    /// Draws scalars and vectors, then logs both dot products and the
    /// relation of the unscaled pair.
    pub fn initialize<S: Sink>(&mut self, sink: &mut S) {
        let (min, max) = self.scalar_range;
        self.scalar_a = range_i32(&mut self.rng, min, max);
        self.scalar_b = range_i32(&mut self.rng, min, max);
        self.vector_a = sample_vector(&mut self.rng);
        self.vector_b = sample_vector(&mut self.rng);
        info!(
            vector_a = ?self.vector_a,
            vector_b = ?self.vector_b,
            scalar_a = self.scalar_a,
            scalar_b = self.scalar_b,
            "generated vectors"
        );
        self.check_dot_product(sink);
    }

    /// Same as `initialize` but with caller-chosen vectors and scalars.
    pub fn initialize_with<S: Sink>(
        &mut self,
        vectors: (Vec3, Vec3),
        scalars: (i32, i32),
        sink: &mut S,
    ) {
        (self.vector_a, self.vector_b) = vectors;
        (self.scalar_a, self.scalar_b) = scalars;
        self.check_dot_product(sink);
    }

    fn check_dot_product<S: Sink>(&mut self, sink: &mut S) {
        self.scaled_a = scale(self.vector_a, self.scalar_a as f32);
        self.scaled_b = scale(self.vector_b, self.scalar_b as f32);

        self.unscaled_dot = dot(self.vector_a, self.vector_b);
        self.scaled_dot = dot(self.scaled_a, self.scaled_b);

        sink.emit(Event::Log(format!("Unscaled dot product: {}", self.unscaled_dot)));
        sink.emit(Event::Log(format!("Scaled dot product: {}", self.scaled_dot)));

        let mag = self.norm.function();
        debug!(
            geometric = dot_geometric(self.vector_a, self.vector_b, mag),
            coordinate = self.unscaled_dot,
            norm = ?self.norm,
            "unscaled dot product by both formulas"
        );

        self.relation = classify(self.unscaled_dot, self.vector_a, self.vector_b, mag);
        match self.relation {
            Some(relation) => sink.emit(Event::Log(relation.message().to_string())),
            None => debug!("no relation matched"),
        }
    }

    /// Advances the switch timer by `dt` and draws the active pair.
    pub fn step<S: Sink>(&mut self, dt: f32, sink: &mut S) {
        self.elapsed += dt;
        if self.elapsed > self.switch_interval {
            self.elapsed = 0.0;
            self.pair_mode = self.pair_mode.toggled();
            debug!(pair_mode = ?self.pair_mode, "switched vector set");
        }

        let (a, b) = self.active_pair();
        let (color_a, color_b) = self.pair_mode.colors();
        sink.emit(Event::Ray { origin: ORIGIN, direction: a, color: color_a });
        sink.emit(Event::Ray { origin: ORIGIN, direction: b, color: color_b });
    }

    pub fn active_pair(&self) -> (Vec3, Vec3) {
        match self.pair_mode {
            PairMode::Unscaled => (self.vector_a, self.vector_b),
            PairMode::Scaled => (self.scaled_a, self.scaled_b),
        }
    }

    pub fn dot_product_coordinate(vec1: Vec3, vec2: Vec3) -> f32 {
        dot(vec1, vec2)
    }

    pub fn dot_product_geometric(&self, vec1: Vec3, vec2: Vec3) -> f32 {
        dot_geometric(vec1, vec2, self.norm.function())
    }

    pub fn magnitude(&self, vec: Vec3) -> f32 {
        (self.norm.function())(vec)
    }

    pub fn vectors(&self) -> (Vec3, Vec3) {
        (self.vector_a, self.vector_b)
    }

    pub fn scaled_vectors(&self) -> (Vec3, Vec3) {
        (self.scaled_a, self.scaled_b)
    }

    pub fn scalars(&self) -> (i32, i32) {
        (self.scalar_a, self.scalar_b)
    }

    pub fn unscaled_dot(&self) -> f32 {
        self.unscaled_dot
    }

    pub fn scaled_dot(&self) -> f32 {
        self.scaled_dot
    }

    pub fn relation(&self) -> Option<Relation> {
        self.relation
    }

    pub fn pair_mode(&self) -> PairMode {
        self.pair_mode
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Largest absolute component among all four vectors.
    pub fn extent(&self) -> f32 {
        [self.vector_a, self.vector_b, self.scaled_a, self.scaled_b]
            .iter()
            .flat_map(|v| v.iter())
            .fold(0.0_f32, |acc, c| acc.max(c.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DemoError;
    use crate::sink::Recorder;

    fn demo(seed: u64) -> VectorDemo {
        let config = DemoConfig { seed: Some(seed), ..Default::default() };
        VectorDemo::new(&config).unwrap()
    }

    #[test]
    fn with_rng_rejects_empty_scalar_range() {
        let config = DemoConfig { scalar_min: 10, scalar_max: 2, ..Default::default() };
        let result = VectorDemo::with_rng(&config, StdRng::seed_from_u64(0));
        assert!(matches!(
            result,
            Err(DemoError::InvalidScalarRange { min: 10, max: 2 })
        ));
    }

    #[test]
    fn coordinate_dot_needs_no_instance() {
        assert_eq!(VectorDemo::dot_product_coordinate([1.0, 2.0, 3.0], [4.0, -5.0, 6.0]), 12.0);
    }

    #[test]
    fn toggles_only_after_strictly_exceeding_interval() {
        let mut demo = demo(1);
        let mut sink = Recorder::new();
        demo.initialize(&mut sink);
        for _ in 0..5 {
            demo.step(1.0, &mut sink);
        }
        assert_eq!(demo.pair_mode(), PairMode::Unscaled);
        assert_eq!(demo.elapsed(), 5.0);
        demo.step(1.0, &mut sink);
        assert_eq!(demo.pair_mode(), PairMode::Scaled);
        assert_eq!(demo.elapsed(), 0.0);
    }

    #[test]
    fn large_step_flips_once() {
        let mut demo = demo(2);
        let mut sink = Recorder::new();
        demo.initialize(&mut sink);
        demo.step(17.0, &mut sink);
        assert_eq!(demo.pair_mode(), PairMode::Scaled);
        assert_eq!(demo.elapsed(), 0.0);
    }

    #[test]
    fn step_draws_active_pair_with_mode_colors() {
        let mut demo = demo(3);
        let mut sink = Recorder::new();
        demo.initialize_with(([1.0, 2.0, 3.0], [-1.0, 0.5, 2.0]), (2, 4), &mut sink);
        sink.clear();

        demo.step(0.1, &mut sink);
        assert_eq!(
            sink.rays(),
            vec![([1.0, 2.0, 3.0], RayColor::Cyan), ([-1.0, 0.5, 2.0], RayColor::Red)]
        );

        sink.clear();
        demo.step(5.0, &mut sink);
        assert_eq!(
            sink.rays(),
            vec![([2.0, 4.0, 6.0], RayColor::Yellow), ([-4.0, 2.0, 8.0], RayColor::Magenta)]
        );
    }

    #[test]
    fn scaling_leaves_originals_alone() {
        let mut demo = demo(4);
        let mut sink = Recorder::new();
        demo.initialize_with(([1.0, -2.0, 0.5], [3.0, 3.0, -1.0]), (10, 3), &mut sink);
        assert_eq!(demo.vectors(), ([1.0, -2.0, 0.5], [3.0, 3.0, -1.0]));
        assert_eq!(demo.scaled_vectors(), ([10.0, -20.0, 5.0], [9.0, 9.0, -3.0]));
        assert_eq!(demo.scaled_dot(), 30.0 * demo.unscaled_dot());
    }

    #[test]
    fn extent_covers_scaled_vectors() {
        let mut demo = demo(5);
        let mut sink = Recorder::new();
        demo.initialize_with(([1.0, -2.0, 0.5], [3.0, 3.0, -1.0]), (10, 3), &mut sink);
        assert_eq!(demo.extent(), 20.0);
    }
}
