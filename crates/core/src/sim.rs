//! The assembled simulation: cube, engine, and scramble driver behind one
//! frame-step API. The gui drives it once per frame; integration tests drive
//! it headless.

use glam::{IVec3, Quat, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SimConfig;
use crate::cube::{CubeState, CubieId};
use crate::moves::Move;
use crate::rotation::RotationEngine;
use crate::shuffle::ShuffleDriver;

pub struct Simulation {
    pub config: SimConfig,
    pub cube: CubeState,
    pub engine: RotationEngine,
    pub shuffle: ShuffleDriver,
    rng: StdRng,
}

impl Simulation {
    /// A fresh solved cube with no scramble pending.
    pub fn new(config: SimConfig) -> Self {
        let cube = CubeState::new(config.spacing);
        Self {
            config,
            cube,
            engine: RotationEngine::new(),
            shuffle: ShuffleDriver::finished(),
            rng: StdRng::from_entropy(),
        }
    }

    /// A fresh cube with the configured scramble queued and a fixed RNG seed,
    /// so test runs are reproducible.
    pub fn with_scramble(config: SimConfig, seed: u64) -> Self {
        let mut sim = Self::new(config);
        sim.restart();
        sim.rng = StdRng::seed_from_u64(seed);
        sim
    }

    /// Rebuild a solved cube and queue the configured scramble.
    pub fn restart(&mut self) {
        self.cube = CubeState::new(self.config.spacing);
        self.engine = RotationEngine::new();
        self.shuffle = ShuffleDriver::new(self.config.shuffle_moves, self.config.shuffle_delay);
        tracing::info!(moves = self.config.shuffle_moves, "cube rebuilt, scramble queued");
    }

    /// One simulation frame.
    pub fn step(&mut self, dt: f32) {
        self.engine
            .tick(&mut self.cube, self.config.clamped_rotation_speed(), dt);
        self.shuffle.tick(
            dt,
            self.config.settle_delay,
            &mut self.cube,
            &mut self.engine,
            &mut self.rng,
        );
    }

    /// Request a turn; false while one is in flight.
    pub fn try_turn(&mut self, mv: Move) -> bool {
        self.engine.try_turn(&mut self.cube, mv)
    }

    /// Step frames until the engine goes idle. Panics if it never does, so a
    /// stuck animation fails tests loudly; the gui never calls this.
    pub fn run_until_idle(&mut self, dt: f32) {
        for _ in 0..100_000 {
            if self.engine.is_idle() {
                return;
            }
            self.step(dt);
        }
        panic!("rotation engine never returned to idle");
    }

    /// Issue a move from idle and animate it to completion.
    pub fn turn_and_settle(&mut self, mv: Move, dt: f32) -> bool {
        let accepted = self.try_turn(mv);
        self.run_until_idle(dt);
        accepted
    }

    /// Snapshot of every cubie's pose, for exact before/after comparisons.
    pub fn poses(&self) -> Vec<(Vec3, Quat)> {
        self.cube
            .cubies()
            .map(|(_, c)| (c.position, c.orientation))
            .collect()
    }

    /// The cubie currently occupying a grid cell, if any. Meaningful while
    /// idle.
    pub fn cubie_at(&self, cell: IVec3) -> Option<CubieId> {
        self.cube.ids().find(|&id| self.cube.grid_coords(id) == cell)
    }
}
