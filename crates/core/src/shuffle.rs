//! Random scramble driver.

use rand::Rng;

use crate::cube::CubeState;
use crate::moves::Move;
use crate::rotation::RotationEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Counting down to the next move once the engine is idle.
    Waiting,
    Done,
}

/// Issues a bounded sequence of random outer-slice turns, strictly one at a
/// time: each move waits for the engine to return to idle, then for a settle
/// delay, before the next is drawn. Polled once per tick; never an event
/// callback.
#[derive(Debug)]
pub struct ShuffleDriver {
    remaining: u32,
    phase: Phase,
    timer: f32,
}

impl ShuffleDriver {
    /// A scramble of `moves` turns, starting after `startup_delay` seconds.
    pub fn new(moves: u32, startup_delay: f32) -> Self {
        Self {
            remaining: moves,
            phase: if moves == 0 { Phase::Done } else { Phase::Waiting },
            timer: startup_delay,
        }
    }

    /// A driver with nothing to do, for starting unscrambled.
    pub fn finished() -> Self {
        Self::new(0, 0.0)
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Moves not yet issued.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Advance timers and issue the next move when its time comes.
    pub fn tick(
        &mut self,
        dt: f32,
        settle_delay: f32,
        cube: &mut CubeState,
        engine: &mut RotationEngine,
        rng: &mut impl Rng,
    ) {
        if self.phase == Phase::Done {
            return;
        }
        // The running turn must finish before the settle timer counts.
        if !engine.is_idle() {
            return;
        }
        self.timer -= dt;
        if self.timer > 0.0 {
            return;
        }
        let mv = Move::random_outer(rng);
        if engine.try_turn(cube, mv) {
            self.remaining -= 1;
            self.timer = settle_delay;
            tracing::debug!(?mv, remaining = self.remaining, "scramble move");
            if self.remaining == 0 {
                self.phase = Phase::Done;
                tracing::info!("scramble finished");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_zero_moves_is_done_immediately() {
        let driver = ShuffleDriver::new(0, 1.0);
        assert!(driver.is_done());
        assert!(ShuffleDriver::finished().is_done());
    }

    #[test]
    fn test_waits_out_startup_delay() {
        let mut cube = CubeState::new(1.05);
        let mut engine = RotationEngine::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut driver = ShuffleDriver::new(3, 1.0);

        // Half the delay: nothing issued yet.
        for _ in 0..30 {
            driver.tick(1.0 / 60.0, 0.1, &mut cube, &mut engine, &mut rng);
        }
        assert!(engine.is_idle());
        assert_eq!(driver.remaining(), 3);

        // The rest of it: the first move starts.
        for _ in 0..40 {
            driver.tick(1.0 / 60.0, 0.1, &mut cube, &mut engine, &mut rng);
        }
        assert!(!engine.is_idle());
        assert_eq!(driver.remaining(), 2);
    }

    #[test]
    fn test_does_not_issue_while_engine_busy() {
        let mut cube = CubeState::new(1.05);
        let mut engine = RotationEngine::new();
        let mut rng = StdRng::seed_from_u64(2);
        let mut driver = ShuffleDriver::new(2, 0.0);

        driver.tick(0.1, 0.0, &mut cube, &mut engine, &mut rng);
        assert_eq!(driver.remaining(), 1);
        let in_flight = engine.current_move();

        // However long we poll, no second move overlaps the first.
        for _ in 0..100 {
            driver.tick(0.1, 0.0, &mut cube, &mut engine, &mut rng);
        }
        assert_eq!(driver.remaining(), 1);
        assert_eq!(engine.current_move(), in_flight);
    }
}
