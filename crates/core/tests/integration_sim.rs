//! Integration tests for the headless simulation harness.
//!
//! Drives whole turns and scrambles through `Simulation` the way the gui
//! frame loop would, and checks the model's discrete-state guarantees.

use glam::IVec3;
use rubik_core::math::{cube_rotations, snap_orientation, snap_position};
use rubik_core::{Axis, Move, SimConfig, Simulation, TurnDirection};

const DT: f32 = 1.0 / 60.0;

#[test]
fn test_single_turn_and_inverse_restore_everything() {
    let mut h = Simulation::new(SimConfig::default());
    let before = h.poses();

    assert!(h.turn_and_settle(
        Move::new(Axis::X, 1, TurnDirection::Clockwise),
        DT
    ));
    assert!(h.turn_and_settle(
        Move::new(Axis::X, 1, TurnDirection::CounterClockwise),
        DT
    ));

    assert_eq!(h.poses(), before);
    assert!(h.cube.is_solved());
}

#[test]
fn test_every_move_has_an_exact_inverse() {
    for axis in Axis::ALL {
        for slice in [-1, 0, 1] {
            for direction in [TurnDirection::Clockwise, TurnDirection::CounterClockwise] {
                let mut h = Simulation::new(SimConfig::default());
                let before = h.poses();
                let mv = Move::new(axis, slice, direction);

                assert!(h.turn_and_settle(mv, DT));
                assert!(h.turn_and_settle(mv.inverse(), DT));

                assert_eq!(h.poses(), before, "inverse failed for {mv:?}");
            }
        }
    }
}

#[test]
fn test_four_quarter_turns_are_identity() {
    let mut h = Simulation::new(SimConfig::default());
    let before = h.poses();
    let mv = Move::new(Axis::Z, -1, TurnDirection::Clockwise);
    for _ in 0..4 {
        assert!(h.turn_and_settle(mv, DT));
    }
    assert_eq!(h.poses(), before);
}

#[test]
fn test_top_turn_anchor_example() {
    let mut h = Simulation::new(SimConfig::default());
    let corner = h.cubie_at(IVec3::new(1, 1, 1)).unwrap();
    let untouched: Vec<_> = h
        .cube
        .ids()
        .filter(|&id| h.cube.get(id).home.y < 1)
        .map(|id| (id, h.cube.get(id).position))
        .collect();
    assert_eq!(untouched.len(), 17);

    assert!(h.turn_and_settle(
        Move::new(Axis::Y, 1, TurnDirection::Clockwise),
        DT
    ));

    assert_eq!(h.cube.grid_coords(corner), IVec3::new(1, 1, -1));
    for (id, pos) in untouched {
        assert_eq!(h.cube.get(id).position, pos);
    }
}

#[test]
fn test_busy_rejection_mid_turn() {
    let mut h = Simulation::new(SimConfig::default());
    assert!(h.try_turn(Move::new(Axis::Y, 1, TurnDirection::Clockwise)));
    h.step(DT); // partway in

    assert!(!h.engine.is_idle());
    assert!(!h.try_turn(Move::new(Axis::X, -1, TurnDirection::Clockwise)));

    h.run_until_idle(DT);
    assert_eq!(h.engine.turns_completed(), 1);
}

#[test]
fn test_scramble_issues_exactly_n_turns() {
    let config = SimConfig {
        shuffle_moves: 12,
        ..SimConfig::default()
    };
    let mut h = Simulation::with_scramble(config, 42);

    // Generous frame budget: 12 turns plus delays at 60 fps.
    for _ in 0..20_000 {
        h.step(DT);
        if h.shuffle.is_done() && h.engine.is_idle() {
            break;
        }
    }

    assert!(h.shuffle.is_done());
    assert!(h.engine.is_idle());
    assert_eq!(h.engine.turns_completed(), 12);
    assert_eq!(h.shuffle.remaining(), 0);
}

#[test]
fn test_state_stays_discrete_after_scramble() {
    let config = SimConfig {
        shuffle_moves: 25,
        ..SimConfig::default()
    };
    let mut h = Simulation::with_scramble(config, 7);
    for _ in 0..40_000 {
        h.step(DT);
        if h.shuffle.is_done() && h.engine.is_idle() {
            break;
        }
    }
    assert!(h.shuffle.is_done() && h.engine.is_idle());

    let spacing = h.cube.spacing();
    for id in h.cube.ids() {
        let c = h.cube.get(id);
        // Positions sit exactly on the grid; snapping again changes nothing.
        assert_eq!(snap_position(c.position, spacing), c.position);
        let g = h.cube.grid_coords(id);
        assert!(g.x.abs() <= 1 && g.y.abs() <= 1 && g.z.abs() <= 1);
        // Orientations are canonical group elements, bit for bit.
        assert!(cube_rotations().contains(&c.orientation));
        assert_eq!(snap_orientation(c.orientation), c.orientation);
    }

    // The scramble touched the cube (25 random moves solving it back is
    // beyond astronomically unlikely with a fixed seed).
    assert!(!h.cube.is_solved());
}

#[test]
fn test_slice_partition_survives_scrambling() {
    let mut h = Simulation::with_scramble(SimConfig::default(), 3);
    for _ in 0..40_000 {
        h.step(DT);
        if h.shuffle.is_done() && h.engine.is_idle() {
            break;
        }
    }
    assert!(h.shuffle.is_done() && h.engine.is_idle());

    for axis in Axis::ALL {
        let total: usize = [-1, 0, 1]
            .iter()
            .map(|&s| h.cube.slice_members(axis, s).len())
            .sum();
        assert_eq!(total, 26);
    }
}
