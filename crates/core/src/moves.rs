//! Move values and random scramble moves.

use rand::Rng;

use crate::math::Axis;

/// Turn sense as seen by the gesture resolver; the engine translates it to a
/// signed angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    Clockwise,
    CounterClockwise,
}

impl TurnDirection {
    /// Signed target angle in degrees under the engine's convention:
    /// clockwise turns run to -90, counterclockwise to +90.
    pub fn target_degrees(self) -> f32 {
        match self {
            TurnDirection::Clockwise => -90.0,
            TurnDirection::CounterClockwise => 90.0,
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            TurnDirection::Clockwise => TurnDirection::CounterClockwise,
            TurnDirection::CounterClockwise => TurnDirection::Clockwise,
        }
    }
}

/// One slice-turn instruction: which axis, which layer along it, which way.
/// Produced by the gesture resolver or the scramble driver and consumed
/// immediately by the rotation engine; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Positive principal rotation axis.
    pub axis: Axis,
    /// Layer coordinate along the axis, -1, 0 or 1 for a real slice.
    pub slice: i32,
    pub direction: TurnDirection,
}

impl Move {
    pub fn new(axis: Axis, slice: i32, direction: TurnDirection) -> Self {
        Self { axis, slice, direction }
    }

    /// The move that undoes this one.
    pub fn inverse(self) -> Self {
        Self {
            direction: self.direction.inverse(),
            ..self
        }
    }

    /// A uniformly random outer-slice move. Middle layers are not scrambled.
    pub fn random_outer(rng: &mut impl Rng) -> Self {
        let axis = Axis::ALL[rng.gen_range(0..Axis::ALL.len())];
        let slice = if rng.gen_bool(0.5) { 1 } else { -1 };
        let direction = if rng.gen_bool(0.5) {
            TurnDirection::Clockwise
        } else {
            TurnDirection::CounterClockwise
        };
        Self { axis, slice, direction }
    }
}
