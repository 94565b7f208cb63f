//! The rotation engine: animates one slice turn at a time.

use glam::{Quat, Vec3};

use crate::cube::{CubeState, CubieId, Frame};
use crate::math::{self, Axis};
use crate::moves::Move;

/// Ephemeral rotation helper inserted as the slice's parent for the duration
/// of one turn. It sits at the registry origin, so re-parenting a member is
/// just a frame reassignment; local coordinates carry over unchanged.
#[derive(Debug)]
struct Pivot {
    axis: Axis,
    /// Accumulated signed angle, degrees. Clockwise turns run negative.
    angle_deg: f32,
}

impl Pivot {
    /// Registry-frame rotation for the current angle. The angle bookkeeping
    /// is clockwise-negative as seen facing the slice; glam quaternions are
    /// right-handed, so the sign flips exactly here and nowhere else.
    fn rotation(&self) -> Quat {
        Quat::from_axis_angle(self.axis.unit(), (-self.angle_deg).to_radians())
    }
}

#[derive(Debug)]
struct ActiveTurn {
    mv: Move,
    pivot: Pivot,
    members: Vec<CubieId>,
    target_deg: f32,
}

/// Drives at most one slice turn at a time.
///
/// `try_turn` while a turn is in flight is a rejected no-op, not an error;
/// callers are expected to check `is_idle` first. A started turn always runs
/// to completion; there is no cancellation.
#[derive(Debug, Default)]
pub struct RotationEngine {
    active: Option<ActiveTurn>,
    turns_completed: u64,
}

impl RotationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The availability query: true when a new turn may start.
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// The move currently animating, if any.
    pub fn current_move(&self) -> Option<Move> {
        self.active.as_ref().map(|t| t.mv)
    }

    /// Completed turns since construction.
    pub fn turns_completed(&self) -> u64 {
        self.turns_completed
    }

    /// Begin a turn. Returns false, changing nothing, if one is in flight.
    pub fn try_turn(&mut self, cube: &mut CubeState, mv: Move) -> bool {
        if self.active.is_some() {
            return false;
        }
        let members = cube.slice_members(mv.axis, mv.slice);
        for &id in &members {
            cube.get_mut(id).frame = Frame::Pivot;
        }
        tracing::debug!(?mv, members = members.len(), "turn started");
        self.active = Some(ActiveTurn {
            mv,
            pivot: Pivot {
                axis: mv.axis,
                angle_deg: 0.0,
            },
            members,
            target_deg: mv.direction.target_degrees(),
        });
        true
    }

    /// Advance the animation by `dt` seconds at `speed_deg` degrees/second.
    /// The angle approaches the target monotonically; the final step is
    /// clamped to land on it exactly. Returns true on the completing tick.
    pub fn tick(&mut self, cube: &mut CubeState, speed_deg: f32, dt: f32) -> bool {
        let Some(turn) = self.active.as_mut() else {
            return false;
        };

        let remaining = turn.target_deg - turn.pivot.angle_deg;
        let advance = speed_deg * dt;
        if advance < remaining.abs() {
            turn.pivot.angle_deg += advance.copysign(remaining);
            return false;
        }
        turn.pivot.angle_deg = turn.target_deg;

        // Turn finished: hand every member back to the registry frame and
        // snap, so float drift never survives past a turn boundary.
        let rot = turn.pivot.rotation();
        let mv = turn.mv;
        let members = std::mem::take(&mut turn.members);
        let spacing = cube.spacing();
        for &id in &members {
            let c = cube.get_mut(id);
            c.position = math::snap_position(rot * c.position, spacing);
            c.orientation = math::snap_orientation(rot * c.orientation);
            c.frame = Frame::Registry;
        }
        self.active = None;
        self.turns_completed += 1;
        tracing::debug!(?mv, total = self.turns_completed, "turn finished");
        true
    }

    /// Rotation the pivot currently applies to its members; identity when
    /// idle.
    pub fn pivot_rotation(&self) -> Quat {
        self.active
            .as_ref()
            .map_or(Quat::IDENTITY, |t| t.pivot.rotation())
    }

    /// A cubie's pose in the registry frame, resolving the pivot frame for
    /// pieces that are mid-turn.
    pub fn world_pose(&self, cube: &CubeState, id: CubieId) -> (Vec3, Quat) {
        let c = cube.get(id);
        match c.frame {
            Frame::Registry => (c.position, c.orientation),
            Frame::Pivot => {
                let rot = self.pivot_rotation();
                (rot * c.position, rot * c.orientation)
            }
        }
    }
}
