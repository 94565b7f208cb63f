//! Pointer-drag interpretation: a press/release pair becomes a slice turn.

use glam::{Vec2, Vec3};

use crate::math::{self, Axis};
use crate::moves::{Move, TurnDirection};

/// A ray hit on the cube's outer surface, in cube-local coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit {
    /// Hit point.
    pub point: Vec3,
    /// Unit surface normal, snapped to a principal axis by the picker.
    pub normal: Vec3,
}

/// Tracks one press/release pair.
///
/// Callers start tracking only while the rotation engine is idle, and drop
/// the resolved move if the engine has become busy again by release time.
#[derive(Debug, Default)]
pub struct DragGesture {
    pending: Option<PendingDrag>,
}

#[derive(Debug, Clone, Copy)]
struct PendingDrag {
    screen_start: Vec2,
    hit: SurfaceHit,
}

impl DragGesture {
    pub fn press(&mut self, screen: Vec2, hit: SurfaceHit) {
        self.pending = Some(PendingDrag {
            screen_start: screen,
            hit,
        });
    }

    pub fn is_tracking(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Finish the drag. `project_dir` maps a cube-local direction at a base
    /// point to its screen-space direction (supplied by the camera, so this
    /// crate stays presentation-agnostic). Travel below `threshold_px` is a
    /// click, not a swipe, and resolves to nothing.
    pub fn release(
        &mut self,
        screen: Vec2,
        threshold_px: f32,
        spacing: f32,
        project_dir: impl Fn(Vec3, Vec3) -> Vec2,
    ) -> Option<Move> {
        let drag = self.pending.take()?;
        let delta = screen - drag.screen_start;
        if delta.length() < threshold_px {
            return None;
        }
        resolve_move(delta, drag.hit, spacing, project_dir)
    }
}

/// Map a screen displacement plus a surface hit to a turn.
///
/// The two candidate rotation axes are the cross products of the face normal
/// with each in-plane principal direction. A candidate wins when the drag
/// follows the on-screen direction of the surface motion it would produce
/// (the projection of candidate x normal); the winner is then reduced to its
/// positive principal form and the grabbed layer comes from the hit point.
pub fn resolve_move(
    delta: Vec2,
    hit: SurfaceHit,
    spacing: f32,
    project_dir: impl Fn(Vec3, Vec3) -> Vec2,
) -> Option<Move> {
    let (normal_axis, _) = math::snap_to_axis(hit.normal)?;

    let mut best: Option<(Vec3, f32)> = None;
    for in_plane in normal_axis.others() {
        let candidate = hit.normal.cross(in_plane.unit());
        let motion = project_dir(hit.point, candidate.cross(hit.normal));
        if motion.length_squared() < 1e-6 {
            continue; // edge-on to the camera, no usable signal
        }
        let alignment = delta.dot(motion.normalize()).abs();
        if best.map_or(true, |(_, a)| alignment > a) {
            best = Some((candidate, alignment));
        }
    }
    let (axis_vec, _) = best?;
    let (axis, _) = math::snap_to_axis(axis_vec)?;

    let slice = (axis.component(hit.point) / spacing).round() as i32;

    // Raw turn sense: does the drag follow the screen-projected
    // counterclockwise reference (positive axis x local normal)?
    let ccw_ref = project_dir(hit.point, axis.unit().cross(hit.normal));
    let raw_ccw = delta.dot(ccw_ref) > 0.0;

    // Reconcile with the engine's clockwise convention, per axis and slice
    // sign. The four cases are deliberately spelled out even though they
    // currently agree; they are not symmetric and have been tuned in place.
    let clockwise = match (axis, slice >= 0) {
        (Axis::X, true) => !raw_ccw,
        (Axis::X, false) => !raw_ccw,
        (Axis::Y, _) => !raw_ccw,
        (Axis::Z, _) => !raw_ccw,
    };

    Some(Move {
        axis,
        slice,
        direction: if clockwise {
            TurnDirection::Clockwise
        } else {
            TurnDirection::CounterClockwise
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPACING: f32 = 1.05;

    /// Head-on view of the +Z face: world x goes right on screen, world y up
    /// (screen y grows downward, as in egui).
    fn front_projection(_base: Vec3, dir: Vec3) -> Vec2 {
        Vec2::new(dir.x, -dir.y)
    }

    fn front_hit(x: f32, y: f32) -> SurfaceHit {
        SurfaceHit {
            point: Vec3::new(x, y, 1.3),
            normal: Vec3::Z,
        }
    }

    #[test]
    fn test_short_drag_is_a_click() {
        let mut g = DragGesture::default();
        g.press(Vec2::new(100.0, 100.0), front_hit(0.0, SPACING));
        let mv = g.release(Vec2::new(119.0, 100.0), 20.0, SPACING, front_projection);
        assert_eq!(mv, None);
        assert!(!g.is_tracking());
    }

    #[test]
    fn test_release_without_press_is_nothing() {
        let mut g = DragGesture::default();
        assert_eq!(
            g.release(Vec2::new(500.0, 0.0), 20.0, SPACING, front_projection),
            None
        );
    }

    #[test]
    fn test_horizontal_drag_picks_y_axis_top_layer() {
        let mv = resolve_move(
            Vec2::new(30.0, 0.0),
            front_hit(0.0, SPACING),
            SPACING,
            front_projection,
        )
        .unwrap();
        assert_eq!(mv.axis, Axis::Y);
        assert_eq!(mv.slice, 1);
        assert_eq!(mv.direction, TurnDirection::CounterClockwise);
    }

    #[test]
    fn test_opposite_drags_give_opposite_directions() {
        let right = resolve_move(
            Vec2::new(30.0, 0.0),
            front_hit(0.0, SPACING),
            SPACING,
            front_projection,
        )
        .unwrap();
        let left = resolve_move(
            Vec2::new(-30.0, 0.0),
            front_hit(0.0, SPACING),
            SPACING,
            front_projection,
        )
        .unwrap();
        assert_eq!(right.axis, left.axis);
        assert_eq!(right.slice, left.slice);
        assert_eq!(right.direction, left.direction.inverse());
    }

    #[test]
    fn test_vertical_drag_picks_x_axis_middle_column() {
        // Upward drag on screen: negative y in egui coordinates.
        let mv = resolve_move(
            Vec2::new(0.0, -30.0),
            front_hit(0.0, 0.0),
            SPACING,
            front_projection,
        )
        .unwrap();
        assert_eq!(mv.axis, Axis::X);
        assert_eq!(mv.slice, 0);
        assert_eq!(mv.direction, TurnDirection::Clockwise);
    }

    #[test]
    fn test_slice_index_follows_hit_point() {
        let mv = resolve_move(
            Vec2::new(0.0, 40.0),
            front_hit(-SPACING, 0.0),
            SPACING,
            front_projection,
        )
        .unwrap();
        assert_eq!(mv.axis, Axis::X);
        assert_eq!(mv.slice, -1);
    }

    #[test]
    fn test_degenerate_normal_resolves_to_nothing() {
        let hit = SurfaceHit {
            point: Vec3::new(0.0, 0.0, 1.3),
            normal: Vec3::new(0.7, 0.7, 0.0), // diagonal: no dominant axis
        };
        assert_eq!(
            resolve_move(Vec2::new(50.0, 0.0), hit, SPACING, front_projection),
            None
        );
    }

    #[test]
    fn test_cancel_discards_tracking() {
        let mut g = DragGesture::default();
        g.press(Vec2::ZERO, front_hit(0.0, 0.0));
        assert!(g.is_tracking());
        g.cancel();
        assert!(!g.is_tracking());
        assert_eq!(
            g.release(Vec2::new(100.0, 0.0), 20.0, SPACING, front_projection),
            None
        );
    }
}
