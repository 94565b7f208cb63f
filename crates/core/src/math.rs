//! Axis and snapping math shared by the cube model.

use std::sync::OnceLock;

use glam::{Quat, Vec3};

/// The three positive principal axes. Rotation axes are always expressed in
/// this form; the turn direction carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit vector along the axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// The component of `v` along this axis.
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// The two principal axes orthogonal to this one.
    pub fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}

/// Snap a direction to its dominant principal axis, keeping the sign.
/// Returns `None` when no single component dominates (zero or diagonal
/// vectors), which callers treat as an unusable gesture rather than an error.
pub fn snap_to_axis(v: Vec3) -> Option<(Axis, f32)> {
    let a = v.abs();
    if a.x > a.y && a.x > a.z {
        Some((Axis::X, v.x.signum()))
    } else if a.y > a.x && a.y > a.z {
        Some((Axis::Y, v.y.signum()))
    } else if a.z > a.x && a.z > a.y {
        Some((Axis::Z, v.z.signum()))
    } else {
        None
    }
}

/// Snap a position to the nearest grid multiple of `spacing`, per component.
pub fn snap_position(p: Vec3, spacing: f32) -> Vec3 {
    Vec3::new(
        (p.x / spacing).round() * spacing,
        (p.y / spacing).round() * spacing,
        (p.z / spacing).round() * spacing,
    )
}

/// Snap an orientation to the nearest 90-degree-multiple rotation.
///
/// The result is always the canonical representative from [`cube_rotations`],
/// so snapping is bit-stable: equal rotations snap to the identical `Quat`
/// no matter which float path produced them, and re-snapping a snapped value
/// returns it unchanged.
pub fn snap_orientation(q: Quat) -> Quat {
    let mut best = Quat::IDENTITY;
    let mut best_dot = -1.0_f32;
    for &r in cube_rotations() {
        // |dot| because q and -q describe the same rotation.
        let d = q.dot(r).abs();
        if d > best_dot {
            best_dot = d;
            best = r;
        }
    }
    best
}

/// The 24 rotations of the cube group, one canonical representative each.
/// Built once by closing the identity over the three quarter-turn generators.
pub fn cube_rotations() -> &'static [Quat; 24] {
    static TABLE: OnceLock<[Quat; 24]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let generators = [
            Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
        ];
        let mut found = vec![canonical(Quat::IDENTITY)];
        let mut next = 0;
        while next < found.len() {
            let q = found[next];
            next += 1;
            for g in generators {
                let r = canonical(g * q);
                // Distinct group elements are at least a quarter turn apart
                // (|dot| <= cos 45 deg), so 0.9 separates cleanly.
                if !found.iter().any(|f| f.dot(r).abs() > 0.9) {
                    found.push(r);
                }
            }
        }
        found
            .try_into()
            .expect("quarter-turn closure of the identity has 24 elements")
    })
}

/// Normalize and pick one representative of {q, -q}: positive w, ties broken
/// by the first nonzero component.
fn canonical(q: Quat) -> Quat {
    let q = q.normalize();
    let flip = q.w < 0.0
        || (q.w == 0.0
            && (q.x < 0.0
                || (q.x == 0.0 && (q.y < 0.0 || (q.y == 0.0 && q.z < 0.0)))));
    if flip { q * -1.0 } else { q }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_axis_dominant() {
        assert_eq!(snap_to_axis(Vec3::new(0.9, 0.1, -0.2)), Some((Axis::X, 1.0)));
        assert_eq!(snap_to_axis(Vec3::new(0.0, -1.0, 0.1)), Some((Axis::Y, -1.0)));
        assert_eq!(snap_to_axis(Vec3::new(0.2, 0.1, 5.0)), Some((Axis::Z, 1.0)));
    }

    #[test]
    fn test_snap_to_axis_degenerate() {
        assert_eq!(snap_to_axis(Vec3::ZERO), None);
        assert_eq!(snap_to_axis(Vec3::new(1.0, 1.0, 0.0)), None);
    }

    #[test]
    fn test_snap_position_exact_multiples() {
        let spacing = 1.05;
        let p = snap_position(Vec3::new(1.0499999, -1.0500001, 0.0000003), spacing);
        assert_eq!(p, Vec3::new(spacing, -spacing, 0.0));
    }

    #[test]
    fn test_snap_position_idempotent() {
        let spacing = 1.05;
        let p = snap_position(Vec3::new(0.93, -1.1, 2.04), spacing);
        assert_eq!(snap_position(p, spacing), p);
    }

    #[test]
    fn test_cube_rotations_count_and_identity() {
        let table = cube_rotations();
        assert_eq!(table.len(), 24);
        assert_eq!(table[0], Quat::IDENTITY);
    }

    #[test]
    fn test_cube_rotations_closed_under_generators() {
        let table = cube_rotations();
        let g = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        for &q in table {
            let r = g * q;
            assert!(table.iter().any(|t| t.dot(r).abs() > 0.999));
        }
    }

    #[test]
    fn test_snap_orientation_idempotent() {
        for &q in cube_rotations() {
            assert_eq!(snap_orientation(q), q);
        }
    }

    #[test]
    fn test_snap_orientation_absorbs_drift() {
        let drift = Quat::from_rotation_y(0.003);
        for &q in cube_rotations() {
            assert_eq!(snap_orientation(drift * q), q);
        }
    }

    #[test]
    fn test_snap_orientation_sign_invariant() {
        let q = Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);
        assert_eq!(snap_orientation(q), snap_orientation(q * -1.0));
    }
}
