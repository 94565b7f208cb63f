use glam::Vec3;
use rubik_core::{CubeState, CubieId, RotationEngine, SurfaceHit};

/// Fraction of the cell spacing a cubie's box occupies; the remainder reads
/// as the seams between pieces.
pub const CUBIE_SIZE_RATIO: f32 = 0.95;

/// A ray in cube-local (registry) space
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Slab-method ray/box intersection against an axis-aligned box.
/// Returns the entry distance and the outward normal of the entered face.
pub fn ray_box(ray: &Ray, center: Vec3, half: f32) -> Option<(f32, Vec3)> {
    let mut tmin = f32::NEG_INFINITY;
    let mut tmax = f32::INFINITY;
    let mut normal = Vec3::ZERO;

    for i in 0..3 {
        let o = ray.origin[i];
        let d = ray.direction[i];
        let lo = center[i] - half;
        let hi = center[i] + half;

        if d.abs() < 1e-8 {
            // Parallel to this slab: miss unless inside it.
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let mut t0 = (lo - o) * inv;
        let mut t1 = (hi - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t0 > tmin {
            tmin = t0;
            let mut n = Vec3::ZERO;
            n[i] = -d.signum();
            normal = n;
        }
        tmax = tmax.min(t1);
        if tmax < tmin {
            return None;
        }
    }

    // Origins inside or behind the box give no surface hit.
    if tmin <= 0.0 {
        return None;
    }
    Some((tmin, normal))
}

/// Cast against every cubie and return the nearest surface hit.
///
/// Gestures only begin while the engine is idle, so every box is axis-aligned
/// (orientations are exact quarter-turn multiples) and the entered face
/// normal is already principal. Picking during a turn returns nothing.
pub fn pick_cubie(
    ray: &Ray,
    cube: &CubeState,
    engine: &RotationEngine,
) -> Option<(CubieId, SurfaceHit)> {
    if !engine.is_idle() {
        return None;
    }
    let half = 0.5 * CUBIE_SIZE_RATIO * cube.spacing();
    let mut best: Option<(CubieId, f32, Vec3)> = None;

    for id in cube.ids() {
        let (center, _) = engine.world_pose(cube, id);
        if let Some((dist, normal)) = ray_box(ray, center, half) {
            if best.is_none_or(|(_, d, _)| dist < d) {
                best = Some((id, dist, normal));
            }
        }
    }

    best.map(|(id, dist, normal)| {
        (
            id,
            SurfaceHit {
                point: ray.origin + ray.direction * dist,
                normal,
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_box_frontal_hit() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
        };
        let (dist, normal) = ray_box(&ray, Vec3::ZERO, 0.5).unwrap();
        assert!((dist - 9.5).abs() < 1e-4);
        assert_eq!(normal, Vec3::Z);
    }

    #[test]
    fn test_ray_box_miss() {
        let ray = Ray {
            origin: Vec3::new(5.0, 0.0, 10.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
        };
        assert!(ray_box(&ray, Vec3::ZERO, 0.5).is_none());
    }

    #[test]
    fn test_ray_box_behind_origin() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::new(0.0, 0.0, 1.0),
        };
        assert!(ray_box(&ray, Vec3::ZERO, 0.5).is_none());
    }

    #[test]
    fn test_ray_box_side_normal() {
        let ray = Ray {
            origin: Vec3::new(-10.0, 0.2, 0.1),
            direction: Vec3::X,
        };
        let (_, normal) = ray_box(&ray, Vec3::ZERO, 0.5).unwrap();
        assert_eq!(normal, Vec3::NEG_X);
    }

    #[test]
    fn test_pick_nearest_cubie_on_face() {
        let cube = CubeState::new(1.05);
        let engine = RotationEngine::new();
        // Straight down the -Z axis at the front middle piece.
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
        };
        let (id, hit) = pick_cubie(&ray, &cube, &engine).unwrap();
        assert_eq!(cube.get(id).home, glam::IVec3::new(0, 0, 1));
        assert_eq!(hit.normal, Vec3::Z);
        assert!((hit.point.z - (1.05 + 0.5 * CUBIE_SIZE_RATIO * 1.05)).abs() < 1e-3);
    }

    #[test]
    fn test_pick_corner_over_center() {
        let cube = CubeState::new(1.05);
        let engine = RotationEngine::new();
        // Aimed at the top-right-front corner piece.
        let ray = Ray {
            origin: Vec3::new(1.05, 1.05, 10.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
        };
        let (id, _) = pick_cubie(&ray, &cube, &engine).unwrap();
        assert_eq!(cube.get(id).home, glam::IVec3::new(1, 1, 1));
    }
}
