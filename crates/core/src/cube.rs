//! The cubie registry: 26 pieces on a 3x3x3 grid minus the center.

use glam::{IVec3, Quat, Vec3};

use crate::math::Axis;

/// Stable identity of one cubie; an index into the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubieId(pub usize);

/// The reference frame a cubie's transform is currently expressed in.
/// Pieces belong to the registry except while they ride a turn's pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frame {
    #[default]
    Registry,
    Pivot,
}

/// One of the 26 visible pieces.
#[derive(Debug, Clone)]
pub struct Cubie {
    /// Grid cell this piece was built in; fixed for life. Sticker colors and
    /// solved checks key off it.
    pub home: IVec3,
    /// Position in the owning frame, spacing-scaled. An exact grid multiple
    /// whenever no turn is in flight.
    pub position: Vec3,
    /// A 90-degree-multiple rotation whenever no turn is in flight.
    pub orientation: Quat,
    /// Current owner of the transform above.
    pub frame: Frame,
}

/// Slice membership margin as a fraction of the spacing. Generous; once
/// positions are snapped the comparison is effectively integer equality.
const SLICE_MARGIN: f32 = 0.1;

/// Owns the cubies and the grid spacing. Pieces are created once here and
/// never added or removed afterwards; only the rotation engine mutates them.
#[derive(Debug, Clone)]
pub struct CubeState {
    cubies: Vec<Cubie>,
    spacing: f32,
}

impl CubeState {
    /// Build the 26 pieces, one per grid cell in {-1,0,1}^3 minus the center.
    pub fn new(spacing: f32) -> Self {
        let mut cubies = Vec::with_capacity(26);
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    if x == 0 && y == 0 && z == 0 {
                        continue;
                    }
                    let home = IVec3::new(x, y, z);
                    cubies.push(Cubie {
                        home,
                        position: home.as_vec3() * spacing,
                        orientation: Quat::IDENTITY,
                        frame: Frame::Registry,
                    });
                }
            }
        }
        Self { cubies, spacing }
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn len(&self) -> usize {
        self.cubies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubies.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = CubieId> {
        (0..self.cubies.len()).map(CubieId)
    }

    pub fn cubies(&self) -> impl Iterator<Item = (CubieId, &Cubie)> {
        self.cubies.iter().enumerate().map(|(i, c)| (CubieId(i), c))
    }

    pub fn get(&self, id: CubieId) -> &Cubie {
        &self.cubies[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: CubieId) -> &mut Cubie {
        &mut self.cubies[id.0]
    }

    /// Integer grid cell for a cubie's current position. Meaningful when no
    /// turn holds the piece (positions are snapped then).
    pub fn grid_coords(&self, id: CubieId) -> IVec3 {
        let p = self.cubies[id.0].position / self.spacing;
        IVec3::new(
            p.x.round() as i32,
            p.y.round() as i32,
            p.z.round() as i32,
        )
    }

    /// Every cubie whose position lies on the given layer of the axis.
    /// Out-of-range slice indices simply select nothing.
    pub fn slice_members(&self, axis: Axis, slice: i32) -> Vec<CubieId> {
        let dir = axis.unit();
        let target = slice as f32 * self.spacing;
        let margin = SLICE_MARGIN * self.spacing;
        self.cubies
            .iter()
            .enumerate()
            .filter(|(_, c)| (c.position.dot(dir) - target).abs() < margin)
            .map(|(i, _)| CubieId(i))
            .collect()
    }

    /// Whether every piece sits in its home cell with identity orientation.
    /// Valid on an idle (snapped) cube.
    pub fn is_solved(&self) -> bool {
        self.ids().all(|id| {
            let c = &self.cubies[id.0];
            self.grid_coords(id) == c.home && c.orientation == Quat::IDENTITY
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_builds_26_cubies_without_center() {
        let cube = CubeState::new(1.05);
        assert_eq!(cube.len(), 26);
        let homes: HashSet<_> = cube.cubies().map(|(_, c)| (c.home.x, c.home.y, c.home.z)).collect();
        assert_eq!(homes.len(), 26);
        assert!(!homes.contains(&(0, 0, 0)));
    }

    #[test]
    fn test_initial_positions_spacing_scaled() {
        let spacing = 1.05;
        let cube = CubeState::new(spacing);
        for (_, c) in cube.cubies() {
            assert_eq!(c.position, c.home.as_vec3() * spacing);
            assert_eq!(c.orientation, Quat::IDENTITY);
            assert_eq!(c.frame, Frame::Registry);
        }
    }

    #[test]
    fn test_slice_partition_per_axis() {
        let cube = CubeState::new(1.05);
        for axis in Axis::ALL {
            let mut seen = HashSet::new();
            let mut total = 0;
            for slice in [-1, 0, 1] {
                let members = cube.slice_members(axis, slice);
                total += members.len();
                for id in members {
                    assert!(seen.insert(id), "cubie in two slices of {axis:?}");
                }
            }
            assert_eq!(total, 26);
        }
    }

    #[test]
    fn test_slice_sizes() {
        let cube = CubeState::new(1.05);
        assert_eq!(cube.slice_members(Axis::Y, 1).len(), 9);
        assert_eq!(cube.slice_members(Axis::Y, 0).len(), 8); // no center piece
        assert_eq!(cube.slice_members(Axis::Y, -1).len(), 9);
    }

    #[test]
    fn test_out_of_range_slice_is_empty() {
        let cube = CubeState::new(1.05);
        assert!(cube.slice_members(Axis::X, 2).is_empty());
        assert!(cube.slice_members(Axis::Z, -5).is_empty());
    }

    #[test]
    fn test_starts_solved() {
        assert!(CubeState::new(1.05).is_solved());
    }
}
