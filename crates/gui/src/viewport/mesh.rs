use glam::{IVec3, Vec3};

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y,
/// norm.z, r, g, b], 9 floats per vertex.
#[derive(Clone)]
pub struct MeshData {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

/// Classic sticker palette, one color per face direction.
const STICKER_RIGHT: [f32; 3] = [0.78, 0.12, 0.12]; // +X red
const STICKER_LEFT: [f32; 3] = [0.95, 0.47, 0.10]; // -X orange
const STICKER_UP: [f32; 3] = [0.92, 0.92, 0.92]; // +Y white
const STICKER_DOWN: [f32; 3] = [0.95, 0.85, 0.10]; // -Y yellow
const STICKER_FRONT: [f32; 3] = [0.10, 0.60, 0.22]; // +Z green
const STICKER_BACK: [f32; 3] = [0.12, 0.30, 0.80]; // -Z blue

/// Interior plastic between stickers.
const BODY_COLOR: [f32; 3] = [0.06, 0.06, 0.07];

/// One cubie's mesh in its own local frame: six quads, exterior faces
/// sticker-colored by the piece's home cell, interior faces dark plastic.
/// The mesh never changes afterwards; turning a piece only changes the model
/// matrix it is drawn with.
pub fn cubie_mesh(home: IVec3, size: f32) -> MeshData {
    let h = size * 0.5;

    let faces: [([Vec3; 4], Vec3); 6] = [
        // Front (+Z)
        (
            [
                Vec3::new(-h, -h, h),
                Vec3::new(h, -h, h),
                Vec3::new(h, h, h),
                Vec3::new(-h, h, h),
            ],
            Vec3::Z,
        ),
        // Back (-Z)
        (
            [
                Vec3::new(h, -h, -h),
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, h, -h),
                Vec3::new(h, h, -h),
            ],
            Vec3::NEG_Z,
        ),
        // Right (+X)
        (
            [
                Vec3::new(h, -h, h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, h, -h),
                Vec3::new(h, h, h),
            ],
            Vec3::X,
        ),
        // Left (-X)
        (
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, -h, h),
                Vec3::new(-h, h, h),
                Vec3::new(-h, h, -h),
            ],
            Vec3::NEG_X,
        ),
        // Top (+Y)
        (
            [
                Vec3::new(-h, h, h),
                Vec3::new(h, h, h),
                Vec3::new(h, h, -h),
                Vec3::new(-h, h, -h),
            ],
            Vec3::Y,
        ),
        // Bottom (-Y)
        (
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, -h, h),
                Vec3::new(-h, -h, h),
            ],
            Vec3::NEG_Y,
        ),
    ];

    let mut vertices = Vec::with_capacity(24 * 9);
    let mut indices = Vec::with_capacity(36);

    for (quad, normal) in &faces {
        let color = face_color(home, *normal);
        let base = (vertices.len() / 9) as u32;
        for v in quad {
            vertices.extend_from_slice(&[
                v.x, v.y, v.z, normal.x, normal.y, normal.z, color[0], color[1], color[2],
            ]);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

/// Sticker color for a face, or plastic when the face points at a neighbor.
fn face_color(home: IVec3, normal: Vec3) -> [f32; 3] {
    if normal == Vec3::X && home.x == 1 {
        STICKER_RIGHT
    } else if normal == Vec3::NEG_X && home.x == -1 {
        STICKER_LEFT
    } else if normal == Vec3::Y && home.y == 1 {
        STICKER_UP
    } else if normal == Vec3::NEG_Y && home.y == -1 {
        STICKER_DOWN
    } else if normal == Vec3::Z && home.z == 1 {
        STICKER_FRONT
    } else if normal == Vec3::NEG_Z && home.z == -1 {
        STICKER_BACK
    } else {
        BODY_COLOR
    }
}
