//! Vertex tables shared by the tutorial scenes.

use glam::Vec3;

pub const TRIANGLE: [f32; 9] = [
    -0.5, -0.5, 0.0, //
    0.5, -0.5, 0.0, //
    0.0, 0.5, 0.0,
];

/// Position + color per vertex.
#[rustfmt::skip]
pub const COLORED_TRIANGLE: [f32; 18] = [
    // positions       // colors
     0.5, -0.5, 0.0,   1.0, 0.0, 0.0,
    -0.5, -0.5, 0.0,   0.0, 1.0, 0.0,
     0.0,  0.5, 0.0,   0.0, 0.0, 1.0,
];

#[rustfmt::skip]
pub const RECTANGLE: [f32; 12] = [
     0.5,  0.5, 0.0,
     0.5, -0.5, 0.0,
    -0.5, -0.5, 0.0,
    -0.5,  0.5, 0.0,
];

pub const RECTANGLE_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// Unit cube, 36 vertices of position + texture coordinate.
#[rustfmt::skip]
pub const CUBE: [f32; 180] = [
    -0.5, -0.5, -0.5,  0.0, 0.0,
     0.5, -0.5, -0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 0.0,

    -0.5, -0.5,  0.5,  0.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
    -0.5,  0.5,  0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,

    -0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5,  0.5,  1.0, 0.0,

     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5,  0.5,  0.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,

    -0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  1.0, 1.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,

    -0.5,  0.5, -0.5,  0.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
];

pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// Vertices per cube face.
pub const FACE_VERTICES: i32 = 6;

/// First vertex and vertex count of `face` in [`CUBE`].
pub fn face_range(face: usize) -> (i32, i32) {
    (face as i32 * FACE_VERTICES, FACE_VERTICES)
}

/// [`CUBE`] with a third attribute holding each vertex's face index, for
/// sampling one layer of a texture array per face.
pub fn dice_cube() -> Vec<f32> {
    CUBE.chunks_exact(5)
        .enumerate()
        .flat_map(|(i, v)| v.iter().copied().chain([(i as i32 / FACE_VERTICES) as f32]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_is_centered_unit() {
        for v in CUBE.chunks_exact(5) {
            assert!(v[..3].iter().all(|c| c.abs() == 0.5));
            assert!(v[3..].iter().all(|t| (0.0..=1.0).contains(t)));
        }
    }

    #[test]
    fn rectangle_indices_in_range() {
        let vertices = (RECTANGLE.len() / 3) as u32;
        assert!(RECTANGLE_INDICES.iter().all(|&i| i < vertices));
    }

    #[test]
    fn face_ranges_tile_the_cube() {
        assert_eq!(face_range(0), (0, 6));
        assert_eq!(face_range(5), (30, 6));
        let (first, count) = face_range(5);
        assert_eq!((first + count) as usize, CUBE.len() / 5);
    }

    #[test]
    fn dice_cube_appends_face_index() {
        let dice = dice_cube();
        assert_eq!(dice.len(), 216);
        for (i, v) in dice.chunks_exact(6).enumerate() {
            assert_eq!(&v[..5], &CUBE[i * 5..i * 5 + 5]);
            assert_eq!(v[5], (i / 6) as f32);
        }
    }
}
