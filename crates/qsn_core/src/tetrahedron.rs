//! Tetrahedron primitive and its generator
//!
//! Every primitive starts from the same golden-ratio shape, then receives a
//! random Euler rotation and a random offset drawn from the shared stream.

use qsn_math::{RigidTransform, Vec3, PHI};

use crate::random::RandomSource;

/// Four ordered vertices
///
/// Vertex order fixes the four triangular faces, see [`Tetrahedron::FACES`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tetrahedron {
    pub vertices: [Vec3; 4],
}

impl Tetrahedron {
    /// Vertex indices of the four faces, in draw order
    pub const FACES: [[usize; 3]; 4] = [
        [0, 1, 2],
        [0, 1, 3],
        [0, 2, 3],
        [1, 2, 3],
    ];

    /// Create a tetrahedron from four vertices
    #[inline]
    pub fn new(vertices: [Vec3; 4]) -> Self {
        Self { vertices }
    }

    /// The untransformed golden-ratio shape scaled by `size`
    pub fn base(size: f32) -> Self {
        let s = size;
        let p = PHI * size;
        Self::new([
            Vec3::ZERO,
            Vec3::new(s, 0.0, 0.0),
            Vec3::new(p, p, 0.0),
            Vec3::new(p, 0.0, p),
        ])
    }

    /// The four face triangles in [`Tetrahedron::FACES`] order
    pub fn faces(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        Self::FACES
            .iter()
            .map(move |f| [self.vertices[f[0]], self.vertices[f[1]], self.vertices[f[2]]])
    }

    /// Squared distances between all six vertex pairs
    pub fn pairwise_distances_squared(&self) -> [f32; 6] {
        let v = &self.vertices;
        [
            v[0].distance_squared(v[1]),
            v[0].distance_squared(v[2]),
            v[0].distance_squared(v[3]),
            v[1].distance_squared(v[2]),
            v[1].distance_squared(v[3]),
            v[2].distance_squared(v[3]),
        ]
    }

    /// Apply a rotation and translation to every vertex
    pub fn transformed(&self, transform: &RigidTransform) -> Self {
        Self::new(transform.apply_all(self.vertices))
    }
}

/// Generate one randomly placed tetrahedron
///
/// Draws six values from `rng` in the order rotation x, y, z then offset
/// x, y, z. `size` must be positive.
pub fn generate(rng: &mut RandomSource, size: f32) -> Tetrahedron {
    generate_with_placement(rng, size).0
}

/// Generate a tetrahedron and also return the transform that placed it
pub fn generate_with_placement(rng: &mut RandomSource, size: f32) -> (Tetrahedron, RigidTransform) {
    debug_assert!(size > 0.0, "tetrahedron size must be positive, got {}", size);

    let rotation = rng.next_rotation();
    let offset = rng.next_offset_vec();
    let placement = RigidTransform::new(rotation, offset);

    (Tetrahedron::base(size).transformed(&placement), placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsn_math::transform;
    use std::f32::consts::TAU;

    const EPSILON: f32 = 0.001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON && (a.z - b.z).abs() < EPSILON
    }

    #[test]
    fn test_base_shape() {
        let t = Tetrahedron::base(2.0);
        assert_eq!(t.vertices[0], Vec3::ZERO);
        assert_eq!(t.vertices[1], Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(t.vertices[2], Vec3::new(2.0 * PHI, 2.0 * PHI, 0.0));
        assert_eq!(t.vertices[3], Vec3::new(2.0 * PHI, 0.0, 2.0 * PHI));
    }

    #[test]
    fn test_faces_order() {
        let t = Tetrahedron::base(1.0);
        let faces: Vec<[Vec3; 3]> = t.faces().collect();
        assert_eq!(faces.len(), 4);
        assert_eq!(faces[0], [t.vertices[0], t.vertices[1], t.vertices[2]]);
        assert_eq!(faces[1], [t.vertices[0], t.vertices[1], t.vertices[3]]);
        assert_eq!(faces[2], [t.vertices[0], t.vertices[2], t.vertices[3]]);
        assert_eq!(faces[3], [t.vertices[1], t.vertices[2], t.vertices[3]]);
    }

    #[test]
    fn test_generate_consumes_six_values() {
        let mut rng = RandomSource::new(5);
        generate(&mut rng, 1.0);
        assert_eq!(rng.draws(), 6);
        generate(&mut rng, 1.0);
        assert_eq!(rng.draws(), 12);
    }

    #[test]
    fn test_draw_order_rotation_then_offset() {
        let mut rng = RandomSource::new(42);
        let (_, placement) = generate_with_placement(&mut rng, 1.0);

        let mut replay = RandomSource::new(42);
        let rotation = Vec3::new(
            replay.next_uniform() * TAU,
            replay.next_uniform() * TAU,
            replay.next_uniform() * TAU,
        );
        let offset = Vec3::new(
            replay.next_uniform() * 10.0 - 5.0,
            replay.next_uniform() * 10.0 - 5.0,
            replay.next_uniform() * 10.0 - 5.0,
        );

        assert_eq!(placement.rotation, rotation);
        assert_eq!(placement.offset, offset);
    }

    #[test]
    fn test_first_tetrahedron_for_seed_123() {
        let mut rng = RandomSource::new(123);
        let t = generate(&mut rng, 1.0);

        let golden = [
            Vec3::new(-3.100414, 3.418548, 4.532561),
            Vec3::new(-3.509559, 2.835898, 5.234786),
            Vec3::new(-3.925121, 2.244110, 5.381754),
            Vec3::new(-2.480022, 1.575278, 6.784421),
        ];

        for (i, (got, want)) in t.vertices.iter().zip(golden.iter()).enumerate() {
            assert!(vec_approx_eq(*got, *want), "vertex {}: expected {:?}, got {:?}", i, want, got);
        }
    }

    #[test]
    fn test_placement_ranges() {
        let mut rng = RandomSource::new(2024);
        for _ in 0..2_000 {
            let (_, p) = generate_with_placement(&mut rng, 1.0);
            for a in [p.rotation.x, p.rotation.y, p.rotation.z] {
                assert!((0.0..TAU).contains(&a), "angle out of range: {}", a);
            }
            for o in [p.offset.x, p.offset.y, p.offset.z] {
                assert!((-5.0..5.0).contains(&o), "offset out of range: {}", o);
            }
        }
    }

    #[test]
    fn test_undoing_offset_recovers_rotated_base() {
        let mut rng = RandomSource::new(8);
        let base = Tetrahedron::base(1.0);
        for _ in 0..50 {
            let (t, p) = generate_with_placement(&mut rng, 1.0);
            // The origin vertex is fixed by the rotation, so it lands on the offset
            assert!(vec_approx_eq(t.vertices[0], p.offset));
            for (v, b) in t.vertices.iter().zip(base.vertices.iter()) {
                let expected = transform::apply(p.matrix(), *b);
                assert!(vec_approx_eq(*v - p.offset, expected));
            }
        }
    }

    #[test]
    fn test_rotation_does_not_preserve_distances() {
        let mut rng = RandomSource::new(123);
        let base = Tetrahedron::base(1.0).pairwise_distances_squared();

        let distorted = (0..100).filter(|_| {
            let t = generate(&mut rng, 1.0).pairwise_distances_squared();
            t.iter().zip(base.iter()).any(|(a, b)| (a - b).abs() > 0.01)
        }).count();

        assert!(distorted > 0, "expected the Euler layout to distort at least one tetrahedron");
    }

    #[test]
    fn test_size_scales_shape() {
        let mut a = RandomSource::new(77);
        let mut b = RandomSource::new(77);
        let (small, p) = generate_with_placement(&mut a, 1.0);
        let (large, _) = generate_with_placement(&mut b, 3.0);

        for (s, l) in small.vertices.iter().zip(large.vertices.iter()) {
            let scaled = (*s - p.offset) * 3.0 + p.offset;
            assert!(vec_approx_eq(scaled, *l));
        }
    }
}
