//! Per-frame scene assembly
//!
//! A frame is a fresh batch of tetrahedra drawn from the continuing random
//! stream. Nothing is cached between frames: two consecutive frames from the
//! same source show different fields.

use crate::constants::{NUM_TETRAHEDRA, TETRAHEDRON_SIZE};
use crate::random::RandomSource;
use crate::tetrahedron::{generate, Tetrahedron};

/// Builds the fixed-size collection of primitives for each frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneAssembler {
    /// Primitives per frame
    pub num_tetrahedra: usize,
    /// Base shape scale passed to the generator
    pub size: f32,
}

impl Default for SceneAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneAssembler {
    /// Create an assembler with the default density and size
    pub fn new() -> Self {
        Self {
            num_tetrahedra: NUM_TETRAHEDRA,
            size: TETRAHEDRON_SIZE,
        }
    }

    /// Builder: set the number of tetrahedra per frame
    pub fn with_num_tetrahedra(mut self, count: usize) -> Self {
        self.num_tetrahedra = count;
        self
    }

    /// Builder: set the base shape scale
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Generate all primitives for one frame, in generation order
    pub fn build_frame(&self, rng: &mut RandomSource) -> Vec<Tetrahedron> {
        let mut frame = Vec::with_capacity(self.num_tetrahedra);
        frame.extend(self.frame_iter(rng));
        frame
    }

    /// Lazily generate the primitives for one frame
    ///
    /// Yields exactly `num_tetrahedra` items. Dropping the iterator early
    /// leaves the stream advanced only by what was consumed.
    pub fn frame_iter<'a>(&self, rng: &'a mut RandomSource) -> impl Iterator<Item = Tetrahedron> + 'a {
        let size = self.size;
        (0..self.num_tetrahedra).map(move |_| generate(rng, size))
    }

    /// Number of triangles a frame of this assembler produces
    pub fn triangle_count(&self) -> usize {
        self.num_tetrahedra * Tetrahedron::FACES.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_density() {
        let scene = SceneAssembler::default();
        assert_eq!(scene.num_tetrahedra, 500);
        assert_eq!(scene.size, 1.0);
        assert_eq!(scene.triangle_count(), 2000);
    }

    #[test]
    fn test_frame_count() {
        let mut rng = RandomSource::new(123);
        let frame = SceneAssembler::new().build_frame(&mut rng);
        assert_eq!(frame.len(), 500);
        assert_eq!(rng.draws(), 3000);
    }

    #[test]
    fn test_custom_count() {
        let mut rng = RandomSource::new(1);
        let frame = SceneAssembler::new().with_num_tetrahedra(17).build_frame(&mut rng);
        assert_eq!(frame.len(), 17);

        let empty = SceneAssembler::new().with_num_tetrahedra(0).build_frame(&mut rng);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_iter_matches_eager() {
        let scene = SceneAssembler::new().with_num_tetrahedra(20);
        let mut a = RandomSource::new(9);
        let mut b = RandomSource::new(9);

        let eager = scene.build_frame(&mut a);
        let lazy: Vec<Tetrahedron> = scene.frame_iter(&mut b).collect();
        assert_eq!(eager, lazy);
    }

    #[test]
    fn test_frames_differ() {
        let scene = SceneAssembler::new().with_num_tetrahedra(10);
        let mut rng = RandomSource::new(123);
        let first = scene.build_frame(&mut rng);
        let second = scene.build_frame(&mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn test_first_frame_starts_with_first_generated() {
        let mut a = RandomSource::new(123);
        let mut b = RandomSource::new(123);
        let frame = SceneAssembler::new().with_num_tetrahedra(3).build_frame(&mut a);
        assert_eq!(frame[0], generate(&mut b, 1.0));
        assert_eq!(frame[1], generate(&mut b, 1.0));
    }
}
