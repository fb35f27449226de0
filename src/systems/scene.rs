//! Scene generation system
//!
//! Owns the randomness stream and assembles a fresh frame of tetrahedra on
//! every display pass. The stream is never reset, so each frame continues
//! where the previous one stopped.

use qsn_core::{RandomSource, SceneAssembler, Tetrahedron};

/// Produces the primitives for each rendered frame
pub struct SceneSystem {
    assembler: SceneAssembler,
    rng: RandomSource,
    frames_built: u64,
}

impl SceneSystem {
    /// Create a scene system from an assembler and a seeded stream
    pub fn new(assembler: SceneAssembler, rng: RandomSource) -> Self {
        Self {
            assembler,
            rng,
            frames_built: 0,
        }
    }

    /// Generate the next frame
    pub fn next_frame(&mut self) -> Vec<Tetrahedron> {
        let frame = self.assembler.build_frame(&mut self.rng);
        self.frames_built += 1;
        log::debug!(
            "Frame {}: {} tetrahedra ({} values drawn)",
            self.frames_built,
            frame.len(),
            self.rng.draws()
        );
        frame
    }

    /// Number of frames generated so far
    pub fn frames_built(&self) -> u64 {
        self.frames_built
    }

    /// The assembler's settings
    pub fn assembler(&self) -> &SceneAssembler {
        &self.assembler
    }
}
