//! Deterministic randomness source
//!
//! A single sequential PCG stream. The same seed always yields the same
//! sequence of values on every platform, and the stream is never rewound,
//! so consecutive frames draw fresh continuations of it.

use qsn_math::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use crate::constants::{DEFAULT_SEED, OFFSET_HALF_RANGE};

/// Stream selector for the PCG generator. Fixed so that only the seed
/// determines the sequence.
const STREAM: u64 = 0x0a02_bdbf_7bb3_c0a7;

/// Seeded pseudo-random generator producing uniform floats
///
/// Not cryptographically secure.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: Pcg32,
    seed: u64,
    draws: u64,
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource {
    /// Create a source seeded with `seed`
    pub fn new(seed: u64) -> Self {
        log::debug!("Seeding randomness stream with {}", seed);
        Self {
            rng: Pcg32::new(seed, STREAM),
            seed,
            draws: 0,
        }
    }

    /// The seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Uniform float in `[0, 1)`
    pub fn next_uniform(&mut self) -> f32 {
        self.draws += 1;
        self.rng.gen::<f32>()
    }

    /// Uniform angle in `[0, 2π)`
    pub fn next_angle(&mut self) -> f32 {
        self.next_uniform() * TAU
    }

    /// Uniform offset component in `[-5, 5)`
    pub fn next_offset(&mut self) -> f32 {
        self.next_uniform() * (2.0 * OFFSET_HALF_RANGE) - OFFSET_HALF_RANGE
    }

    /// Angle triple, drawn in x, y, z order
    pub fn next_rotation(&mut self) -> Vec3 {
        let x = self.next_angle();
        let y = self.next_angle();
        let z = self.next_angle();
        Vec3::new(x, y, z)
    }

    /// Offset triple, drawn in x, y, z order
    pub fn next_offset_vec(&mut self) -> Vec3 {
        let x = self.next_offset();
        let y = self.next_offset();
        let z = self.next_offset();
        Vec3::new(x, y, z)
    }
}
