//! Compile-time scene defaults
//!
//! These are the values used when no configuration overrides them.

/// Number of tetrahedra assembled per frame
pub const NUM_TETRAHEDRA: usize = 500;

/// Edge scale of the base tetrahedron
pub const TETRAHEDRON_SIZE: f32 = 1.0;

/// Seed of the randomness stream
pub const DEFAULT_SEED: u64 = 123;

/// Offsets are drawn uniformly from `[-OFFSET_HALF_RANGE, OFFSET_HALF_RANGE)`
pub const OFFSET_HALF_RANGE: f32 = 5.0;

/// Values drawn from the stream per generated tetrahedron
pub const DRAWS_PER_TETRAHEDRON: u64 = 6;
