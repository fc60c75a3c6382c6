//! Random sources and outcome sampling.

pub mod random;
pub mod sampler;

pub use random::{FixedSequence, RandomSource, SeededSource};
pub use sampler::{sample, sample_at};
