//! Builders for test inputs and expected digests

mod test_data;
mod vectors;

pub use test_data::TestDataBuilder;
pub use vectors::{KnownVector, a_vectors, abc_vectors, streebog_empty_vectors};
