//! Random alias generation.
//!
//! Aliases are drawn uniformly from the alphanumeric alphabet (62 symbols)
//! using the OS-seeded thread RNG, so sequences are not predictable across
//! process restarts. This layer makes no uniqueness guarantee; collisions are
//! rejected by the storage engine's unique constraint on insert.

use rand::{Rng, distr::Alphanumeric};

/// Generates a random alias of exactly `length` alphanumeric characters.
///
/// Cannot fail; always returns a string of the requested length.
pub fn generate_alias(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
