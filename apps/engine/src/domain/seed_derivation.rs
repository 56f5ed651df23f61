//! RNG seed derivation utilities for deterministic game behavior.
//!
//! A game carries one base seed; every round's deal uses a seed derived from
//! it so a whole game replays exactly from the base seed alone.

/// Fresh base seed for a game when none was configured.
pub fn random_game_seed() -> u64 {
    rand::random()
}

/// Derive the seed for dealing a round (1-based `round_no`).
pub fn derive_dealing_seed(game_seed: u64, round_no: u32) -> u64 {
    // SplitMix64 finalizer over (seed + round * golden ratio).
    let mut z = game_seed.wrapping_add((round_no as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
