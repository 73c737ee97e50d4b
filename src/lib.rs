// # Monty Hall: Library for the Three-Door Simulation
//
// This crate simulates batches of the Monty Hall game and reports the win
// rate of staying against switching. The interesting part is the constrained
// assignment in `assign`, which draws doors that avoid two exclusions per
// trial without biasing the remaining choices.
//
// All randomness is passed in explicitly as `rand::Rng` handles; binaries
// seed a `rand_chacha::ChaCha20Rng` so runs are reproducible.

/// Number of doors in the game. Door values are `0..NUM_DOORS`.
pub const NUM_DOORS: usize = 3;

/// Batch size used when the caller does not pick one.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 8;

/// Errors reported for malformed input.
pub mod error;

/// Uniform door assignment avoiding two exclusions per position.
pub mod assign;

/// Trial generation and win-rate statistics.
pub mod simulate;

/// Human-readable rendering of a batch.
pub mod report;

pub use assign::{Assignment, constrained_assign, constrained_assign_counted};
pub use error::{InvalidInput, Side};
pub use simulate::{Summary, Trials, win_percentage_stay, win_percentage_switch};

/// Builds the crate's standard seeded generator.
pub fn seeded_rng(seed: u64) -> rand_chacha::ChaCha20Rng {
    use rand::SeedableRng;
    rand_chacha::ChaCha20Rng::seed_from_u64(seed)
}
