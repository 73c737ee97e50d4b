//! # Trial Simulation
//!
//! Runs a batch of independent three-door games. Prizes and first guesses are
//! drawn uniformly, then the host reveal and the switched guess are drawn with
//! the constrained assignment.

use crate::NUM_DOORS;
use crate::assign::{Assignment, constrained_assign_counted};
use rand::Rng;
use serde::Serialize;

/// Door hiding the prize in each trial.
pub fn simulate_prize_doors<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    (0..n).map(|_| rng.random_range(0..NUM_DOORS)).collect()
}

/// Contestant's first pick in each trial.
pub fn simulate_guesses<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    (0..n).map(|_| rng.random_range(0..NUM_DOORS)).collect()
}

/// The goat door the host opens: neither the guess nor the prize.
pub fn simulate_goat_reveal<R: Rng + ?Sized>(
    guesses: &[usize],
    prizes: &[usize],
    rng: &mut R,
) -> Result<Assignment, crate::InvalidInput> {
    constrained_assign_counted(guesses, prizes, rng)
}

/// The door the contestant switches to: neither the first guess nor the
/// opened door.
pub fn simulate_switch_guess<R: Rng + ?Sized>(
    guesses: &[usize],
    reveals: &[usize],
    rng: &mut R,
) -> Result<Assignment, crate::InvalidInput> {
    constrained_assign_counted(guesses, reveals, rng)
}

/// Percentage of trials where `guesses[i] == prizes[i]`.
///
/// Both slices must have the same length. An empty batch scores 0.
pub fn win_percentage(guesses: &[usize], prizes: &[usize]) -> f64 {
    debug_assert_eq!(guesses.len(), prizes.len());
    if guesses.is_empty() {
        return 0.0;
    }
    let wins = guesses.iter().zip(prizes).filter(|(g, p)| g == p).count();
    wins as f64 / guesses.len() as f64 * 100.0
}

/// Win rate of a contestant who keeps the first guess.
pub fn win_percentage_stay(guesses: &[usize], prizes: &[usize]) -> f64 {
    win_percentage(guesses, prizes)
}

/// Win rate of a contestant who switches after the reveal.
pub fn win_percentage_switch(switches: &[usize], prizes: &[usize]) -> f64 {
    win_percentage(switches, prizes)
}

/// A full batch of trials, aligned by index.
#[derive(Clone, Debug)]
pub struct Trials {
    pub prizes: Vec<usize>,
    pub guesses: Vec<usize>,
    pub reveals: Vec<usize>,
    pub switches: Vec<usize>,
    /// Resampling passes spent on `reveals`.
    pub reveal_passes: usize,
    /// Resampling passes spent on `switches`.
    pub switch_passes: usize,
}

impl Trials {
    /// Plays `n` games. Draw order is prizes, guesses, reveals, switches, so a
    /// given seed always reproduces the same batch.
    pub fn simulate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let prizes = simulate_prize_doors(n, rng);
        let guesses = simulate_guesses(n, rng);
        let reveal = simulate_goat_reveal(&guesses, &prizes, rng)
            .expect("generated doors are always in range and aligned");
        let switch = simulate_switch_guess(&guesses, &reveal.doors, rng)
            .expect("generated doors are always in range and aligned");
        Self {
            prizes,
            guesses,
            reveals: reveal.doors,
            switches: switch.doors,
            reveal_passes: reveal.passes,
            switch_passes: switch.passes,
        }
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn win_percentage_stay(&self) -> f64 {
        win_percentage_stay(&self.guesses, &self.prizes)
    }

    pub fn win_percentage_switch(&self) -> f64 {
        win_percentage_switch(&self.switches, &self.prizes)
    }
}

/// Serializable outcome of one run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub trials: usize,
    pub seed: u64,
    pub win_percentage_stay: f64,
    pub win_percentage_switch: f64,
    pub reveal_passes: usize,
    pub switch_passes: usize,
}

impl Summary {
    pub fn from_trials(trials: &Trials, seed: u64) -> Self {
        Self {
            trials: trials.len(),
            seed,
            win_percentage_stay: trials.win_percentage_stay(),
            win_percentage_switch: trials.win_percentage_switch(),
            reveal_passes: trials.reveal_passes,
            switch_passes: trials.switch_passes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn classic_result() {
        let mut rng = ChaCha20Rng::seed_from_u64(crate::DEFAULT_SEED);
        let trials = Trials::simulate(10_000, &mut rng);
        let stay = trials.win_percentage_stay();
        let switch = trials.win_percentage_switch();
        assert!((stay - 100.0 / 3.0).abs() < 2.0, "stay = {}", stay);
        assert!((switch - 200.0 / 3.0).abs() < 2.0, "switch = {}", switch);
        // Switching wins exactly when the first guess was wrong.
        assert!((stay + switch - 100.0).abs() < 1e-9);
    }

    #[test]
    fn per_trial_invariants_hold() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let t = Trials::simulate(3000, &mut rng);
        assert_eq!(t.len(), 3000);
        for i in 0..t.len() {
            assert_ne!(t.reveals[i], t.prizes[i]);
            assert_ne!(t.reveals[i], t.guesses[i]);
            assert_ne!(t.switches[i], t.guesses[i]);
            assert_ne!(t.switches[i], t.reveals[i]);
            assert_eq!(t.switches[i] == t.prizes[i], t.guesses[i] != t.prizes[i]);
        }
    }

    #[test]
    fn same_seed_same_batch() {
        let t1 = Trials::simulate(500, &mut ChaCha20Rng::seed_from_u64(8));
        let t2 = Trials::simulate(500, &mut ChaCha20Rng::seed_from_u64(8));
        assert_eq!(t1.prizes, t2.prizes);
        assert_eq!(t1.guesses, t2.guesses);
        assert_eq!(t1.reveals, t2.reveals);
        assert_eq!(t1.switches, t2.switches);
        assert_eq!(t1.reveal_passes, t2.reveal_passes);
    }

    #[test]
    fn win_percentage_counts_matches() {
        assert_eq!(win_percentage(&[0, 1, 2, 0], &[0, 1, 0, 1]), 50.0);
        assert_eq!(win_percentage_stay(&[2, 2], &[2, 2]), 100.0);
        assert_eq!(win_percentage_switch(&[1, 1], &[0, 2]), 0.0);
        assert_eq!(win_percentage(&[], &[]), 0.0);
    }

    #[test]
    fn empty_batch() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let t = Trials::simulate(0, &mut rng);
        assert!(t.is_empty());
        let summary = Summary::from_trials(&t, 0);
        assert_eq!(summary.trials, 0);
        assert_eq!(summary.win_percentage_stay, 0.0);
        assert_eq!(summary.reveal_passes, 0);
    }

    #[test]
    fn summary_serializes_all_fields() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let t = Trials::simulate(100, &mut rng);
        let summary = Summary::from_trials(&t, 5);
        let v = serde_json::to_value(&summary).unwrap();
        assert_eq!(v["trials"], 100);
        assert_eq!(v["seed"], 5);
        assert_eq!(v["reveal_passes"], t.reveal_passes);
        assert!(v["win_percentage_stay"].is_f64());
        assert!(v["win_percentage_switch"].is_f64());
    }
}
