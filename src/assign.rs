//! # Constrained Random Assignment
//!
//! Draws one door per position so that the door avoids two excluded values at
//! that position, uniformly over whatever remains. Sampling is rejection with
//! partial retention: the whole batch is drawn once, and afterwards only the
//! positions that collide with an exclusion are redrawn, pass after pass,
//! until none collide.

use crate::NUM_DOORS;
use crate::error::{InvalidInput, Side};
use rand::Rng;

/// The result of a constrained draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// One door per position, never equal to either exclusion.
    pub doors: Vec<usize>,
    /// Number of resampling passes after the initial draw.
    pub passes: usize,
}

/// Checks that `a` and `b` have equal length and only contain doors in
/// `0..NUM_DOORS`.
pub fn validate(a: &[usize], b: &[usize]) -> Result<(), InvalidInput> {
    if a.len() != b.len() {
        return Err(InvalidInput::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    for (side, doors) in [(Side::Left, a), (Side::Right, b)] {
        if let Some((index, &value)) = doors.iter().enumerate().find(|&(_, &d)| d >= NUM_DOORS) {
            return Err(InvalidInput::OutOfDomain { side, index, value });
        }
    }
    Ok(())
}

/// Draws doors avoiding `a[i]` and `b[i]` at every position `i`.
///
/// # Arguments
/// * `a`, `b` - Exclusions, equal length, every value in `0..NUM_DOORS`.
///   They may coincide at a position, in which case two doors remain valid there.
/// * `rng` - The random source. Pass a seeded generator for reproducible runs.
///
/// # Returns
/// The doors, or `InvalidInput` if the exclusions fail `validate`.
pub fn constrained_assign<R: Rng + ?Sized>(
    a: &[usize],
    b: &[usize],
    rng: &mut R,
) -> Result<Vec<usize>, InvalidInput> {
    constrained_assign_counted(a, b, rng).map(|assignment| assignment.doors)
}

/// Same as `constrained_assign`, but also reports how many resampling passes
/// were needed.
///
/// Each pass fixes a still-invalid position with probability at least 1/3, so
/// the loop terminates almost surely. There is no cap on the number of passes.
pub fn constrained_assign_counted<R: Rng + ?Sized>(
    a: &[usize],
    b: &[usize],
    rng: &mut R,
) -> Result<Assignment, InvalidInput> {
    validate(a, b)?;

    let mut doors: Vec<usize> = (0..a.len())
        .map(|_| rng.random_range(0..NUM_DOORS))
        .collect();
    // Positions outside this list were valid once and are never touched again.
    let mut bad: Vec<usize> = (0..doors.len())
        .filter(|&i| collides(doors[i], a[i], b[i]))
        .collect();
    let mut passes = 0;
    while !bad.is_empty() {
        for &i in &bad {
            doors[i] = rng.random_range(0..NUM_DOORS);
        }
        bad.retain(|&i| collides(doors[i], a[i], b[i]));
        passes += 1;
    }
    Ok(Assignment { doors, passes })
}

#[inline]
fn collides(door: usize, a: usize, b: usize) -> bool {
    door == a || door == b
}
