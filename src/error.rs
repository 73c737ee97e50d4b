use std::fmt;

/// Which of the two exclusion arrays held an offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Rejected input to the constrained assignment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("invalid input: exclusion arrays differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("invalid input: {side} array has door {value} at index {index}, expected 0..{max}", max = crate::NUM_DOORS)]
    OutOfDomain {
        side: Side,
        index: usize,
        value: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let e = InvalidInput::LengthMismatch { left: 3, right: 2 };
        assert_eq!(
            e.to_string(),
            "invalid input: exclusion arrays differ in length (3 vs 2)"
        );
        let e = InvalidInput::OutOfDomain {
            side: Side::Right,
            index: 4,
            value: 7,
        };
        assert_eq!(
            e.to_string(),
            "invalid input: right array has door 7 at index 4, expected 0..3"
        );
    }
}
