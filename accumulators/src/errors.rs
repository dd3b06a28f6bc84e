use std::{error, fmt};

pub(crate) type Result<T> = core::result::Result<T, AccumulatorError>;

/// Errors raised by the accumulator crate.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AccumulatorError {
    /// The proof index was not set before proving.
    IndexNotSet,
    /// The proof index points past the last leaf.
    IndexOutOfRange,
    /// The proof index can only be chosen on an empty tree.
    IndexSetOnNonEmptyTree,
    /// The tree holds no leaves.
    EmptyTree,
}

impl fmt::Display for AccumulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccumulatorError::IndexNotSet => "The proof index was not set before proving",
            AccumulatorError::IndexOutOfRange => "The proof index points past the last leaf",
            AccumulatorError::IndexSetOnNonEmptyTree => {
                "The proof index can only be chosen on an empty tree"
            }
            AccumulatorError::EmptyTree => "The tree holds no leaves",
        })
    }
}

impl error::Error for AccumulatorError {}
