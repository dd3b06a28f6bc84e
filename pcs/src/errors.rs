use opal_accumulators::errors::AccumulatorError;
use opal_algebra::errors::AlgebraError;
use std::{error, fmt};

pub(crate) type Result<T> = core::result::Result<T, PcsError>;

/// Errors raised by the proof systems of this crate.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PcsError {
    /// Algebra error.
    Algebra(AlgebraError),
    /// Accumulator error.
    Accumulator(AccumulatorError),
    /// The number of digests does not match the number of points.
    InvalidNumberOfPoints,
    /// The batch opening proof does not verify.
    VerifyOpeningProof,
    /// The fully folded evaluation vector is not constant.
    LowDegree,
    /// A predicted fold value disagrees with the next step of the proof.
    ProximityTestFolding,
    /// The evaluation vector does not have the expected even size.
    OddSize,
    /// The Merkle roots of the opening and the proof of proximity differ.
    MerkleRoot,
    /// A Merkle path does not verify.
    MerklePath,
    /// The requested opening position is out of range.
    RangePosition,
    /// The ring degree must be a power of two, at least two.
    NotAPowerOfTwo,
    /// The degree of the polynomial is higher than the maximum supported.
    Degree,
    /// Cannot compute the evaluation proof as f(x) != y.
    PCSProveEval,
    /// The challenge label is not part of the transcript.
    ChallengeNotFound,
    /// The challenge was already computed.
    ChallengeAlreadyComputed,
    /// A previous challenge of the transcript was skipped.
    PreviousChallengeNotComputed,
    /// The field has no root of unity of the requested order.
    RootOfUnityNotFound,
    /// Unexpected parameter for method or function.
    Parameter(String),
}

impl fmt::Display for PcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PcsError::*;
        match self {
            Algebra(e) => f.write_str(&format!("Algebra: {}", e)),
            Accumulator(e) => f.write_str(&format!("Accumulator: {}", e)),
            InvalidNumberOfPoints => {
                f.write_str("The number of digests should be equal to the number of points")
            }
            VerifyOpeningProof => f.write_str("Can't verify the batch opening proof"),
            LowDegree => f.write_str("The fully folded polynomial is not of low degree"),
            ProximityTestFolding => f.write_str("One round of interaction failed"),
            OddSize => f.write_str("The size should be even"),
            MerkleRoot => f.write_str(
                "The Merkle roots of the opening and the proof of proximity don't coincide",
            ),
            MerklePath => f.write_str("The Merkle path proof is wrong"),
            RangePosition => f.write_str("The asked opening position is out of range"),
            NotAPowerOfTwo => f.write_str("The ring degree must be a power of 2, at least 2"),
            Degree => f.write_str(
                "The degree of the polynomial is higher than the maximum degree supported",
            ),
            PCSProveEval => f.write_str("Cannot compute the evaluation proof as f(x) != y"),
            ChallengeNotFound => f.write_str("The challenge label is not part of the transcript"),
            ChallengeAlreadyComputed => f.write_str("The challenge was already computed"),
            PreviousChallengeNotComputed => {
                f.write_str("A previous challenge of the transcript was skipped")
            }
            RootOfUnityNotFound => {
                f.write_str("The field has no root of unity of the requested order")
            }
            Parameter(e) => f.write_str(&format!("Unexpected parameter: {}", e)),
        }
    }
}

impl error::Error for PcsError {}

impl From<AlgebraError> for PcsError {
    fn from(e: AlgebraError) -> PcsError {
        PcsError::Algebra(e)
    }
}

impl From<AccumulatorError> for PcsError {
    fn from(e: AccumulatorError) -> PcsError {
        PcsError::Accumulator(e)
    }
}
