use crate::errors::{PcsError, Result};
use merlin::Transcript;
use opal_algebra::prelude::*;

/// A Fiat-Shamir transcript with an ordered list of challenge labels.
///
/// Data is bound to a label with [`Self::bind`]; a challenge is drawn with
/// [`Self::compute_challenge`]. Challenges must be computed in declaration
/// order, and no data can be bound to a label once its challenge is out.
/// Binding order within a label is significant: every appended message
/// changes the transcript state, and each challenge folds in everything
/// bound before it.
pub struct LabeledTranscript {
    transcript: Transcript,
    labels: Vec<Vec<u8>>,
    next: usize,
}

impl LabeledTranscript {
    /// Create a transcript with the given ordered challenge labels.
    pub fn new(labels: Vec<Vec<u8>>) -> LabeledTranscript {
        LabeledTranscript {
            transcript: Transcript::new(b"opal-pcs"),
            labels,
            next: 0,
        }
    }

    fn position(&self, label: &[u8]) -> Result<usize> {
        self.labels
            .iter()
            .position(|l| l.as_slice() == label)
            .ok_or(PcsError::ChallengeNotFound)
    }

    /// Append `data` to the challenge identified by `label`.
    pub fn bind(&mut self, label: &[u8], data: &[u8]) -> Result<()> {
        let position = self.position(label)?;
        if position < self.next {
            return Err(PcsError::ChallengeAlreadyComputed);
        }
        self.transcript.append_message(b"bind", label);
        self.transcript.append_message(b"data", data);
        Ok(())
    }

    /// Finalize the challenge identified by `label` and return its bytes.
    pub fn compute_challenge(&mut self, label: &[u8]) -> Result<[u8; 32]> {
        let position = self.position(label)?;
        if position < self.next {
            return Err(PcsError::ChallengeAlreadyComputed);
        }
        if position > self.next {
            return Err(PcsError::PreviousChallengeNotComputed);
        }
        self.transcript.append_message(b"challenge", label);
        let mut challenge = [0u8; 32];
        self.transcript.challenge_bytes(b"challenge", &mut challenge);
        self.next += 1;
        Ok(challenge)
    }

    /// Finalize the challenge identified by `label` and decode its bytes as
    /// a field element (big-endian, reduced modulo the field size).
    pub fn challenge_scalar<F: Scalar>(&mut self, label: &[u8]) -> Result<F> {
        let challenge = self.compute_challenge(label)?;
        F::from_bytes(&challenge).map_err(PcsError::from)
    }
}
