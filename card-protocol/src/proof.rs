use crate::{reveal, ClassicalProof, CurvePoint, PublicKey, RevealToken, SnarkProof, SnarkVerifier};

use tracing::debug;

const LOG_TARGET: &str = "card_protocol::proof";

/// Evidence that a reveal token was computed with the key behind a public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealProof {
    /// Fiat-Shamir discrete-log-equality transcript.
    Classical(ClassicalProof),
    /// Groth16 proof of the reveal circuit.
    Snark(SnarkProof),
}

impl RevealProof {
    /// Dispatch on the tag. A SNARK proof with no verifier at hand is rejected.
    pub fn verify(
        &self,
        snark_verifier: Option<&SnarkVerifier>,
        pk: &PublicKey,
        e1: &CurvePoint,
        token: &RevealToken,
    ) -> bool {
        match self {
            Self::Classical(proof) => reveal::verify_reveal(pk, e1, token, proof),
            Self::Snark(proof) => match snark_verifier {
                Some(verifier) => verifier.verify_reveal(pk, e1, token, proof),
                None => {
                    debug!(target: LOG_TARGET, "SNARK reveal proof without verifying key");
                    false
                }
            },
        }
    }

    pub fn is_snark(&self) -> bool {
        matches!(self, Self::Snark(_))
    }
}

impl From<ClassicalProof> for RevealProof {
    fn from(proof: ClassicalProof) -> Self {
        Self::Classical(proof)
    }
}

impl From<SnarkProof> for RevealProof {
    fn from(proof: SnarkProof) -> Self {
        Self::Snark(proof)
    }
}
