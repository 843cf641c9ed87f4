use proof_essentials::error::CryptoError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardProtocolError {
    #[error("Invalid point: {0}")]
    InvalidPoint(String),

    #[error("Scalar is not reduced modulo the group order")]
    InvalidScalar,

    #[error("Expected {expected} reveal tokens, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("The identity point is reserved and cannot be masked as a card")]
    IdentityCard,

    #[error("The joint key is the identity; no key shares were aggregated")]
    IdentityKey,

    #[error("Malformed encoding: {0}")]
    InvalidEncoding(String),

    #[error("Invalid verifying key: {0}")]
    InvalidVerifyingKey(String),

    #[error("SNARK proving failed: {0}")]
    Synthesis(String),

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

impl From<ark_relations::r1cs::SynthesisError> for CardProtocolError {
    fn from(err: ark_relations::r1cs::SynthesisError) -> Self {
        Self::Synthesis(err.to_string())
    }
}

impl From<ark_serialize::SerializationError> for CardProtocolError {
    fn from(err: ark_serialize::SerializationError) -> Self {
        Self::InvalidEncoding(err.to_string())
    }
}

impl From<serde_json::Error> for CardProtocolError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidEncoding(err.to_string())
    }
}
