use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("{0} proof verification failed")]
    ProofVerificationError(String),

    #[error("Failed to serialize transcript input: {0}")]
    SerializationError(String),
}

impl From<ark_serialize::SerializationError> for CryptoError {
    fn from(err: ark_serialize::SerializationError) -> Self {
        Self::SerializationError(err.to_string())
    }
}
