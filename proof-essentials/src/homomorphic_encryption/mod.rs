use crate::error::CryptoError;
use ark_ff::Field;
use ark_std::rand::Rng;

pub mod el_gamal;

/// Public-key encryption whose ciphertexts can be combined with the group operation.
pub trait HomomorphicEncryptionScheme<Scalar: Field> {
    type Parameters;
    type PublicKey;
    type SecretKey;
    type Plaintext;
    type Ciphertext;
    /// One key holder's share of a decryption.
    type DecryptionShare;

    fn setup() -> Self::Parameters;

    fn keygen<R: Rng>(
        pp: &Self::Parameters,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey), CryptoError>;

    fn encrypt(
        pp: &Self::Parameters,
        pk: &Self::PublicKey,
        message: &Self::Plaintext,
        r: &Scalar,
    ) -> Result<Self::Ciphertext, CryptoError>;

    /// Add a fresh encryption of the neutral element, leaving the plaintext unchanged.
    fn rerandomize(
        pp: &Self::Parameters,
        pk: &Self::PublicKey,
        ciphertext: &Self::Ciphertext,
        r: &Scalar,
    ) -> Result<Self::Ciphertext, CryptoError>;

    fn decryption_share(
        sk: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::DecryptionShare, CryptoError>;

    /// Strip every holder's share from the ciphertext.
    fn combine_shares(
        ciphertext: &Self::Ciphertext,
        shares: &[Self::DecryptionShare],
    ) -> Result<Self::Plaintext, CryptoError>;

    fn decrypt(
        pp: &Self::Parameters,
        sk: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::Plaintext, CryptoError>;
}
