pub mod proofs;

use crate::error::CryptoError;
use crate::utils::rand::FiatShamirRng;
use ark_std::rand::Rng;
use digest::Digest;

/// A non-interactive argument of knowledge made non-interactive with a Fiat-Shamir RNG.
///
/// Prover and verifier must start from RNGs seeded with the same label.
pub trait ArgumentOfKnowledge {
    type CommonReferenceString;
    type Statement;
    type Witness;
    type Proof;

    fn prove<R: Rng, D: Digest>(
        rng: &mut R,
        common_reference_string: &Self::CommonReferenceString,
        statement: &Self::Statement,
        witness: &Self::Witness,
        fs_rng: &mut FiatShamirRng<D>,
    ) -> Result<Self::Proof, CryptoError>;

    fn verify<D: Digest>(
        common_reference_string: &Self::CommonReferenceString,
        statement: &Self::Statement,
        proof: &Self::Proof,
        fs_rng: &mut FiatShamirRng<D>,
    ) -> Result<(), CryptoError>;
}
