use super::{RevealCircuit, SnarkProof, VerifyingKeyConstants};
use crate::keys::Keypair;
use crate::{curve, MaskedCard, Result, RevealToken};

use ark_bn254::Bn254;
use ark_groth16::{Groth16, ProvingKey};
use ark_snark::SNARK;
use ark_std::rand::{CryptoRng, RngCore};

/// Circuit-specific Groth16 key generation for [`RevealCircuit`].
pub fn setup<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(ProvingKey<Bn254>, VerifyingKeyConstants)> {
    let (pk, vk) = Groth16::<Bn254>::circuit_specific_setup(RevealCircuit::blank(), rng)?;
    let constants = VerifyingKeyConstants::try_from(vk)?;
    Ok((pk, constants))
}

/// Compute `sk·e1` and a SNARK proof that it matches `keypair.public`.
pub fn prove_reveal<R: RngCore + CryptoRng>(
    rng: &mut R,
    proving_key: &ProvingKey<Bn254>,
    keypair: &Keypair,
    masked: &MaskedCard,
) -> Result<(RevealToken, SnarkProof)> {
    let token = curve::scalar_mul(&masked.e1, &keypair.secret)?;

    let circuit = RevealCircuit::new(keypair, &masked.e1, &token);
    let proof = Groth16::<Bn254>::prove(proving_key, circuit, rng)?;

    Ok((token, proof.into()))
}
