//! Reveal tokens and the classical proof that a token matches its player's key.

use crate::keys::Keypair;
use crate::{
    curve, ClassicalProof, Curve, CurvePoint, MaskedCard, PublicKey, Result, RevealToken,
};

use ark_std::rand::Rng;
use blake2::Blake2s256;
use proof_essentials::homomorphic_encryption::HomomorphicEncryptionScheme;
use proof_essentials::utils::rand::FiatShamirRng;
use proof_essentials::zkp::{proofs::chaum_pedersen_dl_equality, ArgumentOfKnowledge};
use tracing::debug;

const LOG_TARGET: &str = "card_protocol::reveal";

pub(crate) const REVEAL_DOMAIN: &[u8] = b"mental-poker/reveal";

type DLEquality<'a> = chaum_pedersen_dl_equality::DLEquality<'a, Curve>;
type Parameters<'a> = chaum_pedersen_dl_equality::Parameters<'a, Curve>;
type Statement<'a> = chaum_pedersen_dl_equality::Statement<'a, Curve>;

/// Compute `sk·e1` and prove that `log_G(pk) == log_e1(token)`.
pub fn reveal<R: Rng>(
    rng: &mut R,
    keypair: &Keypair,
    masked: &MaskedCard,
) -> Result<(RevealToken, ClassicalProof)> {
    curve::validate(&masked.e1, "e1")?;

    let token = crate::ElGamal::decryption_share(&keypair.secret, masked)?.0;

    let g = curve::generator();
    let parameters = Parameters::new(&g, &masked.e1);
    let statement = Statement::new(&keypair.public, &token);
    let mut fs_rng = FiatShamirRng::<Blake2s256>::from_seed(REVEAL_DOMAIN);
    let proof = DLEquality::prove(rng, &parameters, &statement, &keypair.secret, &mut fs_rng)?;

    Ok((token, proof))
}

/// Like [`verify_reveal`], but tells malformed input (`InvalidPoint`) apart from a
/// well-formed proof that does not verify (`Crypto(ProofVerificationError)`).
pub fn check_reveal(
    pk: &PublicKey,
    e1: &CurvePoint,
    token: &RevealToken,
    proof: &ClassicalProof,
) -> Result<()> {
    curve::validate(pk, "public key")?;
    curve::validate(e1, "e1")?;
    curve::validate(token, "reveal token")?;
    curve::validate(&proof.a, "proof commitment A1")?;
    curve::validate(&proof.b, "proof commitment A2")?;

    let g = curve::generator();
    let parameters = Parameters::new(&g, e1);
    let statement = Statement::new(pk, token);
    let mut fs_rng = FiatShamirRng::<Blake2s256>::from_seed(REVEAL_DOMAIN);
    DLEquality::verify(&parameters, &statement, proof, &mut fs_rng)?;

    Ok(())
}

/// Accept iff `G·z == A1 + c·pk` and `e1·z == A2 + c·token`.
///
/// Never fails: malformed points and bad proofs alike give `false`.
pub fn verify_reveal(
    pk: &PublicKey,
    e1: &CurvePoint,
    token: &RevealToken,
    proof: &ClassicalProof,
) -> bool {
    match check_reveal(pk, e1, token, proof) {
        Ok(()) => true,
        Err(e) => {
            debug!(target: LOG_TARGET, error = %e, "rejecting reveal proof");
            false
        }
    }
}
