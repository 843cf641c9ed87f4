//! Exponential ElGamal masking of card points under the joint key.

use crate::{
    curve, keys, AggregatedKey, Card, CardProtocolError, Curve, ElGamal, MaskedCard,
    MaskingProof, Result, Scalar,
};

use ark_ec::{AffineRepr, CurveGroup};
use ark_std::rand::Rng;
use blake2::Blake2s256;
use proof_essentials::homomorphic_encryption::{el_gamal::Plaintext, HomomorphicEncryptionScheme};
use proof_essentials::utils::rand::FiatShamirRng;
use proof_essentials::zkp::{proofs::chaum_pedersen_dl_equality, ArgumentOfKnowledge};
use tracing::debug;

const LOG_TARGET: &str = "card_protocol::mask";

pub(crate) const MASK_DOMAIN: &[u8] = b"mental-poker/mask";

type DLEquality<'a> = chaum_pedersen_dl_equality::DLEquality<'a, Curve>;
type Parameters<'a> = chaum_pedersen_dl_equality::Parameters<'a, Curve>;
type Statement<'a> = chaum_pedersen_dl_equality::Statement<'a, Curve>;

/// `(r·G, card + r·jointKey)`.
pub fn mask(card: &Card, joint_key: &AggregatedKey, r: &Scalar) -> Result<MaskedCard> {
    curve::validate(card, "card")?;
    if *card == curve::identity() {
        return Err(CardProtocolError::IdentityCard);
    }
    keys::ensure_joint_key(joint_key)?;

    let masked = ElGamal::encrypt(&ElGamal::setup(), joint_key, &Plaintext(*card), r)?;
    Ok(masked)
}

/// Mask and prove that the same `r` produced `e1` and the mask added to the card.
pub fn mask_with_proof<R: Rng>(
    rng: &mut R,
    card: &Card,
    joint_key: &AggregatedKey,
    r: &Scalar,
) -> Result<(MaskedCard, MaskingProof)> {
    let masked = mask(card, joint_key, r)?;

    let g = curve::generator();
    let mask_point = (masked.e2.into_group() - card.into_group()).into_affine();

    let parameters = Parameters::new(&g, joint_key);
    let statement = Statement::new(&masked.e1, &mask_point);
    let mut fs_rng = FiatShamirRng::<Blake2s256>::from_seed(MASK_DOMAIN);
    let proof = DLEquality::prove(rng, &parameters, &statement, r, &mut fs_rng)?;

    Ok((masked, proof))
}

/// Check that `masked` hides `card` under `joint_key`.
pub fn verify_mask(
    joint_key: &AggregatedKey,
    card: &Card,
    masked: &MaskedCard,
    proof: &MaskingProof,
) -> bool {
    let checked = [
        (joint_key, "joint key"),
        (card, "card"),
        (&masked.e1, "e1"),
        (&masked.e2, "e2"),
        (&proof.a, "proof commitment A1"),
        (&proof.b, "proof commitment A2"),
    ]
    .into_iter()
    .try_for_each(|(p, what)| curve::validate(p, what));
    if let Err(e) = checked {
        debug!(target: LOG_TARGET, error = %e, "rejecting masking proof");
        return false;
    }

    let g = curve::generator();
    let mask_point = (masked.e2.into_group() - card.into_group()).into_affine();

    let parameters = Parameters::new(&g, joint_key);
    let statement = Statement::new(&masked.e1, &mask_point);
    let mut fs_rng = FiatShamirRng::<Blake2s256>::from_seed(MASK_DOMAIN);

    match DLEquality::verify(&parameters, &statement, proof, &mut fs_rng) {
        Ok(()) => true,
        Err(e) => {
            debug!(target: LOG_TARGET, error = %e, "masking proof does not verify");
            false
        }
    }
}

/// Add a fresh masking of the identity. The hidden card is unchanged.
pub fn remask(masked: &MaskedCard, joint_key: &AggregatedKey, r: &Scalar) -> Result<MaskedCard> {
    curve::validate(&masked.e1, "e1")?;
    curve::validate(&masked.e2, "e2")?;
    keys::ensure_joint_key(joint_key)?;

    let remasked = ElGamal::rerandomize(&ElGamal::setup(), joint_key, masked, r)?;
    Ok(remasked)
}
