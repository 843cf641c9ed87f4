use super::{SnarkProof, VerifyingKeyConstants};
use crate::encoding::{decode_field, encode_point, Word};
use crate::{curve, BaseField, CurvePoint, PublicKey, RevealToken};

use super::circuit::PUBLIC_INPUTS;
use ark_bn254::{Bn254, G1Projective};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::{CurveGroup, VariableBaseMSM};
use tracing::debug;

const LOG_TARGET: &str = "card_protocol::snark";

type G2Prepared = <Bn254 as Pairing>::G2Prepared;

/// Groth16 verifier bound to one set of verifying-key constants.
///
/// Holds no mutable state; share it freely between threads.
#[derive(Clone, Debug)]
pub struct SnarkVerifier {
    constants: VerifyingKeyConstants,
    alpha_beta: PairingOutput<Bn254>,
    gamma_neg: G2Prepared,
    delta_neg: G2Prepared,
}

/// `[e1.x, e1.y, reveal.x, reveal.y, pk.x, pk.y]`.
pub fn public_inputs(
    e1: &CurvePoint,
    reveal: &RevealToken,
    pk: &PublicKey,
) -> [BaseField; PUBLIC_INPUTS] {
    [e1.x, e1.y, reveal.x, reveal.y, pk.x, pk.y]
}

/// Word form of [`public_inputs`].
pub fn public_input_words(
    e1: &CurvePoint,
    reveal: &RevealToken,
    pk: &PublicKey,
) -> [Word; PUBLIC_INPUTS] {
    let (e1x, e1y) = encode_point(e1);
    let (rx, ry) = encode_point(reveal);
    let (pkx, pky) = encode_point(pk);
    [e1x, e1y, rx, ry, pkx, pky]
}

impl SnarkVerifier {
    pub fn new(constants: VerifyingKeyConstants) -> Self {
        let alpha_beta = Bn254::pairing(*constants.alpha(), *constants.beta());
        let gamma_neg = G2Prepared::from(-*constants.gamma());
        let delta_neg = G2Prepared::from(-*constants.delta());

        Self {
            constants,
            alpha_beta,
            gamma_neg,
            delta_neg,
        }
    }

    pub fn constants(&self) -> &VerifyingKeyConstants {
        &self.constants
    }

    /// `e(A, B) == e(alpha, beta) · e(IC(inputs), gamma) · e(C, delta)`.
    ///
    /// Proof elements are checked for curve and subgroup membership before pairing.
    pub fn verify(&self, inputs: &[BaseField; PUBLIC_INPUTS], proof: &SnarkProof) -> bool {
        if let Err(e) = proof.validate() {
            debug!(target: LOG_TARGET, error = %e, "rejecting malformed SNARK proof");
            return false;
        }

        let ic = self.constants.ic();
        let prepared_inputs = G1Projective::msm_unchecked(&ic[1..], inputs) + ic[0];

        let miller = Bn254::multi_miller_loop(
            [proof.a, prepared_inputs.into_affine(), proof.c],
            [
                G2Prepared::from(proof.b),
                self.gamma_neg.clone(),
                self.delta_neg.clone(),
            ],
        );

        match Bn254::final_exponentiation(miller) {
            Some(result) if result == self.alpha_beta => true,
            _ => {
                debug!(target: LOG_TARGET, "pairing check failed");
                false
            }
        }
    }

    /// Typed check of a reveal: builds the public inputs from the points.
    ///
    /// Points outside the masking curve's subgroup are rejected before pairing.
    pub fn verify_reveal(
        &self,
        pk: &PublicKey,
        e1: &CurvePoint,
        reveal: &RevealToken,
        proof: &SnarkProof,
    ) -> bool {
        let checked = [(pk, "public key"), (e1, "e1"), (reveal, "reveal token")]
            .into_iter()
            .try_for_each(|(p, what)| curve::validate(p, what));
        if let Err(e) = checked {
            debug!(target: LOG_TARGET, error = %e, "rejecting SNARK reveal");
            return false;
        }

        self.verify(&public_inputs(e1, reveal, pk), proof)
    }

    /// Word-level entry point. Malformed words are rejected without pairing.
    pub fn verify_words(&self, inputs: &[Word; PUBLIC_INPUTS], proof: &[Word; 8]) -> bool {
        let mut decoded = [BaseField::from(0u64); PUBLIC_INPUTS];
        for (i, (slot, word)) in decoded.iter_mut().zip(inputs).enumerate() {
            match decode_field(word) {
                Some(f) => *slot = f,
                None => {
                    debug!(target: LOG_TARGET, index = i, "public input exceeds the field modulus");
                    return false;
                }
            }
        }

        let proof = match SnarkProof::from_words(proof) {
            Ok(proof) => proof,
            Err(e) => {
                debug!(target: LOG_TARGET, error = %e, "rejecting SNARK proof words");
                return false;
            }
        };

        self.verify(&decoded, &proof)
    }
}
