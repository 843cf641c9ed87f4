//! R1CS relation behind SNARK reveal proofs.
//!
//! Public inputs, in allocation order: `e1`, `reveal`, `pk` (x before y for each).
//! Witness: the bits of `sk`. Constraints: `reveal == sk·e1` and `pk == sk·G`.

use crate::keys::Keypair;
use crate::{BaseField, Curve, CurvePoint, RevealToken, Scalar};

use ark_ec::Group;
use ark_ed_on_bn254::constraints::EdwardsVar;
use ark_ff::{BitIteratorLE, PrimeField};
use ark_r1cs_std::prelude::*;
use ark_relations::ns;
use ark_relations::r1cs::{
    ConstraintSynthesizer, ConstraintSystemRef, Namespace, SynthesisError,
};

/// Number of public-input field elements.
pub const PUBLIC_INPUTS: usize = 6;

#[derive(Clone, Copy, Debug, Default)]
pub struct RevealCircuit {
    pub e1: Option<CurvePoint>,
    pub reveal: Option<RevealToken>,
    pub public_key: Option<CurvePoint>,
    pub secret: Option<Scalar>,
}

impl RevealCircuit {
    /// Shape-only instance for key generation.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn new(keypair: &Keypair, e1: &CurvePoint, reveal: &RevealToken) -> Self {
        Self {
            e1: Some(*e1),
            reveal: Some(*reveal),
            public_key: Some(keypair.public),
            secret: Some(keypair.secret),
        }
    }
}

fn secret_bits(secret: Option<Scalar>) -> Vec<Option<bool>> {
    let len = Scalar::MODULUS_BIT_SIZE as usize;
    match secret {
        Some(sk) => BitIteratorLE::new(sk.into_bigint())
            .take(len)
            .map(Some)
            .collect(),
        None => vec![None; len],
    }
}

fn input_point(
    ns: impl Into<Namespace<BaseField>>,
    value: Option<CurvePoint>,
) -> Result<EdwardsVar, SynthesisError> {
    <EdwardsVar as AllocVar<CurvePoint, BaseField>>::new_input(ns, || {
        value.ok_or(SynthesisError::AssignmentMissing)
    })
}

impl ConstraintSynthesizer<BaseField> for RevealCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<BaseField>) -> Result<(), SynthesisError> {
        let e1 = input_point(ns!(cs, "e1"), self.e1)?;
        let reveal = input_point(ns!(cs, "reveal"), self.reveal)?;
        let public_key = input_point(ns!(cs, "public key"), self.public_key)?;

        let secret = secret_bits(self.secret)
            .into_iter()
            .map(|bit| {
                Boolean::new_witness(ns!(cs, "secret bit"), || {
                    bit.ok_or(SynthesisError::AssignmentMissing)
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let generator = EdwardsVar::constant(Curve::generator());

        e1.scalar_mul_le(secret.iter())?.enforce_equal(&reveal)?;
        generator
            .scalar_mul_le(secret.iter())?
            .enforce_equal(&public_key)?;

        Ok(())
    }
}
