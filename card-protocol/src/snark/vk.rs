//! Verifying-key constants for the reveal circuit.

use super::circuit::PUBLIC_INPUTS;
use super::proof::{g1_from_words, g1_to_words, g2_from_words, g2_to_words};
use crate::encoding::WireWord;
use crate::{CardProtocolError, Result};

use ark_bn254::{Bn254, G1Affine, G2Affine};
use ark_groth16::VerifyingKey;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde::{Deserialize, Serialize};

/// `alpha`, `beta`, `gamma`, `delta` and the input-commitment basis `ic`.
///
/// Immutable once built; every constructor checks that each element lies in its
/// prime-order group and that `ic` has one entry per public input plus the constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyingKeyConstants {
    alpha: G1Affine,
    beta: G2Affine,
    gamma: G2Affine,
    delta: G2Affine,
    ic: Vec<G1Affine>,
}

/// JSON layout: `beta`, `gamma` and `delta` are `[[x.c1, x.c0], [y.c1, y.c0]]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Document {
    alpha: [WireWord; 2],
    beta: [[WireWord; 2]; 2],
    gamma: [[WireWord; 2]; 2],
    delta: [[WireWord; 2]; 2],
    ic: Vec<[WireWord; 2]>,
}

impl VerifyingKeyConstants {
    pub fn new(
        alpha: G1Affine,
        beta: G2Affine,
        gamma: G2Affine,
        delta: G2Affine,
        ic: Vec<G1Affine>,
    ) -> Result<Self> {
        if ic.len() != PUBLIC_INPUTS + 1 {
            return Err(CardProtocolError::InvalidVerifyingKey(format!(
                "expected {} input-commitment points, got {}",
                PUBLIC_INPUTS + 1,
                ic.len()
            )));
        }

        let g1 = std::iter::once(("alpha", &alpha)).chain(ic.iter().map(|p| ("ic", p)));
        for (name, p) in g1 {
            if !p.is_on_curve() || !p.is_in_correct_subgroup_assuming_on_curve() {
                return Err(CardProtocolError::InvalidVerifyingKey(format!(
                    "{name} is not a G1 point"
                )));
            }
        }
        for (name, p) in [("beta", &beta), ("gamma", &gamma), ("delta", &delta)] {
            if !p.is_on_curve() || !p.is_in_correct_subgroup_assuming_on_curve() {
                return Err(CardProtocolError::InvalidVerifyingKey(format!(
                    "{name} is not a G2 point"
                )));
            }
        }

        Ok(Self {
            alpha,
            beta,
            gamma,
            delta,
            ic,
        })
    }

    pub fn alpha(&self) -> &G1Affine {
        &self.alpha
    }

    pub fn beta(&self) -> &G2Affine {
        &self.beta
    }

    pub fn gamma(&self) -> &G2Affine {
        &self.gamma
    }

    pub fn delta(&self) -> &G2Affine {
        &self.delta
    }

    pub fn ic(&self) -> &[G1Affine] {
        &self.ic
    }

    /// Compressed canonical encoding of the equivalent `ark_groth16::VerifyingKey`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let vk = VerifyingKey::<Bn254>::from(self.clone());
        let mut bytes = Vec::with_capacity(vk.compressed_size());
        vk.serialize_compressed(&mut bytes)?;
        Ok(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let vk = VerifyingKey::<Bn254>::deserialize_compressed(bytes)?;
        Self::try_from(vk)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let doc: Document = serde_json::from_str(json)?;

        let g1 = |[x, y]: &[WireWord; 2], what: &str| {
            g1_from_words(&x.0, &y.0, what).map_err(invalid_key)
        };
        let g2 = |[[x1, x0], [y1, y0]]: &[[WireWord; 2]; 2], what: &str| {
            g2_from_words([&x1.0, &x0.0, &y1.0, &y0.0], what).map_err(invalid_key)
        };

        let ic = doc
            .ic
            .iter()
            .enumerate()
            .map(|(i, p)| g1(p, &format!("ic[{i}]")))
            .collect::<Result<Vec<_>>>()?;

        Self::new(
            g1(&doc.alpha, "alpha")?,
            g2(&doc.beta, "beta")?,
            g2(&doc.gamma, "gamma")?,
            g2(&doc.delta, "delta")?,
            ic,
        )
    }

    pub fn to_json(&self) -> Result<String> {
        let g1 = |p: &G1Affine| g1_to_words(p).map(WireWord);
        let g2 = |p: &G2Affine| {
            let [x1, x0, y1, y0] = g2_to_words(p).map(WireWord);
            [[x1, x0], [y1, y0]]
        };

        let doc = Document {
            alpha: g1(&self.alpha),
            beta: g2(&self.beta),
            gamma: g2(&self.gamma),
            delta: g2(&self.delta),
            ic: self.ic.iter().map(g1).collect(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }
}

fn invalid_key(err: CardProtocolError) -> CardProtocolError {
    match err {
        CardProtocolError::InvalidPoint(msg) => CardProtocolError::InvalidVerifyingKey(msg),
        other => other,
    }
}

impl TryFrom<VerifyingKey<Bn254>> for VerifyingKeyConstants {
    type Error = CardProtocolError;

    fn try_from(vk: VerifyingKey<Bn254>) -> Result<Self> {
        Self::new(
            vk.alpha_g1,
            vk.beta_g2,
            vk.gamma_g2,
            vk.delta_g2,
            vk.gamma_abc_g1,
        )
    }
}

impl From<VerifyingKeyConstants> for VerifyingKey<Bn254> {
    fn from(constants: VerifyingKeyConstants) -> Self {
        Self {
            alpha_g1: constants.alpha,
            beta_g2: constants.beta,
            gamma_g2: constants.gamma,
            delta_g2: constants.delta,
            gamma_abc_g1: constants.ic,
        }
    }
}
