use crate::encoding::{decode_field, encode_field, Word};
use crate::{CardProtocolError, Result};

use ark_bn254::{Bn254, Fq, Fq2, G1Affine, G2Affine};
use ark_ff::Zero;

/// Groth16 proof `(A, B, C)` over BN254.
///
/// On the wire it is eight base-field words in the order
/// `[A.x, A.y, B.x.c1, B.x.c0, B.y.c1, B.y.c0, C.x, C.y]`; all-zero words encode the
/// point at infinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnarkProof {
    pub a: G1Affine,
    pub b: G2Affine,
    pub c: G1Affine,
}

impl SnarkProof {
    pub fn from_words(words: &[Word; 8]) -> Result<Self> {
        Ok(Self {
            a: g1_from_words(&words[0], &words[1], "proof element A")?,
            b: g2_from_words(
                [&words[2], &words[3], &words[4], &words[5]],
                "proof element B",
            )?,
            c: g1_from_words(&words[6], &words[7], "proof element C")?,
        })
    }

    /// Rejects elements off their curve or outside the prime-order subgroup.
    pub fn validate(&self) -> Result<()> {
        check_g1(&self.a, "proof element A")?;
        check_g2(&self.b, "proof element B")?;
        check_g1(&self.c, "proof element C")?;
        Ok(())
    }

    pub fn to_words(&self) -> [Word; 8] {
        let [ax, ay] = g1_to_words(&self.a);
        let [bx1, bx0, by1, by0] = g2_to_words(&self.b);
        let [cx, cy] = g1_to_words(&self.c);
        [ax, ay, bx1, bx0, by1, by0, cx, cy]
    }
}

impl From<ark_groth16::Proof<Bn254>> for SnarkProof {
    fn from(proof: ark_groth16::Proof<Bn254>) -> Self {
        Self {
            a: proof.a,
            b: proof.b,
            c: proof.c,
        }
    }
}

impl From<SnarkProof> for ark_groth16::Proof<Bn254> {
    fn from(proof: SnarkProof) -> Self {
        Self {
            a: proof.a,
            b: proof.b,
            c: proof.c,
        }
    }
}

fn base_field(word: &Word, what: &str) -> Result<Fq> {
    decode_field(word).ok_or_else(|| {
        CardProtocolError::InvalidPoint(format!("{what}: coordinate exceeds the field modulus"))
    })
}

pub(crate) fn g1_from_words(x: &Word, y: &Word, what: &str) -> Result<G1Affine> {
    let (x, y) = (base_field(x, what)?, base_field(y, what)?);
    if x.is_zero() && y.is_zero() {
        return Ok(G1Affine::identity());
    }

    let point = G1Affine::new_unchecked(x, y);
    check_g1(&point, what)?;
    Ok(point)
}

/// Words in `[x.c1, x.c0, y.c1, y.c0]` order.
pub(crate) fn g2_from_words(words: [&Word; 4], what: &str) -> Result<G2Affine> {
    let x = Fq2::new(base_field(words[1], what)?, base_field(words[0], what)?);
    let y = Fq2::new(base_field(words[3], what)?, base_field(words[2], what)?);
    if x.is_zero() && y.is_zero() {
        return Ok(G2Affine::identity());
    }

    let point = G2Affine::new_unchecked(x, y);
    check_g2(&point, what)?;
    Ok(point)
}

fn check_g1(point: &G1Affine, what: &str) -> Result<()> {
    if point.infinity {
        return Ok(());
    }
    if !point.is_on_curve() {
        return Err(CardProtocolError::InvalidPoint(format!(
            "{what}: not on the curve"
        )));
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(CardProtocolError::InvalidPoint(format!(
            "{what}: outside the prime-order subgroup"
        )));
    }
    Ok(())
}

fn check_g2(point: &G2Affine, what: &str) -> Result<()> {
    if point.infinity {
        return Ok(());
    }
    if !point.is_on_curve() {
        return Err(CardProtocolError::InvalidPoint(format!(
            "{what}: not on the twist"
        )));
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(CardProtocolError::InvalidPoint(format!(
            "{what}: outside the prime-order subgroup"
        )));
    }
    Ok(())
}

pub(crate) fn g1_to_words(p: &G1Affine) -> [Word; 2] {
    if p.infinity {
        return [[0u8; 32]; 2];
    }
    [encode_field(&p.x), encode_field(&p.y)]
}

pub(crate) fn g2_to_words(p: &G2Affine) -> [Word; 4] {
    if p.infinity {
        return [[0u8; 32]; 4];
    }
    [
        encode_field(&p.x.c1),
        encode_field(&p.x.c0),
        encode_field(&p.y.c1),
        encode_field(&p.y.c0),
    ]
}
