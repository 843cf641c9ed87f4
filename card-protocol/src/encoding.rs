//! Fixed-width wire encodings used at the ABI boundary.
//!
//! A word is a 32-byte big-endian integer. Decoding never reduces: a word at or above
//! the modulus of its field is rejected.

use crate::{
    curve, BaseField, CardProtocolError, ClassicalProof, CurvePoint, MaskedCard, Result, Scalar,
};

use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

pub const WORD_LEN: usize = 32;

pub type Word = [u8; WORD_LEN];

/// `A1.x ‖ A1.y ‖ A2.x ‖ A2.y ‖ z`
pub const CLASSICAL_PROOF_LEN: usize = 5 * WORD_LEN;

pub fn encode_field<F: PrimeField>(f: &F) -> Word {
    let bytes = f.into_bigint().to_bytes_be();
    let mut word = [0u8; WORD_LEN];
    word[WORD_LEN - bytes.len()..].copy_from_slice(&bytes);
    word
}

/// `None` when the word is not the canonical encoding of an element of `F`.
pub fn decode_field<F: PrimeField>(word: &Word) -> Option<F> {
    let f = F::from_be_bytes_mod_order(word);
    (encode_field(&f) == *word).then_some(f)
}

pub fn decode_base_field(word: &Word) -> Result<BaseField> {
    decode_field(word).ok_or_else(|| {
        CardProtocolError::InvalidPoint("coordinate exceeds the field modulus".into())
    })
}

pub fn decode_scalar(word: &Word) -> Result<Scalar> {
    decode_field(word).ok_or(CardProtocolError::InvalidScalar)
}

pub fn encode_scalar(s: &Scalar) -> Word {
    encode_field(s)
}

pub fn decode_point(x: &Word, y: &Word) -> Result<CurvePoint> {
    curve::from_coordinates(decode_base_field(x)?, decode_base_field(y)?)
}

pub fn encode_point(p: &CurvePoint) -> (Word, Word) {
    (encode_field(&p.x), encode_field(&p.y))
}

/// Parse a word from `0x`-prefixed hex or from a decimal string.
pub fn word_from_str(s: &str) -> Result<Word> {
    let s = s.trim();
    let bytes = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => {
            let digits = if digits.len() % 2 == 1 {
                format!("0{digits}")
            } else {
                digits.to_owned()
            };
            let bytes = hex::decode(digits)
                .map_err(|e| CardProtocolError::InvalidEncoding(format!("hex word {s}: {e}")))?;
            let first_nonzero = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
            bytes[first_nonzero..].to_vec()
        }
        None => BigUint::parse_bytes(s.as_bytes(), 10)
            .ok_or_else(|| CardProtocolError::InvalidEncoding(format!("decimal word {s}")))?
            .to_bytes_be(),
    };

    if bytes.len() > WORD_LEN {
        return Err(CardProtocolError::InvalidEncoding(format!(
            "{s} does not fit in {WORD_LEN} bytes"
        )));
    }
    let mut word = [0u8; WORD_LEN];
    word[WORD_LEN - bytes.len()..].copy_from_slice(&bytes);
    Ok(word)
}

pub fn word_to_hex(word: &Word) -> String {
    format!("0x{}", hex::encode(word))
}

mod word_string {
    use super::{word_from_str, word_to_hex, Word};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(word: &Word, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&word_to_hex(word))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Word, D::Error> {
        let s = String::deserialize(d)?;
        word_from_str(&s).map_err(de::Error::custom)
    }
}

/// A word that (de)serializes as a `0x` hex string and also accepts decimal input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireWord(#[serde(with = "word_string")] pub Word);

impl WireWord {
    pub fn from_field<F: PrimeField>(f: &F) -> Self {
        Self(encode_field(f))
    }
}

/// `{ "x": "0x..", "y": "0x.." }`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WirePoint {
    pub x: WireWord,
    pub y: WireWord,
}

impl WirePoint {
    pub fn decode(&self) -> Result<CurvePoint> {
        decode_point(&self.x.0, &self.y.0)
    }
}

impl From<&CurvePoint> for WirePoint {
    fn from(p: &CurvePoint) -> Self {
        let (x, y) = encode_point(p);
        Self {
            x: WireWord(x),
            y: WireWord(y),
        }
    }
}

/// Structured masked card as it crosses the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMaskedCard {
    pub e1: WirePoint,
    pub e2: WirePoint,
}

impl WireMaskedCard {
    pub fn decode(&self) -> Result<MaskedCard> {
        Ok(MaskedCard::new(
            self.e1.decode().map_err(|e| context("e1", e))?,
            self.e2.decode().map_err(|e| context("e2", e))?,
        ))
    }

    /// Flat `[e2.x, e2.y, e1.x, e1.y]` layout.
    pub fn from_flat(words: &[Word; 4]) -> Self {
        Self {
            e2: WirePoint {
                x: WireWord(words[0]),
                y: WireWord(words[1]),
            },
            e1: WirePoint {
                x: WireWord(words[2]),
                y: WireWord(words[3]),
            },
        }
    }

    pub fn to_flat(&self) -> [Word; 4] {
        [self.e2.x.0, self.e2.y.0, self.e1.x.0, self.e1.y.0]
    }
}

impl From<&MaskedCard> for WireMaskedCard {
    fn from(card: &MaskedCard) -> Self {
        Self {
            e1: WirePoint::from(&card.e1),
            e2: WirePoint::from(&card.e2),
        }
    }
}

/// Either calling convention seen in the wild for a masked card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaskedCardInput {
    Structured(WireMaskedCard),
    Flat([WireWord; 4]),
}

impl MaskedCardInput {
    pub fn decode(&self) -> Result<MaskedCard> {
        match self {
            Self::Structured(card) => card.decode(),
            Self::Flat(words) => {
                WireMaskedCard::from_flat(&[words[0].0, words[1].0, words[2].0, words[3].0])
                    .decode()
            }
        }
    }
}

pub fn masked_card_from_flat(words: &[Word; 4]) -> Result<MaskedCard> {
    WireMaskedCard::from_flat(words).decode()
}

pub fn masked_card_to_flat(card: &MaskedCard) -> [Word; 4] {
    WireMaskedCard::from(card).to_flat()
}

pub fn classical_proof_to_bytes(proof: &ClassicalProof) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(CLASSICAL_PROOF_LEN);
    for point in [&proof.a, &proof.b] {
        let (x, y) = encode_point(point);
        bytes.extend_from_slice(&x);
        bytes.extend_from_slice(&y);
    }
    bytes.extend_from_slice(&encode_scalar(&proof.r));
    bytes
}

pub fn classical_proof_from_bytes(bytes: &[u8]) -> Result<ClassicalProof> {
    if bytes.len() != CLASSICAL_PROOF_LEN {
        return Err(CardProtocolError::InvalidEncoding(format!(
            "classical proof must be {CLASSICAL_PROOF_LEN} bytes, got {}",
            bytes.len()
        )));
    }

    let words = bytes
        .chunks_exact(WORD_LEN)
        .map(|chunk| {
            let mut word = [0u8; WORD_LEN];
            word.copy_from_slice(chunk);
            word
        })
        .collect::<Vec<Word>>();

    let a = decode_point(&words[0], &words[1]).map_err(|e| context("proof commitment A1", e))?;
    let b = decode_point(&words[2], &words[3]).map_err(|e| context("proof commitment A2", e))?;
    let r = decode_scalar(&words[4])?;

    Ok(ClassicalProof::new(a, b, r))
}

fn context(what: &str, err: CardProtocolError) -> CardProtocolError {
    match err {
        CardProtocolError::InvalidPoint(msg) => {
            CardProtocolError::InvalidPoint(format!("{what}: {msg}"))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Curve;
    use ark_ec::CurveGroup;
    use ark_std::{rand::thread_rng, UniformRand};

    const BN254_FR_MODULUS_HEX: &str =
        "0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";

    #[test]
    fn field_words_are_strict() {
        let max = word_from_str(BN254_FR_MODULUS_HEX).unwrap();
        assert!(decode_base_field(&max).is_err());

        let mut below = max;
        below[WORD_LEN - 1] -= 1;
        assert_eq!(decode_base_field(&below).unwrap(), -BaseField::from(1u64));

        assert_eq!(
            decode_scalar(&encode_field(&(-BaseField::from(1u64)))),
            Err(CardProtocolError::InvalidScalar)
        );
    }

    #[test]
    fn words_parse_from_hex_and_decimal() {
        let from_hex = word_from_str("0x0f").unwrap();
        let from_short_hex = word_from_str("0xf").unwrap();
        let from_dec = word_from_str("15").unwrap();
        assert_eq!(from_hex, from_dec);
        assert_eq!(from_short_hex, from_dec);
        assert_eq!(from_hex[WORD_LEN - 1], 15);
        assert_eq!(
            word_to_hex(&from_hex),
            "0x000000000000000000000000000000000000000000000000000000000000000f"
        );

        assert!(word_from_str("0xzz").is_err());
        assert!(word_from_str("twelve").is_err());
        assert!(word_from_str(&format!("0x01{}", "00".repeat(32))).is_err());
    }

    #[test]
    fn flat_and_structured_masked_cards_agree() {
        let rng = &mut thread_rng();
        let card = MaskedCard::new(
            Curve::rand(rng).into_affine(),
            Curve::rand(rng).into_affine(),
        );

        let flat = masked_card_to_flat(&card);
        assert_eq!(flat[0], encode_field(&card.e2.x));
        assert_eq!(flat[3], encode_field(&card.e1.y));
        assert_eq!(masked_card_from_flat(&flat).unwrap(), card);

        let wire = WireMaskedCard::from(&card);
        let structured: MaskedCardInput =
            serde_json::from_str(&serde_json::to_string(&wire).unwrap()).unwrap();
        let flat_json = serde_json::to_string(
            &flat.iter().map(|w| word_to_hex(w)).collect::<Vec<_>>(),
        )
        .unwrap();
        let flat_input: MaskedCardInput = serde_json::from_str(&flat_json).unwrap();

        assert!(matches!(structured, MaskedCardInput::Structured(_)));
        assert!(matches!(flat_input, MaskedCardInput::Flat(_)));
        assert_eq!(structured.decode().unwrap(), card);
        assert_eq!(flat_input.decode().unwrap(), card);
    }

    #[test]
    fn masked_card_decoding_names_the_bad_component() {
        let rng = &mut thread_rng();
        let card = MaskedCard::new(
            Curve::rand(rng).into_affine(),
            Curve::rand(rng).into_affine(),
        );
        let mut flat = masked_card_to_flat(&card);
        flat[2][WORD_LEN - 1] ^= 1;

        match masked_card_from_flat(&flat) {
            Err(CardProtocolError::InvalidPoint(msg)) => assert!(msg.starts_with("e1")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn classical_proof_layout() {
        let rng = &mut thread_rng();
        let proof = ClassicalProof::new(
            Curve::rand(rng).into_affine(),
            Curve::rand(rng).into_affine(),
            Scalar::rand(rng),
        );

        let bytes = classical_proof_to_bytes(&proof);
        assert_eq!(bytes.len(), CLASSICAL_PROOF_LEN);
        assert_eq!(&bytes[..WORD_LEN], &encode_field(&proof.a.x));
        assert_eq!(&bytes[4 * WORD_LEN..], &encode_scalar(&proof.r));
        assert_eq!(classical_proof_from_bytes(&bytes).unwrap(), proof);

        assert!(matches!(
            classical_proof_from_bytes(&bytes[1..]),
            Err(CardProtocolError::InvalidEncoding(_))
        ));
    }
}
