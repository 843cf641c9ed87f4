//! Verifiable mental-poker core: joint keys, card masking, distributed reveal and
//! reveal verification.
//!
//! Cards are BabyJubjub points (arkworks' `ed_on_bn254`), masked with exponential
//! ElGamal under the sum of every player's public key. Each player strips its share
//! of the mask by publishing a reveal token `sk·e1` together with evidence that the
//! token matches its public key, either a Chaum-Pedersen transcript or a Groth16
//! proof over BN254.

pub mod abi;
pub mod curve;
pub mod encoding;
pub mod error;
pub mod keys;
pub mod mask;
pub mod proof;
pub mod reveal;
pub mod snark;
pub mod unmask;

use proof_essentials::homomorphic_encryption::el_gamal;
use proof_essentials::zkp::proofs::chaum_pedersen_dl_equality;

pub use error::CardProtocolError;

pub type Result<T> = core::result::Result<T, CardProtocolError>;

/// The masking curve.
pub type Curve = ark_ed_on_bn254::EdwardsProjective;
/// Affine point on the masking curve; `(0, 1)` is the identity.
pub type CurvePoint = ark_ed_on_bn254::EdwardsAffine;
/// Scalar field of the masking curve's prime-order subgroup.
pub type Scalar = ark_ed_on_bn254::Fr;
/// Coordinate field of the masking curve, equal to the BN254 scalar field.
pub type BaseField = ark_ed_on_bn254::Fq;

pub type PublicKey = CurvePoint;
pub type SecretKey = Scalar;
/// Group sum of every player's public key.
pub type AggregatedKey = CurvePoint;
/// A card encoded as a curve point.
pub type Card = CurvePoint;
/// One player's partial decryption `sk_i·e1`.
pub type RevealToken = CurvePoint;

pub type ElGamal = el_gamal::ElGamal<Curve>;
/// `(e1, e2) = (r·G, card + r·jointKey)`.
pub type MaskedCard = el_gamal::Ciphertext<Curve>;

/// Fiat-Shamir discrete-log-equality transcript `(A1, A2, z)`.
pub type ClassicalProof = chaum_pedersen_dl_equality::proof::Proof<Curve>;
pub type MaskingProof = chaum_pedersen_dl_equality::proof::Proof<Curve>;

pub use proof::RevealProof;
pub use snark::{SnarkProof, SnarkVerifier, VerifyingKeyConstants};
