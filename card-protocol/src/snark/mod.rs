//! Succinct reveal proofs: a Groth16 proof over BN254 that one secret key links
//! `pk = sk·G` and `reveal = sk·e1` on the masking curve.
//!
//! The masking curve's coordinates live in the BN254 scalar field, so the six
//! coordinates of `(e1, reveal, pk)` are used directly as public inputs.

pub mod circuit;
pub mod proof;
pub mod prover;
pub mod verifier;
pub mod vk;


pub use circuit::{RevealCircuit, PUBLIC_INPUTS};
pub use proof::SnarkProof;
pub use prover::{prove_reveal, setup};
pub use verifier::{public_input_words, public_inputs, SnarkVerifier};
pub use vk::VerifyingKeyConstants;
