//! Entry points at the protocol's ABI boundary.
//!
//! Every argument arrives as fixed-width big-endian words. Operations that return a
//! point fail on malformed input; verification calls return `false` instead.

use crate::encoding::{classical_proof_from_bytes, MaskedCardInput, WirePoint, Word};
use crate::snark::{SnarkVerifier, PUBLIC_INPUTS};
use crate::{keys, reveal, unmask as unmasker, CardProtocolError, Result};

use tracing::debug;

const LOG_TARGET: &str = "card_protocol::abi";

fn decode_all(points: &[WirePoint], what: &str) -> Result<Vec<crate::CurvePoint>> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            p.decode().map_err(|e| match e {
                CardProtocolError::InvalidPoint(msg) => {
                    CardProtocolError::InvalidPoint(format!("{what} at index {i}: {msg}"))
                }
                other => other,
            })
        })
        .collect()
}

pub fn aggregate_keys(pks: &[WirePoint]) -> Result<WirePoint> {
    let keys = decode_all(pks, "public key")?;
    let joint = keys::aggregate_keys(&keys)?;
    Ok(WirePoint::from(&joint))
}

/// `proof` is the 160-byte `A1.x ‖ A1.y ‖ A2.x ‖ A2.y ‖ z` encoding.
pub fn verify_reveal(pk: &WirePoint, e1: &WirePoint, token: &WirePoint, proof: &[u8]) -> bool {
    let decoded = (|| {
        Ok::<_, CardProtocolError>((
            pk.decode()?,
            e1.decode()?,
            token.decode()?,
            classical_proof_from_bytes(proof)?,
        ))
    })();

    match decoded {
        Ok((pk, e1, token, proof)) => reveal::verify_reveal(&pk, &e1, &token, &proof),
        Err(e) => {
            debug!(target: LOG_TARGET, error = %e, "rejecting malformed reveal");
            false
        }
    }
}

/// Accepts the masked card either as `{e1, e2}` or as flat `[e2.x, e2.y, e1.x, e1.y]`.
pub fn unmask(masked: &MaskedCardInput, tokens: &[WirePoint]) -> Result<WirePoint> {
    let masked = masked.decode()?;
    let tokens = decode_all(tokens, "reveal token")?;
    let card = unmasker::unmask(&masked, &tokens)?;
    Ok(WirePoint::from(&card))
}

pub fn verify_reveal_with_snark(
    verifier: &SnarkVerifier,
    public_inputs: &[Word; PUBLIC_INPUTS],
    proof: &[Word; 8],
) -> bool {
    verifier.verify_words(public_inputs, proof)
}
