use crate::{curve, Card, CardProtocolError, ElGamal, MaskedCard, Result, RevealToken};

use proof_essentials::homomorphic_encryption::{
    el_gamal::DecryptionShare, HomomorphicEncryptionScheme,
};

/// `e2 - Σ tokens`.
///
/// Every key share behind the joint key must contribute exactly one token; a missing
/// or extra token yields a wrong point, not an error. Use [`unmask_exact`] when the
/// number of shares is known.
pub fn unmask(masked: &MaskedCard, tokens: &[RevealToken]) -> Result<Card> {
    curve::validate(&masked.e1, "e1")?;
    curve::validate(&masked.e2, "e2")?;

    let shares = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            curve::validate(token, &format!("reveal token at index {i}"))?;
            Ok(DecryptionShare(*token))
        })
        .collect::<Result<Vec<_>>>()?;

    let card = ElGamal::combine_shares(masked, &shares)?;
    Ok(card.0)
}

/// [`unmask`] after checking that there is one token per key share.
pub fn unmask_exact(
    masked: &MaskedCard,
    tokens: &[RevealToken],
    expected_shares: usize,
) -> Result<Card> {
    if tokens.len() != expected_shares {
        return Err(CardProtocolError::ArityMismatch {
            expected: expected_shares,
            got: tokens.len(),
        });
    }

    unmask(masked, tokens)
}
