use crate::{curve, AggregatedKey, CardProtocolError, ElGamal, PublicKey, Result, SecretKey};

use ark_std::rand::Rng;
use proof_essentials::homomorphic_encryption::HomomorphicEncryptionScheme;

/// A player's key share. Lives only on the player's side of the protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keypair {
    pub secret: SecretKey,
    pub public: PublicKey,
}

impl Keypair {
    pub fn generate<R: Rng>(rng: &mut R) -> Result<Self> {
        let (public, secret) = ElGamal::keygen(&ElGamal::setup(), rng)?;
        Ok(Self { secret, public })
    }

    pub fn from_secret(secret: SecretKey) -> Result<Self> {
        let public = curve::scalar_mul(&curve::generator(), &secret)?;
        Ok(Self { secret, public })
    }
}

/// Group sum of the players' public keys.
///
/// The result does not depend on the order of `keys`. An empty list sums to the
/// identity, which `mask` refuses as a joint key.
pub fn aggregate_keys(keys: &[PublicKey]) -> Result<AggregatedKey> {
    for (i, pk) in keys.iter().enumerate() {
        curve::validate(pk, &format!("public key at index {i}"))?;
    }

    Ok(curve::sum(keys))
}

/// Identity joint keys carry no key material.
pub(crate) fn ensure_joint_key(joint_key: &AggregatedKey) -> Result<()> {
    curve::validate(joint_key, "joint key")?;
    if *joint_key == curve::identity() {
        return Err(CardProtocolError::IdentityKey);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CurvePoint, Scalar};
    use ark_ec::CurveGroup;
    use ark_std::{rand::thread_rng, UniformRand};
    use rand::seq::SliceRandom;

    #[test]
    fn generated_keys_match_their_secret() {
        let rng = &mut thread_rng();
        let keypair = Keypair::generate(rng).unwrap();
        assert_eq!(Keypair::from_secret(keypair.secret).unwrap(), keypair);
        assert_eq!(
            keypair.public,
            (curve::generator() * keypair.secret).into_affine()
        );
    }

    #[test]
    fn aggregation_is_order_independent() {
        let rng = &mut thread_rng();
        let mut keys = (0..5)
            .map(|_| Keypair::generate(rng).unwrap().public)
            .collect::<Vec<_>>();

        let joint = aggregate_keys(&keys).unwrap();
        keys.shuffle(rng);
        assert_eq!(aggregate_keys(&keys).unwrap(), joint);
        keys.reverse();
        assert_eq!(aggregate_keys(&keys).unwrap(), joint);
    }

    #[test]
    fn joint_key_is_the_key_of_the_summed_secrets() {
        let rng = &mut thread_rng();
        let players = (0..4)
            .map(|_| Keypair::generate(rng).unwrap())
            .collect::<Vec<_>>();

        let secret_sum: Scalar = players.iter().map(|p| p.secret).sum();
        let keys = players.iter().map(|p| p.public).collect::<Vec<_>>();

        assert_eq!(
            aggregate_keys(&keys).unwrap(),
            Keypair::from_secret(secret_sum).unwrap().public
        );
    }

    #[test]
    fn empty_list_is_the_identity() {
        let joint = aggregate_keys(&[]).unwrap();
        assert_eq!(joint, curve::identity());
        assert_eq!(ensure_joint_key(&joint), Err(CardProtocolError::IdentityKey));
    }

    #[test]
    fn names_the_offending_key() {
        let rng = &mut thread_rng();
        let good = crate::Curve::rand(rng).into_affine();
        let bad = CurvePoint::new_unchecked(good.x, good.y + crate::BaseField::from(1u64));

        assert_eq!(
            aggregate_keys(&[good, good, bad]),
            Err(CardProtocolError::InvalidPoint(
                "public key at index 2: not on the curve".into()
            ))
        );
    }
}
