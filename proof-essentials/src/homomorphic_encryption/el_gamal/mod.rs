use crate::error::CryptoError;
use crate::homomorphic_encryption::HomomorphicEncryptionScheme;
use crate::utils::ladder::ladder_mul;

use ark_ec::{AffineRepr, CurveGroup, Group};
use ark_ff::UniformRand;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::hash::Hash;
use ark_std::{marker::PhantomData, rand::Rng};

pub mod arithmetic_definitions;

/// Exponential ElGamal over an additive group: `Enc(m; r) = (r·G, m + r·pk)`.
#[derive(Clone)]
pub struct ElGamal<C: CurveGroup> {
    _group: PhantomData<C>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Parameters<C: CurveGroup> {
    pub generator: C::Affine,
}

pub type PublicKey<C> = <C as CurveGroup>::Affine;

pub type SecretKey<C> = <C as Group>::ScalarField;

#[derive(Clone, Copy, Eq, Hash, PartialEq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct Plaintext<C: CurveGroup>(pub C::Affine);

/// `sk·e1` for one holder of a key share.
#[derive(Clone, Copy, Eq, Hash, PartialEq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct DecryptionShare<C: CurveGroup>(pub C::Affine);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct Ciphertext<C: CurveGroup> {
    /// `r·G`
    pub e1: C::Affine,
    /// `m + r·pk`
    pub e2: C::Affine,
}

impl<C: CurveGroup> Ciphertext<C> {
    pub fn new(e1: C::Affine, e2: C::Affine) -> Self {
        Self { e1, e2 }
    }
}

impl<C: CurveGroup> HomomorphicEncryptionScheme<C::ScalarField> for ElGamal<C> {
    type Parameters = Parameters<C>;
    type PublicKey = PublicKey<C>;
    type SecretKey = SecretKey<C>;
    type Plaintext = Plaintext<C>;
    type Ciphertext = Ciphertext<C>;
    type DecryptionShare = DecryptionShare<C>;

    fn setup() -> Self::Parameters {
        Parameters {
            generator: C::generator().into_affine(),
        }
    }

    fn keygen<R: Rng>(
        pp: &Self::Parameters,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey), CryptoError> {
        let secret_key = C::ScalarField::rand(rng);
        let public_key = ladder_mul::<C>(&pp.generator, &secret_key).into_affine();

        Ok((public_key, secret_key))
    }

    fn encrypt(
        pp: &Self::Parameters,
        pk: &Self::PublicKey,
        message: &Self::Plaintext,
        r: &C::ScalarField,
    ) -> Result<Self::Ciphertext, CryptoError> {
        // s = r*pk
        let s = ladder_mul::<C>(pk, r);

        let e1 = ladder_mul::<C>(&pp.generator, r).into_affine();
        let e2 = (message.0.into_group() + s).into_affine();

        Ok(Ciphertext { e1, e2 })
    }

    fn rerandomize(
        pp: &Self::Parameters,
        pk: &Self::PublicKey,
        ciphertext: &Self::Ciphertext,
        r: &C::ScalarField,
    ) -> Result<Self::Ciphertext, CryptoError> {
        let zero = Self::encrypt(pp, pk, &Plaintext(C::Affine::zero()), r)?;

        Ok(*ciphertext + zero)
    }

    fn decryption_share(
        sk: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::DecryptionShare, CryptoError> {
        Ok(DecryptionShare(
            ladder_mul::<C>(&ciphertext.e1, sk).into_affine(),
        ))
    }

    fn combine_shares(
        ciphertext: &Self::Ciphertext,
        shares: &[Self::DecryptionShare],
    ) -> Result<Self::Plaintext, CryptoError> {
        let aggregate: DecryptionShare<C> = shares.iter().copied().sum();

        // m = e2 - sum(sk_i * e1)
        Ok(Plaintext((ciphertext.e2.into_group() - aggregate.0).into_affine()))
    }

    fn decrypt(
        _pp: &Self::Parameters,
        sk: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::Plaintext, CryptoError> {
        let share = Self::decryption_share(sk, ciphertext)?;

        Self::combine_shares(ciphertext, &[share])
    }
}
