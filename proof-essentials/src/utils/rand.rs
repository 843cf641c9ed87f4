use crate::error::CryptoError;

use ark_serialize::CanonicalSerialize;
use ark_std::marker::PhantomData;
use ark_std::rand::{RngCore, SeedableRng};
use digest::{Digest, Output};
use rand_chacha::ChaChaRng;

/// Deterministic randomness derived from a hash chain over everything absorbed so far.
///
/// Challenges are drawn from a ChaCha20 stream keyed by the current chain value, so a
/// prover and a verifier that absorb the same transcript sample the same scalars.
pub struct FiatShamirRng<D: Digest> {
    r: ChaChaRng,
    seed: Output<D>,
    #[doc(hidden)]
    digest: PhantomData<D>,
}

impl<D: Digest> RngCore for FiatShamirRng<D> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.r.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.r.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.r.fill_bytes(dest);
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), ark_std::rand::Error> {
        self.r.fill_bytes(dest);
        Ok(())
    }
}

impl<D: Digest> FiatShamirRng<D> {
    /// Create a new `Self` from a domain-separation label.
    /// `self.seed = H(label)`.
    #[inline]
    pub fn from_seed(label: &[u8]) -> Self {
        let seed = D::digest(label);
        let r = ChaChaRng::from_seed(chacha_seed::<D>(&seed));
        Self {
            r,
            seed,
            digest: PhantomData,
        }
    }

    /// Refresh `self.seed` with raw bytes. Achieved by setting
    /// `self.seed = H(bytes || self.seed)`.
    #[inline]
    pub fn absorb_bytes(&mut self, bytes: &[u8]) {
        let mut hasher = D::new();
        hasher.update(bytes);
        hasher.update(&self.seed);
        self.seed = hasher.finalize();
        self.r = ChaChaRng::from_seed(chacha_seed::<D>(&self.seed));
    }

    /// Absorb the compressed canonical encoding of `item`.
    #[inline]
    pub fn absorb<T: CanonicalSerialize + ?Sized>(&mut self, item: &T) -> Result<(), CryptoError> {
        let mut bytes = Vec::with_capacity(item.compressed_size());
        item.serialize_compressed(&mut bytes)?;
        self.absorb_bytes(&bytes);
        Ok(())
    }
}

fn chacha_seed<D: Digest>(digest: &Output<D>) -> [u8; 32] {
    let mut seed = [0u8; 32];
    for (dst, src) in seed.iter_mut().zip(digest.iter()) {
        *dst = *src;
    }
    seed
}

#[cfg(test)]
mod test {
    use super::*;
    use ark_bn254::{Fr, G1Affine};
    use ark_ec::AffineRepr;
    use ark_std::UniformRand;
    use blake2::Blake2s256;

    type FS = FiatShamirRng<Blake2s256>;

    #[test]
    fn same_transcript_same_challenge() {
        let g = G1Affine::generator();

        let mut left = FS::from_seed(b"label");
        left.absorb(&g).unwrap();
        let mut right = FS::from_seed(b"label");
        right.absorb(&g).unwrap();

        assert_eq!(Fr::rand(&mut left), Fr::rand(&mut right));
    }

    #[test]
    fn label_and_order_change_the_challenge() {
        let g = G1Affine::generator();
        let h: G1Affine = (g * Fr::from(7u64)).into();

        let mut base = FS::from_seed(b"label");
        base.absorb(&g).unwrap();
        base.absorb(&h).unwrap();
        let base = Fr::rand(&mut base);

        let mut relabelled = FS::from_seed(b"other label");
        relabelled.absorb(&g).unwrap();
        relabelled.absorb(&h).unwrap();
        assert_ne!(base, Fr::rand(&mut relabelled));

        let mut swapped = FS::from_seed(b"label");
        swapped.absorb(&h).unwrap();
        swapped.absorb(&g).unwrap();
        assert_ne!(base, Fr::rand(&mut swapped));
    }
}
