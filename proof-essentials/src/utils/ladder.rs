use ark_ec::CurveGroup;
use ark_ff::{BitIteratorBE, PrimeField};

/// Montgomery-ladder scalar multiplication.
///
/// Walks every bit of the scalar's canonical representation, leading zeros included,
/// and performs exactly one addition and one doubling per bit. Use it wherever the
/// scalar may be secret (private keys, masking randomness, proof nonces).
pub fn ladder_mul<C: CurveGroup>(base: &C::Affine, scalar: &C::ScalarField) -> C {
    let mut r0 = C::zero();
    let mut r1: C = (*base).into();

    for bit in BitIteratorBE::new(scalar.into_bigint()) {
        if bit {
            r0 += r1;
            r1.double_in_place();
        } else {
            r1 += r0;
            r0.double_in_place();
        }
    }

    r0
}

#[cfg(test)]
mod test {
    use super::*;
    use ark_ec::AffineRepr;
    use ark_std::{rand::thread_rng, One, UniformRand, Zero};

    type Curve = ark_ed_on_bn254::EdwardsProjective;
    type Scalar = ark_ed_on_bn254::Fr;

    #[test]
    fn matches_double_and_add() {
        let rng = &mut thread_rng();
        for _ in 0..8 {
            let base = Curve::rand(rng).into_affine();
            let s = Scalar::rand(rng);
            assert_eq!(ladder_mul::<Curve>(&base, &s), base.mul_bigint(s.into_bigint()));
        }
    }

    #[test]
    fn edge_scalars() {
        let g = ark_ed_on_bn254::EdwardsAffine::generator();
        assert!(ladder_mul::<Curve>(&g, &Scalar::zero()).is_zero());
        assert_eq!(ladder_mul::<Curve>(&g, &Scalar::one()), g.into_group());
        assert!((ladder_mul::<Curve>(&g, &-Scalar::one()) + g.into_group()).is_zero());
    }
}
