use super::super::Ciphertext;
use ark_ec::{AffineRepr, CurveGroup};
use ark_std::ops::Mul;
use ark_std::{UniformRand, Zero};
use rand::Rng;

impl<C: CurveGroup> std::ops::Add<Ciphertext<C>> for Ciphertext<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            e1: (self.e1 + rhs.e1).into(),
            e2: (self.e2 + rhs.e2).into(),
        }
    }
}

impl<C: CurveGroup> Mul<C::ScalarField> for Ciphertext<C> {
    type Output = Self;
    fn mul(self, x: C::ScalarField) -> Self::Output {
        Self {
            e1: self.e1.mul(x).into_affine(),
            e2: self.e2.mul(x).into_affine(),
        }
    }
}

impl<C: CurveGroup> std::iter::Sum for Ciphertext<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |a, b| a + b)
    }
}

impl<C: CurveGroup> Zero for Ciphertext<C> {
    fn zero() -> Self {
        Self {
            e1: C::Affine::zero(),
            e2: C::Affine::zero(),
        }
    }

    fn is_zero(&self) -> bool {
        self.e1.is_zero() && self.e2.is_zero()
    }
}

impl<C: CurveGroup> UniformRand for Ciphertext<C> {
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let e1 = C::rand(rng).into_affine();
        let e2 = C::rand(rng).into_affine();

        Self { e1, e2 }
    }
}
