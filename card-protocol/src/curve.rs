//! Checked group operations on the masking curve.
//!
//! Every operand is validated before any arithmetic: it must satisfy the curve equation
//! and lie in the prime-order subgroup. The identity `(0, 1)` passes both checks.

use crate::{BaseField, CardProtocolError, Curve, CurvePoint, Result, Scalar};

use ark_ec::{AffineRepr, CurveGroup, Group};
use proof_essentials::utils::ladder::ladder_mul;

/// The fixed base `G`.
pub fn generator() -> CurvePoint {
    Curve::generator().into_affine()
}

pub fn identity() -> CurvePoint {
    CurvePoint::zero()
}

/// Build a point from coordinates without trusting them.
pub fn from_coordinates(x: BaseField, y: BaseField) -> Result<CurvePoint> {
    let point = CurvePoint::new_unchecked(x, y);
    validate(&point, "coordinates")?;
    Ok(point)
}

pub fn is_on_curve(p: &CurvePoint) -> bool {
    p.is_on_curve() && p.is_in_correct_subgroup_assuming_on_curve()
}

/// Fails with `InvalidPoint` naming `what` when `p` is not a subgroup point.
pub fn validate(p: &CurvePoint, what: &str) -> Result<()> {
    if !p.is_on_curve() {
        return Err(CardProtocolError::InvalidPoint(format!(
            "{what}: not on the curve"
        )));
    }
    if !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(CardProtocolError::InvalidPoint(format!(
            "{what}: outside the prime-order subgroup"
        )));
    }
    Ok(())
}

pub fn add(p: &CurvePoint, q: &CurvePoint) -> Result<CurvePoint> {
    validate(p, "left operand")?;
    validate(q, "right operand")?;
    Ok((*p + *q).into_affine())
}

/// `s·P` by a Montgomery ladder over all scalar bits.
pub fn scalar_mul(p: &CurvePoint, s: &Scalar) -> Result<CurvePoint> {
    validate(p, "base point")?;
    Ok(ladder_mul::<Curve>(p, s).into_affine())
}

pub fn negate(p: &CurvePoint) -> Result<CurvePoint> {
    validate(p, "operand")?;
    Ok(-*p)
}

pub fn equals(p: &CurvePoint, q: &CurvePoint) -> bool {
    p == q
}

/// Group sum of already validated points.
pub(crate) fn sum<'a>(points: impl IntoIterator<Item = &'a CurvePoint>) -> CurvePoint {
    points
        .into_iter()
        .map(|p| p.into_group())
        .sum::<Curve>()
        .into_affine()
}
