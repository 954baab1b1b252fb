use crate::error::ShareError;
use crate::share::Share;
use field::modulus::{FieldOperations, NONE, ONCE};
use field::{FieldElement, FieldShape};
use itertools::izip;

/// Returns a zeroed scratch vector of `count` elements, failing instead of
/// aborting when the allocation cannot be served.
fn scratch(count: usize) -> Result<Vec<FieldElement>, ShareError> {
    let mut v: Vec<FieldElement> = Vec::new();
    v.try_reserve_exact(count)
        .map_err(|_| ShareError::AllocationFailure { count })?;
    v.resize(count, FieldElement::zero());
    Ok(v)
}

/// Assigns `coeffs[0] + coeffs[1] * x + ... + coeffs[parts-1] * x^(parts-1)`
/// to y, canonically reduced.
///
/// `coeffs[0]` is the secret. Coefficients and x may be any decoded value
/// below `2^(8 * shape.bytes())`; x should be nonzero, as the share at zero
/// is the secret itself.
pub fn split(
    shape: &FieldShape,
    parts: usize,
    coeffs: &[FieldElement],
    x: &FieldElement,
    y: &mut FieldElement,
) -> Result<(), ShareError> {
    if parts < 2 || coeffs.len() < parts {
        return Err(ShareError::InvalidParts { parts });
    }

    let mut x_red: FieldElement = FieldElement::zero();
    shape.sa_reduce_into_sb::<NONE>(x, &mut x_red);

    let mut acc: FieldElement = FieldElement::zero();
    let mut a: FieldElement = FieldElement::zero();
    let mut t: FieldElement = FieldElement::zero();

    // a_0 + a_1 * x
    shape.sa_reduce_into_sb::<NONE>(&coeffs[0], &mut acc);
    shape.sa_reduce_into_sb::<NONE>(&coeffs[1], &mut a);
    shape.sa_mul_sb_into_sc::<NONE>(&a, &x_red, &mut t);
    shape.sa_add_sb_into_sb::<NONE>(&t, &mut acc);

    let mut m: FieldElement = x_red;
    for c in coeffs[2..parts].iter() {
        shape.sa_reduce_into_sb::<NONE>(c, &mut a);
        shape.sa_mul_sb_into_sb::<NONE>(&x_red, &mut m);
        shape.sa_mul_sb_into_sc::<NONE>(&a, &m, &mut t);
        shape.sa_add_sb_into_sb::<NONE>(&t, &mut acc);
    }

    shape.final_reduce_into_sb(&acc, y);
    Ok(())
}

/// Rejects zero and repeated evaluation points among `xs`, which hold
/// canonical values.
fn check_evaluation_points(xs: &[FieldElement]) -> Result<(), ShareError> {
    for (i, xi) in xs.iter().enumerate() {
        if xi.is_zero() {
            return Err(ShareError::ZeroEvaluationPoint);
        }
        if xs[..i].contains(xi) {
            return Err(ShareError::DuplicateEvaluationPoint);
        }
    }
    Ok(())
}

/// Recovers the secret from the first `parts` shares by Lagrange
/// interpolation at zero and assigns it to `secret`, canonically reduced.
///
/// With `np = x_0 * ... * x_{k-1}`, the secret is the sum over i of
/// `np * y_i / d_i` where `d_i = x_i * prod_{j != i} (x_j - x_i)`. All terms
/// are brought to the common denominator `prod d_i`, so a single inversion is
/// needed.
///
/// Shares past the first `parts` are ignored. `secret` is only written on
/// success.
pub fn join(
    shape: &FieldShape,
    parts: usize,
    shares: &[Share],
    secret: &mut FieldElement,
) -> Result<(), ShareError> {
    if parts < 2 {
        return Err(ShareError::InvalidParts { parts });
    }
    if shares.len() < parts {
        return Err(ShareError::InsufficientShares {
            parts,
            got: shares.len(),
        });
    }
    let shares: &[Share] = &shares[..parts];

    let mut xs: Vec<FieldElement> = scratch(parts)?;
    let mut numerators: Vec<FieldElement> = scratch(parts)?;
    let mut denominators: Vec<FieldElement> = scratch(parts)?;

    for (x, share) in xs.iter_mut().zip(shares.iter()) {
        shape.sa_reduce_into_sb::<ONCE>(&share.x, x);
    }
    check_evaluation_points(&xs)?;

    let mut np: FieldElement = xs[0];
    for x in xs[1..].iter() {
        shape.sa_mul_sb_into_sb::<NONE>(x, &mut np);
    }

    let mut t: FieldElement = FieldElement::zero();
    let mut y: FieldElement = FieldElement::zero();
    for (i, (xi, share, n, d)) in izip!(
        xs.iter(),
        shares.iter(),
        numerators.iter_mut(),
        denominators.iter_mut()
    )
    .enumerate()
    {
        *d = *xi;
        for (j, xj) in xs.iter().enumerate() {
            if i != j {
                shape.sa_sub_sb_into_sc::<NONE>(xj, xi, &mut t);
                shape.sa_mul_sb_into_sb::<NONE>(&t, d);
            }
        }
        shape.sa_reduce_into_sb::<NONE>(&share.y, &mut y);
        shape.sa_mul_sb_into_sc::<NONE>(&np, &y, n);
    }

    let mut sum: FieldElement = FieldElement::zero();
    for (i, n) in numerators.iter_mut().enumerate() {
        for (j, d) in denominators.iter().enumerate() {
            if i != j {
                shape.sa_mul_sb_into_sb::<NONE>(d, n);
            }
        }
        shape.sa_add_sb_into_sb::<NONE>(n, &mut sum);
    }

    let mut den: FieldElement = denominators[0];
    for d in denominators[1..].iter() {
        shape.sa_mul_sb_into_sb::<NONE>(d, &mut den);
    }
    shape.sa_inv_into_sa::<NONE>(&mut den);

    shape.sa_mul_sb_into_sc::<ONCE>(&den, &sum, secret);
    Ok(())
}
