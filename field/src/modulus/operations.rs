use crate::element::FieldElement;
use crate::modulus::{FieldOperations, NONE, REDUCEMOD};
use crate::shape::FieldShape;
use crate::MAX_LIMBS;
use itertools::izip;

/// Product of a limb with the top limb of a modulus whose top limb is one bit
/// wide: `bit` is 0 or 1, so the product is a mask.
#[inline(always)]
fn mul_by_top_bit(x: u64, bit: u64) -> u64 {
    x & bit.wrapping_neg()
}

impl FieldShape {
    #[inline(always)]
    fn add_limb_product(&self, cols: &mut [u128], i: usize, j: usize, a: u64, b: u64, times: u128) {
        let top: usize = self.limbs - 1;
        if self.top_width_one && (i == top || j == top) {
            let t: u64 = match (i == top, j == top) {
                (true, true) => a & b,
                (true, false) => mul_by_top_bit(b, a),
                _ => mul_by_top_bit(a, b),
            };
            cols[i + j] += times * t as u128;
        } else {
            let t: u128 = a as u128 * b as u128;
            cols[i + j] += times * (t as u64 as u128);
            cols[i + j + 1] += times * (t >> 64);
        }
    }
}

impl FieldOperations for FieldShape {
    /// Applies a modular reduction on a based on REDUCE:
    /// - NONE: folds a below 2^mod_bits.
    /// - ONCE: folds a below 2^mod_bits, then maps it to [0, p).
    #[inline(always)]
    fn sa_reduce_into_sa<const REDUCE: REDUCEMOD>(&self, a: &mut FieldElement) {
        let n: usize = self.limbs;
        debug_assert!(a.0[n..].iter().all(|&l| l == 0));
        let mut z: [u64; MAX_LIMBS + 1] = [0; MAX_LIMBS + 1];
        z[..n].copy_from_slice(&a.0[..n]);
        self.reduce_small(&mut z[..=n], a);
        self.reduce_assign::<REDUCE>(a);
    }

    #[inline(always)]
    fn sa_reduce_into_sb<const REDUCE: REDUCEMOD>(&self, a: &FieldElement, b: &mut FieldElement) {
        *b = *a;
        self.sa_reduce_into_sa::<REDUCE>(b);
    }

    #[inline(always)]
    fn set_word(&self, w: u64, a: &mut FieldElement) {
        *a = FieldElement::from_word(w);
        if self.limbs == 1 {
            self.sa_reduce_into_sa::<NONE>(a);
        }
    }

    #[inline(always)]
    fn sa_copy_into_sb(&self, a: &FieldElement, b: &mut FieldElement) {
        b.0[..self.limbs].copy_from_slice(&a.0[..self.limbs]);
        b.0[self.limbs..].fill(0);
    }

    fn sa_equal_sb(&self, a: &FieldElement, b: &FieldElement) -> bool {
        let mut x: FieldElement = FieldElement::zero();
        let mut y: FieldElement = FieldElement::zero();
        self.final_reduce_into_sb(a, &mut x);
        self.final_reduce_into_sb(b, &mut y);
        x == y
    }

    fn sa_is_zero(&self, a: &FieldElement) -> bool {
        let mut x: FieldElement = FieldElement::zero();
        self.final_reduce_into_sb(a, &mut x);
        x.is_zero()
    }

    #[inline(always)]
    fn sa_add_sb_into_sc<const REDUCE: REDUCEMOD>(
        &self,
        a: &FieldElement,
        b: &FieldElement,
        c: &mut FieldElement,
    ) {
        let n: usize = self.limbs;
        let mut z: [u64; MAX_LIMBS + 1] = [0; MAX_LIMBS + 1];
        let mut carry: u128 = 0;
        izip!(z[..n].iter_mut(), a.0[..n].iter(), b.0[..n].iter()).for_each(|(zi, &ai, &bi)| {
            carry += ai as u128 + bi as u128;
            *zi = carry as u64;
            carry >>= 64;
        });
        z[n] = carry as u64;
        self.reduce_small(&mut z[..=n], c);
        self.reduce_assign::<REDUCE>(c);
    }

    #[inline(always)]
    fn sa_add_sb_into_sb<const REDUCE: REDUCEMOD>(&self, a: &FieldElement, b: &mut FieldElement) {
        let t: FieldElement = *b;
        self.sa_add_sb_into_sc::<REDUCE>(a, &t, b);
    }

    /// Computes a + 2p - b, which is positive for any lazily reduced b.
    #[inline(always)]
    fn sa_sub_sb_into_sc<const REDUCE: REDUCEMOD>(
        &self,
        a: &FieldElement,
        b: &FieldElement,
        c: &mut FieldElement,
    ) {
        debug_assert!(self.is_lazy(b));
        let n: usize = self.limbs;
        let mut z: [u64; MAX_LIMBS + 1] = [0; MAX_LIMBS + 1];
        let mut carry: i128 = 0;
        izip!(
            z[..n].iter_mut(),
            self.two_prime[..n].iter(),
            a.0[..n].iter(),
            b.0[..n].iter()
        )
        .for_each(|(zi, &qi, &ai, &bi)| {
            carry += qi as i128 + ai as i128 - bi as i128;
            *zi = carry as u64;
            carry >>= 64;
        });
        carry += self.two_prime[n] as i128;
        debug_assert!(carry >= 0);
        z[n] = carry as u64;
        self.reduce_small(&mut z[..=n], c);
        self.reduce_assign::<REDUCE>(c);
    }

    #[inline(always)]
    fn sa_sub_sb_into_sb<const REDUCE: REDUCEMOD>(&self, a: &FieldElement, b: &mut FieldElement) {
        let t: FieldElement = *b;
        self.sa_sub_sb_into_sc::<REDUCE>(a, &t, b);
    }

    #[inline(always)]
    fn sa_sub_sb_into_sa<const REDUCE: REDUCEMOD>(&self, b: &FieldElement, a: &mut FieldElement) {
        let t: FieldElement = *a;
        self.sa_sub_sb_into_sc::<REDUCE>(&t, b, a);
    }

    #[inline(always)]
    fn sa_mul_sb_into_sc<const REDUCE: REDUCEMOD>(
        &self,
        a: &FieldElement,
        b: &FieldElement,
        c: &mut FieldElement,
    ) {
        debug_assert!(self.is_lazy(a) && self.is_lazy(b));
        let n: usize = self.limbs;
        let mut cols: [u128; 2 * MAX_LIMBS] = [0; 2 * MAX_LIMBS];
        for (i, &ai) in a.0[..n].iter().enumerate() {
            for (j, &bj) in b.0[..n].iter().enumerate() {
                self.add_limb_product(&mut cols, i, j, ai, bj, 1);
            }
        }
        self.reduce_long(&cols[..2 * n], c);
        self.reduce_assign::<REDUCE>(c);
    }

    #[inline(always)]
    fn sa_mul_sb_into_sb<const REDUCE: REDUCEMOD>(&self, a: &FieldElement, b: &mut FieldElement) {
        let t: FieldElement = *b;
        self.sa_mul_sb_into_sc::<REDUCE>(a, &t, b);
    }

    /// Squares with the cross products computed once and counted twice.
    #[inline(always)]
    fn sa_sqr_into_sb<const REDUCE: REDUCEMOD>(&self, a: &FieldElement, b: &mut FieldElement) {
        debug_assert!(self.is_lazy(a));
        let n: usize = self.limbs;
        let mut cols: [u128; 2 * MAX_LIMBS] = [0; 2 * MAX_LIMBS];
        for i in 0..n {
            self.add_limb_product(&mut cols, i, i, a.0[i], a.0[i], 1);
            for j in i + 1..n {
                self.add_limb_product(&mut cols, i, j, a.0[i], a.0[j], 2);
            }
        }
        self.reduce_long(&cols[..2 * n], b);
        self.reduce_assign::<REDUCE>(b);
    }

    #[inline(always)]
    fn sa_sqr_into_sa<const REDUCE: REDUCEMOD>(&self, a: &mut FieldElement) {
        let t: FieldElement = *a;
        self.sa_sqr_into_sb::<REDUCE>(&t, a);
    }

    fn sa_sqr_n_into_sb<const REDUCE: REDUCEMOD>(
        &self,
        a: &FieldElement,
        n: usize,
        b: &mut FieldElement,
    ) {
        *b = *a;
        self.sa_sqr_n_into_sa::<REDUCE>(n, b);
    }

    fn sa_sqr_n_into_sa<const REDUCE: REDUCEMOD>(&self, n: usize, a: &mut FieldElement) {
        for _ in 0..n {
            self.sa_sqr_into_sa::<NONE>(a);
        }
        self.reduce_assign::<REDUCE>(a);
    }

    fn sa_inv_into_sb<const REDUCE: REDUCEMOD>(&self, a: &FieldElement, b: &mut FieldElement) {
        self.inv_lazy(a, b);
        self.reduce_assign::<REDUCE>(b);
    }

    fn sa_inv_into_sa<const REDUCE: REDUCEMOD>(&self, a: &mut FieldElement) {
        let t: FieldElement = *a;
        self.sa_inv_into_sb::<REDUCE>(&t, a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modulus::ONCE;

    fn shape29() -> FieldShape {
        FieldShape::new(4, 3).unwrap()
    }

    #[test]
    fn small_prime_arithmetic() {
        let shape: FieldShape = shape29();
        let mut c: FieldElement = FieldElement::zero();

        shape.sa_add_sb_into_sc::<ONCE>(&FieldElement::from_word(20), &FieldElement::from_word(15), &mut c);
        assert_eq!(c, FieldElement::from_word(6));

        shape.sa_sub_sb_into_sc::<ONCE>(&FieldElement::from_word(3), &FieldElement::from_word(5), &mut c);
        assert_eq!(c, FieldElement::from_word(27));

        shape.sa_mul_sb_into_sc::<ONCE>(&FieldElement::from_word(7), &FieldElement::from_word(9), &mut c);
        assert_eq!(c, FieldElement::from_word(5));

        shape.sa_sqr_into_sb::<ONCE>(&FieldElement::from_word(28), &mut c);
        assert_eq!(c, FieldElement::from_word(1));
    }

    #[test]
    fn sub_of_lazy_representative() {
        // 31 is a lazy representative of 2
        let shape: FieldShape = shape29();
        let mut c: FieldElement = FieldElement::zero();
        shape.sa_sub_sb_into_sc::<ONCE>(&FieldElement::from_word(0), &FieldElement::from_word(31), &mut c);
        assert_eq!(c, FieldElement::from_word(27));
    }

    #[test]
    fn set_word_and_equality() {
        let shape: FieldShape = shape29();
        let mut a: FieldElement = FieldElement::zero();
        shape.set_word(60, &mut a);
        assert!(shape.sa_equal_sb(&a, &FieldElement::from_word(2)));
        assert!(shape.sa_is_zero(&FieldElement::from_word(29)));
        assert!(!shape.sa_is_zero(&FieldElement::from_word(30)));
    }

    #[test]
    fn top_bit_products() {
        assert_eq!(mul_by_top_bit(0xdead, 1), 0xdead);
        assert_eq!(mul_by_top_bit(0xdead, 0), 0);
    }
}
