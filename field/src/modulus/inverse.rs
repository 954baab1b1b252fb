//! Inversion by Fermat's little theorem, `a^-1 = a^(p-2)`.
//!
//! For `p = 2^m - word` the exponent `e = p - 2 = 2^m - (word + 2)` is a run
//! of ones followed by a short tail: with `ls = bitlen(word + 1)`,
//! `e = (2^(m - ls) - 1) * 2^ls + w` where `w = 2^ls - (word + 2) < 2^ls`.
//! The run `a^(2^(m - ls) - 1)` is built with an addition chain on the run
//! length; the tail `a^w` by plain square-and-multiply.

use crate::element::FieldElement;
use crate::modulus::{FieldOperations, NONE};
use crate::shape::FieldShape;

/// Precomputed exponentiation schedule for `a^(p-2)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdditionChain {
    /// Number of exponent bits below the run of ones.
    pub(crate) low_bits: usize,
    /// Value of those bits.
    pub(crate) low_exponent: u64,
    /// Length of the run of ones.
    pub(crate) run: usize,
    /// Multipliers taking `a^(2^h - 1)` from `h = 1` to `h = run`. A step `k`
    /// maps h to `k * h`, except `1` which maps h to `h + 1`.
    pub(crate) steps: Vec<u8>,
}

impl AdditionChain {
    pub fn new(mod_bits: usize, word: u64) -> Self {
        let word_plus_one: u128 = word as u128 + 1;
        let low_bits: usize = (u128::BITS - word_plus_one.leading_zeros()) as usize;
        // < 2^(low_bits - 1) <= 2^64
        let low_exponent: u64 = ((1u128 << low_bits) - word_plus_one - 1) as u64;
        let run: usize = mod_bits.saturating_sub(low_bits);

        let mut steps: Vec<u8> = Vec::new();
        let mut h: usize = run;
        while h > 1 {
            match [5usize, 3, 2].into_iter().find(|&k| h % k == 0) {
                Some(k) => {
                    steps.push(k as u8);
                    h /= k;
                }
                None => {
                    steps.push(1);
                    h -= 1;
                }
            }
        }
        steps.reverse();

        Self {
            low_bits,
            low_exponent,
            run,
            steps,
        }
    }

    /// Number of squarings and multiplications of one inversion.
    pub fn cost(&self) -> (usize, usize) {
        let tail_bits: usize = (u64::BITS - self.low_exponent.leading_zeros()) as usize;
        let mut sqr: usize = tail_bits.saturating_sub(1);
        let mut mul: usize = self.low_exponent.count_ones().saturating_sub(1) as usize;
        if self.run == 0 {
            return (sqr, mul);
        }
        let mut h: usize = 1;
        for &step in &self.steps {
            match step {
                1 => {
                    sqr += 1;
                    mul += 1;
                    h += 1;
                }
                k => {
                    sqr += h * (k as usize - 1);
                    mul += match k {
                        2 => 1,
                        3 => 2,
                        _ => 3,
                    };
                    h *= k as usize;
                }
            }
        }
        (sqr + self.low_bits, mul + 1)
    }
}

impl FieldShape {
    /// Assigns a^(p-2) to r, lazily reduced. Zero maps to zero.
    pub(crate) fn inv_lazy(&self, a: &FieldElement, r: &mut FieldElement) {
        let chain: &AdditionChain = &self.chain;

        // a^w
        let w: u64 = chain.low_exponent;
        let mut tail: FieldElement = *a;
        let top_bit: u32 = u64::BITS - 1 - w.leading_zeros();
        for i in (0..top_bit).rev() {
            self.sa_sqr_into_sa::<NONE>(&mut tail);
            if (w >> i) & 1 == 1 {
                self.sa_mul_sb_into_sb::<NONE>(a, &mut tail);
            }
        }

        if chain.run == 0 {
            *r = tail;
            return;
        }

        // acc = a^(2^h - 1)
        let mut acc: FieldElement = *a;
        let mut t: FieldElement = FieldElement::zero();
        let mut u: FieldElement = FieldElement::zero();
        let mut h: usize = 1;
        for &step in &chain.steps {
            match step {
                1 => {
                    self.sa_sqr_into_sa::<NONE>(&mut acc);
                    self.sa_mul_sb_into_sb::<NONE>(a, &mut acc);
                    h += 1;
                }
                2 => {
                    self.sa_sqr_n_into_sb::<NONE>(&acc, h, &mut t);
                    self.sa_mul_sb_into_sb::<NONE>(&t, &mut acc);
                    h *= 2;
                }
                3 => {
                    self.sa_sqr_n_into_sb::<NONE>(&acc, h, &mut t);
                    self.sa_mul_sb_into_sb::<NONE>(&acc, &mut t);
                    self.sa_sqr_n_into_sb::<NONE>(&t, h, &mut u);
                    self.sa_mul_sb_into_sb::<NONE>(&u, &mut acc);
                    h *= 3;
                }
                5 => {
                    self.sa_sqr_n_into_sb::<NONE>(&acc, h, &mut t);
                    self.sa_mul_sb_into_sb::<NONE>(&acc, &mut t);
                    self.sa_sqr_n_into_sb::<NONE>(&t, 2 * h, &mut u);
                    self.sa_mul_sb_into_sb::<NONE>(&t, &mut u);
                    self.sa_sqr_n_into_sb::<NONE>(&u, h, &mut t);
                    self.sa_mul_sb_into_sb::<NONE>(&t, &mut acc);
                    h *= 5;
                }
                _ => unreachable!("invalid addition chain step"),
            }
        }
        debug_assert_eq!(h, chain.run);

        self.sa_sqr_n_into_sa::<NONE>(chain.low_bits, &mut acc);
        self.sa_mul_sb_into_sc::<NONE>(&acc, &tail, r);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modulus::ONCE;

    #[test]
    fn chain_of_small_prime() {
        // p = 29, e = 27 = 0b11011
        let chain: AdditionChain = AdditionChain::new(5, 3);
        assert_eq!(chain.low_bits, 3);
        assert_eq!(chain.low_exponent, 3);
        assert_eq!(chain.run, 2);
        assert_eq!(chain.steps, vec![2]);
    }

    #[test]
    fn chain_reaches_run_length() {
        for (mod_bits, word) in [(129usize, 0x19u64), (193, 0x1f), (257, 0x5d), (64, 59), (512, 569)] {
            let chain: AdditionChain = AdditionChain::new(mod_bits, word);
            let h: usize = chain.steps.iter().fold(1, |h, &k| match k {
                1 => h + 1,
                k => h * k as usize,
            });
            assert_eq!(h, chain.run);
            assert_eq!(chain.run + chain.low_bits, mod_bits);
            let low: u128 = (1u128 << chain.low_bits) - word as u128 - 2;
            assert_eq!(chain.low_exponent as u128, low);
        }
    }

    #[test]
    fn chain_of_p128() {
        let chain: AdditionChain = AdditionChain::new(129, 0x19);
        // tail 0b101, run 124 built as 1 -2-> 2 -3-> 6 -5-> 30 -1-> 31 -2-> 62 -2-> 124
        assert_eq!(chain.steps, vec![2, 3, 5, 1, 2, 2]);
        assert_eq!(chain.cost(), (130, 11));
    }

    #[test]
    fn inverse_small_prime() {
        let shape: FieldShape = FieldShape::new(4, 3).unwrap();
        let mut r: FieldElement = FieldElement::zero();
        for x in 1u64..29 {
            shape.sa_inv_into_sb::<ONCE>(&FieldElement::from_word(x), &mut r);
            assert_eq!((r.0[0] * x) % 29, 1, "x = {x}");
        }
        shape.sa_inv_into_sb::<ONCE>(&FieldElement::zero(), &mut r);
        assert!(r.is_zero());
    }

    #[test]
    fn run_without_ones() {
        // p = 2^2 - 1 = 3, e = 1 is all tail
        let shape: FieldShape = FieldShape::new(1, 1).unwrap();
        assert_eq!(shape.chain.run, 0);
        let mut r: FieldElement = FieldElement::zero();
        shape.sa_inv_into_sb::<ONCE>(&FieldElement::from_word(2), &mut r);
        assert_eq!(r, FieldElement::from_word(2));
    }
}
