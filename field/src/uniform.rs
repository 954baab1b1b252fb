use crate::element::FieldElement;
use crate::shape::FieldShape;
use rand_core::RngCore;
use sampling::source::Source;

impl FieldShape {
    /// Assigns a uniform element of [0, p) to a, by rejection on uniform
    /// values below 2^mod_bits.
    pub fn fill_uniform(&self, source: &mut Source, a: &mut FieldElement) {
        let n: usize = self.limbs;
        let top_mask: u64 = if self.top_shift == 0 {
            u64::MAX
        } else {
            self.top_mask
        };
        *a = FieldElement::zero();

        if n == 1 {
            a.0[0] = source.next_u64n(self.prime[0], top_mask);
            return;
        }

        loop {
            a.0[..n].iter_mut().for_each(|x| *x = source.next_u64());
            a.0[n - 1] &= top_mask;
            if self.is_canonical(a) {
                return;
            }
        }
    }

    /// Assigns a uniform element of [1, p) to a.
    pub fn fill_uniform_nonzero(&self, source: &mut Source, a: &mut FieldElement) {
        loop {
            self.fill_uniform(source, a);
            if !a.is_zero() {
                return;
            }
        }
    }
}
