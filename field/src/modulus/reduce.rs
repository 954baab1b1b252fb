use crate::element::FieldElement;
use crate::modulus::{NONE, ONCE, REDUCEMOD};
use crate::shape::FieldShape;
use crate::MAX_LIMBS;

/// Capacity of the wide scratch buffers: a double width product plus room
/// for the bits shifted out of it.
pub(crate) const WIDE: usize = 2 * MAX_LIMBS + 2;

impl FieldShape {
    /// Replaces every bit of `z` at or above 2^mod_bits by its weight mod p,
    /// using 2^mod_bits = word mod p: z = lo + hi * 2^mod_bits becomes
    /// lo + hi * word.
    ///
    /// `z` must have more limbs than the shape. Returns false, leaving `z`
    /// untouched, if there was nothing to fold.
    pub(crate) fn fold(&self, z: &mut [u64]) -> bool {
        let n: usize = self.limbs;
        let len: usize = z.len();
        debug_assert!(len > n && len <= WIDE);

        let mut hi: [u64; WIDE] = [0; WIDE];
        let hi_len: usize = if self.top_shift == 0 {
            hi[..len - n].copy_from_slice(&z[n..]);
            len - n
        } else {
            for k in 0..=len - n {
                let lo: u64 = z[n - 1 + k] >> self.top_shift;
                let up: u64 = if n + k < len {
                    z[n + k] << self.shift_complement
                } else {
                    0
                };
                hi[k] = lo | up;
            }
            len - n + 1
        };

        if hi[..hi_len].iter().all(|&h| h == 0) {
            return false;
        }

        if self.top_shift != 0 {
            z[n - 1] &= self.top_mask;
        }
        z[n..].fill(0);

        // lo + hi * word < 2^(64 * len) as long as word < 2^bits.
        let mut carry: u128 = 0;
        for (k, zk) in z.iter_mut().enumerate() {
            carry += *zk as u128;
            if k < hi_len {
                carry += self.word_mul.apply(hi[k]);
            }
            *zk = carry as u64;
            carry >>= 64;
        }
        debug_assert_eq!(carry, 0);

        true
    }

    /// Reduces the `limbs + 1` limb value `z` below 2^mod_bits and writes the
    /// result to r.
    pub(crate) fn reduce_small(&self, z: &mut [u64], r: &mut FieldElement) {
        debug_assert_eq!(z.len(), self.limbs + 1);
        while self.fold(z) {}
        r.0[..self.limbs].copy_from_slice(&z[..self.limbs]);
        r.0[self.limbs..].fill(0);
    }

    /// Reduces a column accumulator of `2 * limbs` entries below 2^mod_bits
    /// and writes the result to r. Column k carries weight 2^(64k) and may
    /// hold more than 64 bits.
    pub(crate) fn reduce_long(&self, cols: &[u128], r: &mut FieldElement) {
        let n: usize = self.limbs;
        debug_assert_eq!(cols.len(), 2 * n);

        let mut buf: [u64; WIDE] = [0; WIDE];
        let mut carry: u128 = 0;
        for (zk, &ck) in buf.iter_mut().zip(cols.iter()) {
            carry += ck;
            *zk = carry as u64;
            carry >>= 64;
        }
        debug_assert_eq!(carry, 0);

        let z: &mut [u64] = &mut buf[..(2 * n).max(n + 1)];

        // The high half, then the carry produced by folding it.
        self.fold(z);
        self.fold(z);
        // Only operands that were not lazily reduced get here.
        while z[n + 1..].iter().any(|&l| l != 0) {
            self.fold(z);
        }

        self.reduce_small(&mut z[..=n], r);
    }

    /// Assigns the canonical value of a to b. Requires a < 2p, which holds for
    /// any lazily reduced value. Runs in constant time.
    pub fn final_reduce_into_sb(&self, a: &FieldElement, b: &mut FieldElement) {
        debug_assert!(self.is_lazy(a));
        let n: usize = self.limbs;
        let mut d: [u64; MAX_LIMBS] = [0; MAX_LIMBS];
        let mut borrow: u64 = 0;
        for (di, (&x, &q)) in d.iter_mut().zip(a.0[..n].iter().zip(self.prime_limbs())) {
            let (t, b1) = x.overflowing_sub(q);
            let (t, b2) = t.overflowing_sub(borrow);
            *di = t;
            borrow = (b1 | b2) as u64;
        }
        // all ones if a >= p
        let mask: u64 = borrow.wrapping_sub(1);
        for (bi, (&di, &ai)) in b.0[..n].iter_mut().zip(d[..n].iter().zip(a.0[..n].iter())) {
            *bi = (di & mask) | (ai & !mask);
        }
        b.0[n..].fill(0);
    }

    /// Assigns the canonical value of a to a. Requires a < 2p.
    pub fn final_reduce_into_sa(&self, a: &mut FieldElement) {
        let t: FieldElement = *a;
        self.final_reduce_into_sb(&t, a);
    }

    #[inline(always)]
    pub(crate) fn reduce_assign<const REDUCE: REDUCEMOD>(&self, a: &mut FieldElement) {
        match REDUCE {
            NONE => {}
            ONCE => self.final_reduce_into_sa(a),
            _ => unreachable!("invalid REDUCE argument"),
        }
    }
}
