pub mod inverse;
pub mod operations;
pub mod reduce;

use crate::element::FieldElement;

pub type REDUCEMOD = u8;

/// Leaves the result lazily reduced, in `[0, 2^mod_bits)`.
pub const NONE: REDUCEMOD = 0;
/// Brings the result to its canonical value in `[0, p)`.
pub const ONCE: REDUCEMOD = 1;

/// Field arithmetic on [FieldElement]s of a fixed shape.
///
/// Unless stated otherwise, operands must be lazily reduced (below
/// `2^mod_bits`), which every operation guarantees for its output. Operands
/// and outputs are plain values: an output may alias nothing, the `_into_sa`
/// and `_into_sb` variants cover the in-place cases.
pub trait FieldOperations {
    // Brings a value of arbitrary size (up to the limb count of the shape)
    // into the lazy range, then applies REDUCE.
    fn sa_reduce_into_sa<const REDUCE: REDUCEMOD>(&self, a: &mut FieldElement);

    // Assigns the reduction of a to b.
    fn sa_reduce_into_sb<const REDUCE: REDUCEMOD>(&self, a: &FieldElement, b: &mut FieldElement);

    // Assigns w to a.
    fn set_word(&self, w: u64, a: &mut FieldElement);

    // Assigns a to b.
    fn sa_copy_into_sb(&self, a: &FieldElement, b: &mut FieldElement);

    // Returns true if a = b mod p.
    fn sa_equal_sb(&self, a: &FieldElement, b: &FieldElement) -> bool;

    // Returns true if a = 0 mod p.
    fn sa_is_zero(&self, a: &FieldElement) -> bool;

    // Assigns a + b to c.
    fn sa_add_sb_into_sc<const REDUCE: REDUCEMOD>(
        &self,
        a: &FieldElement,
        b: &FieldElement,
        c: &mut FieldElement,
    );

    // Assigns a + b to b.
    fn sa_add_sb_into_sb<const REDUCE: REDUCEMOD>(&self, a: &FieldElement, b: &mut FieldElement);

    // Assigns a - b to c.
    fn sa_sub_sb_into_sc<const REDUCE: REDUCEMOD>(
        &self,
        a: &FieldElement,
        b: &FieldElement,
        c: &mut FieldElement,
    );

    // Assigns a - b to b.
    fn sa_sub_sb_into_sb<const REDUCE: REDUCEMOD>(&self, a: &FieldElement, b: &mut FieldElement);

    // Assigns a - b to a.
    fn sa_sub_sb_into_sa<const REDUCE: REDUCEMOD>(&self, b: &FieldElement, a: &mut FieldElement);

    // Assigns a * b to c.
    fn sa_mul_sb_into_sc<const REDUCE: REDUCEMOD>(
        &self,
        a: &FieldElement,
        b: &FieldElement,
        c: &mut FieldElement,
    );

    // Assigns a * b to b.
    fn sa_mul_sb_into_sb<const REDUCE: REDUCEMOD>(&self, a: &FieldElement, b: &mut FieldElement);

    // Assigns a^2 to b.
    fn sa_sqr_into_sb<const REDUCE: REDUCEMOD>(&self, a: &FieldElement, b: &mut FieldElement);

    // Assigns a^2 to a.
    fn sa_sqr_into_sa<const REDUCE: REDUCEMOD>(&self, a: &mut FieldElement);

    // Assigns a^(2^n) to b.
    fn sa_sqr_n_into_sb<const REDUCE: REDUCEMOD>(
        &self,
        a: &FieldElement,
        n: usize,
        b: &mut FieldElement,
    );

    // Assigns a^(2^n) to a.
    fn sa_sqr_n_into_sa<const REDUCE: REDUCEMOD>(&self, n: usize, a: &mut FieldElement);

    // Assigns a^-1 to b, or 0 if a = 0 mod p. Requires p prime.
    fn sa_inv_into_sb<const REDUCE: REDUCEMOD>(&self, a: &FieldElement, b: &mut FieldElement);

    // Assigns a^-1 to a, or 0 if a = 0 mod p. Requires p prime.
    fn sa_inv_into_sa<const REDUCE: REDUCEMOD>(&self, a: &mut FieldElement);
}
