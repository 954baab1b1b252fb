use crate::MAX_LIMBS;
use crate::element::FieldElement;
use crate::error::FieldError;
use crate::modulus::inverse::AdditionChain;
use num_bigint::BigUint;
use num_traits::Zero;

/// Above this many set bits, multiplication by `word` falls back to a
/// widening multiply.
const SHIFT_ADD_MAX_TERMS: usize = 4;

/// Multiplication of a limb by the constant `word`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordMul {
    /// `x * word` as a sum of `x << s` over the set bits `s` of `word`.
    ShiftAdd {
        shifts: [u32; SHIFT_ADD_MAX_TERMS],
        terms: usize,
    },
    /// `x * word` as a single 64x64 -> 128 multiply.
    Mul(u64),
}

impl WordMul {
    pub fn new(word: u64) -> Self {
        if word.count_ones() as usize > SHIFT_ADD_MAX_TERMS {
            return WordMul::Mul(word);
        }
        let mut shifts: [u32; SHIFT_ADD_MAX_TERMS] = [0; SHIFT_ADD_MAX_TERMS];
        let mut terms: usize = 0;
        (0..u64::BITS)
            .filter(|s| (word >> s) & 1 == 1)
            .for_each(|s| {
                shifts[terms] = s;
                terms += 1;
            });
        WordMul::ShiftAdd { shifts, terms }
    }

    /// Returns `x * word`.
    #[inline(always)]
    pub fn apply(&self, x: u64) -> u128 {
        match self {
            WordMul::ShiftAdd { shifts, terms } => shifts[..*terms]
                .iter()
                .fold(0u128, |acc, &s| acc + ((x as u128) << s)),
            WordMul::Mul(word) => x as u128 * *word as u128,
        }
    }
}

/// Parameters of the prime field `p = 2^(bits+1) - word` together with the
/// tables derived from them.
///
/// A shape is built once and shared immutably; it is `Send + Sync`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldShape {
    pub(crate) bits: usize,
    pub(crate) word: u64,
    pub(crate) mod_bits: usize,
    pub(crate) limbs: usize,
    pub(crate) bytes: usize,
    pub(crate) top_shift: u32,
    pub(crate) top_mask: u64,
    pub(crate) shift_complement: u32,
    pub(crate) top_width_one: bool,
    pub(crate) prime: [u64; MAX_LIMBS],
    pub(crate) two_prime: [u64; MAX_LIMBS + 1],
    pub(crate) word_mul: WordMul,
    pub(crate) chain: AdditionChain,
}

impl FieldShape {
    /// Returns the shape of `p = 2^(bits+1) - word`.
    ///
    /// `word` must be odd, nonzero and below `2^bits`, so that `p` is odd and
    /// exactly `bits + 1` bits wide. Primality of `p` is not checked: the
    /// arithmetic is correct for any such modulus but inversion is only
    /// meaningful when `p` is prime (see [crate::prime_generation]).
    pub fn new(bits: usize, word: u64) -> Result<Self, FieldError> {
        let invalid = |reason: &'static str| FieldError::InvalidShape { bits, word, reason };

        if bits == 0 {
            return Err(invalid("bits must be positive"));
        }
        if word == 0 {
            return Err(invalid("word must be nonzero"));
        }
        if word & 1 == 0 {
            return Err(invalid("word must be odd"));
        }
        if bits < 64 && word >> bits != 0 {
            return Err(invalid("word must be smaller than 2^bits"));
        }

        let mod_bits: usize = bits + 1;
        let limbs: usize = mod_bits.div_ceil(64);
        if limbs > MAX_LIMBS {
            return Err(invalid("modulus is wider than MAX_LIMBS limbs"));
        }

        let top_shift: u32 = (mod_bits % 64) as u32;
        let top_mask: u64 = if top_shift == 0 { 0 } else { (1u64 << top_shift) - 1 };

        // 2^mod_bits - 1, then minus (word - 1).
        let mut prime: [u64; MAX_LIMBS] = [0; MAX_LIMBS];
        prime[..limbs].fill(u64::MAX);
        if top_shift != 0 {
            prime[limbs - 1] = top_mask;
        }
        let mut borrow: u64 = word - 1;
        for limb in prime[..limbs].iter_mut() {
            let (d, b) = limb.overflowing_sub(borrow);
            *limb = d;
            borrow = b as u64;
        }

        let mut two_prime: [u64; MAX_LIMBS + 1] = [0; MAX_LIMBS + 1];
        let mut carry: u64 = 0;
        for (t, &q) in two_prime.iter_mut().zip(prime[..limbs].iter()) {
            *t = (q << 1) | carry;
            carry = q >> 63;
        }
        two_prime[limbs] = carry;

        Ok(Self {
            bits,
            word,
            mod_bits,
            limbs,
            bytes: mod_bits.div_ceil(8),
            top_shift,
            top_mask,
            shift_complement: 64 - top_shift,
            top_width_one: top_shift == 1,
            prime,
            two_prime,
            word_mul: WordMul::new(word),
            chain: AdditionChain::new(mod_bits, word),
        })
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    pub fn word(&self) -> u64 {
        self.word
    }

    /// Bit width of p, `bits + 1`.
    pub fn mod_bits(&self) -> usize {
        self.mod_bits
    }

    /// Number of 64-bit limbs of an element.
    pub fn limbs(&self) -> usize {
        self.limbs
    }

    /// Length of the big-endian encoding of an element.
    pub fn bytes(&self) -> usize {
        self.bytes
    }

    /// Number of used bits in the top limb, 0 if the top limb is full.
    pub fn top_shift(&self) -> u32 {
        self.top_shift
    }

    /// Mask of the used bits of the top limb, 0 if the top limb is full.
    pub fn top_mask(&self) -> u64 {
        self.top_mask
    }

    pub fn top_width_one(&self) -> bool {
        self.top_width_one
    }

    pub fn word_mul(&self) -> &WordMul {
        &self.word_mul
    }

    /// Limbs of p, least significant first.
    pub fn prime_limbs(&self) -> &[u64] {
        &self.prime[..self.limbs]
    }

    pub fn prime_biguint(&self) -> BigUint {
        self.prime_limbs()
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, &limb| (acc << 64u32) + limb)
    }

    /// Returns the element p - 1.
    pub fn prime_minus_one(&self) -> FieldElement {
        let mut a: FieldElement = FieldElement::zero();
        a.0[..self.limbs].copy_from_slice(self.prime_limbs());
        a.0[0] -= 1;
        a
    }

    /// Returns true if a is below 2^mod_bits and has no limbs past the shape.
    pub fn is_lazy(&self, a: &FieldElement) -> bool {
        let n: usize = self.limbs;
        let top_ok: bool = self.top_shift == 0 || a.0[n - 1] & !self.top_mask == 0;
        top_ok && a.0[n..].iter().all(|&l| l == 0)
    }

    /// Returns true if a is the canonical representative of its residue.
    pub fn is_canonical(&self, a: &FieldElement) -> bool {
        if a.0[self.limbs..].iter().any(|&l| l != 0) {
            return false;
        }
        for (&x, &q) in a.0[..self.limbs].iter().zip(self.prime_limbs()).rev() {
            if x != q {
                return x < q;
            }
        }
        false
    }
}
