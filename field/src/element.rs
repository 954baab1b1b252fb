use crate::MAX_LIMBS;
use crate::error::FieldError;
use crate::shape::FieldShape;

/// An element of the field of some [FieldShape], stored as 64-bit limbs,
/// least significant first. Limbs at and above `shape.limbs()` are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldElement(pub [u64; MAX_LIMBS]);

impl FieldElement {
    pub const fn zero() -> Self {
        Self([0; MAX_LIMBS])
    }

    pub const fn one() -> Self {
        Self::from_word(1)
    }

    pub const fn from_word(w: u64) -> Self {
        let mut a: [u64; MAX_LIMBS] = [0; MAX_LIMBS];
        a[0] = w;
        Self(a)
    }

    /// Returns the element with the given limbs, least significant first.
    pub fn from_limbs(limbs: &[u64]) -> Result<Self, FieldError> {
        if limbs.len() > MAX_LIMBS {
            return Err(FieldError::LimbCountExceeded {
                count: limbs.len(),
                max: MAX_LIMBS,
            });
        }
        let mut a: Self = Self::zero();
        a.0[..limbs.len()].copy_from_slice(limbs);
        Ok(a)
    }

    /// Returns the limbs of a, up to the limb count of the shape.
    pub fn limbs<'a>(&'a self, shape: &FieldShape) -> &'a [u64] {
        &self.0[..shape.limbs()]
    }

    /// Returns true if every limb is zero. A lazily reduced element can
    /// represent zero as p, so canonicalise first when that matters.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&l| l == 0)
    }

    /// Decodes a big-endian byte string of at most `shape.bytes()` bytes.
    /// Shorter inputs are implicitly zero-padded on the left.
    ///
    /// The decoded value is not reduced: it may lie anywhere below
    /// `2^(8 * shape.bytes())`. Use `sa_reduce_into_sa` before feeding a
    /// value of untrusted origin to the arithmetic.
    pub fn from_be_bytes(shape: &FieldShape, bytes: &[u8]) -> Result<Self, FieldError> {
        if bytes.len() > shape.bytes() {
            return Err(FieldError::LengthExceeded {
                len: bytes.len(),
                max: shape.bytes(),
            });
        }
        let mut a: Self = Self::zero();
        bytes
            .iter()
            .rev()
            .enumerate()
            .for_each(|(j, &b)| a.0[j >> 3] |= (b as u64) << ((j & 7) << 3));
        Ok(a)
    }

    /// Writes a as big-endian bytes into `out`, zero-padding the leading bytes
    /// past `shape.bytes()`.
    pub fn write_be_bytes(&self, shape: &FieldShape, out: &mut [u8]) -> Result<(), FieldError> {
        if out.len() < shape.bytes() {
            return Err(FieldError::BufferTooSmall {
                len: out.len(),
                min: shape.bytes(),
            });
        }
        let width: usize = shape.limbs() << 3;
        out.iter_mut().rev().enumerate().for_each(|(j, o)| {
            *o = if j < width {
                (self.0[j >> 3] >> ((j & 7) << 3)) as u8
            } else {
                0
            }
        });
        Ok(())
    }

    /// Returns the `shape.bytes()` long big-endian encoding of a.
    pub fn to_be_bytes(&self, shape: &FieldShape) -> Vec<u8> {
        let mut out: Vec<u8> = vec![0u8; shape.bytes()];
        let width: usize = shape.limbs() << 3;
        out.iter_mut().rev().enumerate().for_each(|(j, o)| {
            if j < width {
                *o = (self.0[j >> 3] >> ((j & 7) << 3)) as u8
            }
        });
        out
    }
}
