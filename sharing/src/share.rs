use crate::error::ShareError;
use field::modulus::{FieldOperations, NONE};
use field::{FieldElement, FieldShape};

/// A point (x, y) of the sharing polynomial.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Share {
    pub x: FieldElement,
    pub y: FieldElement,
}

impl Share {
    /// Length of the encoding of a share of the given shape.
    pub fn encoded_len(shape: &FieldShape) -> usize {
        2 * shape.bytes()
    }

    /// Encodes the share as `x || y`, each big-endian on `shape.bytes()` bytes.
    pub fn encode(&self, shape: &FieldShape) -> Vec<u8> {
        let mut out: Vec<u8> = self.x.to_be_bytes(shape);
        out.extend_from_slice(&self.y.to_be_bytes(shape));
        out
    }

    /// Writes the encoding of the share into `out`, which must be exactly
    /// [Share::encoded_len] bytes long.
    pub fn encode_into(&self, shape: &FieldShape, out: &mut [u8]) -> Result<(), ShareError> {
        let expected: usize = Self::encoded_len(shape);
        if out.len() != expected {
            return Err(ShareError::InvalidShareLength {
                len: out.len(),
                expected,
            });
        }
        let (x, y) = out.split_at_mut(shape.bytes());
        self.x.write_be_bytes(shape, x)?;
        self.y.write_be_bytes(shape, y)?;
        Ok(())
    }

    /// Decodes `x || y`. Both coordinates are folded into the lazily reduced
    /// range, so any byte string of the right length gives a usable share.
    pub fn decode(shape: &FieldShape, bytes: &[u8]) -> Result<Self, ShareError> {
        let expected: usize = Self::encoded_len(shape);
        if bytes.len() != expected {
            return Err(ShareError::InvalidShareLength {
                len: bytes.len(),
                expected,
            });
        }
        let (x, y) = bytes.split_at(shape.bytes());
        let mut share: Share = Share {
            x: FieldElement::from_be_bytes(shape, x)?,
            y: FieldElement::from_be_bytes(shape, y)?,
        };
        shape.sa_reduce_into_sa::<NONE>(&mut share.x);
        shape.sa_reduce_into_sa::<NONE>(&mut share.y);
        Ok(share)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_x_then_y() {
        let shape: FieldShape = FieldShape::new(4, 3).unwrap();
        let share: Share = Share {
            x: FieldElement::from_word(3),
            y: FieldElement::from_word(13),
        };
        assert_eq!(share.encode(&shape), vec![3, 13]);
        assert_eq!(Share::decode(&shape, &[3, 13]).unwrap(), share);

        let mut out: [u8; 2] = [0; 2];
        share.encode_into(&shape, &mut out).unwrap();
        assert_eq!(out, [3, 13]);
    }

    #[test]
    fn rejects_wrong_lengths() {
        let shape: FieldShape = FieldShape::new(128, 0x19).unwrap();
        assert_eq!(
            Share::decode(&shape, &[0u8; 33]),
            Err(ShareError::InvalidShareLength { len: 33, expected: 34 })
        );
        let mut out: [u8; 35] = [0; 35];
        assert!(Share::default().encode_into(&shape, &mut out).is_err());
    }

    #[test]
    fn decode_folds_oversized_values() {
        // 0xff = 255 = 23 mod 29, folded below 32
        let shape: FieldShape = FieldShape::new(4, 3).unwrap();
        let share: Share = Share::decode(&shape, &[0xff, 0xff]).unwrap();
        assert!(shape.is_lazy(&share.x) && shape.is_lazy(&share.y));
        assert!(shape.sa_equal_sb(&share.x, &FieldElement::from_word(23)));
    }
}
