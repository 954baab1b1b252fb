use crate::error::ShareError;
use field::{FieldError, FieldShape};

/// Largest threshold accepted by the byte-level sessions.
pub const PARTS_MAX: usize = 16;

/// A named prime `2^(bits+1) - word`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterSet {
    pub bits: usize,
    pub word: u64,
}

/// p = 2^129 - 25, for secrets of up to 16 bytes.
pub const P128: ParameterSet = ParameterSet { bits: 128, word: 0x19 };
/// p = 2^193 - 31, for secrets of up to 24 bytes.
pub const P192: ParameterSet = ParameterSet { bits: 192, word: 0x1f };
/// p = 2^257 - 93, for secrets of up to 32 bytes.
pub const P256: ParameterSet = ParameterSet { bits: 256, word: 0x5d };

/// Parameter sets in increasing size.
pub const PARAMETER_SETS: [ParameterSet; 3] = [P128, P192, P256];

impl ParameterSet {
    /// Returns the smallest set whose `bits` hold a secret of `len` bytes.
    pub fn for_secret_len(len: usize) -> Result<Self, ShareError> {
        if len == 0 {
            return Err(ShareError::InvalidSecretLength { len });
        }
        PARAMETER_SETS
            .into_iter()
            .find(|set| set.bits >= 8 * len)
            .ok_or(ShareError::InvalidSecretLength { len })
    }

    pub fn shape(&self) -> Result<FieldShape, FieldError> {
        FieldShape::new(self.bits, self.word)
    }

    /// Largest secret length, in bytes, served by this set.
    pub fn max_secret_len(&self) -> usize {
        self.bits / 8
    }
}

/// Checks a threshold for the byte-level sessions.
pub(crate) fn check_parts(parts: usize) -> Result<(), ShareError> {
    if !(2..=PARTS_MAX).contains(&parts) {
        return Err(ShareError::InvalidParts { parts });
    }
    Ok(())
}
