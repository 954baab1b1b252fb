use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("invalid field shape (bits = {bits}, word = {word:#x}): {reason}")]
    InvalidShape {
        bits: usize,
        word: u64,
        reason: &'static str,
    },

    #[error("encoding of {len} bytes exceeds the field width of {max} bytes")]
    LengthExceeded { len: usize, max: usize },

    #[error("{count} limbs exceed the maximum of {max}")]
    LimbCountExceeded { count: usize, max: usize },

    #[error("output buffer of {len} bytes is shorter than the field width of {min} bytes")]
    BufferTooSmall { len: usize, min: usize },
}
