use field::FieldError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("invalid threshold: {parts} parts")]
    InvalidParts { parts: usize },

    #[error("no parameter set fits a secret of {len} bytes")]
    InvalidSecretLength { len: usize },

    #[error("insufficient shares: {parts} required, {got} given")]
    InsufficientShares { parts: usize, got: usize },

    #[error("two shares have the same evaluation point")]
    DuplicateEvaluationPoint,

    #[error("share has a zero evaluation point")]
    ZeroEvaluationPoint,

    #[error("failed to allocate scratch space for {count} elements")]
    AllocationFailure { count: usize },

    #[error("recovered value does not fit in {len} bytes")]
    SecretOverflow { len: usize },

    #[error("invalid share length: {len} bytes, expected {expected}")]
    InvalidShareLength { len: usize, expected: usize },

    #[error("every evaluation point has already been issued")]
    EvaluationPointsExhausted,
}
