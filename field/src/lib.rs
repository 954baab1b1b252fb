//! Arithmetic modulo primes of the form `p = 2^(bits+1) - word`, where
//! `word` is a small odd constant.
//!
//! A [`FieldShape`] fixes `bits` and `word` and precomputes everything the
//! operations need. Elements are fixed-size limb arrays ([`FieldElement`]),
//! least significant limb first, and the operations of
//! [`modulus::FieldOperations`] never allocate.
//!
//! Results are kept *lazily reduced*: any value below `2^(bits+1)` is a valid
//! representative of its residue. The `REDUCE` const parameter of each
//! operation selects whether the result is left lazy ([`modulus::NONE`]) or
//! brought to its canonical value in `[0, p)` ([`modulus::ONCE`]).

pub mod element;
pub mod error;
pub mod modulus;
pub mod prime_generation;
pub mod shape;
pub mod uniform;

pub use element::FieldElement;
pub use error::FieldError;
pub use shape::FieldShape;

/// Maximum number of 64-bit limbs of a field element, i.e. `bits + 1 <= 512`.
pub const MAX_LIMBS: usize = 8;
