//! Seedable randomness shared by the `field` and `sharing` crates.
//!
//! A [`source::Source`] wraps a ChaCha8 stream: seeded with zeros it gives
//! reproducible test vectors, seeded from [`source::new_seed`] it feeds the
//! coefficients and evaluation points of a real split.

pub mod source;
