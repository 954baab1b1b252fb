//! Shamir `(t, n)` threshold secret sharing over the prime fields of the
//! `field` crate.
//!
//! The free functions [polynomial::split] and [polynomial::join] evaluate and
//! interpolate a polynomial over any [field::FieldShape]. [dealer::Dealer] and
//! [combiner::Combiner] wrap them into byte-level sessions that pick one of
//! the [params] sets from the secret length.

pub mod combiner;
pub mod dealer;
pub mod error;
pub mod params;
pub mod polynomial;
pub mod share;

pub use combiner::Combiner;
pub use dealer::Dealer;
pub use error::ShareError;
pub use params::{PARTS_MAX, ParameterSet};
pub use share::Share;
