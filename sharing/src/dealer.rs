use crate::error::ShareError;
use crate::params::{ParameterSet, check_parts};
use crate::polynomial::split;
use crate::share::Share;
use field::{FieldElement, FieldShape};
use rand_core::RngCore;
use sampling::source::Source;
use std::collections::HashSet;

/// Splitting session for one secret: draws a random polynomial whose constant
/// term is the secret and hands out one share per call to [Dealer::share].
///
/// The non-constant coefficients are uniform in `[0, p)`. Evaluation points
/// are drawn with the byte length of the secret, so they stay below
/// `2^(8 * len) <= 2^bits < p` and need no reduction.
pub struct Dealer {
    shape: FieldShape,
    parts: usize,
    secret_len: usize,
    coeffs: Vec<FieldElement>,
    issued: HashSet<FieldElement>,
    source: Source,
}

impl Dealer {
    pub fn new(secret: &[u8], parts: usize, mut source: Source) -> Result<Self, ShareError> {
        check_parts(parts)?;
        let shape: FieldShape = ParameterSet::for_secret_len(secret.len())?.shape()?;

        let mut coeffs: Vec<FieldElement> = Vec::with_capacity(parts);
        coeffs.push(FieldElement::from_be_bytes(&shape, secret)?);
        for _ in 1..parts {
            let mut a: FieldElement = FieldElement::zero();
            shape.fill_uniform(&mut source, &mut a);
            coeffs.push(a);
        }

        Ok(Self {
            shape,
            parts,
            secret_len: secret.len(),
            coeffs,
            issued: HashSet::new(),
            source,
        })
    }

    pub fn shape(&self) -> &FieldShape {
        &self.shape
    }

    pub fn parts(&self) -> usize {
        self.parts
    }

    pub fn secret_len(&self) -> usize {
        self.secret_len
    }

    /// Number of shares handed out so far.
    pub fn issued(&self) -> usize {
        self.issued.len()
    }

    /// Returns a share at a fresh random nonzero evaluation point.
    pub fn share(&mut self) -> Result<Share, ShareError> {
        // 2^(8 * len) - 1 nonzero points
        let available: u64 = if self.secret_len < 8 {
            (1u64 << (8 * self.secret_len)) - 1
        } else {
            u64::MAX
        };
        if self.issued.len() as u64 >= available {
            return Err(ShareError::EvaluationPointsExhausted);
        }

        let mut buf: Vec<u8> = vec![0u8; self.secret_len];
        let x: FieldElement = loop {
            self.source.fill_bytes(&mut buf);
            let x: FieldElement = FieldElement::from_be_bytes(&self.shape, &buf)?;
            if !x.is_zero() && !self.issued.contains(&x) {
                break x;
            }
        };

        let mut y: FieldElement = FieldElement::zero();
        split(&self.shape, self.parts, &self.coeffs, &x, &mut y)?;
        self.issued.insert(x);
        Ok(Share { x, y })
    }

    /// Returns `count` shares.
    pub fn shares(&mut self, count: usize) -> Result<Vec<Share>, ShareError> {
        (0..count).map(|_| self.share()).collect()
    }

    /// Returns the encoding of a fresh share.
    pub fn share_bytes(&mut self) -> Result<Vec<u8>, ShareError> {
        let share: Share = self.share()?;
        Ok(share.encode(&self.shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_distinct_nonzero_points() {
        let mut dealer: Dealer = Dealer::new(&[0x2a], 3, Source::new([0u8; 32])).unwrap();
        let shares: Vec<Share> = dealer.shares(255).unwrap();
        assert_eq!(dealer.issued(), 255);
        for (i, s) in shares.iter().enumerate() {
            assert!(!s.x.is_zero());
            assert!(shares[..i].iter().all(|t| t.x != s.x));
        }
        assert_eq!(dealer.share(), Err(ShareError::EvaluationPointsExhausted));
    }

    #[test]
    fn coefficients_span_the_field() {
        // A one byte secret still gets coefficients drawn below p = 2^129 - 25.
        let dealer: Dealer = Dealer::new(&[0x2a], 16, Source::new([5u8; 32])).unwrap();
        assert_eq!(dealer.coeffs[0], FieldElement::from_word(0x2a));
        assert!(dealer.coeffs[1..].iter().all(|a| dealer.shape.is_canonical(a)));
        assert!(dealer.coeffs[1..].iter().any(|a| a.0[1] != 0 || a.0[2] != 0));
    }

    #[test]
    fn rejects_bad_arguments() {
        let source = || Source::new([0u8; 32]);
        assert!(matches!(
            Dealer::new(&[1u8; 16], 1, source()),
            Err(ShareError::InvalidParts { parts: 1 })
        ));
        assert!(matches!(
            Dealer::new(&[1u8; 16], 17, source()),
            Err(ShareError::InvalidParts { parts: 17 })
        ));
        assert!(matches!(
            Dealer::new(&[1u8; 33], 2, source()),
            Err(ShareError::InvalidSecretLength { len: 33 })
        ));
    }
}
