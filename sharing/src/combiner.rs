use crate::error::ShareError;
use crate::params::{ParameterSet, check_parts};
use crate::polynomial::join;
use crate::share::Share;
use field::{FieldElement, FieldShape};

/// Joining session: collects shares of a secret of known length until the
/// threshold is met, then recovers the secret bytes.
pub struct Combiner {
    shape: FieldShape,
    parts: usize,
    secret_len: usize,
    shares: Vec<Share>,
}

impl Combiner {
    pub fn new(secret_len: usize, parts: usize) -> Result<Self, ShareError> {
        check_parts(parts)?;
        let shape: FieldShape = ParameterSet::for_secret_len(secret_len)?.shape()?;
        Ok(Self {
            shape,
            parts,
            secret_len,
            shares: Vec::with_capacity(parts),
        })
    }

    pub fn shape(&self) -> &FieldShape {
        &self.shape
    }

    pub fn parts(&self) -> usize {
        self.parts
    }

    /// Number of shares collected so far.
    pub fn count(&self) -> usize {
        self.shares.len()
    }

    pub fn is_ready(&self) -> bool {
        self.shares.len() >= self.parts
    }

    /// Adds a share. Returns false, and drops the share, once `parts` shares
    /// have been collected.
    pub fn add(&mut self, share: Share) -> bool {
        if self.is_ready() {
            return false;
        }
        self.shares.push(share);
        true
    }

    /// Decodes and adds an encoded share.
    pub fn add_bytes(&mut self, bytes: &[u8]) -> Result<bool, ShareError> {
        let share: Share = Share::decode(&self.shape, bytes)?;
        Ok(self.add(share))
    }

    /// Forgets every collected share.
    pub fn reset(&mut self) {
        self.shares.clear();
    }

    /// Returns the secret, `secret_len` bytes long.
    ///
    /// Fails with [ShareError::SecretOverflow] if the interpolated value does
    /// not fit that length, which happens when the shares do not come from
    /// one split of a secret of this length.
    pub fn secret(&self) -> Result<Vec<u8>, ShareError> {
        let mut secret: FieldElement = FieldElement::zero();
        join(&self.shape, self.parts, &self.shares, &mut secret)?;

        let bytes: Vec<u8> = secret.to_be_bytes(&self.shape);
        let (head, tail) = bytes.split_at(bytes.len() - self.secret_len);
        if head.iter().any(|&b| b != 0) {
            return Err(ShareError::SecretOverflow {
                len: self.secret_len,
            });
        }
        Ok(tail.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_shares_past_threshold() {
        let mut combiner: Combiner = Combiner::new(16, 2).unwrap();
        assert!(combiner.add(Share::default()));
        assert!(!combiner.is_ready());
        assert!(combiner.add(Share::default()));
        assert!(!combiner.add(Share::default()));
        assert_eq!(combiner.count(), 2);
        combiner.reset();
        assert_eq!(combiner.count(), 0);
    }

    #[test]
    fn too_few_shares() {
        let mut combiner: Combiner = Combiner::new(24, 3).unwrap();
        assert_eq!(combiner.add_bytes(&[1u8; 50]), Ok(true));
        assert_eq!(
            combiner.secret(),
            Err(ShareError::InsufficientShares { parts: 3, got: 1 })
        );
        assert!(matches!(
            combiner.add_bytes(&[1u8; 49]),
            Err(ShareError::InvalidShareLength { len: 49, expected: 50 })
        ));
    }
}
