use crate::error::FieldError;
use crate::shape::FieldShape;
use num_bigint::BigUint;
use num_traits::One;

/// Largest word tried by default.
pub const DEFAULT_WORD_LIMIT: u64 = 1001;

/// Searches the primes `2^(bits+1) - word` for odd words in increasing order,
/// that is downward from `2^(bits+1)`.
///
/// Primality is decided by a caller supplied oracle. With the `rug` feature,
/// [is_probably_prime] provides a GMP backed one.
pub struct WordSearch {
    bits: usize,
    next_word: u64,
    word_limit: u64,
    top: BigUint,
}

impl WordSearch {
    pub fn new(bits: usize) -> Self {
        Self {
            bits,
            next_word: 1,
            word_limit: DEFAULT_WORD_LIMIT,
            top: BigUint::one() << (bits + 1),
        }
    }

    /// Sets the largest word that is tried.
    pub fn with_word_limit(mut self, word_limit: u64) -> Self {
        self.word_limit = word_limit;
        self
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Returns the candidate `2^(bits+1) - word`.
    pub fn candidate(&self, word: u64) -> BigUint {
        &self.top - word
    }

    /// Returns the next word whose candidate the oracle accepts, or None once
    /// the limit is exceeded or the words would no longer give a valid shape.
    pub fn next_word<F>(&mut self, is_prime: F) -> Option<u64>
    where
        F: Fn(&BigUint) -> bool,
    {
        while self.next_word <= self.word_limit {
            let word: u64 = self.next_word;
            if self.bits < 64 && word >> self.bits != 0 {
                return None;
            }
            match word.checked_add(2) {
                Some(next) => self.next_word = next,
                None => self.word_limit = 0,
            }
            if is_prime(&self.candidate(word)) {
                return Some(word);
            }
        }
        None
    }

    /// Returns up to k accepted words, in increasing order.
    pub fn next_words<F>(&mut self, k: usize, is_prime: F) -> Vec<u64>
    where
        F: Fn(&BigUint) -> bool,
    {
        let mut words: Vec<u64> = Vec::with_capacity(k);
        while words.len() < k {
            match self.next_word(&is_prime) {
                Some(word) => words.push(word),
                None => break,
            }
        }
        words
    }

    /// Returns the shape of the next accepted prime, if any.
    pub fn find<F>(&mut self, is_prime: F) -> Option<Result<FieldShape, FieldError>>
    where
        F: Fn(&BigUint) -> bool,
    {
        self.next_word(is_prime)
            .map(|word| FieldShape::new(self.bits, word))
    }
}

/// Miller-Rabin with 30 rounds through GMP.
#[cfg(feature = "rug")]
pub fn is_probably_prime(candidate: &BigUint) -> bool {
    use rug::Integer;
    use rug::integer::{IsPrime, Order};

    let n: Integer = Integer::from_digits(&candidate.to_u64_digits(), Order::Lsf);
    n.is_probably_prime(30) != IsPrime::No
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;

    fn trial_division(n: &BigUint) -> bool {
        let n: u64 = match n.to_u64() {
            Some(n) => n,
            None => panic!("candidate too large for trial division"),
        };
        n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn finds_largest_primes_first() {
        assert_eq!(WordSearch::new(4).next_word(trial_division), Some(1));
        assert_eq!(WordSearch::new(5).next_word(trial_division), Some(3));
        assert_eq!(WordSearch::new(7).next_word(trial_division), Some(5));
        assert_eq!(WordSearch::new(10).next_word(trial_division), Some(9));
    }

    #[test]
    fn successive_words() {
        // 31, 29, 23, 19, 17
        let words: Vec<u64> = WordSearch::new(4).next_words(8, trial_division);
        assert_eq!(words, vec![1, 3, 9, 13, 15]);
    }

    #[test]
    fn respects_limit() {
        // 2^8 - 1 = 3 * 5 * 17, 2^8 - 3 = 11 * 23, 2^8 - 5 = 251
        let mut search: WordSearch = WordSearch::new(7).with_word_limit(3);
        assert_eq!(search.next_word(trial_division), None);
        let shape: FieldShape = WordSearch::new(7).find(trial_division).unwrap().unwrap();
        assert_eq!(shape.prime_limbs(), &[251]);
    }

    #[cfg(feature = "rug")]
    #[test]
    fn recovers_parameter_sets() {
        for (bits, word) in [(63usize, 59u64), (127, 159), (128, 0x19), (192, 0x1f), (256, 0x5d), (511, 569)] {
            assert_eq!(WordSearch::new(bits).next_word(is_probably_prime), Some(word));
        }
    }
}
