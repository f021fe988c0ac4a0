use rand::Rng;
use serde::{Deserialize, Serialize};

use clinicdesk_core::{DomainError, DomainResult, ValueObject};

/// Four-digit display number printed on the patient's slip.
///
/// Carries no identity: it is what the waiting room screen shows, not how
/// the record is addressed. Numbers are drawn at registration time and may
/// collide across days; the queue tie-breaks on the record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenNumber(u32);

impl TokenNumber {
    pub const MIN: u32 = 1000;
    pub const MAX: u32 = 9999;

    /// Validating constructor for the registration path.
    ///
    /// Decoding stored documents goes through serde and stays lenient; only
    /// newly issued numbers are held to the four-digit range.
    pub fn new(value: u32) -> DomainResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::validation(format!(
                "token number must be four digits, got {value}"
            )))
        }
    }

    /// Draw a fresh number in `1000..=9999`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(Self::MIN..=Self::MAX))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl ValueObject for TokenNumber {}

impl core::fmt::Display for TokenNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_numbers_stay_in_the_four_digit_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let n = TokenNumber::random(&mut rng);
            assert!((TokenNumber::MIN..=TokenNumber::MAX).contains(&n.value()));
        }
    }

    #[test]
    fn constructor_rejects_out_of_range_values() {
        assert!(TokenNumber::new(999).is_err());
        assert!(TokenNumber::new(10_000).is_err());
        assert_eq!(TokenNumber::new(1234).unwrap().value(), 1234);
    }
}
