//! Point ledger: signed movements on the Mom3ntum Points balance
//!
//! Earning is unconditional; spending is floored at zero and rejected when
//! the balance cannot cover it.

use super::EngineError;

/// Credit `amount` points to the balance
pub fn earn(points: u64, amount: u64) -> u64 {
    points.saturating_add(amount)
}

/// Debit `amount` points, rejecting rather than going negative
pub fn spend(points: u64, amount: u64) -> Result<u64, EngineError> {
    points
        .checked_sub(amount)
        .ok_or(EngineError::InsufficientPoints {
            needed: amount,
            available: points,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earn_adds() {
        assert_eq!(earn(100, 50), 150);
        assert_eq!(earn(0, 0), 0);
    }

    #[test]
    fn test_spend_within_balance() {
        assert_eq!(spend(100, 100).unwrap(), 0);
        assert_eq!(spend(100, 30).unwrap(), 70);
    }

    #[test]
    fn test_spend_beyond_balance_is_rejected() {
        let err = spend(100, 101).unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientPoints {
                needed: 101,
                available: 100
            }
        );
    }
}
