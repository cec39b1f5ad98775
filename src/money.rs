//! Monetary amounts and fee arithmetic
//!
//! All amounts are `i64` in the smallest currency unit (cents). Fee rates are
//! rationals and fees are computed with integer arithmetic only, so identical
//! inputs always produce identical fees on every platform.

use serde::{Deserialize, Serialize};

/// Card funding fee: 14/1000 = 1.4%
pub const CARD_FEE_RATE: FeeRate = FeeRate::new(14, 1000);

/// A fee rate expressed as a rational `numer / denom`.
///
/// `1.4%` is `FeeRate::new(14, 1000)`, never `0.014`; floating point does
/// not appear in fee math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRate {
    pub numer: i64,
    pub denom: i64,
}

impl FeeRate {
    pub const fn new(numer: i64, denom: i64) -> Self {
        Self { numer, denom }
    }

    /// Compute `floor(amount * numer / denom)`.
    ///
    /// Uses an i128 intermediate to prevent overflow. Negative amounts are
    /// rejected upstream by the engines; this saturates them to zero so a
    /// fee can never be negative.
    #[inline]
    pub fn fee(&self, amount: i64) -> i64 {
        if amount <= 0 || self.numer == 0 {
            return 0;
        }
        let fee = amount as i128 * self.numer as i128 / self.denom as i128;
        fee as i64
    }
}

/// Format a cent amount as a decimal string, e.g. `12345` -> `"123.45"`.
pub fn format_cents(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_fee_basic() {
        // 10000 cents * 1.4% = 140 cents, every invocation
        assert_eq!(CARD_FEE_RATE.fee(10_000), 140);
        assert_eq!(CARD_FEE_RATE.fee(10_000), 140);
    }

    #[test]
    fn test_fee_floors_toward_zero() {
        // 99 * 14 / 1000 = 1.386 -> 1
        assert_eq!(CARD_FEE_RATE.fee(99), 1);
        // 50 * 14 / 1000 = 0.7 -> 0
        assert_eq!(CARD_FEE_RATE.fee(50), 0);
        assert_eq!(CARD_FEE_RATE.fee(1), 0);
    }

    #[test]
    fn test_fee_zero_cases() {
        assert_eq!(CARD_FEE_RATE.fee(0), 0);
        assert_eq!(FeeRate::new(0, 1000).fee(100_000), 0);
        // Negative input never yields a negative fee
        assert_eq!(CARD_FEE_RATE.fee(-10_000), 0);
    }

    #[test]
    fn test_no_overflow() {
        // Amount near i64::MAX must not overflow the intermediate product
        let large = i64::MAX / 2;
        let fee = CARD_FEE_RATE.fee(large);
        assert_eq!(fee, (large as i128 * 14 / 1000) as i64);
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(12345), "123.45");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-150), "-1.50");
    }
}
