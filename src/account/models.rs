//! Data models for wallet accounts

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A wallet account row. `balance` is cents and never goes negative as the
/// result of an engine operation.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Account {
    pub account_id: i64,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Whether this account can cover a debit of `amount` cents.
    pub fn can_cover(&self, amount: i64) -> bool {
        self.balance >= amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_cover() {
        let acc = Account {
            account_id: 1,
            balance: 50,
            created_at: Utc::now(),
        };
        assert!(acc.can_cover(50));
        assert!(acc.can_cover(0));
        assert!(!acc.can_cover(51));
    }
}
