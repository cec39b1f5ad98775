//! Peer-to-peer transfer execution

use super::error::TransferError;
use crate::account::{AccountRepository, Database};
use crate::config::StoreConfig;
use crate::ledger::models::MAX_DESCRIPTION_LEN;
use crate::ledger::{LedgerEntry, LedgerWriter, NewLedgerEntry};
use std::sync::Arc;

pub struct TransferService {
    db: Arc<Database>,
    lock_timeout_ms: u64,
}

impl TransferService {
    pub fn new(db: Arc<Database>, store: &StoreConfig) -> Self {
        Self {
            db,
            lock_timeout_ms: store.lock_timeout_ms,
        }
    }

    /// Move `amount` cents from `actor_id` to `receiver_id`.
    ///
    /// Both account rows are locked in ascending id order regardless of
    /// sender/receiver role, so two reciprocal transfers can never deadlock:
    /// whichever transaction wins the first lock also acquires the second.
    /// The balance check runs after both locks are held; an unlocked read
    /// could be stale.
    ///
    /// Any failure after `begin` rolls the whole transaction back: the
    /// `Transaction` guard rolls back on drop, which covers early returns,
    /// caller cancellation and panic unwinds alike. No partial balance
    /// change is ever visible and failed attempts write no ledger row.
    pub async fn transfer(
        &self,
        actor_id: i64,
        receiver_id: i64,
        amount: i64,
        description: &str,
    ) -> Result<LedgerEntry, TransferError> {
        validate_request(actor_id, receiver_id, amount, description)?;

        let mut tx = self.db.pool().begin().await?;
        sqlx::query(&format!(
            "SET LOCAL lock_timeout = '{}ms'",
            self.lock_timeout_ms
        ))
        .execute(&mut *tx)
        .await?;

        // Fixed, deterministic lock order: ascending account id
        let (low_id, high_id) = if actor_id < receiver_id {
            (actor_id, receiver_id)
        } else {
            (receiver_id, actor_id)
        };

        let low = AccountRepository::lock_for_update(&mut *tx, low_id)
            .await
            .map_err(TransferError::from_store)?
            .ok_or(TransferError::AccountNotFound(low_id))?;
        let high = AccountRepository::lock_for_update(&mut *tx, high_id)
            .await
            .map_err(TransferError::from_store)?
            .ok_or(TransferError::AccountNotFound(high_id))?;

        let (mut sender, mut receiver) = if low.account_id == actor_id {
            (low, high)
        } else {
            (high, low)
        };

        if !sender.can_cover(amount) {
            return Err(TransferError::InsufficientFunds);
        }

        sender.balance -= amount;
        receiver.balance += amount;

        AccountRepository::save_balance(&mut *tx, &sender).await?;
        AccountRepository::save_balance(&mut *tx, &receiver).await?;

        let entry = LedgerWriter::append(
            &mut *tx,
            NewLedgerEntry::transfer(actor_id, receiver_id, amount, description.to_string()),
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            entry_id = entry.entry_id,
            sender_id = actor_id,
            receiver_id,
            amount,
            "Transfer completed"
        );

        Ok(entry)
    }
}

fn validate_request(
    actor_id: i64,
    receiver_id: i64,
    amount: i64,
    description: &str,
) -> Result<(), TransferError> {
    if amount <= 0 {
        return Err(TransferError::InvalidAmount);
    }
    if receiver_id == actor_id {
        return Err(TransferError::SelfTransferRejected);
    }
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(TransferError::DescriptionTooLong {
            max: MAX_DESCRIPTION_LEN,
            actual: len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_amount() {
        assert!(matches!(
            validate_request(1, 2, 0, "lunch"),
            Err(TransferError::InvalidAmount)
        ));
        assert!(matches!(
            validate_request(1, 2, -50, "lunch"),
            Err(TransferError::InvalidAmount)
        ));
    }

    #[test]
    fn test_rejects_self_transfer() {
        assert!(matches!(
            validate_request(7, 7, 10, ""),
            Err(TransferError::SelfTransferRejected)
        ));
    }

    #[test]
    fn test_rejects_oversized_description() {
        let long = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        assert!(matches!(
            validate_request(1, 2, 10, &long),
            Err(TransferError::DescriptionTooLong { actual: 256, .. })
        ));
    }

    #[test]
    fn test_accepts_valid_request() {
        assert!(validate_request(1, 2, 10, "lunch").is_ok());
        let max = "x".repeat(MAX_DESCRIPTION_LEN);
        assert!(validate_request(2, 1, i64::MAX, &max).is_ok());
    }
}
