//! Funding (top-up) execution

use super::error::FundingError;
use crate::account::{AccountRepository, Database};
use crate::card::{CardInput, CardVault};
use crate::config::{FundingConfig, StoreConfig};
use crate::ledger::models::MAX_DESCRIPTION_LEN;
use crate::ledger::{LedgerEntry, LedgerWriter, NewLedgerEntry, PaymentMethod};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How the top-up is funded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingMethod {
    DirectBalance,
    Card,
}

#[derive(Debug, Clone)]
pub struct FundingRequest {
    pub amount: i64,
    pub method: FundingMethod,
    /// Existing stored card (Card method)
    pub card_id: Option<i64>,
    /// New card details (Card method); stored through the vault first
    pub card_details: Option<CardInput>,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct FundingResult {
    pub new_balance: i64,
    /// Informational processing fee; the full requested amount was credited
    pub fee: i64,
    pub entry: LedgerEntry,
}

pub struct FundingService {
    db: Arc<Database>,
    vault: Arc<dyn CardVault>,
    funding: FundingConfig,
    lock_timeout_ms: u64,
}

impl FundingService {
    pub fn new(
        db: Arc<Database>,
        vault: Arc<dyn CardVault>,
        funding: FundingConfig,
        store: &StoreConfig,
    ) -> Self {
        Self {
            db,
            vault,
            funding,
            lock_timeout_ms: store.lock_timeout_ms,
        }
    }

    /// Credit `req.amount` cents to the actor's own balance.
    ///
    /// The card fee is computed with the configured rational rate and
    /// recorded on the ledger row, but the FULL requested amount lands in
    /// the balance. The fee is merchant-style bookkeeping, not a deduction.
    ///
    /// Card resolution happens before the store transaction opens; a
    /// validation failure there leaves balances and the ledger untouched.
    /// Only one account participates, so there is no lock-ordering concern.
    pub async fn fund(
        &self,
        actor_id: i64,
        req: FundingRequest,
    ) -> Result<FundingResult, FundingError> {
        validate_request(&req, self.funding.max_amount)?;

        let (payment_method, card_id, fee) = match req.method {
            FundingMethod::DirectBalance => (PaymentMethod::Balance, None, 0),
            FundingMethod::Card => {
                let card_id = match (req.card_id, req.card_details) {
                    (Some(card_id), _) => self.vault.lookup(card_id, actor_id).await?.card_id,
                    (None, Some(details)) => {
                        self.vault.validate_and_store(actor_id, details).await?.card_id
                    }
                    (None, None) => return Err(FundingError::CardRequired),
                };
                let fee = self.funding.card_fee_rate.fee(req.amount);
                (PaymentMethod::Card, Some(card_id), fee)
            }
        };

        let description = match req.method {
            FundingMethod::DirectBalance => format!("Balance added: {}", req.description),
            FundingMethod::Card => format!("Added money via card: {}", req.description),
        };

        let mut tx = self.db.pool().begin().await?;
        sqlx::query(&format!(
            "SET LOCAL lock_timeout = '{}ms'",
            self.lock_timeout_ms
        ))
        .execute(&mut *tx)
        .await?;

        let mut account = AccountRepository::lock_for_update(&mut *tx, actor_id)
            .await
            .map_err(FundingError::from_store)?
            .ok_or(FundingError::AccountNotFound(actor_id))?;

        account.balance += req.amount;
        AccountRepository::save_balance(&mut *tx, &account).await?;

        let entry = LedgerWriter::append(
            &mut *tx,
            NewLedgerEntry::funding(
                actor_id,
                req.amount,
                fee,
                payment_method,
                card_id,
                description,
            ),
        )
        .await?;

        tx.commit().await?;

        // Non-critical bookkeeping. Runs after commit: a failed statement
        // inside the still-open transaction would abort it and roll back
        // the funding.
        if let Some(card_id) = card_id {
            if let Err(e) = self.vault.touch_last_used(card_id).await {
                tracing::warn!(card_id, error = %e, "Failed to update card last-used marker");
            }
        }

        tracing::info!(
            entry_id = entry.entry_id,
            account_id = actor_id,
            amount = req.amount,
            fee,
            method = ?req.method,
            "Funding completed"
        );

        Ok(FundingResult {
            new_balance: account.balance,
            fee,
            entry,
        })
    }
}

fn validate_request(req: &FundingRequest, max_amount: i64) -> Result<(), FundingError> {
    if req.amount <= 0 {
        return Err(FundingError::InvalidAmount);
    }
    if req.amount > max_amount {
        return Err(FundingError::AmountExceedsLimit { max: max_amount });
    }
    if req.method == FundingMethod::Card && req.card_id.is_none() && req.card_details.is_none() {
        return Err(FundingError::CardRequired);
    }
    let len = req.description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(FundingError::DescriptionTooLong {
            max: MAX_DESCRIPTION_LEN,
            actual: len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direct(amount: i64) -> FundingRequest {
        FundingRequest {
            amount,
            method: FundingMethod::DirectBalance,
            card_id: None,
            card_details: None,
            description: "pocket money".to_string(),
        }
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        assert!(matches!(
            validate_request(&direct(0), 100_000),
            Err(FundingError::InvalidAmount)
        ));
        assert!(matches!(
            validate_request(&direct(-5), 100_000),
            Err(FundingError::InvalidAmount)
        ));
    }

    #[test]
    fn test_rejects_amount_over_limit() {
        assert!(matches!(
            validate_request(&direct(100_001), 100_000),
            Err(FundingError::AmountExceedsLimit { max: 100_000 })
        ));
        assert!(validate_request(&direct(100_000), 100_000).is_ok());
    }

    #[test]
    fn test_card_method_requires_a_card() {
        let req = FundingRequest {
            amount: 500,
            method: FundingMethod::Card,
            card_id: None,
            card_details: None,
            description: String::new(),
        };
        assert!(matches!(
            validate_request(&req, 100_000),
            Err(FundingError::CardRequired)
        ));

        let with_id = FundingRequest {
            card_id: Some(3),
            ..req
        };
        assert!(validate_request(&with_id, 100_000).is_ok());
    }

    #[test]
    fn test_rejects_oversized_description() {
        let mut req = direct(500);
        req.description = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        assert!(matches!(
            validate_request(&req, 100_000),
            Err(FundingError::DescriptionTooLong { .. })
        ));
    }
}
