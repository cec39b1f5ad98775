use crate::card::CardError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FundingError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Card(#[from] CardError),

    #[error("Account not found: {0}")]
    AccountNotFound(i64),

    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("Amount exceeds the per-operation limit of {max} cents")]
    AmountExceedsLimit { max: i64 },

    #[error("Either card_id or card details must be provided")]
    CardRequired,

    #[error("Description too long: max {max} characters, got {actual}")]
    DescriptionTooLong { max: usize, actual: usize },

    #[error("Timed out waiting for a row lock")]
    LockTimeout,
}

impl FundingError {
    pub(crate) fn from_store(err: sqlx::Error) -> Self {
        if crate::db::is_lock_timeout(&err) {
            FundingError::LockTimeout
        } else {
            FundingError::Database(err)
        }
    }
}
