use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Account not found: {0}")]
    AccountNotFound(i64),

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Cannot transfer to yourself")]
    SelfTransferRejected,

    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("Description too long: max {max} characters, got {actual}")]
    DescriptionTooLong { max: usize, actual: usize },

    #[error("Timed out waiting for a row lock")]
    LockTimeout,
}

impl TransferError {
    /// Map store errors, surfacing a bounded lock wait as its own condition
    pub(crate) fn from_store(err: sqlx::Error) -> Self {
        if crate::db::is_lock_timeout(&err) {
            TransferError::LockTimeout
        } else {
            TransferError::Database(err)
        }
    }
}
