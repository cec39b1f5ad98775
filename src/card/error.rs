use thiserror::Error;

/// Validation errors for caller-supplied card details
#[derive(Debug, Error, PartialEq)]
pub enum CardValidationError {
    #[error("Card number must be between 13 and 19 digits, got {actual}")]
    InvalidNumberLength { actual: usize },

    #[error("Expiry month must be between 1 and 12")]
    InvalidExpiryMonth,

    #[error("Expiry year must be between 00 and 99")]
    InvalidExpiryYear,

    #[error("CVV must be 3 or 4 digits")]
    InvalidCvv,

    #[error("Cardholder name must be between {min} and {max} characters, got {actual}")]
    InvalidHolderName {
        min: usize,
        max: usize,
        actual: usize,
    },
}

#[derive(Debug, Error)]
pub enum CardError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Card validation failed: {0}")]
    Validation(#[from] CardValidationError),

    #[error("This card is already added to the account")]
    DuplicateCard,

    #[error("Card not found")]
    NotFound,

    #[error("Card is inactive")]
    Inactive,

    #[error("Card encryption failed: {0}")]
    Encryption(String),
}
