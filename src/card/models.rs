//! Card data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Card brand, stored as its short display tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardBrand {
    Visa,
    MasterCard,
    Amex,
    Discover,
}

impl CardBrand {
    pub fn tag(&self) -> &'static str {
        match self {
            CardBrand::Visa => "VISA",
            CardBrand::MasterCard => "MC",
            CardBrand::Amex => "AMEX",
            CardBrand::Discover => "DISC",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "VISA" => Some(CardBrand::Visa),
            "MC" => Some(CardBrand::MasterCard),
            "AMEX" => Some(CardBrand::Amex),
            "DISC" => Some(CardBrand::Discover),
            _ => None,
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Caller-supplied card details. Serialized to JSON and encrypted before
/// storage; never persisted in the clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardInput {
    pub card_number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
    pub holder_name: String,
}

/// A stored card row. `card_token` is the encrypted payload from the cipher
/// collaborator; the raw number is not recoverable without it.
#[derive(Debug, Clone)]
pub struct Card {
    pub card_id: i64,
    pub account_id: i64,
    pub card_token: String,
    pub masked_number: String,
    pub brand: CardBrand,
    pub holder_name: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub is_active: bool,
    pub last_used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// What the vault hands back after storing a new card
#[derive(Debug, Clone, Serialize)]
pub struct StoredCard {
    pub card_id: i64,
    pub masked_number: String,
    pub brand: CardBrand,
}
