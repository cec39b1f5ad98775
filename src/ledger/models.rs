//! Ledger entry models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on caller-supplied descriptions. Longer input is rejected
/// rather than truncated.
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// How a ledger entry classifies relative to `sender_id == receiver_id`.
///
/// Only `Sent` (transfers) and `SelfCredit` (funding) are physically stored;
/// `Received` is derived per-viewer by the history queries from the same row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Sent = 1,
    Received = 2,
    #[serde(rename = "self")]
    SelfCredit = 3,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Sent => write!(f, "sent"),
            EntryKind::Received => write!(f, "received"),
            EntryKind::SelfCredit => write!(f, "self"),
        }
    }
}

impl TryFrom<i16> for EntryKind {
    type Error = String;

    fn try_from(val: i16) -> Result<Self, Self::Error> {
        match val {
            1 => Ok(EntryKind::Sent),
            2 => Ok(EntryKind::Received),
            3 => Ok(EntryKind::SelfCredit),
            _ => Err(format!("Invalid entry kind: {}", val)),
        }
    }
}

impl From<EntryKind> for i16 {
    fn from(val: EntryKind) -> i16 {
        val as i16
    }
}

/// How the funds entered or left the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Balance = 1,
    Card = 2,
    #[serde(rename = "external_rail")]
    ExternalRail = 3,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Balance => write!(f, "balance"),
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::ExternalRail => write!(f, "external_rail"),
        }
    }
}

impl TryFrom<i16> for PaymentMethod {
    type Error = String;

    fn try_from(val: i16) -> Result<Self, Self::Error> {
        match val {
            1 => Ok(PaymentMethod::Balance),
            2 => Ok(PaymentMethod::Card),
            3 => Ok(PaymentMethod::ExternalRail),
            _ => Err(format!("Invalid payment method: {}", val)),
        }
    }
}

impl From<PaymentMethod> for i16 {
    fn from(val: PaymentMethod) -> i16 {
        val as i16
    }
}

/// Entry status. The engines only ever persist `Completed` rows; a failed
/// attempt leaves no trace in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum EntryStatus {
    Failed = 0,
    Completed = 1,
}

impl From<i16> for EntryStatus {
    fn from(v: i16) -> Self {
        match v {
            0 => EntryStatus::Failed,
            _ => EntryStatus::Completed,
        }
    }
}

/// An immutable ledger row as stored
#[derive(Debug, Clone, Serialize)]
pub struct LedgerEntry {
    pub entry_id: i64,
    pub sender_id: Option<i64>,
    pub receiver_id: i64,
    /// Principal moved, cents. Never includes the fee.
    pub amount: i64,
    /// Informational fee, cents. Already reflected wherever it was charged.
    pub fee: i64,
    pub kind: EntryKind,
    pub payment_method: PaymentMethod,
    pub card_id: Option<i64>,
    pub status: EntryStatus,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Fields the engines supply; `entry_id` and `created_at` are store-assigned.
#[derive(Debug, Clone)]
pub struct NewLedgerEntry {
    pub sender_id: Option<i64>,
    pub receiver_id: i64,
    pub amount: i64,
    pub fee: i64,
    pub kind: EntryKind,
    pub payment_method: PaymentMethod,
    pub card_id: Option<i64>,
    pub description: String,
}

impl NewLedgerEntry {
    /// A peer-to-peer transfer record, written from the sender's perspective
    pub fn transfer(sender_id: i64, receiver_id: i64, amount: i64, description: String) -> Self {
        Self {
            sender_id: Some(sender_id),
            receiver_id,
            amount,
            fee: 0,
            kind: EntryKind::Sent,
            payment_method: PaymentMethod::Balance,
            card_id: None,
            description,
        }
    }

    /// A self-credit (funding) record
    pub fn funding(
        account_id: i64,
        amount: i64,
        fee: i64,
        payment_method: PaymentMethod,
        card_id: Option<i64>,
        description: String,
    ) -> Self {
        Self {
            sender_id: Some(account_id),
            receiver_id: account_id,
            amount,
            fee,
            kind: EntryKind::SelfCredit,
            payment_method,
            card_id,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_i16_round_trip() {
        for kind in [EntryKind::Sent, EntryKind::Received, EntryKind::SelfCredit] {
            let raw: i16 = kind.into();
            assert_eq!(EntryKind::try_from(raw).unwrap(), kind);
        }
        assert!(EntryKind::try_from(0).is_err());
        assert!(EntryKind::try_from(99).is_err());
    }

    #[test]
    fn test_payment_method_i16_round_trip() {
        for method in [
            PaymentMethod::Balance,
            PaymentMethod::Card,
            PaymentMethod::ExternalRail,
        ] {
            let raw: i16 = method.into();
            assert_eq!(PaymentMethod::try_from(raw).unwrap(), method);
        }
        assert!(PaymentMethod::try_from(0).is_err());
    }

    #[test]
    fn test_entry_status_from_i16() {
        assert_eq!(EntryStatus::from(0), EntryStatus::Failed);
        assert_eq!(EntryStatus::from(1), EntryStatus::Completed);
    }

    #[test]
    fn test_funding_entry_is_self() {
        let entry = NewLedgerEntry::funding(
            7,
            500,
            7,
            PaymentMethod::Card,
            Some(3),
            "top up".to_string(),
        );
        assert_eq!(entry.sender_id, Some(7));
        assert_eq!(entry.receiver_id, 7);
        assert_eq!(entry.kind, EntryKind::SelfCredit);
        assert_eq!(entry.card_id, Some(3));
    }
}
