//! Ledger history queries
//!
//! One physical row is written per movement; the `Received` view for the
//! counterparty is derived here by swapping perspective, not stored.

use super::models::{EntryKind, EntryStatus, LedgerEntry, PaymentMethod};
use sqlx::{PgPool, Row};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerQueryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Corrupt ledger row {entry_id}: {reason}")]
    CorruptRow { entry_id: i64, reason: String },
}

/// A ledger entry as seen by one account
#[derive(Debug, Clone, serde::Serialize)]
pub struct LedgerView {
    pub entry: LedgerEntry,
    /// Direction from the viewing account's perspective
    pub direction: EntryKind,
}

#[derive(Debug, serde::Serialize)]
pub struct HistoryPage {
    pub entries: Vec<LedgerView>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

pub struct LedgerQueries;

impl LedgerQueries {
    /// Fetch a single entry by id
    pub async fn get_entry(
        pool: &PgPool,
        entry_id: i64,
    ) -> Result<Option<LedgerEntry>, LedgerQueryError> {
        let row = sqlx::query(
            r#"
            SELECT entry_id, sender_id, receiver_id, amount, fee, kind,
                   payment_method, card_id, status, description, created_at
            FROM ledger_entries
            WHERE entry_id = $1
            "#,
        )
        .bind(entry_id)
        .fetch_optional(pool)
        .await?;

        row.map(|r| row_to_entry(&r)).transpose()
    }

    /// Paginated history for one account, newest first.
    ///
    /// `page` is 1-based; `limit` is clamped to 1..=100.
    pub async fn history(
        pool: &PgPool,
        account_id: i64,
        page: i64,
        limit: i64,
    ) -> Result<HistoryPage, LedgerQueryError> {
        let page = page.max(1);
        let limit = limit.clamp(1, 100);
        let offset = (page - 1) * limit;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM ledger_entries
            WHERE sender_id = $1 OR receiver_id = $1
            "#,
        )
        .bind(account_id)
        .fetch_one(pool)
        .await?;

        let rows = sqlx::query(
            r#"
            SELECT entry_id, sender_id, receiver_id, amount, fee, kind,
                   payment_method, card_id, status, description, created_at
            FROM ledger_entries
            WHERE sender_id = $1 OR receiver_id = $1
            ORDER BY created_at DESC, entry_id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(account_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let mut entries = Vec::with_capacity(rows.len());
        for r in rows {
            let entry = row_to_entry(&r)?;
            let direction = direction_for(&entry, account_id);
            entries.push(LedgerView { entry, direction });
        }

        Ok(HistoryPage {
            entries,
            total,
            page,
            limit,
        })
    }
}

/// Derive the viewing account's direction from the single stored row
fn direction_for(entry: &LedgerEntry, viewer_id: i64) -> EntryKind {
    if entry.kind == EntryKind::SelfCredit {
        EntryKind::SelfCredit
    } else if entry.sender_id == Some(viewer_id) {
        EntryKind::Sent
    } else {
        EntryKind::Received
    }
}

fn row_to_entry(r: &sqlx::postgres::PgRow) -> Result<LedgerEntry, LedgerQueryError> {
    let entry_id: i64 = r.get("entry_id");
    let kind = EntryKind::try_from(r.get::<i16, _>("kind")).map_err(|reason| {
        LedgerQueryError::CorruptRow { entry_id, reason }
    })?;
    let payment_method =
        PaymentMethod::try_from(r.get::<i16, _>("payment_method")).map_err(|reason| {
            LedgerQueryError::CorruptRow { entry_id, reason }
        })?;

    Ok(LedgerEntry {
        entry_id,
        sender_id: r.get("sender_id"),
        receiver_id: r.get("receiver_id"),
        amount: r.get("amount"),
        fee: r.get("fee"),
        kind,
        payment_method,
        card_id: r.get("card_id"),
        status: EntryStatus::from(r.get::<i16, _>("status")),
        description: r.get("description"),
        created_at: r.get("created_at"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(kind: EntryKind, sender: Option<i64>, receiver: i64) -> LedgerEntry {
        LedgerEntry {
            entry_id: 1,
            sender_id: sender,
            receiver_id: receiver,
            amount: 100,
            fee: 0,
            kind,
            payment_method: PaymentMethod::Balance,
            card_id: None,
            status: EntryStatus::Completed,
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_direction_sender_sees_sent() {
        let e = entry(EntryKind::Sent, Some(1), 2);
        assert_eq!(direction_for(&e, 1), EntryKind::Sent);
    }

    #[test]
    fn test_direction_receiver_sees_received() {
        let e = entry(EntryKind::Sent, Some(1), 2);
        assert_eq!(direction_for(&e, 2), EntryKind::Received);
    }

    #[test]
    fn test_direction_self_credit_stays_self() {
        let e = entry(EntryKind::SelfCredit, Some(3), 3);
        assert_eq!(direction_for(&e, 3), EntryKind::SelfCredit);
    }
}
