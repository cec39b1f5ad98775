//! Append-only ledger writes

use super::models::{EntryStatus, LedgerEntry, NewLedgerEntry};
use sqlx::{PgConnection, Row};

/// Appends ledger rows. Writes must run inside the same transaction as the
/// balance mutations they document so that either both land or neither does.
pub struct LedgerWriter;

impl LedgerWriter {
    /// Append one completed entry. The store assigns `entry_id` and
    /// `created_at`. There is no update or delete counterpart.
    pub async fn append(
        conn: &mut PgConnection,
        entry: NewLedgerEntry,
    ) -> Result<LedgerEntry, sqlx::Error> {
        let row = sqlx::query(
            r#"
            INSERT INTO ledger_entries
                (sender_id, receiver_id, amount, fee, kind, payment_method, card_id, status, description)
            VALUES
                ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING entry_id, created_at
            "#,
        )
        .bind(entry.sender_id)
        .bind(entry.receiver_id)
        .bind(entry.amount)
        .bind(entry.fee)
        .bind(i16::from(entry.kind))
        .bind(i16::from(entry.payment_method))
        .bind(entry.card_id)
        .bind(EntryStatus::Completed as i16)
        .bind(&entry.description)
        .fetch_one(conn)
        .await?;

        Ok(LedgerEntry {
            entry_id: row.get("entry_id"),
            sender_id: entry.sender_id,
            receiver_id: entry.receiver_id,
            amount: entry.amount,
            fee: entry.fee,
            kind: entry.kind,
            payment_method: entry.payment_method,
            card_id: entry.card_id,
            status: EntryStatus::Completed,
            description: entry.description,
            created_at: row.get("created_at"),
        })
    }
}
