//! Wallet store schema initialization

use anyhow::Result;
use sqlx::PgPool;

/// Initialize the wallet schema. Idempotent: every statement is
/// `IF NOT EXISTS`, so this is safe to run at every startup.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    tracing::info!("Initializing wallet schema...");

    sqlx::query(CREATE_ACCOUNTS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create accounts table: {}", e))?;

    sqlx::query(CREATE_CARDS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create cards table: {}", e))?;

    sqlx::query(CREATE_LEDGER_TABLE)
        .execute(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create ledger_entries table: {}", e))?;

    for stmt in CREATE_LEDGER_INDEXES {
        sqlx::query(stmt)
            .execute(pool)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create ledger index: {}", e))?;
    }

    tracing::info!("Wallet schema initialized successfully");
    Ok(())
}

const CREATE_ACCOUNTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    account_id  BIGSERIAL PRIMARY KEY,
    balance     BIGINT NOT NULL DEFAULT 0 CHECK (balance >= 0),
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_CARDS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS cards (
    card_id       BIGSERIAL PRIMARY KEY,
    account_id    BIGINT NOT NULL REFERENCES accounts(account_id),
    card_token    TEXT NOT NULL,
    masked_number VARCHAR(32) NOT NULL,
    card_brand    VARCHAR(10) NOT NULL,
    holder_name   VARCHAR(50) NOT NULL,
    expiry_month  VARCHAR(2) NOT NULL,
    expiry_year   VARCHAR(2) NOT NULL,
    is_active     BOOLEAN NOT NULL DEFAULT TRUE,
    last_used_at  TIMESTAMPTZ,
    created_at    TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

// sender_id is nullable for pure-funding credits that carry no distinct
// debit leg; rows written by this engine store sender_id = receiver_id.
const CREATE_LEDGER_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS ledger_entries (
    entry_id       BIGSERIAL PRIMARY KEY,
    sender_id      BIGINT REFERENCES accounts(account_id),
    receiver_id    BIGINT NOT NULL REFERENCES accounts(account_id),
    amount         BIGINT NOT NULL CHECK (amount > 0),
    fee            BIGINT NOT NULL DEFAULT 0 CHECK (fee >= 0),
    kind           SMALLINT NOT NULL,
    payment_method SMALLINT NOT NULL,
    card_id        BIGINT,
    status         SMALLINT NOT NULL DEFAULT 1,
    description    TEXT NOT NULL DEFAULT '',
    created_at     TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_LEDGER_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_ledger_sender ON ledger_entries (sender_id)",
    "CREATE INDEX IF NOT EXISTS idx_ledger_receiver ON ledger_entries (receiver_id)",
    "CREATE INDEX IF NOT EXISTS idx_ledger_created ON ledger_entries (created_at)",
    "CREATE INDEX IF NOT EXISTS idx_cards_account ON cards (account_id)",
];
