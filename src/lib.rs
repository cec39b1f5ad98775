//! payledger - Wallet balance-transfer and ledger-write engine
//!
//! Moves money between accounts (or injects money from an external card)
//! atomically, with row-level locking and an append-only audit record.
//!
//! # Modules
//!
//! - [`money`] - Integer-cent amounts and deterministic fee arithmetic
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`account`] - Balance rows with transaction-scoped row locking
//! - [`ledger`] - Immutable transaction records and history queries
//! - [`card`] - Card collaborator (validation, masking, encrypted storage)
//! - [`transfer`] - Peer-to-peer transfer engine
//! - [`funding`] - Self-credit (top-up) engine
//!
//! Concurrency correctness is delegated entirely to the store's row locks
//! plus one rule the engines enforce: multiple rows are always locked in
//! ascending account-id order.

pub mod account;
pub mod card;
pub mod config;
pub mod db;
pub mod funding;
pub mod ledger;
pub mod logging;
pub mod money;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{Account, AccountRepository};
pub use card::{CardCipher, CardInput, CardVault, PgCardVault};
pub use config::AppConfig;
pub use db::Database;
pub use funding::{FundingMethod, FundingRequest, FundingResult, FundingService};
pub use ledger::{EntryKind, LedgerEntry, LedgerQueries, LedgerWriter, PaymentMethod};
pub use money::{CARD_FEE_RATE, FeeRate};
pub use transfer::TransferService;
