//! Ledger - immutable transaction record
//!
//! Every completed money movement is recorded as exactly one append-only row
//! in `ledger_entries`, written in the same store transaction as the balance
//! mutations it documents. Failed attempts are never written.

pub mod models;
pub mod queries;
pub mod writer;

pub use models::{EntryKind, EntryStatus, LedgerEntry, NewLedgerEntry, PaymentMethod};
pub use queries::{HistoryPage, LedgerQueries, LedgerView};
pub use writer::LedgerWriter;
