//! Account store
//!
//! Read/write access to wallet balances. Balance mutations only happen
//! through [`AccountRepository::save_balance`] while the row lock from
//! [`AccountRepository::lock_for_update`] is held inside the same
//! transaction.

pub mod models;
pub mod repository;

pub use models::Account;
pub use repository::AccountRepository;

// Re-export Database from top-level db module
pub use crate::db::Database;
