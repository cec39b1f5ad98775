//! Transfer engine
//!
//! Peer-to-peer balance movement between two distinct accounts: validate,
//! lock both rows in a fixed order, mutate, write one ledger row, commit.

pub mod error;
pub mod service;

pub use error::TransferError;
pub use service::TransferService;
