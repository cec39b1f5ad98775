//! Funding engine
//!
//! Self-credit (top-up) of a single account, either directly or through a
//! stored payment card with a deterministic processing fee.

pub mod error;
pub mod service;

pub use error::FundingError;
pub use service::{FundingMethod, FundingRequest, FundingResult, FundingService};
