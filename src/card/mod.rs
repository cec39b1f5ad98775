//! Card collaborator
//!
//! Validates, masks and stores payment cards, and answers ownership/active
//! lookups for the funding engine. Raw card numbers never leave this module:
//! they are serialized and handed to the [`CardCipher`] collaborator, and
//! only the opaque token plus display metadata is persisted.

pub mod cipher;
pub mod error;
pub mod models;
pub mod validation;
pub mod vault;

pub use cipher::{CardCipher, MockCipher};
pub use error::{CardError, CardValidationError};
pub use models::{Card, CardBrand, CardInput, StoredCard};
pub use vault::{CardVault, PgCardVault};
