//! Encryption collaborator seam
//!
//! The engine never handles raw card numbers outside the vault, and the
//! vault only sees ciphertext through this trait. The production
//! implementation (AES-256-GCM keyed from `CARD_ENCRYPTION_KEY`) lives with
//! the deployment, not in this crate.

use super::error::CardError;

pub trait CardCipher: Send + Sync {
    /// Encrypt a serialized card payload into an opaque storable token
    fn encrypt(&self, plaintext: &str) -> Result<String, CardError>;
}

/// Cipher double for tests. Produces a recognizable, NON-encrypted token.
pub struct MockCipher;

impl CardCipher for MockCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String, CardError> {
        Ok(format!("mock:{:x}", plaintext.len()))
    }
}
