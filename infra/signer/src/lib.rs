//! # Signer
//!
//! A signing identity built from hex-encoded private key material.
//!
//! The [`Signer`] owns an ed25519 keypair decoded from a 64-character hex
//! seed. Its [`identity`](Signer::identity) (the hex-encoded public key) is
//! what the remote network uses to scope ownership queries, and
//! [`sign`](Signer::sign) produces detached signatures over request payloads.
//!
//! Raw seed material is zeroized as soon as the keypair is constructed.
//!
//! ## Example
//!
//! ```rust
//! use sgrate_signer::Signer;
//!
//! let signer = Signer::from_hex(&"7f".repeat(32)).unwrap();
//! assert_eq!(signer.identity().len(), 64);
//! ```

mod error;

pub use crate::error::{SignerError, SignerErrorExt};

use ed25519_dalek::{Signer as _, SigningKey, VerifyingKey};
use zeroize::Zeroize;

/// Length in bytes of the raw ed25519 seed expected by [`Signer::from_hex`].
pub const SEED_LENGTH: usize = 32;

/// A signing identity wrapping an ed25519 keypair.
pub struct Signer {
    key: SigningKey,
    identity: String,
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never expose key material through Debug output.
        f.debug_struct("Signer").field("identity", &self.identity).finish_non_exhaustive()
    }
}

impl Signer {
    /// Builds a [`Signer`] from a hex-encoded 32-byte private key seed.
    ///
    /// A leading `0x` prefix is accepted and stripped.
    ///
    /// # Errors
    /// * [`SignerError::Hex`] if the string is not valid hexadecimal.
    /// * [`SignerError::InvalidKey`] if the decoded seed is not exactly
    ///   [`SEED_LENGTH`] bytes.
    pub fn from_hex(private_key: &str) -> Result<Self, SignerError> {
        let trimmed = private_key.trim().trim_start_matches("0x");
        let mut decoded = hex::decode(trimmed).context("Decoding private key")?;

        if decoded.len() != SEED_LENGTH {
            decoded.zeroize();
            return Err(SignerError::InvalidKey {
                message: format!("expected {SEED_LENGTH} bytes, got {}", trimmed.len() / 2).into(),
                context: Some("Decoding private key".into()),
            });
        }

        let mut seed = [0u8; SEED_LENGTH];
        seed.copy_from_slice(&decoded);
        decoded.zeroize();

        let key = SigningKey::from_bytes(&seed);
        seed.zeroize();

        let identity = hex::encode(key.verifying_key().to_bytes());
        Ok(Self { key, identity })
    }

    /// The hex-encoded public key identifying this signer on the network.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// The verifying half of the keypair.
    #[must_use]
    pub fn verifying_key(&self) -> VerifyingKey {
        self.key.verifying_key()
    }

    /// Signs a message, returning the detached 64-byte signature.
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.key.sign(message).to_bytes()
    }
}
