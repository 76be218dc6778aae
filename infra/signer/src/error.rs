//! # Signer Errors
//!
//! This module defines the [`SignerError`] enum used for reporting key
//! decoding and validation failures.

use std::borrow::Cow;

/// A specialized [`SignerError`] enum for signing-identity failures.
#[sgrate_derive::sgrate_error]
pub enum SignerError {
    /// The private key is not valid hexadecimal.
    #[error("Invalid hex in private key{}: {source}", format_context(.context))]
    Hex { source: hex::FromHexError, context: Option<Cow<'static, str>> },

    /// The decoded key material has the wrong shape.
    #[error("Invalid private key{}: {message}", format_context(.context))]
    InvalidKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal signer error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
