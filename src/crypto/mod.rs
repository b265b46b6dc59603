//! Cryptographic operations for the concealment engine.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 password-based key derivation
//! - A Fernet authenticated-encryption envelope (`salt || token`)

mod envelope;
mod kdf;

pub use envelope::{open, seal};
pub use kdf::KeyDerivation;
