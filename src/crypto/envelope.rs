//! Password-based authenticated encryption envelope.
//!
//! Wire layout: `[16-byte salt][Fernet token]`. The token is versioned
//! and self-describing (random IV, creation timestamp, ciphertext, HMAC
//! tag), so the salt is the only extra state the envelope has to carry.
//!
//! Nothing in the layout records that a blob is encrypted at all: the
//! caller must open with the same passphrase-presence it sealed with, or
//! the bytes are misinterpreted.

use crate::config::pbkdf2_params;
use crate::crypto::kdf::KeyDerivation;
use crate::error::{Error, Result};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use fernet::Fernet;

fn fernet_for_key(key: &[u8; pbkdf2_params::KEY_LENGTH]) -> Result<Fernet> {
    Fernet::new(&URL_SAFE.encode(key))
        .ok_or_else(|| Error::Unclassified("invalid encryption key".to_string()))
}

/// Encrypt a payload under a passphrase.
///
/// Draws a fresh random salt, derives the key, and returns the salt
/// followed by the authenticated token.
pub fn seal(payload: &[u8], passphrase: &str) -> Result<Vec<u8>> {
    let kdf = KeyDerivation::new();
    let fernet = fernet_for_key(&kdf.derive_key(passphrase))?;
    let token = fernet.encrypt(payload);

    let mut blob = Vec::with_capacity(pbkdf2_params::SALT_LENGTH + token.len());
    blob.extend_from_slice(kdf.salt());
    blob.extend_from_slice(token.as_bytes());
    Ok(blob)
}

/// Decrypt a blob produced by [`seal`] with the same passphrase.
///
/// Fails with [`Error::Authentication`] on a malformed blob, a tampered
/// token, or a wrong passphrase - the causes are indistinguishable.
pub fn open(blob: &[u8], passphrase: &str) -> Result<Vec<u8>> {
    if blob.len() < pbkdf2_params::SALT_LENGTH {
        return Err(Error::Authentication);
    }

    let (salt_bytes, token_bytes) = blob.split_at(pbkdf2_params::SALT_LENGTH);
    let mut salt = [0u8; pbkdf2_params::SALT_LENGTH];
    salt.copy_from_slice(salt_bytes);

    let kdf = KeyDerivation::from_salt(salt);
    let fernet = fernet_for_key(&kdf.derive_key(passphrase))?;

    let token = std::str::from_utf8(token_bytes).map_err(|_| Error::Authentication)?;
    fernet.decrypt(token).map_err(|_| Error::Authentication)
}
