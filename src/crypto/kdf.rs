//! PBKDF2 key derivation for password-based encryption.

use crate::config::pbkdf2_params;
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;

/// Key derivation using PBKDF2-HMAC-SHA256.
#[derive(Debug, Clone)]
pub struct KeyDerivation {
    salt: [u8; pbkdf2_params::SALT_LENGTH],
}

impl KeyDerivation {
    /// Create a new KDF with a fresh random salt.
    ///
    /// The salt must come from a cryptographically secure source; a weak
    /// source degrades security invisibly to functional tests.
    pub fn new() -> Self {
        let mut salt = [0u8; pbkdf2_params::SALT_LENGTH];
        rand::thread_rng().fill_bytes(&mut salt);
        Self { salt }
    }

    /// Create a KDF from an existing salt (for decryption).
    pub fn from_salt(salt: [u8; pbkdf2_params::SALT_LENGTH]) -> Self {
        Self { salt }
    }

    /// Get the salt for storage.
    pub fn salt(&self) -> &[u8; pbkdf2_params::SALT_LENGTH] {
        &self.salt
    }

    /// Derive a 256-bit key from a passphrase.
    ///
    /// Uses PBKDF2-HMAC-SHA256 with 100,000 iterations.
    pub fn derive_key(&self, passphrase: &str) -> [u8; pbkdf2_params::KEY_LENGTH] {
        let mut key = [0u8; pbkdf2_params::KEY_LENGTH];
        pbkdf2_hmac::<Sha256>(
            passphrase.as_bytes(),
            &self.salt,
            pbkdf2_params::ITERATIONS,
            &mut key,
        );
        key
    }
}

impl Default for KeyDerivation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_derivation_deterministic() {
        let salt = [1u8; 16];
        let kdf = KeyDerivation::from_salt(salt);

        let key1 = kdf.derive_key("passphrase123");
        let key2 = kdf.derive_key("passphrase123");

        assert_eq!(key1, key2);
    }

    #[test]
    fn test_different_passphrases_different_keys() {
        let salt = [2u8; 16];
        let kdf = KeyDerivation::from_salt(salt);

        assert_ne!(kdf.derive_key("passphrase1"), kdf.derive_key("passphrase2"));
    }

    #[test]
    fn test_different_salts_different_keys() {
        let kdf1 = KeyDerivation::from_salt([1u8; 16]);
        let kdf2 = KeyDerivation::from_salt([2u8; 16]);

        assert_ne!(kdf1.derive_key("passphrase"), kdf2.derive_key("passphrase"));
    }

    #[test]
    fn test_new_generates_random_salt() {
        let kdf1 = KeyDerivation::new();
        let kdf2 = KeyDerivation::new();

        assert_ne!(kdf1.salt(), kdf2.salt());
    }
}
