//! Configuration constants for the concealment engine.

/// End-of-payload delimiter: sixteen bits, `1111111111111110`.
pub const DELIMITER: u16 = 0b1111_1111_1111_1110;

/// Width of the delimiter in bits.
pub const DELIMITER_BITS: usize = 16;

/// Color samples per pixel (R, G, B).
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Suffix appended to the cover image's stem for conceal output.
pub const CONCEAL_SUFFIX: &str = "_concealed";

/// Suffix appended to the stego image's stem for reveal output.
pub const REVEAL_SUFFIX: &str = "_revealed";

/// Fallback extension when the payload's signature is not recognized.
pub const DEFAULT_EXTENSION: &str = "bin";

/// PBKDF2-HMAC-SHA256 parameters for key derivation.
pub mod pbkdf2_params {
    /// Iteration count.
    pub const ITERATIONS: u32 = 100_000;

    /// Derived key length in bytes (256 bits).
    pub const KEY_LENGTH: usize = 32;

    /// Salt length in bytes.
    pub const SALT_LENGTH: usize = 16;
}
