//! Byte sequence to bit sequence codec with delimiter framing.
//!
//! Bits are represented as `0`/`1` byte values, most significant bit of
//! each payload byte first. `encode` appends the fixed 16-bit delimiter
//! once; `decode` expects a delimiter-stripped bit sequence.

use crate::config::{DELIMITER, DELIMITER_BITS};

/// Encode bytes into framed bits: each byte MSB-first, then the delimiter.
pub fn encode(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8 + DELIMITER_BITS);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    for shift in (0..DELIMITER_BITS).rev() {
        bits.push(((DELIMITER >> shift) & 1) as u8);
    }
    bits
}

/// Decode a delimiter-stripped bit sequence back into bytes.
///
/// A trailing partial byte (bit count not a multiple of 8) is silently
/// truncated. This is lossy by design: the embedder only ever produces
/// whole bytes, so a partial byte means the tail is not payload.
pub fn decode(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| (byte << 1) | bit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_appends_delimiter() {
        let bits = encode(b"");
        assert_eq!(bits.len(), DELIMITER_BITS);
        assert_eq!(
            bits,
            vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0]
        );
    }

    #[test]
    fn test_encode_msb_first() {
        let bits = encode(&[0b1010_0001]);
        assert_eq!(&bits[..8], &[1, 0, 1, 0, 0, 0, 0, 1]);
        assert_eq!(bits.len(), 8 + DELIMITER_BITS);
    }

    #[test]
    fn test_roundtrip() {
        let data = b"Hello, bitstream!";
        let bits = encode(data);
        let stripped = &bits[..bits.len() - DELIMITER_BITS];
        assert_eq!(decode(stripped), data.to_vec());
    }

    #[test]
    fn test_roundtrip_all_byte_values() {
        let data: Vec<u8> = (0..=255).collect();
        let bits = encode(&data);
        let stripped = &bits[..bits.len() - DELIMITER_BITS];
        assert_eq!(decode(stripped), data);
    }

    #[test]
    fn test_decode_truncates_partial_byte() {
        // 12 bits: one whole byte plus 4 stray bits.
        let bits = vec![0, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1];
        assert_eq!(decode(&bits), vec![0b0100_0001]);
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode(&[]).is_empty());
    }
}
