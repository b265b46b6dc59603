//! LSB embedding and extraction over RGB pixel samples.
//!
//! Traversal is fixed: row-major over pixels, channels in R, G, B order,
//! giving one flat ordered sample sequence (the raw `RgbImage` buffer).
//! The order is identical for every image and provides no secrecy;
//! secrecy comes entirely from the optional encryption layer.

use crate::config::{DELIMITER, DELIMITER_BITS};
use crate::error::{Error, Result};
use image::{ImageFormat, RgbImage};
use std::path::Path;

/// Load an image and normalize it to 8-bit RGB.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    Ok(image::open(path)?.to_rgb8())
}

/// Save an image as PNG. Output is always lossless regardless of the
/// cover's original format.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Write one framed bit into the least-significant bit of each sample,
/// in traversal order. Samples past the frame are left unmodified.
///
/// Capacity must have been validated first; extra bits are ignored.
pub fn embed(image: &mut RgbImage, bits: &[u8]) {
    for (sample, &bit) in image.iter_mut().zip(bits) {
        *sample = (*sample & 0xFE) | bit;
    }
}

/// Read sample LSBs in traversal order until the accumulated 16-bit tail
/// equals the delimiter, and return the bits with the delimiter removed.
///
/// Fails with [`Error::NoHiddenData`] if the delimiter never appears.
pub fn extract(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bits = Vec::new();
    let mut tail: u16 = 0;

    for &sample in image.as_raw() {
        let bit = sample & 1;
        bits.push(bit);
        tail = (tail << 1) | bit as u16;

        if bits.len() >= DELIMITER_BITS && tail == DELIMITER {
            bits.truncate(bits.len() - DELIMITER_BITS);
            return Ok(bits);
        }
    }

    Err(Error::NoHiddenData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitstream;
    use image::{ImageBuffer, Rgb};

    fn test_image(width: u32, height: u32) -> RgbImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([
                ((x * 17) % 256) as u8,
                ((y * 23) % 256) as u8,
                (((x + y) * 31) % 256) as u8,
            ])
        })
    }

    #[test]
    fn test_embed_extract_roundtrip() {
        let mut image = test_image(64, 64);
        let payload = b"carrier roundtrip payload";

        let bits = bitstream::encode(payload);
        embed(&mut image, &bits);

        let extracted = extract(&image).unwrap();
        assert_eq!(bitstream::decode(&extracted), payload.to_vec());
    }

    #[test]
    fn test_embed_leaves_tail_untouched() {
        let original = test_image(32, 32);
        let mut image = original.clone();

        let bits = bitstream::encode(b"x");
        embed(&mut image, &bits);

        // Everything past the frame is byte-identical to the original.
        assert_eq!(
            &image.as_raw()[bits.len()..],
            &original.as_raw()[bits.len()..]
        );
    }

    #[test]
    fn test_extract_without_delimiter_fails() {
        // All-zero samples: LSBs are all zero, the delimiter never forms.
        let image = RgbImage::new(16, 16);
        assert!(matches!(extract(&image), Err(Error::NoHiddenData)));
    }

    #[test]
    fn test_extract_empty_payload() {
        let mut image = test_image(8, 8);
        let bits = bitstream::encode(b"");
        embed(&mut image, &bits);

        let extracted = extract(&image).unwrap();
        assert!(extracted.is_empty());
    }

    #[test]
    fn test_extract_stops_at_first_delimiter() {
        // A payload containing the delimiter pattern truncates early on
        // extraction. Documented limitation of delimiter framing.
        let mut image = test_image(32, 32);
        let payload = [0xFF, 0xFE, 0xAA, 0xBB];
        let bits = bitstream::encode(&payload);
        embed(&mut image, &bits);

        let extracted = extract(&image).unwrap();
        assert_eq!(bitstream::decode(&extracted), Vec::<u8>::new());
    }
}
