//! Embedding capacity validation.
//!
//! Runs strictly before any pixel mutation so a failed conceal never
//! leaves partial output.

use crate::config::CHANNELS_PER_PIXEL;
use crate::error::{Error, Result};

/// Number of embedding slots (LSBs) in a cover image of the given size.
pub fn available_bits(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS_PER_PIXEL
}

/// Check that `bit_count` framed bits fit in a `width` x `height` cover.
pub fn check(bit_count: usize, width: u32, height: u32) -> Result<()> {
    let available = available_bits(width, height);
    if bit_count > available {
        return Err(Error::Capacity {
            needed: bit_count,
            available,
        });
    }
    Ok(())
}
