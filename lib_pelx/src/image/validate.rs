use thiserror::Error;

use super::format::Header;
use crate::constants::MAGIC;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    #[error("Magic number mismatch: expected {expected:?}, got {found:?}")]
    MismatchedMagic { expected: [u8; 5], found: [u8; 5] },
    #[error("Invalid image size {width}x{height}: both dimensions must be non-zero")]
    InvalidSize { width: u16, height: u16 },
    #[error("Invalid true color channel count {0}: expected 3 or 4")]
    InvalidTrueChannels(u8),
    #[error("Invalid palette channel count {0}: expected 3 or 4")]
    InvalidPaletteChannels(u8),
    #[error("Invalid palette count: must be non-zero")]
    InvalidPaletteCount,
}

impl Header {
    /// Checks the header invariants and reports the first one violated.
    pub fn validate(&self) -> Result<(), HeaderError> {
        if self.magic != MAGIC {
            return Err(HeaderError::MismatchedMagic {
                expected: MAGIC,
                found: self.magic,
            });
        }
        if self.width == 0 || self.height == 0 {
            return Err(HeaderError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if !matches!(self.true_channel_count, 3 | 4) {
            return Err(HeaderError::InvalidTrueChannels(self.true_channel_count));
        }
        if !matches!(self.palette_channel_count, 3 | 4) {
            return Err(HeaderError::InvalidPaletteChannels(
                self.palette_channel_count,
            ));
        }
        if self.palette_count == 0 {
            return Err(HeaderError::InvalidPaletteCount);
        }
        Ok(())
    }
}
