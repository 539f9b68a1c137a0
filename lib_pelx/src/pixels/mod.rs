pub mod builder;
pub mod channels;
pub mod stream;

use std::collections::TryReserveError;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::image::format::{Channels, Container, PaletteEntry, UnsupportedChannels};
use crate::image::validate::HeaderError;

pub use builder::{index_pixels, IndexError, StreamBuilder};
pub use stream::{StreamDecoder, Tag};

#[derive(Error, Debug)]
pub enum ExpandError {
    #[error("Invalid output channels")]
    UnsupportedChannels(#[from] UnsupportedChannels),
    #[error("Invalid header")]
    InvalidHeader(#[from] HeaderError),
    #[error("Palette count mismatch: header declares {declared}, {supplied} supplied")]
    PaletteCountMismatch { declared: u16, supplied: usize },
    #[error("Unexpected end of stream: tag {tag:#04x} at {position} needs {needed} bytes, {available} left")]
    TruncatedRecord {
        tag: u8,
        position: usize,
        needed: usize,
        available: usize,
    },
    #[error("Palette index {index} out of range for a palette of {len} entries")]
    PaletteIndexOutOfRange { index: u8, len: usize },
    #[error("Invalid tag {tag:#04x} at position {position}")]
    InvalidTag { tag: u8, position: usize },
    #[error("Size mismatch: expected {expected} bytes, but wrote {written}")]
    SizeMismatch { expected: usize, written: usize },
    #[error("Stream continues past the last pixel: {remaining} bytes left")]
    TrailingData { remaining: usize },
    #[error("Failed to allocate the pixel buffer")]
    AllocationFailed(#[from] TryReserveError),
}

/// Settings for turning a container into a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandOptions {
    pub output_channels: Channels,
    /// Reject palettes whose length differs from the header's palette count.
    pub check_palette_count: bool,
}

impl ExpandOptions {
    pub fn new(output_channels: u8) -> Result<Self, ExpandError> {
        Ok(Self {
            output_channels: Channels::try_from(output_channels)?,
            check_palette_count: false,
        })
    }

    pub fn strict(mut self) -> Self {
        self.check_palette_count = true;
        self
    }
}

/// Expands the pixel stream of `container` into a flat buffer of
/// `width * height * output_channels` bytes, reporting failures to the log.
pub fn expand(
    container: &Container,
    palette: &[PaletteEntry],
    options: &ExpandOptions,
) -> Result<Vec<u8>, ExpandError> {
    expand_with(container, palette, options, &LogSink)
}

pub fn expand_with(
    container: &Container,
    palette: &[PaletteEntry],
    options: &ExpandOptions,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<u8>, ExpandError> {
    let header = &container.header;
    header.validate().map_err(|e| {
        sink.report(&format!("Header validation failed: {}", e));
        e
    })?;

    if options.check_palette_count && palette.len() != usize::from(header.palette_count) {
        sink.report(&format!(
            "Palette count mismatch: header declares {}, {} supplied",
            header.palette_count,
            palette.len()
        ));
        return Err(ExpandError::PaletteCountMismatch {
            declared: header.palette_count,
            supplied: palette.len(),
        });
    }

    // Both counts were checked by validate().
    let decoder = StreamDecoder::new(
        Channels::try_from(header.true_channel_count)?,
        Channels::try_from(header.palette_channel_count)?,
        palette,
        options.output_channels,
    );
    debug!(
        "Expanding {}x{} image to {} channels",
        header.width,
        header.height,
        options.output_channels.count()
    );

    let pixels = decoder.decode(&container.body, header.pixel_count(), sink)?;
    info!("Expansion completed: {} bytes", pixels.len());
    Ok(pixels)
}
