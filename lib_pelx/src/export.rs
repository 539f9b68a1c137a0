use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use ::image::codecs::png::PngEncoder;
use ::image::error::{ParameterError, ParameterErrorKind};
use ::image::{ExtendedColorType, ImageEncoder, ImageError};
use log::{debug, error, info};
use thiserror::Error;

use crate::image::format::{Channels, Container, Header, PaletteEntry};
use crate::image::{decode, ContainerError};
use crate::pixels::{expand, ExpandError, ExpandOptions};

/// Coarse classification shared by every error the crate returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Io,
    Memory,
    Format,
    HeaderInvalid,
    Channel,
    PaletteIndexOutOfRange,
    PaletteCountMismatch,
}

impl ContainerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::InvalidHeader(_)
            | Self::HeaderSizeOutOfRange { .. }
            | Self::TruncatedBody { .. } => ErrorKind::Format,
            Self::BodyTooLarge(_) | Self::AllocationFailed(_) => ErrorKind::Memory,
        }
    }
}

impl ExpandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedChannels(_) => ErrorKind::Channel,
            Self::InvalidHeader(_) => ErrorKind::HeaderInvalid,
            Self::PaletteCountMismatch { .. } => ErrorKind::PaletteCountMismatch,
            Self::TruncatedRecord { .. } => ErrorKind::Io,
            Self::PaletteIndexOutOfRange { .. } => ErrorKind::PaletteIndexOutOfRange,
            Self::InvalidTag { .. } | Self::SizeMismatch { .. } | Self::TrailingData { .. } => {
                ErrorKind::Format
            }
            Self::AllocationFailed(_) => ErrorKind::Memory,
        }
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Container error: {0}")]
    Container(#[from] ContainerError),
    #[error("Expansion error: {0}")]
    Expand(#[from] ExpandError),
    #[error("Failed to write raster image {}", .0.display())]
    RasterWriteFailed(PathBuf),
}

impl ExportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Container(e) => e.kind(),
            Self::Expand(e) => e.kind(),
            Self::RasterWriteFailed(_) => ErrorKind::Io,
        }
    }
}

/// Persists a finished pixel buffer as a conventional raster image.
pub trait RasterWriter {
    /// Returns `false` if the image could not be written.
    fn write_raster(
        &self,
        path: &Path,
        width: u32,
        height: u32,
        channels: Channels,
        pixels: &[u8],
        row_stride: usize,
    ) -> bool;
}

/// Writes 8-bit RGB/RGBA PNG files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngWriter;

impl PngWriter {
    fn write_png(
        path: &Path,
        width: u32,
        height: u32,
        channels: Channels,
        pixels: &[u8],
        row_stride: usize,
    ) -> Result<(), ImageError> {
        let color = match channels {
            Channels::Rgb => ExtendedColorType::Rgb8,
            Channels::Rgba => ExtendedColorType::Rgba8,
        };
        let row_len = width as usize * channels.count();
        // Bytes spanned by `height` rows; the last row needs no trailing padding.
        let required = match height.checked_sub(1) {
            None => Some(0),
            Some(rows) => row_stride
                .checked_mul(rows as usize)
                .and_then(|n| n.checked_add(row_len)),
        };
        let required = match required {
            Some(n) if row_stride >= row_len && pixels.len() >= n => n,
            _ => {
                return Err(ImageError::Parameter(ParameterError::from_kind(
                    ParameterErrorKind::DimensionMismatch,
                )))
            }
        };

        let encoder = PngEncoder::new(BufWriter::new(File::create(path)?));

        if row_stride == row_len {
            return encoder.write_image(&pixels[..required], width, height, color);
        }

        let packed: Vec<u8> = pixels
            .chunks(row_stride.max(1))
            .take(height as usize)
            .filter_map(|row| row.get(..row_len))
            .flatten()
            .copied()
            .collect();
        encoder.write_image(&packed, width, height, color)
    }
}

impl RasterWriter for PngWriter {
    fn write_raster(
        &self,
        path: &Path,
        width: u32,
        height: u32,
        channels: Channels,
        pixels: &[u8],
        row_stride: usize,
    ) -> bool {
        match Self::write_png(path, width, height, channels, pixels, row_stride) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to write PNG {}: {}", path.display(), e);
                false
            }
        }
    }
}

/// Reads the container at `path` and expands it with `palette`.
pub fn decode_to_pixels(
    path: impl AsRef<Path>,
    palette: &[PaletteEntry],
    options: &ExpandOptions,
) -> Result<(Header, Vec<u8>), ExportError> {
    let container = decode(path)?;
    let pixels = expand(&container, palette, options)?;
    Ok((container.header, pixels))
}

/// Validates and expands `container`, then hands the pixels to `writer`.
pub fn export_png(
    path: impl AsRef<Path>,
    container: &Container,
    palette: &[PaletteEntry],
    options: &ExpandOptions,
    writer: &dyn RasterWriter,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    info!("Exporting raster image to {}", path.display());

    let pixels = expand(container, palette, options)?;

    let width = u32::from(container.header.width);
    let height = u32::from(container.header.height);
    let channels = options.output_channels;
    let row_stride = width as usize * channels.count();
    debug!(
        "Writing {}x{} image, {} channels, stride {}",
        width,
        height,
        channels.count(),
        row_stride
    );

    if !writer.write_raster(path, width, height, channels, &pixels, row_stride) {
        error!("Raster writer failed for {}", path.display());
        return Err(ExportError::RasterWriteFailed(path.to_path_buf()));
    }

    info!("Export completed successfully");
    Ok(())
}
