use log::debug;

use super::channels::{emit, emit_void};
use super::ExpandError;
use crate::constants::{TAG_PALETTE, TAG_TRUE, TAG_VOID};
use crate::diagnostics::DiagnosticSink;
use crate::image::format::{Channels, PaletteEntry};

/// Record discriminator at the start of every pixel in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// No payload; a fully transparent black pixel.
    Void,
    /// `true_channel_count` literal bytes.
    True,
    /// One palette index byte.
    Palette,
}

impl Tag {
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            TAG_VOID => Some(Self::Void),
            TAG_TRUE => Some(Self::True),
            TAG_PALETTE => Some(Self::Palette),
            _ => None,
        }
    }

    pub const fn byte(self) -> u8 {
        match self {
            Self::Void => TAG_VOID,
            Self::True => TAG_TRUE,
            Self::Palette => TAG_PALETTE,
        }
    }
}

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn next(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        let bytes = self.data.get(self.pos..self.pos + n)?;
        self.pos += n;
        Some(bytes)
    }
}

/// Single forward pass over a tag-prefixed pixel stream.
pub struct StreamDecoder<'p> {
    true_channels: Channels,
    palette_channels: Channels,
    palette: &'p [PaletteEntry],
    output: Channels,
}

impl<'p> StreamDecoder<'p> {
    pub fn new(
        true_channels: Channels,
        palette_channels: Channels,
        palette: &'p [PaletteEntry],
        output: Channels,
    ) -> Self {
        Self {
            true_channels,
            palette_channels,
            palette,
            output,
        }
    }

    /// Decodes exactly `pixel_count` pixels from `body`.
    ///
    /// The stream must fill the buffer exactly; a stream that ends early or
    /// runs past the last pixel is rejected. No buffer is returned on error.
    pub fn decode(
        &self,
        body: &[u8],
        pixel_count: usize,
        sink: &dyn DiagnosticSink,
    ) -> Result<Vec<u8>, ExpandError> {
        let expected = pixel_count * self.output.count();
        let mut out = Vec::new();
        out.try_reserve_exact(expected).map_err(|e| {
            sink.report(&format!("Failed to allocate {} bytes", expected));
            e
        })?;

        let mut reader = Reader { data: body, pos: 0 };
        while out.len() < expected {
            let position = reader.pos;
            let Some(byte) = reader.next() else {
                break;
            };

            match Tag::from_byte(byte) {
                Some(Tag::Void) => emit_void(&mut out, self.output),
                Some(Tag::True) => {
                    let needed = self.true_channels.count();
                    let available = reader.remaining();
                    let source = reader.take(needed).ok_or_else(|| {
                        sink.report(&format!(
                            "Truncated true color record at {}: needs {} bytes, {} left",
                            position, needed, available
                        ));
                        ExpandError::TruncatedRecord {
                            tag: byte,
                            position,
                            needed,
                            available,
                        }
                    })?;
                    emit(&mut out, source, self.true_channels, self.output);
                }
                Some(Tag::Palette) => {
                    let index = reader.next().ok_or_else(|| {
                        sink.report(&format!("Truncated palette record at {}", position));
                        ExpandError::TruncatedRecord {
                            tag: byte,
                            position,
                            needed: 1,
                            available: 0,
                        }
                    })?;
                    let entry = self.palette.get(usize::from(index)).ok_or_else(|| {
                        sink.report(&format!(
                            "Palette index {} at {} out of range ({} entries)",
                            index,
                            position,
                            self.palette.len()
                        ));
                        ExpandError::PaletteIndexOutOfRange {
                            index,
                            len: self.palette.len(),
                        }
                    })?;
                    let rgba = [entry.r, entry.g, entry.b, entry.a];
                    emit(&mut out, &rgba, self.palette_channels, self.output);
                }
                None => {
                    sink.report(&format!("Invalid tag {:#04x} at {}", byte, position));
                    return Err(ExpandError::InvalidTag {
                        tag: byte,
                        position,
                    });
                }
            }
        }

        if out.len() != expected {
            sink.report(&format!(
                "Mismatch: expected {} bytes, but wrote {}",
                expected,
                out.len()
            ));
            return Err(ExpandError::SizeMismatch {
                expected,
                written: out.len(),
            });
        }

        let remaining = reader.remaining();
        if remaining != 0 {
            sink.report(&format!(
                "Stream continues past the last pixel: {} bytes left",
                remaining
            ));
            return Err(ExpandError::TrailingData { remaining });
        }

        debug!("Decoded {} pixels from {} stream bytes", pixel_count, body.len());
        Ok(out)
    }
}
