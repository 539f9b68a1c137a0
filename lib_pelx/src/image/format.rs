use std::io::{Read, Write};

use bincode::Options;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{HEADER_SIZE, MAGIC, OPAQUE, RESERVED_SIZE};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unsupported channel count {0}: expected 3 (RGB) or 4 (RGBA)")]
pub struct UnsupportedChannels(pub u8);

/// Number of 8-bit channels in a pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Channels {
    Rgb = 3,
    #[default]
    Rgba = 4,
}

impl Channels {
    pub const fn count(self) -> usize {
        self as usize
    }

    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba)
    }
}

impl From<Channels> for u8 {
    fn from(channels: Channels) -> Self {
        channels as u8
    }
}

impl TryFrom<u8> for Channels {
    type Error = UnsupportedChannels;

    fn try_from(channels: u8) -> Result<Self, Self::Error> {
        match channels {
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            other => Err(UnsupportedChannels(other)),
        }
    }
}

/// The fixed 26-byte record at the start of every container.
///
/// Field order matches the on-disk layout; all integers are big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub magic: [u8; 5],
    /// Offset at which the pixel stream begins.
    pub header_size: u32,
    /// Offset of the named palette definitions block (reserved, never parsed).
    pub palette_offset: u32,
    pub width: u16,
    pub height: u16,
    pub palette_channel_count: u8,
    pub true_channel_count: u8,
    pub palette_count: u16,
    pub reserved: [u8; RESERVED_SIZE],
}

fn wire_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_big_endian()
        .with_fixint_encoding()
}

impl Header {
    pub const SIZE: usize = HEADER_SIZE;

    pub fn new(
        width: u16,
        height: u16,
        palette_channels: Channels,
        true_channels: Channels,
        palette_count: u16,
    ) -> Self {
        Self {
            magic: MAGIC,
            header_size: HEADER_SIZE as u32,
            palette_offset: HEADER_SIZE as u32,
            width,
            height,
            palette_channel_count: palette_channels.into(),
            true_channel_count: true_channels.into(),
            palette_count,
            reserved: [0; RESERVED_SIZE],
        }
    }

    pub fn read_from<R: Read>(reader: R) -> bincode::Result<Self> {
        wire_options().deserialize_from(reader)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> bincode::Result<()> {
        wire_options().serialize_into(writer, self)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Length in bytes of the expanded pixel buffer at `channels` per pixel.
    pub fn output_len(&self, channels: Channels) -> usize {
        self.pixel_count() * channels.count()
    }
}

/// A palette color. Alpha is only read when the palette is declared 4-channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PaletteEntry {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, OPAQUE)
    }
}

impl From<[u8; 4]> for PaletteEntry {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

/// Header plus the raw, unparsed pixel stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub header: Header,
    pub body: Vec<u8>,
}

impl Container {
    pub fn new(header: Header, body: Vec<u8>) -> Self {
        Self { header, body }
    }

    pub fn body_len(&self) -> usize {
        self.body.len()
    }
}
