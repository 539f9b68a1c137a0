use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use super::stream::Tag;
use crate::constants::OPAQUE;
use crate::image::format::{Channels, PaletteEntry};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IndexError {
    #[error("Invalid pixel data length: expected multiple of {channels} bytes, got {len}")]
    InvalidPixelDataLength { len: usize, channels: usize },
    #[error("Pixel #{0} is translucent, but true color records carry no alpha")]
    AlphaNotRepresentable(usize),
}

/// Appends tag-prefixed records to a pixel stream.
#[derive(Debug, Clone)]
pub struct StreamBuilder {
    true_channels: Channels,
    data: Vec<u8>,
}

impl StreamBuilder {
    pub fn new(true_channels: Channels) -> Self {
        Self {
            true_channels,
            data: Vec::new(),
        }
    }

    pub fn void(&mut self) -> &mut Self {
        self.data.push(Tag::Void.byte());
        self
    }

    /// Literal pixel; alpha is dropped when true color records are 3-channel.
    pub fn true_color(&mut self, rgba: [u8; 4]) -> &mut Self {
        self.data.push(Tag::True.byte());
        self.data
            .extend_from_slice(&rgba[..self.true_channels.count()]);
        self
    }

    pub fn palette(&mut self, index: u8) -> &mut Self {
        self.data.extend_from_slice(&[Tag::Palette.byte(), index]);
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn finish(self) -> Vec<u8> {
        self.data
    }
}

/// The color a source produces once expanded to `output` channels, with the
/// alpha slot zeroed for RGB output so keys compare equal.
fn expanded_key(rgba: [u8; 4], source_alpha: bool, output: Channels) -> [u8; 4] {
    let alpha = match (output.has_alpha(), source_alpha) {
        (false, _) => 0,
        (true, true) => rgba[3],
        (true, false) => OPAQUE,
    };
    [rgba[0], rgba[1], rgba[2], alpha]
}

/// Converts a flat truecolor buffer into a pixel stream.
///
/// Pixels that expand to zero become void records, colors found in the first
/// 256 palette entries become palette references, everything else is written
/// literally. Expanding the result with the same palette and `channels`
/// reproduces `pixels`.
pub fn index_pixels(
    pixels: &[u8],
    channels: Channels,
    palette: &[PaletteEntry],
    palette_channels: Channels,
    true_channels: Channels,
) -> Result<Vec<u8>, IndexError> {
    let stride = channels.count();
    if pixels.len() % stride != 0 {
        return Err(IndexError::InvalidPixelDataLength {
            len: pixels.len(),
            channels: stride,
        });
    }

    let mut lookup = HashMap::new();
    for (index, entry) in palette.iter().take(usize::from(u8::MAX) + 1).enumerate() {
        let key = expanded_key(
            [entry.r, entry.g, entry.b, entry.a],
            palette_channels.has_alpha(),
            channels,
        );
        lookup.entry(key).or_insert(index as u8);
    }

    let mut builder = StreamBuilder::new(true_channels);
    let (mut voids, mut references, mut literals) = (0usize, 0usize, 0usize);

    for (i, pixel) in pixels.chunks_exact(stride).enumerate() {
        let alpha = if channels.has_alpha() { pixel[3] } else { OPAQUE };
        let rgba = [pixel[0], pixel[1], pixel[2], alpha];
        let key = expanded_key(rgba, true, channels);

        if key == [0; 4] {
            builder.void();
            voids += 1;
        } else if let Some(&index) = lookup.get(&key) {
            builder.palette(index);
            references += 1;
        } else {
            if !true_channels.has_alpha() && alpha != OPAQUE {
                return Err(IndexError::AlphaNotRepresentable(i));
            }
            builder.true_color(rgba);
            literals += 1;
        }
    }

    debug!(
        "Indexed {} pixels: {} void, {} palette, {} literal",
        voids + references + literals,
        voids,
        references,
        literals
    );
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_records() {
        let mut builder = StreamBuilder::new(Channels::Rgb);
        builder
            .void()
            .palette(1)
            .true_color([0x11, 0x22, 0x33, 0x44]);
        assert_eq!(builder.len(), 7);
        assert_eq!(
            builder.finish(),
            vec![0x00, 0x02, 0x01, 0x01, 0x11, 0x22, 0x33]
        );
    }

    #[test]
    fn test_index_prefers_palette() {
        let palette = [
            PaletteEntry::rgb(0xEA, 0x9E, 0x22),
            PaletteEntry::rgb(0xB5, 0x31, 0x20),
        ];
        let pixels = [
            0xB5, 0x31, 0x20, 0xFF, // palette 1
            0x00, 0x00, 0x00, 0x00, // void
            0x01, 0x02, 0x03, 0xFF, // literal
        ];

        let stream = index_pixels(
            &pixels,
            Channels::Rgba,
            &palette,
            Channels::Rgb,
            Channels::Rgb,
        )
        .unwrap();
        assert_eq!(stream, vec![0x02, 0x01, 0x00, 0x01, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_index_invalid_length() {
        let result = index_pixels(
            &[1, 2, 3, 4, 5],
            Channels::Rgb,
            &[],
            Channels::Rgb,
            Channels::Rgb,
        );
        assert_eq!(
            result,
            Err(IndexError::InvalidPixelDataLength { len: 5, channels: 3 })
        );
    }

    #[test]
    fn test_index_translucent_literal() {
        let result = index_pixels(
            &[0xFF, 0xFF, 0xFF, 0xFF, 1, 2, 3, 0x80],
            Channels::Rgba,
            &[],
            Channels::Rgba,
            Channels::Rgb,
        );
        assert_eq!(result, Err(IndexError::AlphaNotRepresentable(1)));
    }

    #[test]
    fn test_index_rgb_black_is_void() {
        let stream = index_pixels(
            &[0, 0, 0],
            Channels::Rgb,
            &[],
            Channels::Rgb,
            Channels::Rgb,
        )
        .unwrap();
        assert_eq!(stream, vec![0x00]);
    }
}
