//! Reconciles 3/4-channel sources with the requested output width.

use std::iter;

use crate::constants::OPAQUE;
use crate::image::format::Channels;

/// Writes a void pixel: every output channel zero, alpha included.
pub fn emit_void(out: &mut Vec<u8>, output: Channels) {
    out.extend(iter::repeat(0).take(output.count()));
}

/// Writes one pixel from `source`, which holds at least `source_channels` bytes.
///
/// RGB is always copied. A 4-channel output takes the source alpha when the
/// source has one and `OPAQUE` otherwise; a 3-channel output drops it.
pub fn emit(out: &mut Vec<u8>, source: &[u8], source_channels: Channels, output: Channels) {
    out.extend_from_slice(&source[..3]);
    if output.has_alpha() {
        out.push(if source_channels.has_alpha() {
            source[3]
        } else {
            OPAQUE
        });
    }
}
