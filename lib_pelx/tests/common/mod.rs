#![allow(dead_code)]

use lib_pelx::{Channels, Container, Header, PaletteEntry};

pub const OVERWORLD: [PaletteEntry; 2] = [
    PaletteEntry::new(0xEA, 0x9E, 0x22, 0xFF),
    PaletteEntry::new(0xB5, 0x31, 0x20, 0xFF),
];

pub const POISON: [PaletteEntry; 2] = [
    PaletteEntry::new(0x9D, 0x5D, 0x00, 0xFF),
    PaletteEntry::new(0x06, 0x00, 0x07, 0xFF),
];

/// One palette reference followed by one RGBA literal.
pub const TWO_PIXEL_BODY: [u8; 7] = [0x02, 0x00, 0x01, 0x11, 0x22, 0x33, 0x44];

pub fn two_pixel_container() -> Container {
    let header = Header::new(2, 1, Channels::Rgba, Channels::Rgba, 2);
    Container::new(header, TWO_PIXEL_BODY.to_vec())
}

/// 4x4 checker of palette entries 0 and 1 with a transparent centre.
pub fn checker_container() -> Container {
    let header = Header::new(4, 4, Channels::Rgba, Channels::Rgb, 2);
    let mut body = Vec::new();
    for y in 0..4 {
        for x in 0..4 {
            if (1..3).contains(&x) && (1..3).contains(&y) {
                body.push(0x00);
            } else {
                body.extend_from_slice(&[0x02, ((x + y) % 2) as u8]);
            }
        }
    }
    Container::new(header, body)
}
