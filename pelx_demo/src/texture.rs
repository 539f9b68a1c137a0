use lib_pelx::{Channels, Container, Header, StreamBuilder};

pub const SIZE: u16 = 16;

/// Literal color shared by every palette variant (the stalk and eyes).
const CREAM: [u8; 4] = [0xFF, 0xFE, 0xFF, 0xFF];

// '.' void, '0'/'1' palette entries, 'w' literal cream.
const MUSHROOM: [&str; SIZE as usize] = [
    "......0000......",
    "....00111100....",
    "...0111111110...",
    "..011000000110..",
    ".01100000000110.",
    ".01000111100010.",
    "0110011111100110",
    "0110011111100110",
    "0110001111000110",
    "0111000000001110",
    "0111111111111110",
    ".00wwwwwwwwww00.",
    "..0ww0wwww0ww0..",
    "..0ww0wwww0ww0..",
    "...0wwwwwwww0...",
    "....00000000....",
];

/// Builds the 16x16 two-palette mushroom container.
pub fn mushroom() -> Container {
    let mut builder = StreamBuilder::new(Channels::Rgba);
    for row in MUSHROOM {
        for cell in row.bytes() {
            match cell {
                b'0' => builder.palette(0),
                b'1' => builder.palette(1),
                b'w' => builder.true_color(CREAM),
                _ => builder.void(),
            };
        }
    }

    let header = Header::new(SIZE, SIZE, Channels::Rgba, Channels::Rgba, 2);
    Container::new(header, builder.finish())
}
