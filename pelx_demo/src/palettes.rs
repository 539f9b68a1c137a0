use lib_pelx::PaletteEntry;

pub struct NamedPalette {
    pub name: &'static str,
    pub entries: [PaletteEntry; 2],
}

pub const MUSHROOM_PALETTES: [NamedPalette; 4] = [
    NamedPalette {
        name: "overworld",
        entries: [
            PaletteEntry::new(0xEA, 0x9E, 0x22, 0xFF),
            PaletteEntry::new(0xB5, 0x31, 0x20, 0xFF),
        ],
    },
    NamedPalette {
        name: "one_up",
        entries: [
            PaletteEntry::new(0xEA, 0x9E, 0x22, 0xFF),
            PaletteEntry::new(0x00, 0x98, 0x00, 0xFF),
        ],
    },
    NamedPalette {
        name: "one_up_underworld",
        entries: [
            PaletteEntry::new(0x6D, 0x41, 0x04, 0xFF),
            PaletteEntry::new(0x24, 0x51, 0x56, 0xFF),
        ],
    },
    NamedPalette {
        name: "poison",
        entries: [
            PaletteEntry::new(0x9D, 0x5D, 0x00, 0xFF),
            PaletteEntry::new(0x06, 0x00, 0x07, 0xFF),
        ],
    },
];
