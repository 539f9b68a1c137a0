pub const FORMAT_NAME: &str = "PELX";
pub const FILE_EXT: &str = "pelx";

pub const MAGIC: [u8; 5] = *b"PELX\0";

/// Size of the fixed header record, and the default body offset.
pub const HEADER_SIZE: usize = 26;
pub const RESERVED_SIZE: usize = 5;

pub const TAG_VOID: u8 = 0x00;
pub const TAG_TRUE: u8 = 0x01;
pub const TAG_PALETTE: u8 = 0x02;

/// Alpha written when the source carries no alpha channel.
pub const OPAQUE: u8 = 0xFF;
