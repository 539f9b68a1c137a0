pub mod decoder;
pub mod encoder;
pub mod format;
pub mod validate;

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

pub use decoder::{decode, decode_from};
pub use encoder::{encode, encode_to};

#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid format or header")]
    InvalidHeader(#[source] bincode::Error),
    #[error("Header size {header_size} points past the end of the data ({data_len} bytes)")]
    HeaderSizeOutOfRange { header_size: u32, data_len: u64 },
    #[error("Body too short: expected {expected} bytes, read {read}")]
    TruncatedBody { expected: usize, read: usize },
    #[error("Body of {0} bytes does not fit in memory")]
    BodyTooLarge(u64),
    #[error("Failed to allocate the body buffer")]
    AllocationFailed(#[from] TryReserveError),
}
