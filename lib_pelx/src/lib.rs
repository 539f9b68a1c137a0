pub mod constants;
pub mod diagnostics;
pub mod export;
pub mod image;
pub mod pixels;

use log::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

pub use crate::diagnostics::{DiagnosticSink, LogSink, MemorySink, NullSink};
pub use crate::export::{decode_to_pixels, export_png, ErrorKind, ExportError};
pub use crate::export::{PngWriter, RasterWriter};
pub use crate::image::format::{Channels, Container, Header, PaletteEntry};
pub use crate::image::validate::HeaderError;
pub use crate::image::{decode, decode_from, encode, encode_to, ContainerError};
pub use crate::pixels::{expand, expand_with, index_pixels, ExpandError, ExpandOptions};
pub use crate::pixels::{StreamBuilder, StreamDecoder};

fn log_format(buf: &mut env_logger::fmt::Formatter, record: &Record) -> io::Result<()> {
    writeln!(
        buf,
        "[{} {}:{}] {}",
        record.level(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

/// Logs to stderr, filtered by `RUST_LOG` (defaults to debug output for this crate).
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("lib_pelx=debug"))
        .format(log_format)
        .init();
}

/// Same format as [`init_logging`], but piped into `path`.
pub fn init_logging_to_file(path: impl AsRef<Path>) -> io::Result<()> {
    let target = Box::new(File::create(path)?);

    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(target))
        .filter(Some("lib_pelx"), LevelFilter::Debug)
        .format(log_format)
        .init();
    Ok(())
}
