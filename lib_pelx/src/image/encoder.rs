use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, error, info};

use super::format::Container;
use super::ContainerError;

/// Writes `container` to `path`: the 26 header bytes, then the body verbatim.
///
/// The header is written as-is, without validation. The body always starts
/// at byte 26, whatever `header.header_size` says, so a container decoded
/// with a larger `header_size` only reads back correctly if that field is
/// reset to 26 first.
pub fn encode(path: impl AsRef<Path>, container: &Container) -> Result<(), ContainerError> {
    let path = path.as_ref();
    info!("Encoding container to {}", path.display());

    let file = File::create(path).map_err(|e| {
        error!("Failed to create {}: {}", path.display(), e);
        ContainerError::Io(e)
    })?;
    encode_to(BufWriter::new(file), container)
}

pub fn encode_to<W: Write>(mut writer: W, container: &Container) -> Result<(), ContainerError> {
    container
        .header
        .write_to(&mut writer)
        .map_err(|e| match *e {
            bincode::ErrorKind::Io(io) => ContainerError::Io(io),
            other => ContainerError::InvalidHeader(Box::new(other)),
        })?;
    debug!("Header written: {:?}", container.header);

    writer.write_all(&container.body)?;
    writer.flush()?;
    debug!("Body written: {} bytes", container.body.len());

    info!("Container encoded successfully");
    Ok(())
}
