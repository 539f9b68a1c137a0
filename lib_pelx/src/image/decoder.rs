use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use log::{debug, error, info};

use super::format::{Container, Header};
use super::ContainerError;

/// Reads a container from `path`.
///
/// The header is not validated here; see [`Header::validate`].
pub fn decode(path: impl AsRef<Path>) -> Result<Container, ContainerError> {
    let path = path.as_ref();
    info!("Decoding container from {}", path.display());

    let file = File::open(path).map_err(|e| {
        error!("Failed to open {}: {}", path.display(), e);
        ContainerError::Io(e)
    })?;
    decode_from(BufReader::new(file))
}

pub fn decode_from<R: Read + Seek>(mut reader: R) -> Result<Container, ContainerError> {
    // A short header is a format problem; any other read failure is I/O.
    let header = Header::read_from(&mut reader).map_err(|e| {
        error!("Failed to read header: {}", e);
        match *e {
            bincode::ErrorKind::Io(io) if io.kind() != io::ErrorKind::UnexpectedEof => {
                ContainerError::Io(io)
            }
            other => ContainerError::InvalidHeader(Box::new(other)),
        }
    })?;
    debug!("Header read: {:?}", header);

    let data_len = reader.seek(SeekFrom::End(0))?;
    let header_size = u64::from(header.header_size);
    if header_size > data_len {
        error!(
            "Header size {} exceeds data length {}",
            header.header_size, data_len
        );
        return Err(ContainerError::HeaderSizeOutOfRange {
            header_size: header.header_size,
            data_len,
        });
    }

    let remaining = data_len - header_size;
    let body_len =
        usize::try_from(remaining).map_err(|_| ContainerError::BodyTooLarge(remaining))?;
    let mut body = Vec::new();
    body.try_reserve_exact(body_len).map_err(|e| {
        error!("Failed to allocate {} bytes for the body", body_len);
        ContainerError::AllocationFailed(e)
    })?;

    reader.seek(SeekFrom::Start(header_size))?;
    let read = reader.by_ref().take(remaining).read_to_end(&mut body)?;
    if read != body_len {
        error!("Body too short: expected {} bytes, read {}", body_len, read);
        return Err(ContainerError::TruncatedBody {
            expected: body_len,
            read,
        });
    }
    debug!("Body read: {} bytes", body_len);

    info!("Container decoded successfully");
    Ok(Container::new(header, body))
}
