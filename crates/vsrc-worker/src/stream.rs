//! # Archive Streams
//!
//! Payloads move as a single sequential archive (tar-like: relative paths,
//! file modes, directory structure). The archive format belongs to the
//! backends; everything in between treats it as opaque bytes.
//!
//! An [`ArchiveStream`] is single-pass and not restartable. The reader owns
//! whatever handle backs it, so dropping it (fully read or not) releases
//! that handle.

use tokio::io::{AsyncRead, AsyncReadExt};

/// A boxed, single-pass archive byte stream.
pub type ArchiveStream = Box<dyn AsyncRead + Send + Unpin>;

/// Wrap an in-memory archive as a stream.
pub fn archive_from_bytes(bytes: impl Into<Vec<u8>>) -> ArchiveStream {
    Box::new(std::io::Cursor::new(bytes.into()))
}

/// Drain a stream into memory.
pub async fn read_archive(mut stream: ArchiveStream) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bytes_survive_the_stream() {
        let payload = b"ustar\0\x00\x01\x02binary".to_vec();
        let out = read_archive(archive_from_bytes(payload.clone())).await.unwrap();
        assert_eq!(out, payload);
    }

    #[tokio::test]
    async fn read_errors_surface() {
        let mock = tokio_test::io::Builder::new()
            .read(b"partial")
            .read_error(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
            .build();
        let err = read_archive(Box::new(mock)).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
