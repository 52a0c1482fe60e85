//! Byte sources: random-access providers of raw bytes by absolute offset.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::errors::DecodeError;

/// A random-access provider of raw bytes.
///
/// Every call is independent and positioned: implementations return exactly
/// `amount` bytes starting at byte `offset`, or fail. A short read is a
/// contract violation and is reported as [DecodeError::NoDataAvailable].
pub trait ByteSource {
    /// Reads exactly `amount` bytes starting at absolute byte `offset`.
    fn read_bytes(&mut self, offset: u64, amount: usize) -> Result<Vec<u8>, DecodeError>;
}

impl ByteSource for &[u8] {
    fn read_bytes(&mut self, offset: u64, amount: usize) -> Result<Vec<u8>, DecodeError> {
        let start = usize::try_from(offset).map_err(|_| DecodeError::NoDataAvailable)?;
        let end = start
            .checked_add(amount)
            .ok_or(DecodeError::NoDataAvailable)?;
        let bytes = self.get(start..end).ok_or(DecodeError::NoDataAvailable)?;
        Ok(bytes.to_vec())
    }
}

impl ByteSource for Vec<u8> {
    fn read_bytes(&mut self, offset: u64, amount: usize) -> Result<Vec<u8>, DecodeError> {
        self.as_slice().read_bytes(offset, amount)
    }
}

/// Adapter exposing any seekable reader (a file, an in-memory cursor) as a
/// [ByteSource].
///
/// The reader is repositioned before every read, so calls stay independent
/// even though the backing store keeps a single ambient position.
#[derive(Debug)]
pub struct ReaderSource<R> {
    inner: R,
}

impl<R: Read + Seek> ReaderSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> ByteSource for ReaderSource<R> {
    fn read_bytes(&mut self, offset: u64, amount: usize) -> Result<Vec<u8>, DecodeError> {
        self.inner
            .seek(SeekFrom::Start(offset))
            .map_err(|_| DecodeError::CannotSeek)?;

        let mut bytes = vec![0u8; amount];
        self.inner
            .read_exact(&mut bytes)
            .map_err(|_| DecodeError::NoDataAvailable)?;

        Ok(bytes)
    }
}

/// A [ByteSource] backed by a file on disk.
pub type FileSource = ReaderSource<File>;

impl ReaderSource<File> {
    /// Opens the file at `path` as a byte source.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DecodeError> {
        let file = File::open(path).map_err(DecodeError::CannotOpenSource)?;
        Ok(ReaderSource::new(file))
    }
}
