//! Error types for byte-source access and bit-level decoding.

use thiserror::Error;

/// The kind of operation a [DecodeError] occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    OpeningSource,
    ReadingSource,
    SeekingSource,
    MemoryAllocation,
}

/// Errors produced while reading from a [crate::source::ByteSource] or
/// decoding values through a [crate::cursor::BitCursor].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The requested range lies outside the bounds of the source data.
    #[error("cannot read outside the bounds of the source data")]
    NoDataAvailable,
    /// A decoded value does not fit the selected type or format.
    #[error("failed to cast value to the selected type")]
    IncorrectDataFormat,
    /// Requested bit width is zero or wider than the 64-bit accumulator.
    #[error("bit width {0} is outside the supported range 1..=64")]
    InvalidBitWidth(u32),
    /// The buffer for a repeated bit field cannot be reserved.
    #[error("not enough memory to unpack this field")]
    InsufficientMemory,
    /// The source failed to reposition for a read.
    #[error("failed to move the source position")]
    CannotSeek,
    /// A seek, skip or rewind would move the cursor outside the
    /// addressable bit range.
    #[error("bit offset would move outside the addressable range")]
    SeekOutOfRange,
    /// The backing store could not be opened.
    #[error("failed to open source: {0}")]
    CannotOpenSource(#[source] std::io::Error),
}

impl DecodeError {
    /// The operation category this error belongs to.
    pub fn operation(&self) -> Operation {
        match self {
            DecodeError::NoDataAvailable
            | DecodeError::IncorrectDataFormat
            | DecodeError::InvalidBitWidth(_) => Operation::ReadingSource,
            DecodeError::InsufficientMemory => Operation::MemoryAllocation,
            DecodeError::CannotSeek | DecodeError::SeekOutOfRange => Operation::SeekingSource,
            DecodeError::CannotOpenSource(_) => Operation::OpeningSource,
        }
    }
}
