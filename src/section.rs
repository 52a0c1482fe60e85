//! Section walking: the demonstration driver over a [BitCursor].
//!
//! A GRIB message is a chain of self-describing sections. Apart from the
//! two sentinels, each section starts with a 4-byte big-endian length and a
//! 1-byte section number; the payload layout is not interpreted here.

use log::debug;

use crate::cursor::BitCursor;
use crate::errors::DecodeError;
use crate::source::ByteSource;

/// `GRIB`, the 4-byte indicator marker, as a big-endian 32-bit pattern.
pub const START_SENTINEL: u32 = 0x4752_4942;
/// `7777`, the 4-byte end-section marker.
pub const END_SENTINEL: u32 = 0x3737_3737;

/// Byte length of the section 0 indicator (GRIB edition 2).
const INDICATOR_LENGTH: u32 = 16;
/// Byte length of the end section.
const END_SECTION_LENGTH: u32 = 4;

/// A decoded section header: the section's type number and byte length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionHeader {
    /// Section number, 0..=8. The indicator is 0 and the end section 8.
    pub number: u8,
    /// Total section length in bytes, header included.
    pub length: u32,
}

/// Decodes the header of the section starting at the cursor's current
/// (byte-aligned) position, then rewinds to the section start.
///
/// The indicator and end sentinels have no explicit length field; they are
/// recognized by their 32-bit patterns and reported with their fixed
/// lengths. A section number above 7 fails with
/// [DecodeError::IncorrectDataFormat].
pub fn next_section<S: ByteSource>(
    cursor: &mut BitCursor<'_, S>,
) -> Result<SectionHeader, DecodeError> {
    let length = cursor.decode_u32()?;

    if length == START_SENTINEL {
        cursor.rewind(32)?;
        return Ok(SectionHeader {
            number: 0,
            length: INDICATOR_LENGTH,
        });
    }
    if length == END_SENTINEL {
        cursor.rewind(32)?;
        return Ok(SectionHeader {
            number: 8,
            length: END_SECTION_LENGTH,
        });
    }

    let number = cursor.decode_u8()?;
    cursor.rewind(40)?;
    if number > 7 {
        return Err(DecodeError::IncorrectDataFormat);
    }

    Ok(SectionHeader { number, length })
}

/// Walks every section from the cursor's current position through the end
/// sentinel and returns the headers in message order.
///
/// Decoding aborts at the first malformed or truncated header.
pub fn walk_sections<S: ByteSource>(
    cursor: &mut BitCursor<'_, S>,
) -> Result<Vec<SectionHeader>, DecodeError> {
    let mut sections = Vec::new();

    loop {
        let header = next_section(cursor)?;
        debug!(
            "section {} at bit {} ({} bytes)",
            header.number,
            cursor.position(),
            header.length
        );
        cursor.skip(u64::from(header.length) * 8)?;

        let done = header.number == 8;
        sections.push(header);
        if done {
            return Ok(sections);
        }
    }
}
