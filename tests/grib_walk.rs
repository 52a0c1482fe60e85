//! End-to-end walk of a synthetic GRIB message through the in-memory and
//! file-backed byte sources.

use gribbit::cursor::BitCursor;
use gribbit::errors::{DecodeError, Operation};
use gribbit::section::{SectionHeader, walk_sections};
use gribbit::source::FileSource;

// Indicator, identification-style section, data-style section, end section.
fn sample_message() -> Vec<u8> {
    let mut msg = Vec::new();

    msg.extend_from_slice(b"GRIB");
    msg.extend_from_slice(&[0u8; 12]);

    msg.extend_from_slice(&21u32.to_be_bytes());
    msg.push(1);
    msg.extend_from_slice(&[0x10; 16]);

    msg.extend_from_slice(&9u32.to_be_bytes());
    msg.push(7);
    msg.extend_from_slice(&[0x20; 4]);

    msg.extend_from_slice(b"7777");
    msg
}

fn expected_sections() -> Vec<SectionHeader> {
    vec![
        SectionHeader {
            number: 0,
            length: 16,
        },
        SectionHeader {
            number: 1,
            length: 21,
        },
        SectionHeader { number: 7, length: 9 },
        SectionHeader { number: 8, length: 4 },
    ]
}

#[test]
fn test_walk_in_memory_message() {
    let mut source = sample_message();
    let mut cursor = BitCursor::new(&mut source);

    let marker = cursor.read_bytes(4).unwrap();
    assert_eq!(String::from_utf8(marker).unwrap(), "GRIB");

    cursor.reset();
    assert_eq!(walk_sections(&mut cursor).unwrap(), expected_sections());
}

#[test]
fn test_walk_file_message() {
    let dir = tempdir::TempDir::new("gribbit").unwrap();
    let path = dir.path().join("sample.grb2");
    std::fs::write(&path, sample_message()).unwrap();

    let mut source = FileSource::open(&path).unwrap();
    let mut cursor = BitCursor::new(&mut source);

    assert_eq!(walk_sections(&mut cursor).unwrap(), expected_sections());
}

#[test]
fn test_file_source_matches_slice_source() {
    let message = sample_message();

    let dir = tempdir::TempDir::new("gribbit").unwrap();
    let path = dir.path().join("sample.grb2");
    std::fs::write(&path, &message).unwrap();

    let mut file_source = FileSource::open(&path).unwrap();
    let mut file_cursor = BitCursor::new(&mut file_source);

    let mut slice_source = message.as_slice();
    let mut slice_cursor = BitCursor::new(&mut slice_source);

    // Same bytes through either adapter, aligned or not.
    assert_eq!(
        file_cursor.read_bytes_at(0, 10).unwrap(),
        slice_cursor.read_bytes_at(0, 10).unwrap()
    );
    assert_eq!(
        file_cursor.read_bits_at(13, 27).unwrap(),
        slice_cursor.read_bits_at(13, 27).unwrap()
    );
}

#[test]
fn test_truncated_message_aborts_with_read_error() {
    let mut message = sample_message();
    message.truncate(message.len() - 6);

    let mut cursor = BitCursor::new(&mut message);
    let err = walk_sections(&mut cursor).unwrap_err();
    assert!(matches!(err, DecodeError::NoDataAvailable));
    assert_eq!(err.operation(), Operation::ReadingSource);
}

#[test]
fn test_peek_then_read_section_header() {
    let mut source = sample_message();
    let mut cursor = BitCursor::new(&mut source);

    let peeked = cursor.peek(4).unwrap();
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.read_bytes(4).unwrap(), peeked);
}
