//! # gribbit
//!
//! Bit-level decoding of GRIB meteorological messages.
//!
//! A [cursor::BitCursor] tracks a single absolute bit offset over a
//! [source::ByteSource] and assembles arbitrary-width big-endian bit fields
//! across byte boundaries, requesting only the bytes each read touches. On
//! top of it sit typed decoders for fixed-width integers and floats and a
//! section walker that steps through a message's self-describing sections.
//!
//! ## Example
//!
//! ```
//! use gribbit::cursor::BitCursor;
//!
//! let mut data: &[u8] = &[0x47, 0x52, 0x49, 0x42];
//! let mut cursor = BitCursor::new(&mut data);
//! assert_eq!(cursor.read_bits(3).unwrap(), 0b010);
//! assert_eq!(cursor.position(), 3);
//!
//! cursor.reset();
//! assert_eq!(cursor.read_bytes(4).unwrap(), b"GRIB");
//! ```

pub mod cursor;
pub mod errors;
pub mod section;
pub mod source;
