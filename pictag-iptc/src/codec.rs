//! Encoding and decoding of single records
//!
//! Layout of a record:
//!
//! | bytes   | content                           |
//! |---------|-----------------------------------|
//! | 1       | tag marker `0x1C`                 |
//! | 1       | record number                     |
//! | 1       | dataset number                    |
//! | 2       | value length (short form)         |
//! | 2 + 4   | `0x80 0x04` and value length (extended form) |
//! | n       | value                             |
//!
//! The extended form is used for values of `0x8000` bytes and more.

use std::io::Cursor;

use pictag_common::prelude::*;

use crate::error::{Error, Malformation, Result, ResultExt};
use crate::DatasetCode;

pub const TAG_MARKER: u8 = 0x1C;

/// Values with this length or longer need the extended length form
pub const EXTENDED_LENGTH_THRESHOLD: usize = 0x8000;

/// Marks the extended form and gives the size of the length field in bytes
const EXTENDED_LENGTH_MARKER: [u8; 2] = [0x80, 0x04];
const EXTENDED_LENGTH_FLAG: u8 = 0x80;

/// A single dataset with its value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub record_number: u8,
    pub dataset_number: u8,
    pub value: Vec<u8>,
}

impl Record {
    pub fn new(code: impl Into<DatasetCode>, value: Vec<u8>) -> Self {
        let code = code.into();
        Self {
            record_number: code.record,
            dataset_number: code.dataset,
            value,
        }
    }

    pub fn code(&self) -> DatasetCode {
        DatasetCode::new(self.record_number, self.dataset_number)
    }

    /// Appends the encoded record to `out`
    pub fn encode_into(&self, out: &mut Vec<u8>) -> Result<()> {
        write_record(out, self.record_number, self.dataset_number, &self.value)
    }
}

/// Encode one record
///
/// ```
/// # use pictag_iptc::codec::encode_record;
/// assert_eq!(
///     encode_record(2, 5, b"abc").unwrap(),
///     [0x1C, 2, 5, 0, 3, b'a', b'b', b'c']
/// );
/// ```
pub fn encode_record(record_number: u8, dataset_number: u8, value: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(value.len().saturating_add(9));
    write_record(&mut out, record_number, dataset_number, value)?;

    Ok(out)
}

fn write_record(
    out: &mut Vec<u8>,
    record_number: u8,
    dataset_number: u8,
    value: &[u8],
) -> Result<()> {
    let length = length_field(value.len())?;

    out.extend_from_slice(&[TAG_MARKER, record_number, dataset_number]);
    out.extend_from_slice(&length);
    out.extend_from_slice(value);

    Ok(())
}

fn length_field(len: usize) -> Result<Vec<u8>> {
    if len < EXTENDED_LENGTH_THRESHOLD {
        let short = u16::try_from(len).e(Error::ValueTooLong(len))?;
        Ok(short.to_be_bytes().to_vec())
    } else {
        let extended = u32::try_from(len).e(Error::ValueTooLong(len))?;
        let mut field = EXTENDED_LENGTH_MARKER.to_vec();
        field.extend_from_slice(&extended.to_be_bytes());
        Ok(field)
    }
}

/// Decode the record starting at `offset`
///
/// Returns the record and the number of bytes it occupies.
///
/// ```
/// # use pictag_iptc::{codec::decode_record, Error};
/// let data = [0x1C, 2, 25, 0, 2, b'o', b'k', 0x1C];
///
/// let (record, consumed) = decode_record(&data, 0).unwrap();
/// assert_eq!(record.value, b"ok");
/// assert_eq!(consumed, 7);
///
/// assert_eq!(
///     decode_record(&data, consumed),
///     Err(Error::TruncatedBlob { offset: 7 })
/// );
/// ```
pub fn decode_record(data: &[u8], offset: usize) -> Result<(Record, usize)> {
    let malformed = |reason| Error::MalformedRecord { offset, reason };
    let truncated = Error::TruncatedBlob { offset };

    if offset > data.len() {
        return Err(malformed(Malformation::OffsetOutOfBounds));
    }

    let mut cur = Cursor::new(data);
    cur.set_position(offset.u64());

    let marker = cur.read_byte().e(truncated.clone())?;
    if marker != TAG_MARKER {
        return Err(malformed(Malformation::MissingMarker(marker)));
    }

    let [record_number, dataset_number] = cur.read_array::<2>().e(truncated.clone())?;

    let length = cur.read_array::<2>().e(truncated.clone())?;
    let len = if length[0] & EXTENDED_LENGTH_FLAG == 0 {
        usize::from(u16::from_be_bytes(length))
    } else {
        if length != EXTENDED_LENGTH_MARKER {
            let size = u16::from_be_bytes(length) & 0x7FFF;
            return Err(malformed(Malformation::ExtendedLengthSize(size)));
        }
        let extended = u32::from_be_bytes(cur.read_array::<4>().e(truncated.clone())?);
        usize::try_from(extended).e(truncated.clone())?
    };

    if len > cur.remaining() {
        tracing::debug!(
            "Record {record_number}#{dataset_number} declares {len} bytes, only {} left",
            cur.remaining()
        );
        return Err(truncated);
    }

    let value = cur.slice_len(len).e(truncated)?.to_vec();

    let end = usize::try_from(cur.position()).e(malformed(Malformation::PositionOverflow))?;
    let consumed = end
        .checked_sub(offset)
        .e(malformed(Malformation::PositionOverflow))?;

    Ok((
        Record {
            record_number,
            dataset_number,
            value,
        },
        consumed,
    ))
}
