use pictag_common::error::ErrorWithData;

use crate::charset::{self, UTF8_DECLARATION};
use crate::codec::{self, Record};
use crate::error::{Error, Result};
use crate::DatasetCode;

/// Parsed IPTC blob
///
/// Keeps the raw bytes next to the records in their original order. Datasets
/// can occur more than once. Lookups via [`Iptc::get`] only consider the
/// first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iptc {
    inner: Vec<u8>,
    records: Vec<Record>,
}

impl Iptc {
    pub fn new(data: Vec<u8>) -> std::result::Result<Self, ErrorWithData<Error>> {
        match Self::parse(&data) {
            Ok(records) => Ok(Self {
                inner: data,
                records,
            }),
            Err(err) => Err(ErrorWithData::new(err, data)),
        }
    }

    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        let inner = Self::serialize(&records)?;
        Ok(Self { inner, records })
    }

    /// Split a blob into records
    ///
    /// An empty blob contains no records. A blob that ends in the middle of a
    /// record fails as a whole.
    pub fn parse(data: &[u8]) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut offset = 0;

        while offset < data.len() {
            let (record, consumed) = codec::decode_record(data, offset)?;
            tracing::trace!(
                "Decoded record {} with {} bytes at {offset}",
                record.code(),
                record.value.len()
            );
            records.push(record);

            offset = offset
                .checked_add(consumed)
                .ok_or(Error::TruncatedBlob { offset })?;
        }

        tracing::debug!("Found {} IPTC records", records.len());

        Ok(records)
    }

    /// Concatenate encoded records in the given order
    pub fn serialize(records: &[Record]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for record in records {
            record.encode_into(&mut out)?;
        }
        Ok(out)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Value of the first record with the given code
    pub fn get(&self, code: impl Into<DatasetCode>) -> Option<&[u8]> {
        self.get_all(code).next()
    }

    /// Values of all records with the given code
    pub fn get_all(&self, code: impl Into<DatasetCode>) -> impl Iterator<Item = &[u8]> {
        let code = code.into();
        self.records
            .iter()
            .filter(move |x| x.code() == code)
            .map(|x| x.value.as_slice())
    }

    /// First value for the code decoded as text
    pub fn get_str(&self, code: impl Into<DatasetCode>) -> Option<String> {
        self.get(code)
            .map(|value| charset::decode_text(value, self.declares_utf8()))
    }

    /// Returns `true` if the envelope record declares UTF-8 text
    pub fn declares_utf8(&self) -> bool {
        self.get(DatasetCode::CODED_CHARACTER_SET) == Some(UTF8_DECLARATION)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}
