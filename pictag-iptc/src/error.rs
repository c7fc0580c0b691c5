use pictag_common::semantic::{SemanticField, UnknownFieldName};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Malformed record at byte {offset}: {reason}")]
    MalformedRecord { offset: usize, reason: Malformation },
    #[error("Blob ends inside the record starting at byte {offset}")]
    TruncatedBlob { offset: usize },
    #[error("Field '{0}' is not supported by this profile")]
    UnknownField(String),
    #[error("Value with {0} bytes is too long to be encoded")]
    ValueTooLong(usize),
    #[error("Value '{value}' is not valid for field '{field}'")]
    InvalidValue { field: SemanticField, value: String },
}

/// Structural problems of a single record
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Malformation {
    #[error("expected tag marker 0x1C, found 0x{0:02X}")]
    MissingMarker(u8),
    #[error("unsupported extended length field of {0} bytes")]
    ExtendedLengthSize(u16),
    #[error("offset lies outside of the blob")]
    OffsetOutOfBounds,
    #[error("position overflowed")]
    PositionOverflow,
}

impl From<UnknownFieldName> for Error {
    fn from(value: UnknownFieldName) -> Self {
        Self::UnknownField(value.0)
    }
}

pub(crate) trait ResultExt<T> {
    fn e(self, err: Error) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E> {
    fn e(self, err: Error) -> Result<T> {
        self.map_err(|_| err)
    }
}

impl<T> ResultExt<T> for Option<T> {
    fn e(self, err: Error) -> Result<T> {
        self.ok_or(err)
    }
}
