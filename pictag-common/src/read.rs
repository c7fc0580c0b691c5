use std::io::{Cursor, Seek, SeekFrom};

use crate::utils::{AdditionOverflowError, UsizeExt};

pub trait ReadExt: std::io::BufRead + std::io::Seek {
    fn read_array<const T: usize>(&mut self) -> Result<[u8; T], ReadError> {
        let buf = &mut [0; T];
        self.read_exact(buf)?;
        Ok(*buf)
    }

    fn read_byte(&mut self) -> Result<u8, ReadError> {
        let buf = &mut [0; 1];
        self.read_exact(buf)?;
        Ok(buf[0])
    }
}

impl<T: AsRef<[u8]>> ReadExt for Cursor<T> {}

pub trait SliceExt<'a>: std::io::BufRead + std::io::Seek {
    fn slice_len(&mut self, len: usize) -> Result<&'a [u8], ReadError>;
    fn remaining(&self) -> usize;
}

impl<'a> SliceExt<'a> for Cursor<&'a [u8]> {
    /// Read `len` bytes and return them as slice
    ///
    /// ```
    /// # use std::io::Cursor;
    /// # use pictag_common::read::*;
    /// let mut s = Cursor::new(b"abcdefgh".as_slice());
    /// assert_eq!(s.slice_len(3).unwrap(), b"abc");
    /// assert_eq!(s.remaining(), 5);
    /// assert_eq!(s.slice_len(5).unwrap(), b"defgh");
    /// assert!(s.slice_len(1).is_err());
    /// ```
    fn slice_len(&mut self, len: usize) -> Result<&'a [u8], ReadError> {
        let start = usize::try_from(self.position()).map_err(|_| ReadError::PositionTooLarge)?;
        let end = start.safe_add(len)?;

        let slice = self
            .get_ref()
            .get(start..end)
            .ok_or(ReadError::UnexpectedEof)?;

        self.seek(SeekFrom::Start(end.u64()))?;

        Ok(slice)
    }

    /// Number of bytes between the current position and the end
    fn remaining(&self) -> usize {
        let len = self.get_ref().len();
        usize::try_from(self.position())
            .ok()
            .and_then(|pos| len.checked_sub(pos))
            .unwrap_or(0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Unexpected end of data")]
    UnexpectedEof,
    #[error("Position too large")]
    PositionTooLarge,
    #[error("Addition overflowed")]
    AdditionOverflow,
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
}

impl From<AdditionOverflowError> for ReadError {
    fn from(_: AdditionOverflowError) -> Self {
        Self::AdditionOverflow
    }
}
