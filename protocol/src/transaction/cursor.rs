//! Checked reading over a byte slice.
//!
//! [`ByteReader`] is the only way the codec touches raw input. Every read
//! checks the remaining length first and fails with a typed
//! [`CodecError`] instead of indexing out of bounds, and every declared
//! count is bounded before it is trusted.

use super::codec::CodecError;
use crate::config::MAX_MESSAGE_SIZE;

/// A forward-only cursor over an input buffer.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Start reading at the beginning of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Take the next `len` bytes.
    pub fn read_bytes(&mut self, field: &'static str, len: usize) -> Result<&'a [u8], CodecError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(CodecError::TruncatedInput {
                field,
                needed: len,
                remaining,
            });
        }
        let out = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    /// Take the next `N` bytes as an array.
    pub fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(field, N)?);
        Ok(out)
    }

    /// Read a little-endian `u32`.
    pub fn read_u32_le(&mut self, field: &'static str) -> Result<u32, CodecError> {
        self.read_array(field).map(u32::from_le_bytes)
    }

    /// Read a little-endian `u64`.
    pub fn read_u64_le(&mut self, field: &'static str) -> Result<u64, CodecError> {
        self.read_array(field).map(u64::from_le_bytes)
    }

    /// Read a `u32` element count for records of `record_len` bytes each.
    ///
    /// The count is only returned once the records it announces are known to
    /// fit: first against [`MAX_MESSAGE_SIZE`] (`CountOverflow`), then
    /// against what is actually left in the buffer (`TruncatedInput`).
    /// Callers can therefore allocate `count` elements up front.
    pub fn read_count(&mut self, field: &'static str, record_len: usize) -> Result<usize, CodecError> {
        let count = self.read_u32_le(field)?;

        let total = u64::from(count)
            .checked_mul(record_len as u64)
            .filter(|total| *total <= MAX_MESSAGE_SIZE)
            .ok_or(CodecError::CountOverflow { field, count })?;

        let remaining = self.remaining();
        if total > remaining as u64 {
            return Err(CodecError::TruncatedInput {
                field,
                needed: total as usize,
                remaining,
            });
        }

        Ok(count as usize)
    }

    /// Succeeds only if every byte has been consumed.
    pub fn finish(self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            count => Err(CodecError::TrailingBytes {
                offset: self.pos,
                count,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_integers() {
        let data = [0x2a, 0x01, 0x00, 0x00, 0x00, 0xff, 0, 0, 0, 0, 0, 0, 0];
        let mut r = ByteReader::new(&data);
        assert_eq!(r.read_array::<1>("a").unwrap(), [0x2a]);
        assert_eq!(r.read_u32_le("b").unwrap(), 1);
        assert_eq!(r.read_u64_le("c").unwrap(), 0xff);
        assert_eq!(r.position(), data.len());
        assert!(r.finish().is_ok());
    }

    #[test]
    fn short_read_is_truncated_and_consumes_nothing() {
        let data = [1u8, 2, 3];
        let mut r = ByteReader::new(&data);
        let err = r.read_u32_le("count").unwrap_err();
        assert_eq!(
            err,
            CodecError::TruncatedInput {
                field: "count",
                needed: 4,
                remaining: 3
            }
        );
        assert_eq!(r.remaining(), 3);
    }

    #[test]
    fn count_larger_than_buffer_is_truncated() {
        let mut data = 3u32.to_le_bytes().to_vec();
        data.extend_from_slice(&[0u8; 64]);
        let mut r = ByteReader::new(&data);
        assert_eq!(
            r.read_count("inputs", 32),
            Err(CodecError::TruncatedInput {
                field: "inputs",
                needed: 96,
                remaining: 64
            })
        );
    }

    #[test]
    fn count_beyond_message_size_is_overflow() {
        let data = u32::MAX.to_le_bytes();
        let mut r = ByteReader::new(&data);
        assert_eq!(
            r.read_count("signatures", 65),
            Err(CodecError::CountOverflow {
                field: "signatures",
                count: u32::MAX
            })
        );
    }

    #[test]
    fn count_that_fits_is_returned() {
        let mut data = 2u32.to_le_bytes().to_vec();
        data.extend_from_slice(&[7u8; 10]);
        let mut r = ByteReader::new(&data);
        assert_eq!(r.read_count("outputs", 5).unwrap(), 2);
        assert_eq!(r.remaining(), 10);
    }

    #[test]
    fn leftover_bytes_fail_finish() {
        let data = [0u8; 5];
        let mut r = ByteReader::new(&data);
        r.read_u32_le("x").unwrap();
        assert_eq!(
            r.finish(),
            Err(CodecError::TrailingBytes {
                offset: 4,
                count: 1
            })
        );
    }
}
