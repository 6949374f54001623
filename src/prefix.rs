//! File Prefix Reader
//!
//! Reads at most `MAX_SIGNATURE_LEN` bytes from the start of a file or
//! reader into a fixed buffer. Only the bytes actually read are exposed;
//! the unfilled tail of the buffer is never used for matching.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Serialize;

use crate::error::DetectError;
use crate::rules::MAX_SIGNATURE_LEN;

/// Leading bytes of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
    bytes: [u8; MAX_SIGNATURE_LEN],
    len: usize,
}

/// How much of the prefix could be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "read")]
pub enum ReadOutcome {
    /// All `MAX_SIGNATURE_LEN` bytes were read
    Complete,
    /// Input ended early
    Partial { bytes_read: usize },
}

impl Prefix {
    /// Take up to `MAX_SIGNATURE_LEN` bytes from an in-memory slice
    pub fn from_slice(data: &[u8]) -> Self {
        let len = data.len().min(MAX_SIGNATURE_LEN);
        let mut bytes = [0u8; MAX_SIGNATURE_LEN];
        bytes[..len].copy_from_slice(&data[..len]);
        Self { bytes, len }
    }

    /// Read up to `MAX_SIGNATURE_LEN` bytes, stopping early at end of input
    pub fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut bytes = [0u8; MAX_SIGNATURE_LEN];
        let mut len = 0usize;

        while len < bytes.len() {
            match reader.read(&mut bytes[len..]) {
                Ok(0) => break,
                Ok(n) => len += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(Self { bytes, len })
    }

    /// Open `path` and read its prefix. The file is closed before returning.
    pub fn read_path(path: &Path) -> Result<Self, DetectError> {
        let mut file = File::open(path).map_err(|source| DetectError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Self::read_from(&mut file).map_err(|source| DetectError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Bytes actually read
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the full prefix was available
    pub fn is_complete(&self) -> bool {
        self.len == MAX_SIGNATURE_LEN
    }

    pub fn outcome(&self) -> ReadOutcome {
        if self.is_complete() {
            ReadOutcome::Complete
        } else {
            ReadOutcome::Partial {
                bytes_read: self.len,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reader that hands out one byte per call and is interrupted once
    struct Trickle<'a> {
        data: &'a [u8],
        interrupted: bool,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            if self.data.is_empty() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.data[0];
            self.data = &self.data[1..];
            Ok(1)
        }
    }

    #[test]
    fn test_from_slice_truncates() {
        let prefix = Prefix::from_slice(b"hello");
        assert_eq!(prefix.as_bytes(), b"hell");
        assert_eq!(prefix.outcome(), ReadOutcome::Complete);
    }

    #[test]
    fn test_short_input_is_partial() {
        let prefix = Prefix::from_slice(&[0x00, 0x00, 0xFE]);
        assert_eq!(prefix.len(), 3);
        assert_eq!(prefix.outcome(), ReadOutcome::Partial { bytes_read: 3 });
    }

    #[test]
    fn test_read_from_fills_across_short_reads() {
        let mut reader = Trickle {
            data: &[0xEF, 0xBB, 0xBF, 0x41, 0x42],
            interrupted: false,
        };
        let prefix = Prefix::read_from(&mut reader).unwrap();

        assert_eq!(prefix.as_bytes(), &[0xEF, 0xBB, 0xBF, 0x41]);
        assert!(prefix.is_complete());
    }

    #[test]
    fn test_read_from_empty() {
        let prefix = Prefix::read_from(&mut io::empty()).unwrap();
        assert!(prefix.is_empty());
        assert_eq!(prefix.outcome(), ReadOutcome::Partial { bytes_read: 0 });
    }

    #[test]
    fn test_read_path_missing_file() {
        let err = Prefix::read_path(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, DetectError::Open { .. }));
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
