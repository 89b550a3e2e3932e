// src/types.rs
use crate::error::{TapError, Result};
use std::fmt;

/// Eight-byte record name stored in the header block.
///
/// Shorter names are padded with trailing zero bytes. Longer names are
/// rejected instead of truncated, so a name never silently changes on tape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RecordName([u8; RecordName::LEN]);

impl RecordName {
    pub const LEN: usize = 8;

    pub fn new(name: impl AsRef<[u8]>) -> Result<Self> {
        let name = name.as_ref();
        if name.len() > Self::LEN {
            return Err(TapError::RecordNameTooLong {
                length: name.len(),
                max: Self::LEN,
            });
        }

        let mut bytes = [0u8; Self::LEN];
        bytes[..name.len()].copy_from_slice(name);
        Ok(RecordName(bytes))
    }

    /// The padded on-tape representation
    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// The name without its zero padding
    pub fn trimmed(&self) -> &[u8] {
        let end = self.0.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        &self.0[..end]
    }
}

impl TryFrom<&str> for RecordName {
    type Error = TapError;

    fn try_from(value: &str) -> Result<Self> {
        RecordName::new(value)
    }
}

impl fmt::Display for RecordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.trimmed()))
    }
}

/// Three-character file type tag of the header block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileType([u8; 3]);

impl FileType {
    pub const COM: FileType = FileType(*b"COM");

    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }
}

impl Default for FileType {
    fn default() -> Self {
        FileType::COM
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// One-byte block index written in front of every block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockNumber(pub u8);

impl BlockNumber {
    /// Marks the block carrying the last chunk of payload
    pub const LAST: BlockNumber = BlockNumber(0xFF);

    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<u8> for BlockNumber {
    fn from(value: u8) -> Self {
        BlockNumber(value)
    }
}

impl fmt::Display for BlockNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_name_padding() {
        let name = RecordName::new("TEST").unwrap();
        assert_eq!(name.as_bytes(), b"TEST\0\0\0\0");
        assert_eq!(name.trimmed(), b"TEST");
        assert_eq!(name.to_string(), "TEST");
    }

    #[test]
    fn test_record_name_exact_length() {
        let name = RecordName::new("ABCDEFGH").unwrap();
        assert_eq!(name.as_bytes(), b"ABCDEFGH");
    }

    #[test]
    fn test_record_name_too_long() {
        match RecordName::new("TOOLONGNAME") {
            Err(TapError::RecordNameTooLong { length, max }) => {
                assert_eq!(length, 11);
                assert_eq!(max, 8);
            }
            other => panic!("Expected RecordNameTooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_record_name_empty() {
        let name = RecordName::try_from("").unwrap();
        assert_eq!(name.as_bytes(), &[0u8; 8]);
        assert!(name.trimmed().is_empty());
    }

    #[test]
    fn test_block_number() {
        assert!(BlockNumber::LAST.is_last());
        assert!(!BlockNumber(1).is_last());
        assert_eq!(BlockNumber::from(0xFE).value(), 0xFE);
        assert_eq!(BlockNumber(1).to_string(), "0x01");
    }

    #[test]
    fn test_file_type_default() {
        assert_eq!(FileType::default(), FileType::COM);
        assert_eq!(FileType::COM.as_bytes(), b"COM");
        assert_eq!(FileType::COM.to_string(), "COM");
    }
}
