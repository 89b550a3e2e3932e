// src/error.rs
use std::io;
use thiserror::Error;

/// Broad failure category of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The COM image could not be read.
    Input,
    /// The payload or descriptor cannot be laid out as a TAP image.
    Encoding,
    /// The TAP image could not be written.
    Output,
}

#[derive(Error, Debug)]
pub enum TapError {
    #[error("Failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("Record name is {length} bytes long, at most {max} allowed")]
    RecordNameTooLong { length: usize, max: usize },

    #[error("Input is empty, nothing to put on tape")]
    EmptyPayload,

    #[error("Payload of {size} bytes needs {blocks} data blocks, at most {max} can be numbered")]
    TooManyBlocks { size: usize, blocks: usize, max: usize },

    #[error("End address overflows: load address {load:#06x} + {size} bytes runs past 0xFFFF")]
    AddressOverflow { load: u16, size: usize },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid block number: {0}")]
    InvalidBlockNumber(u8),
}

impl TapError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TapError::Input(_) => ErrorKind::Input,
            TapError::Output(_) => ErrorKind::Output,
            TapError::RecordNameTooLong { .. }
            | TapError::EmptyPayload
            | TapError::TooManyBlocks { .. }
            | TapError::AddressOverflow { .. }
            | TapError::InvalidAddress(_)
            | TapError::InvalidBlockNumber(_) => ErrorKind::Encoding,
        }
    }
}

pub type Result<T> = std::result::Result<T, TapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let input = TapError::Input(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert_eq!(input.kind(), ErrorKind::Input);

        let output: TapError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(output.kind(), ErrorKind::Output);

        assert_eq!(TapError::EmptyPayload.kind(), ErrorKind::Encoding);
        assert_eq!(TapError::RecordNameTooLong { length: 9, max: 8 }.kind(), ErrorKind::Encoding);
        assert_eq!(TapError::AddressOverflow { load: 0xFF00, size: 512 }.kind(), ErrorKind::Encoding);
    }

    #[test]
    fn test_error_messages() {
        let err = TapError::AddressOverflow { load: 0x0300, size: 70000 };
        assert_eq!(
            err.to_string(),
            "End address overflows: load address 0x0300 + 70000 bytes runs past 0xFFFF"
        );

        let err = TapError::RecordNameTooLong { length: 12, max: 8 };
        assert_eq!(err.to_string(), "Record name is 12 bytes long, at most 8 allowed");
    }
}
