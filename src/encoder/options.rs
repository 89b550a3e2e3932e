// src/encoder/options.rs
use crate::types::{BlockNumber, FileType, RecordName};

/// Settings for one COM to TAP conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderOptions {
    pub record_name: RecordName,
    pub file_type: FileType,
    /// Memory address the payload is loaded to
    pub load_address: u16,
    /// Program entry point
    pub start_address: u16,
    /// Number of the header block; data blocks count on from here
    pub first_block: BlockNumber,
}

impl EncoderOptions {
    pub const DEFAULT_LOAD_ADDRESS: u16 = 0x0300;
    pub const DEFAULT_START_ADDRESS: u16 = 0x0300;
    pub const DEFAULT_FIRST_BLOCK: BlockNumber = BlockNumber(0);

    pub fn new(record_name: RecordName) -> Self {
        EncoderOptions {
            record_name,
            file_type: FileType::COM,
            load_address: Self::DEFAULT_LOAD_ADDRESS,
            start_address: Self::DEFAULT_START_ADDRESS,
            first_block: Self::DEFAULT_FIRST_BLOCK,
        }
    }

    pub fn with_load_address(mut self, address: u16) -> Self {
        self.load_address = address;
        self
    }

    pub fn with_start_address(mut self, address: u16) -> Self {
        self.start_address = address;
        self
    }

    pub fn with_first_block(mut self, block: u8) -> Self {
        self.first_block = BlockNumber(block);
        self
    }
}

impl Default for EncoderOptions {
    fn default() -> Self {
        EncoderOptions::new(RecordName::default())
    }
}
