// src/tape/layout.rs

/// Byte layout of a KC .TAP image
#[derive(Debug, Clone, Copy)]
pub struct TapeLayout;

impl TapeLayout {
    pub const SIGNATURE: &'static [u8; 16] = b"\xC3KC-TAPE by AF. ";
    pub const SIGNATURE_SIZE: usize = 16;

    /// Body bytes carried by every block
    pub const BLOCK_DATA_SIZE: usize = 128;
    /// Block number byte plus body
    pub const BLOCK_SIZE: usize = 1 + Self::BLOCK_DATA_SIZE;

    /// Structured part of the header body; the rest is zero padding.
    pub const HEADER_FIELDS_SIZE: usize = 24;
    pub const HEADER_PADDING_SIZE: usize = Self::BLOCK_DATA_SIZE - Self::HEADER_FIELDS_SIZE;
    /// Number of address words following the marker (load, end, start)
    pub const HEADER_ADDRESS_COUNT: u8 = 0x03;

    // Offsets inside the header body (after the block number byte)
    pub const NAME_OFFSET: usize = 0;
    pub const FILE_TYPE_OFFSET: usize = 8;
    pub const ADDRESS_COUNT_OFFSET: usize = 16;
    pub const LOAD_ADDRESS_OFFSET: usize = 17;
    pub const END_ADDRESS_OFFSET: usize = 19;
    pub const START_ADDRESS_OFFSET: usize = 21;

    /// Number of data blocks needed for a payload of `payload_len` bytes.
    pub fn data_block_count(payload_len: usize) -> usize {
        payload_len.div_ceil(Self::BLOCK_DATA_SIZE)
    }

    /// Total size of the image for a non-empty payload.
    pub fn tape_len(payload_len: usize) -> usize {
        Self::SIGNATURE_SIZE + Self::BLOCK_SIZE * (1 + Self::data_block_count(payload_len))
    }

    /// Maximum number of data blocks when counting starts at `first`.
    ///
    /// Counted blocks run from `first` up to 0xFE, then one sentinel block.
    pub fn max_data_blocks(first: u8) -> usize {
        0x100 - first as usize
    }
}
