// src/tape/header.rs
use crate::error::{TapError, Result};
use crate::tape::TapeLayout;
use crate::types::{BlockNumber, FileType, RecordName};
use byteorder::WriteBytesExt;
use bytes::{BufMut, BytesMut};
use std::io::Write;

/// Program description carried by the header block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDescriptor {
    pub name: RecordName,
    pub file_type: FileType,
    pub load_address: u16,
    pub end_address: u16,
    pub start_address: u16,
}

impl RecordDescriptor {
    /// Describe a payload of `payload_len` bytes loaded at `load_address`.
    ///
    /// The end address is the address of the last payload byte, so an empty
    /// payload has none and is rejected, as is one running past 0xFFFF.
    pub fn for_payload(name: RecordName, file_type: FileType, load_address: u16,
                       start_address: u16, payload_len: usize) -> Result<Self> {
        if payload_len == 0 {
            return Err(TapError::EmptyPayload);
        }

        let end = load_address as usize + payload_len - 1;
        let end_address = u16::try_from(end).map_err(|_| TapError::AddressOverflow {
            load: load_address,
            size: payload_len,
        })?;

        Ok(RecordDescriptor {
            name,
            file_type,
            load_address,
            end_address,
            start_address,
        })
    }

    /// Number of payload bytes covered by the address range
    pub fn payload_len(&self) -> usize {
        (self.end_address - self.load_address) as usize + 1
    }

    /// The 128-byte header block body.
    pub fn body(&self) -> BytesMut {
        let mut body = BytesMut::with_capacity(TapeLayout::BLOCK_DATA_SIZE);
        body.put_slice(self.name.as_bytes());
        body.put_slice(self.file_type.as_bytes());
        body.put_bytes(0, 2);
        body.put_bytes(0, 3);
        body.put_u8(TapeLayout::HEADER_ADDRESS_COUNT);
        body.put_u16_le(self.load_address);
        body.put_u16_le(self.end_address);
        body.put_u16_le(self.start_address);
        body.put_u8(0);
        body.put_bytes(0, TapeLayout::HEADER_PADDING_SIZE);
        body
    }

    /// Write the complete header block, numbered `block`.
    pub fn write_to<W: Write>(&self, writer: &mut W, block: BlockNumber) -> Result<()> {
        writer.write_u8(block.value())?;
        writer.write_all(&self.body())?;
        Ok(())
    }
}
