// src/encoder/tap_encoder.rs
use crate::encoder::EncoderOptions;
use crate::error::{TapError, Result};
use crate::tape::{DataBlocks, RecordDescriptor, TapeLayout};
use std::io::Write;
use tracing::{debug, trace};

/// Outcome of a successful encode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeSummary {
    pub record: RecordDescriptor,
    pub data_blocks: usize,
    pub bytes_written: u64,
}

/// Streams a payload as a KC .TAP image into any [`Write`] sink.
///
/// All checks happen before the first byte is written, so a failed encode
/// leaves the sink untouched unless the sink itself fails.
#[derive(Debug, Clone)]
pub struct TapEncoder {
    options: EncoderOptions,
}

impl TapEncoder {
    pub fn new(options: EncoderOptions) -> Self {
        TapEncoder { options }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Header descriptor for a payload of `payload_len` bytes
    pub fn describe(&self, payload_len: usize) -> Result<RecordDescriptor> {
        RecordDescriptor::for_payload(
            self.options.record_name,
            self.options.file_type,
            self.options.load_address,
            self.options.start_address,
            payload_len,
        )
    }

    fn first_data_block(&self) -> Result<u8> {
        let first = self.options.first_block;
        if first.is_last() {
            return Err(TapError::InvalidBlockNumber(first.value()));
        }
        Ok(first.value() + 1)
    }

    pub fn encode<W: Write>(&self, payload: &[u8], sink: &mut W) -> Result<EncodeSummary> {
        let record = self.describe(payload.len())?;
        let blocks = DataBlocks::new(payload, self.first_data_block()?)?;
        let data_blocks = blocks.len();

        debug!(
            name = %record.name,
            load = format_args!("{:#06x}", record.load_address),
            end = format_args!("{:#06x}", record.end_address),
            start = format_args!("{:#06x}", record.start_address),
            data_blocks,
            "Encoding tape image"
        );

        sink.write_all(TapeLayout::SIGNATURE)?;
        record.write_to(sink, self.options.first_block)?;

        for block in blocks {
            trace!(block = %block.number, len = block.data.len(), "Writing data block");
            block.write_to(sink)?;
        }

        Ok(EncodeSummary {
            record,
            data_blocks,
            bytes_written: TapeLayout::tape_len(payload.len()) as u64,
        })
    }

    /// Encode into a freshly allocated buffer.
    pub fn encode_to_vec(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(TapeLayout::tape_len(payload.len()));
        self.encode(payload, &mut out)?;
        Ok(out)
    }
}
