// src/tape/blocks.rs
use crate::error::{TapError, Result};
use crate::tape::TapeLayout;
use crate::types::BlockNumber;
use byteorder::WriteBytesExt;
use std::io::{self, Write};
use std::slice::Chunks;

static ZERO_PADDING: [u8; TapeLayout::BLOCK_DATA_SIZE] = [0; TapeLayout::BLOCK_DATA_SIZE];

/// One numbered slice of payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataBlock<'a> {
    pub number: BlockNumber,
    pub data: &'a [u8],
}

impl DataBlock<'_> {
    /// Zero bytes appended to fill the block body
    pub fn padding(&self) -> usize {
        TapeLayout::BLOCK_DATA_SIZE - self.data.len()
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u8(self.number.value())?;
        writer.write_all(self.data)?;
        writer.write_all(&ZERO_PADDING[..self.padding()])
    }
}

/// Splits a payload into numbered data blocks.
///
/// Blocks are numbered upwards from `first`; the block holding the last
/// chunk is always numbered [`BlockNumber::LAST`] instead.
///
/// ```
/// use kctap::tape::DataBlocks;
///
/// let payload = vec![0x41u8; 300];
/// let numbers: Vec<u8> = DataBlocks::new(&payload, 1)
///     .unwrap()
///     .map(|b| b.number.value())
///     .collect();
/// assert_eq!(numbers, vec![1, 2, 0xFF]);
/// ```
#[derive(Debug, Clone)]
pub struct DataBlocks<'a> {
    chunks: Chunks<'a, u8>,
    next: u8,
}

impl<'a> DataBlocks<'a> {
    pub fn new(payload: &'a [u8], first: u8) -> Result<Self> {
        let blocks = TapeLayout::data_block_count(payload.len());
        let max = TapeLayout::max_data_blocks(first);
        if blocks > max {
            return Err(TapError::TooManyBlocks {
                size: payload.len(),
                blocks,
                max,
            });
        }

        Ok(DataBlocks {
            chunks: payload.chunks(TapeLayout::BLOCK_DATA_SIZE),
            next: first,
        })
    }
}

impl<'a> Iterator for DataBlocks<'a> {
    type Item = DataBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.chunks.next()?;
        let number = if self.chunks.len() == 0 {
            BlockNumber::LAST
        } else {
            BlockNumber(self.next)
        };
        // Capacity was checked up front, so only the sentinel can follow 0xFE
        self.next = self.next.wrapping_add(1);
        Some(DataBlock { number, data })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for DataBlocks<'_> {}
