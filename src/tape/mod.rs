// src/tape/mod.rs
mod blocks;
mod header;
mod layout;

pub use blocks::{DataBlock, DataBlocks};
pub use header::RecordDescriptor;
pub use layout::TapeLayout;
