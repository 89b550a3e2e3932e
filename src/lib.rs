// src/lib.rs
//! # kctap
//!
//! Encoder for KC 85/1 `.TAP` tape images. A TAP image wraps a raw COM
//! memory image in the block structure the KC tape loader reads: a 16-byte
//! signature, one header block describing the program, and numbered
//! 128-byte data blocks, the last one tagged `0xFF`.
//!
//! ## Features
//!
//! - **Streaming**: blocks are written straight to any [`std::io::Write`] sink
//! - **Checked**: name, address range and block count are validated before
//!   the first byte is written
//! - **Atomic files**: [`TapWriter`] never leaves a partial `.tap` behind
//!
//! ## Quick Start
//!
//! ```rust
//! use kctap::*;
//!
//! fn main() -> Result<()> {
//!     let options = EncoderOptions::new(RecordName::new("HELLO")?)
//!         .with_load_address(0x0300)
//!         .with_start_address(0x0300);
//!
//!     let payload = vec![0xC9u8; 130];
//!     let image = TapEncoder::new(options).encode_to_vec(&payload)?;
//!
//!     assert_eq!(image.len(), TapeLayout::tape_len(payload.len()));
//!     Ok(())
//! }
//! ```
//!
//! ### Converting files
//!
//! ```rust,no_run
//! use kctap::*;
//!
//! fn main() -> Result<()> {
//!     let writer = TapWriter::new(EncoderOptions::new(RecordName::new("GAME")?));
//!     let summary = writer.convert("game.com", "game.tap")?;
//!     println!("{} data blocks", summary.data_blocks);
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod tape;
pub mod encoder;
pub mod writer;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{TapError, ErrorKind, Result};

pub use types::{
    BlockNumber,
    FileType,
    RecordName,
};

pub use tape::{
    DataBlock,
    DataBlocks,
    RecordDescriptor,
    TapeLayout,
};

pub use encoder::{
    EncodeSummary,
    EncoderOptions,
    TapEncoder,
};

pub use writer::TapWriter;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use kctap::prelude::*;
    //! ```

    pub use crate::error::{TapError, Result};
    pub use crate::types::RecordName;
    pub use crate::encoder::{EncoderOptions, TapEncoder};
    pub use crate::writer::TapWriter;
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
