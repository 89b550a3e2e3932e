// src/encoder/mod.rs
mod options;
mod tap_encoder;

pub use options::EncoderOptions;
pub use tap_encoder::{EncodeSummary, TapEncoder};
