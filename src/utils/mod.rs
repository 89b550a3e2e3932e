// src/utils/mod.rs
mod address;
mod string_encoding;

pub use address::*;
pub use string_encoding::*;
