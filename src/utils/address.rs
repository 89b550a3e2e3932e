// src/utils/address.rs
use crate::error::{TapError, Result};

/// Parse a 16-bit memory address.
///
/// Accepts the notations common in KC documentation: `0x0300`, `$0300`,
/// `0300h` and plain decimal.
pub fn parse_address(text: &str) -> Result<u16> {
    let trimmed = text.trim();
    let (digits, radix) = if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or_else(|| trimmed.strip_prefix('$'))
    {
        (hex, 16)
    } else if let Some(hex) = trimmed
        .strip_suffix('h')
        .or_else(|| trimmed.strip_suffix('H'))
    {
        (hex, 16)
    } else {
        (trimmed, 10)
    };

    if digits.is_empty() || digits.starts_with('+') {
        return Err(TapError::InvalidAddress(text.to_string()));
    }

    u16::from_str_radix(digits, radix).map_err(|_| TapError::InvalidAddress(text.to_string()))
}
