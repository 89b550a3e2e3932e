// src/utils/string_encoding.rs
use crate::error::Result;
use crate::types::RecordName;

/// Build a record name from user input, optionally folding ASCII letters to
/// uppercase as the KC tape loader expects for typed names.
pub fn encode_record_name(name: &str, uppercase: bool) -> Result<RecordName> {
    if uppercase {
        RecordName::new(name.to_ascii_uppercase())
    } else {
        RecordName::new(name)
    }
}
