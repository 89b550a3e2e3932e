// src/writer/sync_writer.rs
use crate::encoder::{EncodeSummary, EncoderOptions, TapEncoder};
use crate::error::{TapError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

#[cfg(feature = "mmap")]
use memmap2::Mmap;

/// Converts COM files on disk into TAP files.
///
/// The image is written to a temporary file next to the destination and
/// only renamed into place once it is complete, so a failed conversion
/// never leaves a partial TAP file behind.
#[derive(Debug, Clone)]
pub struct TapWriter {
    encoder: TapEncoder,
}

impl TapWriter {
    pub fn new(options: EncoderOptions) -> Self {
        TapWriter {
            encoder: TapEncoder::new(options),
        }
    }

    pub fn encoder(&self) -> &TapEncoder {
        &self.encoder
    }

    /// Read `input` completely and write its TAP image to `output`.
    pub fn convert(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<EncodeSummary> {
        let input = input.as_ref();
        let payload = fs::read(input).map_err(TapError::Input)?;
        self.write_payload(input, &payload, output.as_ref())
    }

    /// Like [`convert`](Self::convert), but maps the input file instead of reading it.
    #[cfg(feature = "mmap")]
    pub fn convert_mmap(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<EncodeSummary> {
        let input = input.as_ref();
        let file = File::open(input).map_err(TapError::Input)?;
        let payload = unsafe { Mmap::map(&file).map_err(TapError::Input)? };
        self.write_payload(input, &payload, output.as_ref())
    }

    /// Encode `payload` into a new file at `output`.
    pub fn write_to_path(&self, payload: &[u8], output: impl AsRef<Path>) -> Result<EncodeSummary> {
        let output = output.as_ref();
        let directory = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(directory)?;
        let summary = {
            let mut sink = BufWriter::new(temp.as_file_mut());
            let summary = self.encoder.encode(payload, &mut sink)?;
            sink.flush()?;
            summary
        };
        temp.as_file().sync_all()?;
        persist(temp, output)?;

        Ok(summary)
    }

    fn write_payload(&self, input: &Path, payload: &[u8], output: &Path) -> Result<EncodeSummary> {
        let summary = self.write_to_path(payload, output)?;
        info!(
            input = %input.display(),
            output = %output.display(),
            name = %summary.record.name,
            bytes = payload.len(),
            blocks = summary.data_blocks,
            "Converted COM file to tape image"
        );
        Ok(summary)
    }
}

fn persist(temp: NamedTempFile, output: &Path) -> Result<File> {
    temp.persist(output).map_err(|err| TapError::Output(err.error))
}
