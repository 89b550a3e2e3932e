// demos/basic_encode.rs
use kctap::*;

fn main() -> Result<()> {
    // A tiny Z80 program: LD A,'*' / CALL 0xF003 (output char) / RET
    let program: Vec<u8> = vec![0x3E, 0x2A, 0xCD, 0x03, 0xF0, 0xC9];

    let options = EncoderOptions::new(RecordName::new("STAR")?)
        .with_load_address(0x0300)
        .with_start_address(0x0300);

    std::fs::create_dir_all("demos/output").map_err(TapError::Output)?;
    let summary = TapWriter::new(options).write_to_path(&program, "demos/output/star.tap")?;

    println!(
        "Wrote {} bytes: {} {:#06x}-{:#06x}, {} data block(s)",
        summary.bytes_written,
        summary.record.name,
        summary.record.load_address,
        summary.record.end_address,
        summary.data_blocks
    );

    Ok(())
}
