//! kc-com2tap
//!
//! Converts a KC 85/1 COM memory image into a .TAP tape image.

use clap::Parser;
use kctap::utils::{encode_record_name, parse_address};
use kctap::{EncoderOptions, TapWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kc-com2tap", version)]
#[command(about = "Convert KC 85/1 COM file to TAP file")]
struct Args {
    /// Name to be used for tape record (8 chars max, usually uppercase)
    #[arg(short = 'n', long = "recordname")]
    record_name: String,

    /// Path to the TAP file to save
    #[arg(short = 'o', long = "outputfilename")]
    output: PathBuf,

    /// Path to the COM file to convert
    input: PathBuf,

    /// Memory address where the COM file is loaded
    #[arg(long, default_value = "0x0300", value_parser = parse_address_arg)]
    load_address: u16,

    /// Memory address of program entry [default: load address]
    #[arg(long, value_parser = parse_address_arg)]
    start_address: Option<u16>,

    /// Block number of the header block
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=0xFE))]
    first_block: u8,

    /// Convert the record name to uppercase
    #[arg(long)]
    uppercase: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_address_arg(s: &str) -> Result<u16, String> {
    parse_address(s).map_err(|e| e.to_string())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> kctap::Result<()> {
    let record_name = encode_record_name(&args.record_name, args.uppercase)?;
    let options = EncoderOptions::new(record_name)
        .with_load_address(args.load_address)
        .with_start_address(args.start_address.unwrap_or(args.load_address))
        .with_first_block(args.first_block);

    TapWriter::new(options).convert(&args.input, &args.output)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(kind = ?err.kind(), "{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsString;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from([
            "kc-com2tap", "--recordname", "TEST", "--outputfilename", "out.tap", "in.com",
        ]).unwrap();

        assert_eq!(args.record_name, "TEST");
        assert_eq!(args.load_address, 0x0300);
        assert_eq!(args.start_address, None);
        assert_eq!(args.first_block, 0);
        assert!(!args.uppercase);
    }

    #[test]
    fn test_addresses() {
        let args = Args::try_parse_from([
            "kc-com2tap", "-n", "X", "-o", "out.tap", "in.com",
            "--load-address", "$8000", "--start-address", "8010h",
        ]).unwrap();

        assert_eq!(args.load_address, 0x8000);
        assert_eq!(args.start_address, Some(0x8010));
    }

    #[test]
    fn test_required_arguments() {
        assert!(Args::try_parse_from(["kc-com2tap", "in.com"]).is_err());
        assert!(Args::try_parse_from(["kc-com2tap", "-n", "X", "in.com"]).is_err());
        assert!(Args::try_parse_from(["kc-com2tap", "-n", "X", "-o", "out.tap"]).is_err());
    }

    #[test]
    fn test_invalid_values() {
        assert!(Args::try_parse_from([
            "kc-com2tap", "-n", "X", "-o", "out.tap", "in.com", "--load-address", "0x10000",
        ]).is_err());
        assert!(Args::try_parse_from([
            "kc-com2tap", "-n", "X", "-o", "out.tap", "in.com", "--first-block", "255",
        ]).is_err());
    }

    #[test]
    fn test_run_converts() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("prog.com");
        let output = dir.path().join("prog.tap");
        std::fs::write(&input, [0u8; 10]).unwrap();

        let args = Args::try_parse_from([
            OsString::from("kc-com2tap"), "-n".into(), "prog".into(), "--uppercase".into(),
            "-o".into(), output.clone().into_os_string(), input.into_os_string(),
        ]).unwrap();
        run(&args).unwrap();

        let image = std::fs::read(&output).unwrap();
        assert_eq!(&image[17..25], b"PROG\0\0\0\0");
    }

    #[test]
    fn test_run_rejects_long_name() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("prog.com");
        let output = dir.path().join("prog.tap");
        std::fs::write(&input, [0u8; 10]).unwrap();

        let args = Args {
            record_name: "NINECHARS".to_string(),
            output: output.clone(),
            input,
            load_address: 0x0300,
            start_address: None,
            first_block: 0,
            uppercase: false,
            verbose: 0,
        };
        assert_eq!(run(&args).unwrap_err().kind(), kctap::ErrorKind::Encoding);
        assert!(!output.exists());
    }
}
