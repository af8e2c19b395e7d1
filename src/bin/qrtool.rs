use clap::{Parser, Subcommand};
use qr_payload::tools::{ToolError, parse_hex, to_hex};
use qr_payload::{PayloadReport, decode_batch, decode_with_report};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR payload decoding tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode one codeword buffer, given as hex or read from a binary file
    Decode {
        /// Codewords as hex digits (whitespace ignored)
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        hex: Option<String>,
        /// File holding the raw codeword bytes
        #[arg(long)]
        file: Option<PathBuf>,
        /// Print halt reason, segment count and bits consumed
        #[arg(long)]
        report: bool,
        /// Print the payload as hex instead of lossy UTF-8
        #[arg(long)]
        raw: bool,
    },
    /// Decode a file of hex codeword buffers, one per line
    Batch {
        #[arg(long)]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::builder().format_timestamp(None).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Decode {
            hex,
            file,
            report,
            raw,
        } => decode_cmd(hex.as_deref(), file.as_deref(), report, raw),
        Command::Batch { file } => batch_cmd(&file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("qrtool: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn decode_cmd(
    hex: Option<&str>,
    file: Option<&Path>,
    report: bool,
    raw: bool,
) -> Result<(), ToolError> {
    let codewords = match (hex, file) {
        (Some(hex), _) => parse_hex(hex)?,
        (None, Some(path)) => std::fs::read(path)?,
        (None, None) => Vec::new(),
    };
    log::info!("Decoding {} codewords", codewords.len());

    let result = decode_with_report(&codewords);
    print_payload(&result.data, raw);
    if report {
        print_report(&result);
    }
    Ok(())
}

fn batch_cmd(file: &Path) -> Result<(), ToolError> {
    let content = std::fs::read_to_string(file)?;
    let mut buffers = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        buffers.push(parse_hex(line)?);
    }
    log::info!("Decoding {} buffers from {}", buffers.len(), file.display());

    for data in decode_batch(&buffers) {
        println!("{}", to_hex(&data));
    }
    Ok(())
}

fn print_payload(data: &[u8], raw: bool) {
    if raw {
        println!("{}", to_hex(data));
    } else {
        println!("{}", String::from_utf8_lossy(data));
    }
}

fn print_report(report: &PayloadReport) {
    println!(
        "bytes={} segments={} bits_consumed={} halt={:?}",
        report.data.len(),
        report.segments,
        report.bits_consumed,
        report.halt
    );
}
