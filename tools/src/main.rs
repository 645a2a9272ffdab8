use std::fs;
use std::io::Read as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use stead_tools::{decode_wire_lines, kind_info, parse_log_lines, reports_to_json, reports_to_pretty};

#[derive(Parser)]
#[command(
    name = "stead-tools",
    version,
    about = "stead protocol inspection and log tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode wire lines (typeId|payload) from a file or stdin.
    Decode {
        /// Path to the line file, or `-` for stdin.
        input: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
    /// Parse human-readable log renderings back into messages.
    ParseLog {
        /// Path to the log file, or `-` for stdin.
        input: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
    /// Show registry metadata for a message kind.
    Info {
        /// Numeric type id or kind name.
        kind: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Decode { input, format } => {
            let text = read_input(&input)?;
            let reports = decode_wire_lines(&text);
            print_reports(&reports, format)
        }
        Command::ParseLog { input, format } => {
            let text = read_input(&input)?;
            let reports = parse_log_lines(&text);
            print_reports(&reports, format)
        }
        Command::Info { kind } => {
            let info = kind_info(&kind)?;
            println!("{}", serde_json::to_string_pretty(&info)?);
            Ok(())
        }
    }
}

fn read_input(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

fn print_reports(reports: &[stead_tools::LineReport], format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", reports_to_json(reports)?),
        Format::Pretty => print!("{}", reports_to_pretty(reports)),
    }
    Ok(())
}
