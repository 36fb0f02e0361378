use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::path::Path;

use legv8_disasm::{decode_image, decode_tokens, load_raw_bin, Endian};
use legv8_rs::{normalize_hex, InputMode};

#[derive(Parser, Debug)]
#[command(author, version, about = "LEGv8 disassembler CLI", long_about = None)]
struct Cli {
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE", global = true)]
    out: Option<String>,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode hex (default) or binary tokens; reads stdin when none are given
    Words {
        /// Tokens are binary strings instead of hex
        #[arg(long)]
        binary: bool,
        #[arg(value_name = "TOKEN")]
        tokens: Vec<String>,
    },
    /// Disassemble a raw image of 32-bit words
    File {
        /// Input binary path
        #[arg(value_name = "BINFILE")]
        input: String,
        /// Load address of the first word (hex or dec)
        #[arg(long, default_value = "0")]
        base: String,
        /// Skip N bytes at start of file before loading
        #[arg(long, default_value_t = 0usize)]
        skip: usize,
        /// Limit bytes loaded (default: to EOF after --skip)
        #[arg(long)]
        len: Option<usize>,
        /// Words are stored big-endian
        #[arg(long)]
        big_endian: bool,
        /// Show instruction bytes (text format only)
        #[arg(long)]
        show_bytes: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Address argument: `0x`-prefixed hex, otherwise decimal.
fn parse_addr(s: &str) -> Result<u32> {
    let s = s.trim();
    if s.starts_with("0x") || s.starts_with("0X") {
        Ok(normalize_hex(s)?.value())
    } else {
        s.parse::<u32>().with_context(|| format!("invalid address: {s}"))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let rendered: String = match cli.cmd {
        Command::Words { binary, tokens } => {
            let mode = if binary { InputMode::Binary } else { InputMode::Hex };
            let input = if tokens.is_empty() {
                std::io::read_to_string(std::io::stdin())?
            } else {
                tokens.join(" ")
            };
            let lines = decode_tokens(&input, mode);
            anyhow::ensure!(!lines.is_empty(), "no tokens to decode");
            match cli.format {
                OutputFormat::Json => serde_json::to_string_pretty(&lines)? + "\n",
                OutputFormat::Text => lines.iter().map(|l| l.render_text() + "\n").collect(),
            }
        }
        Command::File { input, base, skip, len, big_endian, show_bytes } => {
            let base = parse_addr(&base)?;
            let img = load_raw_bin(Path::new(&input), base, skip, len)?;
            let endian = if big_endian { Endian::Big } else { Endian::Little };
            let lines = decode_image(&img, endian);
            tracing::debug!(words = lines.len(), base, "decoded image");
            match cli.format {
                OutputFormat::Json => serde_json::to_string_pretty(&lines)? + "\n",
                OutputFormat::Text => lines.iter().map(|l| l.render_text(show_bytes) + "\n").collect(),
            }
        }
    };

    if let Some(path) = cli.out { std::fs::write(path, rendered)?; } else { print!("{}", rendered); }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_addr_hex_and_dec() {
        assert_eq!(parse_addr("0x10").unwrap(), 0x10);
        assert_eq!(parse_addr("0X40000000").unwrap(), 0x4000_0000);
        assert_eq!(parse_addr("16").unwrap(), 16);
        assert!(parse_addr("zz").is_err());
        assert!(parse_addr("0x100000000").is_err());
    }

    #[test]
    fn cli_parses_words_and_file() {
        let cli = Cli::try_parse_from(["legv8-disasm", "words", "--binary", "101", "11"]).unwrap();
        match cli.cmd {
            Command::Words { binary, tokens } => {
                assert!(binary);
                assert_eq!(tokens, vec!["101", "11"]);
            }
            other => panic!("unexpected {other:?}"),
        }
        let cli = Cli::try_parse_from(["legv8-disasm", "file", "a.bin", "--base", "0x400", "--format", "json"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(matches!(cli.cmd, Command::File { ref base, .. } if base == "0x400"));
    }
}
