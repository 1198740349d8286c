use std::{
    fs::File,
    io::{self, BufReader, Read, Seek, SeekFrom, Write},
    num::ParseIntError,
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sprite_blob::prelude::*;
use tracing::info;

const DEFAULT_BLOB_PATH: &str = "dist/textures.blob";

#[derive(Parser)]
#[command(name = "sprite-dump")]
#[command(about = "Writes and inspects the sprite texture blob")]
#[command(version)]
struct Cli {
    // No command writes the built-in sprites to the default path
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Write a sprite table to a blob
    Write {
        /// Blob to create or overwrite
        #[arg(short, long, default_value = DEFAULT_BLOB_PATH)]
        output: PathBuf,

        /// Text table to write instead of the built-in sprites
        #[arg(short, long)]
        table: Option<PathBuf>,
    },

    /// Print the header and every record of a blob
    List {
        #[arg(default_value = DEFAULT_BLOB_PATH)]
        path: PathBuf,
    },

    /// Hex dump a range of bytes from a blob
    Inspect {
        /// First byte to dump, decimal or 0x-prefixed hex
        #[arg(value_parser = parse_number)]
        offset: u64,

        /// Number of bytes to dump, decimal or 0x-prefixed hex
        #[arg(value_parser = parse_number)]
        how_much: u64,

        #[arg(short, long, default_value = DEFAULT_BLOB_PATH)]
        path: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Write {
            output: PathBuf::from(DEFAULT_BLOB_PATH),
            table: None,
        }
    }
}

fn parse_number(value: &str) -> Result<u64, ParseIntError> {
    match value.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse::<u64>(),
    }
}

/// Formats up to 16 bytes as a single hex dump line starting at `pos`
fn hex_line(pos: u64, bytes: &[u8]) -> String {
    let mut line = format!("0x{pos:0>10X} | ");

    for (index, byte) in bytes.iter().enumerate() {
        if index == 8 {
            line.push_str("  ");
        }

        line.push_str(&format!("{byte:02X} "));
    }

    line.trim_end().to_string()
}

fn print_hex_values<R: Read + Seek, W: Write>(
    reader: &mut R,
    out: &mut W,
    offset: u64,
    amount: u64,
) -> io::Result<()> {
    let end = reader.seek(SeekFrom::End(0))?;
    let offset_aligned = offset & !0xF;
    let mut amount = amount.saturating_add(offset & 0xF).min(end.saturating_sub(offset_aligned));

    reader.seek(SeekFrom::Start(offset_aligned))?;

    writeln!(out, "             | 00 01 02 03 04 05 06 07   08 09 0A 0B 0C 0D 0E 0F")?;

    while amount > 0 {
        let pos = reader.stream_position()?;

        let amount_this_line = amount.min(16) as usize;
        amount -= amount_this_line as u64;

        let mut buffer = [0u8; 0x10];
        reader.read_exact(&mut buffer[..amount_this_line])?;

        writeln!(out, "{}", hex_line(pos, &buffer[..amount_this_line]))?;
    }

    Ok(())
}

fn print_blob<W: Write>(blob: &Blob, out: &mut W) -> io::Result<()> {
    let header = blob.header();

    writeln!(
        out,
        "canvas {}x{}, {} records",
        header.canvas_width(),
        header.canvas_height(),
        blob.records().len()
    )?;

    for record in blob.records() {
        writeln!(out, "{record} size {}", record.size())?;
    }

    Ok(())
}

fn write(output: PathBuf, table: Option<PathBuf>) -> Result<()> {
    let records = match &table {
        Some(table) => read_table_file(table)
            .with_context(|| format!("Failed to read sprite table {}", table.display()))?,
        None => SPRITES.to_vec(),
    };

    write_blob_file(&output, &records)
        .with_context(|| format!("Failed to write blob {}", output.display()))?;

    info!("Wrote {} sprites to {}", records.len(), output.display());
    Ok(())
}

fn list<W: Write>(path: PathBuf, out: &mut W) -> Result<()> {
    let blob =
        read_blob_file(&path).with_context(|| format!("Failed to read blob {}", path.display()))?;

    print_blob(&blob, out).context("Failed to print blob")
}

fn inspect<W: Write>(path: PathBuf, offset: u64, how_much: u64, out: &mut W) -> Result<()> {
    let mut file = BufReader::new(
        File::open(&path).with_context(|| format!("Failed to open blob {}", path.display()))?,
    );

    print_hex_values(&mut file, out, offset, how_much)
        .with_context(|| format!("Failed to dump blob {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command.unwrap_or_default() {
        Command::Write { output, table } => write(output, table),
        Command::List { path } => list(path, &mut stdout),
        Command::Inspect {
            offset,
            how_much,
            path,
        } => inspect(path, offset, how_much, &mut stdout),
    }
}
