//! The sprite table written into the blob, and a plain-text format for supplying a different one
//!
//! A text table has one record per line, with the seven fields of a
//! [`SpriteRecord`] separated by commas, in blob order:
//!
//! ```text
//! # id, origin x, origin y, min x, min y, max x, max y
//! 1, 16, 56, 0, 0, 32, 64
//! 11, 36, 164, 32, 160, 40, 168  # floor
//! ```

use std::{fs, path::Path, str::FromStr};

use tracing::debug;

use crate::{blob::record::SpriteRecord, error::BlobError};

/// Sprite ids the game looks sprites up by
pub mod ids {
    pub const PLAYER_DOWN: i32 = 1;
    pub const PLAYER_RIGHT: i32 = 2;
    pub const PLAYER_LEFT: i32 = 3;
    pub const PLAYER_UP: i32 = 4;
    pub const WIRE_VERTICAL: i32 = 5;
    pub const WIRE_HORIZONTAL: i32 = 6;
    pub const WIRE_UP_RIGHT: i32 = 7;
    pub const WIRE_UP_LEFT: i32 = 8;
    pub const WIRE_DOWN_RIGHT: i32 = 9;
    pub const WIRE_DOWN_LEFT: i32 = 10;
    pub const FLOOR: i32 = 11;
    pub const WALL: i32 = 12;
    pub const SWEEPER: i32 = 13;
}

const fn sprite(id: i32, x0: f32, y0: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> SpriteRecord {
    SpriteRecord::from_fields(id, x0, y0, x1, y1, x2, y2)
}

/// The sprites on the game's texture atlas
pub const SPRITES: [SpriteRecord; 13] = [
    sprite(ids::PLAYER_DOWN, 16.0, 56.0, 0.0, 0.0, 32.0, 64.0),
    sprite(ids::PLAYER_RIGHT, 80.0, 56.0, 0.0, 64.0, 96.0, 64.0),
    sprite(ids::PLAYER_LEFT, 80.0, 120.0, 64.0, 64.0, 96.0, 128.0),
    sprite(ids::PLAYER_UP, 16.0, 120.0, 0.0, 64.0, 32.0, 128.0),
    sprite(ids::WIRE_VERTICAL, 212.0, 4.0, 208.0, 0.0, 216.0, 8.0),
    sprite(ids::WIRE_HORIZONTAL, 204.0, 12.0, 200.0, 8.0, 208.0, 16.0),
    sprite(ids::WIRE_UP_RIGHT, 220.0, 12.0, 216.0, 8.0, 224.0, 16.0),
    sprite(ids::WIRE_UP_LEFT, 212.0, 12.0, 208.0, 8.0, 216.0, 16.0),
    sprite(ids::WIRE_DOWN_RIGHT, 220.0, 44.0, 216.0, 40.0, 224.0, 48.0),
    sprite(ids::WIRE_DOWN_LEFT, 212.0, 44.0, 208.0, 40.0, 216.0, 48.0),
    sprite(ids::FLOOR, 36.0, 164.0, 32.0, 160.0, 40.0, 168.0),
    sprite(ids::WALL, 28.0, 172.0, 24.0, 168.0, 32.0, 176.0),
    sprite(ids::SWEEPER, 136.0, 224.0, 96.0, 184.0, 184.0, 256.0),
];

fn parse_field<T: FromStr>(
    line: usize,
    field: usize,
    value: &str,
    expected: &'static str,
) -> Result<T, BlobError> {
    value.parse().map_err(|_| BlobError::InvalidField {
        line,
        field,
        value: value.to_string(),
        expected,
    })
}

fn parse_record(line: usize, text: &str) -> Result<SpriteRecord, BlobError> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();

    if fields.len() != SpriteRecord::FIELD_COUNT {
        return Err(BlobError::FieldCount {
            line,
            found: fields.len(),
        });
    }

    let id = parse_field::<i32>(line, 1, fields[0], "32-bit integer")?;

    let mut coords = [0f32; 6];
    for (index, (coord, value)) in coords.iter_mut().zip(&fields[1..]).enumerate() {
        *coord = parse_field::<f32>(line, index + 2, value, "number")?;
    }

    let [x0, y0, x1, y1, x2, y2] = coords;
    Ok(SpriteRecord::from_fields(id, x0, y0, x1, y1, x2, y2))
}

/// Parses a text table, keeping the records in the order they appear
///
/// Line and field numbers in errors are 1-based.
pub fn parse_table(text: &str) -> Result<Vec<SpriteRecord>, BlobError> {
    let mut records = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        records.push(parse_record(index + 1, content)?);
    }

    Ok(records)
}

/// Reads and parses the text table stored in the file at `path`
pub fn read_table_file(path: impl AsRef<Path>) -> Result<Vec<SpriteRecord>, BlobError> {
    let path = path.as_ref();
    let records = parse_table(&fs::read_to_string(path)?)?;

    debug!(path = %path.display(), count = records.len(), "read sprite table");
    Ok(records)
}
