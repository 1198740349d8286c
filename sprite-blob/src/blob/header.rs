use std::io::{self, Read, Write};

use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};

use crate::error::BlobError;

/// Width of the texture atlas the sprite coordinates refer to, in pixels
pub const CANVAS_WIDTH: i32 = 400;

/// Height of the texture atlas the sprite coordinates refer to, in pixels
pub const CANVAS_HEIGHT: i32 = 300;

/// The first 12 bytes of every blob
///
/// The canvas size is used by the game to turn the pixel coordinates of each
/// [`SpriteRecord`](super::record::SpriteRecord) into normalized UVs.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BlobHeader {
    canvas_width: i32,
    canvas_height: i32,
    record_count: i32,
}

const _: () = assert!(std::mem::size_of::<BlobHeader>() == BlobHeader::SIZE);

impl BlobHeader {
    /// Size of the header in the blob, in bytes
    pub const SIZE: usize = 0xC;

    /// Creates the header for a blob holding `record_count` records
    pub fn new(record_count: usize) -> Result<Self, BlobError> {
        let record_count =
            i32::try_from(record_count).map_err(|_| BlobError::TooManyRecords(record_count))?;

        Ok(Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            record_count,
        })
    }

    pub fn canvas_width(&self) -> i32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> i32 {
        self.canvas_height
    }

    /// The number of records following the header
    pub fn record_count(&self) -> Result<usize, BlobError> {
        usize::try_from(self.record_count).map_err(|_| BlobError::NegativeCount(self.record_count))
    }

    pub fn read<R: Read>(reader: &mut R) -> Result<Self, BlobError> {
        let mut read = || -> Result<Self, io::Error> {
            Ok(Self {
                canvas_width: reader.read_i32::<NativeEndian>()?,
                canvas_height: reader.read_i32::<NativeEndian>()?,
                record_count: reader.read_i32::<NativeEndian>()?,
            })
        };

        read().map_err(|err| match err.kind() {
            io::ErrorKind::UnexpectedEof => BlobError::MissingHeader,
            _ => BlobError::Io(err),
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), io::Error> {
        writer.write_i32::<NativeEndian>(self.canvas_width)?;
        writer.write_i32::<NativeEndian>(self.canvas_height)?;
        writer.write_i32::<NativeEndian>(self.record_count)
    }
}
