use std::fmt::{self, Display};

use crate::BinaryRepr;

/// A position on the texture atlas, in pixels
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Location of a single sprite on the texture atlas
///
/// The game picks its sprites out of the blob by `id`, then uses the two UV corners to cut the
/// sprite out of the atlas and the origin to decide where the sprite sits relative to the tile
/// it is drawn on. All coordinates are in atlas pixels, with the origin in the upper left corner.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct SpriteRecord {
    /// Identifier the game uses to look up this sprite
    pub id: i32,

    /// Anchor point of the sprite
    pub origin: Point,

    /// Upper left corner of the sprite's rectangle
    pub min_uv: Point,

    /// Lower right corner of the sprite's rectangle
    pub max_uv: Point,
}

// Only 4-byte primitives, so there is nothing for the compiler to pad
const _: () = assert!(std::mem::size_of::<SpriteRecord>() == SpriteRecord::SIZE);

unsafe impl BinaryRepr for SpriteRecord {}

impl SpriteRecord {
    /// Size of a packed record in the blob, in bytes
    pub const SIZE: usize = 0x1C;

    /// Number of scalar fields in a record: the id followed by three coordinate pairs
    pub const FIELD_COUNT: usize = 7;

    pub const fn new(id: i32, origin: Point, min_uv: Point, max_uv: Point) -> Self {
        Self {
            id,
            origin,
            min_uv,
            max_uv,
        }
    }

    /// Builds a record from its fields in blob order
    pub const fn from_fields(
        id: i32,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    ) -> Self {
        Self::new(id, Point::new(x0, y0), Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Size of the sprite's rectangle on the atlas
    pub fn size(&self) -> Point {
        Point::new(self.max_uv.x - self.min_uv.x, self.max_uv.y - self.min_uv.y)
    }
}

/// The fields of a [`SpriteRecord`] in blob order
pub type RecordFields = (i32, f32, f32, f32, f32, f32, f32);

impl From<RecordFields> for SpriteRecord {
    fn from((id, x0, y0, x1, y1, x2, y2): RecordFields) -> Self {
        Self::from_fields(id, x0, y0, x1, y1, x2, y2)
    }
}

impl From<SpriteRecord> for RecordFields {
    fn from(record: SpriteRecord) -> Self {
        let SpriteRecord {
            id,
            origin,
            min_uv,
            max_uv,
        } = record;

        (id, origin.x, origin.y, min_uv.x, min_uv.y, max_uv.x, max_uv.y)
    }
}

impl Display for SpriteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:<4} origin {} uv {} -> {}",
            self.id, self.origin, self.min_uv, self.max_uv
        )
    }
}
