//! Reading and writing of the sprite texture blob that the game loads at startup
//!
//! A blob is a 12-byte [`BlobHeader`](blob::header::BlobHeader) followed by tightly packed
//! [`SpriteRecord`](blob::record::SpriteRecord)s. Everything is stored in the host's native
//! byte order, exactly as the values are laid out in memory, since the blob is only ever
//! consumed on the machine that produced it.

pub mod prelude {
    pub use super::{
        blob::{
            header::{BlobHeader, CANVAS_HEIGHT, CANVAS_WIDTH},
            read_blob_file,
            record::{Point, SpriteRecord},
            write_blob_file, write_records, Blob,
        },
        error::BlobError,
        table::{parse_table, read_table_file, SPRITES},
    };
}

pub mod blob;
pub mod error;
pub mod table;

mod io;

#[inline(always)]
#[track_caller]
fn single_value_sanity<T: Sized>(bytes: &[u8]) {
    assert!(bytes.len() >= std::mem::size_of::<T>());
}

#[inline(always)]
#[track_caller]
fn slice_sanity<T: Sized>(bytes: &[u8]) {
    assert_eq!(bytes.len() % std::mem::size_of::<T>(), 0x0);
}

/// Trait that enables copying blob values directly to and from their byte representation
///
/// SAFETY: Implementors must be `#[repr(C)]`, contain no padding bytes, and be valid for
///     every possible bit pattern (i.e. only be made of integers and floats)
pub unsafe trait BinaryRepr: Copy + Sized {
    /// Reads a value of this type from the start of `bytes`, which does not need to be aligned
    #[track_caller]
    fn read_from(bytes: &[u8]) -> Self {
        single_value_sanity::<Self>(bytes);

        // SAFETY: The length was checked above and the implementor guarantees that
        //      any bit pattern is a valid value
        unsafe { std::ptr::read_unaligned(bytes.as_ptr().cast::<Self>()) }
    }

    fn cast_bytes(&self) -> &[u8] {
        let ptr = (self as *const Self).cast::<u8>();
        // SAFETY: This slice is the exact size as this value, and there is no padding
        unsafe { std::slice::from_raw_parts(ptr, std::mem::size_of::<Self>()) }
    }

    /// Reads every value of this type out of `bytes`
    ///
    /// Panics if `bytes` is not an exact multiple of the size of this type
    #[track_caller]
    fn read_slice_from(bytes: &[u8]) -> Vec<Self> {
        slice_sanity::<Self>(bytes);

        bytes
            .chunks_exact(std::mem::size_of::<Self>())
            .map(Self::read_from)
            .collect()
    }
}
