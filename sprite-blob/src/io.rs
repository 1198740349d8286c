use std::io::{self, Write};

use crate::BinaryRepr;

/// Extension trait to allow easier writing of blob data
pub(crate) trait WriteBinExt: Write {
    fn write_binary<T: BinaryRepr>(&mut self, value: &T) -> Result<(), io::Error> {
        self.write_all(value.cast_bytes())
    }
}

impl<W: Write> WriteBinExt for W {}

/// Simple reader that reads over a slice of borrowed bytes,
/// copying values out of it as it goes
pub(crate) struct BorrowedReader<'a> {
    data: &'a [u8],
    cursor: usize,
}

impl<'a> BorrowedReader<'a> {
    /// Creates a new borrowed reader, with a cursor of `0`
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, cursor: 0 }
    }

    /// The number of bytes left after the cursor
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// The number of whole values of `T` left after the cursor
    pub fn remaining_count<T: Sized>(&self) -> usize {
        self.remaining() / std::mem::size_of::<T>()
    }

    /// Copies `count` values of `T` out at the cursor and advances past them
    ///
    /// Panics if fewer than `count` values remain
    #[track_caller]
    pub fn read_vec<T: BinaryRepr>(&mut self, count: usize) -> Vec<T> {
        let end = self.cursor + std::mem::size_of::<T>() * count;
        let values = T::read_slice_from(&self.data[self.cursor..end]);
        self.cursor = end;
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(C)]
    #[derive(Debug, Copy, Clone, PartialEq)]
    struct Pair {
        a: i32,
        b: f32,
    }

    unsafe impl BinaryRepr for Pair {}

    #[test]
    fn write_binary_uses_memory_layout() {
        let mut out = Vec::new();
        out.write_binary(&Pair { a: 7, b: 1.5 }).unwrap();

        let mut expected = 7i32.to_ne_bytes().to_vec();
        expected.extend_from_slice(&1.5f32.to_ne_bytes());
        assert_eq!(out, expected);
    }

    #[test]
    fn borrowed_reader_reads_unaligned_values() {
        let mut bytes = vec![0xFFu8];
        bytes.write_binary(&Pair { a: 1, b: 2.0 }).unwrap();
        bytes.write_binary(&Pair { a: -3, b: 4.5 }).unwrap();

        let mut reader = BorrowedReader::new(&bytes[1..]);
        assert_eq!(reader.remaining_count::<Pair>(), 2);
        assert_eq!(reader.read_vec::<Pair>(1), vec![Pair { a: 1, b: 2.0 }]);
        assert_eq!(reader.remaining_count::<Pair>(), 1);
        assert_eq!(reader.read_vec::<Pair>(1), vec![Pair { a: -3, b: 4.5 }]);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    #[should_panic]
    fn borrowed_reader_panics_past_end() {
        let bytes = [0u8; 6];
        let mut reader = BorrowedReader::new(&bytes);
        reader.read_vec::<Pair>(1);
    }
}
