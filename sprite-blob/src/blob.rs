use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use tracing::{debug, trace};

use crate::{
    error::BlobError,
    io::{BorrowedReader, WriteBinExt},
};

pub mod header;
pub mod record;

use self::{header::BlobHeader, record::SpriteRecord};

/// Writes `records` to `writer` as a complete blob, header first
pub fn write_records<W: Write>(records: &[SpriteRecord], writer: &mut W) -> Result<(), BlobError> {
    BlobHeader::new(records.len())?.write(writer)?;

    for record in records {
        trace!(%record, "writing sprite record");
        writer.write_binary(record)?;
    }

    Ok(())
}

/// Creates (or truncates) the file at `path` and writes `records` to it as a blob
///
/// The parent directory must already exist.
pub fn write_blob_file(path: impl AsRef<Path>, records: &[SpriteRecord]) -> Result<(), BlobError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    write_records(records, &mut writer)?;
    writer.flush()?;

    debug!(path = %path.display(), count = records.len(), "wrote sprite blob");
    Ok(())
}

/// Reads the blob stored in the file at `path`
pub fn read_blob_file(path: impl AsRef<Path>) -> Result<Blob, BlobError> {
    let path = path.as_ref();
    let blob = Blob::read(&mut File::open(path)?)?;

    debug!(path = %path.display(), count = blob.records.len(), "read sprite blob");
    Ok(blob)
}

/// A blob that has been read back into memory
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    header: BlobHeader,
    records: Vec<SpriteRecord>,
}

impl Blob {
    /// Reads a complete blob. The reader must end right after the last record
    pub fn read<R: Read>(reader: &mut R) -> Result<Self, BlobError> {
        let header = BlobHeader::read(reader)?;
        let declared = header.record_count()?;

        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        let mut reader = BorrowedReader::new(&data);

        let available = reader.remaining_count::<SpriteRecord>();
        if available < declared {
            return Err(BlobError::Truncated {
                declared,
                available,
            });
        }

        let records = reader.read_vec::<SpriteRecord>(declared);

        if reader.remaining() != 0 {
            return Err(BlobError::TrailingBytes(reader.remaining()));
        }

        Ok(Self { header, records })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BlobError> {
        Self::read(&mut &bytes[..])
    }

    pub fn header(&self) -> &BlobHeader {
        &self.header
    }

    pub fn records(&self) -> &[SpriteRecord] {
        &self.records
    }

    /// Finds the first record with the given id
    pub fn find(&self, id: i32) -> Option<&SpriteRecord> {
        self.records.iter().find(|record| record.id == id)
    }
}

#[cfg(test)]
mod tests {
    use byteorder::{ByteOrder, NativeEndian};

    use super::{record::RecordFields, *};

    fn write_to_vec(records: &[SpriteRecord]) -> Vec<u8> {
        let mut bytes = Vec::new();
        write_records(records, &mut bytes).unwrap();
        bytes
    }

    fn numbered(count: i32) -> Vec<SpriteRecord> {
        (0..count)
            .map(|i| {
                let f = i as f32;
                SpriteRecord::from_fields(i + 1, f, f + 0.5, f * 2.0, -f, 1000.0 - f, f / 4.0)
            })
            .collect()
    }

    #[test]
    fn empty_blob_is_only_a_header() {
        let bytes = write_to_vec(&[]);

        assert_eq!(bytes.len(), BlobHeader::SIZE);
        assert_eq!(NativeEndian::read_i32(&bytes[0x0..]), 400);
        assert_eq!(NativeEndian::read_i32(&bytes[0x4..]), 300);
        assert_eq!(NativeEndian::read_i32(&bytes[0x8..]), 0);

        let blob = Blob::from_bytes(&bytes).unwrap();
        assert!(blob.records().is_empty());
    }

    #[test]
    fn single_record() {
        let record = SpriteRecord::from((1, 16.0, 56.0, 0.0, 0.0, 32.0, 64.0));
        let bytes = write_to_vec(&[record]);

        assert_eq!(bytes.len(), 40);
        assert_eq!(NativeEndian::read_i32(&bytes[0x8..]), 1);
        assert_eq!(NativeEndian::read_i32(&bytes[0xC..]), 1);

        let mut floats = [0f32; 6];
        NativeEndian::read_f32_into(&bytes[0x10..0x28], &mut floats);
        assert_eq!(floats, [16.0, 56.0, 0.0, 0.0, 32.0, 64.0]);
    }

    #[test]
    fn records_sit_at_fixed_offsets() {
        let records = numbered(22);
        let bytes = write_to_vec(&records);

        assert_eq!(bytes.len(), 628);
        assert_eq!(NativeEndian::read_i32(&bytes[0x8..]), 22);

        for (i, record) in records.iter().enumerate() {
            let start = BlobHeader::SIZE + SpriteRecord::SIZE * i;
            let bytes = &bytes[start..start + SpriteRecord::SIZE];

            let mut floats = [0f32; 6];
            NativeEndian::read_f32_into(&bytes[0x4..], &mut floats);

            let (id, x0, y0, x1, y1, x2, y2): RecordFields = (*record).into();
            assert_eq!(NativeEndian::read_i32(bytes), id);
            assert_eq!(floats, [x0, y0, x1, y1, x2, y2]);
        }
    }

    #[test]
    fn length_grows_by_record_size() {
        for count in [0, 1, 2, 13, 64] {
            let bytes = write_to_vec(&numbered(count));
            assert_eq!(
                bytes.len(),
                BlobHeader::SIZE + SpriteRecord::SIZE * count as usize
            );
        }
    }

    #[test]
    fn read_back_preserves_order() {
        let records = numbered(13);
        let blob = Blob::from_bytes(&write_to_vec(&records)).unwrap();

        assert_eq!(blob.header().record_count().unwrap(), records.len());
        assert_eq!(blob.records(), records.as_slice());
        assert_eq!(blob.find(5), Some(&records[4]));
        assert_eq!(blob.find(99), None);
    }

    #[test]
    fn find_returns_first_match() {
        let first = SpriteRecord::from_fields(3, 1.0, 1.0, 0.0, 0.0, 2.0, 2.0);
        let second = SpriteRecord::from_fields(3, 5.0, 5.0, 4.0, 4.0, 6.0, 6.0);
        let blob = Blob::from_bytes(&write_to_vec(&[first, second])).unwrap();

        assert_eq!(blob.find(3), Some(&first));
    }

    #[test]
    fn truncated_blob_is_rejected() {
        let bytes = write_to_vec(&numbered(3));
        let cut = &bytes[..bytes.len() - 1];

        assert!(matches!(
            Blob::from_bytes(cut),
            Err(BlobError::Truncated {
                declared: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let mut bytes = write_to_vec(&numbered(2));
        bytes.extend_from_slice(&[0, 0, 0]);

        assert!(matches!(
            Blob::from_bytes(&bytes),
            Err(BlobError::TrailingBytes(3))
        ));
    }

    #[test]
    fn negative_count_is_rejected() {
        let mut bytes = write_to_vec(&[]);
        NativeEndian::write_i32(&mut bytes[0x8..], -4);

        assert!(matches!(
            Blob::from_bytes(&bytes),
            Err(BlobError::NegativeCount(-4))
        ));
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(
            Blob::from_bytes(&[]),
            Err(BlobError::MissingHeader)
        ));
    }
}
