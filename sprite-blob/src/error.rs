use crate::blob::{header::BlobHeader, record::SpriteRecord};

#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("blob ends before the end of its {}-byte header", BlobHeader::SIZE)]
    MissingHeader,

    #[error("header declares a negative record count ({0})")]
    NegativeCount(i32),

    #[error("header declares {declared} records but only {available} are present")]
    Truncated { declared: usize, available: usize },

    #[error("found {0} unexpected bytes after the last record")]
    TrailingBytes(usize),

    #[error("{0} records do not fit in the header's 32-bit record count")]
    TooManyRecords(usize),

    #[error("line {line}: expected {} fields, found {found}", SpriteRecord::FIELD_COUNT)]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: field {field} ({value:?}) is not a valid {expected}")]
    InvalidField {
        line: usize,
        field: usize,
        value: String,
        expected: &'static str,
    },
}
