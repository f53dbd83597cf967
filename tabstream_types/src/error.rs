use crate::serde::TypeTag;
use std::io;
use thiserror::Error;

/// A structural fault found while decoding. Once one of these is seen,
/// the stream position can no longer be trusted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Malformed {
    #[error("Stream ended inside a header or a frame.")]
    Truncated,

    #[error("Varint does not fit in 64 bits.")]
    BadVarint,

    #[error("Unknown type tag {0}.")]
    UnknownTypeTag(u8),

    #[error("Unknown row marker {0}.")]
    BadRowMarker(u8),

    #[error("Frame declared {declared} bytes but its values need more.")]
    FrameOverrun { declared: usize },

    #[error("Frame declared {declared} bytes but its values used {consumed}.")]
    FrameUnderrun { declared: usize, consumed: usize },

    #[error("Null bitmap flags column {0}, which does not exist.")]
    StrayNullBit(usize),

    #[error("Invalid bool byte {0}.")]
    InvalidBool(u8),

    #[error("Invalid UTF-8 in {0}.")]
    InvalidUtf8(&'static str),

    #[error("Invalid char scalar {0:#x}.")]
    InvalidChar(u32),

    #[error("Decimal scale {0} exceeds 28.")]
    InvalidDecimalScale(u8),

    #[error("Timestamp {secs}s + {nanos}ns is out of range.")]
    InvalidTimestamp { secs: i64, nanos: u32 },

    #[error("Time span {secs}s + {nanos}ns is out of range.")]
    InvalidTimeSpan { secs: i64, nanos: i32 },

    #[error("{what} {len} exceeds the limit {limit}.")]
    LimitExceeded {
        what: &'static str,
        len: u64,
        limit: u64,
    },
}

#[derive(Debug, Error)]
pub enum CodecError {
    /// Raised before any byte is written, so the output is untouched.
    #[error("Column {column:?} has unsupported type {type_name:?}.")]
    UnsupportedColumnType { column: String, type_name: String },

    /// A header or frame would exceed a [decode limit](Malformed::LimitExceeded).
    /// Raised before any of it is written.
    #[error("{what} {len} exceeds the limit {limit}.")]
    Oversized {
        what: &'static str,
        len: u64,
        limit: u64,
    },

    #[error("Malformed stream: {0}")]
    MalformedStream(#[from] Malformed),

    #[error("Invalid cast on column {column}: expected {expected:?}, found {actual:?}.")]
    InvalidCast {
        column: usize,
        expected: TypeTag,
        actual: TypeTag,
    },

    #[error("Stream I/O failed: {0}")]
    StreamIo(#[from] io::Error),

    #[error("Row source failed: {0:#}")]
    Source(anyhow::Error),

    #[error("No row is available at the cursor.")]
    NoCurrentRow,

    #[error("Column index {index} is out of range for {count} columns.")]
    ColumnOutOfRange { index: usize, count: usize },

    #[error("Unknown column {0:?}.")]
    UnknownColumn(String),
}

impl CodecError {
    /// Structural errors leave the stream at an unknown position.
    /// A cursor that hits one closes itself.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::MalformedStream(_) | Self::StreamIo(_))
    }

    /// Reclassifies an unexpected EOF inside a header or a frame as truncation.
    pub fn from_io_in_frame(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Self::MalformedStream(Malformed::Truncated)
        } else {
            Self::StreamIo(e)
        }
    }
}
