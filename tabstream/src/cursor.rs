use crate::config::CodecConfig;
use crate::row::RowReader;
use crate::schema::{ColumnDescriptor, Schema};
use crate::source::{ColumnType, RowSource};
use std::io::Read;
use tabstream_types::serde::{ReadResult, Value};
use tabstream_types::types::FromValue;
use tabstream_types::{CodecError, Malformed};
use tracing::{debug, warn};


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CursorState {
    BeforeFirstRow,
    RowAvailable,
    Exhausted,
    Closed,
}

/// A forward-only cursor over a decoded stream.
///
/// Rows are decoded lazily: the bytes of row `n + 1` are read only when
/// [`StreamingCursor::advance`] is called for it. Only the current row is held,
/// and advancing discards it.
///
/// The cursor does no buffering of its own and never reads past the bytes it
/// decodes, so the reader stays positioned right after the last header or frame
/// consumed. Markers and length prefixes are read a byte at a time; pass a
/// [`std::io::BufReader`] for a reader where small reads are costly, and take it back
/// with [`StreamingCursor::into_inner`].
///
/// State transitions:
/// - `advance` from `BeforeFirstRow` or `RowAvailable` moves to `RowAvailable`
///   if a frame was decoded, or to `Exhausted` at the end marker.
/// - `advance` from `Exhausted` or `Closed` is a no-op returning `false`.
/// - `close`, and any structural decode error, moves to `Closed` and releases the stream.
///   Dropping the cursor releases the stream too.
pub struct StreamingCursor<R> {
    r: Option<R>,
    schema: Schema,
    row: Vec<Option<Value>>,
    row_r: RowReader,
    state: CursorState,
    rows_read: u64,
    config: CodecConfig,
}

impl<R: Read> StreamingCursor<R> {
    /// Reads the first header. A stream must hold at least one.
    pub fn open(mut r: R, config: &CodecConfig) -> Result<Self, CodecError> {
        let schema = match Schema::deser(&mut r, config)? {
            ReadResult::EOF => return Err(Malformed::Truncated.into()),
            ReadResult::Some(_r_len, schema) => schema,
        };
        debug!(column_count = schema.len(), "Read header.");

        Ok(Self {
            r: Some(r),
            row: Vec::with_capacity(schema.len()),
            schema,
            row_r: RowReader::new(config),
            state: CursorState::BeforeFirstRow,
            rows_read: 0,
            config: *config,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Rows decoded so far from the current result set.
    pub fn rows_read(&self) -> u64 {
        self.rows_read
    }

    pub fn advance(&mut self) -> Result<bool, CodecError> {
        let r = match (self.state, self.r.as_mut()) {
            (CursorState::BeforeFirstRow | CursorState::RowAvailable, Some(r)) => r,
            _ => return Ok(false),
        };

        match self.row_r.deser_row(r, &self.schema, &mut self.row) {
            Ok(true) => {
                self.state = CursorState::RowAvailable;
                self.rows_read += 1;
                Ok(true)
            }
            Ok(false) => {
                self.state = CursorState::Exhausted;
                self.row.clear();
                debug!(rows_read = self.rows_read, "Reached end of row group.");
                Ok(false)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Moves to the next result set in the stream, passing over any unread rows
    /// of the current one without decoding them.
    ///
    /// Returns `false`, leaving the cursor `Exhausted`, when the stream ends
    /// where another header could begin.
    pub fn next_result(&mut self) -> Result<bool, CodecError> {
        let r = match self.r.as_mut() {
            None => return Ok(false),
            Some(r) => r,
        };

        if matches!(
            self.state,
            CursorState::BeforeFirstRow | CursorState::RowAvailable
        ) {
            loop {
                match self.row_r.skip_row(r) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(e) => return Err(self.fail(e)),
                }
            }
        }
        self.row.clear();

        match Schema::deser(r, &self.config) {
            Ok(ReadResult::EOF) => {
                self.state = CursorState::Exhausted;
                Ok(false)
            }
            Ok(ReadResult::Some(_r_len, schema)) => {
                debug!(column_count = schema.len(), "Read header.");
                self.schema = schema;
                self.rows_read = 0;
                self.state = CursorState::BeforeFirstRow;
                Ok(true)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Releases the stream. Unread bytes are abandoned.
    pub fn close(&mut self) {
        if self.r.take().is_some() {
            debug!(rows_read = self.rows_read, "Closed cursor.");
        }
        self.row.clear();
        self.state = CursorState::Closed;
    }

    /// Hands back the reader, positioned after the last byte decoded.
    /// Returns `None` if the cursor was closed.
    pub fn into_inner(self) -> Option<R> {
        self.r
    }

    fn fail(&mut self, e: CodecError) -> CodecError {
        if e.is_structural() {
            warn!(error = %e, "Closing cursor after a structural decode error.");
            self.close();
        }
        e
    }
}

/* Access to the current row. None of these move the cursor. */
impl<R> StreamingCursor<R> {
    pub fn column(&self, col_i: usize) -> Result<&ColumnDescriptor, CodecError> {
        self.schema.get(col_i).ok_or(CodecError::ColumnOutOfRange {
            index: col_i,
            count: self.schema.len(),
        })
    }

    pub fn ordinal(&self, name: &str) -> Result<usize, CodecError> {
        self.schema
            .ordinal(name)
            .ok_or_else(|| CodecError::UnknownColumn(String::from(name)))
    }

    pub fn row(&self) -> Result<&[Option<Value>], CodecError> {
        match self.state {
            CursorState::RowAvailable => Ok(&self.row),
            _ => Err(CodecError::NoCurrentRow),
        }
    }

    /// `None` is null.
    pub fn value(&self, col_i: usize) -> Result<Option<&Value>, CodecError> {
        self.column(col_i)?;
        let row = self.row()?;
        Ok(row[col_i].as_ref())
    }

    pub fn is_null(&self, col_i: usize) -> Result<bool, CodecError> {
        Ok(self.value(col_i)?.is_none())
    }

    /// Reads a cell as `T`. Fails with [`CodecError::InvalidCast`] if the column's
    /// declared type is not `T::TAG`, whether or not the cell is null.
    pub fn get<'a, T: FromValue<'a>>(&'a self, col_i: usize) -> Result<Option<T>, CodecError> {
        let col = self.column(col_i)?;
        let invalid_cast = || CodecError::InvalidCast {
            column: col_i,
            expected: T::TAG,
            actual: col.tag,
        };
        if col.tag != T::TAG {
            return Err(invalid_cast());
        }
        match self.value(col_i)? {
            None => Ok(None),
            Some(val) => T::from_value(val).map(Some).ok_or_else(invalid_cast),
        }
    }

    pub fn get_by_name<'a, T: FromValue<'a>>(
        &'a self,
        name: &str,
    ) -> Result<Option<T>, CodecError> {
        let col_i = self.ordinal(name)?;
        self.get(col_i)
    }
}

/* A decoded stream can be consumed, or re-encoded, like any other row source. */
impl<R: Read> RowSource for StreamingCursor<R> {
    fn column_count(&self) -> usize {
        self.schema.len()
    }
    fn column_name(&self, col_i: usize) -> &str {
        &self.schema[col_i].name
    }
    fn column_type(&self, col_i: usize) -> ColumnType {
        ColumnType::Supported(self.schema[col_i].tag)
    }
    fn advance(&mut self) -> anyhow::Result<bool> {
        Ok(StreamingCursor::advance(self)?)
    }
    fn value(&self, col_i: usize) -> anyhow::Result<Option<&Value>> {
        Ok(StreamingCursor::value(self, col_i)?)
    }
}
