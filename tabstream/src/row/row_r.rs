use crate::config::CodecConfig;
use crate::row::{NullBitmap, ROW_MARKER_END, ROW_MARKER_ROW};
use crate::schema::Schema;
use std::io::{self, Read};
use tabstream_types::serde::{Value, VarInt};
use tabstream_types::{CodecError, Malformed};
use tracing::trace;

/// Decodes frames, one at a time, into a caller-owned row.
///
/// Holds one frame buffer, which grows to the largest frame seen and is reused.
pub struct RowReader {
    frame: Vec<u8>,
    max_frame_len: u64,
}

impl RowReader {
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            frame: vec![],
            max_frame_len: config.max_frame_len,
        }
    }

    /// Returns `false` at the end-of-row-group marker, leaving `row` untouched.
    pub fn deser_row(
        &mut self,
        r: &mut impl Read,
        schema: &Schema,
        row: &mut Vec<Option<Value>>,
    ) -> Result<bool, CodecError> {
        if !self.deser_frame(r)? {
            return Ok(false);
        }

        let declared = self.frame.len();
        let overrun = || CodecError::from(Malformed::FrameOverrun { declared });

        /* null_bitmap */
        let bitmap_len = schema.bitmap_len();
        if declared < bitmap_len {
            return Err(overrun());
        }
        let (bitmap, mut vals) = self.frame.split_at(bitmap_len);
        let bitmap = NullBitmap::parse(bitmap, schema.len())?;

        /* values */
        row.clear();
        for (col_i, col) in schema.iter().enumerate() {
            if bitmap.is_null(col_i) {
                row.push(None);
                continue;
            }
            let (_r_len, val) = Value::deser(col.tag, &mut vals).map_err(|e| match e {
                CodecError::MalformedStream(Malformed::Truncated) => overrun(),
                e => e,
            })?;
            row.push(Some(val));
        }

        if !vals.is_empty() {
            return Err(Malformed::FrameUnderrun {
                declared,
                consumed: declared - vals.len(),
            }
            .into());
        }

        Ok(true)
    }

    /// Passes over one frame without decoding it.
    /// Returns `false` at the end-of-row-group marker.
    pub fn skip_row(&mut self, r: &mut impl Read) -> Result<bool, CodecError> {
        let frame_len = match self.deser_frame_header(r)? {
            None => return Ok(false),
            Some(frame_len) => frame_len,
        };
        let skipped = io::copy(&mut r.by_ref().take(frame_len as u64), &mut io::sink())
            .map_err(CodecError::from_io_in_frame)?;
        if skipped != frame_len as u64 {
            return Err(Malformed::Truncated.into());
        }
        Ok(true)
    }

    fn deser_frame(&mut self, r: &mut impl Read) -> Result<bool, CodecError> {
        let frame_len = match self.deser_frame_header(r)? {
            None => return Ok(false),
            Some(frame_len) => frame_len,
        };

        /* frame_body */
        // The length is untrusted, so the buffer grows only as bytes arrive.
        self.frame.clear();
        let got = r.by_ref().take(frame_len as u64).read_to_end(&mut self.frame);
        if got.map_err(CodecError::from_io_in_frame)? != frame_len {
            return Err(Malformed::Truncated.into());
        }

        trace!(frame_len, "Read row frame.");
        Ok(true)
    }

    /// Reads `row_marker` and, unless it ends the row group, `frame_len`.
    fn deser_frame_header(&mut self, r: &mut impl Read) -> Result<Option<usize>, CodecError> {
        /* row_marker */
        let mut marker = [0u8; 1];
        r.read_exact(&mut marker).map_err(CodecError::from_io_in_frame)?;
        match marker[0] {
            ROW_MARKER_END => return Ok(None),
            ROW_MARKER_ROW => {}
            m => return Err(Malformed::BadRowMarker(m).into()),
        }

        /* frame_len */
        let (_r_len, frame_len) = VarInt::deser_required(r)?;
        let frame_len = frame_len.to_len("Frame length", self.max_frame_len)?;
        Ok(Some(frame_len))
    }
}
