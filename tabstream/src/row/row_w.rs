use crate::config::{check_encode_len, CodecConfig};
use crate::row::{NullBitmap, ROW_MARKER_END, ROW_MARKER_ROW};
use crate::schema::Schema;
use crate::source::RowSource;
use std::io::Write;
use tabstream_types::serde::{VarInt, WriteLen};
use tabstream_types::CodecError;
use tracing::trace;

/// Encodes rows into frames.
///
/// Each frame is assembled in a reusable buffer before any of it is written,
/// so a row that fails to encode leaves no partial frame behind.
pub struct RowWriter {
    frame: Vec<u8>,
    max_frame_len: u64,
}

impl RowWriter {
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            frame: vec![],
            max_frame_len: config.max_frame_len,
        }
    }

    /// Encodes the source's current row.
    pub fn ser_row<S: RowSource + ?Sized>(
        &mut self,
        schema: &Schema,
        src: &S,
        w: &mut impl Write,
    ) -> Result<WriteLen, CodecError> {
        /* null_bitmap and values */
        self.frame.clear();
        self.frame.resize(schema.bitmap_len(), 0);
        for (col_i, col) in schema.iter().enumerate() {
            match src.value(col_i).map_err(CodecError::Source)? {
                None => NullBitmap::set_null(&mut self.frame, col_i),
                Some(val) => {
                    let actual = val.tag();
                    if actual != col.tag {
                        return Err(CodecError::InvalidCast {
                            column: col_i,
                            expected: col.tag,
                            actual,
                        });
                    }
                    val.ser(&mut self.frame)?;
                }
            }
        }

        check_encode_len("Frame length", self.frame.len(), self.max_frame_len)?;

        let mut w_len = 0;

        /* row_marker */
        w.write_all(&[ROW_MARKER_ROW])?;
        w_len += 1;

        /* frame_len */
        w_len += *VarInt::from_len(self.frame.len()).ser(w)?;

        /* frame_body */
        w.write_all(&self.frame)?;
        w_len += self.frame.len();

        trace!(frame_len = self.frame.len(), "Wrote row frame.");
        Ok(WriteLen::new_manual(w_len))
    }

    pub fn ser_end(&mut self, w: &mut impl Write) -> Result<WriteLen, CodecError> {
        w.write_all(&[ROW_MARKER_END])?;
        Ok(WriteLen::new_manual(1))
    }
}
