use crate::config::CodecConfig;
use crate::row::RowWriter;
use crate::schema::Schema;
use crate::source::RowSource;
use crate::validator;
use std::io::{BufWriter, Write};
use tabstream_types::CodecError;
use tracing::debug;

/// What one table's encoding produced.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct EncodeSummary {
    pub row_count: u64,
    pub w_len: usize,
}

/// Writes `Header RowGroup` pairs.
///
/// Writes go through a [`BufWriter`] holding whole frames only.
/// If a row fails midway, the frames before it still reach the underlying writer,
/// and the table is left without its end marker.
pub struct TableWriter<W: Write> {
    w: BufWriter<W>,
    row_w: RowWriter,
}

impl<W: Write> TableWriter<W> {
    pub fn new(w: W, config: &CodecConfig) -> Self {
        Self {
            w: BufWriter::with_capacity(config.write_buffer_capacity, w),
            row_w: RowWriter::new(config),
        }
    }

    /// Writes the header for `schema`, then every row remaining in `src`,
    /// then the end marker. `schema` must come from validating `src`.
    pub fn ser_table<S: RowSource + ?Sized>(
        &mut self,
        schema: &Schema,
        src: &mut S,
    ) -> Result<EncodeSummary, CodecError> {
        let mut w_len = *schema.ser(&mut self.w)?;
        debug!(column_count = schema.len(), "Wrote header.");

        let mut row_count = 0u64;
        while src.advance().map_err(CodecError::Source)? {
            w_len += *self.row_w.ser_row(schema, &*src, &mut self.w)?;
            row_count += 1;
        }
        w_len += *self.row_w.ser_end(&mut self.w)?;
        debug!(row_count, "Wrote end of row group.");

        Ok(EncodeSummary { row_count, w_len })
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(self) -> Result<W, CodecError> {
        self.w
            .into_inner()
            .map_err(|e| CodecError::StreamIo(e.into_error()))
    }
}

pub fn serialize<W, S>(w: W, src: &mut S) -> Result<EncodeSummary, CodecError>
where
    W: Write,
    S: RowSource + ?Sized,
{
    serialize_with_config(w, src, &CodecConfig::default())
}

/// Validates the source's columns against the wire format and `config`'s limits,
/// then encodes the source as a single table. Nothing is written if validation fails.
pub fn serialize_with_config<W, S>(
    w: W,
    src: &mut S,
    config: &CodecConfig,
) -> Result<EncodeSummary, CodecError>
where
    W: Write,
    S: RowSource + ?Sized,
{
    let schema = validator::validate_with_config(&*src, config)?;

    let mut table_w = TableWriter::new(w, config);
    let summary = table_w.ser_table(&schema, src)?;
    table_w.finish()?;

    Ok(summary)
}

/// Encodes several tables back to back, as one stream with several result sets.
/// Every source is validated before the first byte is written.
pub fn serialize_many<W: Write>(
    w: W,
    srcs: &mut [&mut dyn RowSource],
    config: &CodecConfig,
) -> Result<Vec<EncodeSummary>, CodecError> {
    let schemas = srcs
        .iter()
        .map(|src| validator::validate_with_config(&**src, config))
        .collect::<Result<Vec<_>, _>>()?;

    let mut table_w = TableWriter::new(w, config);
    let mut summaries = Vec::with_capacity(srcs.len());
    for (schema, src) in schemas.iter().zip(srcs.iter_mut()) {
        summaries.push(table_w.ser_table(schema, &mut **src)?);
    }
    table_w.finish()?;

    Ok(summaries)
}
