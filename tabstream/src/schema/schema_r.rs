use crate::config::CodecConfig;
use crate::schema::{ColumnDescriptor, Schema};
use std::io::Read;
use tabstream_types::serde::{ReadResult, TypeTag, TypeTagInt, VarInt};
use tabstream_types::{CodecError, Malformed};

impl Schema {
    /// Returns [`ReadResult::EOF`] iff the stream ends cleanly where a header would begin.
    pub fn deser(r: &mut impl Read, config: &CodecConfig) -> Result<ReadResult<Self>, CodecError> {
        /* column_count */
        let (mut r_len, col_ct) = match VarInt::deser(r)? {
            ReadResult::EOF => return Ok(ReadResult::EOF),
            ReadResult::Some(r_len, col_ct) => (r_len, col_ct),
        };
        let col_ct = col_ct.to_len("Column count", config.max_column_count)?;

        let mut cols = Vec::with_capacity(col_ct);
        for _ in 0..col_ct {
            /* name */
            let (delta_r_len, name_len) = VarInt::deser_required(r)?;
            r_len += delta_r_len;
            let name_len = name_len.to_len("Column name length", config.max_name_len)?;
            let mut name = vec![0u8; name_len];
            r.read_exact(&mut name).map_err(CodecError::from_io_in_frame)?;
            r_len += name_len;
            let name =
                String::from_utf8(name).map_err(|_| Malformed::InvalidUtf8("column name"))?;

            /* type_tag */
            let (delta_r_len, tag_int) =
                TypeTagInt::deser(r).map_err(CodecError::from_io_in_frame)?;
            r_len += delta_r_len;
            let tag = TypeTag::try_from(tag_int)?;

            cols.push(ColumnDescriptor { name, tag });
        }

        Ok(ReadResult::Some(r_len, Schema::from(cols)))
    }
}
