use crate::config::{check_encode_len, CodecConfig};
use crate::schema::{ColumnDescriptor, Schema};
use crate::source::{ColumnType, RowSource};
use tabstream_types::CodecError;

pub fn validate<S: RowSource + ?Sized>(source: &S) -> Result<Schema, CodecError> {
    validate_with_config(source, &CodecConfig::default())
}

/// Converts a source's declared columns into a [`Schema`], failing on the first
/// column whose type the wire format cannot carry, or whose header would exceed
/// a decode limit in `config`.
///
/// Encoding runs this before writing anything, so a failure leaves the output untouched.
pub fn validate_with_config<S: RowSource + ?Sized>(
    source: &S,
    config: &CodecConfig,
) -> Result<Schema, CodecError> {
    let col_ct = source.column_count();
    check_encode_len("Column count", col_ct, config.max_column_count)?;

    (0..col_ct)
        .map(|col_i| {
            let name = source.column_name(col_i);
            check_encode_len("Column name length", name.len(), config.max_name_len)?;
            match source.column_type(col_i) {
                ColumnType::Supported(tag) => Ok(ColumnDescriptor::new(name, tag)),
                ColumnType::Unsupported(type_name) => Err(CodecError::UnsupportedColumnType {
                    column: String::from(name),
                    type_name,
                }),
            }
        })
        .collect()
}
