//! Encodes a tabular result set into a compact, self-describing byte stream,
//! and decodes such a stream back into a forward-only cursor, one row at a time.
//!
//! ```text
//! struct Stream {
//!     tables:     [Table; 1..],
//! }
//!
//! struct Table {
//!     header:     Header,     // See `schema`.
//!     row_group:  RowGroup,   // See `row`.
//! }
//! ```

mod config;
mod cursor;
mod encode;
mod row;
mod schema;
mod source;
mod validator;


pub use config::*;
pub use cursor::*;
pub use encode::*;
pub use row::{RowReader, RowWriter};
pub use schema::*;
pub use source::*;
pub use validator::{validate, validate_with_config};

pub use tabstream_types::serde::{TypeTag, Value};
pub use tabstream_types::types::{Decimal, FromValue, Guid};
pub use tabstream_types::{CodecError, Malformed};

use std::io::Read;

/// Reads the first header and returns a cursor positioned before the first row.
pub fn deserialize<R: Read>(r: R) -> Result<StreamingCursor<R>, CodecError> {
    StreamingCursor::open(r, &CodecConfig::default())
}

pub fn deserialize_with_config<R: Read>(
    r: R,
    config: &CodecConfig,
) -> Result<StreamingCursor<R>, CodecError> {
    StreamingCursor::open(r, config)
}
