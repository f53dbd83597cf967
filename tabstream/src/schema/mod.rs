//! # Header format
//!
//! ```text
//! struct Header {
//!     column_count:   varint,
//!     columns:        [Column; column_count],
//! }
//!
//! struct Column {
//!     name_len:       varint,
//!     name:           [u8; name_len],     // UTF-8
//!     type_tag:       u8,
//! }
//! ```
//!
//! A header with zero columns is valid.

mod schema_r;
mod schema_w;

use derive_more::{Deref, From};
use tabstream_types::serde::TypeTag;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ColumnDescriptor {
    pub name: String,
    pub tag: TypeTag,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            tag,
        }
    }
}

/// An ordered list of columns. Position `i` binds to value slot `i` of every row.
#[derive(From, Deref, PartialEq, Eq, Clone, Default, Debug)]
pub struct Schema(Vec<ColumnDescriptor>);

impl Schema {
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.0
    }

    /// The first column named exactly `name`; failing that, the first whose name
    /// matches ignoring ASCII case.
    pub fn ordinal(&self, name: &str) -> Option<usize> {
        self.0
            .iter()
            .position(|col| col.name == name)
            .or_else(|| self.0.iter().position(|col| col.name.eq_ignore_ascii_case(name)))
    }

    /// Byte length of a row's null bitmap.
    pub fn bitmap_len(&self) -> usize {
        self.0.len().div_ceil(8)
    }
}

impl FromIterator<ColumnDescriptor> for Schema {
    fn from_iter<I: IntoIterator<Item = ColumnDescriptor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
