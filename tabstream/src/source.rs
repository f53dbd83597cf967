use tabstream_types::serde::{TypeTag, Value};

/// A column type as declared by a row source.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum ColumnType {
    Supported(TypeTag),

    /// A type the wire format cannot carry, named the way the source names it.
    Unsupported(String),
}

impl From<TypeTag> for ColumnType {
    fn from(tag: TypeTag) -> Self {
        Self::Supported(tag)
    }
}

/// A forward-only cursor over rows. This is the seam that database drivers and
/// in-memory tables plug into when being encoded, and the shape that a decoded
/// stream is handed back in.
///
/// Before the first successful [`RowSource::advance`], no row is current.
pub trait RowSource {
    fn column_count(&self) -> usize;

    fn column_name(&self, col_i: usize) -> &str;

    fn column_type(&self, col_i: usize) -> ColumnType;

    /// Moves to the next row. Returns whether one became current.
    fn advance(&mut self) -> anyhow::Result<bool>;

    /// Reads a cell of the current row. `None` is null.
    fn value(&self, col_i: usize) -> anyhow::Result<Option<&Value>>;
}
