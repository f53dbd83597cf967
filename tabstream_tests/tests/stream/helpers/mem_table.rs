use anyhow::{anyhow, Result};
use std::io::Read;
use tabstream::{ColumnType, RowSource, StreamingCursor, Value};

/// A fully materialized table. Stands in for a database driver or a
/// dataframe on the encode side, and for a generic tabular sink on the decode side.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct MemTable {
    pub columns: Vec<(String, ColumnType)>,
    pub rows: Vec<Vec<Option<Value>>>,
}

impl MemTable {
    pub fn new(columns: Vec<(&str, ColumnType)>) -> Self {
        Self {
            columns: columns
                .into_iter()
                .map(|(name, typ)| (String::from(name), typ))
                .collect(),
            rows: vec![],
        }
    }

    pub fn with_rows(mut self, rows: Vec<Vec<Option<Value>>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn reader(&self) -> MemTableReader<'_> {
        MemTableReader {
            table: self,
            row_i: None,
        }
    }

    /// Drains the cursor's current result set.
    pub fn load<R: Read>(cursor: &mut StreamingCursor<R>) -> Result<Self> {
        let columns = cursor
            .schema()
            .iter()
            .map(|col| (col.name.clone(), ColumnType::Supported(col.tag)))
            .collect();
        let mut rows = vec![];
        while cursor.advance()? {
            rows.push(cursor.row()?.to_vec());
        }
        Ok(Self { columns, rows })
    }
}

pub struct MemTableReader<'a> {
    table: &'a MemTable,
    row_i: Option<usize>,
}

impl<'a> RowSource for MemTableReader<'a> {
    fn column_count(&self) -> usize {
        self.table.columns.len()
    }
    fn column_name(&self, col_i: usize) -> &str {
        &self.table.columns[col_i].0
    }
    fn column_type(&self, col_i: usize) -> ColumnType {
        self.table.columns[col_i].1.clone()
    }
    fn advance(&mut self) -> Result<bool> {
        let next_i = self.row_i.map_or(0, |i| i + 1);
        self.row_i = Some(next_i.min(self.table.rows.len()));
        Ok(next_i < self.table.rows.len())
    }
    fn value(&self, col_i: usize) -> Result<Option<&Value>> {
        let row = self
            .row_i
            .and_then(|i| self.table.rows.get(i))
            .ok_or(anyhow!("No current row."))?;
        let cell = row.get(col_i).ok_or(anyhow!("No column {col_i}."))?;
        Ok(cell.as_ref())
    }
}
