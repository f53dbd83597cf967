use super::helpers::mem_table::MemTable;
use anyhow::Result;
use std::io::Cursor;
use tabstream::{ColumnType, CursorState, TypeTag, Value};

fn ser(table: &MemTable) -> Result<Vec<u8>> {
    let mut buf = vec![];
    tabstream::serialize(&mut buf, &mut table.reader())?;
    Ok(buf)
}

#[test]
fn no_columns_no_rows() -> Result<()> {
    let table = MemTable::default();
    let buf = ser(&table)?;
    // Column count, then the end marker.
    assert_eq!(vec![0, 0], buf);

    let mut cursor = tabstream::deserialize(Cursor::new(&buf))?;
    assert!(cursor.schema().is_empty());
    assert!(!cursor.advance()?);
    assert_eq!(CursorState::Exhausted, cursor.state());
    Ok(())
}

#[test]
fn columns_but_no_rows() -> Result<()> {
    let table = MemTable::new(vec![("ColumnA", ColumnType::Supported(TypeTag::I32))]);
    let buf = ser(&table)?;
    assert_eq!(Some(&0), buf.last());

    let mut cursor = tabstream::deserialize(Cursor::new(&buf))?;
    assert_eq!(Some(0), cursor.schema().ordinal("ColumnA"));
    assert_eq!(TypeTag::I32, cursor.column(0)?.tag);
    assert!(!cursor.advance()?);
    assert_eq!(0, cursor.rows_read());

    let mut cursor = tabstream::deserialize(Cursor::new(&buf))?;
    assert_eq!(table, MemTable::load(&mut cursor)?);
    Ok(())
}

#[test]
fn rows_but_no_columns() -> Result<()> {
    let table = MemTable::default().with_rows(vec![vec![], vec![], vec![]]);
    let buf = ser(&table)?;
    // Each row is a marker and an empty frame.
    assert_eq!(vec![0, 1, 0, 1, 0, 1, 0, 0], buf);

    let mut cursor = tabstream::deserialize(Cursor::new(&buf))?;
    let mut row_ct = 0;
    while cursor.advance()? {
        assert!(cursor.row()?.is_empty());
        row_ct += 1;
    }
    assert_eq!(3, row_ct);
    Ok(())
}

#[test]
fn all_null_row() -> Result<()> {
    let table = MemTable::new(vec![
        ("a", ColumnType::Supported(TypeTag::Guid)),
        ("b", ColumnType::Supported(TypeTag::Bytes)),
    ])
    .with_rows(vec![vec![None, None]]);
    let buf = ser(&table)?;

    let mut cursor = tabstream::deserialize(Cursor::new(&buf))?;
    assert!(cursor.advance()?);
    assert!(cursor.is_null(0)?);
    assert!(cursor.is_null(1)?);
    assert_eq!(None, cursor.get::<&[u8]>(1)?);
    Ok(())
}

#[test]
fn special_floats() -> Result<()> {
    let table = MemTable::new(vec![
        ("f", ColumnType::Supported(TypeTag::F32)),
        ("d", ColumnType::Supported(TypeTag::F64)),
    ])
    .with_rows(vec![
        vec![Some(Value::F32(f32::NAN)), Some(Value::F64(f64::INFINITY))],
        vec![Some(Value::F32(-0.0)), Some(Value::F64(f64::MIN_POSITIVE))],
    ]);
    let buf = ser(&table)?;

    let mut cursor = tabstream::deserialize(Cursor::new(&buf))?;
    assert_eq!(table, MemTable::load(&mut cursor)?);
    Ok(())
}
