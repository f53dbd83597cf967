use super::helpers::gen::gen_table;
use super::helpers::mem_table::MemTable;
use anyhow::{anyhow, Result};
use std::io::Cursor;
use tabstream::{
    CodecConfig, CodecError, ColumnType, CursorState, Malformed, RowSource, StreamingCursor,
    TypeTag, Value,
};

/// Drains every row. Returns the first error.
fn drain<R: std::io::Read>(cursor: &mut StreamingCursor<R>) -> Result<u64, CodecError> {
    let mut row_ct = 0;
    while cursor.advance()? {
        row_ct += 1;
    }
    Ok(row_ct)
}

#[test]
fn unsupported_column_leaves_output_unchanged() {
    let table = MemTable::new(vec![
        ("Id", ColumnType::Supported(TypeTag::I32)),
        ("Shape", ColumnType::Unsupported(String::from("Geometry"))),
    ])
    .with_rows(vec![vec![Some(Value::I32(1)), None]]);

    let mut buf = vec![0xaa, 0xbb];
    match tabstream::serialize(&mut buf, &mut table.reader()) {
        Err(CodecError::UnsupportedColumnType { column, type_name }) => {
            assert_eq!("Shape", column);
            assert_eq!("Geometry", type_name);
        }
        other => panic!("{other:?}"),
    }
    assert_eq!(vec![0xaa, 0xbb], buf);
}

#[test]
fn encoder_respects_decode_limits() -> Result<()> {
    // Anything the encoder accepts, the decoder with the same config accepts too.
    let config = CodecConfig::default();
    let long_name = "x".repeat(config.max_name_len as usize + 1);
    let table = MemTable::new(vec![(long_name.as_str(), ColumnType::Supported(TypeTag::I32))])
        .with_rows(vec![vec![Some(Value::I32(1))]]);

    let mut buf = vec![];
    match tabstream::serialize_with_config(&mut buf, &mut table.reader(), &config) {
        Err(e @ CodecError::Oversized { .. }) => assert!(!e.is_structural()),
        other => panic!("{other:?}"),
    }
    assert!(buf.is_empty());

    let longest_name = "x".repeat(config.max_name_len as usize);
    let table = MemTable::new(vec![(longest_name.as_str(), ColumnType::Supported(TypeTag::I32))])
        .with_rows(vec![vec![Some(Value::I32(1))]]);
    tabstream::serialize_with_config(&mut buf, &mut table.reader(), &config)?;
    let mut cursor = tabstream::deserialize_with_config(Cursor::new(&buf), &config)?;
    assert_eq!(table, MemTable::load(&mut cursor)?);
    Ok(())
}

#[test]
fn every_truncation_is_malformed() -> Result<()> {
    let mut rng = rand::thread_rng();
    let table = gen_table(&mut rng, &TypeTag::ALL, 4, 20);
    let mut buf = vec![];
    tabstream::serialize(&mut buf, &mut table.reader())?;

    for cut in 0..buf.len() {
        let res = tabstream::deserialize(Cursor::new(&buf[..cut])).and_then(|mut cursor| {
            let res = drain(&mut cursor);
            if res.is_err() {
                assert_eq!(CursorState::Closed, cursor.state());
            }
            res
        });
        match res {
            Err(CodecError::MalformedStream(Malformed::Truncated)) => {}
            other => panic!("Cut at {cut} of {}: {other:?}", buf.len()),
        }
    }
    Ok(())
}

#[test]
fn trailing_garbage_after_a_table() -> Result<()> {
    let table = MemTable::new(vec![("n", ColumnType::Supported(TypeTag::U8))])
        .with_rows(vec![vec![Some(Value::U8(7))]]);
    let mut buf = vec![];
    tabstream::serialize(&mut buf, &mut table.reader())?;
    // A header claiming one column, cut off.
    buf.push(1);

    let mut cursor = tabstream::deserialize(Cursor::new(&buf))?;
    assert_eq!(1, drain(&mut cursor)?);
    match cursor.next_result() {
        Err(CodecError::MalformedStream(Malformed::Truncated)) => {}
        other => panic!("{other:?}"),
    }
    assert_eq!(CursorState::Closed, cursor.state());
    Ok(())
}

#[test]
fn corrupt_values_are_malformed() -> Result<()> {
    let table = MemTable::new(vec![
        ("b", ColumnType::Supported(TypeTag::Bool)),
        ("s", ColumnType::Supported(TypeTag::Str)),
    ])
    .with_rows(vec![vec![Some(Value::Bool(true)), Some(Value::from("ok"))]]);
    let mut buf = vec![];
    tabstream::serialize(&mut buf, &mut table.reader())?;

    // Header: 1 + (1 + 1 + 1) * 2. Frame: marker, len, bitmap, bool, str len, str.
    let header_len = 7;
    let bool_pos = header_len + 3;
    let str_pos = bool_pos + 2;
    assert_eq!(&[1, 2], &buf[bool_pos..bool_pos + 2]);

    let mut bad_bool = buf.clone();
    bad_bool[bool_pos] = 2;
    let mut bad_utf8 = buf.clone();
    bad_utf8[str_pos] = 0xff;
    let mut stray_bit = buf.clone();
    stray_bit[bool_pos - 1] = 0b100;
    let mut bad_marker = buf.clone();
    bad_marker[header_len] = 9;

    for (bytes, expected) in [
        (bad_bool, Malformed::InvalidBool(2)),
        (bad_utf8, Malformed::InvalidUtf8("string value")),
        (stray_bit, Malformed::StrayNullBit(2)),
        (bad_marker, Malformed::BadRowMarker(9)),
    ] {
        let mut cursor = tabstream::deserialize(Cursor::new(&bytes))?;
        match drain(&mut cursor) {
            Err(CodecError::MalformedStream(actual)) => assert_eq!(expected, actual),
            other => panic!("{other:?}"),
        }
        assert!(!cursor.advance()?);
    }
    Ok(())
}

#[test]
fn source_errors_surface() {
    struct Failing;
    impl RowSource for Failing {
        fn column_count(&self) -> usize {
            1
        }
        fn column_name(&self, _col_i: usize) -> &str {
            "n"
        }
        fn column_type(&self, _col_i: usize) -> ColumnType {
            ColumnType::Supported(TypeTag::I64)
        }
        fn advance(&mut self) -> Result<bool> {
            Err(anyhow!("Connection reset."))
        }
        fn value(&self, _col_i: usize) -> Result<Option<&Value>> {
            Ok(None)
        }
    }

    let mut buf = vec![];
    match tabstream::serialize(&mut buf, &mut Failing) {
        Err(e @ CodecError::Source(_)) => {
            assert!(e.to_string().contains("Connection reset."));
            assert!(!e.is_structural());
        }
        other => panic!("{other:?}"),
    }
}
