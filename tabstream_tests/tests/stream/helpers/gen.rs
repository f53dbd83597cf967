use super::mem_table::MemTable;
use chrono::{DateTime, TimeDelta};
use rand::distributions::Alphanumeric;
use rand::Rng;
use tabstream::{ColumnType, Decimal, Guid, TypeTag, Value};

pub fn gen_value(rng: &mut impl Rng, tag: TypeTag) -> Value {
    match tag {
        TypeTag::Bool => Value::Bool(rng.gen()),
        TypeTag::U8 => Value::U8(rng.gen()),
        TypeTag::I16 => Value::I16(rng.gen()),
        TypeTag::I32 => Value::I32(rng.gen()),
        TypeTag::I64 => Value::I64(rng.gen()),
        TypeTag::F32 => Value::F32(rng.gen_range(-1e6..1e6)),
        TypeTag::F64 => Value::F64(rng.gen()),
        TypeTag::Decimal => {
            let scale = rng.gen_range(0..=28);
            Value::Decimal(Decimal::new(rng.gen(), scale).unwrap())
        }
        TypeTag::DateTime => {
            let secs = rng.gen_range(-5_000_000_000i64..5_000_000_000);
            let nanos = rng.gen_range(0..1_000_000_000);
            Value::DateTime(DateTime::from_timestamp(secs, nanos).unwrap().naive_utc())
        }
        TypeTag::TimeSpan => Value::TimeSpan(TimeDelta::nanoseconds(rng.gen())),
        TypeTag::Char => Value::Char(rng.gen()),
        TypeTag::Guid => Value::Guid(Guid::from(rng.gen::<[u8; 16]>())),
        TypeTag::Str => {
            let len = rng.gen_range(0..40);
            let s = (0..len)
                .map(|_| rng.sample(Alphanumeric) as char)
                .collect::<String>();
            Value::Str(s)
        }
        TypeTag::Bytes => {
            let len = rng.gen_range(0..300);
            Value::Bytes((0..len).map(|_| rng.gen()).collect())
        }
    }
}

/// A table with the given column types, `row_ct` rows, and roughly `null_pct`% nulls.
pub fn gen_table(
    rng: &mut impl Rng,
    tags: &[TypeTag],
    row_ct: usize,
    null_pct: u32,
) -> MemTable {
    let columns = tags
        .iter()
        .enumerate()
        .map(|(i, tag)| (format!("col_{i}"), ColumnType::Supported(*tag)))
        .collect();
    let rows = (0..row_ct)
        .map(|_| {
            tags.iter()
                .map(|tag| {
                    if rng.gen_range(0..100) < null_pct {
                        None
                    } else {
                        Some(gen_value(rng, *tag))
                    }
                })
                .collect()
        })
        .collect();
    MemTable { columns, rows }
}
