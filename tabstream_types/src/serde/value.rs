use crate::serde::TypeTag;
use crate::types::{Decimal, Guid};
use chrono::{NaiveDateTime, TimeDelta};
use derive_more::From;

mod deser;
mod ser;
pub use deser::*;
pub use ser::*;

/// One non-null cell. Nulls are `None` in an `Option<Value>`;
/// the wire format records them in a row's null bitmap rather than in the value.
#[derive(From, Clone, Debug)]
pub enum Value {
    Bool(bool),
    U8(u8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    DateTime(NaiveDateTime),
    TimeSpan(TimeDelta),
    Char(char),
    Guid(Guid),
    Str(String),
    Bytes(Vec<u8>),
}

impl Value {
    pub fn tag(&self) -> TypeTag {
        TypeTag::from(self)
    }
}

/// Floats compare by bits, so that a NaN that went through the codec equals itself.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Bool(slf), Self::Bool(oth)) => slf == oth,
            (Self::U8(slf), Self::U8(oth)) => slf == oth,
            (Self::I16(slf), Self::I16(oth)) => slf == oth,
            (Self::I32(slf), Self::I32(oth)) => slf == oth,
            (Self::I64(slf), Self::I64(oth)) => slf == oth,
            (Self::F32(slf), Self::F32(oth)) => slf.to_bits() == oth.to_bits(),
            (Self::F64(slf), Self::F64(oth)) => slf.to_bits() == oth.to_bits(),
            (Self::Decimal(slf), Self::Decimal(oth)) => slf == oth,
            (Self::DateTime(slf), Self::DateTime(oth)) => slf == oth,
            (Self::TimeSpan(slf), Self::TimeSpan(oth)) => slf == oth,
            (Self::Char(slf), Self::Char(oth)) => slf == oth,
            (Self::Guid(slf), Self::Guid(oth)) => slf == oth,
            (Self::Str(slf), Self::Str(oth)) => slf == oth,
            (Self::Bytes(slf), Self::Bytes(oth)) => slf == oth,
            _ => false,
        }
    }
}
impl Eq for Value {}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(String::from(s))
    }
}
