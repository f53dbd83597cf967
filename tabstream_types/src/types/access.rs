use crate::serde::{TypeTag, Value};
use crate::types::{Decimal, Guid};
use chrono::{NaiveDateTime, TimeDelta};

/// A Rust type that a value of one particular [`TypeTag`] can be read as.
///
/// Typed getters compare `TAG` against the column's declared tag before looking
/// at the value, so a mismatch is reported even for a null cell.
pub trait FromValue<'a>: Sized {
    const TAG: TypeTag;

    /// Returns `None` iff `val` is not of `Self::TAG`.
    fn from_value(val: &'a Value) -> Option<Self>;
}

macro_rules! impl_from_value_copy {
    ($ty:ty, $variant:ident) => {
        impl<'a> FromValue<'a> for $ty {
            const TAG: TypeTag = TypeTag::$variant;
            fn from_value(val: &'a Value) -> Option<Self> {
                match val {
                    Value::$variant(v) => Some(*v),
                    _ => None,
                }
            }
        }
    };
}

impl_from_value_copy!(bool, Bool);
impl_from_value_copy!(u8, U8);
impl_from_value_copy!(i16, I16);
impl_from_value_copy!(i32, I32);
impl_from_value_copy!(i64, I64);
impl_from_value_copy!(f32, F32);
impl_from_value_copy!(f64, F64);
impl_from_value_copy!(Decimal, Decimal);
impl_from_value_copy!(NaiveDateTime, DateTime);
impl_from_value_copy!(TimeDelta, TimeSpan);
impl_from_value_copy!(char, Char);
impl_from_value_copy!(Guid, Guid);

impl<'a> FromValue<'a> for &'a str {
    const TAG: TypeTag = TypeTag::Str;
    fn from_value(val: &'a Value) -> Option<Self> {
        match val {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}
impl<'a> FromValue<'a> for String {
    const TAG: TypeTag = TypeTag::Str;
    fn from_value(val: &'a Value) -> Option<Self> {
        <&str>::from_value(val).map(String::from)
    }
}

impl<'a> FromValue<'a> for &'a [u8] {
    const TAG: TypeTag = TypeTag::Bytes;
    fn from_value(val: &'a Value) -> Option<Self> {
        match val {
            Value::Bytes(b) => Some(b.as_slice()),
            _ => None,
        }
    }
}
impl<'a> FromValue<'a> for Vec<u8> {
    const TAG: TypeTag = TypeTag::Bytes;
    fn from_value(val: &'a Value) -> Option<Self> {
        <&[u8]>::from_value(val).map(<[u8]>::to_vec)
    }
}
