use crate::serde::Value;
use crate::{CodecError, Malformed};
use derive_more::{Deref, From};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::io::{self, Read};
use std::mem;

#[derive(From, Deref, Clone, Copy, PartialEq, Eq, Debug)]
pub struct TypeTagInt(u8);
impl From<TypeTag> for TypeTagInt {
    fn from(tag: TypeTag) -> Self {
        Self(tag as u8)
    }
}
impl TypeTagInt {
    pub fn deser(r: &mut impl Read) -> Result<(usize, Self), io::Error> {
        let mut buf = [0u8; mem::size_of::<u8>()];
        r.read_exact(&mut buf)?;
        let int = u8::from_le_bytes(buf);
        Ok((buf.len(), Self(int)))
    }
}

/// The closed set of column types that the wire format carries.
///
/// Discriminants are assigned manually because they are part of the wire format,
/// and must not move when members are added or reordered.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum TypeTag {
    Bool = 1,
    U8 = 2,
    I16 = 3,
    I32 = 4,
    I64 = 5,
    F32 = 6,
    F64 = 7,
    Decimal = 8,
    DateTime = 9,
    TimeSpan = 10,
    Char = 11,
    Guid = 12,
    Str = 13,
    Bytes = 14,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum WireWidth {
    Fixed(usize),
    LengthPrefixed,
}

impl TypeTag {
    pub const ALL: [TypeTag; 14] = [
        TypeTag::Bool,
        TypeTag::U8,
        TypeTag::I16,
        TypeTag::I32,
        TypeTag::I64,
        TypeTag::F32,
        TypeTag::F64,
        TypeTag::Decimal,
        TypeTag::DateTime,
        TypeTag::TimeSpan,
        TypeTag::Char,
        TypeTag::Guid,
        TypeTag::Str,
        TypeTag::Bytes,
    ];

    pub fn wire_width(self) -> WireWidth {
        match self {
            TypeTag::Bool | TypeTag::U8 => WireWidth::Fixed(1),
            TypeTag::I16 => WireWidth::Fixed(2),
            TypeTag::I32 | TypeTag::F32 | TypeTag::Char => WireWidth::Fixed(4),
            TypeTag::I64 | TypeTag::F64 => WireWidth::Fixed(8),
            TypeTag::DateTime | TypeTag::TimeSpan => WireWidth::Fixed(12),
            TypeTag::Guid => WireWidth::Fixed(16),
            TypeTag::Decimal => WireWidth::Fixed(17),
            TypeTag::Str | TypeTag::Bytes => WireWidth::LengthPrefixed,
        }
    }
}

impl TryFrom<TypeTagInt> for TypeTag {
    type Error = CodecError;
    fn try_from(int: TypeTagInt) -> Result<Self, CodecError> {
        TypeTag::from_u8(int.0).ok_or(CodecError::MalformedStream(Malformed::UnknownTypeTag(int.0)))
    }
}

impl From<&Value> for TypeTag {
    fn from(val: &Value) -> Self {
        match val {
            Value::Bool(_) => TypeTag::Bool,
            Value::U8(_) => TypeTag::U8,
            Value::I16(_) => TypeTag::I16,
            Value::I32(_) => TypeTag::I32,
            Value::I64(_) => TypeTag::I64,
            Value::F32(_) => TypeTag::F32,
            Value::F64(_) => TypeTag::F64,
            Value::Decimal(_) => TypeTag::Decimal,
            Value::DateTime(_) => TypeTag::DateTime,
            Value::TimeSpan(_) => TypeTag::TimeSpan,
            Value::Char(_) => TypeTag::Char,
            Value::Guid(_) => TypeTag::Guid,
            Value::Str(_) => TypeTag::Str,
            Value::Bytes(_) => TypeTag::Bytes,
        }
    }
}
