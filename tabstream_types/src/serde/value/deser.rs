use crate::serde::{TypeTag, Value, VarInt, WireWidth};
use crate::types::{Decimal, Guid};
use crate::{CodecError, Malformed};
use chrono::{DateTime, TimeDelta, Utc};
use std::io::Read;

#[derive(PartialEq, Eq, Debug)]
pub enum ReadResult<T> {
    EOF,
    Some(usize, T),
}

impl Value {
    /// Reads the body of a value whose type is given by the schema.
    ///
    /// Running out of bytes is [`Malformed::Truncated`]. Callers reading from a frame
    /// buffer may reclassify it.
    pub fn deser(tag: TypeTag, r: &mut impl Read) -> Result<(usize, Self), CodecError> {
        let val = match tag {
            TypeTag::Bool => match Self::deser_fixed_len_body::<1>(r)? {
                [0] => Value::Bool(false),
                [1] => Value::Bool(true),
                [b] => return Err(Malformed::InvalidBool(b).into()),
            },
            TypeTag::U8 => Value::U8(Self::deser_fixed_len_body::<1>(r)?[0]),
            TypeTag::I16 => Value::I16(i16::from_le_bytes(Self::deser_fixed_len_body(r)?)),
            TypeTag::I32 => Value::I32(i32::from_le_bytes(Self::deser_fixed_len_body(r)?)),
            TypeTag::I64 => Value::I64(i64::from_le_bytes(Self::deser_fixed_len_body(r)?)),
            TypeTag::F32 => {
                let bits = u32::from_le_bytes(Self::deser_fixed_len_body(r)?);
                Value::F32(f32::from_bits(bits))
            }
            TypeTag::F64 => {
                let bits = u64::from_le_bytes(Self::deser_fixed_len_body(r)?);
                Value::F64(f64::from_bits(bits))
            }
            TypeTag::Decimal => Value::Decimal(Decimal::from_wire(Self::deser_fixed_len_body(r)?)?),
            TypeTag::DateTime => {
                let (secs, nanos) = Self::deser_secs_nanos(r)?;
                let dt = DateTime::<Utc>::from_timestamp(secs, nanos)
                    .ok_or(Malformed::InvalidTimestamp { secs, nanos })?;
                Value::DateTime(dt.naive_utc())
            }
            TypeTag::TimeSpan => {
                let (secs, nanos) = Self::deser_secs_nanos(r)?;
                let nanos = nanos as i32;
                let invalid = Malformed::InvalidTimeSpan { secs, nanos };
                let same_sign = (secs >= 0 && nanos >= 0) || (secs <= 0 && nanos <= 0);
                if !same_sign || nanos.unsigned_abs() >= 1_000_000_000 {
                    return Err(invalid.into());
                }
                let td = TimeDelta::try_seconds(secs)
                    .and_then(|td| td.checked_add(&TimeDelta::nanoseconds(nanos as i64)))
                    .ok_or(invalid)?;
                Value::TimeSpan(td)
            }
            TypeTag::Char => {
                let scalar = u32::from_le_bytes(Self::deser_fixed_len_body(r)?);
                let c = char::from_u32(scalar).ok_or(Malformed::InvalidChar(scalar))?;
                Value::Char(c)
            }
            TypeTag::Guid => Value::Guid(Guid::from(Self::deser_fixed_len_body::<16>(r)?)),
            TypeTag::Str => {
                let (r_len, body) = Self::deser_variable_len_body(r)?;
                let s =
                    String::from_utf8(body).map_err(|_| Malformed::InvalidUtf8("string value"))?;
                return Ok((r_len, Value::Str(s)));
            }
            TypeTag::Bytes => {
                let (r_len, body) = Self::deser_variable_len_body(r)?;
                return Ok((r_len, Value::Bytes(body)));
            }
        };

        let r_len = match tag.wire_width() {
            WireWidth::Fixed(len) => len,
            WireWidth::LengthPrefixed => 0, // Returned above.
        };
        Ok((r_len, val))
    }

    fn deser_fixed_len_body<const LEN: usize>(r: &mut impl Read) -> Result<[u8; LEN], CodecError> {
        let mut buf = [0u8; LEN];
        r.read_exact(&mut buf).map_err(CodecError::from_io_in_frame)?;
        Ok(buf)
    }

    fn deser_secs_nanos(r: &mut impl Read) -> Result<(i64, u32), CodecError> {
        let secs = i64::from_le_bytes(Self::deser_fixed_len_body(r)?);
        let nanos = u32::from_le_bytes(Self::deser_fixed_len_body(r)?);
        Ok((secs, nanos))
    }

    fn deser_variable_len_body(r: &mut impl Read) -> Result<(usize, Vec<u8>), CodecError> {
        let (mut r_len, body_len) = VarInt::deser_required(r)?;
        let body_len = body_len.to_len("Value body length", u64::MAX)?;

        // The length is untrusted, so the buffer grows only as bytes arrive.
        let mut buf = Vec::new();
        let got = r
            .by_ref()
            .take(body_len as u64)
            .read_to_end(&mut buf)
            .map_err(CodecError::from_io_in_frame)?;
        if got != body_len {
            return Err(Malformed::Truncated.into());
        }
        r_len += got;

        Ok((r_len, buf))
    }
}
