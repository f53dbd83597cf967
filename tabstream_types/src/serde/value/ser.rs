use crate::serde::{Value, VarInt};
use crate::CodecError;
use derive_more::Deref;
use std::io::Write;

#[derive(Deref, Clone, Copy, Debug)]
pub struct WriteLen(usize);
impl WriteLen {
    pub fn new_manual(i: usize) -> Self {
        Self(i)
    }
}

impl Value {
    /// Writes the body only. The type tag lives in the schema.
    pub fn ser(&self, w: &mut impl Write) -> Result<WriteLen, CodecError> {
        match self {
            Value::Bool(b) => Self::ser_fixed_len_body(w, [*b as u8]),
            Value::U8(i) => Self::ser_fixed_len_body(w, [*i]),
            Value::I16(i) => Self::ser_fixed_len_body(w, i.to_le_bytes()),
            Value::I32(i) => Self::ser_fixed_len_body(w, i.to_le_bytes()),
            Value::I64(i) => Self::ser_fixed_len_body(w, i.to_le_bytes()),
            Value::F32(f) => Self::ser_fixed_len_body(w, f.to_bits().to_le_bytes()),
            Value::F64(f) => Self::ser_fixed_len_body(w, f.to_bits().to_le_bytes()),
            Value::Decimal(d) => Self::ser_fixed_len_body(w, d.to_wire()),
            Value::DateTime(dt) => {
                let dt = dt.and_utc();
                let mut buf = [0u8; 12];
                buf[..8].copy_from_slice(&dt.timestamp().to_le_bytes());
                buf[8..].copy_from_slice(&dt.timestamp_subsec_nanos().to_le_bytes());
                Self::ser_fixed_len_body(w, buf)
            }
            Value::TimeSpan(td) => {
                let mut buf = [0u8; 12];
                buf[..8].copy_from_slice(&td.num_seconds().to_le_bytes());
                buf[8..].copy_from_slice(&td.subsec_nanos().to_le_bytes());
                Self::ser_fixed_len_body(w, buf)
            }
            Value::Char(c) => Self::ser_fixed_len_body(w, (*c as u32).to_le_bytes()),
            Value::Guid(g) => Self::ser_fixed_len_body(w, **g),
            Value::Str(s) => Self::ser_variable_len_body(w, s.as_bytes()),
            Value::Bytes(b) => Self::ser_variable_len_body(w, b),
        }
    }

    fn ser_fixed_len_body<const LEN: usize>(
        w: &mut impl Write,
        buf: [u8; LEN],
    ) -> Result<WriteLen, CodecError> {
        w.write_all(&buf)?;
        Ok(WriteLen(LEN))
    }

    fn ser_variable_len_body(w: &mut impl Write, buf: &[u8]) -> Result<WriteLen, CodecError> {
        let mut w_len = 0;
        w_len += *VarInt::from_len(buf.len()).ser(w)?;
        w.write_all(buf)?;
        w_len += buf.len();
        Ok(WriteLen(w_len))
    }
}
