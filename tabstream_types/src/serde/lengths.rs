use crate::serde::{ReadResult, WriteLen};
use crate::{CodecError, Malformed};
use derive_more::{Deref, From};
use std::io::{ErrorKind, Read, Write};

pub const MAX_VARINT_LEN: usize = 10;

/// An unsigned LEB128 integer. Used for counts and lengths: column count,
/// name length, frame length, and variable-length value bodies.
#[derive(From, Deref, Clone, Copy, PartialEq, Eq, Debug)]
pub struct VarInt(u64);

impl VarInt {
    pub fn from_len(len: usize) -> Self {
        Self(len as u64)
    }

    #[cfg(test)]
    fn encoded_len(self) -> usize {
        let bits = 64 - self.0.leading_zeros() as usize;
        bits.max(1).div_ceil(7)
    }

    pub fn ser(self, w: &mut impl Write) -> Result<WriteLen, CodecError> {
        let mut buf = [0u8; MAX_VARINT_LEN];
        let mut int = self.0;
        let mut len = 0;
        loop {
            let group = (int & 0x7f) as u8;
            int >>= 7;
            if int == 0 {
                buf[len] = group;
                len += 1;
                break;
            }
            buf[len] = group | 0x80;
            len += 1;
        }
        w.write_all(&buf[..len])?;
        Ok(WriteLen::new_manual(len))
    }

    /// EOF before the first byte is a clean [`ReadResult::EOF`];
    /// EOF after it is truncation.
    pub fn deser(r: &mut impl Read) -> Result<ReadResult<Self>, CodecError> {
        let mut int = 0u64;
        for i in 0..MAX_VARINT_LEN {
            let mut buf = [0u8; 1];
            match r.read_exact(&mut buf) {
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    if i == 0 {
                        return Ok(ReadResult::EOF);
                    }
                    return Err(Malformed::Truncated.into());
                }
                Err(e) => return Err(e.into()),
                Ok(()) => {}
            }
            let byte = buf[0];
            // The 10th byte holds only the 64th bit.
            if i == MAX_VARINT_LEN - 1 && byte > 0x01 {
                return Err(Malformed::BadVarint.into());
            }
            int |= ((byte & 0x7f) as u64) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(ReadResult::Some(i + 1, Self(int)));
            }
        }
        Err(Malformed::BadVarint.into())
    }

    /// Reads a varint that must be present, i.e. anywhere other than a record boundary.
    pub fn deser_required(r: &mut impl Read) -> Result<(usize, Self), CodecError> {
        match Self::deser(r)? {
            ReadResult::EOF => Err(Malformed::Truncated.into()),
            ReadResult::Some(r_len, int) => Ok((r_len, int)),
        }
    }

    /// Converts to a length, rejecting anything above `limit`.
    pub fn to_len(self, what: &'static str, limit: u64) -> Result<usize, CodecError> {
        if self.0 > limit {
            return Err(Malformed::LimitExceeded {
                what,
                len: self.0,
                limit,
            }
            .into());
        }
        usize::try_from(self.0).map_err(|_| {
            Malformed::LimitExceeded {
                what,
                len: self.0,
                limit: usize::MAX as u64,
            }
            .into()
        })
    }
}
