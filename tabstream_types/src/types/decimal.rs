use crate::Malformed;
use std::fmt;

pub const MAX_DECIMAL_SCALE: u8 = 28;

/// A base-10 fixed-point number, `mantissa * 10^-scale`.
///
/// Equality is representational: `1.0` and `1.00` differ, the same as they
/// would in the column they were read from.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Decimal {
    mantissa: i128,
    scale: u8,
}

impl Decimal {
    pub fn new(mantissa: i128, scale: u8) -> Option<Self> {
        if scale > MAX_DECIMAL_SCALE {
            return None;
        }
        Some(Self { mantissa, scale })
    }

    pub fn mantissa(&self) -> i128 {
        self.mantissa
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub(crate) fn to_wire(self) -> [u8; 17] {
        let mut buf = [0u8; 17];
        buf[..16].copy_from_slice(&self.mantissa.to_le_bytes());
        buf[16] = self.scale;
        buf
    }

    pub(crate) fn from_wire(buf: [u8; 17]) -> Result<Self, Malformed> {
        let mut mantissa = [0u8; 16];
        mantissa.copy_from_slice(&buf[..16]);
        let mantissa = i128::from_le_bytes(mantissa);
        let scale = buf[16];
        Self::new(mantissa, scale).ok_or(Malformed::InvalidDecimalScale(scale))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.mantissa < 0 { "-" } else { "" };
        let digits = self.mantissa.unsigned_abs().to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        let digits = format!("{digits:0>width$}", width = scale + 1);
        let (int_part, frac_part) = digits.split_at(digits.len() - scale);
        write!(f, "{sign}{int_part}.{frac_part}")
    }
}
