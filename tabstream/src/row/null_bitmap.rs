use tabstream_types::Malformed;

/// Per-row null flags, one bit per column.
pub struct NullBitmap<'a> {
    bytes: &'a [u8],
}

impl<'a> NullBitmap<'a> {
    /// `bytes` must be exactly `ceil(col_ct / 8)` long. Padding bits past the
    /// last column must be clear.
    pub fn parse(bytes: &'a [u8], col_ct: usize) -> Result<Self, Malformed> {
        for bit_i in col_ct..bytes.len() * 8 {
            if Self::bit(bytes, bit_i) {
                return Err(Malformed::StrayNullBit(bit_i));
            }
        }
        Ok(Self { bytes })
    }

    pub fn is_null(&self, col_i: usize) -> bool {
        Self::bit(self.bytes, col_i)
    }

    pub fn set_null(bytes: &mut [u8], col_i: usize) {
        bytes[col_i / 8] |= 1 << (col_i % 8);
    }

    fn bit(bytes: &[u8], bit_i: usize) -> bool {
        bytes[bit_i / 8] & (1 << (bit_i % 8)) != 0
    }
}
