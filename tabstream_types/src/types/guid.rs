use derive_more::{Deref, From};
use std::fmt;

/// A 128-bit globally unique identifier, kept as raw bytes.
#[derive(From, Deref, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct Guid([u8; 16]);

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if matches!(i, 4 | 6 | 8 | 10) {
                write!(f, "-")?;
            }
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}
