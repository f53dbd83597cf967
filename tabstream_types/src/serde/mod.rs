//! # Serialization format
//!
//! The primitive de/serializable type is [`Value`]. A `Value` is always
//! de/serialized against a [`TypeTag`] known from the schema, so values carry
//! no type byte of their own on the wire.
//!
//! The type tag is encoded in `u8`. Zero is never a valid tag.
//!
//! Some tags have fixed body lengths; these lengths are not encoded.
//! The other tags have dynamic body lengths, which are encoded as a varint
//! preceding the body.
//!
//! ```text
//! struct Value::{Bool, U8} {
//!     body:       [u8; 1],
//! }
//!
//! struct Value::{I16, I32, I64, F32, F64} {
//!     body:       [u8; 2 | 4 | 8],        // little-endian
//! }
//!
//! struct Value::Decimal {
//!     mantissa:   [u8; 16],               // i128, little-endian
//!     scale:      u8,                     // <= 28
//! }
//!
//! struct Value::DateTime {
//!     secs:       [u8; 8],                // i64 since the unix epoch
//!     nanos:      [u8; 4],                // u32, < 1e9; < 2e9 only in a leap second
//! }
//!
//! struct Value::TimeSpan {
//!     secs:       [u8; 8],                // i64, truncated toward zero
//!     nanos:      [u8; 4],                // i32, same sign as secs
//! }
//!
//! struct Value::Char {
//!     scalar:     [u8; 4],                // u32 Unicode scalar value
//! }
//!
//! struct Value::Guid {
//!     body:       [u8; 16],
//! }
//!
//! struct Value::Str or Value::Bytes {
//!     body_len:   varint,
//!     body:       [u8; body_len],
//! }
//! ```
//!
//! A leap second is the 59th second of a minute with `nanos` of 1e9 or more,
//! as chrono represents it.
//!
//! A varint is unsigned LEB128: seven bits per byte, low group first,
//! with `0x80` flagging that another byte follows. It is at most 10 bytes long.

mod lengths;
mod type_tag;
mod value;

pub use lengths::*;
pub use type_tag::*;
pub use value::*;
