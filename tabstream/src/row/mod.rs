//! # Row group format
//!
//! ```text
//! struct RowGroup {
//!     frames:         [Frame; _],     // Unbounded. The count is never stored.
//!     end_marker:     u8 = 0,
//! }
//!
//! struct Frame {
//!     row_marker:     u8 = 1,
//!     frame_len:      varint,
//!     frame_body:     {
//!         null_bitmap:    [u8; ceil(column_count / 8)],
//!         values:         [Value; _], // Non-null columns only, in column order.
//!     }
//! }
//! ```
//!
//! Bit `i % 8` of bitmap byte `i / 8` is set iff column `i` is null.
//! With zero columns, a frame is just `01 00`.

mod null_bitmap;
mod row_r;
mod row_w;

pub use null_bitmap::*;
pub use row_r::*;
pub use row_w::*;

pub const ROW_MARKER_END: u8 = 0;
pub const ROW_MARKER_ROW: u8 = 1;
