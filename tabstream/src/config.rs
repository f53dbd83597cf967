use tabstream_types::CodecError;

/// Knobs for one encode or decode session. There is no file or environment
/// lookup; callers construct this explicitly or take [`CodecConfig::default`].
///
/// The `max_*` limits apply on both sides: the decoder rejects a stream past them
/// as malformed, and the encoder refuses to write one with `CodecError::Oversized`.
#[derive(Clone, Copy, Debug)]
pub struct CodecConfig {
    /// Headers declaring more columns than this are rejected as malformed.
    pub max_column_count: u64,

    /// Column names longer than this many bytes are rejected as malformed.
    pub max_name_len: u64,

    /// Frames longer than this many bytes are rejected as malformed, before
    /// any buffer is grown for them. Bounds the cursor's memory.
    pub max_frame_len: u64,

    pub write_buffer_capacity: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_column_count: 1 << 16,
            max_name_len: 64 << 10,
            max_frame_len: 256 << 20,
            write_buffer_capacity: 8 << 10,
        }
    }
}

/// Rejects, at encode time, a length that the decoder's limit `what` would reject.
pub(crate) fn check_encode_len(
    what: &'static str,
    len: usize,
    limit: u64,
) -> Result<(), CodecError> {
    let len = len as u64;
    if len > limit {
        return Err(CodecError::Oversized { what, len, limit });
    }
    Ok(())
}
